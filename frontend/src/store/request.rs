//! Transport-neutral description of one table call.

use common::{OrderBy, RecordId};
use serde_json::Value;

/// Column equality filter (`column = value`).
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: &'static str,
    pub value: String,
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<String>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }

    pub fn id(id: &RecordId) -> Self {
        Self::eq("id", id.as_str())
    }

    /// Whether a stored cell satisfies the filter. Non-string cells are
    /// compared through their JSON text, so `42` matches `"42"`.
    pub fn matches(&self, cell: Option<&Value>) -> bool {
        match cell {
            Some(Value::String(text)) => *text == self.value,
            Some(Value::Null) | None => false,
            Some(other) => other.to_string() == self.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Select {
        filter: Option<Filter>,
        order: Option<OrderBy>,
        limit: Option<u32>,
    },
    Insert {
        row: Value,
    },
    Update {
        filter: Filter,
        changes: Value,
    },
    Delete {
        filter: Filter,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Select { .. } => "select",
            Self::Insert { .. } => "insert",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// One round trip against one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRequest {
    pub table: &'static str,
    pub operation: Operation,
    /// The caller wants exactly one row back.
    pub expect_single: bool,
}

impl TableRequest {
    pub fn select(table: &'static str) -> Self {
        Self {
            table,
            operation: Operation::Select {
                filter: None,
                order: None,
                limit: None,
            },
            expect_single: false,
        }
    }

    pub fn ordered(table: &'static str, order: OrderBy) -> Self {
        Self {
            table,
            operation: Operation::Select {
                filter: None,
                order: Some(order),
                limit: None,
            },
            expect_single: false,
        }
    }

    pub fn by_id(table: &'static str, id: &RecordId) -> Self {
        Self {
            table,
            operation: Operation::Select {
                filter: Some(Filter::id(id)),
                order: None,
                limit: None,
            },
            expect_single: true,
        }
    }

    pub fn sample(table: &'static str, limit: u32) -> Self {
        Self {
            table,
            operation: Operation::Select {
                filter: None,
                order: None,
                limit: Some(limit),
            },
            expect_single: false,
        }
    }

    pub fn insert(table: &'static str, row: Value) -> Self {
        Self {
            table,
            operation: Operation::Insert { row },
            expect_single: true,
        }
    }

    pub fn update(table: &'static str, id: &RecordId, changes: Value) -> Self {
        Self {
            table,
            operation: Operation::Update {
                filter: Filter::id(id),
                changes,
            },
            expect_single: true,
        }
    }

    pub fn delete(table: &'static str, id: &RecordId) -> Self {
        Self {
            table,
            operation: Operation::Delete {
                filter: Filter::id(id),
            },
            expect_single: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Filter;
    use serde_json::json;

    #[test]
    fn filter_matches_text_and_numeric_cells() {
        let filter = Filter::eq("id", "42");
        assert!(filter.matches(Some(&json!("42"))));
        assert!(filter.matches(Some(&json!(42))));
        assert!(!filter.matches(Some(&json!(null))));
        assert!(!filter.matches(None));
    }
}
