//! Table-level description of an entity.
//!
//! A [`Resource`] is the draft shape of a row: the fields a caller may set.
//! The store adds `id` and `created_at`, and the pair comes back as a
//! [`Record`]. Neither of those two columns is ever part of a draft or a
//! patch, so the type system keeps callers from supplying them.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::model::contact_inquiry::InquiryStatus;

/// Sort direction of a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// PostgREST spelling, as used in `order=<column>.<dir>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Column and direction a table is listed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub direction: Direction,
}

impl OrderBy {
    pub const fn ascending(column: &'static str) -> Self {
        Self {
            column,
            direction: Direction::Ascending,
        }
    }

    pub const fn descending(column: &'static str) -> Self {
        Self {
            column,
            direction: Direction::Descending,
        }
    }

    /// Newest first; the default for most tables.
    pub const fn newest_first() -> Self {
        Self::descending("created_at")
    }
}

/// Opaque row identifier assigned by the store.
///
/// Stores hand out either uuids or serial integers. Both are kept as text so
/// callers never depend on the column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Integer(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Integer(number) => Self(number.to_string()),
        })
    }
}

/// A stored row: store-assigned identity plus the entity's fields.
///
/// `id` and `created_at` are read-only once the store has echoed them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<R> {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: R,
}

/// A draft failed the checks a form runs before `create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace only.
    MissingField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is empty"),
        }
    }
}

impl Error for ValidationError {}

/// Returns `MissingField` when `value` is blank.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// One remote table and the draft shape of its rows.
pub trait Resource: Serialize + DeserializeOwned + Clone + Debug + PartialEq + 'static {
    /// Table name in the remote store.
    const TABLE: &'static str;
    /// Ordering applied by `list`.
    const ORDER: OrderBy;
    /// Whether updates also stamp an `updated_at` column.
    const STAMPS_UPDATED_AT: bool = false;

    /// Partial update payload; `None` fields are left out of the request.
    type Patch: Serialize + Default + Clone + Debug;

    /// Checks the fields a form must fill in before the draft is created.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Entities carrying an [`InquiryStatus`] column.
pub trait StatusTracked: Resource {
    fn status_patch(status: InquiryStatus) -> Self::Patch;
}

#[cfg(test)]
mod tests {
    use super::{require, Direction, OrderBy, RecordId, ValidationError};

    #[test]
    fn record_id_accepts_text_and_integer_columns() {
        let text: RecordId = serde_json::from_str("\"4c1d\"").unwrap();
        let number: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(text.as_str(), "4c1d");
        assert_eq!(number.as_str(), "42");
        assert_eq!(serde_json::to_string(&number).unwrap(), "\"42\"");
    }

    #[test]
    fn require_rejects_whitespace() {
        assert_eq!(
            require("title", "   "),
            Err(ValidationError::MissingField("title"))
        );
        assert!(require("title", "Spring gala").is_ok());
    }

    #[test]
    fn newest_first_orders_by_creation_descending() {
        let order = OrderBy::newest_first();
        assert_eq!(order.column, "created_at");
        assert_eq!(order.direction, Direction::Descending);
        assert_eq!(order.direction.as_str(), "desc");
    }
}
