//! In-process stand-in for the remote store.
//!
//! Behaves like the hosted tables as far as the resource client can observe:
//! the store mints `id` (uuid v4) and `created_at` (RFC 3339, strictly
//! increasing), updates merge only the supplied columns, deletes of missing
//! rows succeed, and ordering follows Postgres (`NULL`s last ascending, first
//! descending). A failure can be armed to make every call fail until cleared.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use log::debug;
use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::error::{StoreError, StoreResult};
use super::request::{Filter, Operation, TableRequest};
use super::transport::Transport;
use common::{Direction, OrderBy};

type Row = Map<String, Value>;

#[derive(Debug, Default)]
pub struct MemoryTransport {
    tables: RefCell<BTreeMap<&'static str, Vec<Row>>>,
    last_created: Cell<Option<DateTime<Utc>>>,
    failure: RefCell<Option<String>>,
    requests: RefCell<Vec<TableRequest>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following call fail with a transport error carrying
    /// `message`, until [`MemoryTransport::clear_failure`].
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.borrow_mut() = Some(message.into());
    }

    pub fn clear_failure(&self) {
        self.failure.borrow_mut().take();
    }

    /// Inserts a raw row as-is, bypassing id and timestamp assignment.
    pub fn seed(&self, table: &'static str, row: Value) {
        if let Value::Object(row) = row {
            self.tables.borrow_mut().entry(table).or_default().push(row);
        }
    }

    pub fn row_count(&self, table: &str) -> usize {
        self.tables.borrow().get(table).map_or(0, Vec::len)
    }

    /// Every request executed so far, oldest first.
    pub fn requests(&self) -> Vec<TableRequest> {
        self.requests.borrow().clone()
    }

    fn next_created_at(&self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_created.get() {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_created.set(Some(stamp));
        stamp
    }

    fn select(
        &self,
        table: &'static str,
        filter: Option<&Filter>,
        order: Option<OrderBy>,
        limit: Option<u32>,
    ) -> Vec<Value> {
        let tables = self.tables.borrow();
        let mut rows: Vec<&Row> = tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| filter.map_or(true, |f| f.matches(row.get(f.column))))
                    .collect()
            })
            .unwrap_or_default();
        if let Some(order) = order {
            rows.sort_by(|a, b| compare_cells(a.get(order.column), b.get(order.column), order.direction));
        }
        let limit = limit.map_or(usize::MAX, |limit| limit as usize);
        rows.into_iter()
            .take(limit)
            .map(|row| Value::Object(row.clone()))
            .collect()
    }

    fn insert(&self, table: &'static str, row: Value) -> StoreResult<Vec<Value>> {
        let Value::Object(mut row) = row else {
            return Err(StoreError::Codec(format!(
                "insert into `{table}` expects a JSON object"
            )));
        };
        row.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        row.insert(
            "created_at".to_string(),
            Value::String(
                self.next_created_at()
                    .to_rfc3339_opts(SecondsFormat::Micros, true),
            ),
        );
        self.tables
            .borrow_mut()
            .entry(table)
            .or_default()
            .push(row.clone());
        Ok(vec![Value::Object(row)])
    }

    fn update(&self, table: &'static str, filter: &Filter, changes: Value) -> StoreResult<Vec<Value>> {
        let Value::Object(changes) = changes else {
            return Err(StoreError::Codec(format!(
                "update of `{table}` expects a JSON object"
            )));
        };
        let mut tables = self.tables.borrow_mut();
        let mut updated = Vec::new();
        for row in tables.entry(table).or_default().iter_mut() {
            if !filter.matches(row.get(filter.column)) {
                continue;
            }
            for (column, value) in &changes {
                // Identity columns are owned by the store.
                if column == "id" || column == "created_at" {
                    continue;
                }
                row.insert(column.clone(), value.clone());
            }
            updated.push(Value::Object(row.clone()));
        }
        Ok(updated)
    }

    fn delete(&self, table: &'static str, filter: &Filter) -> Vec<Value> {
        if let Some(rows) = self.tables.borrow_mut().get_mut(table) {
            rows.retain(|row| !filter.matches(row.get(filter.column)));
        }
        Vec::new()
    }
}

impl Transport for MemoryTransport {
    async fn execute(&self, request: TableRequest) -> StoreResult<Vec<Value>> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(message) = self.failure.borrow().clone() {
            return Err(StoreError::Transport(message));
        }
        debug!(
            "event=store_memory table={} op={}",
            request.table,
            request.operation.name()
        );

        let table = request.table;
        match request.operation {
            Operation::Select {
                filter,
                order,
                limit,
            } => Ok(self.select(table, filter.as_ref(), order, limit)),
            Operation::Insert { row } => self.insert(table, row),
            Operation::Update { filter, changes } => self.update(table, &filter, changes),
            Operation::Delete { filter } => Ok(self.delete(table, &filter)),
        }
    }
}

/// Postgres default ordering: `NULL` sorts as larger than any value.
fn compare_cells(a: Option<&Value>, b: Option<&Value>, direction: Direction) -> Ordering {
    let a = a.filter(|value| !value.is_null());
    let b = b.filter(|value| !value.is_null());
    let ascending = match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => compare_values(a, b),
    };
    match direction {
        Direction::Ascending => ascending,
        Direction::Descending => ascending.reverse(),
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => {
            match (DateTime::parse_from_rfc3339(a), DateTime::parse_from_rfc3339(b)) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => a.cmp(b),
            }
        }
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (a, b) => a.to_string().cmp(&b.to_string()),
    }
}
