//! Typed List/Get/Create/Update/Delete over one transport.
//!
//! # Responsibility
//! - Turn drafts and patches into table requests and rows back into records.
//! - Enforce the single-row expectation of `get`, `create` and `update`.
//!
//! # Invariants
//! - One call is one round trip; nothing is cached between calls.
//! - Failures are returned unchanged; nothing is retried.
//! - `id` and `created_at` never leave the client in a write payload.

use chrono::{SecondsFormat, Utc};
use common::model::InquiryStatus;
use common::{Record, RecordId, Resource, StatusTracked};
use log::{debug, warn};
use serde_json::Value;
use std::marker::PhantomData;
use std::rc::Rc;

use super::error::{StoreError, StoreResult};
use super::request::TableRequest;
use super::rest::RestTransport;
use super::transport::Transport;
use crate::config::StoreConfig;

/// Entry point to the remote tables; constructed once at startup.
#[derive(Debug)]
pub struct StoreClient<T> {
    transport: T,
}

impl<T: Transport> StoreClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Typed access to the table of `R`.
    pub fn resource<R: Resource>(&self) -> ResourceClient<'_, R, T> {
        ResourceClient {
            store: self,
            _resource: PhantomData,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one request and logs its failure before handing it back.
    pub async fn execute(&self, request: TableRequest) -> StoreResult<Vec<Value>> {
        let table = request.table;
        let op = request.operation.name();
        self.transport.execute(request).await.inspect_err(|err| {
            warn!("event=store_error table={table} op={op} error={err}");
        })
    }
}

impl StoreClient<RestTransport> {
    pub fn connect(config: &StoreConfig) -> Self {
        Self::new(RestTransport::new(config))
    }
}

/// Shared store handle for Yew context.
///
/// Two handles are equal when they point at the same client.
#[derive(Debug, Clone)]
pub struct StoreHandle(pub Rc<StoreClient<RestTransport>>);

impl StoreHandle {
    pub fn new(client: StoreClient<RestTransport>) -> Self {
        Self(Rc::new(client))
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for StoreHandle {
    type Target = StoreClient<RestTransport>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The five operations for one entity type.
pub struct ResourceClient<'a, R, T> {
    store: &'a StoreClient<T>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource, T: Transport> ResourceClient<'_, R, T> {
    /// All rows, ordered by `R::ORDER`.
    pub async fn list(&self) -> StoreResult<Vec<Record<R>>> {
        debug!("event=store_request table={} op=list", R::TABLE);
        let rows = self
            .store
            .execute(TableRequest::ordered(R::TABLE, R::ORDER))
            .await?;
        rows.into_iter().map(decode::<R>).collect()
    }

    /// Exactly one row; zero or many matches are an error.
    pub async fn get(&self, id: &RecordId) -> StoreResult<Record<R>> {
        debug!("event=store_request table={} op=get id={id}", R::TABLE);
        let rows = self.store.execute(TableRequest::by_id(R::TABLE, id)).await?;
        single::<R>(rows)
    }

    /// Stores a new row; the store assigns `id` and `created_at`.
    pub async fn create(&self, draft: &R) -> StoreResult<Record<R>> {
        debug!("event=store_request table={} op=create", R::TABLE);
        let row = serde_json::to_value(draft)?;
        let rows = self.store.execute(TableRequest::insert(R::TABLE, row)).await?;
        single::<R>(rows)
    }

    /// Changes only the fields present in `patch` and returns the whole row.
    pub async fn update(&self, id: &RecordId, patch: &R::Patch) -> StoreResult<Record<R>> {
        debug!("event=store_request table={} op=update id={id}", R::TABLE);
        let changes = patch_payload::<R>(patch)?;
        let rows = self
            .store
            .execute(TableRequest::update(R::TABLE, id, changes))
            .await?;
        single::<R>(rows)
    }

    /// Removes the row. Deleting an id that no longer exists succeeds.
    pub async fn delete(&self, id: &RecordId) -> StoreResult<()> {
        debug!("event=store_request table={} op=delete id={id}", R::TABLE);
        self.store.execute(TableRequest::delete(R::TABLE, id)).await?;
        Ok(())
    }
}

impl<R: StatusTracked, T: Transport> ResourceClient<'_, R, T> {
    /// Sets `status` and nothing else. Any status may replace any other.
    pub async fn update_status(
        &self,
        id: &RecordId,
        status: InquiryStatus,
    ) -> StoreResult<Record<R>> {
        self.update(id, &R::status_patch(status)).await
    }
}

/// Serializes a patch, adding `updated_at` for tables that track it.
pub(crate) fn patch_payload<R: Resource>(patch: &R::Patch) -> StoreResult<Value> {
    let mut changes = serde_json::to_value(patch)?;
    if R::STAMPS_UPDATED_AT {
        if let Value::Object(map) = &mut changes {
            map.insert(
                "updated_at".to_string(),
                Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            );
        }
    }
    Ok(changes)
}

fn decode<R: Resource>(row: Value) -> StoreResult<Record<R>> {
    serde_json::from_value(row).map_err(|err| {
        StoreError::Codec(format!("cannot read `{}` row: {err}", R::TABLE))
    })
}

fn single<R: Resource>(rows: Vec<Value>) -> StoreResult<Record<R>> {
    let found = rows.len();
    match <[Value; 1]>::try_from(rows) {
        Ok([row]) => decode::<R>(row),
        Err(_) => {
            let err = StoreError::RowCount {
                table: R::TABLE,
                found,
            };
            warn!("event=store_error table={} error={err}", R::TABLE);
            Err(err)
        }
    }
}
