use serde_json::Value;

use super::error::StoreResult;
use super::request::TableRequest;

/// Executes table requests against some backing store.
///
/// Implementations return the affected rows as JSON objects: the selected
/// rows, the inserted or updated rows, or nothing for deletes. A transport
/// may let the store enforce `expect_single`; the resource client checks the
/// row count again either way.
/// Futures are not `Send`: everything runs on the page's event loop.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(&self, request: TableRequest) -> StoreResult<Vec<Value>>;
}
