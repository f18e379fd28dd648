//! PostgREST transport over `fetch`.
//!
//! Every [`TableRequest`] becomes one HTTP call against
//! `{base}/rest/v1/{table}`:
//!
//! | Operation | Method   | Query                                   |
//! |-----------|----------|-----------------------------------------|
//! | Select    | `GET`    | `select=*`, `order=`, `<col>=eq.`, `limit=` |
//! | Insert    | `POST`   | `select=*`                              |
//! | Update    | `PATCH`  | `select=*`, `<col>=eq.`                 |
//! | Delete    | `DELETE` | `<col>=eq.`                             |
//!
//! Writes ask for `return=representation` so the stored rows come back in
//! the same round trip. Single-row calls send the PostgREST object media type,
//! which makes the store itself reject zero or multiple matches.

use gloo_net::http::{Request, RequestBuilder};
use log::debug;
use serde_json::Value;

use super::error::{RemoteErrorBody, StoreError, StoreResult};
use super::request::{Operation, TableRequest};
use super::transport::Transport;
use crate::config::StoreConfig;

const OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";
const ARRAY_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct RestTransport {
    rest_url: String,
    api_key: String,
    access_token: Option<String>,
}

impl RestTransport {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            rest_url: config.rest_url(),
            api_key: config.api_key.clone(),
            access_token: None,
        }
    }

    /// Sends a signed-in session token as bearer instead of the anon key.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    fn bearer(&self) -> String {
        format!(
            "Bearer {}",
            self.access_token.as_deref().unwrap_or(&self.api_key)
        )
    }

    fn builder(&self, request: &TableRequest) -> RequestBuilder {
        let url = self.table_url(request.table);
        let builder = match request.operation {
            Operation::Select { .. } => Request::get(&url),
            Operation::Insert { .. } => Request::post(&url),
            Operation::Update { .. } => Request::patch(&url),
            Operation::Delete { .. } => Request::delete(&url),
        };
        let builder = builder
            .query(query_pairs(request))
            .header("apikey", &self.api_key)
            .header("Authorization", &self.bearer())
            .header("Accept", accept_header(request));
        match request.operation {
            Operation::Insert { .. } | Operation::Update { .. } => {
                builder.header("Prefer", "return=representation")
            }
            _ => builder,
        }
    }
}

impl Transport for RestTransport {
    async fn execute(&self, request: TableRequest) -> StoreResult<Vec<Value>> {
        debug!(
            "event=store_http table={} op={}",
            request.table,
            request.operation.name()
        );
        let builder = self.builder(&request);
        let prepared = match &request.operation {
            Operation::Insert { row } => builder.json(row)?,
            Operation::Update { changes, .. } => builder.json(changes)?,
            _ => builder.build()?,
        };

        let response = prepared.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !response.ok() {
            return Err(RemoteErrorBody::into_error(status, &body));
        }
        parse_rows(&body)
    }
}

/// Query-string pairs for a request, in a stable order.
pub(crate) fn query_pairs(request: &TableRequest) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    match &request.operation {
        Operation::Select {
            filter,
            order,
            limit,
        } => {
            pairs.push(("select", "*".to_string()));
            if let Some(filter) = filter {
                pairs.push((filter.column, format!("eq.{}", filter.value)));
            }
            if let Some(order) = order {
                pairs.push((
                    "order",
                    format!("{}.{}", order.column, order.direction.as_str()),
                ));
            }
            if let Some(limit) = limit {
                pairs.push(("limit", limit.to_string()));
            }
        }
        Operation::Insert { .. } => pairs.push(("select", "*".to_string())),
        Operation::Update { filter, .. } => {
            pairs.push(("select", "*".to_string()));
            pairs.push((filter.column, format!("eq.{}", filter.value)));
        }
        Operation::Delete { filter } => {
            pairs.push((filter.column, format!("eq.{}", filter.value)));
        }
    }
    pairs
}

pub(crate) fn accept_header(request: &TableRequest) -> &'static str {
    if request.expect_single {
        OBJECT_MEDIA_TYPE
    } else {
        ARRAY_MEDIA_TYPE
    }
}

/// Normalizes a success body to a row list: arrays pass through, a single
/// object becomes one row, an empty body (e.g. `204` on delete) is no rows.
pub(crate) fn parse_rows(body: &str) -> StoreResult<Vec<Value>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(body)? {
        Value::Array(rows) => Ok(rows),
        row @ Value::Object(_) => Ok(vec![row]),
        other => Err(StoreError::Codec(format!(
            "expected a row or a row list, got `{other}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{accept_header, parse_rows, query_pairs, RestTransport};
    use crate::config::StoreConfig;
    use crate::store::request::TableRequest;
    use common::model::{Event, Faq};
    use common::{RecordId, Resource};
    use serde_json::json;

    fn transport() -> RestTransport {
        let config = StoreConfig::new("https://abc.supabase.co", "anon").unwrap();
        RestTransport::new(&config)
    }

    #[test]
    fn list_query_selects_all_and_orders() {
        let pairs = query_pairs(&TableRequest::ordered(Faq::TABLE, Faq::ORDER));
        assert_eq!(
            pairs,
            vec![
                ("select", "*".to_string()),
                ("order", "order_index.asc".to_string())
            ]
        );

        let pairs = query_pairs(&TableRequest::ordered(Event::TABLE, Event::ORDER));
        assert_eq!(pairs[1], ("order", "date.asc".to_string()));
    }

    #[test]
    fn get_query_filters_by_id_and_asks_for_one_object() {
        let request = TableRequest::by_id("blogs", &RecordId::from("7"));
        assert_eq!(
            query_pairs(&request),
            vec![("select", "*".to_string()), ("id", "eq.7".to_string())]
        );
        assert_eq!(accept_header(&request), "application/vnd.pgrst.object+json");
    }

    #[test]
    fn delete_query_only_filters() {
        let request = TableRequest::delete("gallery", &RecordId::from("g1"));
        assert_eq!(query_pairs(&request), vec![("id", "eq.g1".to_string())]);
        assert_eq!(accept_header(&request), "application/json");
    }

    #[test]
    fn bearer_prefers_session_token() {
        let anon = transport();
        assert_eq!(anon.bearer(), "Bearer anon");
        assert_eq!(anon.table_url("faqs"), "https://abc.supabase.co/rest/v1/faqs");

        let signed_in = transport().with_access_token("session-jwt");
        assert_eq!(signed_in.bearer(), "Bearer session-jwt");
    }

    #[test]
    fn parse_rows_normalizes_bodies() {
        assert!(parse_rows("").unwrap().is_empty());
        assert_eq!(parse_rows(r#"{"id":"a"}"#).unwrap(), vec![json!({"id": "a"})]);
        assert_eq!(parse_rows(r#"[{"id":"a"},{"id":"b"}]"#).unwrap().len(), 2);
        assert!(parse_rows("42").is_err());
    }
}
