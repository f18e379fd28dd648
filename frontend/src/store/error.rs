//! Failure type for every remote store call.
//!
//! The client never recovers from any of these. Each variant keeps the
//! underlying message so the calling screen can show it verbatim.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// PostgREST code for "single row expected, got zero or many".
pub const SINGLE_ROW_CODE: &str = "PGRST116";

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The request never produced a readable response.
    Transport(String),
    /// The store answered with an error body.
    Remote {
        status: u16,
        code: Option<String>,
        message: String,
        details: Option<String>,
        hint: Option<String>,
    },
    /// A single-row call matched `found` rows.
    RowCount { table: &'static str, found: usize },
    /// A payload could not be encoded or a row could not be decoded.
    Codec(String),
}

impl StoreError {
    /// Zero rows where exactly one was expected.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::RowCount { found, .. } => *found == 0,
            Self::Remote { code, details, .. } => {
                code.as_deref() == Some(SINGLE_ROW_CODE)
                    && details.as_deref().and_then(rows_in_details) == Some(0)
            }
            _ => false,
        }
    }

    /// The underlying failure text, without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Transport(message) | Self::Codec(message) => message.clone(),
            Self::Remote { message, .. } => message.clone(),
            Self::RowCount { table, found } => {
                format!("expected exactly one row in `{table}`, found {found}")
            }
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "store request failed: {message}"),
            Self::Remote {
                status,
                code,
                message,
                details,
                ..
            } => {
                write!(f, "store rejected request ({status}")?;
                if let Some(code) = code {
                    write!(f, " {code}")?;
                }
                write!(f, "): {message}")?;
                if let Some(details) = details {
                    write!(f, " ({details})")?;
                }
                Ok(())
            }
            Self::RowCount { .. } => f.write_str(&self.message()),
            Self::Codec(message) => write!(f, "invalid store payload: {message}"),
        }
    }
}

impl Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value.to_string())
    }
}

impl From<gloo_net::Error> for StoreError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// Row count from a PostgREST detail such as "The result contains 0 rows".
fn rows_in_details(details: &str) -> Option<u64> {
    let words: Vec<&str> = details.split_whitespace().collect();
    words
        .windows(2)
        .find(|pair| pair[1].trim_end_matches('.') == "rows")
        .and_then(|pair| pair[0].parse().ok())
}

/// Error body returned by PostgREST.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RemoteErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl RemoteErrorBody {
    /// Builds a `Remote` error from a raw response body, falling back to the
    /// text itself when it is not a PostgREST error object.
    pub(crate) fn into_error(status: u16, body: &str) -> StoreError {
        let parsed = serde_json::from_str::<RemoteErrorBody>(body).unwrap_or_default();
        let message = parsed.message.unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("HTTP {status}")
            } else {
                trimmed.to_string()
            }
        });
        StoreError::Remote {
            status,
            code: parsed.code,
            message,
            details: parsed.details,
            hint: parsed.hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RemoteErrorBody, StoreError};

    #[test]
    fn remote_body_is_parsed_into_fields() {
        let error = RemoteErrorBody::into_error(
            406,
            r#"{"code":"PGRST116","details":"The result contains 0 rows","hint":null,"message":"JSON object requested, multiple (or no) rows returned"}"#,
        );
        assert!(error.is_not_found());
        assert_eq!(
            error.message(),
            "JSON object requested, multiple (or no) rows returned"
        );
        assert!(error.to_string().contains("406 PGRST116"));
    }

    #[test]
    fn non_json_body_becomes_the_message() {
        let error = RemoteErrorBody::into_error(502, "Bad Gateway\n");
        assert_eq!(error.message(), "Bad Gateway");
        assert!(!error.is_not_found());

        let empty = RemoteErrorBody::into_error(500, "");
        assert_eq!(empty.message(), "HTTP 500");
    }

    #[test]
    fn ten_matching_rows_are_not_not_found() {
        let error = RemoteErrorBody::into_error(
            406,
            r#"{"code":"PGRST116","details":"The result contains 10 rows","hint":null,"message":"JSON object requested, multiple (or no) rows returned"}"#,
        );
        assert!(!error.is_not_found());

        let many = RemoteErrorBody::into_error(
            406,
            r#"{"code":"PGRST116","details":"The result contains 100 rows","message":"m"}"#,
        );
        assert!(!many.is_not_found());
    }

    #[test]
    fn many_rows_is_not_the_not_found_class() {
        let error = StoreError::RowCount {
            table: "faqs",
            found: 2,
        };
        assert!(!error.is_not_found());
        assert!(error.to_string().contains("found 2"));
    }
}
