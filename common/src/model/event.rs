use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resource::{require, OrderBy, Resource, ValidationError};

/// A past or upcoming event shown in the portfolio, listed by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Photo or video URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl Event {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: None,
            date,
            category: None,
            media: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Option<String>>,
}

impl Resource for Event {
    const TABLE: &'static str = "events";
    const ORDER: OrderBy = OrderBy::ascending("date");

    type Patch = EventPatch;

    // `date` is always present by construction.
    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)
    }
}
