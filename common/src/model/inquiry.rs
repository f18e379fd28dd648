use serde::{Deserialize, Serialize};

use super::contact_inquiry::{status_or_pending, InquiryStatus};
use crate::resource::{require, OrderBy, Resource, StatusTracked, ValidationError};

/// A quote request counted on the admin dashboard (`inquiries` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub message: String,
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: InquiryStatus,
}

impl Inquiry {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            message: message.into(),
            status: InquiryStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InquiryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InquiryStatus>,
}

impl Resource for Inquiry {
    const TABLE: &'static str = "inquiries";
    const ORDER: OrderBy = OrderBy::newest_first();

    type Patch = InquiryPatch;

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("message", &self.message)
    }
}

impl StatusTracked for Inquiry {
    fn status_patch(status: InquiryStatus) -> Self::Patch {
        InquiryPatch {
            status: Some(status),
            ..Default::default()
        }
    }
}
