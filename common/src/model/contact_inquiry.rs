//! Messages sent through the contact form (`contacts` table) and the status
//! vocabulary shared with [`super::inquiry::Inquiry`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::resource::{require, OrderBy, Resource, StatusTracked, ValidationError};

/// Follow-up state of an inquiry.
///
/// Any value may replace any other; the admin screen picks freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    Pending,
    Contacted,
    Resolved,
}

impl InquiryStatus {
    pub const ALL: [InquiryStatus; 3] = [Self::Pending, Self::Contacted, Self::Resolved];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Resolved => "resolved",
        }
    }
}

impl Display for InquiryStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "contacted" => Ok(Self::Contacted),
            "resolved" => Ok(Self::Resolved),
            other => Err(format!(
                "unknown inquiry status `{other}`; expected pending|contacted|resolved"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Rows written before the column existed come back as `null`.
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: InquiryStatus,
}

impl ContactInquiry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
            subject: None,
            message: None,
            status: InquiryStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactInquiryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InquiryStatus>,
}

impl Resource for ContactInquiry {
    const TABLE: &'static str = "contacts";
    const ORDER: OrderBy = OrderBy::newest_first();

    type Patch = ContactInquiryPatch;

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)
    }
}

impl StatusTracked for ContactInquiry {
    fn status_patch(status: InquiryStatus) -> Self::Patch {
        ContactInquiryPatch {
            status: Some(status),
            ..Default::default()
        }
    }
}

pub(crate) fn status_or_pending<'de, D>(deserializer: D) -> Result<InquiryStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<InquiryStatus>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{ContactInquiry, InquiryStatus};

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(" Contacted ".parse::<InquiryStatus>(), Ok(InquiryStatus::Contacted));
        assert!("archived".parse::<InquiryStatus>().is_err());
    }

    #[test]
    fn null_status_reads_as_pending() {
        let inquiry: ContactInquiry =
            serde_json::from_str(r#"{"name":"Ada","status":null}"#).unwrap();
        assert_eq!(inquiry.status, InquiryStatus::Pending);
    }
}
