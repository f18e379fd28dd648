use serde::{Deserialize, Serialize};

use crate::resource::{require, OrderBy, Resource, ValidationError};

/// An offering listed on the services page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon identifier picked in the admin form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Bullet points shown under the description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            icon: None,
            features: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServicePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Option<Vec<String>>>,
}

impl Resource for Service {
    const TABLE: &'static str = "services";
    const ORDER: OrderBy = OrderBy::newest_first();

    type Patch = ServicePatch;

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)
    }
}
