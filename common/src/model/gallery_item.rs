use serde::{Deserialize, Serialize};

use crate::resource::{require, OrderBy, Resource, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-form filter label on the gallery page ("Weddings", "Corporate", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub image_url: String,
}

impl GalleryItem {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            title: None,
            category: None,
            image_url: image_url.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GalleryItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Resource for GalleryItem {
    const TABLE: &'static str = "gallery";
    const ORDER: OrderBy = OrderBy::newest_first();

    type Patch = GalleryItemPatch;

    fn validate(&self) -> Result<(), ValidationError> {
        require("image_url", &self.image_url)
    }
}
