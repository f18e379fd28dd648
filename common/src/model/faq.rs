use serde::{Deserialize, Serialize};

use crate::resource::{require, OrderBy, Resource, ValidationError};

/// A question/answer pair on the FAQ page.
///
/// The page lists FAQs by `order_index`, which the admin sets by hand. Rows
/// without an index sort after all indexed rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: None,
            order_index: None,
        }
    }

    pub fn with_order(mut self, order_index: i32) -> Self {
        self.order_index = Some(order_index);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FaqPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<Option<i32>>,
}

impl Resource for Faq {
    const TABLE: &'static str = "faqs";
    const ORDER: OrderBy = OrderBy::ascending("order_index");
    const STAMPS_UPDATED_AT: bool = true;

    type Patch = FaqPatch;

    fn validate(&self) -> Result<(), ValidationError> {
        require("question", &self.question)?;
        require("answer", &self.answer)
    }
}
