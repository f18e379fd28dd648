use common::model::Faq;
use common::{Record, RecordId};

#[derive(Clone)]
pub enum Msg {
    /// (Re)fetch the FAQ list.
    Load,
    Loaded(Vec<Record<Faq>>),
    Failed(String),
    /// Expand the entry, or collapse it if it is already open.
    Toggle(RecordId),
}
