//! State of the FAQ section.

use common::model::Faq;
use common::{Record, RecordId};
use yew::context::ContextHandle;

use crate::components::load_state::LoadState;
use crate::store::StoreHandle;

pub struct FaqSection {
    /// Entries in display order (`order_index` ascending).
    pub faqs: LoadState<Vec<Record<Faq>>>,

    /// The single expanded entry, if any.
    pub open: Option<RecordId>,

    /// Store taken from the surrounding `ContextProvider`; `None` when the
    /// section is rendered outside one.
    pub store: Option<StoreHandle>,

    /// Keeps the context subscription alive.
    pub _store_listener: Option<ContextHandle<StoreHandle>>,
}

impl FaqSection {
    pub fn new(store: Option<(StoreHandle, ContextHandle<StoreHandle>)>) -> Self {
        let (store, listener) = match store {
            Some((store, listener)) => (Some(store), Some(listener)),
            None => (None, None),
        };
        Self {
            faqs: LoadState::Loading,
            open: None,
            store,
            _store_listener: listener,
        }
    }

    pub fn is_open(&self, id: &RecordId) -> bool {
        self.open.as_ref() == Some(id)
    }

    pub fn toggle(&mut self, id: RecordId) {
        if self.is_open(&id) {
            self.open = None;
        } else {
            self.open = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FaqSection;
    use common::RecordId;

    #[test]
    fn only_one_entry_is_open_at_a_time() {
        let mut section = FaqSection::new(None);
        let first = RecordId::from("a");
        let second = RecordId::from("b");

        section.toggle(first.clone());
        assert!(section.is_open(&first));
        section.toggle(second.clone());
        assert!(section.is_open(&second) && !section.is_open(&first));
        section.toggle(second.clone());
        assert!(section.open.is_none());
    }
}
