use log::info;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::Faq;

use crate::components::load_state::LoadState;

use super::messages::Msg;
use super::state::FaqSection;

pub fn update(component: &mut FaqSection, ctx: &Context<FaqSection>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let Some(store) = component.store.clone() else {
                component.faqs = LoadState::Failed("store is not configured".to_string());
                return true;
            };
            component.faqs = LoadState::Loading;
            let link = ctx.link().clone();
            spawn_local(async move {
                match store.resource::<Faq>().list().await {
                    Ok(faqs) => link.send_message(Msg::Loaded(faqs)),
                    Err(err) => link.send_message(Msg::Failed(err.to_string())),
                }
            });
            true
        }
        Msg::Loaded(faqs) => {
            info!("event=faq_loaded count={}", faqs.len());
            if let Some(open) = &component.open {
                if !faqs.iter().any(|faq| &faq.id == open) {
                    component.open = None;
                }
            }
            component.faqs = LoadState::Loaded(faqs);
            true
        }
        Msg::Failed(message) => {
            component.faqs = LoadState::Failed(message);
            true
        }
        Msg::Toggle(id) => {
            component.toggle(id);
            true
        }
    }
}
