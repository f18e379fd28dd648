//! Public FAQ list read through the store client.
//!
//! The store handle comes from the `ContextProvider<StoreHandle>` set up by
//! the app. The list loads after the first render and on "Retry"; one entry
//! is expanded at a time.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::FaqSection;

use crate::store::StoreHandle;

impl Component for FaqSection {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        FaqSection::new(ctx.link().context::<StoreHandle>(Callback::noop()))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }
}
