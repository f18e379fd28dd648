//! Decorative particle layer drawn over the page.
//!
//! The component takes no props and emits nothing. The loop starts after the
//! first render (the canvas must exist) and stops in `destroy`, which also
//! removes the resize listener.

use yew::prelude::*;

mod state;

pub use state::ParticleBackground;

const CANVAS_STYLE: &str = "position:fixed;inset:0;pointer-events:none;z-index:10;mix-blend-mode:screen;";

impl Component for ParticleBackground {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ParticleBackground::new()
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <canvas
                class="particle-background"
                style={CANVAS_STYLE}
                aria-hidden="true"
                ref={self.canvas_ref.clone()}
            />
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.mount();
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.unmount();
    }
}
