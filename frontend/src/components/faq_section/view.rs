use yew::prelude::*;

use crate::components::load_state::LoadState;

use super::messages::Msg;
use super::state::FaqSection;

pub fn view(component: &FaqSection, ctx: &Context<FaqSection>) -> Html {
    let link = ctx.link();
    let body = match &component.faqs {
        LoadState::Loading => html! {
            <p class="faq-status">{ "Loading questions…" }</p>
        },
        LoadState::Failed(message) => html! {
            <div class="faq-status faq-error" role="alert">
                <p>{ format!("Could not load questions: {message}") }</p>
                <button onclick={link.callback(|_| Msg::Load)}>{ "Retry" }</button>
            </div>
        },
        LoadState::Loaded(faqs) if faqs.is_empty() => html! {
            <p class="faq-status">{ "No questions yet." }</p>
        },
        LoadState::Loaded(faqs) => html! {
            <ul class="faq-list">
                { for faqs.iter().map(|faq| {
                    let id = faq.id.clone();
                    let open = component.is_open(&faq.id);
                    html! {
                        <li class={classes!("faq-item", open.then_some("open"))} key={faq.id.to_string()}>
                            <button
                                class="faq-question"
                                aria-expanded={open.to_string()}
                                onclick={link.callback(move |_| Msg::Toggle(id.clone()))}
                            >
                                { faq.data.question.clone() }
                            </button>
                            if open {
                                <p class="faq-answer">{ faq.data.answer.clone() }</p>
                            }
                        </li>
                    }
                }) }
            </ul>
        },
    };

    html! {
        <section class="faq-section" id="faq">
            <h2>{ "Frequently asked questions" }</h2>
            { body }
        </section>
    }
}
