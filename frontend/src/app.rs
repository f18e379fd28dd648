use log::{error, info};
use yew::{html, Component, Context, ContextProvider, Html};

use crate::components::{FaqSection, ParticleBackground};
use crate::config::{ConfigError, StoreConfig};
use crate::store::{StoreClient, StoreHandle};

/// Root component: owns the store client and provides it to the page.
pub struct App {
    store: Result<StoreHandle, ConfigError>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let store = StoreConfig::from_build_env()
            .map(|config| {
                info!("event=store_configured url={}", config.rest_url());
                StoreHandle::new(StoreClient::connect(&config))
            })
            .inspect_err(|err| error!("event=store_config_error error={err}"));
        Self { store }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let content = match &self.store {
            Ok(store) => html! {
                <ContextProvider<StoreHandle> context={store.clone()}>
                    <FaqSection />
                </ContextProvider<StoreHandle>>
            },
            Err(err) => html! {
                <p class="config-error" role="alert">{ err.to_string() }</p>
            },
        };

        html! {
            <main>
                <ParticleBackground />
                { content }
            </main>
        }
    }
}
