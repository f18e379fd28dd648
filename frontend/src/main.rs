use soiree_site::app::App;
use soiree_site::logging::{default_log_level, init_logging};

fn main() {
    if let Err(err) = init_logging(default_log_level()) {
        gloo_console::error!(err);
    }
    yew::Renderer::<App>::new().render();
}
