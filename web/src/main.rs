use dioxus::prelude::*;

use ui::config::SiteConfig;
use ui::context::{use_site_provider, SenderHandle};
use ui::views::Landing;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
}

const SITE_JSON: &str = include_str!("../site.json");

fn main() {
    dioxus::launch(App);
}

fn sender(config: &SiteConfig) -> SenderHandle {
    if cfg!(feature = "relay") {
        SenderHandle::new(api::ServerRelay)
    } else {
        SenderHandle::new(ui::contact::SimulatedSender::new(config.send_delay_ms))
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| SiteConfig::load(Some(SITE_JSON)));
    let delay_config = config.clone();
    use_site_provider(config, move || sender(&delay_config));

    rsx! {
        Router::<Route> {}
    }
}
