use dioxus::prelude::*;

use crate::components::{About, ContactSection, Footer, Hero, Navigation, Services};
use crate::content;
use crate::context::use_language;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The whole site: one page, addressed by in-page anchors.
///
/// The wrapper carries `dir`/`lang` for the active language, so the layout
/// flips in the same render that swaps the text.
#[component]
pub fn Landing() -> Element {
    let lang = use_language();

    let catalog = match content::catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!("content failed to load: {err}");
            return rsx! {
                div { class: "content-error", role: "alert",
                    h1 { "Content unavailable" }
                    p { "{err}" }
                }
            };
        }
    };
    let site = &catalog.tree(lang).site;

    rsx! {
        document::Title { "{site.title}" }
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div {
            class: "site",
            dir: lang.direction().as_attr(),
            lang: lang.code(),
            Navigation {}
            main { class: "site__main",
                Hero {}
                Services {}
                About {}
                ContactSection {}
            }
            Footer {}
        }
    }
}
