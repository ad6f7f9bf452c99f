use dioxus::prelude::*;

use crate::content::{self, Anchor, ServiceGroup};
use crate::context::use_language;

#[component]
pub fn Services() -> Element {
    let services = &content::tree(use_language()).services;

    rsx! {
        section { id: Anchor::Services.id(), class: "page services",
            header { class: "section-header",
                h2 { class: "section-header__title", "{services.title}" }
                p { class: "section-header__subtitle", "{services.subtitle}" }
            }
            ServiceBlock { group: services.inbound.clone(), reversed: false }
            ServiceBlock { group: services.outbound.clone(), reversed: true }
        }
    }
}

/// One service family: intro copy beside a visual, then the card grid.
#[component]
fn ServiceBlock(group: ServiceGroup, reversed: bool) -> Element {
    let class = if reversed {
        "service-block service-block--reversed"
    } else {
        "service-block"
    };

    rsx! {
        div { id: group.anchor.id(), class: "{class}",
            div { class: "service-block__intro",
                div { class: "service-block__copy",
                    h3 { class: "service-block__title", "{group.title}" }
                    p { class: "service-block__subtitle", "{group.subtitle}" }
                    p { "{group.description}" }
                    a { class: "button button--accent", href: Anchor::Contact.href(), "{group.cta}" }
                }
                div {
                    class: "service-block__visual",
                    role: "img",
                    aria_label: "{group.image_alt}",
                }
            }
            ul { class: "card-grid",
                for item in group.items.iter() {
                    li { class: "card",
                        span { class: "card__icon", aria_hidden: "true", "{item.icon.glyph()}" }
                        h4 { class: "card__title", "{item.title}" }
                        p { class: "card__desc", "{item.desc}" }
                    }
                }
            }
        }
    }
}
