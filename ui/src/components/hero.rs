use dioxus::prelude::*;

use crate::content::{self, Anchor};
use crate::context::use_language;

#[component]
pub fn Hero() -> Element {
    let hero = &content::tree(use_language()).hero;

    rsx! {
        section { id: Anchor::Home.id(), class: "hero",
            div { class: "hero__inner",
                div { class: "hero__copy",
                    span { class: "badge", "{hero.badge}" }
                    h1 { class: "hero__headline", "{hero.headline}" }
                    p { class: "hero__subheadline", "{hero.subheadline}" }
                    p { class: "hero__description", "{hero.description}" }
                    div { class: "hero__actions",
                        a { class: "button button--primary", href: Anchor::Services.href(), "{hero.cta_services}" }
                        a { class: "button button--ghost", href: Anchor::Contact.href(), "{hero.cta_contact}" }
                    }
                    ul { class: "hero__stats",
                        for stat in hero.stats.iter() {
                            li { class: "hero__stat",
                                span { class: "hero__stat-icon", aria_hidden: "true", "{stat.icon.glyph()}" }
                                span { class: "hero__stat-label", "{stat.label}" }
                            }
                        }
                    }
                }
                div {
                    class: "hero__visual",
                    role: "img",
                    aria_label: "{hero.image_alt}",
                }
            }
        }
    }
}
