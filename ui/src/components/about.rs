use dioxus::prelude::*;

use crate::content::{self, Anchor};
use crate::context::use_language;

#[component]
pub fn About() -> Element {
    let about = &content::tree(use_language()).about;

    rsx! {
        section { id: Anchor::About.id(), class: "page about",
            div { class: "about__intro",
                div { class: "about__copy",
                    span { class: "badge", "{about.badge}" }
                    h2 { "{about.title}" }
                    p { class: "about__subtitle", "{about.subtitle}" }
                    p { "{about.description}" }
                    p { class: "about__mission", "{about.mission}" }
                }
                div {
                    class: "about__visual",
                    role: "img",
                    aria_label: "{about.image_alt}",
                    div { class: "about__licensed",
                        strong { "{about.licensed_title}" }
                        span { "{about.licensed_detail}" }
                    }
                }
            }

            header { class: "section-header",
                h3 { class: "section-header__title", "{about.advantages_title}" }
                p { class: "section-header__subtitle", "{about.advantages_subtitle}" }
            }
            ul { class: "card-grid card-grid--four",
                for advantage in about.advantages.iter() {
                    li { class: "card",
                        span { class: "card__icon", aria_hidden: "true", "{advantage.icon.glyph()}" }
                        h4 { class: "card__title", "{advantage.title}" }
                        p { class: "card__desc", "{advantage.desc}" }
                    }
                }
            }

            dl { class: "about__figures",
                for figure in about.figures.iter() {
                    div { class: "about__figure",
                        dt { class: "about__figure-number", "{figure.number}" }
                        dd { class: "about__figure-label", "{figure.label}" }
                    }
                }
            }
        }
    }
}
