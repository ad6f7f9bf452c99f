use dioxus::prelude::*;

use crate::content::{self, Anchor};
use crate::context::{use_language, use_language_controller};
use crate::core::Language;

fn scroll_to_top() {
    let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

#[component]
pub fn Footer() -> Element {
    let lang = use_language();
    let mut controller = use_language_controller();
    let tree = content::tree(lang);
    let footer = &tree.footer;

    let switch_label = |language: Language| match language {
        Language::En => footer.language_en.as_str(),
        Language::Ar => footer.language_ar.as_str(),
    };

    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__brand",
                    a { class: "navbar__brand", href: Anchor::Home.href(),
                        span { class: "navbar__brand-mark", "GPT" }
                        span { class: "navbar__brand-name", "{tree.site.brand}" }
                    }
                    p { "{footer.description}" }
                    div { class: "footer__languages",
                        for language in Language::ALL {
                            button {
                                key: "{language.code()}",
                                r#type: "button",
                                class: if language == lang { "footer__language footer__language--active" } else { "footer__language" },
                                aria_pressed: "{language == lang}",
                                onclick: move |_| controller.write().set_language(language),
                                "{switch_label(language)}"
                            }
                        }
                    }
                }

                nav { class: "footer__column",
                    h4 { "{footer.links_title}" }
                    ul {
                        for link in footer.links.iter() {
                            li { key: "{link.anchor.id()}",
                                a { href: link.anchor.href(), "{link.label}" }
                            }
                        }
                    }
                }

                div { class: "footer__column",
                    h4 { "{footer.services_title}" }
                    ul {
                        for service in footer.services.iter() {
                            li { "{service}" }
                        }
                    }
                }

                div { class: "footer__column",
                    h4 { "{footer.contact_title}" }
                    p { "{footer.address}" }
                    p {
                        strong { "{footer.phone_title} " }
                        a { href: "tel:{footer.phone}", dir: "ltr", "{footer.phone}" }
                    }
                    p {
                        strong { "{footer.email_title} " }
                        a { href: "mailto:{footer.email}", "{footer.email}" }
                    }
                }
            }

            div { class: "footer__bottom",
                p { "{footer.copyright}" }
                p { class: "footer__powered", "{footer.powered_by}" }
                button {
                    class: "button button--ghost footer__top",
                    r#type: "button",
                    onclick: move |_| scroll_to_top(),
                    "↑ {footer.back_to_top}"
                }
            }
        }
    }
}
