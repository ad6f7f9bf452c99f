use dioxus::prelude::*;

use crate::content::{self, Anchor, NavContent};
use crate::context::{use_language, use_language_controller};
use crate::core::{Language, MenuState};

// Navbar stylesheet (inlined as well in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

fn nav_links(nav: &NavContent) -> [(Anchor, &str); 4] {
    [
        (Anchor::Home, nav.home.as_str()),
        (Anchor::Services, nav.services.as_str()),
        (Anchor::About, nav.about.as_str()),
        (Anchor::Contact, nav.contact.as_str()),
    ]
}

fn service_links(nav: &NavContent) -> [(Anchor, &str); 2] {
    [
        (Anchor::Inbound, nav.inbound.as_str()),
        (Anchor::Outbound, nav.outbound.as_str()),
    ]
}

/// Fixed top bar: brand, section links with the services dropdown, the
/// EN/AR switch and the compact menu for narrow screens.
#[component]
pub fn Navigation() -> Element {
    let lang = use_language();
    let mut menu = use_signal(MenuState::default);

    let tree = content::tree(lang);
    let nav = &tree.nav;
    let menu_open = menu().is_open();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: Anchor::Home.href(),
                    span {
                        class: "navbar__brand-mark",
                        role: "img",
                        aria_label: "{nav.logo_alt}",
                        "GPT"
                    }
                    span { class: "navbar__brand-name", "{tree.site.brand}" }
                }

                nav { class: "navbar__links",
                    for (anchor, label) in nav_links(nav) {
                        if anchor == Anchor::Services {
                            div { key: "{anchor.id()}", class: "navbar__dropdown",
                                a { class: "navbar__link", href: anchor.href(), "{label} ▾" }
                                div { class: "navbar__dropdown-menu",
                                    for (sub, sub_label) in service_links(nav) {
                                        a {
                                            key: "{sub.id()}",
                                            class: "navbar__dropdown-link",
                                            href: sub.href(),
                                            "{sub_label}"
                                        }
                                    }
                                }
                            }
                        } else {
                            a {
                                key: "{anchor.id()}",
                                class: "navbar__link",
                                href: anchor.href(),
                                "{label}"
                            }
                        }
                    }
                }

                div { class: "navbar__actions",
                    LanguageSwitch { label: nav.language_label.clone() }
                    a {
                        class: "button button--primary navbar__quote",
                        href: Anchor::Contact.href(),
                        "{nav.get_quote}"
                    }
                    button {
                        class: "navbar__toggle",
                        r#type: "button",
                        aria_label: "{nav.menu_toggle}",
                        aria_expanded: "{menu_open}",
                        onclick: move |_| menu.write().toggle(),
                        "{menu().toggle_glyph()}"
                    }
                }
            }

            if menu_open {
                nav { class: "navbar__menu",
                    for (anchor, label) in nav_links(nav).into_iter().chain(service_links(nav)) {
                        a {
                            key: "{anchor.id()}",
                            class: "navbar__menu-link",
                            href: anchor.href(),
                            onclick: move |_| menu.write().close(),
                            "{label}"
                        }
                    }
                    a {
                        class: "button button--primary navbar__menu-quote",
                        href: Anchor::Contact.href(),
                        onclick: move |_| menu.write().close(),
                        "{nav.get_quote}"
                    }
                }
            }
        }
    }
}

/// EN / AR buttons; the active one is marked pressed.
#[component]
fn LanguageSwitch(label: String) -> Element {
    let mut controller = use_language_controller();
    let current = controller.read().current();

    rsx! {
        div { class: "navbar__locale", role: "group", aria_label: "{label}",
            for language in Language::ALL {
                button {
                    key: "{language.code()}",
                    r#type: "button",
                    class: if language == current { "navbar__locale-button navbar__locale-button--active" } else { "navbar__locale-button" },
                    title: language.native_name(),
                    aria_pressed: "{language == current}",
                    onclick: move |_| controller.write().set_language(language),
                    "{language.short_label()}"
                }
            }
        }
    }
}
