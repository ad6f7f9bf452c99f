//! Shared state handed to the section components through Dioxus context.
//!
//! A launcher calls [`use_site_provider`] once in its root component; every
//! section below reads the active language with [`use_language`].

use std::rc::Rc;

use api::InquirySender;
use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::core::platform::EvalDocument;
use crate::core::{DocumentDirection, Language, LanguageController};

/// The contact-form sender chosen by the launcher.
#[derive(Clone)]
pub struct SenderHandle(Rc<dyn InquirySender>);

impl SenderHandle {
    pub fn new(sender: impl InquirySender + 'static) -> Self {
        Self(Rc::new(sender))
    }

    pub fn get(&self) -> &dyn InquirySender {
        self.0.as_ref()
    }
}

/// Installs the language controller, the site config and the sender.
///
/// The controller starts in `config.default_language` and keeps the host
/// document's `dir`/`lang` in step with it.
pub fn use_site_provider(config: SiteConfig, make_sender: impl FnOnce() -> SenderHandle) {
    let initial = config.default_language;
    let controller = use_signal(move || {
        LanguageController::new(initial).with_observer(DocumentDirection::new(EvalDocument))
    });
    use_context_provider(|| controller);
    use_context_provider(make_sender);
    use_context_provider(|| config);
}

pub fn use_language_controller() -> Signal<LanguageController> {
    use_context::<Signal<LanguageController>>()
}

/// Active language; subscribes the calling component to changes.
pub fn use_language() -> Language {
    use_language_controller().read().current()
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

pub fn use_sender() -> SenderHandle {
    use_context::<SenderHandle>()
}
