//! Page-wide language state.
//!
//! `LanguageController` is the single source of truth for the active
//! [`Language`]. It knows nothing about the host document: changes are
//! pushed synchronously to registered [`LanguageObserver`]s, and the one
//! observer that touches the document is [`DocumentDirection`].

use super::language::{Language, TextDirection};

/// Receives every language change, including re-selection of the current one.
pub trait LanguageObserver {
    fn language_changed(&mut self, language: Language);
}

/// The document-level attributes the site controls.
pub trait DocumentHost {
    fn set_direction(&mut self, direction: TextDirection);
    fn set_lang(&mut self, code: &str);
}

/// Applies `dir` and `lang` to the host document for each change.
pub struct DocumentDirection<H> {
    host: H,
}

impl<H: DocumentHost> DocumentDirection<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }
}

impl<H: DocumentHost> LanguageObserver for DocumentDirection<H> {
    fn language_changed(&mut self, language: Language) {
        self.host.set_direction(language.direction());
        self.host.set_lang(language.code());
    }
}

pub struct LanguageController {
    current: Language,
    observers: Vec<Box<dyn LanguageObserver>>,
}

impl LanguageController {
    pub fn new(initial: Language) -> Self {
        Self {
            current: initial,
            observers: Vec::new(),
        }
    }

    /// Registers an observer and brings it in line with the current state.
    pub fn observe(&mut self, mut observer: impl LanguageObserver + 'static) {
        observer.language_changed(self.current);
        self.observers.push(Box::new(observer));
    }

    pub fn with_observer(mut self, observer: impl LanguageObserver + 'static) -> Self {
        self.observe(observer);
        self
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Switches language and notifies observers before returning, so nothing
    /// can read the new language while the document still has the old direction.
    pub fn set_language(&mut self, language: Language) {
        if language != self.current {
            tracing::info!(from = %self.current, to = %language, "switching language");
        }
        self.current = language;
        for observer in &mut self.observers {
            observer.language_changed(language);
        }
    }
}

impl Default for LanguageController {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl std::fmt::Debug for LanguageController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageController")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default, Clone)]
    struct RecordingHost {
        log: Rc<RefCell<Vec<(String, String)>>>,
        dir: Rc<RefCell<Option<TextDirection>>>,
    }

    impl DocumentHost for RecordingHost {
        fn set_direction(&mut self, direction: TextDirection) {
            *self.dir.borrow_mut() = Some(direction);
            self.log
                .borrow_mut()
                .push(("dir".into(), direction.as_attr().into()));
        }

        fn set_lang(&mut self, code: &str) {
            self.log.borrow_mut().push(("lang".into(), code.into()));
        }
    }

    fn entry(attr: &str, value: &str) -> (String, String) {
        (attr.to_string(), value.to_string())
    }

    fn controller() -> (LanguageController, RecordingHost) {
        let host = RecordingHost::default();
        let ctl = LanguageController::new(Language::En)
            .with_observer(DocumentDirection::new(host.clone()));
        (ctl, host)
    }

    #[test]
    fn registering_applies_current_state() {
        let (_ctl, host) = controller();
        assert_eq!(*host.dir.borrow(), Some(TextDirection::Ltr));
        assert_eq!(*host.log.borrow(), vec![entry("dir", "ltr"), entry("lang", "en")]);
    }

    #[test]
    fn arabic_sets_rtl_and_lang() {
        let (mut ctl, host) = controller();
        ctl.set_language(Language::Ar);

        assert_eq!(ctl.current(), Language::Ar);
        assert_eq!(*host.dir.borrow(), Some(TextDirection::Rtl));
        assert_eq!(host.log.borrow().last(), Some(&entry("lang", "ar")));
    }

    #[test]
    fn back_to_english_restores_ltr() {
        let (mut ctl, host) = controller();
        ctl.set_language(Language::Ar);
        ctl.set_language(Language::En);
        assert_eq!(*host.dir.borrow(), Some(TextDirection::Ltr));
        assert_eq!(host.log.borrow().last(), Some(&entry("lang", "en")));
    }

    #[test]
    fn reselecting_same_language_still_notifies() {
        let (mut ctl, host) = controller();
        ctl.set_language(Language::Ar);
        let before = host.log.borrow().len();
        ctl.set_language(Language::Ar);

        let log = host.log.borrow();
        assert_eq!(log.len(), before + 2);
        assert_eq!(log[before], entry("dir", "rtl"));
        assert_eq!(*host.dir.borrow(), Some(TextDirection::Rtl));
    }

    #[test]
    fn every_observer_sees_the_change() {
        struct Count(Rc<RefCell<Vec<Language>>>);
        impl LanguageObserver for Count {
            fn language_changed(&mut self, language: Language) {
                self.0.borrow_mut().push(language);
            }
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut ctl = LanguageController::default();
        ctl.observe(Count(seen.clone()));
        ctl.set_language(Language::Ar);

        assert_eq!(seen.borrow().as_slice(), &[Language::En, Language::Ar]);
    }
}
