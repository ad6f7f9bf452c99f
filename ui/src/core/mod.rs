//! Platform-agnostic state: the language model, its controller and the
//! navigation menu.

pub mod controller;
pub mod language;
pub mod menu;
pub mod platform;
pub mod timing;

pub use controller::{DocumentDirection, DocumentHost, LanguageController, LanguageObserver};
pub use language::{Language, TextDirection, UnknownLanguage};
pub use menu::MenuState;
