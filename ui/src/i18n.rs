//! Internationalization (i18n) support for `gpt-travel-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading into one `FluentLanguageLoader` per language)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/gpt-travel-ui.ftl   (reference)
//!   ar-AE/gpt-travel-ui.ftl
//! ```
//!
//! Unlike a single switchable loader, each [`Language`] gets its own loader
//! whose only fallback is itself. Content for both languages can then be
//! resolved side by side, and a message missing from one locale is an error
//! at load time instead of an English string inside an Arabic page.
//!
//! Usage:
//! ```ignore
//! use crate::core::Language;
//! let home = crate::t!(Language::Ar, "nav-home");
//! ```
//!
//! To add a message:
//! 1. Add it to `en-US/gpt-travel-ui.ftl` (the `fl!` check reads this file).
//! 2. Add the same id to every other locale.
//! 3. Run tests; `check_parity` and the completeness tests cover the rest.
use std::collections::BTreeSet;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::OnceCell;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::content::ContentError;
use crate::core::Language;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Localized lookup for a given [`Language`].
/// Examples:
///     t!(Language::En, "nav-home")
///     t!(lang, "contact-submit")
///
/// Expands to `fl!(loader(lang), ...)`, so the message id is checked at
/// compile time against the reference locale.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
}

/// Fluent "domain" (matches the crate and the FTL filename in every locale).
const DOMAIN: &str = "gpt-travel-ui";

/// Locale every other locale is compared against.
pub const REFERENCE: Language = Language::En;

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// One loader per supported language.
pub struct Loaders {
    en: FluentLanguageLoader,
    ar: FluentLanguageLoader,
}

impl Loaders {
    /// Loads both bundles and verifies they define the same messages.
    pub fn load() -> Result<Self, ContentError> {
        let loaders = Self {
            en: load_language(Language::En)?,
            ar: load_language(Language::Ar)?,
        };
        check_parity()?;

        // The files agree; make sure nothing was dropped while parsing
        // (Fluent skips malformed entries instead of failing).
        let reference = message_ids(REFERENCE)?;
        for lang in Language::ALL {
            let loader = loaders.get(lang);
            if let Some(key) = reference.iter().find(|id| !loader.has(id)) {
                return Err(ContentError::MissingContent {
                    language: lang,
                    key: key.clone(),
                });
            }
        }

        tracing::debug!(messages = reference.len(), "[i18n] bundles loaded");
        Ok(loaders)
    }

    pub fn get(&self, lang: Language) -> &FluentLanguageLoader {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

static LOADERS: OnceCell<Loaders> = OnceCell::new();

/// Load the bundles once, reporting authoring defects as errors.
pub fn try_init() -> Result<&'static Loaders, ContentError> {
    LOADERS.get_or_try_init(Loaders::load)
}

/// Initialize i18n (idempotent).
///
/// Mismatched locale files are an authoring bug, not a runtime condition,
/// so this aborts with the offending message id.
pub fn init() {
    if let Err(err) = try_init() {
        panic!("[i18n] localization bundles are inconsistent: {err}");
    }
}

/// Loader for `lang`; used by the `t!` macro.
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    match try_init() {
        Ok(loaders) => loaders.get(lang),
        Err(err) => panic!("[i18n] localization bundles are inconsistent: {err}"),
    }
}

fn load_language(lang: Language) -> Result<FluentLanguageLoader, ContentError> {
    let id: LanguageIdentifier = lang
        .locale()
        .parse()
        .map_err(|_| ContentError::InvalidLocale(lang.locale()))?;
    let loader = FluentLanguageLoader::new(DOMAIN, id.clone());
    i18n_embed::select(&loader, &Localizations, &[id])?;
    Ok(loader)
}

/// Message ids defined in the embedded resource for `lang`.
pub fn message_ids(lang: Language) -> Result<BTreeSet<String>, ContentError> {
    let path = format!("{}/{DOMAIN}.ftl", lang.locale());
    let file = Localizations::get(&path).ok_or_else(|| ContentError::MissingResource {
        language: lang,
        path: path.clone(),
    })?;
    Ok(parse_message_ids(&String::from_utf8_lossy(&file.data)))
}

/// Extract message ids from Fluent source: any `<id> =` line where the id
/// is lowercase kebab-case. Comments, terms and attributes are skipped.
pub fn parse_message_ids(src: &str) -> BTreeSet<String> {
    src.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.starts_with('-') && id.chars().all(valid_id_char))
        .map(str::to_string)
        .collect()
}

fn valid_id_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every locale must define exactly the reference locale's message ids.
pub fn check_parity() -> Result<(), ContentError> {
    let reference = message_ids(REFERENCE)?;
    for lang in Language::ALL.into_iter().filter(|l| *l != REFERENCE) {
        let ids = message_ids(lang)?;
        if let Some(key) = reference.difference(&ids).next() {
            return Err(ContentError::MissingContent {
                language: lang,
                key: key.clone(),
            });
        }
        if let Some(key) = ids.difference(&reference).next() {
            return Err(ContentError::MissingContent {
                language: REFERENCE,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn reference_resource_is_embedded() {
        let ids = message_ids(REFERENCE).unwrap();
        assert!(ids.contains("nav-home"));
        assert!(ids.len() > 100, "only {} ids parsed", ids.len());
    }

    #[test]
    fn basic_lookup_works() {
        init();
        assert_eq!(fl!(loader(Language::En), "nav-home"), "Home");
        assert_eq!(fl!(loader(Language::Ar), "nav-home"), "الرئيسية");
    }

    #[test]
    fn languages_resolve_independently() {
        // Looking up Arabic must not disturb English, and vice versa.
        let ar = crate::t!(Language::Ar, "contact-submit");
        let en = crate::t!(Language::En, "contact-submit");
        assert_eq!(en, "Send Message");
        assert_eq!(ar, "إرسال الرسالة");
        assert_eq!(crate::t!(Language::En, "contact-submit"), en);
    }

    #[test]
    fn fl_macro_domain_matches_runtime_domain() {
        // `fl!` reads the domain from i18n.toml at compile time; without it
        // the package name (with underscores) is used and lookups miss.
        let config = include_str!("../i18n.toml");
        let domain = config
            .lines()
            .filter_map(|line| line.trim().strip_prefix("domain"))
            .filter_map(|rest| rest.trim().strip_prefix('='))
            .map(|value| value.trim().trim_matches('"'))
            .next();
        assert_eq!(domain, Some(DOMAIN));
        assert!(Localizations::get(&format!("{}/{DOMAIN}.ftl", REFERENCE.locale())).is_some());
    }

    #[test]
    fn shipped_locales_are_in_parity() {
        check_parity().unwrap();
    }

    #[test]
    fn parser_skips_comments_attributes_and_terms() {
        let src = "# comment\n## group\nhello = Hi\n    .title = attr\n-brand = GPT\nmulti =\n    line\n";
        let ids = parse_message_ids(src);
        assert_eq!(
            ids.into_iter().collect::<Vec<_>>(),
            vec!["hello".to_string(), "multi".to_string()]
        );
    }
}
