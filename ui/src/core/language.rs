//! Language codes and the text direction each one implies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two languages the site is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

/// Value of the document `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_attr(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// Short code used for the document `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Locale folder under `i18n/` holding this language's messages.
    pub fn locale(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Ar => "ar-AE",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::En => TextDirection::Ltr,
            Language::Ar => TextDirection::Rtl,
        }
    }

    /// Label for the language switch, written in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    /// Compact switch label (EN / AR).
    pub fn short_label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ar => "AR",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language tag `{0}`")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Accepts bare codes and region-qualified tags (`ar`, `ar-AE`, `en_GB`).
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            _ => Err(UnknownLanguage(tag.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Language::Ar.direction(), TextDirection::Rtl);
        assert_eq!(Language::En.direction(), TextDirection::Ltr);
        assert_eq!(Language::Ar.direction().as_attr(), "rtl");
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn parses_region_tags() {
        assert_eq!("ar-AE".parse::<Language>(), Ok(Language::Ar));
        assert_eq!("EN_gb".parse::<Language>(), Ok(Language::En));
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
    }

    #[test]
    fn rejects_other_languages() {
        let err = "fr-FR".parse::<Language>().unwrap_err();
        assert_eq!(err, UnknownLanguage("fr-FR".into()));
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn serde_uses_short_codes() {
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
