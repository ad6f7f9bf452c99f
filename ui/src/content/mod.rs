//! Localized page content and its resolver.
//!
//! The catalog holds one [`ContentTree`] per [`Language`], built once from
//! the Fluent bundles. Section components borrow their slice of the tree;
//! nothing here changes after load.

mod sections;

pub use sections::{
    AboutContent, ContactContent, FieldLabels, Feature, Figure, FooterContent, FooterLink,
    HeroContent, InfoLine, NavContent, ServiceGroup, ServicesContent, SiteChrome, Stat,
};

use std::collections::BTreeSet;

use once_cell::sync::OnceCell;

use crate::core::Language;
use crate::i18n;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("message `{key}` is missing for language `{language}`")]
    MissingContent { language: Language, key: String },
    #[error("no embedded resource `{path}` for language `{language}`")]
    MissingResource { language: Language, path: String },
    #[error("invalid locale identifier `{0}`")]
    InvalidLocale(&'static str),
    #[error(transparent)]
    Load(#[from] i18n_embed::I18nEmbedError),
}

/// In-page anchors; the only addressable routes of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    Services,
    About,
    Contact,
    Inbound,
    Outbound,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::Home,
        Anchor::Services,
        Anchor::About,
        Anchor::Contact,
        Anchor::Inbound,
        Anchor::Outbound,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::Services => "services",
            Anchor::About => "about",
            Anchor::Contact => "contact",
            Anchor::Inbound => "inbound",
            Anchor::Outbound => "outbound",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Decorative glyph paired with a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Plane,
    Car,
    Hotel,
    MapPin,
    Calendar,
    Headphones,
    Globe,
    Star,
    Users,
    Shield,
    Clock,
    CheckCircle,
    Phone,
    Mail,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Plane => "✈",
            Icon::Car => "🚘",
            Icon::Hotel => "🏨",
            Icon::MapPin => "📍",
            Icon::Calendar => "📅",
            Icon::Headphones => "🎧",
            Icon::Globe => "🌐",
            Icon::Star => "★",
            Icon::Users => "👥",
            Icon::Shield => "🛡",
            Icon::Clock => "🕘",
            Icon::CheckCircle => "✔",
            Icon::Phone => "📞",
            Icon::Mail => "✉",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKey {
    Navigation,
    Hero,
    Services,
    About,
    Contact,
    Footer,
}

impl SectionKey {
    pub const ALL: [SectionKey; 6] = [
        SectionKey::Navigation,
        SectionKey::Hero,
        SectionKey::Services,
        SectionKey::About,
        SectionKey::Contact,
        SectionKey::Footer,
    ];

    /// Message-id prefix of the section in the Fluent resources.
    pub fn prefix(self) -> &'static str {
        match self {
            SectionKey::Navigation => "nav-",
            SectionKey::Hero => "hero-",
            SectionKey::Services => "services-",
            SectionKey::About => "about-",
            SectionKey::Contact => "contact-",
            SectionKey::Footer => "footer-",
        }
    }

    /// Anchor of the rendered `<section>`, if it has one.
    pub fn anchor(self) -> Option<Anchor> {
        match self {
            SectionKey::Hero => Some(Anchor::Home),
            SectionKey::Services => Some(Anchor::Services),
            SectionKey::About => Some(Anchor::About),
            SectionKey::Contact => Some(Anchor::Contact),
            SectionKey::Navigation | SectionKey::Footer => None,
        }
    }
}

/// A borrowed section subtree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section<'a> {
    Navigation(&'a NavContent),
    Hero(&'a HeroContent),
    Services(&'a ServicesContent),
    About(&'a AboutContent),
    Contact(&'a ContactContent),
    Footer(&'a FooterContent),
}

impl Section<'_> {
    pub fn key(&self) -> SectionKey {
        match self {
            Section::Navigation(_) => SectionKey::Navigation,
            Section::Hero(_) => SectionKey::Hero,
            Section::Services(_) => SectionKey::Services,
            Section::About(_) => SectionKey::About,
            Section::Contact(_) => SectionKey::Contact,
            Section::Footer(_) => SectionKey::Footer,
        }
    }
}

/// All content for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTree {
    pub site: SiteChrome,
    pub nav: NavContent,
    pub hero: HeroContent,
    pub services: ServicesContent,
    pub about: AboutContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

impl ContentTree {
    fn load(lang: Language) -> Self {
        Self {
            site: SiteChrome::load(lang),
            nav: NavContent::load(lang),
            hero: HeroContent::load(lang),
            services: ServicesContent::load(lang),
            about: AboutContent::load(lang),
            contact: ContactContent::load(lang),
            footer: FooterContent::load(lang),
        }
    }

    pub fn section(&self, key: SectionKey) -> Section<'_> {
        match key {
            SectionKey::Navigation => Section::Navigation(&self.nav),
            SectionKey::Hero => Section::Hero(&self.hero),
            SectionKey::Services => Section::Services(&self.services),
            SectionKey::About => Section::About(&self.about),
            SectionKey::Contact => Section::Contact(&self.contact),
            SectionKey::Footer => Section::Footer(&self.footer),
        }
    }
}

#[derive(Debug)]
pub struct Catalog {
    en: ContentTree,
    ar: ContentTree,
}

impl Catalog {
    fn load() -> Result<Self, ContentError> {
        i18n::try_init()?;
        Ok(Self {
            en: ContentTree::load(Language::En),
            ar: ContentTree::load(Language::Ar),
        })
    }

    pub fn tree(&self, lang: Language) -> &ContentTree {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

static CATALOG: OnceCell<Catalog> = OnceCell::new();

/// The content catalog, loaded on first use.
pub fn catalog() -> Result<&'static Catalog, ContentError> {
    CATALOG.get_or_try_init(Catalog::load)
}

/// Section subtree for `lang`.
pub fn resolve(lang: Language, key: SectionKey) -> Result<Section<'static>, ContentError> {
    Ok(catalog()?.tree(lang).section(key))
}

/// Content tree for `lang`, for components rendered below a successful
/// [`catalog`] check. A failure here is an authoring defect.
pub fn tree(lang: Language) -> &'static ContentTree {
    match catalog() {
        Ok(catalog) => catalog.tree(lang),
        Err(err) => panic!("[content] catalog failed to load: {err}"),
    }
}

/// The contact-form service option `label` (in any language) as it reads
/// in `lang`. `None` if `label` is not one of the options.
pub fn localize_service(label: &str, lang: Language) -> Option<&'static str> {
    let catalog = catalog().ok()?;
    let index = Language::ALL.into_iter().find_map(|from| {
        catalog
            .tree(from)
            .contact
            .service_options
            .iter()
            .position(|option| option == label)
    })?;
    Some(catalog.tree(lang).contact.service_options[index].as_str())
}

/// Message ids making up a section in `lang`'s resource.
pub fn section_keys(lang: Language, key: SectionKey) -> Result<BTreeSet<String>, ContentError> {
    Ok(i18n::message_ids(lang)?
        .into_iter()
        .filter(|id| id.starts_with(key.prefix()))
        .collect())
}
