//! Typed content for each page section.
//!
//! One struct shape serves both languages; only the leaf strings differ.
//! Lists paired with icons are fixed-size arrays so their length cannot
//! drift between translations.

use crate::core::Language;
use crate::t;

use super::{Anchor, Icon};

#[derive(Debug, Clone, PartialEq)]
pub struct SiteChrome {
    pub title: String,
    pub brand: String,
}

impl SiteChrome {
    pub(crate) fn load(lang: Language) -> Self {
        Self {
            title: t!(lang, "site-title"),
            brand: t!(lang, "site-brand"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavContent {
    pub home: String,
    pub services: String,
    pub about: String,
    pub contact: String,
    pub inbound: String,
    pub outbound: String,
    pub get_quote: String,
    pub language_label: String,
    pub menu_toggle: String,
    pub logo_alt: String,
}

impl NavContent {
    pub(crate) fn load(lang: Language) -> Self {
        Self {
            home: t!(lang, "nav-home"),
            services: t!(lang, "nav-services"),
            about: t!(lang, "nav-about"),
            contact: t!(lang, "nav-contact"),
            inbound: t!(lang, "nav-inbound"),
            outbound: t!(lang, "nav-outbound"),
            get_quote: t!(lang, "nav-get-quote"),
            language_label: t!(lang, "nav-language-label"),
            menu_toggle: t!(lang, "nav-menu-toggle"),
            logo_alt: t!(lang, "nav-logo-alt"),
        }
    }
}

/// A label with the icon shown above it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub icon: Icon,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    pub cta_services: String,
    pub cta_contact: String,
    pub image_alt: String,
    pub stats: [Stat; 4],
}

impl HeroContent {
    pub(crate) fn load(lang: Language) -> Self {
        Self {
            badge: t!(lang, "hero-badge"),
            headline: t!(lang, "hero-headline"),
            subheadline: t!(lang, "hero-subheadline"),
            description: t!(lang, "hero-description"),
            cta_services: t!(lang, "hero-cta-services"),
            cta_contact: t!(lang, "hero-cta-contact"),
            image_alt: t!(lang, "hero-image-alt"),
            stats: [
                Stat { icon: Icon::Globe, label: t!(lang, "hero-stat-experience") },
                Stat { icon: Icon::Users, label: t!(lang, "hero-stat-clients") },
                Stat { icon: Icon::Globe, label: t!(lang, "hero-stat-coverage") },
                Stat { icon: Icon::Star, label: t!(lang, "hero-stat-rating") },
            ],
        }
    }
}

/// Icon, title and one-line description; used for service cards and
/// the about-section advantages.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub desc: String,
}

impl Feature {
    fn new(icon: Icon, title: String, desc: String) -> Self {
        Self { icon, title, desc }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceGroup {
    pub anchor: Anchor,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta: String,
    pub image_alt: String,
    pub items: [Feature; 6],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServicesContent {
    pub title: String,
    pub subtitle: String,
    pub inbound: ServiceGroup,
    pub outbound: ServiceGroup,
}

impl ServicesContent {
    pub(crate) fn load(lang: Language) -> Self {
        let inbound = ServiceGroup {
            anchor: Anchor::Inbound,
            title: t!(lang, "services-inbound-title"),
            subtitle: t!(lang, "services-inbound-subtitle"),
            description: t!(lang, "services-inbound-description"),
            cta: t!(lang, "services-inbound-cta"),
            image_alt: t!(lang, "services-inbound-image-alt"),
            items: [
                Feature::new(
                    Icon::Plane,
                    t!(lang, "services-inbound-1-title"),
                    t!(lang, "services-inbound-1-desc"),
                ),
                Feature::new(
                    Icon::Car,
                    t!(lang, "services-inbound-2-title"),
                    t!(lang, "services-inbound-2-desc"),
                ),
                Feature::new(
                    Icon::Hotel,
                    t!(lang, "services-inbound-3-title"),
                    t!(lang, "services-inbound-3-desc"),
                ),
                Feature::new(
                    Icon::MapPin,
                    t!(lang, "services-inbound-4-title"),
                    t!(lang, "services-inbound-4-desc"),
                ),
                Feature::new(
                    Icon::Calendar,
                    t!(lang, "services-inbound-5-title"),
                    t!(lang, "services-inbound-5-desc"),
                ),
                Feature::new(
                    Icon::Headphones,
                    t!(lang, "services-inbound-6-title"),
                    t!(lang, "services-inbound-6-desc"),
                ),
            ],
        };

        let outbound = ServiceGroup {
            anchor: Anchor::Outbound,
            title: t!(lang, "services-outbound-title"),
            subtitle: t!(lang, "services-outbound-subtitle"),
            description: t!(lang, "services-outbound-description"),
            cta: t!(lang, "services-outbound-cta"),
            image_alt: t!(lang, "services-outbound-image-alt"),
            items: [
                Feature::new(
                    Icon::Globe,
                    t!(lang, "services-outbound-1-title"),
                    t!(lang, "services-outbound-1-desc"),
                ),
                Feature::new(
                    Icon::Star,
                    t!(lang, "services-outbound-2-title"),
                    t!(lang, "services-outbound-2-desc"),
                ),
                Feature::new(
                    Icon::Users,
                    t!(lang, "services-outbound-3-title"),
                    t!(lang, "services-outbound-3-desc"),
                ),
                Feature::new(
                    Icon::Shield,
                    t!(lang, "services-outbound-4-title"),
                    t!(lang, "services-outbound-4-desc"),
                ),
                Feature::new(
                    Icon::MapPin,
                    t!(lang, "services-outbound-5-title"),
                    t!(lang, "services-outbound-5-desc"),
                ),
                Feature::new(
                    Icon::Clock,
                    t!(lang, "services-outbound-6-title"),
                    t!(lang, "services-outbound-6-desc"),
                ),
            ],
        };

        Self {
            title: t!(lang, "services-title"),
            subtitle: t!(lang, "services-subtitle"),
            inbound,
            outbound,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutContent {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub mission: String,
    pub image_alt: String,
    pub licensed_title: String,
    pub licensed_detail: String,
    pub advantages_title: String,
    pub advantages_subtitle: String,
    pub advantages: [Feature; 4],
    pub figures: [Figure; 4],
}

impl AboutContent {
    pub(crate) fn load(lang: Language) -> Self {
        Self {
            badge: t!(lang, "about-badge"),
            title: t!(lang, "about-title"),
            subtitle: t!(lang, "about-subtitle"),
            description: t!(lang, "about-description"),
            mission: t!(lang, "about-mission"),
            image_alt: t!(lang, "about-image-alt"),
            licensed_title: t!(lang, "about-licensed-title"),
            licensed_detail: t!(lang, "about-licensed-detail"),
            advantages_title: t!(lang, "about-advantages-title"),
            advantages_subtitle: t!(lang, "about-advantages-subtitle"),
            advantages: [
                Feature::new(
                    Icon::Car,
                    t!(lang, "about-advantage-1-title"),
                    t!(lang, "about-advantage-1-desc"),
                ),
                Feature::new(
                    Icon::Shield,
                    t!(lang, "about-advantage-2-title"),
                    t!(lang, "about-advantage-2-desc"),
                ),
                Feature::new(
                    Icon::CheckCircle,
                    t!(lang, "about-advantage-3-title"),
                    t!(lang, "about-advantage-3-desc"),
                ),
                Feature::new(
                    Icon::Globe,
                    t!(lang, "about-advantage-4-title"),
                    t!(lang, "about-advantage-4-desc"),
                ),
            ],
            figures: [
                Figure {
                    number: t!(lang, "about-stat-1-number"),
                    label: t!(lang, "about-stat-1-label"),
                },
                Figure {
                    number: t!(lang, "about-stat-2-number"),
                    label: t!(lang, "about-stat-2-label"),
                },
                Figure {
                    number: t!(lang, "about-stat-3-number"),
                    label: t!(lang, "about-stat-3-label"),
                },
                Figure {
                    number: t!(lang, "about-stat-4-number"),
                    label: t!(lang, "about-stat-4-label"),
                },
            ],
        }
    }
}

/// Labels for the six contact-form fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLabels {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoLine {
    pub icon: Icon,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactContent {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub form_title: String,
    pub labels: FieldLabels,
    pub service_placeholder: String,
    pub service_options: [String; 6],
    pub submit: String,
    pub submitting: String,
    pub info_title: String,
    pub address: InfoLine,
    pub phone: InfoLine,
    pub email: InfoLine,
    pub hours: InfoLine,
    pub location_title: String,
    pub location_city: String,
    pub location_district: String,
    pub success_title: String,
    pub success: String,
    pub error_title: String,
    pub error: String,
    pub dismiss: String,
}

impl ContactContent {
    pub(crate) fn load(lang: Language) -> Self {
        Self {
            badge: t!(lang, "contact-badge"),
            title: t!(lang, "contact-title"),
            subtitle: t!(lang, "contact-subtitle"),
            form_title: t!(lang, "contact-form-title"),
            labels: FieldLabels {
                name: t!(lang, "contact-field-name"),
                email: t!(lang, "contact-field-email"),
                phone: t!(lang, "contact-field-phone"),
                company: t!(lang, "contact-field-company"),
                service: t!(lang, "contact-field-service"),
                message: t!(lang, "contact-field-message"),
            },
            service_placeholder: t!(lang, "contact-service-placeholder"),
            service_options: [
                t!(lang, "contact-service-1"),
                t!(lang, "contact-service-2"),
                t!(lang, "contact-service-3"),
                t!(lang, "contact-service-4"),
                t!(lang, "contact-service-5"),
                t!(lang, "contact-service-6"),
            ],
            submit: t!(lang, "contact-submit"),
            submitting: t!(lang, "contact-submitting"),
            info_title: t!(lang, "contact-info-title"),
            address: InfoLine {
                icon: Icon::MapPin,
                title: t!(lang, "contact-address-title"),
                text: t!(lang, "contact-address-text"),
            },
            phone: InfoLine {
                icon: Icon::Phone,
                title: t!(lang, "contact-phone-title"),
                text: t!(lang, "contact-phone-text"),
            },
            email: InfoLine {
                icon: Icon::Mail,
                title: t!(lang, "contact-email-title"),
                text: t!(lang, "contact-email-text"),
            },
            hours: InfoLine {
                icon: Icon::Clock,
                title: t!(lang, "contact-hours-title"),
                text: t!(lang, "contact-hours-text"),
            },
            location_title: t!(lang, "contact-location-title"),
            location_city: t!(lang, "contact-location-city"),
            location_district: t!(lang, "contact-location-district"),
            success_title: t!(lang, "contact-success-title"),
            success: t!(lang, "contact-success"),
            error_title: t!(lang, "contact-error-title"),
            error: t!(lang, "contact-error"),
            dismiss: t!(lang, "contact-dismiss"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterLink {
    pub anchor: Anchor,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterContent {
    pub description: String,
    pub links_title: String,
    pub links: [FooterLink; 5],
    pub services_title: String,
    pub services: [String; 6],
    pub contact_title: String,
    pub address: String,
    pub phone_title: String,
    pub phone: String,
    pub email_title: String,
    pub email: String,
    pub back_to_top: String,
    pub copyright: String,
    pub powered_by: String,
    pub language_en: String,
    pub language_ar: String,
}

impl FooterContent {
    pub(crate) fn load(lang: Language) -> Self {
        Self {
            description: t!(lang, "footer-description"),
            links_title: t!(lang, "footer-links-title"),
            links: [
                FooterLink { anchor: Anchor::Home, label: t!(lang, "footer-link-home") },
                FooterLink { anchor: Anchor::About, label: t!(lang, "footer-link-about") },
                FooterLink { anchor: Anchor::Inbound, label: t!(lang, "footer-link-inbound") },
                FooterLink { anchor: Anchor::Outbound, label: t!(lang, "footer-link-outbound") },
                FooterLink { anchor: Anchor::Contact, label: t!(lang, "footer-link-contact") },
            ],
            services_title: t!(lang, "footer-services-title"),
            services: [
                t!(lang, "footer-service-1"),
                t!(lang, "footer-service-2"),
                t!(lang, "footer-service-3"),
                t!(lang, "footer-service-4"),
                t!(lang, "footer-service-5"),
                t!(lang, "footer-service-6"),
            ],
            contact_title: t!(lang, "footer-contact-title"),
            address: t!(lang, "footer-address"),
            phone_title: t!(lang, "footer-phone-title"),
            phone: t!(lang, "footer-phone"),
            email_title: t!(lang, "footer-email-title"),
            email: t!(lang, "footer-email"),
            back_to_top: t!(lang, "footer-back-to-top"),
            copyright: t!(lang, "footer-copyright"),
            powered_by: t!(lang, "footer-powered-by"),
            language_en: t!(lang, "footer-language-en"),
            language_ar: t!(lang, "footer-language-ar"),
        }
    }
}
