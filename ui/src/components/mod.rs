//! Page sections. Each reads the active language from context and renders
//! its slice of the content tree.

mod about;
mod contact;
mod footer;
mod hero;
mod navigation;
mod services;

pub use about::About;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use navigation::Navigation;
pub use services::Services;
