//! Shared UI crate for the GPT Travel site. Language state, localized
//! content, the contact form and every page section live here; the `web`
//! and `desktop` crates only launch it.

pub mod config;
pub mod contact;
pub mod content;
pub mod context;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components;
