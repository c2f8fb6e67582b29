//! Shared UI crate for the Tauler Group site. All views, state and platform
//! glue live here; the launcher crates only mount [`Site`].

use dioxus::prelude::*;

pub mod carousel;
pub mod config;
pub mod contact;
pub mod core;
pub mod i18n;
pub mod routing;
pub mod views;

pub mod components {
    // Site chrome
    pub mod cookie_banner;
    pub mod footer;
    pub mod navbar;
    pub use cookie_banner::CookieBanner;
    pub use footer::Footer;
    pub use navbar::Navbar;

    // Small shared pieces
    pub mod language_switch;
    pub mod underline;
    pub use language_switch::LanguageSwitch;
    pub use underline::Underline;
}

#[cfg(test)]
mod tests;

/// Whole-site layout: providers, chrome and the page selected by the URL hash.
#[component]
pub fn Site() -> Element {
    i18n::use_i18n_provider();
    config::use_site_config_provider();
    let page = routing::use_hash_page();

    rsx! {
        components::Navbar {}
        main { class: "site-main",
            views::PageView { page: page() }
        }
        components::Footer {}
        components::CookieBanner {}
    }
}
