//! Page-level views. [`PageView`] picks one from the current [`Page`].

use dioxus::prelude::*;

use crate::routing::Page;

mod landing;
mod legal;
mod pages;

pub use landing::Landing;
pub use legal::{CookiesPolicy, LegalNotice, PrivacyPolicy};
pub use pages::{ConsultingPage, ManifestoPage, TeamPage, TechPage, VenturePage};

#[component]
pub fn PageView(page: Page) -> Element {
    match page {
        Page::Landing => rsx! { Landing {} },
        Page::Privacy => rsx! { PrivacyPolicy {} },
        Page::Cookies => rsx! { CookiesPolicy {} },
        Page::LegalNotice => rsx! { LegalNotice {} },
        Page::Manifesto => rsx! { ManifestoPage {} },
        Page::Team => rsx! { TeamPage {} },
        Page::Tech => rsx! { TechPage {} },
        Page::Consulting => rsx! { ConsultingPage {} },
        Page::VentureBuilding => rsx! { VenturePage {} },
    }
}
