//! Hash-based page selection.
//!
//! Secondary pages live behind `#/<slug>` fragments; every other fragment
//! (including in-page anchors such as `#contact`) renders the landing page.

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::listeners::use_window_listener;
use crate::core::{platform, timing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Landing,
    Privacy,
    Cookies,
    LegalNotice,
    Manifesto,
    Team,
    Tech,
    Consulting,
    VentureBuilding,
}

impl Page {
    /// Every page reachable through a `#/` fragment.
    pub const ROUTED: [Page; 8] = [
        Page::Privacy,
        Page::Cookies,
        Page::LegalNotice,
        Page::Manifesto,
        Page::Team,
        Page::Tech,
        Page::Consulting,
        Page::VentureBuilding,
    ];

    pub fn from_hash(hash: &str) -> Self {
        match hash {
            "#/privacy" => Page::Privacy,
            "#/cookies" => Page::Cookies,
            "#/legal" => Page::LegalNotice,
            "#/manifesto" => Page::Manifesto,
            "#/team" => Page::Team,
            "#/tech" => Page::Tech,
            "#/consulting" => Page::Consulting,
            "#/venture-building" => Page::VentureBuilding,
            _ => Page::Landing,
        }
    }

    /// The fragment that selects this page; `#` for the landing page.
    pub fn hash(self) -> &'static str {
        match self {
            Page::Landing => "#",
            Page::Privacy => "#/privacy",
            Page::Cookies => "#/cookies",
            Page::LegalNotice => "#/legal",
            Page::Manifesto => "#/manifesto",
            Page::Team => "#/team",
            Page::Tech => "#/tech",
            Page::Consulting => "#/consulting",
            Page::VentureBuilding => "#/venture-building",
        }
    }

    pub fn is_legal(self) -> bool {
        matches!(self, Page::Privacy | Page::Cookies | Page::LegalNotice)
    }
}

/// Element id named by an in-page anchor fragment (`#contact` -> `contact`).
pub fn anchor_of(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#')?;
    (!id.is_empty() && !id.starts_with('/')).then_some(id)
}

/// Current page, kept in sync with `location.hash` while the caller is mounted.
pub fn use_hash_page() -> Signal<Page> {
    let mut page = use_signal(|| Page::from_hash(&platform::current_hash()));

    let router = use_coroutine(move |mut rx: UnboundedReceiver<String>| async move {
        while let Some(hash) = rx.next().await {
            let next = Page::from_hash(&hash);
            if *page.peek() == next {
                continue;
            }
            tracing::debug!("[routing] {:?} -> {next:?}", *page.peek());
            page.set(next);
            // Let the new page render before scrolling.
            timing::sleep_ms(0).await;
            match anchor_of(&hash) {
                Some(id) => platform::scroll_into_view(id),
                None => platform::scroll_window_to_top(),
            }
        }
    });

    let tx = router.tx();
    use_window_listener("hashchange", move |_| {
        let _ = tx.unbounded_send(platform::current_hash());
    });

    page
}
