use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::listeners::use_window_listener;
use crate::core::{platform, timing};
use crate::i18n::use_i18n;
use crate::routing::Page;

use super::language_switch::LanguageSwitch;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const LOGO: Asset = asset!("/assets/logo.svg");

const DRAWER_CLOSE_ID: &str = "drawer-close";

/// Roughly one animation frame.
const FRAME_MS: u64 = 16;
const FOCUS_DELAY_MS: u64 = 50;

/// Drawer entries: label key, description key (if any), target.
const DRAWER_LINKS: &[(&str, Option<&str>, &str)] = &[
    ("menu.proposal", Some("menu.proposalDesc"), "#proposal"),
    ("menu.about", Some("menu.aboutDesc"), "#about"),
    ("menu.contact", Some("menu.contactDesc"), "#contact"),
    ("menu.consulting", None, "#/consulting"),
    ("menu.ventureBuilder", None, "#/venture-building"),
    ("menu.team", None, "#/team"),
    ("menu.manifesto", None, "#/manifesto"),
    ("menu.technology", None, "#/tech"),
];

#[component]
pub fn Navbar() -> Element {
    let i18n = use_i18n();
    let mut open = use_signal(|| false);
    let mut entered = use_signal(|| false);

    use_effect(move || platform::lock_body_scroll(open()));
    use_drop(|| platform::lock_body_scroll(false));

    // Slide in one frame after opening, then move focus to the close button.
    use_effect(move || {
        if !open() {
            entered.set(false);
            return;
        }
        spawn(async move {
            timing::sleep_ms(FRAME_MS).await;
            if *open.peek() {
                entered.set(true);
            }
            timing::sleep_ms(FOCUS_DELAY_MS).await;
            if *open.peek() {
                platform::focus_element(DRAWER_CLOSE_ID);
            }
        });
    });

    let closer = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while rx.next().await.is_some() {
            if *open.peek() {
                tracing::debug!("[navbar] drawer closed by Escape");
                open.set(false);
            }
        }
    });
    let close_tx = closer.tx();
    use_window_listener("keydown", move |evt| {
        if evt.key.as_deref() == Some("Escape") {
            let _ = close_tx.unbounded_send(());
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: Page::Landing.hash(), aria_label: i18n.t("nav.home"),
                    img { class: "navbar__logo", src: LOGO, alt: "Tauler Group" }
                }

                nav { class: "navbar__links",
                    a { class: "navbar__link", href: "#proposal", {i18n.t("nav.proposal")} }
                    a { class: "navbar__link", href: "#about", {i18n.t("nav.about")} }
                    a { class: "navbar__link navbar__link--cta", href: "#contact", {i18n.t("nav.contact")} }
                    LanguageSwitch {}
                }

                button {
                    class: "navbar__menu",
                    r#type: "button",
                    aria_label: i18n.t("nav.openMenu"),
                    aria_expanded: if open() { "true" } else { "false" },
                    onclick: move |_| open.set(true),
                    span { class: "navbar__menu-bar" }
                    span { class: "navbar__menu-bar" }
                    span { class: "navbar__menu-bar" }
                }
            }
        }

        if open() {
            div { class: "drawer",
                aside {
                    class: if entered() { "drawer__panel drawer__panel--entered" } else { "drawer__panel" },
                    role: "dialog",
                    aria_modal: "true",
                    aria_label: i18n.t("nav.navigation"),
                    div { class: "drawer__header",
                        img { class: "drawer__logo", src: LOGO, alt: "Tauler Group" }
                        button {
                            id: DRAWER_CLOSE_ID,
                            class: "drawer__close",
                            r#type: "button",
                            aria_label: i18n.t("nav.closeMenu"),
                            onclick: move |_| open.set(false),
                            "✕"
                        }
                    }
                    nav { class: "drawer__nav",
                        ul { class: "drawer__list",
                            for (label, desc, href) in DRAWER_LINKS.iter().copied() {
                                li { key: "{href}",
                                    a {
                                        class: "drawer__link",
                                        href,
                                        onclick: move |_| open.set(false),
                                        span { class: "drawer__label", {i18n.t(label)} }
                                        if let Some(desc) = desc {
                                            span { class: "drawer__desc", {i18n.t(desc)} }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "drawer__footer",
                            LanguageSwitch { on_toggle: move |_| open.set(false) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::assert_keys_resolve;

    #[test]
    fn drawer_entries_are_translated() {
        assert_keys_resolve(DRAWER_LINKS.iter().map(|(label, _, _)| *label));
        assert_keys_resolve(DRAWER_LINKS.iter().filter_map(|(_, desc, _)| *desc));
    }

    #[test]
    fn drawer_page_links_select_their_pages() {
        for (_, _, href) in DRAWER_LINKS {
            if href.starts_with("#/") {
                assert_ne!(Page::from_hash(href), Page::Landing, "{href}");
            }
        }
    }
}
