use dioxus::prelude::*;

use crate::config::use_site_config;
use crate::core::timing::current_year;
use crate::i18n::use_i18n;
use crate::routing::Page;

const LOGO: Asset = asset!("/assets/logo.svg");

const EXPLORE_LINKS: &[(&str, &str)] = &[
    ("footer.proposal", "#proposal"),
    ("footer.about", "#about"),
    ("footer.team", "#/team"),
    ("footer.manifesto", "#/manifesto"),
    ("footer.technology", "#/tech"),
    ("footer.contact", "#contact"),
];

#[component]
pub fn Footer() -> Element {
    let i18n = use_i18n();
    let config = use_site_config();
    let year = current_year().to_string();
    let copyright = i18n.format("footer.copyright", &[("year", year.as_str())]);

    let legal_links = [
        ("footer.privacy", Page::Privacy),
        ("footer.cookies", Page::Cookies),
        ("footer.legalNotice", Page::LegalNotice),
    ];

    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__brand",
                    a { href: Page::Landing.hash(),
                        img { class: "footer__logo", src: LOGO, alt: "Tauler Group" }
                    }
                    p { class: "footer__description", {i18n.t("footer.description")} }
                    p { class: "footer__email",
                        span { class: "footer__label", {i18n.t("footer.emailLabel")} }
                        a { href: config.mailto(), "{config.contact_email}" }
                    }
                }

                div { class: "footer__column",
                    h4 { class: "footer__heading", {i18n.t("footer.explore")} }
                    ul {
                        for (key, href) in EXPLORE_LINKS.iter().copied() {
                            li { key: "{href}", a { href, {i18n.t(key)} } }
                        }
                    }
                }

                div { class: "footer__column",
                    h4 { class: "footer__heading", {i18n.t("footer.legal")} }
                    ul {
                        for (key, page) in legal_links {
                            li { key: "{key}", a { href: page.hash(), {i18n.t(key)} } }
                        }
                    }
                }
            }
            p { class: "footer__copyright", "{copyright}" }
        }
    }
}
