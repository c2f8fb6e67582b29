//! Secondary content pages reached from the drawer and the landing cards.

use dioxus::prelude::*;

use crate::components::Underline;
use crate::i18n::use_i18n;

const MANIFESTO_PRINCIPLES: usize = 7;
const VENTURE_BENEFITS: usize = 4;
const HIGHLIGHTS_PER_MEMBER: usize = 3;

/// (display name, key stem) for each team member.
const TEAM: &[(&str, &str)] = &[("Álvaro", "alvaro"), ("Manuel", "manuel")];

/// `prefix1`, `prefix2`, ... `prefix{count}`.
fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("{prefix}{n}")).collect()
}

#[component]
fn PageHeader(eyebrow: String, title: String, subtitle: Option<String>) -> Element {
    rsx! {
        header { class: "page-header",
            p { class: "eyebrow", "{eyebrow}" }
            h1 { class: "page-header__title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section-lead", "{subtitle}" }
            }
        }
    }
}

#[component]
fn KeyedList(keys: Vec<String>) -> Element {
    let i18n = use_i18n();
    rsx! {
        ul { class: "page-list",
            for key in keys {
                li { key: "{key}", {i18n.t(&key)} }
            }
        }
    }
}

#[component]
pub fn ManifestoPage() -> Element {
    let i18n = use_i18n();
    rsx! {
        section { class: "page page-manifesto",
            header { class: "page-header",
                p { class: "eyebrow", {i18n.t("manifestoPage.eyebrow")} }
                h1 { class: "page-header__title",
                    {i18n.t("manifestoPage.title")}
                    " "
                    Underline { {i18n.t("manifestoPage.titleHighlight")} }
                }
            }
            ol { class: "principles",
                for n in 1..=MANIFESTO_PRINCIPLES {
                    li { key: "{n}", class: "principle",
                        h3 { class: "principle__title", {i18n.t(&format!("manifestoPage.principle{n}Title"))} }
                        p { class: "principle__text", {i18n.t(&format!("manifestoPage.principle{n}Text"))} }
                    }
                }
            }
            p { class: "page-conclusion", {i18n.t("manifestoPage.conclusion")} }
            a { class: "btn-primary", href: "#contact", {i18n.t("manifestoPage.cta")} }
        }
    }
}

#[component]
pub fn TeamPage() -> Element {
    let i18n = use_i18n();
    rsx! {
        section { class: "page page-team",
            header { class: "page-header",
                p { class: "eyebrow", {i18n.t("teamPage.eyebrow")} }
                h1 { class: "page-header__title",
                    span { {i18n.t("teamPage.title1")} }
                    " "
                    span { class: "page-header__accent", {i18n.t("teamPage.title2")} }
                }
                p { class: "section-lead", {i18n.t("teamPage.subtitle")} }
            }
            div { class: "team",
                for (name, stem) in TEAM.iter().copied() {
                    article { key: "{stem}", class: "team-member",
                        h2 { class: "team-member__name", "{name}" }
                        p { class: "team-member__role", {i18n.t(&format!("teamPage.{stem}Role"))} }
                        ul { class: "team-member__highlights",
                            for n in 1..=HIGHLIGHTS_PER_MEMBER {
                                li { key: "{n}",
                                    strong { {i18n.t(&format!("teamPage.{stem}Highlight{n}Title"))} }
                                    " "
                                    span { {i18n.t(&format!("teamPage.{stem}Highlight{n}Desc"))} }
                                }
                            }
                        }
                        p { {i18n.t(&format!("teamPage.{stem}Bio1"))} }
                        p { {i18n.t(&format!("teamPage.{stem}Bio2"))} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TechPage() -> Element {
    let i18n = use_i18n();
    rsx! {
        section { class: "page page-tech",
            PageHeader { eyebrow: i18n.t("techPage.eyebrow"), title: i18n.t("techPage.title") }
            div { class: "prose",
                p { {i18n.t("techPage.intro1")} }
                p { {i18n.t("techPage.intro2")} }

                h2 { {i18n.t("techPage.section1Title")} }
                p { {i18n.t("techPage.section1Text")} }
                p { {i18n.t("techPage.section1After")} }
                p { {i18n.t("techPage.focusIntro")} }
                KeyedList { keys: numbered("techPage.focus", 3) }
                p { {i18n.t("techPage.focusAfter")} }

                h2 { {i18n.t("techPage.section2Title")} }
                p { {i18n.t("techPage.section2Text")} }
                p { {i18n.t("techPage.stackIntro")} }
                KeyedList { keys: numbered("techPage.stack", 3) }
                p { {i18n.t("techPage.stackAfter")} }

                h2 { {i18n.t("techPage.section3Title")} }
                p { {i18n.t("techPage.section3Text")} }
                KeyedList { keys: numbered("techPage.front", 2) }
                p { {i18n.t("techPage.frontsAfter1")} }
                p { {i18n.t("techPage.frontsAfter2")} }
                KeyedList { keys: numbered("techPage.implication", 4) }

                h2 { {i18n.t("techPage.section4Title")} }
                p { {i18n.t("techPage.section4Text1")} }
                p { {i18n.t("techPage.section4Text2")} }
                KeyedList { keys: numbered("techPage.approach", 5) }
                p { {i18n.t("techPage.approachAfter")} }

                h2 { {i18n.t("techPage.section5Title")} }
                p { {i18n.t("techPage.section5Text")} }

                p { class: "page-conclusion", {i18n.t("techPage.conclusion1")} }
                p { class: "page-conclusion", {i18n.t("techPage.conclusion2")} }
            }
            a { class: "btn-primary", href: "#contact", {i18n.t("techPage.cta")} }
        }
    }
}

#[component]
pub fn ConsultingPage() -> Element {
    let i18n = use_i18n();
    rsx! {
        section { class: "page page-consulting",
            PageHeader {
                eyebrow: i18n.t("consultingPage.eyebrow"),
                title: i18n.t("consultingPage.title"),
                subtitle: i18n.t("consultingPage.subtitle"),
            }
            div { class: "prose",
                p { {i18n.t("consultingPage.text1")} }
                p { {i18n.t("consultingPage.text2")} }
            }
            div { class: "page-cards",
                article { class: "page-card",
                    h3 { {i18n.t("consultingPage.card1Title")} }
                    p { {i18n.t("consultingPage.card1Text")} }
                }
                article { class: "page-card",
                    h3 { {i18n.t("consultingPage.card2Title")} }
                    p { {i18n.t("consultingPage.card2Text")} }
                }
            }
            a { class: "btn-primary", href: "#contact", {i18n.t("consultingPage.cta")} }
        }
    }
}

#[component]
pub fn VenturePage() -> Element {
    let i18n = use_i18n();
    rsx! {
        section { class: "page page-venture",
            PageHeader {
                eyebrow: i18n.t("venturePage.eyebrow"),
                title: i18n.t("venturePage.title"),
                subtitle: i18n.t("venturePage.subtitle"),
            }
            div { class: "prose",
                p { {i18n.t("venturePage.text1")} }
                p { {i18n.t("venturePage.text2")} }
                KeyedList { keys: numbered("venturePage.benefit", VENTURE_BENEFITS) }
            }
            a { class: "btn-primary", href: "#contact", {i18n.t("venturePage.cta")} }
        }
    }
}
