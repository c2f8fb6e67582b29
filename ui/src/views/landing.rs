use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::carousel::Capabilities;
use crate::components::Underline;
use crate::contact::ContactSection;
use crate::core::listeners::use_window_listener;
use crate::core::motion::{fade_out, observe_reveal, parallax_offset};
use crate::core::platform;
use crate::i18n::use_i18n;
use crate::routing::Page;

const HERO_BACKDROP_SPEED: f64 = 0.35;
const HERO_CONTENT_SPEED: f64 = -0.12;
const HERO_MAX_SHIFT_PX: f64 = 240.0;
const HERO_FADE_PX: f64 = 520.0;

/// Bullet count per unit card (`units.<unit>Item1..`).
const UNIT_ITEMS: usize = 4;

/// (display name, description key) for companies that work with us.
const TRUSTED_BY: &[(&str, &str)] = &[
    ("Gestiona Mogán", "units.gestionaMoganDesc"),
    ("Transition Capital", "units.transitionCapitalDesc"),
    ("Gesplan", "units.gesplanDesc"),
];

const CREATED: &[(&str, &str)] = &[("Dormitorum", "units.dormitorumDesc")];

/// (key prefix, page) for the three differentiator cards.
const DIFFERENTIATORS: &[(&str, Page)] = &[
    ("differentiators.team", Page::Team),
    ("differentiators.holistic", Page::Manifesto),
    ("differentiators.tech", Page::Tech),
];

#[component]
pub fn Landing() -> Element {
    tracing::debug!("[landing] render");
    rsx! {
        div { class: "page page-landing",
            Hero {}
            ManifestoTeaser {}
            Units {}
            Capabilities {}
            Differentiators {}
            ContactSection {}
        }
    }
}

#[component]
fn Hero() -> Element {
    let i18n = use_i18n();
    let mut scroll_y = use_signal(|| 0.0_f64);

    let tracker = use_coroutine(move |mut rx: UnboundedReceiver<f64>| async move {
        while let Some(y) = rx.next().await {
            if (y - *scroll_y.peek()).abs() >= 1.0 {
                scroll_y.set(y);
            }
        }
    });
    let tx = tracker.tx();
    use_window_listener("scroll", move |_| {
        let _ = tx.unbounded_send(platform::window_scroll_y());
    });

    let y = scroll_y();
    let backdrop_shift = parallax_offset(y, HERO_BACKDROP_SPEED, HERO_MAX_SHIFT_PX);
    let content_shift = parallax_offset(y, HERO_CONTENT_SPEED, HERO_MAX_SHIFT_PX);
    let opacity = fade_out(y, HERO_FADE_PX);

    rsx! {
        section { id: "hero", class: "hero",
            div {
                class: "hero__backdrop",
                aria_hidden: "true",
                style: "transform: translate3d(0, {backdrop_shift}px, 0);",
                div { class: "hero__orb hero__orb--blue" }
                div { class: "hero__orb hero__orb--red" }
            }
            div {
                class: "hero__content",
                style: "transform: translate3d(0, {content_shift}px, 0); opacity: {opacity};",
                h1 { class: "hero__title",
                    span { class: "hero__line", {i18n.t("hero.line1")} }
                    span { class: "hero__line hero__line--accent",
                        Underline { {i18n.t("hero.line2")} }
                    }
                }
                p { class: "hero__subtitle", {i18n.t("hero.subtitle")} }
                div { class: "hero__actions",
                    a { class: "btn-primary", href: "#proposal", {i18n.t("hero.cta")} }
                    a { class: "btn-ghost", href: "#contact", {i18n.t("hero.ctaSecondary")} }
                }
            }
        }
    }
}

#[component]
fn ManifestoTeaser() -> Element {
    let i18n = use_i18n();
    rsx! {
        section { id: "manifesto", class: "manifesto reveal",
            onmounted: move |evt| observe_reveal(&evt.data()),
            p { class: "eyebrow", {i18n.t("manifesto.eyebrow")} }
            h2 { class: "section-title", {i18n.t("manifesto.title")} }
            p { class: "manifesto__body",
                {i18n.t("manifesto.paragraph1")}
                strong { {i18n.t("manifesto.transformation")} }
                {i18n.t("manifesto.paragraph1End")}
            }
            blockquote { class: "manifesto__quote", {i18n.t("manifesto.quote")} }
        }
    }
}

#[component]
fn Units() -> Element {
    let i18n = use_i18n();
    rsx! {
        section { id: "proposal", class: "units reveal",
            onmounted: move |evt| observe_reveal(&evt.data()),
            p { class: "eyebrow", {i18n.t("units.eyebrow")} }
            h2 { class: "section-title",
                {i18n.t("units.title")}
                " "
                Underline { {i18n.t("units.titleHighlight")} }
            }
            div { class: "units__grid",
                UnitCard { unit: "consulting", page: Page::Consulting }
                UnitCard { unit: "venture", page: Page::VentureBuilding }
            }

            div { class: "units__partners",
                PartnerList { heading_key: "units.trustUs", companies: TRUSTED_BY }
                PartnerList { heading_key: "units.weCreated", companies: CREATED }
            }
        }
    }
}

#[component]
fn UnitCard(unit: &'static str, page: Page) -> Element {
    let i18n = use_i18n();
    let items: Vec<String> = (1..=UNIT_ITEMS)
        .map(|n| i18n.t(&format!("units.{unit}Item{n}")))
        .collect();

    rsx! {
        article { class: "unit-card unit-card--{unit}",
            h3 { class: "unit-card__title", {i18n.t(&format!("units.{unit}Title"))} }
            p { class: "unit-card__desc", {i18n.t(&format!("units.{unit}Desc"))} }
            ul { class: "unit-card__items",
                for (idx, item) in items.into_iter().enumerate() {
                    li { key: "{idx}", "{item}" }
                }
            }
            p { class: "unit-card__footer", {i18n.t(&format!("units.{unit}Footer"))} }
            div { class: "unit-card__actions",
                a { class: "btn-primary", href: page.hash(), {i18n.t("units.learnMore")} }
                a { class: "btn-ghost", href: "#contact", {i18n.t("units.letsTalk")} }
            }
        }
    }
}

#[component]
fn PartnerList(heading_key: &'static str, companies: &'static [(&'static str, &'static str)]) -> Element {
    let i18n = use_i18n();
    rsx! {
        div { class: "partners",
            h3 { class: "partners__heading", {i18n.t(heading_key)} }
            ul { class: "partners__list",
                for (name, desc_key) in companies.iter().copied() {
                    li { key: "{name}", class: "partners__item",
                        strong { class: "partners__name", "{name}" }
                        p { class: "partners__desc", {i18n.t(desc_key)} }
                    }
                }
            }
        }
    }
}

#[component]
fn Differentiators() -> Element {
    let i18n = use_i18n();
    rsx! {
        section { id: "about", class: "differentiators reveal",
            onmounted: move |evt| observe_reveal(&evt.data()),
            div { class: "differentiators__grid",
                for (prefix, page) in DIFFERENTIATORS.iter().copied() {
                    article { key: "{prefix}", class: "differentiator",
                        h3 { class: "differentiator__title", {i18n.t(&format!("{prefix}.title"))} }
                        p { class: "differentiator__desc", {i18n.t(&format!("{prefix}.desc"))} }
                        a { class: "differentiator__cta", href: page.hash(),
                            {i18n.t(&format!("{prefix}.cta"))}
                            " →"
                        }
                    }
                }
            }
        }
    }
}
