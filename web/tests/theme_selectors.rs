#![cfg(test)]
//! Stylesheet selector lint for the web build.
//!
//! The Rust components in `ui/` emit BEM-style class names; the rules for them live
//! in `web/assets/main.css` (global theme) and `ui/assets/styling/*.css`
//! (component sheets). A renamed class on either side only shows up at runtime, so
//! we check a curated set of selectors here.
//!
//! If you rename a class, update the markup, the stylesheet and `REQUIRED_*` below.

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));
const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));
const CAROUSEL_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/carousel.css"
));

const REQUIRED_MAIN: &[&str] = &[
    ":root",
    "body {",
    "--color-bg",
    ".btn-primary",
    ".btn-ghost",
    ".eyebrow",
    // Reveal on scroll
    ".reveal {",
    ".reveal-visible",
    // Underline mark
    ".underline__mark-slot",
    ".underline__stroke",
    "@keyframes underline-draw",
    // Landing
    ".hero__backdrop",
    ".hero__content",
    ".unit-card",
    ".partners__list",
    ".differentiator__cta",
    // Contact
    ".contact__form",
    ".contact__modal",
    ".contact__backdrop",
    ".contact__close",
    ".contact__honeypot",
    ".contact__error",
    ".field__label",
    // Chrome
    ".footer__copyright",
    ".cookie-banner",
    ".cookie-banner__actions",
    // Pages
    ".page-header__title",
    ".principles",
    ".team-member",
    ".legal__content",
];

const REQUIRED_NAVBAR: &[&str] = &[
    ".navbar {",
    ".navbar__links",
    ".navbar__menu",
    ".language-switch",
    ".drawer {",
    ".drawer__panel",
    ".drawer__panel--entered",
    ".drawer__close",
];

const REQUIRED_CAROUSEL: &[&str] = &[
    ".carousel__track",
    ".carousel__strip",
    ".carousel__card",
    ".carousel__card--active",
    ".carousel__dot--active",
    ".carousel__arrow--prev",
    ".carousel__arrow--next",
];

fn missing(css: &str, required: &[&'static str]) -> Vec<&'static str> {
    required.iter().copied().filter(|sel| !css.contains(sel)).collect()
}

#[test]
fn stylesheets_contain_required_selectors() {
    let mut report = Vec::new();
    for (name, css, required) in [
        ("main.css", MAIN_CSS, REQUIRED_MAIN),
        ("navbar.css", NAVBAR_CSS, REQUIRED_NAVBAR),
        ("carousel.css", CAROUSEL_CSS, REQUIRED_CAROUSEL),
    ] {
        let gone = missing(css, required);
        if !gone.is_empty() {
            report.push(format!("{name}:\n  {}", gone.join("\n  ")));
        }
    }
    assert!(report.is_empty(), "Missing CSS selectors:\n{}", report.join("\n"));
}

#[test]
fn card_gap_matches_geometry() {
    // carousel/geometry.rs assumes a fixed 24px gap and 32px side padding.
    assert!(CAROUSEL_CSS.contains("gap: 24px"));
    assert!(CAROUSEL_CSS.contains("padding: 1rem 32px"));
}

#[test]
fn main_theme_not_trivially_empty() {
    let non_ws_len = MAIN_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Main theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
