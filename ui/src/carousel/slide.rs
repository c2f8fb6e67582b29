use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::i18n::{content_file, Language};

/// One capability card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slide {
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    pub cta: String,
}

fn load(lang: Language) -> Vec<Slide> {
    let Some(bytes) = content_file(lang, "slides.json") else {
        tracing::error!("[carousel] no slides.json embedded for `{lang}`");
        return Vec::new();
    };
    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        tracing::error!("[carousel] malformed slides.json for `{lang}`: {err}");
        Vec::new()
    })
}

static SLIDES: Lazy<BTreeMap<Language, Vec<Slide>>> =
    Lazy::new(|| Language::ALL.into_iter().map(|lang| (lang, load(lang))).collect());

/// The base slide list for `lang`.
pub fn slides_for(lang: Language) -> &'static [Slide] {
    SLIDES.get(&lang).map_or(&[], Vec::as_slice)
}
