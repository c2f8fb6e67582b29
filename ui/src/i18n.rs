//! Internationalization (i18n) support for `tauler-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of the per-language content files)
//! - `serde_json` (parsing them into an immutable [`Dictionary`])
//! - `i18n-embed` requesters (browser / OS preferred languages)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   es/site.json     (reference copy, default language)
//!   es/slides.json   (capabilities carousel)
//!   en/site.json
//!   en/slides.json
//! ```
//!
//! Keys are dotted paths into the nested JSON objects (`"hero.line1"`). A
//! missing key renders as the key itself so gaps are visible instead of blank.
//!
//! Usage in a component (the root calls [`use_i18n_provider`] once):
//! ```ignore
//! let i18n = use_i18n();
//! rsx! { h1 { {i18n.t("hero.line1")} } }
//! ```
use std::collections::BTreeMap;
use std::fmt;

use dioxus::prelude::*;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

use crate::core::{platform, storage::Preferences};

/// Supported site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Embed all language folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Raw bytes of an embedded content file, e.g. `content_file(Language::En, "slides.json")`.
pub(crate) fn content_file(lang: Language, name: &str) -> Option<Vec<u8>> {
    Localizations::get(&format!("{}/{name}", lang.code())).map(|file| file.data.into_owned())
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("missing embedded dictionary for `{0}`")]
    Missing(Language),
    #[error("malformed dictionary for `{lang}`: {source}")]
    Malformed {
        lang: Language,
        #[source]
        source: serde_json::Error,
    },
}

/// One node of a translation tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Branch(BTreeMap<String, Entry>),
}

impl Entry {
    fn get(&self, path: &str) -> Option<&Entry> {
        path.split('.').try_fold(self, |node, segment| match node {
            Entry::Branch(children) => children.get(segment),
            Entry::Text(_) => None,
        })
    }

    /// All leaf keys as dotted paths.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_leaves("", &mut out);
        out
    }

    fn collect_leaves(&self, prefix: &str, out: &mut Vec<String>) {
        match self {
            Entry::Text(_) => out.push(prefix.to_string()),
            Entry::Branch(children) => {
                for (name, child) in children {
                    let path = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{prefix}.{name}")
                    };
                    child.collect_leaves(&path, out);
                }
            }
        }
    }
}

/// Immutable translation map keyed by language, then by dotted key path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    trees: BTreeMap<Language, Entry>,
}

impl Dictionary {
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (Language, &'a str)>,
    ) -> Result<Self, DictionaryError> {
        let mut trees = BTreeMap::new();
        for (lang, raw) in sources {
            let tree = serde_json::from_str(raw)
                .map_err(|source| DictionaryError::Malformed { lang, source })?;
            trees.insert(lang, tree);
        }
        Ok(Self { trees })
    }

    /// Load every language's `site.json` from the embedded folder.
    pub fn load_embedded() -> Result<Self, DictionaryError> {
        let mut raw = Vec::new();
        for lang in Language::ALL {
            let bytes = content_file(lang, "site.json").ok_or(DictionaryError::Missing(lang))?;
            raw.push((lang, String::from_utf8_lossy(&bytes).into_owned()));
        }
        Self::from_sources(raw.iter().map(|(lang, text)| (*lang, text.as_str())))
    }

    /// Shared embedded dictionary. A broken bundle degrades to an empty map
    /// (every lookup then echoes its key).
    pub fn embedded() -> &'static Dictionary {
        static EMBEDDED: Lazy<Dictionary> = Lazy::new(|| {
            Dictionary::load_embedded().unwrap_or_else(|err| {
                tracing::error!("[i18n] {err}; rendering keys verbatim");
                Dictionary::default()
            })
        });
        &EMBEDDED
    }

    pub fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        match self.trees.get(&lang)?.get(key)? {
            Entry::Text(text) => Some(text.as_str()),
            Entry::Branch(_) => None,
        }
    }

    pub fn tree(&self, lang: Language) -> Option<&Entry> {
        self.trees.get(&lang)
    }
}

/// Resolve `key` for `lang`, echoing the key when it is missing.
pub fn translate(dict: &Dictionary, lang: Language, key: &str) -> String {
    dict.lookup(lang, key).unwrap_or(key).to_string()
}

/// Like [`translate`], substituting `{name}` placeholders from `args`.
pub fn format(dict: &Dictionary, lang: Language, key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(translate(dict, lang, key), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

/// Pick the site language from the browser's first preference.
pub fn negotiate(requested: &[LanguageIdentifier]) -> Language {
    match requested.first() {
        Some(id) if id.language.as_str() == "en" => Language::En,
        _ => Language::Es,
    }
}

/// Saved preference first, then the platform's preferred languages.
pub fn initial_language<S: crate::core::storage::PreferenceStore>(
    prefs: &Preferences<S>,
) -> Language {
    prefs
        .language()
        .unwrap_or_else(|| negotiate(&requested_languages()))
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Context handle: active language signal plus the dictionary it reads from.
#[derive(Clone, Copy)]
pub struct I18n {
    language: Signal<Language>,
    dictionary: &'static Dictionary,
}

impl I18n {
    pub fn language(&self) -> Language {
        (self.language)()
    }

    pub fn language_signal(&self) -> Signal<Language> {
        self.language
    }

    pub fn t(&self, key: &str) -> String {
        translate(self.dictionary, self.language(), key)
    }

    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        format(self.dictionary, self.language(), key, args)
    }

    /// Switch language, persist the choice and update `<html lang>`.
    pub fn set_language(&mut self, lang: Language) {
        if *self.language.peek() == lang {
            return;
        }
        tracing::debug!("[i18n] switching language to {lang}");
        self.language.set(lang);
        Preferences::platform().set_language(lang);
        platform::set_document_lang(lang.code());
    }

    pub fn toggle(&mut self) {
        let next = self.language.peek().other();
        self.set_language(next);
    }
}

/// Provide the [`I18n`] context to the tree. Call once from the root component.
pub fn use_i18n_provider() -> I18n {
    let language = use_signal(|| initial_language(&Preferences::platform()));
    let i18n = use_context_provider(|| I18n {
        language,
        dictionary: Dictionary::embedded(),
    });
    use_effect(move || platform::set_document_lang(language().code()));
    i18n
}

pub fn use_i18n() -> I18n {
    // Hook order must not depend on whether the provider is present.
    let fallback = use_signal(Language::default);
    if let Some(i18n) = try_use_context::<I18n>() {
        return i18n;
    }

    tracing::warn!("[i18n] missing I18n context, using a local default-language signal");
    I18n {
        language: fallback,
        dictionary: Dictionary::embedded(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_sources([
            (
                Language::Es,
                r#"{"hero": {"line1": "IA y negocio,"}, "footer": {"copyright": "© {year} Tauler Group."}}"#,
            ),
            (Language::En, r#"{"hero": {"line1": "AI and business,"}}"#),
        ])
        .unwrap()
    }

    #[test]
    fn dotted_lookup_resolves_per_language() {
        let dict = sample();
        assert_eq!(translate(&dict, Language::Es, "hero.line1"), "IA y negocio,");
        assert_eq!(translate(&dict, Language::En, "hero.line1"), "AI and business,");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let dict = sample();
        assert_eq!(translate(&dict, Language::En, "hero.line9"), "hero.line9");
        assert_eq!(translate(&dict, Language::En, "footer.copyright"), "footer.copyright");
    }

    #[test]
    fn branch_key_is_not_a_translation() {
        let dict = sample();
        assert_eq!(translate(&dict, Language::Es, "hero"), "hero");
        assert_eq!(translate(&dict, Language::Es, "hero.line1.deeper"), "hero.line1.deeper");
    }

    #[test]
    fn placeholders_are_substituted() {
        let dict = sample();
        let text = format(&dict, Language::Es, "footer.copyright", &[("year", "2026")]);
        assert_eq!(text, "© 2026 Tauler Group.");
    }

    #[test]
    fn malformed_source_reports_language() {
        let err = Dictionary::from_sources([(Language::En, "{ not json")]).unwrap_err();
        assert!(matches!(err, DictionaryError::Malformed { lang: Language::En, .. }));
    }

    #[test]
    fn embedded_dictionary_loads_both_languages() {
        let dict = Dictionary::load_embedded().expect("embedded dictionary");
        for lang in Language::ALL {
            assert!(dict.tree(lang).is_some(), "missing tree for {lang}");
        }
        assert_ne!(
            translate(&dict, Language::Es, "hero.line1"),
            translate(&dict, Language::En, "hero.line1")
        );
    }

    #[test]
    fn browser_preference_negotiation() {
        let en: LanguageIdentifier = "en-GB".parse().unwrap();
        let es: LanguageIdentifier = "es-ES".parse().unwrap();
        let fr: LanguageIdentifier = "fr-FR".parse().unwrap();
        assert_eq!(negotiate(&[en.clone(), es.clone()]), Language::En);
        assert_eq!(negotiate(&[es, en.clone()]), Language::Es);
        assert_eq!(negotiate(&[fr, en]), Language::Es);
        assert_eq!(negotiate(&[]), Language::Es);
    }

    thread_local! {
        static SEEN: std::cell::RefCell<Vec<Language>> = const { std::cell::RefCell::new(Vec::new()) };
    }

    #[component]
    fn LanguageReader() -> Element {
        let i18n = use_i18n();
        SEEN.with(|seen| seen.borrow_mut().push(i18n.language()));
        rsx! { p { {i18n.t("hero.line1")} } }
    }

    #[component]
    fn EnglishRoot() -> Element {
        let language = use_signal(|| Language::En);
        use_context_provider(|| I18n {
            language,
            dictionary: Dictionary::embedded(),
        });
        rsx! { LanguageReader {} }
    }

    fn render_and_rerender(dom: &mut VirtualDom) -> Vec<Language> {
        SEEN.with(|seen| seen.borrow_mut().clear());
        dom.rebuild_in_place();
        dom.mark_dirty(ScopeId::APP);
        let _ = dom.render_immediate_to_vec();
        SEEN.with(|seen| seen.borrow().clone())
    }

    #[test]
    fn reader_without_provider_stays_on_default_language() {
        let mut dom = VirtualDom::new(LanguageReader);
        let seen = render_and_rerender(&mut dom);
        assert!(!seen.is_empty());
        assert!(seen.iter().all(|lang| *lang == Language::Es), "{seen:?}");
    }

    #[test]
    fn provided_language_wins_over_fallback() {
        let mut dom = VirtualDom::new(EnglishRoot);
        SEEN.with(|seen| seen.borrow_mut().clear());
        dom.rebuild_in_place();
        assert_eq!(SEEN.with(|seen| seen.borrow().clone()), [Language::En]);
    }

    #[test]
    fn language_codes_round_trip_loosely() {
        assert_eq!(Language::from_code(" EN "), Some(Language::En));
        assert_eq!(Language::from_code("es"), Some(Language::Es));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::En.other(), Language::Es);
    }
}
