use std::collections::BTreeSet;

use serde_json::Value;

/// Translation completeness test.
/// Ensures the English content files provide exactly the keys of the Spanish
/// reference files (`es` is the default language), and that placeholders
/// survive translation.
///
/// If you add a key, add it to both `ui/i18n/es/site.json` and
/// `ui/i18n/en/site.json`, then run `cargo test -p tauler-ui`.
const ES_SITE: &str = include_str!("../i18n/es/site.json");
const EN_SITE: &str = include_str!("../i18n/en/site.json");
const ES_SLIDES: &str = include_str!("../i18n/es/slides.json");
const EN_SLIDES: &str = include_str!("../i18n/en/slides.json");

fn parse(src: &str, name: &str) -> Value {
    serde_json::from_str(src).unwrap_or_else(|err| panic!("{name} is not valid JSON: {err}"))
}

/// Dotted paths of every string leaf.
fn leaves(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                leaves(child, &path, out);
            }
        }
        Value::String(_) => {
            out.insert(prefix.to_string());
        }
        other => panic!("unexpected {other:?} at {prefix:?}; only objects and strings are allowed"),
    }
}

fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a str> {
    path.split('.')
        .try_fold(value, |node, segment| node.get(segment))
        .and_then(Value::as_str)
}

/// `{name}` placeholders in a string.
fn placeholders(text: &str) -> BTreeSet<&str> {
    text.split('{')
        .skip(1)
        .filter_map(|part| part.split_once('}').map(|(name, _)| name))
        .collect()
}

#[test]
fn english_has_all_spanish_keys() {
    let es = parse(ES_SITE, "es/site.json");
    let en = parse(EN_SITE, "en/site.json");

    let mut es_keys = BTreeSet::new();
    let mut en_keys = BTreeSet::new();
    leaves(&es, "", &mut es_keys);
    leaves(&en, "", &mut en_keys);
    assert!(!es_keys.is_empty(), "es/site.json contains no keys.");

    let missing: Vec<_> = es_keys.difference(&en_keys).collect();
    let extra: Vec<_> = en_keys.difference(&es_keys).collect();
    if !missing.is_empty() || !extra.is_empty() {
        panic!(
            "Translation completeness check failed:\n  missing in en: {missing:?}\n  only in en: {extra:?}"
        );
    }
}

#[test]
fn placeholders_survive_translation() {
    let es = parse(ES_SITE, "es/site.json");
    let en = parse(EN_SITE, "en/site.json");
    let mut keys = BTreeSet::new();
    leaves(&es, "", &mut keys);

    for key in keys {
        let es_text = lookup(&es, &key).unwrap_or_default();
        let en_text = lookup(&en, &key).unwrap_or_default();
        assert_eq!(placeholders(es_text), placeholders(en_text), "placeholder mismatch in {key}");
    }
    assert!(lookup(&es, "footer.copyright").is_some_and(|t| t.contains("{year}")));
    assert!(lookup(&en, "capabilities.goTo").is_some_and(|t| t.contains("{n}")));
}

#[test]
fn slide_decks_line_up() {
    let es = parse(ES_SLIDES, "es/slides.json");
    let en = parse(EN_SLIDES, "en/slides.json");
    let (Some(es), Some(en)) = (es.as_array(), en.as_array()) else {
        panic!("slides.json must be a JSON array");
    };
    assert_eq!(es.len(), en.len(), "both languages must show the same number of slides");
    assert!(es.len() >= 2, "the looping carousel needs at least two slides");

    for (idx, (a, b)) in es.iter().zip(en).enumerate() {
        for field in ["title", "intro", "cta"] {
            assert!(a.get(field).and_then(Value::as_str).is_some(), "es slide {idx} lacks {field}");
            assert!(b.get(field).and_then(Value::as_str).is_some(), "en slide {idx} lacks {field}");
        }
    }
}
