
use crate::i18n::{Dictionary, Language};

/// Panic listing every key in `keys` that does not resolve in some language.
pub(crate) fn assert_keys_resolve<S: AsRef<str>>(keys: impl IntoIterator<Item = S>) {
    let dict = Dictionary::embedded();
    let missing: Vec<String> = keys
        .into_iter()
        .flat_map(|key| {
            let key = key.as_ref().to_string();
            Language::ALL
                .into_iter()
                .filter(|lang| dict.lookup(*lang, &key).is_none())
                .map(|lang| format!("{}: {key}", lang.code()))
                .collect::<Vec<_>>()
        })
        .collect();
    assert!(missing.is_empty(), "unresolved keys:\n{}", missing.join("\n"));
}

#[test]
fn resolving_keys_pass_silently() {
    assert_keys_resolve(["hero.line1", "contact.openForm"]);
}

#[test]
#[should_panic(expected = "es: hero.nope")]
fn unresolved_keys_are_listed_per_language() {
    assert_keys_resolve(["hero.line1", "hero.nope"]);
}
