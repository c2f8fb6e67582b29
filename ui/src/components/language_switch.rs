use dioxus::prelude::*;

use crate::i18n::use_i18n;

/// `ES / EN` pill: current language first, the other one dimmed.
#[component]
pub fn LanguageSwitch(on_toggle: Option<EventHandler<()>>) -> Element {
    let mut i18n = use_i18n();
    let current = i18n.language();
    let current_code = current.code().to_uppercase();
    let other_code = current.other().code().to_uppercase();

    rsx! {
        button {
            class: "language-switch",
            r#type: "button",
            aria_label: i18n.t("nav.toggleLabel"),
            onclick: move |_| {
                i18n.toggle();
                if let Some(handler) = on_toggle {
                    handler.call(());
                }
            },
            span { class: "language-switch__current", "{current_code}" }
            span { class: "language-switch__sep", "/" }
            span { class: "language-switch__other", "{other_code}" }
        }
    }
}
