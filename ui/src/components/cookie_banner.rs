use dioxus::prelude::*;

use crate::core::storage::Preferences;
use crate::i18n::use_i18n;
use crate::routing::Page;

/// Bottom consent bar; hidden for good once the visitor accepts.
#[component]
pub fn CookieBanner() -> Element {
    let i18n = use_i18n();
    let mut visible = use_signal(|| !Preferences::platform().cookies_accepted());

    if !visible() {
        return rsx! {};
    }

    rsx! {
        div { class: "cookie-banner", role: "region", aria_label: i18n.t("cookieBanner.cookiePolicy"),
            p { class: "cookie-banner__text",
                {i18n.t("cookieBanner.text")}
                " "
                a { href: Page::Cookies.hash(), {i18n.t("cookieBanner.cookiePolicy")} }
                " "
                {i18n.t("cookieBanner.and")}
                " "
                a { href: Page::Privacy.hash(), {i18n.t("cookieBanner.privacyPolicy")} }
                "."
            }
            div { class: "cookie-banner__actions",
                a { class: "btn-ghost", href: Page::Cookies.hash(), {i18n.t("cookieBanner.moreInfo")} }
                button {
                    class: "btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        Preferences::platform().accept_cookies();
                        tracing::debug!("[cookies] consent accepted");
                        visible.set(false);
                    },
                    {i18n.t("cookieBanner.accept")}
                }
            }
        }
    }
}
