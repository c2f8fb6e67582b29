use dioxus::prelude::*;

use crate::config::use_site_config;
use crate::i18n::use_i18n;
use crate::routing::Page;

const AEPD_URL: &str = "https://www.aepd.es";

/// Common frame for the legal pages: eyebrow, title, body and a way back.
#[component]
fn LegalShell(title_key: &'static str, children: Element) -> Element {
    let i18n = use_i18n();
    rsx! {
        section { class: "page page-legal",
            div { class: "legal",
                p { class: "eyebrow", {i18n.t("legal.info")} }
                h1 { class: "legal__title", {i18n.t(title_key)} }
                p { class: "legal__updated", {i18n.t("legal.lastUpdate")} }
                div { class: "legal__content", {children} }
                a { class: "btn-ghost legal__back", href: Page::Landing.hash(),
                    "← "
                    {i18n.t("legal.backHome")}
                }
            }
        }
    }
}

/// Paragraph followed by a mail link and a full stop.
#[component]
fn MailSentence(text_key: &'static str) -> Element {
    let i18n = use_i18n();
    let config = use_site_config();
    rsx! {
        p {
            {i18n.t(text_key)}
            " "
            a { href: config.mailto(), "{config.contact_email}" }
            "."
        }
    }
}

#[component]
pub fn PrivacyPolicy() -> Element {
    let i18n = use_i18n();
    let config = use_site_config();
    let company = config.company.clone();

    rsx! {
        LegalShell { title_key: "legal.privacyTitle",
            h3 { {i18n.t("legal.responsibleTitle")} }
            p { strong { "{company.legal_name}" } }
            p { {i18n.t("legal.responsibleTaxId")} " {company.tax_id}" }
            p { {i18n.t("legal.responsibleAddress")} " {company.address}" }
            p {
                {i18n.t("legal.responsibleEmail")}
                " "
                a { href: config.mailto(), "{config.contact_email}" }
            }

            h3 { {i18n.t("legal.purposeTitle")} }
            p { {i18n.t("legal.purposeIntro")} }
            ul {
                li { {i18n.t("legal.purpose1")} }
                li { {i18n.t("legal.purpose2")} }
                li { {i18n.t("legal.purpose3")} }
                li { {i18n.t("legal.purpose4")} }
            }

            h3 { {i18n.t("legal.legitimationTitle")} }
            p { {i18n.t("legal.legitimationIntro")} }
            ul {
                li { {i18n.t("legal.legitimation1")} }
                li { {i18n.t("legal.legitimation2")} }
                li { {i18n.t("legal.legitimation3")} }
            }

            h3 { {i18n.t("legal.retentionTitle")} }
            p { {i18n.t("legal.retentionText")} }

            h3 { {i18n.t("legal.recipientsTitle")} }
            p { {i18n.t("legal.recipientsText")} }

            h3 { {i18n.t("legal.rightsTitle")} }
            MailSentence { text_key: "legal.rightsText" }

            h3 { {i18n.t("legal.authorityTitle")} }
            p {
                {i18n.t("legal.authorityText")}
                " "
                a { href: AEPD_URL, target: "_blank", rel: "noopener noreferrer", {i18n.t("legal.authorityLink")} }
                " "
                {i18n.t("legal.authorityEnd")}
            }
        }
    }
}

#[component]
pub fn CookiesPolicy() -> Element {
    let i18n = use_i18n();
    rsx! {
        LegalShell { title_key: "legal.cookiesTitle",
            h3 { {i18n.t("legal.cookiesWhat")} }
            p { {i18n.t("legal.cookiesWhatText")} }

            h3 { {i18n.t("legal.cookiesTypes")} }
            h4 { {i18n.t("legal.cookiesTechnical")} }
            ul {
                li { {i18n.t("legal.cookiesTechnical1")} }
                li { {i18n.t("legal.cookiesTechnical2")} }
            }
            h4 { {i18n.t("legal.cookiesAnalytics")} }
            ul {
                li { {i18n.t("legal.cookiesAnalytics1")} }
                li { {i18n.t("legal.cookiesAnalytics2")} }
            }
            h4 { {i18n.t("legal.cookiesPreferences")} }
            ul {
                li { {i18n.t("legal.cookiesPreferences1")} }
                li { {i18n.t("legal.cookiesPreferences2")} }
            }

            h3 { {i18n.t("legal.cookiesManage")} }
            p { {i18n.t("legal.cookiesManageText1")} }
            p { {i18n.t("legal.cookiesManageText2")} }

            h3 { {i18n.t("legal.cookiesMore")} }
            MailSentence { text_key: "legal.cookiesMoreText" }
        }
    }
}

#[component]
pub fn LegalNotice() -> Element {
    let i18n = use_i18n();
    let config = use_site_config();
    let company = config.company.clone();

    rsx! {
        LegalShell { title_key: "legal.legalNoticeTitle",
            h3 { {i18n.t("legal.companyData")} }
            p {
                {i18n.t("legal.companyOwnership")}
                " "
                strong { "{company.legal_name}" }
                ", "
                {i18n.t("legal.responsibleTaxId")}
                " {company.tax_id}, {company.address}"
            }
            MailSentence { text_key: "legal.companyContact" }

            h3 { {i18n.t("legal.applicableLaw")} }
            p { {i18n.t("legal.applicableLawText")} }

            h3 { {i18n.t("legal.useConditions")} }
            p { {i18n.t("legal.useConditionsText1")} }
            p { {i18n.t("legal.useConditionsText2")} }
            p { {i18n.t("legal.useConditionsText3")} }

            h3 { {i18n.t("legal.intellectualProperty")} }
            p { {i18n.t("legal.intellectualPropertyText1")} }
            p { {i18n.t("legal.intellectualPropertyText2")} }
            p { {i18n.t("legal.intellectualPropertyText3")} }
            p { {i18n.t("legal.intellectualPropertyText4")} }
            p { {i18n.t("legal.intellectualPropertyText5")} }
            p { {i18n.t("legal.intellectualPropertyText6")} }

            h3 { {i18n.t("legal.generalConditions")} }
            p { {i18n.t("legal.generalConditionsText1")} }
            p { {i18n.t("legal.generalConditionsText2")} }
            p {
                {i18n.t("legal.generalConditionsText3")}
                " "
                a { href: Page::Privacy.hash(), {i18n.t("legal.privacyPolicyLink")} }
                " "
                {i18n.t("legal.ourWeb")}
            }
        }
    }
}
