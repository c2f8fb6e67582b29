use dioxus::prelude::*;

use crate::components::Underline;
use crate::config::use_site_config;
use crate::core::motion::observe_reveal;
use crate::i18n::use_i18n;

use super::relay::{submit, HttpRelay};
use super::session::ContactSession;

#[component]
pub fn ContactSection() -> Element {
    let i18n = use_i18n();
    let config = use_site_config();
    let mut session = use_signal(ContactSession::default);

    let endpoint = config.form_endpoint.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let snapshot = session.with_mut(|s| {
            s.form.language = i18n.language();
            s.begin()
        });
        let Some(form) = snapshot else {
            return;
        };
        let endpoint = endpoint.clone();
        spawn(async move {
            let outcome = submit(&HttpRelay, &endpoint, &form).await;
            session.with_mut(|s| s.finish(outcome));
        });
    };

    let close_form = move |_: MouseEvent| session.with_mut(|s| s.close_form());

    let state = session.read().clone();
    let submit_label = if state.sending {
        i18n.t("contact.sending")
    } else {
        i18n.t("contact.submit")
    };

    rsx! {
        section { id: "contact", class: "contact reveal",
            onmounted: move |evt| observe_reveal(&evt.data()),
            div { class: "contact__intro",
                h2 { class: "contact__title",
                    Underline { {i18n.t("contact.title")} }
                }
                p { class: "section-lead", {i18n.t("contact.subtitle")} }
                p { class: "contact__direct",
                    span { {i18n.t("contact.emailLabel")} }
                    " "
                    a { href: config.mailto(), "{config.contact_email}" }
                }
            }

            div { class: "contact__cta",
                button {
                    class: "btn-primary",
                    r#type: "button",
                    onclick: move |_| session.with_mut(|s| s.open_form()),
                    {i18n.t("contact.openForm")}
                }
                a { class: "btn-ghost", href: "#capabilities", {i18n.t("contact.explore")} }
            }

            if state.open {
                div { class: "contact__modal", role: "dialog", aria_modal: "true",
                    div { class: "contact__backdrop", onclick: close_form }
                    div { class: "contact__panel",
                        div { class: "contact__panel-head",
                            h3 { class: "contact__form-title", {i18n.t("contact.formTitle")} }
                            button {
                                class: "contact__close",
                                r#type: "button",
                                aria_label: i18n.t("contact.closeForm"),
                                onclick: close_form,
                                "✕"
                            }
                        }
                        if state.sent {
                            div { class: "contact__success", role: "status",
                                h3 { {i18n.t("contact.successTitle")} }
                                p { {i18n.t("contact.successMessage")} }
                                button {
                                    class: "btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| session.with_mut(|s| s.send_another()),
                                    {i18n.t("contact.sendAnother")}
                                }
                            }
                        } else {
                            form { class: "contact__form", novalidate: true, onsubmit: on_submit,
                                div { class: "contact__row",
                                    label { class: "field",
                                        span { class: "field__label", {i18n.t("contact.nameLabel")} }
                                        input {
                                            name: "name",
                                            required: true,
                                            autocomplete: "name",
                                            placeholder: i18n.t("contact.namePlaceholder"),
                                            value: "{state.form.name}",
                                            oninput: move |evt| session.write().form.name = evt.value(),
                                        }
                                    }
                                    label { class: "field",
                                        span { class: "field__label", {i18n.t("contact.emailFieldLabel")} }
                                        input {
                                            r#type: "email",
                                            name: "email",
                                            required: true,
                                            autocomplete: "email",
                                            placeholder: i18n.t("contact.emailPlaceholder"),
                                            value: "{state.form.email}",
                                            oninput: move |evt| session.write().form.email = evt.value(),
                                        }
                                    }
                                }
                                label { class: "field",
                                    span { class: "field__label", {i18n.t("contact.companyLabel")} }
                                    input {
                                        name: "company",
                                        autocomplete: "organization",
                                        placeholder: i18n.t("contact.companyPlaceholder"),
                                        value: "{state.form.company}",
                                        oninput: move |evt| session.write().form.company = evt.value(),
                                    }
                                }
                                label { class: "field",
                                    span { class: "field__label", {i18n.t("contact.messageLabel")} }
                                    textarea {
                                        name: "message",
                                        required: true,
                                        rows: 5,
                                        placeholder: i18n.t("contact.messagePlaceholder"),
                                        value: "{state.form.message}",
                                        oninput: move |evt| session.write().form.message = evt.value(),
                                    }
                                }
                                input {
                                    class: "contact__honeypot",
                                    r#type: "text",
                                    name: "_gotcha",
                                    tabindex: "-1",
                                    autocomplete: "off",
                                    aria_hidden: "true",
                                    value: "{state.form.gotcha}",
                                    oninput: move |evt| session.write().form.gotcha = evt.value(),
                                }

                                if let Some(field) = state.invalid {
                                    p { class: "contact__error", role: "alert", {i18n.t(field.message_key())} }
                                }

                                div { class: "contact__actions",
                                    button {
                                        class: "btn-primary",
                                        r#type: "submit",
                                        disabled: state.sending,
                                        "{submit_label}"
                                    }
                                    if let Some(err) = state.error.as_ref() {
                                        span { class: "contact__error", role: "alert",
                                            {i18n.t("contact.errorMessage")}
                                            " ({err})"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
