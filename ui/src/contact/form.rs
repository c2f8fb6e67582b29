use thiserror::Error;

use crate::i18n::Language;

/// Subject used when the sender left the name blank.
pub const FALLBACK_SUBJECT: &str = "Website contact";

/// A field the user has to fix before the form can be sent.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("name is required")]
    NameRequired,
    #[error("email is required")]
    EmailRequired,
    #[error("email must contain `@`")]
    EmailInvalid,
    #[error("message is required")]
    MessageRequired,
}

impl FieldError {
    /// Dictionary key for the localized message.
    pub fn message_key(self) -> &'static str {
        match self {
            FieldError::NameRequired => "contact.errors.nameRequired",
            FieldError::EmailRequired => "contact.errors.emailRequired",
            FieldError::EmailInvalid => "contact.errors.emailInvalid",
            FieldError::MessageRequired => "contact.errors.messageRequired",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    /// Honeypot; real users never see or fill it.
    pub gotcha: String,
    pub language: Language,
}

impl ContactForm {
    /// `"name · company"`, `"name"` without a company, or [`FALLBACK_SUBJECT`].
    pub fn subject(&self) -> String {
        let name = self.name.trim();
        let company = self.company.trim();
        match (name.is_empty(), company.is_empty()) {
            (true, _) => FALLBACK_SUBJECT.to_string(),
            (false, true) => name.to_string(),
            (false, false) => format!("{name} · {company}"),
        }
    }

    pub fn reply_to(&self) -> Option<&str> {
        let email = self.email.trim();
        (!email.is_empty()).then_some(email)
    }

    /// First problem in field order, if any.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.trim().is_empty() {
            return Err(FieldError::NameRequired);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FieldError::EmailRequired);
        }
        if !email.contains('@') {
            return Err(FieldError::EmailInvalid);
        }
        if self.message.trim().is_empty() {
            return Err(FieldError::MessageRequired);
        }
        Ok(())
    }

    /// Wire fields in submission order, including the derived relay hints.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("language", self.language.code().to_string()),
            ("name", self.name.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("company", self.company.trim().to_string()),
            ("message", self.message.trim().to_string()),
            ("_gotcha", self.gotcha.clone()),
        ];
        if let Some(reply_to) = self.reply_to() {
            fields.push(("_replyto", reply_to.to_string()));
        }
        fields.push(("_subject", self.subject()));
        fields
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        self.fields()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Empty every user field; the language stays.
    pub fn clear(&mut self) {
        *self = Self {
            language: self.language,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            company: "Acme".into(),
            message: "Hola".into(),
            gotcha: String::new(),
            language: Language::Es,
        }
    }

    #[test]
    fn subject_prefers_name_and_company() {
        let mut form = filled();
        assert_eq!(form.subject(), "Ana · Acme");
        form.company = "  ".into();
        assert_eq!(form.subject(), "Ana");
        form.name.clear();
        form.company = "Acme".into();
        assert_eq!(form.subject(), "Website contact");
    }

    #[test]
    fn validation_reports_first_problem() {
        assert_eq!(filled().validate(), Ok(()));

        let mut form = filled();
        form.name = " ".into();
        form.email.clear();
        assert_eq!(form.validate(), Err(FieldError::NameRequired));

        let mut form = filled();
        form.email.clear();
        assert_eq!(form.validate(), Err(FieldError::EmailRequired));
        form.email = "ana.example.com".into();
        assert_eq!(form.validate(), Err(FieldError::EmailInvalid));

        let mut form = filled();
        form.message = "\n".into();
        assert_eq!(form.validate(), Err(FieldError::MessageRequired));
    }

    #[test]
    fn company_is_optional() {
        let mut form = filled();
        form.company.clear();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn encoded_body_carries_relay_hints() {
        let body = filled().encode();
        assert!(body.starts_with("language=es&name=Ana&"));
        assert!(body.contains("email=ana%40example.com"));
        assert!(body.contains("_gotcha=&"));
        assert!(body.contains("_replyto=ana%40example.com"));
        assert!(body.ends_with("_subject=Ana%20%C2%B7%20Acme"));
    }

    #[test]
    fn reply_to_is_omitted_without_email() {
        let mut form = filled();
        form.email.clear();
        assert!(form.fields().iter().all(|(key, _)| *key != "_replyto"));
    }

    #[test]
    fn clear_keeps_language() {
        let mut form = filled();
        form.language = Language::En;
        form.clear();
        assert_eq!(
            form,
            ContactForm {
                language: Language::En,
                ..ContactForm::default()
            }
        );
    }

    #[test]
    fn field_errors_map_to_dictionary_keys() {
        assert_eq!(FieldError::EmailInvalid.message_key(), "contact.errors.emailInvalid");
    }
}
