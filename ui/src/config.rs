//! Site-wide settings baked in at compile time.
//!
//! Defaults match production; `TAULER_FORM_ENDPOINT`, `TAULER_CONTACT_EMAIL`
//! and `TAULER_AUTOPLAY_MS` override them when set in the build environment.

use dioxus::prelude::*;

use crate::carousel::AUTOPLAY_INTERVAL_MS;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/mandzjzo";
pub const DEFAULT_CONTACT_EMAIL: &str = "info@taulergroup.com";

/// Registered company details shown on the legal pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDetails {
    pub legal_name: &'static str,
    pub tax_id: &'static str,
    pub address: &'static str,
}

impl Default for CompanyDetails {
    fn default() -> Self {
        Self {
            legal_name: "TAULER GROUP VENTURES S.L.",
            tax_id: "B21742259",
            address: "Plaza Curtidos Hnos. Dorta, 7 - 38005, Santa Cruz de Tfe.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Form relay that receives contact submissions.
    pub form_endpoint: String,
    pub contact_email: String,
    pub autoplay_interval_ms: u64,
    pub company: CompanyDetails,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            autoplay_interval_ms: AUTOPLAY_INTERVAL_MS,
            company: CompanyDetails::default(),
        }
    }
}

impl SiteConfig {
    /// Defaults plus whatever the build environment provides.
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("TAULER_FORM_ENDPOINT"),
            option_env!("TAULER_CONTACT_EMAIL"),
            option_env!("TAULER_AUTOPLAY_MS"),
        )
    }

    /// Apply optional overrides; blank values and unparsable intervals are ignored.
    pub fn with_overrides(
        form_endpoint: Option<&str>,
        contact_email: Option<&str>,
        autoplay_ms: Option<&str>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = non_blank(form_endpoint) {
            config.form_endpoint = endpoint.to_string();
        }
        if let Some(email) = non_blank(contact_email) {
            config.contact_email = email.to_string();
        }
        if let Some(raw) = non_blank(autoplay_ms) {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => config.autoplay_interval_ms = ms,
                _ => tracing::warn!("[config] ignoring TAULER_AUTOPLAY_MS={raw:?}"),
            }
        }
        config
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Provide the config to the tree. Call once from the root component.
pub fn use_site_config_provider() -> SiteConfig {
    use_context_provider(SiteConfig::from_build_env)
}

pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_else(SiteConfig::from_build_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_relay() {
        let config = SiteConfig::default();
        assert_eq!(config.form_endpoint, "https://formspree.io/f/mandzjzo");
        assert_eq!(config.autoplay_interval_ms, 6_000);
        assert_eq!(config.mailto(), "mailto:info@taulergroup.com");
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = SiteConfig::with_overrides(
            Some("https://relay.test/f/abc"),
            Some("hola@example.com"),
            Some("2500"),
        );
        assert_eq!(config.form_endpoint, "https://relay.test/f/abc");
        assert_eq!(config.contact_email, "hola@example.com");
        assert_eq!(config.autoplay_interval_ms, 2_500);
    }

    #[test]
    fn blank_or_bad_overrides_are_ignored() {
        let config = SiteConfig::with_overrides(Some("  "), None, Some("soon"));
        assert_eq!(config, SiteConfig::default());
        let zero = SiteConfig::with_overrides(None, None, Some("0"));
        assert_eq!(zero.autoplay_interval_ms, AUTOPLAY_INTERVAL_MS);
    }
}
