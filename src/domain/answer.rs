//! The answers collected during one session.

use serde::{Deserialize, Serialize};

use super::{AppError, Preset};

/// Server name used by the catch-all preset.
pub const CATCH_ALL_SERVER_NAME: &str = "_";

/// Output name used by the catch-all preset.
pub const CATCH_ALL_NAME: &str = "default";

/// Cache max-age applied when caching is on and no value was given.
pub const DEFAULT_MAX_CACHE_AGE: &str = "6h";

/// Everything the renderer needs to produce one server block.
///
/// Field names are part of the persisted answers format and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Answer {
    pub preset: Preset,
    pub domains: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_or_redirect_target: Option<String>,
    pub listen_port: u16,
    #[serde(default)]
    pub is_default_server: bool,
    #[serde(default, rename = "sendHSTS")]
    pub send_hsts: bool,
    #[serde(default)]
    pub harden_security: bool,
    #[serde(default)]
    pub enable_asset_caching: bool,
    #[serde(default)]
    pub max_cache_age: String,
}

impl Answer {
    /// Minimal answer for `preset`; optional blocks off, port at the preset default (or 80).
    pub fn new(preset: Preset, domains: Vec<String>) -> Self {
        let answer = Self {
            preset,
            domains,
            document_root: None,
            upstream_or_redirect_target: None,
            listen_port: preset.default_port().unwrap_or(80),
            is_default_server: false,
            send_hsts: false,
            harden_security: false,
            enable_asset_caching: false,
            max_cache_age: String::new(),
        };
        answer.normalized()
    }

    /// The catch-all HTTP to HTTPS redirect.
    pub fn catch_all() -> Self {
        Self::new(Preset::DefaultHttpsRedirect, Vec::new())
    }

    /// Split a whitespace-separated domain list as typed by the user.
    pub fn split_domains(raw: &str) -> Vec<String> {
        raw.split_whitespace().map(str::to_string).collect()
    }

    /// Re-apply the rules the catch-all preset forces on its fields.
    pub fn normalized(mut self) -> Self {
        if self.preset.is_catch_all() {
            self.domains = vec![CATCH_ALL_SERVER_NAME.to_string()];
            self.is_default_server = true;
            self.document_root = None;
            self.upstream_or_redirect_target = None;
        }
        self
    }

    /// Canonical identifier used to name the output file.
    pub fn name(&self) -> &str {
        if self.preset.is_catch_all() {
            return CATCH_ALL_NAME;
        }
        self.domains.first().map(String::as_str).unwrap_or(CATCH_ALL_SERVER_NAME)
    }

    /// Domains as they appear after `server_name`.
    pub fn server_names(&self) -> String {
        self.domains.join(" ")
    }

    /// Cache max-age, falling back to the default when blank.
    pub fn cache_age(&self) -> &str {
        if self.max_cache_age.trim().is_empty() {
            DEFAULT_MAX_CACHE_AGE
        } else {
            &self.max_cache_age
        }
    }

    /// Whether the caching block applies to this answer.
    pub fn caching_applies(&self) -> bool {
        self.enable_asset_caching && self.preset.serves_static_files()
    }

    pub fn uses_tls(&self) -> bool {
        self.listen_port == 443
    }

    /// Check the invariants a persisted answer must satisfy before rendering.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.listen_port == 0 {
            return Err(AppError::invalid_answers("listenPort must be between 1 and 65535"));
        }
        if self.preset.is_catch_all() {
            return Ok(());
        }
        if self.domains.is_empty() {
            return Err(AppError::invalid_answers("domains must contain at least one name"));
        }
        if let Some(bad) = self
            .domains
            .iter()
            .find(|domain| domain.is_empty() || domain.chars().any(char::is_whitespace))
        {
            return Err(AppError::invalid_answers(format!(
                "domain '{bad}' must be a single non-empty word"
            )));
        }
        if self.preset.needs_document_root() && is_blank(&self.document_root) {
            return Err(AppError::invalid_answers(format!(
                "documentRoot is required for preset {:?}",
                self.preset
            )));
        }
        if self.preset.needs_target() && is_blank(&self.upstream_or_redirect_target) {
            return Err(AppError::invalid_answers(format!(
                "upstreamOrRedirectTarget is required for preset {:?}",
                self.preset
            )));
        }
        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}
