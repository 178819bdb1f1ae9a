use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in virtual server layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// Static site with `index index.html`.
    StaticIndexed,
    /// File hosting without an index.
    StaticBare,
    /// Single-page app whose routes fall back to `/index.html`.
    #[serde(rename = "RoutedSPA")]
    RoutedSpa,
    /// PHP site through fastcgi and php-fpm.
    #[serde(rename = "PHPFastCGI")]
    PhpFastCgi,
    /// Proxy requests to a port or a site.
    ReverseProxy,
    /// Permanent redirection to another URL.
    PermanentRedirect,
    /// Proxy listening on a user-chosen port.
    ProxyCustomPort,
    /// Catch-all server sending every HTTP request to HTTPS.
    #[serde(rename = "DefaultHTTPSRedirect")]
    DefaultHttpsRedirect,
}

impl Preset {
    /// All presets in menu order.
    pub const ALL: [Preset; 8] = [
        Preset::StaticIndexed,
        Preset::StaticBare,
        Preset::RoutedSpa,
        Preset::PhpFastCgi,
        Preset::ReverseProxy,
        Preset::PermanentRedirect,
        Preset::ProxyCustomPort,
        Preset::DefaultHttpsRedirect,
    ];

    /// Menu number shown to the user (1-based).
    pub fn menu_number(self) -> usize {
        match self {
            Preset::StaticIndexed => 1,
            Preset::StaticBare => 2,
            Preset::RoutedSpa => 3,
            Preset::PhpFastCgi => 4,
            Preset::ReverseProxy => 5,
            Preset::PermanentRedirect => 6,
            Preset::ProxyCustomPort => 7,
            Preset::DefaultHttpsRedirect => 8,
        }
    }

    pub fn from_menu_number(number: i64) -> Option<Preset> {
        Preset::ALL.into_iter().find(|preset| preset.menu_number() as i64 == number)
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Preset::StaticIndexed => "Create static site config (with index)",
            Preset::StaticBare => "Create config to host files (w/o index)",
            Preset::RoutedSpa => "Create config for Angular/Vue production site with routing",
            Preset::PhpFastCgi => "Serve a PHP site with fastcgi and php-fpm",
            Preset::ReverseProxy => "Proxy pass requests to a port or a site",
            Preset::PermanentRedirect => "Permanent URL redirection to someplace else",
            Preset::ProxyCustomPort => "Proxy pass requests with a custom port number",
            Preset::DefaultHttpsRedirect => "Configure to forward all HTTP requests to HTTPS",
        }
    }

    /// Whether the preset serves files from a document root.
    pub fn needs_document_root(self) -> bool {
        matches!(
            self,
            Preset::StaticIndexed | Preset::StaticBare | Preset::RoutedSpa | Preset::PhpFastCgi
        )
    }

    /// Whether the preset forwards to an upstream or redirect target.
    pub fn needs_target(self) -> bool {
        matches!(
            self,
            Preset::ReverseProxy | Preset::PermanentRedirect | Preset::ProxyCustomPort
        )
    }

    /// Static asset caching is only offered where nginx serves the files itself.
    pub fn serves_static_files(self) -> bool {
        self.needs_document_root()
    }

    pub fn is_catch_all(self) -> bool {
        self == Preset::DefaultHttpsRedirect
    }

    /// Listen port used unless the user overrides it. `None` means the port must be asked.
    pub fn default_port(self) -> Option<u16> {
        match self {
            Preset::ProxyCustomPort => None,
            Preset::DefaultHttpsRedirect => Some(80),
            _ => Some(443),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
