//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for docsite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Documentation routing settings.
    #[serde(default)]
    pub docs: DocsConfig,

    /// Landing page settings.
    #[serde(default)]
    pub landing: LandingConfig,

    /// Top navigation bar.
    #[serde(default)]
    pub navbar: NavbarConfig,

    /// Page footer.
    #[serde(default)]
    pub footer: FooterConfig,

    /// Theme values passed through untouched (color mode, code themes, ...).
    #[serde(default)]
    pub theme: toml::Table,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Short tagline shown under the title.
    #[serde(default)]
    pub tagline: Option<String>,

    /// Favicon path relative to the static root.
    #[serde(default)]
    pub favicon: Option<String>,

    /// Production URL without path (e.g., "https://docs.example.com").
    pub url: String,

    /// Path under which the site is served. Must start and end with `/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Hosting organization name.
    #[serde(default)]
    pub organization_name: Option<String>,

    /// Hosting project name.
    #[serde(default)]
    pub project_name: Option<String>,

    /// What to do with internal links that do not resolve to a document.
    #[serde(default)]
    pub on_broken_links: BrokenLinkPolicy,

    /// Locale settings.
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// Policy applied to unresolved internal links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Fail the build.
    #[default]
    Throw,
    /// Report and continue.
    Warn,
    /// Do not report.
    Ignore,
}

/// Locale configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Locale used for the `lang` attribute.
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// All locales the site is built for.
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
}

/// Documentation routing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Sidebar manifest path, relative to the configuration file.
    #[serde(default = "default_sidebar_path")]
    pub sidebar_path: String,

    /// Route segment all documents live under.
    #[serde(default = "default_route_base_path")]
    pub route_base_path: String,

    /// Base URL for "edit this page" links.
    #[serde(default)]
    pub edit_url: Option<String>,
}

/// Landing page configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingConfig {
    /// Landing page data path, relative to the configuration file.
    #[serde(default = "default_landing_path")]
    pub path: String,
}

/// Navigation bar configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavbarConfig {
    /// Text shown next to the logo.
    #[serde(default)]
    pub title: Option<String>,

    /// Logo image.
    #[serde(default)]
    pub logo: Option<LogoConfig>,

    /// Navbar entries in display order.
    #[serde(default)]
    pub items: Vec<NavbarItem>,
}

/// Navbar logo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoConfig {
    /// Alternative text.
    pub alt: String,

    /// Image source.
    pub src: String,

    /// Image source used in dark mode.
    #[serde(default)]
    pub src_dark: Option<String>,
}

/// Side of the navbar an item sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

/// A single navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavbarItem {
    /// Internal route.
    Link {
        to: String,
        label: String,
        #[serde(default)]
        position: NavbarPosition,
    },
    /// Link to the first document of a sidebar.
    DocSidebar {
        sidebar_id: String,
        label: String,
        #[serde(default)]
        position: NavbarPosition,
    },
    /// External URL.
    Href {
        href: String,
        label: String,
        #[serde(default)]
        position: NavbarPosition,
    },
}

impl NavbarItem {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link { label, .. } | Self::DocSidebar { label, .. } | Self::Href { label, .. } => {
                label
            }
        }
    }

    /// Navbar side.
    #[must_use]
    pub fn position(&self) -> NavbarPosition {
        match self {
            Self::Link { position, .. }
            | Self::DocSidebar { position, .. }
            | Self::Href { position, .. } => *position,
        }
    }
}

/// Footer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterConfig {
    /// Footer style ("dark" or "light").
    #[serde(default = "default_footer_style")]
    pub style: String,

    /// Copyright line. `{year}` is replaced with the current year.
    #[serde(default)]
    pub copyright: Option<String>,

    /// Link columns.
    #[serde(default)]
    pub links: Vec<FooterLinkGroup>,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterLinkGroup {
    /// Column heading.
    pub title: String,

    /// Links in display order.
    #[serde(default)]
    pub items: Vec<FooterLink>,
}

/// A footer link. Exactly one of `to` and `href` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterLink {
    /// Display label.
    pub label: String,

    /// Internal route.
    #[serde(default)]
    pub to: Option<String>,

    /// External URL.
    #[serde(default)]
    pub href: Option<String>,
}

impl FooterLink {
    /// The link target, internal route first.
    #[must_use]
    pub fn target(&self) -> &str {
        self.to
            .as_deref()
            .or(self.href.as_deref())
            .unwrap_or_default()
    }
}

// Default value functions
fn default_base_url() -> String {
    "/".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_locales() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_sidebar_path() -> String {
    "sidebars.toml".to_string()
}

fn default_route_base_path() -> String {
    "docs".to_string()
}

fn default_landing_path() -> String {
    "landing.toml".to_string()
}

fn default_footer_style() -> String {
    "dark".to_string()
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            locales: default_locales(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            sidebar_path: default_sidebar_path(),
            route_base_path: default_route_base_path(),
            edit_url: None,
        }
    }
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            path: default_landing_path(),
        }
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            style: default_footer_style(),
            copyright: None,
            links: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            CoreError::Toml(source) => CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                source,
            ),
            other => other,
        })?;

        tracing::debug!(path = %path.display(), title = %config.site.title, "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, with `DOCSITE__*` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("DOCSITE").separator("__"))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.url.is_empty() {
            return Err(CoreError::config("site.url cannot be empty"));
        }

        if !self.site.base_url.starts_with('/') || !self.site.base_url.ends_with('/') {
            return Err(CoreError::config(format!(
                "site.base_url must start and end with '/', got '{}'",
                self.site.base_url
            )));
        }

        if !self
            .site
            .i18n
            .locales
            .contains(&self.site.i18n.default_locale)
        {
            return Err(CoreError::config(format!(
                "site.i18n.default_locale '{}' is not listed in site.i18n.locales",
                self.site.i18n.default_locale
            )));
        }

        for group in &self.footer.links {
            for link in &group.items {
                if link.to.is_some() == link.href.is_some() {
                    return Err(CoreError::config(format!(
                        "footer link '{}' in '{}' must set exactly one of `to` or `href`",
                        link.label, group.title
                    )));
                }
            }
        }

        if self.site.url.ends_with('/') {
            tracing::warn!("site.url should not have a trailing slash");
        }

        Ok(())
    }

    /// Prefix an internal route with the site base URL.
    #[must_use]
    pub fn route(&self, path: &str) -> String {
        join_route(&[self.site.base_url.as_str(), path])
    }

    /// Route of a document page, e.g. `/docs/api/chat/streaming`.
    #[must_use]
    pub fn doc_route(&self, id: &str) -> String {
        join_route(&[
            self.site.base_url.as_str(),
            self.docs.route_base_path.as_str(),
            id,
        ])
    }

    /// Get the full URL for a route-relative path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.url.trim_end_matches('/');
        format!("{base}{}", self.route(path))
    }
}

/// Join route segments with single slashes and a leading slash.
#[must_use]
pub fn join_route(segments: &[&str]) -> String {
    let mut route = String::from("/");
    for segment in segments.iter().map(|s| s.trim_matches('/')) {
        if segment.is_empty() {
            continue;
        }
        if !route.ends_with('/') {
            route.push('/');
        }
        route.push_str(segment);
    }
    route
}
