//! HTML generation for the landing page and sidebar pages.
//!
//! Builds markup fragments (navbar, hero, statistics, quick navigation, card
//! sections, footer) and slots them into the layouts from [`crate::template`].

use chrono::{Datelike, Utc};
use docsite_core::{
    Icon, NavbarItem, Site,
    config::{FooterConfig, NavbarPosition},
    landing::ButtonVariant,
};
use thiserror::Error;
use tracing::debug;

use crate::{
    cards::CardRenderer,
    sidebar::{ExpansionState, SidebarRenderer},
    template::{TemplateContext, TemplateError, TemplateRegistry},
};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// The requested sidebar is not in the manifest.
    #[error("unknown sidebar: {0}")]
    UnknownSidebar(String),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// Escape text for use in element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Final `href` for an authored link: internal routes get the base URL prefix.
#[must_use]
pub fn link_href(config: &docsite_core::Config, link: &str) -> String {
    if docsite_core::is_external(link) || link.starts_with('#') {
        link.to_string()
    } else {
        config.route(link)
    }
}

/// Markup for a glyph placeholder, styled by the `icon--<name>` class.
#[must_use]
pub fn icon_html(icon: Icon, size: u32) -> String {
    format!(
        r#"<span class="icon icon--{icon}" data-icon="{icon}" style="width:{size}px;height:{size}px" aria-hidden="true"></span>"#
    )
}

/// Page generator for one loaded site.
#[derive(Debug)]
pub struct HtmlGenerator<'a> {
    templates: TemplateRegistry,
    site: &'a Site,
}

impl<'a> HtmlGenerator<'a> {
    /// Create a generator with the built-in templates.
    #[must_use]
    pub fn new(site: &'a Site) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            site,
        }
    }

    /// Create a generator with custom templates.
    #[must_use]
    pub fn with_templates(site: &'a Site, templates: TemplateRegistry) -> Self {
        Self { templates, site }
    }

    /// Generate the landing page.
    pub fn generate_landing(&self) -> Result<String> {
        let landing = &self.site.landing;
        let cards = CardRenderer::new(&self.site.config);
        debug!(sections = landing.sections.len(), "generating landing page");

        let sections: Vec<String> = landing
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| cards.section_to_html(section, index % 2 == 1))
            .collect();

        let ctx = TemplateContext::new()
            .with_var("hero", self.hero_html())
            .with_optional("stats", self.stats_html())
            .with_optional("quick_nav", self.quick_nav_html())
            .with_var("sections", sections.join("\n"));
        let inner_html = self.templates.render("landing", &ctx)?;

        self.wrap(
            &landing.title,
            landing.description.as_deref(),
            "/",
            &inner_html,
        )
    }

    /// Generate the overview page of one sidebar, with its authored expansion.
    pub fn generate_sidebar_page(&self, sidebar_id: &str) -> Result<String> {
        let sidebar = self
            .site
            .sidebars
            .get(sidebar_id)
            .ok_or_else(|| HtmlError::UnknownSidebar(sidebar_id.to_string()))?;
        debug!(sidebar = sidebar_id, "generating sidebar page");

        let renderer = SidebarRenderer::new(&self.site.config);
        let view = renderer.render_static(sidebar, &ExpansionState::new());
        let title = self.sidebar_title(sidebar_id);
        let summary = format!(
            "{} documents in {} categories.",
            sidebar.document_count(),
            sidebar.category_count()
        );

        let ctx = TemplateContext::new()
            .with_var("sidebar", renderer.to_html(&view, None))
            .with_var("title", escape_html(&title))
            .with_var("summary", summary);
        let inner_html = self.templates.render("sidebar", &ctx)?;

        self.wrap(
            &title,
            None,
            &format!("/sidebars/{sidebar_id}"),
            &inner_html,
        )
    }

    /// Navbar label of the sidebar, or its identifier.
    fn sidebar_title(&self, sidebar_id: &str) -> String {
        self.site
            .config
            .navbar
            .items
            .iter()
            .find_map(|item| match item {
                NavbarItem::DocSidebar {
                    sidebar_id: id,
                    label,
                    ..
                } if id == sidebar_id => Some(label.clone()),
                _ => None,
            })
            .unwrap_or_else(|| sidebar_id.to_string())
    }

    /// Wrap page content in the base layout.
    fn wrap(
        &self,
        title: &str,
        description: Option<&str>,
        route: &str,
        inner_html: &str,
    ) -> Result<String> {
        let config = &self.site.config;

        let mut ctx = TemplateContext::new()
            .with_var("lang", escape_html(&config.site.i18n.default_locale))
            .with_var("color_mode", self.color_mode())
            .with_var("title", escape_html(title))
            .with_var(
                "site_title_suffix",
                format!(" | {}", escape_html(&config.site.title)),
            )
            .with_var("canonical_url", escape_html(&config.url_for(route)))
            .with_var("navbar", self.navbar_html())
            .with_var("content", inner_html)
            .with_var("footer", self.footer_html(Utc::now().year()));

        let description = description.or(config.site.tagline.as_deref());
        if let Some(description) = description {
            ctx.insert("description", escape_html(description));
        }

        if let Some(favicon) = &config.site.favicon {
            ctx.insert(
                "favicon",
                format!(
                    r#"<link rel="icon" href="{}">"#,
                    escape_html(&config.route(favicon))
                ),
            );
        }

        if let Some(css) = config.theme.get("custom_css").and_then(|v| v.as_str()) {
            ctx.insert(
                "custom_css",
                format!(
                    r#"<link rel="stylesheet" href="{}">"#,
                    escape_html(&config.route(css))
                ),
            );
        }

        Ok(self.templates.render("base", &ctx)?)
    }

    /// `theme.color_mode.default_mode`, falling back to light.
    fn color_mode(&self) -> String {
        self.site
            .config
            .theme
            .get("color_mode")
            .and_then(|mode| mode.get("default_mode"))
            .and_then(|mode| mode.as_str())
            .unwrap_or("light")
            .to_string()
    }

    /// Top navigation bar.
    #[must_use]
    pub fn navbar_html(&self) -> String {
        let config = &self.site.config;
        let navbar = &config.navbar;

        let logo = navbar
            .logo
            .as_ref()
            .map(|logo| {
                format!(
                    r#"<img class="navbar__logo" src="{}" alt="{}">"#,
                    escape_html(&config.route(&logo.src)),
                    escape_html(&logo.alt)
                )
            })
            .unwrap_or_default();
        let title = navbar
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!(r#"<span class="navbar__title">{}</span>"#, escape_html(t)))
            .unwrap_or_default();

        let items = |position: NavbarPosition| -> String {
            navbar
                .items
                .iter()
                .filter(|item| item.position() == position)
                .map(|item| {
                    format!(
                        r#"<a class="navbar__link" href="{}">{}</a>"#,
                        escape_html(&self.navbar_href(item)),
                        escape_html(item.label())
                    )
                })
                .collect::<Vec<_>>()
                .join("")
        };

        format!(
            r#"<nav class="navbar" aria-label="Main">
    <div class="container navbar__inner">
        <a class="navbar__brand" href="{home}">{logo}{title}</a>
        <div class="navbar__items">{left}</div>
        <div class="navbar__items navbar__items--right">{right}</div>
    </div>
</nav>"#,
            home = escape_html(&config.route("/")),
            left = items(NavbarPosition::Left),
            right = items(NavbarPosition::Right),
        )
    }

    fn navbar_href(&self, item: &NavbarItem) -> String {
        let config = &self.site.config;
        match item {
            NavbarItem::Link { to, .. } => link_href(config, to),
            NavbarItem::DocSidebar { sidebar_id, .. } => self
                .site
                .sidebar_route(sidebar_id)
                .unwrap_or_else(|| config.route("/")),
            NavbarItem::Href { href, .. } => href.clone(),
        }
    }

    /// Footer with link columns and copyright. Returns an empty string when
    /// there is nothing to show.
    #[must_use]
    pub fn footer_html(&self, year: i32) -> String {
        let config = &self.site.config;
        let FooterConfig {
            style,
            copyright,
            links,
        } = &config.footer;

        if links.is_empty() && copyright.is_none() {
            return String::new();
        }

        let columns: Vec<String> = links
            .iter()
            .map(|group| {
                let items: Vec<String> = group
                    .items
                    .iter()
                    .map(|link| {
                        format!(
                            r#"<li><a class="footer__link" href="{}">{}</a></li>"#,
                            escape_html(&link_href(config, link.target())),
                            escape_html(&link.label)
                        )
                    })
                    .collect();
                format!(
                    r#"<div class="footer__col"><div class="footer__title">{}</div><ul class="footer__items">{}</ul></div>"#,
                    escape_html(&group.title),
                    items.join("")
                )
            })
            .collect();

        let copyright = copyright
            .as_deref()
            .map(|text| {
                format!(
                    r#"<div class="footer__copyright">{}</div>"#,
                    escape_html(&text.replace("{year}", &year.to_string()))
                )
            })
            .unwrap_or_default();

        format!(
            r#"<footer class="footer footer--{}">
    <div class="container">
        <div class="footer__links">{}</div>
        {copyright}
    </div>
</footer>"#,
            escape_html(style),
            columns.join("")
        )
    }

    fn hero_html(&self) -> String {
        let config = &self.site.config;
        let hero = &self.site.landing.hero;

        let subtitle = hero
            .subtitle
            .as_deref()
            .map(|s| format!(r#"<p class="hero__subtitle">{}</p>"#, escape_html(s)))
            .unwrap_or_default();

        let buttons: Vec<String> = hero
            .buttons
            .iter()
            .map(|button| {
                let variant = match button.variant {
                    ButtonVariant::Primary => "button--primary",
                    ButtonVariant::Secondary => "button--secondary",
                };
                let icon = button.icon.map(|i| icon_html(i, 18)).unwrap_or_default();
                format!(
                    r#"<a class="button button--lg {variant}" href="{}">{icon}{}</a>"#,
                    escape_html(&link_href(config, &button.to)),
                    escape_html(&button.label)
                )
            })
            .collect();

        format!(
            r#"<header class="hero">
    <div class="container">
        <h1 class="hero__title">{}</h1>
        {subtitle}
        <div class="hero__buttons">{}</div>
    </div>
</header>"#,
            escape_html(&hero.title),
            buttons.join("")
        )
    }

    fn stats_html(&self) -> Option<String> {
        let stats = &self.site.landing.stats;
        if stats.is_empty() {
            return None;
        }

        let items: Vec<String> = stats
            .iter()
            .map(|stat| {
                format!(
                    r#"<div class="stats__item"><span class="stats__number">{}</span><span class="stats__label">{}</span></div>"#,
                    escape_html(&stat.value),
                    escape_html(&stat.label)
                )
            })
            .collect();

        Some(format!(
            r#"<section class="stats"><div class="container stats__grid">{}</div></section>"#,
            items.join("")
        ))
    }

    fn quick_nav_html(&self) -> Option<String> {
        let tiles = &self.site.landing.quick_nav;
        if tiles.is_empty() {
            return None;
        }

        let items: Vec<String> = tiles
            .iter()
            .map(|tile| {
                format!(
                    r#"<a class="quick-nav__card" href="{}">{}<span class="quick-nav__label">{}</span></a>"#,
                    escape_html(&link_href(&self.site.config, &tile.to)),
                    icon_html(tile.icon, 28),
                    escape_html(&tile.label)
                )
            })
            .collect();

        Some(format!(
            r#"<section class="quick-nav"><div class="container quick-nav__grid">{}</div></section>"#,
            items.join("")
        ))
    }
}

#[cfg(test)]
mod tests {
    use docsite_core::{
        CardItem, CardSection, Config, LandingPage, NavigationNode, Sidebar, SidebarManifest,
        landing::{Hero, HeroButton, QuickNavItem, Stat},
    };

    use super::*;

    fn test_site() -> Site {
        let config = Config::from_toml_str(
            r#"
[site]
title = "Audos Documentation"
tagline = "API Reference & Architecture"
url = "https://docs.example.com"
favicon = "img/favicon.ico"

[navbar]
title = "Audos"

[[navbar.items]]
type = "link"
to = "/docs/intro"
label = "Docs"

[[navbar.items]]
type = "doc_sidebar"
sidebar_id = "apiSidebar"
label = "API Reference"

[[navbar.items]]
type = "href"
href = "https://github.com/audoapps/documentation"
label = "GitHub"
position = "right"

[footer]
copyright = "Copyright © {year} Audos."

[[footer.links]]
title = "Documentation"
items = [{ label = "Getting Started", to = "/docs/intro" }]

[theme.color_mode]
default_mode = "dark"
"#,
        )
        .expect("parse config");

        let mut sidebars = SidebarManifest::new();
        sidebars.insert(
            "apiSidebar",
            Sidebar::new(vec![
                NavigationNode::doc("intro"),
                NavigationNode::category(
                    "Chat API",
                    true,
                    vec![NavigationNode::doc("api/chat/streaming")],
                ),
                NavigationNode::category("Email API", false, vec![NavigationNode::doc("api/email/mailgun")]),
            ]),
        );

        let landing = LandingPage {
            title: "Documentation".to_string(),
            description: Some("Complete API reference".to_string()),
            hero: Hero {
                title: "Audos Documentation".to_string(),
                subtitle: Some("Everything in one place".to_string()),
                buttons: vec![HeroButton {
                    label: "Get Started".to_string(),
                    to: "/docs/intro".to_string(),
                    icon: Some(Icon::BookOpen),
                    variant: ButtonVariant::Primary,
                }],
            },
            stats: vec![Stat {
                value: "6".to_string(),
                label: "API Endpoints".to_string(),
            }],
            quick_nav: vec![QuickNavItem {
                label: "Chat APIs".to_string(),
                to: "/docs/api/chat/streaming".to_string(),
                icon: Icon::MessageSquare,
            }],
            sections: vec![
                CardSection {
                    id: "api-reference".to_string(),
                    title: "API Reference".to_string(),
                    description: None,
                    cards: vec![CardItem::new(
                        "Chat Streaming API",
                        "Streaming",
                        "/docs/api/chat/streaming",
                        Icon::MessageSquare,
                    )],
                },
                CardSection {
                    id: "architecture".to_string(),
                    title: "Architecture".to_string(),
                    description: None,
                    cards: vec![],
                },
            ],
        };

        Site::new(config, sidebars, landing)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_link_href() {
        let site = test_site();
        assert_eq!(link_href(&site.config, "/docs/intro"), "/docs/intro");
        assert_eq!(link_href(&site.config, "https://x.dev"), "https://x.dev");
        assert_eq!(link_href(&site.config, "#top"), "#top");
        assert_eq!(
            link_href(&site.config, "//cdn.example.com/app.css"),
            "//cdn.example.com/app.css"
        );
        assert_eq!(
            link_href(&site.config, "mailto:support@audoapps.com"),
            "mailto:support@audoapps.com"
        );
    }

    #[test]
    fn test_generate_landing() {
        let site = test_site();
        let html = HtmlGenerator::new(&site).generate_landing().expect("landing");

        assert!(html.contains("<title>Documentation | Audos Documentation</title>"));
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains(r#"<meta name="description" content="Complete API reference">"#));
        assert!(html.contains(r#"<h1 class="hero__title">Audos Documentation</h1>"#));
        assert!(html.contains(r#"<span class="stats__number">6</span>"#));
        assert!(html.contains(r#"class="quick-nav__card" href="/docs/api/chat/streaming""#));
        assert!(html.contains(r#"id="api-reference""#));
        assert!(html.contains(r#"id="architecture""#));
        assert_eq!(html.matches(r#"class="doc-card""#).count(), 1);
        assert!(html.contains(r#"<link rel="icon" href="/img/favicon.ico">"#));
    }

    #[test]
    fn test_landing_section_order() {
        let site = test_site();
        let html = HtmlGenerator::new(&site).generate_landing().expect("landing");

        let hero = html.find("hero__title").expect("hero");
        let stats = html.find("stats__grid").expect("stats");
        let quick = html.find("quick-nav__grid").expect("quick nav");
        let api = html.find(r#"id="api-reference""#).expect("api section");
        let arch = html.find(r#"id="architecture""#).expect("architecture section");
        assert!(hero < stats && stats < quick && quick < api && api < arch);
    }

    #[test]
    fn test_navbar_resolves_sidebar_items() {
        let site = test_site();
        let navbar = HtmlGenerator::new(&site).navbar_html();

        assert!(navbar.contains(r#"<a class="navbar__link" href="/docs/intro">API Reference</a>"#));
        assert!(navbar.contains(r#"<span class="navbar__title">Audos</span>"#));
        let right = navbar.find("navbar__items--right").expect("right items");
        let github = navbar.find("GitHub").expect("github link");
        assert!(github > right);
    }

    #[test]
    fn test_footer_copyright_year() {
        let site = test_site();
        let footer = HtmlGenerator::new(&site).footer_html(2026);

        assert!(footer.contains("Copyright © 2026 Audos."));
        assert!(footer.contains(r#"<div class="footer__title">Documentation</div>"#));
        assert!(footer.contains("footer--dark"));
    }

    #[test]
    fn test_generate_sidebar_page() {
        let site = test_site();
        let html = HtmlGenerator::new(&site)
            .generate_sidebar_page("apiSidebar")
            .expect("sidebar page");

        assert!(html.contains("<h1>API Reference</h1>"));
        assert!(html.contains("3 documents in 2 categories."));
        assert!(html.contains(r#"href="/docs/api/chat/streaming""#));
        // Collapsed categories ship their links inside a closed <details>.
        let email = html
            .find(r#"<details class="menu__category"><summary class="menu__caret">Email API</summary>"#)
            .expect("collapsed Email API category");
        let mailgun = html
            .find(r#"data-doc-id="api/email/mailgun""#)
            .expect("mailgun link");
        assert!(email < mailgun);
    }

    #[test]
    fn test_generate_unknown_sidebar() {
        let site = test_site();
        let result = HtmlGenerator::new(&site).generate_sidebar_page("missing");
        assert!(matches!(result, Err(HtmlError::UnknownSidebar(id)) if id == "missing"));
    }
}
