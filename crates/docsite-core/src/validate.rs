//! Cross-reference validation.
//!
//! Every internal link on the site (cards, hero buttons, quick-navigation tiles,
//! navbar and footer entries) must resolve to a document in the sidebar manifest,
//! and every navbar sidebar reference must name an existing sidebar.

use std::{collections::BTreeSet, fmt};

use crate::{
    config::{BrokenLinkPolicy, Config, NavbarItem},
    navigation::SidebarManifest,
    site::Site,
};

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// Where a checked link was authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkSource {
    /// Card at `index` (0-based) in landing section `section`.
    Card {
        section: String,
        index: usize,
        title: String,
    },
    HeroButton { label: String },
    QuickNav { label: String },
    Navbar { label: String },
    Footer { group: String, label: String },
}

impl fmt::Display for LinkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card {
                section,
                index,
                title,
            } => write!(f, "card #{} \"{title}\" in section '{section}'", index + 1),
            Self::HeroButton { label } => write!(f, "hero button \"{label}\""),
            Self::QuickNav { label } => write!(f, "quick navigation tile \"{label}\""),
            Self::Navbar { label } => write!(f, "navbar item \"{label}\""),
            Self::Footer { group, label } => write!(f, "footer link \"{label}\" in '{group}'"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// A document id appears twice inside one sidebar.
    DuplicateDocument { sidebar: String, id: String },
    /// A document id appears in more than one sidebar.
    SharedDocument { id: String, sidebars: Vec<String> },
    /// A category without children.
    EmptyCategory {
        sidebar: String,
        path: String,
        label: String,
    },
    /// A sidebar identifier that cannot be used as an output directory name.
    InvalidSidebarId { sidebar: String },
    /// A navbar item names a sidebar that does not exist.
    UnknownSidebar { source: LinkSource, sidebar_id: String },
    /// An internal link that does not resolve to a document.
    BrokenLink { source: LinkSource, link: String },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDocument { sidebar, id } => {
                write!(f, "document '{id}' appears more than once in sidebar '{sidebar}'")
            }
            Self::SharedDocument { id, sidebars } => write!(
                f,
                "document '{id}' appears in several sidebars: {}",
                sidebars.join(", ")
            ),
            Self::EmptyCategory {
                sidebar,
                path,
                label,
            } => write!(f, "category \"{label}\" at {path} in sidebar '{sidebar}' is empty"),
            Self::InvalidSidebarId { sidebar } => write!(
                f,
                "sidebar id '{sidebar}' is not a valid page name (empty, '.', '..', or contains a path separator)"
            ),
            Self::UnknownSidebar { source, sidebar_id } => {
                write!(f, "{source} references unknown sidebar '{sidebar_id}'")
            }
            Self::BrokenLink { source, link } => {
                write!(f, "{source} links to '{link}', which is not a known document")
            }
        }
    }
}

/// A finding with its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub kind: IssueKind,
}

/// All findings of a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn push(&mut self, severity: Severity, kind: IssueKind) {
        self.issues.push(ValidationIssue { severity, kind });
    }

    /// Every finding in discovery order.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Findings that fail the build.
    pub fn errors(&self) -> impl Iterator<Item = &IssueKind> {
        self.of_severity(Severity::Error)
    }

    /// Findings that are reported only.
    pub fn warnings(&self) -> impl Iterator<Item = &IssueKind> {
        self.of_severity(Severity::Warning)
    }

    fn of_severity(&self, severity: Severity) -> impl Iterator<Item = &IssueKind> {
        self.issues
            .iter()
            .filter(move |i| i.severity == severity)
            .map(|i| &i.kind)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors: Vec<String> = self.errors().map(ToString::to_string).collect();
        write!(f, "{} error(s)", errors.len())?;
        for error in errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

/// What an internal link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Off-site URL; not checked.
    External,
    /// The landing page.
    Home,
    /// A document in the manifest.
    Document(&'a str),
    /// Nothing known.
    Broken,
}

/// Resolves site routes to document identifiers.
#[derive(Debug)]
pub struct LinkResolver<'a> {
    config: &'a Config,
    doc_ids: BTreeSet<&'a str>,
}

impl<'a> LinkResolver<'a> {
    /// Create a resolver over every document in `sidebars`.
    #[must_use]
    pub fn new(config: &'a Config, sidebars: &'a SidebarManifest) -> Self {
        Self {
            config,
            doc_ids: sidebars.all_doc_ids(),
        }
    }

    /// Resolve a link such as `/docs/api/chat/streaming#events`.
    ///
    /// The site base URL prefix is optional; fragments, queries and trailing
    /// slashes are ignored.
    #[must_use]
    pub fn resolve(&self, link: &str) -> Resolution<'a> {
        if is_external(link) {
            return Resolution::External;
        }

        let path = link
            .split(['#', '?'])
            .next()
            .unwrap_or_default()
            .trim_matches('/');

        let base = self.config.site.base_url.trim_matches('/');
        let path = if base.is_empty() {
            path
        } else {
            match path.strip_prefix(base) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
                _ => path,
            }
        };

        if path.is_empty() {
            return Resolution::Home;
        }

        let route_base = self.config.docs.route_base_path.trim_matches('/');
        let id = if route_base.is_empty() {
            Some(path)
        } else {
            path.strip_prefix(route_base)
                .and_then(|rest| rest.strip_prefix('/'))
        };

        match id.and_then(|id| self.doc_ids.get(id).copied()) {
            Some(id) => Resolution::Document(id),
            None => Resolution::Broken,
        }
    }
}

/// Whether `link` leaves the site: a `scheme://` URL, a protocol-relative
/// `//host` URL or a `mailto:` address.
#[must_use]
pub fn is_external(link: &str) -> bool {
    if link.starts_with("//") || link.starts_with("mailto:") {
        return true;
    }
    link.split_once("://").is_some_and(|(scheme, _)| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Whether `id` can name a single output directory.
#[must_use]
pub fn is_valid_sidebar_id(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}

/// Check the whole site for inconsistencies.
#[must_use]
pub fn validate_site(site: &Site) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_sidebars(&site.sidebars, &mut report);
    check_links(site, &mut report);

    tracing::debug!(
        errors = report.errors().count(),
        warnings = report.warnings().count(),
        "validated site"
    );
    report
}

fn check_sidebars(sidebars: &SidebarManifest, report: &mut ValidationReport) {
    for (name, sidebar) in sidebars.iter() {
        if !is_valid_sidebar_id(name) {
            report.push(
                Severity::Error,
                IssueKind::InvalidSidebarId {
                    sidebar: name.to_string(),
                },
            );
        }

        for id in sidebar.duplicate_ids() {
            report.push(
                Severity::Error,
                IssueKind::DuplicateDocument {
                    sidebar: name.to_string(),
                    id: id.to_string(),
                },
            );
        }

        for (path, label) in sidebar.empty_categories() {
            report.push(
                Severity::Warning,
                IssueKind::EmptyCategory {
                    sidebar: name.to_string(),
                    path: path.to_string(),
                    label: label.to_string(),
                },
            );
        }
    }

    for id in sidebars.all_doc_ids() {
        let owners = sidebars.sidebars_containing(id);
        if owners.len() > 1 {
            report.push(
                Severity::Warning,
                IssueKind::SharedDocument {
                    id: id.to_string(),
                    sidebars: owners.into_iter().map(str::to_string).collect(),
                },
            );
        }
    }
}

fn check_links(site: &Site, report: &mut ValidationReport) {
    let resolver = LinkResolver::new(&site.config, &site.sidebars);
    let severity = match site.config.site.on_broken_links {
        BrokenLinkPolicy::Throw => Some(Severity::Error),
        BrokenLinkPolicy::Warn => Some(Severity::Warning),
        BrokenLinkPolicy::Ignore => None,
    };

    let mut links: Vec<(LinkSource, &str)> = Vec::new();

    for section in &site.landing.sections {
        for (index, card) in section.cards.iter().enumerate() {
            links.push((
                LinkSource::Card {
                    section: section.id.clone(),
                    index,
                    title: card.title.clone(),
                },
                card.link.as_str(),
            ));
        }
    }

    for button in &site.landing.hero.buttons {
        links.push((
            LinkSource::HeroButton {
                label: button.label.clone(),
            },
            button.to.as_str(),
        ));
    }

    for tile in &site.landing.quick_nav {
        links.push((
            LinkSource::QuickNav {
                label: tile.label.clone(),
            },
            tile.to.as_str(),
        ));
    }

    for item in &site.config.navbar.items {
        let source = LinkSource::Navbar {
            label: item.label().to_string(),
        };
        match item {
            NavbarItem::Link { to, .. } => links.push((source, to.as_str())),
            NavbarItem::DocSidebar { sidebar_id, .. } => {
                if site.sidebars.get(sidebar_id).is_none() {
                    report.push(
                        Severity::Error,
                        IssueKind::UnknownSidebar {
                            source,
                            sidebar_id: sidebar_id.clone(),
                        },
                    );
                }
            }
            NavbarItem::Href { .. } => {}
        }
    }

    for group in &site.config.footer.links {
        for link in &group.items {
            if let Some(to) = &link.to {
                links.push((
                    LinkSource::Footer {
                        group: group.title.clone(),
                        label: link.label.clone(),
                    },
                    to.as_str(),
                ));
            }
        }
    }

    let Some(severity) = severity else {
        return;
    };

    for (source, link) in links {
        if resolver.resolve(link) == Resolution::Broken {
            report.push(
                severity,
                IssueKind::BrokenLink {
                    source,
                    link: link.to_string(),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cards::{CardItem, CardSection, Icon},
        landing::{Hero, LandingPage},
        navigation::{NavigationNode, Sidebar},
    };

    fn test_config(extra: &str) -> Config {
        Config::from_toml_str(&format!(
            r#"
[site]
title = "Test"
url = "https://example.com"
{extra}
"#
        ))
        .expect("parse config")
    }

    fn test_sidebars() -> SidebarManifest {
        let mut manifest = SidebarManifest::new();
        manifest.insert(
            "apiSidebar",
            Sidebar::new(vec![
                NavigationNode::doc("intro"),
                NavigationNode::category(
                    "Chat API",
                    true,
                    vec![
                        NavigationNode::doc("api/chat/streaming"),
                        NavigationNode::doc("api/chat/messages"),
                    ],
                ),
            ]),
        );
        manifest
    }

    fn test_landing(cards: Vec<CardItem>) -> LandingPage {
        LandingPage {
            title: "Home".to_string(),
            description: None,
            hero: Hero {
                title: "Docs".to_string(),
                subtitle: None,
                buttons: vec![],
            },
            stats: vec![],
            quick_nav: vec![],
            sections: vec![CardSection {
                id: "api-reference".to_string(),
                title: "API Reference".to_string(),
                description: None,
                cards,
            }],
        }
    }

    #[test]
    fn test_resolve_links() {
        let config = test_config("");
        let sidebars = test_sidebars();
        let resolver = LinkResolver::new(&config, &sidebars);

        assert_eq!(
            resolver.resolve("/docs/api/chat/streaming"),
            Resolution::Document("api/chat/streaming")
        );
        assert_eq!(
            resolver.resolve("/docs/api/chat/streaming/#events"),
            Resolution::Document("api/chat/streaming")
        );
        assert_eq!(resolver.resolve("/docs/intro?tab=1"), Resolution::Document("intro"));
        assert_eq!(resolver.resolve("/"), Resolution::Home);
        assert_eq!(resolver.resolve("https://github.com/x"), Resolution::External);
        assert_eq!(resolver.resolve("/docs/missing"), Resolution::Broken);
        assert_eq!(resolver.resolve("/intro"), Resolution::Broken);
    }

    #[test]
    fn test_external_links() {
        assert!(is_external("https://github.com/audoapps"));
        assert!(is_external("//cdn.example.com/app.css"));
        assert!(is_external("mailto:support@audoapps.com"));
        assert!(is_external("ftp://files.example.com"));
        assert!(!is_external("/docs/intro"));
        assert!(!is_external("/docs/intro?next=https://example.com"));
        assert!(!is_external("#top"));
    }

    #[test]
    fn test_resolve_with_base_url() {
        let config = test_config("base_url = \"/handbook/\"");
        let sidebars = test_sidebars();
        let resolver = LinkResolver::new(&config, &sidebars);

        assert_eq!(resolver.resolve("/handbook/docs/intro"), Resolution::Document("intro"));
        assert_eq!(resolver.resolve("/docs/intro"), Resolution::Document("intro"));
        assert_eq!(resolver.resolve("/handbook/"), Resolution::Home);
    }

    #[test]
    fn test_clean_site() {
        let site = Site::new(
            test_config(""),
            test_sidebars(),
            test_landing(vec![CardItem::new(
                "Chat Streaming API",
                "Streaming",
                "/docs/api/chat/streaming",
                Icon::MessageSquare,
            )]),
        );

        let report = validate_site(&site);
        assert!(report.issues().is_empty(), "{report}");
    }

    #[test]
    fn test_broken_card_link_is_error() {
        let site = Site::new(
            test_config(""),
            test_sidebars(),
            test_landing(vec![
                CardItem::new("Ok", "fine", "/docs/intro", Icon::BookOpen),
                CardItem::new("Gone", "missing", "/docs/api/email/mailgun", Icon::Mail),
            ]),
        );

        let report = validate_site(&site);
        assert!(report.has_errors());
        let message = report.to_string();
        assert!(message.contains("card #2 \"Gone\""), "{message}");
        assert!(message.contains("/docs/api/email/mailgun"), "{message}");
    }

    #[test]
    fn test_broken_link_policy_warn_and_ignore() {
        let landing = test_landing(vec![CardItem::new(
            "Gone",
            "missing",
            "/docs/nope",
            Icon::Mail,
        )]);

        let warn = Site::new(
            test_config("on_broken_links = \"warn\""),
            test_sidebars(),
            landing.clone(),
        );
        let report = validate_site(&warn);
        assert!(!report.has_errors());
        assert_eq!(report.warnings().count(), 1);

        let ignore = Site::new(
            test_config("on_broken_links = \"ignore\""),
            test_sidebars(),
            landing,
        );
        assert!(validate_site(&ignore).issues().is_empty());
    }

    #[test]
    fn test_duplicate_and_shared_documents() {
        let mut sidebars = test_sidebars();
        sidebars.insert(
            "guidesSidebar",
            Sidebar::new(vec![
                NavigationNode::doc("intro"),
                NavigationNode::doc("guides/setup"),
                NavigationNode::doc("guides/setup"),
            ]),
        );
        let site = Site::new(test_config(""), sidebars, test_landing(vec![]));

        let report = validate_site(&site);
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(
            errors,
            vec![&IssueKind::DuplicateDocument {
                sidebar: "guidesSidebar".to_string(),
                id: "guides/setup".to_string(),
            }]
        );
        assert!(report.warnings().any(|w| matches!(
            w,
            IssueKind::SharedDocument { id, .. } if id == "intro"
        )));
    }

    #[test]
    fn test_sidebar_ids_must_be_page_names() {
        for bad in ["..", ".", "", "api/v2", "api\\v2"] {
            let mut sidebars = test_sidebars();
            sidebars.insert(bad, Sidebar::new(vec![NavigationNode::doc("guides/setup")]));
            let site = Site::new(test_config(""), sidebars, test_landing(vec![]));

            let report = validate_site(&site);
            let errors: Vec<_> = report.errors().collect();
            assert_eq!(
                errors,
                vec![&IssueKind::InvalidSidebarId {
                    sidebar: bad.to_string(),
                }],
                "sidebar id {bad:?}"
            );
        }

        assert!(is_valid_sidebar_id("apiSidebar"));
        assert!(is_valid_sidebar_id("api-v2.sidebar"));
    }

    #[test]
    fn test_unknown_navbar_sidebar() {
        let config = test_config(
            r#"
[[navbar.items]]
type = "doc_sidebar"
sidebar_id = "missingSidebar"
label = "Missing"
"#,
        );
        let site = Site::new(config, test_sidebars(), test_landing(vec![]));

        let report = validate_site(&site);
        assert!(report.to_string().contains("unknown sidebar 'missingSidebar'"));
    }

    #[test]
    fn test_footer_links_checked() {
        let config = test_config(
            r#"
[[footer.links]]
title = "Docs"
items = [
  { label = "Intro", to = "/docs/intro" },
  { label = "Old", to = "/docs/old" },
  { label = "GitHub", href = "https://github.com" },
]
"#,
        );
        let site = Site::new(config, test_sidebars(), test_landing(vec![]));

        let report = validate_site(&site);
        let errors: Vec<String> = report.errors().map(ToString::to_string).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("footer link \"Old\" in 'Docs'"));
    }

    #[test]
    fn test_empty_category_is_warning() {
        let mut sidebars = test_sidebars();
        sidebars.insert(
            "emptySidebar",
            Sidebar::new(vec![NavigationNode::category("Nothing", true, vec![])]),
        );
        let site = Site::new(test_config(""), sidebars, test_landing(vec![]));

        let report = validate_site(&site);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }
}
