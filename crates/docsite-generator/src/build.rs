//! Build orchestration.
//!
//! Validates the site, then writes the landing page, one overview page per
//! sidebar and the exported sidebar manifest.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use docsite_core::{Site, ValidationReport, validate_site};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::html::{HtmlError, HtmlGenerator};

/// File name of the exported sidebar manifest.
pub const SIDEBAR_MANIFEST_FILE: &str = "sidebars.json";

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Manifest serialization error.
    #[error("manifest serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The site has inconsistent cross references.
    #[error("site validation failed with {0}")]
    Validation(ValidationReport),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of HTML pages written.
    pub pages: usize,

    /// Number of sidebars in the manifest.
    pub sidebars: usize,

    /// Number of distinct documents referenced by sidebars.
    pub documents: usize,

    /// Number of landing page cards.
    pub cards: usize,

    /// Number of validation warnings.
    pub warnings: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    site: Site,
    output_dir: PathBuf,
}

impl Builder {
    #[must_use]
    pub fn new(site: Site, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            site,
            output_dir: output_dir.into(),
        }
    }

    /// The site being built.
    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Execute the full build process.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(output = %self.output_dir.display(), "starting build");

        // 1. Validate cross references before touching the output
        stats.warnings = self.validate()?;

        // 2. Clean output directory
        self.clean_output()?;

        let generator = HtmlGenerator::new(&self.site);

        // 3. Landing page
        let landing = generator.generate_landing()?;
        write_file(&self.output_dir.join("index.html"), &landing)?;
        stats.pages += 1;
        stats.cards = self.site.landing.card_count();

        // 4. Sidebar overview pages
        for (id, _) in self.site.sidebars.iter() {
            let html = generator.generate_sidebar_page(id)?;
            write_file(&self.sidebar_page_path(id), &html)?;
            stats.pages += 1;
            stats.sidebars += 1;
        }

        // 5. Exported sidebar manifest
        self.write_manifest()?;
        stats.documents = self.site.sidebars.all_doc_ids().len();

        stats.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        info!(
            pages = stats.pages,
            sidebars = stats.sidebars,
            documents = stats.documents,
            cards = stats.cards,
            warnings = stats.warnings,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Run validation, logging warnings. Returns the warning count.
    fn validate(&self) -> Result<usize> {
        let report = validate_site(&self.site);

        let mut warnings = 0;
        for warning in report.warnings() {
            warn!(%warning, "site validation warning");
            warnings += 1;
        }

        if report.has_errors() {
            return Err(BuildError::Validation(report));
        }

        Ok(warnings)
    }

    /// Clean the output directory.
    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Output path of a sidebar overview page.
    #[must_use]
    pub fn sidebar_page_path(&self, sidebar_id: &str) -> PathBuf {
        self.output_dir
            .join("sidebars")
            .join(sidebar_id)
            .join("index.html")
    }

    fn write_manifest(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.site.sidebars)?;
        let path = self.output_dir.join(SIDEBAR_MANIFEST_FILE);
        write_file(&path, &json)?;
        info!(path = %path.display(), "exported sidebar manifest");
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use docsite_core::{
        CardItem, CardSection, Config, Icon, LandingPage, NavigationNode, Sidebar,
        SidebarManifest, landing::Hero,
    };
    use tempfile::TempDir;

    use super::*;

    fn test_site(card_link: &str) -> Site {
        let config = Config::from_toml_str(
            r#"
[site]
title = "Test Docs"
url = "https://docs.example.com"
"#,
        )
        .expect("parse config");

        let mut sidebars = SidebarManifest::new();
        sidebars.insert(
            "apiSidebar",
            Sidebar::new(vec![
                NavigationNode::doc("intro"),
                NavigationNode::category("Chat API", false, vec![NavigationNode::doc("api/chat/streaming")]),
            ]),
        );
        sidebars.insert("guidesSidebar", Sidebar::new(vec![NavigationNode::doc("guides/setup")]));

        let landing = LandingPage {
            title: "Home".to_string(),
            description: None,
            hero: Hero {
                title: "Test Docs".to_string(),
                subtitle: None,
                buttons: vec![],
            },
            stats: vec![],
            quick_nav: vec![],
            sections: vec![CardSection {
                id: "api-reference".to_string(),
                title: "API Reference".to_string(),
                description: None,
                cards: vec![CardItem::new("Chat", "Streaming", card_link, Icon::MessageSquare)],
            }],
        };

        Site::new(config, sidebars, landing)
    }

    #[test]
    fn test_build_site() {
        let output_dir = TempDir::new().unwrap();
        let builder = Builder::new(test_site("/docs/api/chat/streaming"), output_dir.path());

        let stats = builder.build().unwrap();

        assert_eq!(stats.pages, 3);
        assert_eq!(stats.sidebars, 2);
        assert_eq!(stats.documents, 3);
        assert_eq!(stats.cards, 1);
        assert_eq!(stats.warnings, 0);
        assert!(output_dir.path().join("index.html").exists());
        assert!(output_dir.path().join("sidebars/apiSidebar/index.html").exists());
        assert!(output_dir.path().join("sidebars/guidesSidebar/index.html").exists());
    }

    #[test]
    fn test_manifest_export() {
        let output_dir = TempDir::new().unwrap();
        let site = test_site("/docs/intro");
        let expected = site.sidebars.clone();
        Builder::new(site, output_dir.path()).build().unwrap();

        let json = fs::read_to_string(output_dir.path().join(SIDEBAR_MANIFEST_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["apiSidebar"][0], "intro");
        assert_eq!(value["apiSidebar"][1]["type"], "category");
        assert_eq!(value["apiSidebar"][1]["collapsed"], true);
        assert_eq!(value["apiSidebar"][1]["items"][0], "api/chat/streaming");

        let parsed: SidebarManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_broken_card_link_fails_build() {
        let output_dir = TempDir::new().unwrap();
        let marker = output_dir.path().join("keep.txt");
        fs::write(&marker, "previous build").unwrap();

        let result = Builder::new(test_site("/docs/api/email/mailgun"), output_dir.path()).build();

        let Err(BuildError::Validation(report)) = result else {
            panic!("expected validation failure");
        };
        let message = report.to_string();
        assert!(message.contains("/docs/api/email/mailgun"));
        assert!(message.contains("card #1 \"Chat\""));
        // Output is left untouched on validation failure.
        assert!(marker.exists());
    }

    #[test]
    fn test_parent_dir_sidebar_id_fails_build() {
        let output_dir = TempDir::new().unwrap();
        let mut site = test_site("/docs/intro");
        site.sidebars
            .insert("..", Sidebar::new(vec![NavigationNode::doc("guides/faq")]));

        let result = Builder::new(site, output_dir.path().join("build")).build();

        let Err(BuildError::Validation(report)) = result else {
            panic!("expected validation failure");
        };
        assert!(report.to_string().contains("sidebar id '..'"));
        assert!(!output_dir.path().join("index.html").exists());
        assert!(!output_dir.path().join("build").exists());
    }

    #[test]
    fn test_sidebar_page_path() {
        let builder = Builder::new(test_site("/docs/intro"), "build");
        assert_eq!(
            builder.sidebar_page_path("apiSidebar"),
            PathBuf::from("build/sidebars/apiSidebar/index.html")
        );
    }

    #[test]
    fn test_build_stats_default() {
        let stats = BuildStats::default();
        assert_eq!(stats.pages, 0);
        assert_eq!(stats.duration_ms, 0);
    }
}
