//! A fully loaded site: configuration plus the static data it points to.

use std::path::{Path, PathBuf};

use crate::{
    config::Config, error::Result, landing::LandingPage, navigation::SidebarManifest,
};

/// Configuration, sidebar manifest and landing page, loaded together.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: Config,
    pub sidebars: SidebarManifest,
    pub landing: LandingPage,
}

impl Site {
    /// Assemble a site from already loaded parts.
    #[must_use]
    pub fn new(config: Config, sidebars: SidebarManifest, landing: LandingPage) -> Self {
        Self {
            config,
            sidebars,
            landing,
        }
    }

    /// Load the configuration file and the data files it references.
    ///
    /// Data paths are resolved relative to the configuration file's directory.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config = Config::load(config_path)?;
        Self::load_with_config(config, config_path)
    }

    /// Like [`Site::load`], with `DOCSITE__*` environment overrides applied.
    pub fn load_with_env(config_path: &Path) -> Result<Self> {
        let config = Config::load_with_env(config_path)?;
        Self::load_with_config(config, config_path)
    }

    fn load_with_config(config: Config, config_path: &Path) -> Result<Self> {
        let root = site_root(config_path);
        let sidebars = SidebarManifest::load(&root.join(&config.docs.sidebar_path))?;
        let landing = LandingPage::load(&root.join(&config.landing.path))?;

        tracing::info!(
            root = %root.display(),
            sidebars = sidebars.len(),
            documents = sidebars.all_doc_ids().len(),
            cards = landing.card_count(),
            "loaded site"
        );

        Ok(Self::new(config, sidebars, landing))
    }

    /// Route of the first document of a sidebar.
    #[must_use]
    pub fn sidebar_route(&self, sidebar_id: &str) -> Option<String> {
        let sidebar = self.sidebars.get(sidebar_id)?;
        let doc = sidebar.first_document()?;
        Some(self.config.doc_route(&doc.id))
    }
}

fn site_root(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
