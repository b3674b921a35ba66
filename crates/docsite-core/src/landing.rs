//! Landing page data.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    cards::{CardItem, CardSection, Icon},
    error::{CoreError, Result},
};

/// Everything shown on the site's front page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingPage {
    /// Document title.
    pub title: String,

    /// Meta description.
    #[serde(default)]
    pub description: Option<String>,

    /// Header banner.
    pub hero: Hero,

    /// Figures shown in the statistics strip.
    #[serde(default)]
    pub stats: Vec<Stat>,

    /// Shortcut tiles below the statistics.
    #[serde(default)]
    pub quick_nav: Vec<QuickNavItem>,

    /// Card sections in display order.
    #[serde(default)]
    pub sections: Vec<CardSection>,
}

/// Header banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub buttons: Vec<HeroButton>,
}

/// Call-to-action link in the hero banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroButton {
    pub label: String,

    pub to: String,

    #[serde(default)]
    pub icon: Option<Icon>,

    #[serde(default)]
    pub variant: ButtonVariant,
}

/// Visual weight of a hero button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

/// A single figure in the statistics strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Shortcut tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickNavItem {
    pub label: String,
    pub to: String,
    pub icon: Icon,
}

impl LandingPage {
    /// Load landing page data from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::site_data(path, "landing page data not found"));
        }

        let content = std::fs::read_to_string(path)?;
        let landing = Self::from_toml_str(&content)
            .map_err(|e| CoreError::site_data(path, e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            sections = landing.sections.len(),
            cards = landing.card_count(),
            "loaded landing page"
        );
        Ok(landing)
    }

    /// Parse landing page data from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Look up a section by identifier.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&CardSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// All cards across sections, in display order.
    pub fn cards(&self) -> impl Iterator<Item = &CardItem> {
        self.sections.iter().flat_map(|s| s.cards.iter())
    }

    /// Total number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANDING: &str = r#"
title = "Documentation"
description = "Reference docs"

[hero]
title = "Example Docs"
subtitle = "Everything in one place"

[[hero.buttons]]
label = "Get Started"
to = "/docs/intro"
icon = "book-open"

[[hero.buttons]]
label = "API Reference"
to = "/docs/api/chat/streaming"
icon = "code"
variant = "secondary"

[[stats]]
value = "6"
label = "API Endpoints"

[[quick_nav]]
label = "Chat APIs"
to = "/docs/api/chat/streaming"
icon = "message-square"

[[sections]]
id = "api-reference"
title = "API Reference"

[[sections.cards]]
title = "Chat Streaming API"
description = "Real-time streaming."
link = "/docs/api/chat/streaming"
icon = "message-square"

[[sections.cards]]
title = "Message Endpoints"
description = "REST endpoints."
link = "/docs/api/chat/messages"
icon = "send"

[[sections]]
id = "architecture"
title = "Architecture"
"#;

    #[test]
    fn test_parse_landing() {
        let landing = LandingPage::from_toml_str(LANDING).expect("parse landing");

        assert_eq!(landing.hero.buttons.len(), 2);
        assert_eq!(landing.hero.buttons[0].variant, ButtonVariant::Primary);
        assert_eq!(landing.hero.buttons[1].variant, ButtonVariant::Secondary);
        assert_eq!(landing.stats[0].value, "6");
        assert_eq!(landing.quick_nav[0].icon, Icon::MessageSquare);
        assert_eq!(landing.sections.len(), 2);
        assert_eq!(landing.card_count(), 2);
    }

    #[test]
    fn test_cards_keep_authored_order() {
        let landing = LandingPage::from_toml_str(LANDING).expect("parse landing");
        let titles: Vec<_> = landing.cards().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Chat Streaming API", "Message Endpoints"]);
    }

    #[test]
    fn test_section_lookup() {
        let landing = LandingPage::from_toml_str(LANDING).expect("parse landing");
        assert!(landing.section("architecture").is_some_and(|s| s.cards.is_empty()));
        assert!(landing.section("missing").is_none());
    }
}
