//! Landing page cards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbolic glyph shown on cards, buttons and quick-navigation tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    MessageSquare,
    Mail,
    Tag,
    Tags,
    Database,
    Send,
    Clock,
    FolderOpen,
    BookOpen,
    Code,
    Layers,
}

impl Icon {
    /// Glyph name as used in markup (`message-square`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MessageSquare => "message-square",
            Self::Mail => "mail",
            Self::Tag => "tag",
            Self::Tags => "tags",
            Self::Database => "database",
            Self::Send => "send",
            Self::Clock => "clock",
            Self::FolderOpen => "folder-open",
            Self::BookOpen => "book-open",
            Self::Code => "code",
            Self::Layers => "layers",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A clickable summary tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardItem {
    /// Card heading.
    pub title: String,

    /// One-sentence summary.
    pub description: String,

    /// Internal route the card navigates to.
    pub link: String,

    /// Glyph shown next to the title.
    pub icon: Icon,
}

impl CardItem {
    /// Create a card.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        icon: Icon,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: link.into(),
            icon,
        }
    }
}

/// A headed group of cards on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSection {
    /// Anchor identifier, e.g. `api-reference`.
    pub id: String,

    /// Section heading.
    pub title: String,

    /// Text under the heading.
    #[serde(default)]
    pub description: Option<String>,

    /// Cards in display order.
    #[serde(default)]
    pub cards: Vec<CardItem>,
}
