//! Card list rendering.
//!
//! One card per item, in authored order. No sorting, filtering or paging.

use docsite_core::{CardItem, CardSection, Config};

use crate::html::{escape_html, icon_html, link_href};

/// Renders card lists and card sections.
#[derive(Debug)]
pub struct CardRenderer<'a> {
    config: &'a Config,
}

impl<'a> CardRenderer<'a> {
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render a single card as a link tile.
    #[must_use]
    pub fn card_html(&self, card: &CardItem) -> String {
        format!(
            r#"<a class="doc-card" href="{href}">
    <div class="doc-card__icon">{icon}</div>
    <div class="doc-card__content">
        <h3 class="doc-card__title">{title}</h3>
        <p class="doc-card__description">{description}</p>
    </div>
    <div class="doc-card__arrow" aria-hidden="true">→</div>
</a>"#,
            href = escape_html(&link_href(self.config, &card.link)),
            icon = icon_html(card.icon, 24),
            title = escape_html(&card.title),
            description = escape_html(&card.description),
        )
    }

    /// Render a grid container holding one card per item.
    ///
    /// An empty slice yields an empty container.
    #[must_use]
    pub fn to_html(&self, cards: &[CardItem]) -> String {
        let items: Vec<String> = cards.iter().map(|card| self.card_html(card)).collect();
        format!(r#"<div class="docs-grid">{}</div>"#, items.join("\n"))
    }

    /// Render a section: heading, description and card grid.
    ///
    /// `alternate` switches to the secondary background.
    #[must_use]
    pub fn section_to_html(&self, section: &CardSection, alternate: bool) -> String {
        let description = section
            .description
            .as_deref()
            .map(|d| format!(r#"<p class="section-header__description">{}</p>"#, escape_html(d)))
            .unwrap_or_default();

        format!(
            r#"<section class="docs-section{alt}" id="{id}">
    <div class="container">
        <div class="section-header">
            <h2 class="section-header__title">{title}</h2>
            {description}
        </div>
        {grid}
    </div>
</section>"#,
            alt = if alternate { " docs-section--alt" } else { "" },
            id = escape_html(&section.id),
            title = escape_html(&section.title),
            grid = self.to_html(&section.cards),
        )
    }
}

#[cfg(test)]
mod tests {
    use docsite_core::Icon;

    use super::*;

    fn test_config(base_url: &str) -> Config {
        Config::from_toml_str(&format!(
            r#"
[site]
title = "Test"
url = "https://example.com"
base_url = "{base_url}"
"#
        ))
        .expect("parse config")
    }

    fn cards() -> Vec<CardItem> {
        vec![
            CardItem::new(
                "Chat Streaming API",
                "Real-time streaming.",
                "/docs/api/chat/streaming",
                Icon::MessageSquare,
            ),
            CardItem::new("Mailgun Email API", "Email & webhooks.", "/docs/api/email/mailgun", Icon::Mail),
            CardItem::new("Entity Tagging", "Tags <entities>.", "/docs/api/tagging/entity-tags", Icon::Tag),
        ]
    }

    #[test]
    fn test_render_order_matches_authoring_order() {
        let config = test_config("/");
        let html = CardRenderer::new(&config).to_html(&cards());

        assert_eq!(html.matches(r#"class="doc-card""#).count(), 3);
        let first = html.find("Chat Streaming API").expect("first card");
        let second = html.find("Mailgun Email API").expect("second card");
        let third = html.find("Entity Tagging").expect("third card");
        assert!(first < second && second < third);
    }

    #[test]
    fn test_empty_card_list_renders_empty_container() {
        let config = test_config("/");
        let html = CardRenderer::new(&config).to_html(&[]);
        assert_eq!(html, r#"<div class="docs-grid"></div>"#);
    }

    #[test]
    fn test_card_exposes_title_description_and_target() {
        let config = test_config("/");
        let html = CardRenderer::new(&config).card_html(&cards()[1]);

        assert!(html.starts_with(r#"<a class="doc-card" href="/docs/api/email/mailgun">"#));
        assert!(html.contains(r#"<h3 class="doc-card__title">Mailgun Email API</h3>"#));
        assert!(html.contains("Email &amp; webhooks."));
        assert!(html.contains(r#"data-icon="mail""#));
    }

    #[test]
    fn test_card_text_is_escaped() {
        let config = test_config("/");
        let html = CardRenderer::new(&config).card_html(&cards()[2]);
        assert!(html.contains("Tags &lt;entities&gt;."));
    }

    #[test]
    fn test_card_link_uses_base_url() {
        let config = test_config("/handbook/");
        let html = CardRenderer::new(&config).card_html(&cards()[0]);
        assert!(html.contains(r#"href="/handbook/docs/api/chat/streaming""#));
    }

    #[test]
    fn test_section_html() {
        let config = test_config("/");
        let section = CardSection {
            id: "architecture".to_string(),
            title: "Architecture".to_string(),
            description: Some("System design".to_string()),
            cards: vec![],
        };

        let html = CardRenderer::new(&config).section_to_html(&section, true);
        assert!(html.contains(r#"class="docs-section docs-section--alt" id="architecture""#));
        assert!(html.contains("System design"));
        assert!(html.contains(r#"<div class="docs-grid"></div>"#));
    }
}
