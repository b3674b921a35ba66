//! Card components.

use docsite_core::{CardItem, CardSection, Icon};
use leptos::prelude::*;

use crate::navigation::SiteRoutes;

/// Glyph placeholder styled by the `icon--<name>` class.
#[component]
pub fn IconGlyph(
    /// The glyph.
    icon: Icon,
    /// Edge length in pixels.
    #[prop(default = 24)]
    size: u32,
) -> impl IntoView {
    view! {
      <span
        class=format!("icon icon--{icon}")
        data-icon=icon.name()
        style=format!("width:{size}px;height:{size}px")
        aria-hidden="true"
      ></span>
    }
}

/// A single clickable card.
#[component]
pub fn DocCard(
    /// The card to render.
    card: CardItem,
    /// Route prefixes.
    #[prop(optional)]
    routes: SiteRoutes,
) -> impl IntoView {
    let href = routes.link_href(&card.link);

    view! {
      <a class="doc-card" href=href>
        <div class="doc-card__icon">
          <IconGlyph icon=card.icon />
        </div>
        <div class="doc-card__content">
          <h3 class="doc-card__title">{card.title}</h3>
          <p class="doc-card__description">{card.description}</p>
        </div>
        <div class="doc-card__arrow" aria-hidden="true">
          "→"
        </div>
      </a>
    }
}

/// Grid of cards in the given order. An empty list renders an empty grid.
#[component]
pub fn CardGrid(
    /// Cards in display order.
    #[prop(into)]
    cards: Signal<Vec<CardItem>>,
    /// Route prefixes.
    #[prop(optional)]
    routes: SiteRoutes,
) -> impl IntoView {
    let routes = StoredValue::new(routes);

    view! {
      <div class="docs-grid">
        <For
          each={move || cards.get().into_iter().enumerate().collect::<Vec<_>>()}
          key=|(index, _)| *index
          children=move |(_, card)| {
            view! { <DocCard card=card routes=routes.get_value() /> }
          }
        />

      </div>
    }
}

/// Titled section holding a card grid.
#[component]
pub fn CardSectionView(
    /// The section.
    section: CardSection,
    /// Use the secondary background.
    #[prop(optional)]
    alternate: bool,
    /// Route prefixes.
    #[prop(optional)]
    routes: SiteRoutes,
) -> impl IntoView {
    let class = if alternate {
        "docs-section docs-section--alt"
    } else {
        "docs-section"
    };
    let description = section.description.clone();
    let has_description = description.is_some();

    view! {
      <section class=class id=section.id.clone()>
        <div class="container">
          <div class="section-header">
            <h2 class="section-header__title">{section.title.clone()}</h2>
            <Show when=move || has_description>
              <p class="section-header__description">{description.clone()}</p>
            </Show>
          </div>
          <CardGrid cards=section.cards routes=routes />
        </div>
      </section>
    }
}
