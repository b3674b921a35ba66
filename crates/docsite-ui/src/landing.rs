//! Landing page components: hero banner, statistics, quick navigation and
//! card sections.

use docsite_core::{
    LandingPage,
    landing::{ButtonVariant, Hero, QuickNavItem, Stat},
};
use leptos::prelude::*;

use crate::{
    cards::{CardSectionView, IconGlyph},
    navigation::SiteRoutes,
};

/// CSS classes for a hero button.
#[must_use]
pub fn button_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "button button--lg button--primary",
        ButtonVariant::Secondary => "button button--lg button--secondary",
    }
}

/// Header banner with call-to-action buttons.
#[component]
pub fn HeroBanner(
    hero: Hero,
    #[prop(optional)]
    routes: SiteRoutes,
) -> impl IntoView {
    let subtitle = hero.subtitle.clone();
    let has_subtitle = subtitle.is_some();
    let buttons = StoredValue::new(hero.buttons);
    let routes = StoredValue::new(routes);

    view! {
      <header class="hero">
        <div class="container">
          <h1 class="hero__title">{hero.title}</h1>
          <Show when=move || has_subtitle>
            <p class="hero__subtitle">{subtitle.clone()}</p>
          </Show>
          <div class="hero__buttons">
            <For
              each={move || buttons.get_value().into_iter().enumerate().collect::<Vec<_>>()}
              key=|(index, _)| *index
              children=move |(_, button)| {
                let href = routes.with_value(|r| r.link_href(&button.to));
                view! {
                  <a class=button_class(button.variant) href=href>
                    {button.icon.map(|icon| view! { <IconGlyph icon=icon size=18 /> })}
                    {button.label}
                  </a>
                }
              }
            />

          </div>
        </div>
      </header>
    }
}

/// Statistics strip.
#[component]
pub fn QuickStats(stats: Vec<Stat>) -> impl IntoView {
    let stats = StoredValue::new(stats);

    view! {
      <section class="stats">
        <div class="container stats__grid">
          <For
            each={move || stats.get_value().into_iter().enumerate().collect::<Vec<_>>()}
            key=|(index, _)| *index
            children=move |(_, stat)| {
              view! {
                <div class="stats__item">
                  <span class="stats__number">{stat.value}</span>
                  <span class="stats__label">{stat.label}</span>
                </div>
              }
            }
          />

        </div>
      </section>
    }
}

/// Shortcut tiles.
#[component]
pub fn QuickNavigation(
    items: Vec<QuickNavItem>,
    #[prop(optional)]
    routes: SiteRoutes,
) -> impl IntoView {
    let items = StoredValue::new(items);
    let routes = StoredValue::new(routes);

    view! {
      <section class="quick-nav">
        <div class="container quick-nav__grid">
          <For
            each={move || items.get_value().into_iter().enumerate().collect::<Vec<_>>()}
            key=|(index, _)| *index
            children=move |(_, item)| {
              let href = routes.with_value(|r| r.link_href(&item.to));
              view! {
                <a class="quick-nav__card" href=href>
                  <IconGlyph icon=item.icon size=28 />
                  <span class="quick-nav__label">{item.label}</span>
                </a>
              }
            }
          />

        </div>
      </section>
    }
}

/// The whole front page body.
#[component]
pub fn Landing(
    page: LandingPage,
    #[prop(optional)]
    routes: SiteRoutes,
) -> impl IntoView {
    let has_stats = !page.stats.is_empty();
    let has_quick_nav = !page.quick_nav.is_empty();
    let stats = StoredValue::new(page.stats);
    let quick_nav = StoredValue::new(page.quick_nav);
    let sections = StoredValue::new(page.sections);
    let shared_routes = StoredValue::new(routes.clone());

    view! {
      <HeroBanner hero=page.hero routes=routes />
      <main>
        <Show when=move || has_stats>
          <QuickStats stats=stats.get_value() />
        </Show>
        <Show when=move || has_quick_nav>
          <QuickNavigation items=quick_nav.get_value() routes=shared_routes.get_value() />
        </Show>
        <For
          each={move || sections.get_value().into_iter().enumerate().collect::<Vec<_>>()}
          key=|(index, _)| *index
          children=move |(index, section)| {
            view! {
              <CardSectionView
                section=section
                alternate=index % 2 == 1
                routes=shared_routes.get_value()
              />
            }
          }
        />

      </main>
    }
}
