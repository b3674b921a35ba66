//! Sidebar navigation components.
//!
//! Categories keep a reactive expanded flag seeded from the authored
//! `collapsed` setting. A collapsed category creates no child views; they are
//! built when the category is expanded and dropped again when it collapses.

use docsite_core::{
    Category, Config, Document, NavigationNode, NodePath, Sidebar, config::join_route, is_external,
};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Route prefixes needed to turn document ids and site links into hrefs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteRoutes {
    /// Path the site is served under.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Route segment documents live under.
    #[serde(default = "default_route_base_path")]
    pub route_base_path: String,
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_route_base_path() -> String {
    "docs".to_string()
}

impl Default for SiteRoutes {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            route_base_path: default_route_base_path(),
        }
    }
}

impl From<&Config> for SiteRoutes {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.site.base_url.clone(),
            route_base_path: config.docs.route_base_path.clone(),
        }
    }
}

impl SiteRoutes {
    /// Href of a document page.
    #[must_use]
    pub fn doc_href(&self, id: &str) -> String {
        join_route(&[self.base_url.as_str(), self.route_base_path.as_str(), id])
    }

    /// Href of a site link. External URLs and fragments are left alone.
    #[must_use]
    pub fn link_href(&self, link: &str) -> String {
        if is_external(link) || link.starts_with('#') {
            link.to_string()
        } else {
            join_route(&[self.base_url.as_str(), link])
        }
    }
}

/// Collapsible sidebar tree.
#[component]
pub fn DocSidebar(
    /// The sidebar to render.
    sidebar: Sidebar,
    /// Route prefixes.
    #[prop(optional)]
    routes: SiteRoutes,
    /// Id of the document being viewed.
    #[prop(into, default = String::new().into())]
    active_id: Signal<String>,
) -> impl IntoView {
    let routes = StoredValue::new(routes);
    let nodes = StoredValue::new(sidebar.nodes().to_vec());

    view! {
      <nav class="menu" aria-label="Docs sidebar">
        <ul class="menu__list">
          <For
            each={move || nodes.get_value().into_iter().enumerate().collect::<Vec<_>>()}
            key=|(index, _)| *index
            children=move |(index, node)| {
              view! {
                <SidebarItem
                  node=node
                  path=NodePath::root(index)
                  routes=routes
                  active_id=active_id
                />
              }
            }
          />

        </ul>
      </nav>
    }
}

/// One node of the tree. Type-erased so categories can nest.
#[component]
fn SidebarItem(
    node: NavigationNode,
    path: NodePath,
    routes: StoredValue<SiteRoutes>,
    active_id: Signal<String>,
) -> AnyView {
    match node {
        NavigationNode::Document(doc) => {
            view! { <SidebarLink doc=doc routes=routes active_id=active_id /> }.into_any()
        }
        NavigationNode::Category(category) => {
            view! {
              <SidebarCategory category=category path=path routes=routes active_id=active_id />
            }
            .into_any()
        }
    }
}

#[component]
fn SidebarLink(
    doc: Document,
    routes: StoredValue<SiteRoutes>,
    active_id: Signal<String>,
) -> impl IntoView {
    let href = routes.with_value(|r| r.doc_href(&doc.id));
    let label = doc.display_label();
    let id = doc.id.clone();
    let is_active = Memo::new(move |_| active_id.get() == id);

    view! {
      <li class="menu__list-item">
        <a
          class=move || {
            if is_active.get() { "menu__link menu__link--active" } else { "menu__link" }
          }
          href=href
          data-doc-id=doc.id.clone()
          aria-current=move || is_active.get().then_some("page")
        >
          {label}
        </a>
      </li>
    }
}

/// Reactive expansion flag of one category, seeded from the authored setting.
#[derive(Debug, Clone, Copy)]
struct CategoryToggle {
    expanded: RwSignal<bool>,
}

impl CategoryToggle {
    fn seeded(category: &Category) -> Self {
        Self {
            expanded: RwSignal::new(category.expanded),
        }
    }

    fn is_open(self) -> bool {
        self.expanded.get()
    }

    fn flip(self) {
        self.expanded.update(|e| *e = !*e);
    }
}

#[component]
fn SidebarCategory(
    category: Category,
    path: NodePath,
    routes: StoredValue<SiteRoutes>,
    active_id: Signal<String>,
) -> impl IntoView {
    let toggle = CategoryToggle::seeded(&category);
    let items = StoredValue::new(category.items);
    let data_path = path.to_string();
    let path = StoredValue::new(path);

    view! {
      <li
        class=move || {
          if toggle.is_open() {
            "menu__list-item"
          } else {
            "menu__list-item menu__list-item--collapsed"
          }
        }
        data-path=data_path
      >
        <button
          class="menu__caret"
          type="button"
          aria-expanded=move || toggle.is_open().to_string()
          on:click=move |_| toggle.flip()
        >
          {category.label}
        </button>

        <Show when=move || toggle.is_open()>
          <ul class="menu__list">
            <For
              each={move || items.get_value().into_iter().enumerate().collect::<Vec<_>>()}
              key=|(index, _)| *index
              children=move |(index, node)| {
                let child_path = path.with_value(|p| p.child(index));
                view! {
                  <SidebarItem node=node path=child_path routes=routes active_id=active_id />
                }
              }
            />

          </ul>
        </Show>
      </li>
    }
}
