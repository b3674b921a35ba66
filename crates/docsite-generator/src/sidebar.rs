//! Sidebar navigation tree rendering.
//!
//! A sidebar is first projected into a [`RenderedNode`] tree according to the
//! authored expansion flags and any user [`ExpansionState`]. Collapsed categories
//! carry no rendered children; they are produced only after an expansion action.
//! The projection is then turned into markup or a plain-text outline.
//!
//! Static pages have no script to run that action, so [`SidebarRenderer::render_static`]
//! keeps the children of collapsed categories and the markup wraps every category
//! in a `<details>` element that is `open` only when expanded.

use std::collections::HashMap;

use docsite_core::{Config, NavigationNode, NodePath, Sidebar};

use crate::html::escape_html;

/// User expansion actions layered over the authored category flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    overrides: HashMap<NodePath, bool>,
    expand_all: bool,
}

impl ExpansionState {
    /// Authored flags only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every category expanded regardless of its authored flag, until a user
    /// action overrides it.
    #[must_use]
    pub fn expanded_all() -> Self {
        Self {
            overrides: HashMap::new(),
            expand_all: true,
        }
    }

    /// Whether the category at `path` is expanded, given its authored flag.
    #[must_use]
    pub fn is_expanded(&self, path: &NodePath, authored: bool) -> bool {
        self.overrides
            .get(path)
            .copied()
            .unwrap_or(self.expand_all || authored)
    }

    pub fn expand(&mut self, path: NodePath) {
        self.overrides.insert(path, true);
    }

    pub fn collapse(&mut self, path: NodePath) {
        self.overrides.insert(path, false);
    }

    /// Flip the category at `path`. Returns the new state, or `None` when
    /// `path` does not address a category of `sidebar`.
    pub fn toggle(&mut self, sidebar: &Sidebar, path: &NodePath) -> Option<bool> {
        let category = sidebar.category_at(path)?;
        let expanded = !self.is_expanded(path, category.expanded);
        if expanded {
            self.expand(path.clone());
        } else {
            self.collapse(path.clone());
        }
        Some(expanded)
    }
}

/// A node of the rendered sidebar view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedNode {
    /// Leaf link to a document page.
    Link {
        id: String,
        label: String,
        href: String,
    },
    /// Category heading. `children` is empty while collapsed.
    Category {
        path: NodePath,
        label: String,
        expanded: bool,
        children: Vec<RenderedNode>,
    },
}

impl RenderedNode {
    /// Number of rendered document links at or below this node.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Link { .. } => 1,
            Self::Category { children, .. } => leaf_count(children),
        }
    }
}

/// Number of rendered document links in a rendered tree.
#[must_use]
pub fn leaf_count(nodes: &[RenderedNode]) -> usize {
    nodes.iter().map(RenderedNode::leaf_count).sum()
}

/// Turns sidebars into views, markup and outlines.
#[derive(Debug)]
pub struct SidebarRenderer<'a> {
    config: &'a Config,
}

impl<'a> SidebarRenderer<'a> {
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Project `sidebar` into its current view.
    #[must_use]
    pub fn render(&self, sidebar: &Sidebar, state: &ExpansionState) -> Vec<RenderedNode> {
        sidebar
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| self.render_node(node, NodePath::root(index), state, false))
            .collect()
    }

    /// Project `sidebar` for a page without scripting. Every category carries
    /// its children; `expanded` still follows `state` and decides whether the
    /// category starts open.
    #[must_use]
    pub fn render_static(&self, sidebar: &Sidebar, state: &ExpansionState) -> Vec<RenderedNode> {
        sidebar
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| self.render_node(node, NodePath::root(index), state, true))
            .collect()
    }

    fn render_node(
        &self,
        node: &NavigationNode,
        path: NodePath,
        state: &ExpansionState,
        eager: bool,
    ) -> RenderedNode {
        match node {
            NavigationNode::Document(doc) => RenderedNode::Link {
                id: doc.id.clone(),
                label: doc.display_label(),
                href: self.config.doc_route(&doc.id),
            },
            NavigationNode::Category(category) => {
                let expanded = state.is_expanded(&path, category.expanded);
                let children = if expanded || eager {
                    category
                        .items
                        .iter()
                        .enumerate()
                        .map(|(index, child)| self.render_node(child, path.child(index), state, eager))
                        .collect()
                } else {
                    Vec::new()
                };

                RenderedNode::Category {
                    path,
                    label: category.label.clone(),
                    expanded,
                    children,
                }
            }
        }
    }

    /// Render a view as a `<nav class="menu">` tree.
    ///
    /// Categories become `<details>` elements, `open` when expanded. The link
    /// whose document id equals `active` gets `aria-current="page"`.
    #[must_use]
    pub fn to_html(&self, nodes: &[RenderedNode], active: Option<&str>) -> String {
        let mut html = String::from(r#"<nav class="menu" aria-label="Docs sidebar">"#);
        push_list(&mut html, nodes, active);
        html.push_str("</nav>");
        html
    }

    /// Render a view as an indented outline. Collapsed categories are marked `+`,
    /// expanded ones `-`.
    #[must_use]
    pub fn to_text_tree(&self, nodes: &[RenderedNode]) -> String {
        let mut out = String::new();
        push_text(&mut out, nodes, 0);
        out
    }
}

fn push_list(html: &mut String, nodes: &[RenderedNode], active: Option<&str>) {
    html.push_str(r#"<ul class="menu__list">"#);
    for node in nodes {
        match node {
            RenderedNode::Link { id, label, href } => {
                let is_active = active == Some(id.as_str());
                html.push_str(r#"<li class="menu__list-item">"#);
                html.push_str(&format!(
                    r#"<a class="menu__link{}" href="{}" data-doc-id="{}"{}>{}</a>"#,
                    if is_active { " menu__link--active" } else { "" },
                    escape_html(href),
                    escape_html(id),
                    if is_active { r#" aria-current="page""# } else { "" },
                    escape_html(label),
                ));
                html.push_str("</li>");
            }
            RenderedNode::Category {
                path,
                label,
                expanded,
                children,
            } => {
                html.push_str(&format!(
                    r#"<li class="menu__list-item{}" data-path="{path}">"#,
                    if *expanded { "" } else { " menu__list-item--collapsed" },
                ));
                html.push_str(&format!(
                    r#"<details class="menu__category"{}><summary class="menu__caret">{}</summary>"#,
                    if *expanded { " open" } else { "" },
                    escape_html(label),
                ));
                if !children.is_empty() {
                    push_list(html, children, active);
                }
                html.push_str("</details></li>");
            }
        }
    }
    html.push_str("</ul>");
}

fn push_text(out: &mut String, nodes: &[RenderedNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node {
            RenderedNode::Link { id, label, .. } => {
                out.push_str(&format!("{indent}{label} ({id})\n"));
            }
            RenderedNode::Category {
                label,
                expanded,
                children,
                ..
            } => {
                let marker = if *expanded { '-' } else { '+' };
                out.push_str(&format!("{indent}{marker} {label}\n"));
                push_text(out, children, depth + 1);
            }
        }
    }
}
