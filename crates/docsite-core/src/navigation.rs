//! Sidebar navigation trees.
//!
//! A sidebar is an ordered sequence of [`NavigationNode`]s. Each node is either a
//! [`Document`] leaf referencing an externally authored page, or a [`Category`]
//! grouping further nodes. Authored order is preserved everywhere.
//!
//! In TOML a bare string is shorthand for a document:
//!
//! ```toml
//! [[apiSidebar]]
//! type = "doc"
//! id = "intro"
//! label = "Introduction"
//!
//! [[apiSidebar]]
//! type = "category"
//! label = "Chat API"
//! collapsed = false
//! items = ["api/chat/streaming", "api/chat/messages"]
//! ```

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    fmt,
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A single element of a navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub enum NavigationNode {
    /// Leaf linking to a content page.
    Document(Document),
    /// Labeled group of further nodes.
    Category(Category),
}

/// Reference to an external content page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Page identifier, e.g. `api/chat/streaming`.
    pub id: String,

    /// Explicit display label.
    pub label: Option<String>,
}

/// A labeled group of navigation nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Display label.
    pub label: String,

    /// Whether children are shown before any user interaction.
    pub expanded: bool,

    /// Children in authored order.
    pub items: Vec<NavigationNode>,
}

impl NavigationNode {
    /// Create a document node without an explicit label.
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Document(Document::new(id))
    }

    /// Create a category node.
    pub fn category(label: impl Into<String>, expanded: bool, items: Vec<NavigationNode>) -> Self {
        Self::Category(Category {
            label: label.into(),
            expanded,
            items,
        })
    }

    /// Label shown for this node.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Document(doc) => doc.display_label(),
            Self::Category(category) => category.label.clone(),
        }
    }
}

impl Document {
    /// Create a document reference.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    /// Set an explicit label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The explicit label, or one derived from the last identifier segment.
    ///
    /// `api/chat/instagram-session-init` becomes `Instagram Session Init`.
    #[must_use]
    pub fn display_label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }

        let stem = self.id.rsplit('/').next().unwrap_or(&self.id);
        stem.split(['-', '_'])
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Position of a node inside a sidebar, as child indices from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path of the `index`-th root node.
    #[must_use]
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of the `index`-th child of this node.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Child indices from the root.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Nesting depth; root nodes have depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// An ordered root sequence of navigation nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar {
    nodes: Vec<NavigationNode>,
}

impl Sidebar {
    /// Create a sidebar from root nodes.
    #[must_use]
    pub fn new(nodes: Vec<NavigationNode>) -> Self {
        Self { nodes }
    }

    /// Root nodes in authored order.
    #[must_use]
    pub fn nodes(&self) -> &[NavigationNode] {
        &self.nodes
    }

    /// Visit every node depth-first in authored order.
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&NodePath, &'a NavigationNode)) {
        fn walk_inner<'a>(
            nodes: &'a [NavigationNode],
            parent: Option<&NodePath>,
            visit: &mut impl FnMut(&NodePath, &'a NavigationNode),
        ) {
            for (index, node) in nodes.iter().enumerate() {
                let path = match parent {
                    Some(parent) => parent.child(index),
                    None => NodePath::root(index),
                };
                visit(&path, node);
                if let NavigationNode::Category(category) = node {
                    walk_inner(&category.items, Some(&path), visit);
                }
            }
        }

        walk_inner(&self.nodes, None, &mut visit);
    }

    /// All documents, depth-first in authored order.
    #[must_use]
    pub fn documents(&self) -> Vec<&Document> {
        let mut documents = Vec::new();
        self.walk(|_, node| {
            if let NavigationNode::Document(doc) = node {
                documents.push(doc);
            }
        });
        documents
    }

    /// Number of document leaves.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.documents().len()
    }

    /// Document identifiers, depth-first in authored order.
    #[must_use]
    pub fn doc_ids(&self) -> Vec<&str> {
        self.documents().into_iter().map(|d| d.id.as_str()).collect()
    }

    /// First document in authored order.
    #[must_use]
    pub fn first_document(&self) -> Option<&Document> {
        self.documents().into_iter().next()
    }

    /// Whether a document with this identifier is present.
    #[must_use]
    pub fn contains_document(&self, id: &str) -> bool {
        self.documents().iter().any(|d| d.id == id)
    }

    /// Number of category nodes.
    #[must_use]
    pub fn category_count(&self) -> usize {
        let mut count = 0;
        self.walk(|_, node| {
            if matches!(node, NavigationNode::Category(_)) {
                count += 1;
            }
        });
        count
    }

    /// Look up the category at `path`.
    #[must_use]
    pub fn category_at(&self, path: &NodePath) -> Option<&Category> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.nodes.get(*first)?;
        for index in rest {
            match node {
                NavigationNode::Category(category) => node = category.items.get(*index)?,
                NavigationNode::Document(_) => return None,
            }
        }
        match node {
            NavigationNode::Category(category) => Some(category),
            NavigationNode::Document(_) => None,
        }
    }

    /// Paths and labels of categories without any children.
    #[must_use]
    pub fn empty_categories(&self) -> Vec<(NodePath, &str)> {
        let mut empty = Vec::new();
        self.walk(|path, node| {
            if let NavigationNode::Category(category) = node
                && category.items.is_empty()
            {
                empty.push((path.clone(), category.label.as_str()));
            }
        });
        empty
    }

    /// Identifiers that occur more than once, in order of first repetition.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for id in self.doc_ids() {
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    /// Fail on the first document identifier that occurs twice.
    pub fn ensure_unique_ids(&self, sidebar: &str) -> Result<()> {
        match self.duplicate_ids().first() {
            Some(id) => Err(CoreError::duplicate_document(sidebar, *id)),
            None => Ok(()),
        }
    }
}

/// Mapping from sidebar identifier to sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarManifest {
    sidebars: BTreeMap<String, Sidebar>,
}

impl SidebarManifest {
    /// Create an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a manifest from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::site_data(path, "sidebar manifest not found"));
        }

        let content = std::fs::read_to_string(path)?;
        let manifest = Self::from_toml_str(&content)
            .map_err(|e| CoreError::site_data(path, e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            sidebars = manifest.len(),
            "loaded sidebar manifest"
        );
        Ok(manifest)
    }

    /// Parse a manifest from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Add or replace a sidebar.
    pub fn insert(&mut self, id: impl Into<String>, sidebar: Sidebar) {
        self.sidebars.insert(id.into(), sidebar);
    }

    /// Get a sidebar by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Sidebar> {
        self.sidebars.get(id)
    }

    /// Iterate sidebars sorted by identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Sidebar)> {
        self.sidebars.iter().map(|(id, sidebar)| (id.as_str(), sidebar))
    }

    /// Sidebar identifiers, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sidebars.keys().map(String::as_str)
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// Whether the manifest has no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Every document identifier across all sidebars.
    #[must_use]
    pub fn all_doc_ids(&self) -> BTreeSet<&str> {
        self.sidebars
            .values()
            .flat_map(Sidebar::doc_ids)
            .collect()
    }

    /// Identifiers of the sidebars containing document `id`.
    #[must_use]
    pub fn sidebars_containing(&self, id: &str) -> Vec<&str> {
        self.iter()
            .filter(|(_, sidebar)| sidebar.contains_document(id))
            .map(|(name, _)| name)
            .collect()
    }

    /// Fail on the first sidebar holding a duplicated document identifier.
    pub fn ensure_unique_ids(&self) -> Result<()> {
        for (id, sidebar) in self.iter() {
            sidebar.ensure_unique_ids(id)?;
        }
        Ok(())
    }
}

/// Serialized node shape: shorthand string or `type`-tagged table.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawNode {
    Id(String),
    Tagged(TaggedNode),
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TaggedNode {
    Doc {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Category {
        label: String,
        #[serde(default = "default_collapsed")]
        collapsed: bool,
        #[serde(default)]
        items: Vec<NavigationNode>,
    },
}

fn default_collapsed() -> bool {
    true
}

impl From<RawNode> for NavigationNode {
    fn from(raw: RawNode) -> Self {
        match raw {
            RawNode::Id(id) => Self::doc(id),
            RawNode::Tagged(TaggedNode::Doc { id, label }) => Self::Document(Document { id, label }),
            RawNode::Tagged(TaggedNode::Category {
                label,
                collapsed,
                items,
            }) => Self::category(label, !collapsed, items),
        }
    }
}

impl From<NavigationNode> for RawNode {
    fn from(node: NavigationNode) -> Self {
        match node {
            NavigationNode::Document(Document { id, label: None }) => Self::Id(id),
            NavigationNode::Document(Document { id, label }) => {
                Self::Tagged(TaggedNode::Doc { id, label })
            }
            NavigationNode::Category(Category {
                label,
                expanded,
                items,
            }) => Self::Tagged(TaggedNode::Category {
                label,
                collapsed: !expanded,
                items,
            }),
        }
    }
}
