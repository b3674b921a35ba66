//! docsite UI Components
//!
//! Leptos components for the docsite frontend.
//!
//! # Components
//!
//! ## Navigation
//! - [`DocSidebar`] - Collapsible sidebar tree with lazily created children
//!
//! ## Cards
//! - [`DocCard`] - A single clickable summary tile
//! - [`CardGrid`] - Cards in authored order
//! - [`CardSectionView`] - Titled section holding a card grid
//!
//! ## Landing
//! - [`Landing`] - Hero, statistics, quick navigation and card sections
//!
//! # Example
//!
//! ```ignore
//! use docsite_core::SidebarManifest;
//! use docsite_ui::{DocSidebar, SiteRoutes};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Docs(manifest: SidebarManifest) -> impl IntoView {
//!     let sidebar = manifest.get("apiSidebar").cloned().unwrap_or_default();
//!     let active = RwSignal::new("intro".to_string());
//!
//!     view! { <DocSidebar sidebar=sidebar routes=SiteRoutes::default() active_id=active /> }
//! }
//! ```

pub mod cards;
pub mod landing;
pub mod navigation;

pub use cards::{CardGrid, CardSectionView, DocCard, IconGlyph};
pub use landing::{HeroBanner, Landing, QuickNavigation, QuickStats};
pub use navigation::{DocSidebar, SiteRoutes};
