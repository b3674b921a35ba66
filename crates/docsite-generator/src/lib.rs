//! docsite Generator Library
//!
//! Static site generation engine for docsite.
//!
//! # Modules
//!
//! - [`template`] - HTML template system with variable interpolation
//! - [`sidebar`] - Sidebar navigation tree views, markup and outlines
//! - [`cards`] - Card list rendering
//! - [`html`] - Page generation for the landing page and sidebar overviews
//! - [`build`] - Build orchestration

pub mod build;
pub mod cards;
pub mod html;
pub mod sidebar;
pub mod template;

pub use build::{BuildError, BuildStats, Builder};
pub use cards::CardRenderer;
pub use html::HtmlGenerator;
pub use sidebar::{ExpansionState, RenderedNode, SidebarRenderer};
pub use template::{Template, TemplateContext, TemplateRegistry};
