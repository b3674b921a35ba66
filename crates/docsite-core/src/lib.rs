//! docsite Core Library
//!
//! Configuration, static site data (sidebar navigation trees, landing page cards)
//! and cross-reference validation for the docsite documentation site generator.

pub mod cards;
pub mod config;
pub mod error;
pub mod landing;
pub mod navigation;
pub mod site;
pub mod validate;

pub use cards::{CardItem, CardSection, Icon};
pub use config::{BrokenLinkPolicy, Config, NavbarItem};
pub use error::{CoreError, Result};
pub use landing::LandingPage;
pub use navigation::{Category, Document, NavigationNode, NodePath, Sidebar, SidebarManifest};
pub use site::Site;
pub use validate::{LinkResolver, ValidationReport, is_external, validate_site};
