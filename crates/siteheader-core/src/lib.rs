//! siteheader-core - Core library for siteheader
//!
//! Turns header props (menu descriptors, logo, login state) into a logical
//! render tree that both the Leptos components and the static HTML writer
//! consume. Desktop and mobile share one renderer parameterized by a
//! `Layout` strategy.

pub mod auth;
pub mod config;
pub mod error;
pub mod header;
pub mod html;
pub mod layout;
pub mod menu;
pub mod models;
pub mod node;
pub mod visibility;

pub use config::{ConfigFormat, HeaderConfig};
pub use error::CoreError;
pub use header::HeaderRenderer;
pub use layout::{Desktop, Layout, Mobile, Variant};
pub use menu::MenuRenderer;
pub use models::{AppMenuDescriptor, AppMenuLink, AuthLinks, HeaderProps, MainMenu, MenuItem, MenuItemKind};
pub use node::NavNode;
pub use visibility::{VisibilityEvent, VisibilityState};
