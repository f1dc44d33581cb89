//! Data models for header configuration

pub mod menu;
pub mod props;

pub use menu::{AppMenuDescriptor, AppMenuLink, MainMenu, MenuItem, MenuItemKind};
pub use props::{AuthLinks, HeaderProps};
