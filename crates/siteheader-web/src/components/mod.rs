//! Leptos UI components

mod header;
mod nav_node;
mod user_menu;

pub use header::{DesktopHeader, MobileHeader, ResponsiveHeader, VariantHeader};
pub use nav_node::{render_node, render_nodes, CaretIcon, DropdownMenu};
pub use user_menu::UserMenu;
