//! Menu descriptors supplied by the host application

use crate::node::NavNode;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Kind of a main-menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemKind {
    /// Flat link
    #[default]
    Item,
    /// Expandable submenu; any unrecognised type string lands here too
    #[serde(other)]
    Menu,
}

impl MenuItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuItemKind::Item => "item",
            MenuItemKind::Menu => "menu",
        }
    }
}

/// One entry of the main menu
///
/// `submenu_content` is only rendered for `MenuItemKind::Menu`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// A missing type renders as a submenu, like any other non-`item` type
    #[serde(rename = "type", default = "missing_item_kind")]
    pub kind: MenuItemKind,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu_content: Option<Vec<NavNode>>,
}

fn missing_item_kind() -> MenuItemKind {
    MenuItemKind::Menu
}

impl MenuItem {
    pub fn item(href: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: MenuItemKind::Item,
            href: href.into(),
            content: content.into(),
            submenu_content: None,
        }
    }

    pub fn menu(
        href: impl Into<String>,
        content: impl Into<String>,
        submenu_content: Vec<NavNode>,
    ) -> Self {
        Self {
            kind: MenuItemKind::Menu,
            href: href.into(),
            content: content.into(),
            submenu_content: Some(submenu_content),
        }
    }

    /// Sibling key, `"{type}-{content}"`
    pub fn key(&self) -> String {
        format!("{}-{}", self.kind.as_str(), self.content)
    }
}

/// Primary navigation: either descriptors to render or an already built tree
///
/// A list is read as a pre-built tree when any entry carries a `"node"` tag,
/// otherwise as descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MainMenu {
    Items(Vec<MenuItem>),
    Prebuilt(Vec<NavNode>),
}

impl<'de> Deserialize<'de> for MainMenu {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
        let prebuilt = entries.iter().any(|entry| entry.get("node").is_some());
        let entries = serde_json::Value::Array(entries);

        if prebuilt {
            serde_json::from_value(entries)
                .map(MainMenu::Prebuilt)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(entries)
                .map(MainMenu::Items)
                .map_err(D::Error::custom)
        }
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        MainMenu::Items(vec![
            MenuItem::item("/", "Courses"),
            MenuItem::item("/courses", "Discover New"),
        ])
    }
}

impl MainMenu {
    pub fn len(&self) -> usize {
        match self {
            MainMenu::Items(items) => items.len(),
            MainMenu::Prebuilt(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Flat link inside the app menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMenuLink {
    /// Free-form type, used as the `dropdown-<type>` class suffix
    #[serde(rename = "type", default = "default_app_link_type")]
    pub kind: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub content: String,
}

fn default_app_link_type() -> String {
    "item".to_string()
}

impl AppMenuLink {
    pub fn new(
        kind: impl Into<String>,
        href: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            href: href.into(),
            content: content.into(),
        }
    }
}

/// Secondary "app switcher" dropdown (desktop only)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMenuDescriptor {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub menu_items: Vec<AppMenuLink>,
}
