//! Main menu and app menu rendering

use crate::layout::Layout;
use crate::models::{AppMenuDescriptor, MainMenu, MenuItem, MenuItemKind};
use crate::node::{Dropdown, Link, NavNode, OpenOn, Panel, Trigger};

const APP_MENU_PANEL_CLASS: &str = "mb-0 dropdown-menu show dropdown-menu-right pin-right shadow py-2";

/// Turns menu descriptors into render nodes for one layout
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuRenderer<L> {
    layout: L,
}

impl<L: Layout> MenuRenderer<L> {
    pub fn new(layout: L) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Render the primary navigation, preserving input order
    ///
    /// A pre-built tree is returned unchanged.
    pub fn render_main_menu(&self, menu: &MainMenu) -> Vec<NavNode> {
        match menu {
            MainMenu::Prebuilt(nodes) => nodes.clone(),
            MainMenu::Items(items) => items.iter().map(|item| self.render_item(item)).collect(),
        }
    }

    pub fn render_item(&self, item: &MenuItem) -> NavNode {
        match item.kind {
            MenuItemKind::Item => Link::new(&item.href, &item.content)
                .with_class("nav-link")
                .with_key(item.key())
                .into(),
            MenuItemKind::Menu => Dropdown {
                key: Some(item.key()),
                class: Some("nav-item".to_string()),
                trigger: self.layout.menu_trigger(item),
                panel: Panel {
                    class: Some(self.layout.menu_panel_class().to_string()),
                    children: item.submenu_content.clone().unwrap_or_default(),
                },
                open_on: self.layout.menu_open_on(),
            }
            .into(),
        }
    }

    /// Render the secondary app switcher
    ///
    /// Returns `None` when no descriptor is given or the layout has no app
    /// menu.
    pub fn render_app_menu(&self, app_menu: Option<&AppMenuDescriptor>) -> Option<NavNode> {
        let app_menu = app_menu.filter(|_| self.layout.supports_app_menu())?;

        let links: Vec<NavNode> = app_menu
            .menu_items
            .iter()
            .map(|link| {
                NavNode::Link(
                    Link::new(&link.href, &link.content)
                        .with_class(format!("dropdown-{}", link.kind))
                        .with_key(format!("{}-{}", link.kind, link.content)),
                )
            })
            .collect();

        Some(
            Dropdown {
                key: Some("app-menu".to_string()),
                class: Some("app-menu".to_string()),
                trigger: Trigger {
                    label: app_menu.content.clone(),
                    href: None,
                    class: Some("nav-link d-inline-flex align-items-center".to_string()),
                    caret: true,
                    as_button: false,
                },
                panel: Panel {
                    class: Some(APP_MENU_PANEL_CLASS.to_string()),
                    children: links,
                },
                open_on: OpenOn::Hover,
            }
            .into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Desktop, Mobile};
    use crate::models::AppMenuLink;

    fn sample_menu() -> MainMenu {
        MainMenu::Items(vec![
            MenuItem::item("/a", "A"),
            MenuItem::menu("/b", "B", vec![NavNode::text("X")]),
        ])
    }

    #[test]
    fn test_items_render_in_order() {
        let nodes = MenuRenderer::new(Desktop).render_main_menu(&sample_menu());
        assert_eq!(nodes.len(), 2);

        let NavNode::Link(link) = &nodes[0] else {
            panic!("first node should be a link");
        };
        assert_eq!(link.href, "/a");
        assert_eq!(link.label, "A");
        assert_eq!(link.key.as_deref(), Some("item-A"));

        let NavNode::Dropdown(dropdown) = &nodes[1] else {
            panic!("second node should be a dropdown");
        };
        assert_eq!(dropdown.trigger.label, "B");
        assert_eq!(dropdown.panel.children, vec![NavNode::text("X")]);
    }

    #[test]
    fn test_prebuilt_passes_through() {
        let tree = vec![NavNode::text("already built")];
        let nodes = MenuRenderer::new(Mobile).render_main_menu(&MainMenu::Prebuilt(tree.clone()));
        assert_eq!(nodes, tree);
    }

    #[test]
    fn test_item_ignores_submenu_content() {
        let mut item = MenuItem::item("/a", "A");
        item.submenu_content = Some(vec![NavNode::text("ignored")]);
        let node = MenuRenderer::new(Desktop).render_item(&item);
        assert!(matches!(node, NavNode::Link(_)));
    }

    #[test]
    fn test_menu_without_submenu_has_empty_panel() {
        let item = MenuItem {
            submenu_content: None,
            ..MenuItem::menu("/b", "B", vec![])
        };
        let NavNode::Dropdown(d) = MenuRenderer::new(Desktop).render_item(&item) else {
            panic!("expected dropdown");
        };
        assert!(d.panel.children.is_empty());
    }

    #[test]
    fn test_empty_entries_render_as_empty_links() {
        let nodes = MenuRenderer::new(Desktop)
            .render_main_menu(&MainMenu::Items(vec![MenuItem::item("", "")]));
        assert_eq!(nodes.len(), 1);
        let NavNode::Link(link) = &nodes[0] else {
            panic!("expected link");
        };
        assert!(link.href.is_empty() && link.label.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let menu = MainMenu::Items(vec![MenuItem::item("/a", "A"), MenuItem::item("/a", "A")]);
        assert_eq!(MenuRenderer::new(Desktop).render_main_menu(&menu).len(), 2);
    }

    #[test]
    fn test_mobile_dropdown_opens_on_click() {
        let nodes = MenuRenderer::new(Mobile).render_main_menu(&sample_menu());
        let NavNode::Dropdown(d) = &nodes[1] else {
            panic!("expected dropdown");
        };
        assert_eq!(d.open_on, OpenOn::Click);
        assert_eq!(d.panel.class.as_deref(), Some("position-static pin-left pin-right py-2"));
    }

    #[test]
    fn test_app_menu_absent() {
        assert!(MenuRenderer::new(Desktop).render_app_menu(None).is_none());
    }

    #[test]
    fn test_app_menu_single_dropdown() {
        let app = AppMenuDescriptor {
            content: "Apps".to_string(),
            menu_items: vec![AppMenuLink::new("link", "/x", "X")],
        };
        let node = MenuRenderer::new(Desktop)
            .render_app_menu(Some(&app))
            .expect("desktop renders app menu");

        let dropdowns = node.dropdowns();
        assert_eq!(dropdowns.len(), 1);
        assert_eq!(dropdowns[0].trigger.label, "Apps");

        let links = node.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "/x");
        assert_eq!(links[0].class.as_deref(), Some("dropdown-link"));
    }

    #[test]
    fn test_app_menu_skipped_on_mobile() {
        let app = AppMenuDescriptor {
            content: "Apps".to_string(),
            menu_items: vec![AppMenuLink::new("link", "/x", "X")],
        };
        assert!(MenuRenderer::new(Mobile).render_app_menu(Some(&app)).is_none());
    }
}
