//! Full header composition

use crate::auth::render_auth_branch;
use crate::layout::Layout;
use crate::menu::MenuRenderer;
use crate::models::HeaderProps;
use crate::node::{Group, Image, Link, List, ListItem, NavNode, Tag};
use crate::visibility::VisibilityState;

/// Class of the highlighted (first) main-menu entry
pub const ACTIVE_ITEM_CLASS: &str = "active";

/// Builds the complete header tree for one layout
///
/// Output depends only on the props and the visibility state, so calling
/// `render` twice with the same inputs yields equal trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderRenderer<L> {
    menus: MenuRenderer<L>,
}

impl<L: Layout> HeaderRenderer<L> {
    pub fn new(layout: L) -> Self {
        Self {
            menus: MenuRenderer::new(layout),
        }
    }

    pub fn menus(&self) -> &MenuRenderer<L> {
        &self.menus
    }

    pub fn render(&self, props: &HeaderProps, state: VisibilityState) -> NavNode {
        let layout = self.menus.layout();

        let mut row = vec![self.render_logo(props), self.render_navigation(props)];
        row.extend(self.menus.render_app_menu(props.app_menu.as_ref()));
        row.push(render_auth_branch(
            layout,
            props.logged_in,
            state,
            props.auth_links.as_ref(),
        ));

        Group::new(
            Tag::Header,
            layout.header_class(props),
            vec![
                Group::div(
                    "container",
                    vec![Group::div("container-fluid", vec![Group::div("row", row).into()]).into()],
                )
                .into(),
            ],
        )
        .into()
    }

    fn render_logo(&self, props: &HeaderProps) -> NavNode {
        let image = Image {
            src: self.menus.layout().logo_src(props).map(str::to_string),
            alt: props.logo_alt_text.clone().unwrap_or_default(),
            class: props.minimal_logo.then(|| "mw-100".to_string()),
        };

        let destination = props.logo_destination.as_deref().unwrap_or("/");
        Group::div(
            "col-auto logo",
            vec![Link::new(destination, "").with_key("logo").with_child(image).into()],
        )
        .into()
    }

    fn render_navigation(&self, props: &HeaderProps) -> NavNode {
        let items: Vec<ListItem> = self
            .menus
            .render_main_menu(&props.main_menu)
            .into_iter()
            .enumerate()
            .map(|(i, node)| match i {
                0 => ListItem::new(node).with_class(ACTIVE_ITEM_CLASS),
                _ => ListItem::new(node),
            })
            .collect();

        Group::new(
            Tag::Nav,
            "col-auto menu",
            vec![NavNode::List(List {
                class: Some("navigation".to_string()),
                items,
            })],
        )
        .into()
    }
}
