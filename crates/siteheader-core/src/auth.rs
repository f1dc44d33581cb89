//! Logged-in / logged-out branch of the header

use crate::layout::Layout;
use crate::models::AuthLinks;
use crate::node::{Group, Image, Link, List, ListItem, NavNode, Toggle};
use crate::visibility::VisibilityState;

pub const AUTH_REGION_CLASS: &str = "col-auto right-ct";
pub const USER_MENU_CLASS: &str = "show-menu";

const AVATAR_SRC: &str = "/static/indigo/images/profiles/default_50.png";
const ARROW_SRC: &str = "/static/indigo/images/down.png";

/// Fixed entries of the user menu
pub const USER_MENU_LINKS: [(&str, &str); 4] = [
    ("Dashboard", "#"),
    ("Profile", "profile.html"),
    ("Account", "#"),
    ("Sign Out", "#"),
];

/// Pick the right-hand region of the header
///
/// Logged in: the hover/focus user menu in `state`.
/// Logged out: register and login call-to-action links.
pub fn render_auth_branch<L: Layout + ?Sized>(
    layout: &L,
    logged_in: bool,
    state: VisibilityState,
    links: Option<&AuthLinks>,
) -> NavNode {
    if logged_in {
        render_user_menu(state)
    } else {
        let defaults;
        let links = match links {
            Some(links) => links,
            None => {
                defaults = layout.default_auth_links();
                &defaults
            }
        };
        render_logged_out(links)
    }
}

/// Trigger region with avatar and arrow; the four links only while shown
pub fn render_user_menu(state: VisibilityState) -> NavNode {
    let icon = |src: &str| {
        NavNode::Image(Image {
            src: Some(src.to_string()),
            alt: String::new(),
            class: Some("icon-down".to_string()),
        })
    };

    let items: Vec<ListItem> = USER_MENU_LINKS
        .iter()
        .map(|(label, href)| ListItem::new(Link::new(*href, *label).into()))
        .collect();

    NavNode::Toggle(Toggle {
        class: Some(AUTH_REGION_CLASS.to_string()),
        trigger: vec![icon(AVATAR_SRC), icon(ARROW_SRC)],
        content: vec![NavNode::List(List {
            class: Some(USER_MENU_CLASS.to_string()),
            items,
        })],
        state,
    })
}

pub fn render_logged_out(links: &AuthLinks) -> NavNode {
    Group::div(
        AUTH_REGION_CLASS,
        vec![
            Link::new(&links.register_href, &links.register_label)
                .with_class("btn btn-register")
                .into(),
            Link::new(&links.login_href, &links.login_label)
                .with_class("btn btn-login")
                .into(),
        ],
    )
    .into()
}
