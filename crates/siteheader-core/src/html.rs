//! Static HTML output for a render tree
//!
//! Used for server-side previews and the `render` CLI command. Output is
//! deterministic: equal trees always produce byte-identical markup.

use crate::header::HeaderRenderer;
use crate::layout::Layout;
use crate::models::HeaderProps;
use crate::node::{Dropdown, Group, Image, Link, List, NavNode, OpenOn, Toggle};
use crate::visibility::VisibilityState;
use std::fmt::Write;

const CARET_SVG: &str = r#"<svg class="caret" role="img" aria-hidden="true" focusable="false" xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m6 9 6 6 6-6"/></svg>"#;

/// Render one node (and its subtree) to HTML
pub fn render(node: &NavNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Render a sequence of sibling nodes
pub fn render_all(nodes: &[NavNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

/// Build and render a complete header
pub fn render_header<L: Layout>(layout: L, props: &HeaderProps, state: VisibilityState) -> String {
    render(&HeaderRenderer::new(layout).render(props, state))
}

fn write_node(out: &mut String, node: &NavNode) {
    match node {
        NavNode::Link(link) => write_link(out, link),
        NavNode::Dropdown(dropdown) => write_dropdown(out, dropdown),
        NavNode::Group(group) => write_group(out, group),
        NavNode::List(list) => write_list(out, list),
        NavNode::Image(image) => write_image(out, image),
        NavNode::Toggle(toggle) => write_toggle(out, toggle),
        NavNode::Text { text } => out.push_str(&html_escape(text)),
    }
}

fn write_link(out: &mut String, link: &Link) {
    let _ = write!(out, "<a href=\"{}\"", html_escape(&link.href));
    write_class(out, link.class.as_deref());
    out.push('>');
    out.push_str(&html_escape(&link.label));
    for child in &link.children {
        write_node(out, child);
    }
    out.push_str("</a>");
}

fn write_dropdown(out: &mut String, dropdown: &Dropdown) {
    let open_on = match dropdown.open_on {
        OpenOn::Hover => "hover",
        OpenOn::Click => "click",
    };

    out.push_str("<div");
    write_class(out, dropdown.class.as_deref());
    let _ = write!(out, " data-open-on=\"{}\">", open_on);

    let trigger = &dropdown.trigger;
    out.push_str("<a");
    write_class(out, trigger.class.as_deref());
    if let Some(href) = &trigger.href {
        let _ = write!(out, " href=\"{}\"", html_escape(href));
    }
    if trigger.as_button {
        out.push_str(" role=\"button\" tabindex=\"0\"");
    }
    out.push_str(" aria-haspopup=\"true\" aria-expanded=\"false\">");
    out.push_str(&html_escape(&trigger.label));
    if trigger.caret {
        out.push(' ');
        out.push_str(CARET_SVG);
    }
    out.push_str("</a>");

    out.push_str("<div");
    write_class(out, dropdown.panel.class.as_deref());
    out.push_str(" hidden>");
    for child in &dropdown.panel.children {
        write_node(out, child);
    }
    out.push_str("</div></div>");
}

fn write_group(out: &mut String, group: &Group) {
    let tag = group.tag.as_str();
    let _ = write!(out, "<{}", tag);
    write_class(out, group.class.as_deref());
    out.push('>');
    for child in &group.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", tag);
}

fn write_list(out: &mut String, list: &List) {
    out.push_str("<ul");
    write_class(out, list.class.as_deref());
    out.push('>');
    for item in &list.items {
        out.push_str("<li");
        write_class(out, item.class.as_deref());
        out.push('>');
        write_node(out, &item.content);
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

fn write_image(out: &mut String, image: &Image) {
    out.push_str("<img");
    write_class(out, image.class.as_deref());
    if let Some(src) = &image.src {
        let _ = write!(out, " src=\"{}\"", html_escape(src));
    }
    let _ = write!(out, " alt=\"{}\">", html_escape(&image.alt));
}

fn write_toggle(out: &mut String, toggle: &Toggle) {
    out.push_str("<div");
    write_class(out, toggle.class.as_deref());
    let _ = write!(out, " tabindex=\"0\" data-state=\"{}\">", toggle.state.as_str());
    for child in &toggle.trigger {
        write_node(out, child);
    }
    if toggle.state.is_shown() {
        for child in &toggle.content {
            write_node(out, child);
        }
    }
    out.push_str("</div>");
}

fn write_class(out: &mut String, class: Option<&str>) {
    if let Some(class) = class.filter(|c| !c.is_empty()) {
        let _ = write!(out, " class=\"{}\"", html_escape(class));
    }
}

/// HTML escape for safe output
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Desktop, Mobile};
    use crate::models::{AppMenuDescriptor, AppMenuLink, MainMenu, MenuItem};
    use crate::visibility::VisibilityEvent;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_link_markup() {
        let html = render(&NavNode::Link(
            Link::new("/a?x=1&y=2", "A <b>").with_class("nav-link"),
        ));
        assert_eq!(
            html,
            r#"<a href="/a?x=1&amp;y=2" class="nav-link">A &lt;b&gt;</a>"#
        );
    }

    #[test]
    fn test_logged_out_desktop() {
        let html = render_header(Desktop, &HeaderProps::default(), VisibilityState::Hidden);
        assert!(html.starts_with(r#"<header class="is-login site-header">"#));
        assert!(html.contains(r#"<a href="/login" class="btn btn-login">Đăng nhập</a>"#));
        assert!(html.contains(r#"href="https://funix.edu.vn/dang-ky-tu-van/" class="btn btn-register""#));
        assert!(!html.contains("show-menu"));
    }

    #[test]
    fn test_user_menu_hover_round_trip() {
        let props = HeaderProps::default().logged_in(true);
        let initial = render_header(Mobile, &props, VisibilityState::Hidden);
        assert!(!html_contains_user_links(&initial));

        let hovered = VisibilityState::Hidden.apply(VisibilityEvent::PointerEnter);
        let shown = render_header(Mobile, &props, hovered);
        assert!(html_contains_user_links(&shown));

        let left = render_header(Mobile, &props, hovered.apply(VisibilityEvent::PointerLeave));
        assert_eq!(left, initial);
    }

    fn html_contains_user_links(html: &str) -> bool {
        html.contains(r#"<ul class="show-menu">"#) && html.contains(">Sign Out</a>")
    }

    #[test]
    fn test_menu_order_and_panel() {
        let props = HeaderProps::default().with_main_menu(MainMenu::Items(vec![
            MenuItem::item("/a", "A"),
            MenuItem::menu("/b", "B", vec![NavNode::text("X")]),
        ]));
        let html = render_header(Desktop, &props, VisibilityState::Hidden);

        let a = html.find(">A</a>").expect("flat link");
        let b = html.find(">B ").expect("trigger");
        assert!(a < b);
        assert!(html.contains(r#"<div class="pin-left pin-right shadow py-2" hidden>X</div>"#));
    }

    #[test]
    fn test_app_menu_markup() {
        let props = HeaderProps::default().with_app_menu(AppMenuDescriptor {
            content: "Apps".to_string(),
            menu_items: vec![AppMenuLink::new("link", "/x", "X")],
        });
        let html = render_header(Desktop, &props, VisibilityState::Hidden);
        assert_eq!(html.matches("class=\"app-menu\"").count(), 1);
        assert!(html.contains(r#"<a href="/x" class="dropdown-link">X</a>"#));

        let mobile = render_header(Mobile, &props, VisibilityState::Hidden);
        assert!(!mobile.contains("app-menu"));
    }

    #[test]
    fn test_mobile_trigger_is_button() {
        let props = HeaderProps::default().with_main_menu(MainMenu::Items(vec![MenuItem::menu(
            "/b",
            "B",
            vec![],
        )]));
        let html = render_header(Mobile, &props, VisibilityState::Hidden);
        assert!(html.contains(r#"<a class="nav-link" role="button" tabindex="0""#));
        assert!(html.contains("data-open-on=\"click\""));
        assert!(!html.contains("class=\"caret\""));
    }

    #[test]
    fn test_render_all_concatenates() {
        let html = render_all(&[NavNode::text("a"), NavNode::text("b")]);
        assert_eq!(html, "ab");
    }
}
