//! Render-tree to Leptos view conversion

use leptos::prelude::*;
use siteheader_core::node::{Dropdown, Group, Image, Link, List, NavNode, OpenOn, Tag};

use super::user_menu::UserMenu;

/// Convert one render node (and its subtree) into a view
pub fn render_node(node: NavNode) -> AnyView {
    match node {
        NavNode::Link(link) => render_link(link),
        NavNode::Dropdown(dropdown) => view! { <DropdownMenu dropdown /> }.into_any(),
        NavNode::Group(group) => render_group(group),
        NavNode::List(list) => render_list(list),
        NavNode::Image(image) => render_image(image),
        NavNode::Toggle(toggle) => view! { <UserMenu toggle /> }.into_any(),
        NavNode::Text { text } => text.into_any(),
    }
}

pub fn render_nodes(nodes: Vec<NavNode>) -> Vec<AnyView> {
    nodes.into_iter().map(render_node).collect()
}

fn render_link(link: Link) -> AnyView {
    view! {
        <a href=link.href class=link.class.unwrap_or_default()>
            {link.label}
            {render_nodes(link.children)}
        </a>
    }
    .into_any()
}

fn render_group(group: Group) -> AnyView {
    let class = group.class.unwrap_or_default();
    let children = render_nodes(group.children);
    match group.tag {
        Tag::Div => view! { <div class=class>{children}</div> }.into_any(),
        Tag::Header => view! { <header class=class>{children}</header> }.into_any(),
        Tag::Nav => view! { <nav class=class>{children}</nav> }.into_any(),
    }
}

fn render_list(list: List) -> AnyView {
    let items = list
        .items
        .into_iter()
        .map(|item| {
            view! { <li class=item.class.unwrap_or_default()>{render_node(item.content)}</li> }
        })
        .collect_view();

    view! { <ul class=list.class.unwrap_or_default()>{items}</ul> }.into_any()
}

fn render_image(image: Image) -> AnyView {
    view! { <img class=image.class.unwrap_or_default() src=image.src alt=image.alt /> }.into_any()
}

/// Caret indicator (lucide chevron-down)
#[component]
pub fn CaretIcon() -> impl IntoView {
    view! {
        <svg
            class="caret"
            role="img"
            aria-hidden="true"
            focusable="false"
            xmlns="http://www.w3.org/2000/svg"
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="m6 9 6 6 6-6"/>
        </svg>
    }
}

/// Trigger + panel; opens on hover (desktop) or click/Enter (mobile)
#[component]
pub fn DropdownMenu(dropdown: Dropdown) -> impl IntoView {
    let open = RwSignal::new(false);
    dropdown_view(dropdown, open)
}

/// Pointer entering (`true`) or leaving (`false`) the dropdown
fn pointer_moved(open: RwSignal<bool>, open_on: OpenOn, inside: bool) {
    if open_on == OpenOn::Hover {
        open.set(inside);
    }
}

/// Click or Enter on the trigger
fn trigger_activated(open: RwSignal<bool>, open_on: OpenOn) {
    if open_on == OpenOn::Click {
        open.update(|v| *v = !*v);
    }
}

fn dropdown_view(dropdown: Dropdown, open: RwSignal<bool>) -> impl IntoView {
    let open_on = dropdown.open_on;
    let trigger = dropdown.trigger;

    view! {
        <div
            class=dropdown.class.unwrap_or_default()
            on:mouseenter=move |_| pointer_moved(open, open_on, true)
            on:mouseleave=move |_| pointer_moved(open, open_on, false)
        >
            <a
                class=trigger.class.unwrap_or_default()
                href=trigger.href
                role=trigger.as_button.then_some("button")
                tabindex=trigger.as_button.then_some("0")
                aria-haspopup="true"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| trigger_activated(open, open_on)
                on:keydown=move |e| {
                    if e.key() == "Enter" {
                        trigger_activated(open, open_on);
                    }
                }
            >
                {trigger.label}
                {trigger.caret.then(|| view! { " " <CaretIcon /> })}
            </a>
            <div class=dropdown.panel.class.unwrap_or_default() hidden=move || !open.get()>
                {render_nodes(dropdown.panel.children)}
            </div>
        </div>
    }
}
