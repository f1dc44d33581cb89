//! Logged-in user menu (hover / keyboard focus toggle)

use leptos::prelude::*;
use siteheader_core::node::Toggle;
use siteheader_core::{VisibilityEvent, VisibilityState};

use super::nav_node::render_nodes;

/// Trigger region that reveals its content while hovered or focused
///
/// Each instance owns its own visibility state, seeded from the toggle.
#[component]
pub fn UserMenu(toggle: Toggle) -> impl IntoView {
    let state = RwSignal::new(toggle.state);
    user_menu_view(toggle, state)
}

/// Feeds DOM events into the state machine
fn visibility_sink(state: RwSignal<VisibilityState>) -> impl Fn(VisibilityEvent) + Copy {
    move |event| state.update(|s| *s = s.apply(event))
}

fn user_menu_view(toggle: Toggle, state: RwSignal<VisibilityState>) -> impl IntoView {
    let apply = visibility_sink(state);
    let content = StoredValue::new(toggle.content);

    view! {
        <div
            class=toggle.class.unwrap_or_default()
            tabindex="0"
            data-state=move || state.get().as_str()
            on:mouseenter=move |_| apply(VisibilityEvent::PointerEnter)
            on:mouseleave=move |_| apply(VisibilityEvent::PointerLeave)
            on:focusin=move |_| apply(VisibilityEvent::FocusIn)
            on:focusout=move |_| apply(VisibilityEvent::FocusOut)
        >
            {render_nodes(toggle.trigger)}
            <Show when=move || state.get().is_shown()>
                {move || render_nodes(content.get_value())}
            </Show>
        </div>
    }
}
