//! Main Leptos App component for the CSR demo page

use leptos::prelude::*;
use siteheader_core::{HeaderConfig, HeaderProps};

use crate::components::{ResponsiveHeader, VariantHeader};

/// Id of the `<script type="application/json">` tag holding the page config
pub const CONFIG_ELEMENT_ID: &str = "siteheader-config";

/// Main App component
///
/// Reads the header config embedded in the page and renders it with the
/// config's variant. Without an embedded config both variants are rendered
/// and CSS picks one.
#[component]
pub fn App() -> impl IntoView {
    let config = read_page_config();
    let pinned = config.as_ref().map(|c| c.variant);
    let props: HeaderProps = config.map(|c| c.props).unwrap_or_default();

    // Demo control: flip the login state without a host application
    let (logged_in, set_logged_in) = signal(props.logged_in);
    let props = Signal::derive(move || HeaderProps {
        logged_in: logged_in.get(),
        ..props.clone()
    });

    view! {
        <div class="app">
            {match pinned {
                Some(variant) => view! { <VariantHeader props variant /> }.into_any(),
                None => view! { <ResponsiveHeader props /> }.into_any(),
            }}
            <main class="content">
                <button
                    class="btn btn-secondary"
                    on:click=move |_| set_logged_in.update(|v| *v = !*v)
                >
                    {move || if logged_in.get() { "Log out (demo)" } else { "Log in (demo)" }}
                </button>
            </main>
        </div>
    }
}

fn read_page_config() -> Option<HeaderConfig> {
    let text = document().get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
    match serde_json::from_str::<HeaderConfig>(&text) {
        Ok(config) => Some(config),
        Err(e) => {
            leptos::logging::warn!("Ignoring invalid header config: {}", e);
            None
        }
    }
}
