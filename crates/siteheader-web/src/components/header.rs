//! Desktop, mobile and responsive header components

use leptos::prelude::*;
use siteheader_core::{HeaderProps, HeaderRenderer, Variant, VisibilityState};

use super::nav_node::render_node;

/// Header for one variant
///
/// Re-renders when `props` changes; the user menu starts hidden on every
/// render.
#[component]
pub fn VariantHeader(
    /// Construction parameters (menus, logo, login state)
    #[prop(into)]
    props: Signal<HeaderProps>,
    /// Layout to render with
    #[prop(optional)]
    variant: Variant,
) -> impl IntoView {
    let renderer = HeaderRenderer::new(variant);
    move || props.with(|props| render_node(renderer.render(props, VisibilityState::Hidden)))
}

/// Wide-screen header with hover dropdowns and the optional app menu
#[component]
pub fn DesktopHeader(#[prop(into)] props: Signal<HeaderProps>) -> impl IntoView {
    view! { <VariantHeader props variant=Variant::Desktop /> }
}

/// Narrow-screen header with click dropdowns
#[component]
pub fn MobileHeader(#[prop(into)] props: Signal<HeaderProps>) -> impl IntoView {
    view! { <VariantHeader props variant=Variant::Mobile /> }
}

/// Both variants, switched by Bootstrap display utilities at the `md` breakpoint
#[component]
pub fn ResponsiveHeader(#[prop(into)] props: Signal<HeaderProps>) -> impl IntoView {
    view! {
        <div class="d-md-none">
            <MobileHeader props />
        </div>
        <div class="d-none d-md-block">
            <DesktopHeader props />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_to_html(build: impl FnOnce() -> AnyView) -> String {
        let owner = Owner::new();
        owner.with(|| build().to_html())
    }

    #[test]
    fn test_desktop_header_ssr_logged_out() {
        let html = render_to_html(|| {
            view! { <DesktopHeader props=HeaderProps::default() /> }.into_any()
        });
        assert!(html.contains("is-login site-header"));
        assert!(html.contains("btn btn-login"));
        assert!(!html.contains("show-menu"));
    }

    #[test]
    fn test_mobile_header_ssr_logged_in_hidden() {
        let props = HeaderProps::default().logged_in(true);
        let html = render_to_html(|| view! { <MobileHeader props /> }.into_any());
        assert!(html.contains("sticky-top"));
        assert!(html.contains("right-ct"));
        assert!(!html.contains("show-menu"));
        assert!(!html.contains("btn-login"));
    }

    #[test]
    fn test_variant_header_follows_props_signal() {
        let html = render_to_html(|| {
            let props = RwSignal::new(HeaderProps::default());
            props.update(|p| p.logged_in = true);
            view! { <VariantHeader props variant=Variant::Mobile /> }.into_any()
        });
        assert!(html.contains("sticky-top"));
        assert!(html.contains("icon-down"));
        assert!(!html.contains("btn-register"));
    }
}
