//! Layout strategies for the desktop and mobile headers
//!
//! Everything that differs between the two variants lives here; the
//! renderers only ask the layout.

use crate::error::CoreError;
use crate::models::{AuthLinks, HeaderProps, MenuItem};
use crate::node::{OpenOn, Trigger};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-variant rendering decisions
pub trait Layout {
    fn variant(&self) -> Variant;

    /// Trigger of a main-menu submenu
    fn menu_trigger(&self, item: &MenuItem) -> Trigger;

    fn menu_panel_class(&self) -> &'static str;

    fn menu_open_on(&self) -> OpenOn;

    /// Whether the secondary app menu is rendered at all
    fn supports_app_menu(&self) -> bool;

    /// Logged-out destinations when the caller does not override them
    fn default_auth_links(&self) -> AuthLinks;

    fn header_class(&self, props: &HeaderProps) -> String;

    fn logo_src<'a>(&self, props: &'a HeaderProps) -> Option<&'a str>;
}

/// Wide-screen header: hover dropdowns with a caret, app menu supported
#[derive(Debug, Clone, Copy, Default)]
pub struct Desktop;

/// Narrow-screen header: click dropdowns, no app menu
#[derive(Debug, Clone, Copy, Default)]
pub struct Mobile;

impl Layout for Desktop {
    fn variant(&self) -> Variant {
        Variant::Desktop
    }

    fn menu_trigger(&self, item: &MenuItem) -> Trigger {
        Trigger {
            label: item.content.clone(),
            href: Some(item.href.clone()),
            class: Some("nav-link d-inline-flex align-items-center".to_string()),
            caret: true,
            as_button: false,
        }
    }

    fn menu_panel_class(&self) -> &'static str {
        "pin-left pin-right shadow py-2"
    }

    fn menu_open_on(&self) -> OpenOn {
        OpenOn::Hover
    }

    fn supports_app_menu(&self) -> bool {
        true
    }

    fn default_auth_links(&self) -> AuthLinks {
        AuthLinks::new("https://funix.edu.vn/dang-ky-tu-van/", "/login")
    }

    fn header_class(&self, _props: &HeaderProps) -> String {
        "is-login site-header".to_string()
    }

    fn logo_src<'a>(&self, props: &'a HeaderProps) -> Option<&'a str> {
        props.logo.as_deref()
    }
}

impl Layout for Mobile {
    fn variant(&self) -> Variant {
        Variant::Mobile
    }

    fn menu_trigger(&self, item: &MenuItem) -> Trigger {
        Trigger {
            label: item.content.clone(),
            href: None,
            class: Some("nav-link".to_string()),
            caret: false,
            as_button: true,
        }
    }

    fn menu_panel_class(&self) -> &'static str {
        "position-static pin-left pin-right py-2"
    }

    fn menu_open_on(&self) -> OpenOn {
        OpenOn::Click
    }

    fn supports_app_menu(&self) -> bool {
        false
    }

    fn default_auth_links(&self) -> AuthLinks {
        AuthLinks::new("#", "dang-nhap.html")
    }

    fn header_class(&self, props: &HeaderProps) -> String {
        if props.sticky_on_mobile {
            "is-login site-header sticky-top".to_string()
        } else {
            "is-login site-header".to_string()
        }
    }

    fn logo_src<'a>(&self, props: &'a HeaderProps) -> Option<&'a str> {
        props.logo_down.as_deref().or(props.logo.as_deref())
    }
}

/// Header variant, selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Desktop,
    Mobile,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Desktop => "desktop",
            Variant::Mobile => "mobile",
        }
    }

    fn layout(&self) -> &'static dyn Layout {
        match self {
            Variant::Desktop => &Desktop,
            Variant::Mobile => &Mobile,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Variant::Desktop),
            "mobile" => Ok(Variant::Mobile),
            other => Err(CoreError::UnknownVariant {
                value: other.to_string(),
            }),
        }
    }
}

impl Layout for Variant {
    fn variant(&self) -> Variant {
        *self
    }

    fn menu_trigger(&self, item: &MenuItem) -> Trigger {
        self.layout().menu_trigger(item)
    }

    fn menu_panel_class(&self) -> &'static str {
        self.layout().menu_panel_class()
    }

    fn menu_open_on(&self) -> OpenOn {
        self.layout().menu_open_on()
    }

    fn supports_app_menu(&self) -> bool {
        self.layout().supports_app_menu()
    }

    fn default_auth_links(&self) -> AuthLinks {
        self.layout().default_auth_links()
    }

    fn header_class(&self, props: &HeaderProps) -> String {
        self.layout().header_class(props)
    }

    fn logo_src<'a>(&self, props: &'a HeaderProps) -> Option<&'a str> {
        self.layout().logo_src(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse() {
        assert_eq!("desktop".parse::<Variant>().unwrap(), Variant::Desktop);
        assert_eq!(" Mobile ".parse::<Variant>().unwrap(), Variant::Mobile);
        assert!("tablet".parse::<Variant>().is_err());
    }

    #[test]
    fn test_variant_delegates() {
        assert!(Variant::Desktop.supports_app_menu());
        assert!(!Variant::Mobile.supports_app_menu());
        assert_eq!(Variant::Mobile.menu_open_on(), OpenOn::Click);
        assert_eq!(Variant::Desktop.default_auth_links().login_href, "/login");
    }

    #[test]
    fn test_triggers_differ() {
        let item = MenuItem::menu("/b", "B", vec![]);
        let desktop = Desktop.menu_trigger(&item);
        assert!(desktop.caret);
        assert_eq!(desktop.href.as_deref(), Some("/b"));

        let mobile = Mobile.menu_trigger(&item);
        assert!(!mobile.caret);
        assert!(mobile.as_button);
        assert!(mobile.href.is_none());
    }

    #[test]
    fn test_mobile_logo_prefers_logo_down() {
        let mut props = HeaderProps::default().with_logo("/logo.svg", "Logo");
        assert_eq!(Mobile.logo_src(&props), Some("/logo.svg"));
        props.logo_down = Some("/logo-down.svg".to_string());
        assert_eq!(Mobile.logo_src(&props), Some("/logo-down.svg"));
        assert_eq!(Desktop.logo_src(&props), Some("/logo.svg"));
    }

    #[test]
    fn test_sticky_class_mobile_only() {
        let props = HeaderProps::default();
        assert!(Mobile.header_class(&props).contains("sticky-top"));
        assert!(!Desktop.header_class(&props).contains("sticky-top"));

        let props = HeaderProps {
            sticky_on_mobile: false,
            ..HeaderProps::default()
        };
        assert!(!Mobile.header_class(&props).contains("sticky-top"));
    }
}
