//! Header construction parameters

use super::menu::{AppMenuDescriptor, MainMenu};
use serde::{Deserialize, Serialize};

/// Destinations and labels of the logged-out call-to-action links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthLinks {
    pub register_href: String,
    pub register_label: String,
    pub login_href: String,
    pub login_label: String,
}

impl AuthLinks {
    pub const REGISTER_LABEL: &'static str = "Đăng ký";
    pub const LOGIN_LABEL: &'static str = "Đăng nhập";

    pub fn new(register_href: impl Into<String>, login_href: impl Into<String>) -> Self {
        Self {
            register_href: register_href.into(),
            register_label: Self::REGISTER_LABEL.to_string(),
            login_href: login_href.into(),
            login_label: Self::LOGIN_LABEL.to_string(),
        }
    }
}

/// Everything a caller passes to a header
///
/// `avatar` and `username` are accepted for compatibility with existing
/// callers but are not read by any renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderProps {
    pub main_menu: MainMenu,
    pub app_menu: Option<AppMenuDescriptor>,
    pub logo: Option<String>,
    /// Alternate logo used by the mobile layout
    pub logo_down: Option<String>,
    pub logo_alt_text: Option<String>,
    pub logo_destination: Option<String>,
    pub logged_in: bool,
    pub avatar: Option<String>,
    pub username: Option<String>,
    /// Mobile only: pin the header to the top of the viewport
    pub sticky_on_mobile: bool,
    /// Constrain the logo width (`mw-100`) for minimal auth pages
    pub minimal_logo: bool,
    /// Overrides the layout's default logged-out destinations
    pub auth_links: Option<AuthLinks>,
}

impl Default for HeaderProps {
    fn default() -> Self {
        Self {
            main_menu: MainMenu::default(),
            app_menu: None,
            logo: None,
            logo_down: None,
            logo_alt_text: None,
            logo_destination: None,
            logged_in: false,
            avatar: None,
            username: None,
            sticky_on_mobile: true,
            minimal_logo: false,
            auth_links: None,
        }
    }
}

impl HeaderProps {
    pub fn logged_in(mut self, logged_in: bool) -> Self {
        self.logged_in = logged_in;
        self
    }

    pub fn with_main_menu(mut self, main_menu: MainMenu) -> Self {
        self.main_menu = main_menu;
        self
    }

    pub fn with_app_menu(mut self, app_menu: AppMenuDescriptor) -> Self {
        self.app_menu = Some(app_menu);
        self
    }

    pub fn with_logo(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.logo = Some(src.into());
        self.logo_alt_text = Some(alt.into());
        self
    }
}
