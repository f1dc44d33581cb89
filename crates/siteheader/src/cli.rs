//! CLI commands: render, check, serve

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use siteheader_core::layout::Layout;
use siteheader_core::{
    HeaderConfig, HeaderRenderer, MainMenu, MenuItemKind, Variant, VisibilityState, html,
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Flags of the `render` command
#[derive(Debug, Default)]
pub struct RenderOptions {
    pub variant: Option<String>,
    pub logged_in: bool,
    pub shown: bool,
    pub tree: bool,
}

/// Load the config at `path`, or defaults when no path is given
///
/// An explicit path that fails to load is an error; silently rendering
/// defaults would hide typos in the file name.
pub fn load_config(path: Option<&Path>) -> Result<HeaderConfig> {
    match path {
        Some(path) => HeaderConfig::load(path).map_err(|e| {
            let hint = e.suggestion();
            let err = anyhow::Error::new(e);
            match hint {
                Some(hint) => err.context(hint),
                None => err,
            }
        }),
        None => Ok(HeaderConfig::default()),
    }
}

pub fn run_render(config_path: Option<&Path>, options: &RenderOptions) -> Result<String> {
    let mut config = load_config(config_path)?;

    if let Some(variant) = &options.variant {
        config.variant = variant.parse::<Variant>()?;
    }
    if options.logged_in {
        config.props.logged_in = true;
    }
    let state = if options.shown {
        VisibilityState::Hovered
    } else {
        VisibilityState::Hidden
    };

    let tree = HeaderRenderer::new(config.variant).render(&config.props, state);
    if options.tree {
        serde_json::to_string_pretty(&tree).context("Failed to serialize render tree")
    } else {
        Ok(html::render(&tree))
    }
}

pub fn run_check(path: &Path, no_color: bool) -> Result<()> {
    let config = load_config(Some(path))?;
    println!("{}", summary_table(&config, no_color));
    Ok(())
}

pub async fn run_serve(config_path: Option<&Path>, port: u16) -> Result<()> {
    let config = load_config(config_path)?;
    info!(variant = %config.variant, port, "Starting preview server");
    siteheader_web::run(Arc::new(config), port).await
}

/// Key facts about a config, one row per setting
pub fn summary_rows(config: &HeaderConfig) -> Vec<(&'static str, String)> {
    let props = &config.props;
    let main_menu = match &props.main_menu {
        MainMenu::Items(items) => {
            let menus = items.iter().filter(|i| i.kind == MenuItemKind::Menu).count();
            format!("{} entries ({} submenus)", items.len(), menus)
        }
        MainMenu::Prebuilt(nodes) => format!("pre-built tree ({} nodes)", nodes.len()),
    };
    let app_menu = match (&props.app_menu, config.variant.supports_app_menu()) {
        (None, _) => "none".to_string(),
        (Some(app), true) => format!("\"{}\" ({} links)", app.content, app.menu_items.len()),
        (Some(_), false) => format!("ignored on {}", config.variant),
    };
    let auth = props
        .auth_links
        .clone()
        .unwrap_or_else(|| config.variant.default_auth_links());

    vec![
        ("Variant", config.variant.to_string()),
        ("Main menu", main_menu),
        ("App menu", app_menu),
        ("Logo", props.logo.clone().unwrap_or_else(|| "-".to_string())),
        ("Logged in", props.logged_in.to_string()),
        ("Register link", auth.register_href),
        ("Login link", auth.login_href),
    ]
}

fn summary_table(config: &HeaderConfig, no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["Setting", "Value"]);
    } else {
        table.set_header(vec![
            Cell::new("Setting").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
        ]);
    }

    for (setting, value) in summary_rows(config) {
        table.add_row(vec![setting.to_string(), value]);
    }
    table
}
