//! siteheader - Render, validate and preview site header configs

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "siteheader",
    version,
    about = "Render, validate and preview site header configs",
    long_about = "Desktop and mobile site headers driven by a JSON or YAML config.\n\
                  \n\
                  Examples:\n\
                    siteheader render                         # Default desktop header, logged out\n\
                    siteheader render --variant mobile        # Mobile layout\n\
                    siteheader render --logged-in --shown     # User menu expanded\n\
                    siteheader render --tree                  # Render tree as JSON\n\
                    siteheader check header.yaml              # Validate a config\n\
                    siteheader serve --port 3333              # Preview server\n\
                  \n\
                  Environment Variables:\n\
                    SITEHEADER_CONFIG                         # Default config file\n\
                    SITEHEADER_NO_COLOR                       # Disable ANSI colors\n\
                    RUST_LOG                                  # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Header config file (.json, .yaml, .yml)
    #[arg(long, global = true, env = "SITEHEADER_CONFIG")]
    config: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "SITEHEADER_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Print the header as HTML (or its render tree as JSON)
    Render {
        /// Layout variant (overrides the config)
        #[arg(long, value_parser = ["desktop", "mobile"])]
        variant: Option<String>,
        /// Render the logged-in branch
        #[arg(long)]
        logged_in: bool,
        /// Render the user menu expanded
        #[arg(long)]
        shown: bool,
        /// Output the render tree as JSON instead of HTML
        #[arg(long)]
        tree: bool,
    },
    /// Validate a config file and print a summary
    Check {
        /// Config file to validate (defaults to --config)
        file: Option<PathBuf>,
    },
    /// Run the preview server
    Serve {
        /// Port for the preview server
        #[arg(long, default_value = "3333")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    match cli.mode {
        Mode::Render {
            variant,
            logged_in,
            shown,
            tree,
        } => {
            let options = cli::RenderOptions {
                variant,
                logged_in,
                shown,
                tree,
            };
            let output = cli::run_render(cli.config.as_deref(), &options)?;
            println!("{}", output);
        }
        Mode::Check { file } => {
            let path = file
                .or(cli.config)
                .ok_or_else(|| anyhow::anyhow!("No config file given (pass a path or --config)"))?;
            cli::run_check(&path, cli.no_color)?;
        }
        Mode::Serve { port } => {
            cli::run_serve(cli.config.as_deref(), port).await?;
        }
    }

    Ok(())
}
