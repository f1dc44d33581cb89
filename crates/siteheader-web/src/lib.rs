//! siteheader-web - Leptos header components and Axum preview server

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
pub use components::{DesktopHeader, MobileHeader, ResponsiveHeader, VariantHeader};
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use anyhow::Result;
    use siteheader_core::HeaderConfig;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tracing::info;

    use crate::create_router;

    /// Run the preview server
    pub async fn run(config: Arc<HeaderConfig>, port: u16) -> Result<()> {
        let router = create_router(config);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr).await?;

        info!("Preview server listening on http://{}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}
