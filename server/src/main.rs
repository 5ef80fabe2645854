#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "springfield site failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let conf = leptos::prelude::get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let config = ServerConfig::from_env(leptos_options.site_addr)?;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, backend = %client::config::backend_url(), "springfield site listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
