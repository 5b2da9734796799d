mod api_doc;
mod app;
mod codec;
mod config;
mod error;
mod extract;
mod handlers;
mod models;
mod routes;
mod server;

use config::Config;
use server::EchoServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("json-echo-mock starting");

    let config = Config::from_env()?;
    config.log_startup();
    api_doc::log_operations(&config.route_prefix);

    let server = EchoServer::bind(&config).await?;
    server.run(server::shutdown_signal()).await
}
