use std::env;
use anyhow::{Context, Result};

use crate::routes::RoutePrefix;

#[derive(Debug, Clone)]
pub struct Config {
    pub route_prefix: RoutePrefix,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let route_prefix = env::var("ROUTE_PREFIX").unwrap_or_default();
        let route_prefix = RoutePrefix::parse(&route_prefix)
            .context("ROUTE_PREFIX must be empty or a path like '/app'")?;

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            route_prefix,
            service_port,
            service_host,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Route prefix: {}", self.route_prefix);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
