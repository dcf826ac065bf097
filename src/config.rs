use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Artificial latency injected before a scrape response, to simulate
    /// real scraping cost. Purely a UX affordance.
    pub scrape_delay: Duration,
    /// Upstream service answering /api/query. Optional; the query endpoint
    /// reports a configuration error when unset.
    pub query_backend_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        let delay_ms = env::var("SCRAPE_DELAY_MS").unwrap_or_else(|_| "3000".to_string());
        let delay_ms = delay_ms
            .parse::<u64>()
            .map_err(|e| AppError::ConfigError(format!("Invalid scrape delay: {}", e)))?;

        let query_backend_url = env::var("QUERY_BACKEND_URL").ok();

        Ok(Config {
            server_addr,
            scrape_delay: Duration::from_millis(delay_ms),
            query_backend_url,
        })
    }
}
