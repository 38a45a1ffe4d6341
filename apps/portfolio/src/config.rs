use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: String,
    pub components_dir: String,
    pub static_dir: String,
    pub port: u16,
    pub rust_log: String,
    pub contact_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_path: env_or("PORTFOLIO_DATA_PATH", "data/portfolio.json"),
            components_dir: env_or("COMPONENTS_DIR", "components"),
            static_dir: env_or("STATIC_DIR", "static"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            contact_delay_ms: env_or("CONTACT_DELAY_MS", "1500")
                .parse::<u64>()
                .context("CONTACT_DELAY_MS must be a whole number of milliseconds")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: "data/portfolio.json".to_string(),
            components_dir: "components".to_string(),
            static_dir: "static".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            contact_delay_ms: 1500,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
