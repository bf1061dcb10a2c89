//! Configuration module for the dealership backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Admin gate email (required for the admin panel to work)
    pub admin_email: Option<String>,
    /// Admin gate password
    pub admin_password: Option<String>,
    /// Mail relay HTTP endpoint for inquiry notifications
    pub mail_relay_url: Option<String>,
    /// Bearer credential for the mail relay account
    pub mail_api_key: Option<String>,
    /// Recipient address for inquiry notifications
    pub notify_email: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("DEALER_DB_PATH")
            .unwrap_or_else(|_| "./data/dealership.sqlite".to_string())
            .into();

        let bind_addr = env::var("DEALER_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid DEALER_BIND_ADDR format");

        let log_level = env::var("DEALER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let admin_email = env::var("DEALER_ADMIN_EMAIL").ok();
        let admin_password = env::var("DEALER_ADMIN_PASSWORD").ok();

        let mail_relay_url = env::var("DEALER_MAIL_RELAY_URL").ok();
        let mail_api_key = env::var("DEALER_MAIL_API_KEY").ok();
        let notify_email = env::var("DEALER_NOTIFY_EMAIL").ok();

        Self {
            db_path,
            bind_addr,
            log_level,
            admin_email,
            admin_password,
            mail_relay_url,
            mail_api_key,
            notify_email,
        }
    }

    /// Whether the admin gate has both credentials configured.
    pub fn admin_gate_configured(&self) -> bool {
        self.admin_email.is_some() && self.admin_password.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("DEALER_DB_PATH");
        env::remove_var("DEALER_BIND_ADDR");
        env::remove_var("DEALER_LOG_LEVEL");
        env::remove_var("DEALER_ADMIN_EMAIL");
        env::remove_var("DEALER_ADMIN_PASSWORD");
        env::remove_var("DEALER_MAIL_RELAY_URL");
        env::remove_var("DEALER_MAIL_API_KEY");
        env::remove_var("DEALER_NOTIFY_EMAIL");

        let config = Config::from_env();

        assert_eq!(config.db_path, PathBuf::from("./data/dealership.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(!config.admin_gate_configured());
        assert!(config.mail_relay_url.is_none());
    }
}
