//! Configuration module for the notes backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON file holding the note collection
    pub data_path: PathBuf,
    /// Directory of static assets for the rendered page
    pub static_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_path = env::var("NOTES_DATA_PATH")
            .unwrap_or_else(|_| "./data/notes.json".to_string())
            .into();

        let static_dir = env::var("NOTES_STATIC_DIR")
            .unwrap_or_else(|_| "./static".to_string())
            .into();

        let bind_addr = env::var("NOTES_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .expect("Invalid NOTES_BIND_ADDR format");

        let log_level = env::var("NOTES_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            data_path,
            static_dir,
            bind_addr,
            log_level,
        }
    }
}
