//! Environment-driven configuration.

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Directory holding the JSON state documents.
    pub data_dir: String,
    /// Inference endpoint URL for AI commentary.
    pub ai_endpoint: String,
    /// Static bearer token for the inference endpoint.
    pub ai_token: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: env_or("MD_LISTEN_ADDR", "127.0.0.1:8085"),
            data_dir: env_or("MD_DATA_DIR", "./data"),
            ai_endpoint: env_or("MD_AI_ENDPOINT", ""),
            ai_token: env_or("MD_AI_TOKEN", ""),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
