use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub agent_url: String,
    pub cors_origin: String,
    pub agent_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string()),
            agent_url: env::var("AGENT_URL")
                .unwrap_or_else(|_| "http://localhost:8000/query".to_string()),
            cors_origin: env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            agent_timeout: Duration::from_secs(
                env::var("AGENT_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .expect("AGENT_TIMEOUT_SECS must be a valid number"),
            ),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}", self.listen_addr)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
