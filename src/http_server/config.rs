//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including bind address, CORS settings
//! and how the record store starts and validates.

use serde::{Deserialize, Serialize};

use crate::records::Validation;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, any origin allowed)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Start with the five example records (default: true)
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Field checks applied on create and update (default: presence only)
    #[serde(default)]
    pub validation: Validation,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_seed() -> bool {
    true
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            seed: default_seed(),
            validation: Validation::default(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
