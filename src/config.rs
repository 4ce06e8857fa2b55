// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values and the
//! configuration value loaded from the environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Root directory for the document store | `/data` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `5000` |
//! | `ACCESS_TOKEN_SECRET` | HS256 signing secret for access tokens | Required |
//! | `TOKEN_TTL_SECS` | Access token lifetime in seconds | `3600` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

/// Environment variable name for the document store root directory.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Environment variable name for the token signing secret.
pub const ACCESS_TOKEN_SECRET_ENV: &str = "ACCESS_TOKEN_SECRET";

/// Environment variable name for the token lifetime in seconds.
pub const TOKEN_TTL_ENV: &str = "TOKEN_TTL_SECS";

/// Default access token lifetime (one hour).
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Root directory for the document store.
    pub data_dir: String,
    /// HS256 signing secret for access tokens.
    pub token_secret: String,
    /// Access token lifetime in seconds.
    pub token_ttl_secs: i64,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Returns an error if `ACCESS_TOKEN_SECRET` is missing. Everything else
    /// falls back to documented defaults.
    pub fn from_env() -> Result<Self, String> {
        let token_secret = env::var(ACCESS_TOKEN_SECRET_ENV)
            .map_err(|_| format!("{ACCESS_TOKEN_SECRET_ENV} must be set"))?;

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let token_ttl_secs = env::var(TOKEN_TTL_ENV)
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            data_dir: env::var(DATA_DIR_ENV).unwrap_or_else(|_| "/data".to_string()),
            token_secret,
            token_ttl_secs,
        })
    }
}
