//! Optional configuration for upstream endpoints and retry behavior.
//!
//! sunpaper runs without any configuration file. When `sunpaper.toml` exists
//! in the configuration directory it may override any of these fields:
//!
//! ```toml
//! timezone_endpoint = "https://timeapi.io/api/TimeZone/coordinate"
//! sun_times_endpoint = "https://api.sunrise-sunset.org/json"
//! retries = 3          # Total attempts per request (1-10)
//! retry_delay_ms = 500 # Fixed pause between attempts (0-60000) ms
//! ```
//!
//! The configuration directory is `--config <dir>` when given, otherwise
//! `$XDG_CONFIG_HOME/sunpaper/`. Wallpaper filenames are fixed and cannot be
//! configured.

pub mod loading;
pub mod validation;


use serde::Deserialize;

use crate::constants::*;
use crate::fetch::RetryPolicy;

pub use loading::{get_config_path, load, load_from_path};
pub use validation::validate_config;

/// Settings read from `sunpaper.toml`. Every field is optional.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the coordinate to timezone service.
    pub timezone_endpoint: Option<String>,
    /// Base URL of the sunrise/sunset service.
    pub sun_times_endpoint: Option<String>,
    /// Total attempts per request, the first one included.
    pub retries: Option<u32>,
    /// Pause between attempts in milliseconds.
    pub retry_delay_ms: Option<u64>,
}

impl Config {
    pub fn timezone_endpoint(&self) -> &str {
        self.timezone_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_TIMEZONE_ENDPOINT)
    }

    pub fn sun_times_endpoint(&self) -> &str {
        self.sun_times_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_SUN_TIMES_ENDPOINT)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retries.unwrap_or(DEFAULT_RETRIES),
            self.retry_delay_ms.unwrap_or(DEFAULT_RETRY_DELAY_MS),
        )
    }

    /// Print the effective settings as an indented block.
    pub fn log_config(&self) {
        let policy = self.retry_policy();
        log_block_start!("Effective configuration:");
        log_indented!("Timezone service: {}", self.timezone_endpoint());
        log_indented!("Sun times service: {}", self.sun_times_endpoint());
        log_indented!(
            "Retries: {} attempts, {}ms apart",
            policy.attempts,
            policy.delay.as_millis()
        );
    }
}
