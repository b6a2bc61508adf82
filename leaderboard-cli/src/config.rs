//! Runtime configuration read from the environment.
use std::env;

/// Filter used when `LEADERBOARD_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for the command-line runner.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// `tracing_subscriber::EnvFilter` directives for stderr logging.
    pub log_filter: String,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LEADERBOARD_LOG` - log filter directives (default: `warn`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(filter) = read_env::<String>("LEADERBOARD_LOG") {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
