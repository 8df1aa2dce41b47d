use crate::error::AppError;
use crate::validation;
use reqwest::Url;
use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://www.speedrun.com/api/v2/";
const DEFAULT_RUN_URL: &str = "https://speedrun.com/run/";
const DEFAULT_PERCENTILE: f64 = 95.0;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    pub run_url: String,
    pub default_percentile: f64,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("TTB_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.into());
        let api_base = parse_base(&api_base)?;

        let run_url = lookup("TTB_RUN_URL").unwrap_or_else(|| DEFAULT_RUN_URL.into());

        let default_percentile = match lookup("TTB_DEFAULT_PERCENTILE") {
            Some(raw) => {
                let value: f64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!("TTB_DEFAULT_PERCENTILE is not a number: {}", raw))
                })?;
                validation::validate_percentile(value)
                    .map_err(|e| AppError::Config(format!("TTB_DEFAULT_PERCENTILE: {}", e)))?;
                value
            }
            None => DEFAULT_PERCENTILE,
        };

        let timeout_secs: u64 = match lookup("TTB_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::Config(format!("TTB_TIMEOUT_SECS is not a whole number: {}", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let user_agent = lookup("TTB_USER_AGENT")
            .unwrap_or_else(|| format!("time-to-beat/{}", env!("CARGO_PKG_VERSION")));

        Ok(Config {
            api_base,
            run_url,
            default_percentile,
            timeout: Duration::from_secs(timeout_secs),
            user_agent,
        })
    }

    pub fn permalink(&self, run_id: &str) -> String {
        format!("{}{}", self.run_url, run_id)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            run_url: DEFAULT_RUN_URL.into(),
            default_percentile: DEFAULT_PERCENTILE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("time-to-beat/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

// Url::join drops the last path segment unless the base ends with a slash.
fn parse_base(raw: &str) -> Result<Url, AppError> {
    let raw = raw.trim();
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized)
        .map_err(|e| AppError::Config(format!("TTB_API_BASE is not a valid URL ({}): {}", e, raw)))
}
