use std::str::FromStr;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
    };

    let log_level = optional("SHOPSCRAPE_LOG_LEVEL").unwrap_or(defaults.log_level);
    let user_agent = optional("SHOPSCRAPE_USER_AGENT");

    let request_timeout_secs = optional("SHOPSCRAPE_REQUEST_TIMEOUT_SECS")
        .map(|raw| parse_positive::<u64>("SHOPSCRAPE_REQUEST_TIMEOUT_SECS", &raw))
        .transpose()?
        .unwrap_or(defaults.request_timeout_secs);
    let page_size = optional("SHOPSCRAPE_PAGE_SIZE")
        .map(|raw| parse_positive::<u32>("SHOPSCRAPE_PAGE_SIZE", &raw))
        .transpose()?
        .unwrap_or(defaults.page_size);
    let page_delay_ms = optional("SHOPSCRAPE_PAGE_DELAY_MS")
        .map(|raw| parse_number::<u64>("SHOPSCRAPE_PAGE_DELAY_MS", &raw))
        .transpose()?
        .unwrap_or(defaults.page_delay_ms);
    let max_pages = optional("SHOPSCRAPE_MAX_PAGES")
        .map(|raw| parse_positive::<usize>("SHOPSCRAPE_MAX_PAGES", &raw))
        .transpose()?;

    Ok(AppConfig {
        log_level,
        request_timeout_secs,
        user_agent,
        page_size,
        page_delay_ms,
        max_pages,
    })
}

fn parse_number<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason: e.to_string(),
    })
}

/// Like [`parse_number`] but rejects zero.
fn parse_positive<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr + Default + PartialEq,
    T::Err: std::fmt::Display,
{
    let value = parse_number::<T>(var, raw)?;
    if value == T::default() {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
