use crate::app_config::{AppConfig, OutputFormat};
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
/// Every variable is optional; decoupled from the process environment so it
/// can be tested with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let log_level = or_default("NAVWARN_LOG_LEVEL", "warn");

    let output_format = parse_output_format(&or_default("NAVWARN_OUTPUT_FORMAT", "json"))?;

    let pretty = match or_default("NAVWARN_PRETTY", "true").to_lowercase().as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        other => {
            return Err(invalid(
                "NAVWARN_PRETTY",
                format!("expected true/false, got '{other}'"),
            ))
        }
    };

    let max_concurrent_files = or_default("NAVWARN_MAX_CONCURRENT_FILES", "4")
        .parse::<usize>()
        .map_err(|e| invalid("NAVWARN_MAX_CONCURRENT_FILES", e.to_string()))?;
    if max_concurrent_files == 0 {
        return Err(invalid(
            "NAVWARN_MAX_CONCURRENT_FILES",
            "must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        log_level,
        output_format,
        pretty,
        max_concurrent_files,
    })
}

/// Parse a string into an `OutputFormat` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than `json` or `yaml`.
pub fn parse_output_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "yaml" | "yml" => Ok(OutputFormat::Yaml),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NAVWARN_OUTPUT_FORMAT".to_string(),
            reason: format!("unknown output format '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
