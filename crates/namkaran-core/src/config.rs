use crate::app_config::{AppConfig, Environment, LabelStyle, Localization, ResultSizeMode};
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
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        match or_default(var, default).trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => Err(invalid(var, format!("expected a boolean, got '{other}'"))),
        }
    };

    let env = parse_environment(&or_default("NAMKARAN_ENV", "development"));
    let bind_addr = parse_addr("NAMKARAN_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("NAMKARAN_LOG_LEVEL", "info");
    let corpus_path = lookup("NAMKARAN_CORPUS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let result_size_mode = parse_result_size_mode(&or_default("NAMKARAN_RESULT_SIZE_MODE", "bounded"))
        .map_err(|reason| invalid("NAMKARAN_RESULT_SIZE_MODE", reason))?;
    let include_lunar_mansion = parse_bool("NAMKARAN_INCLUDE_LUNAR_MANSION", "true")?;
    let localization = parse_localization(&or_default("NAMKARAN_LOCALIZATION", "corpus"))
        .map_err(|reason| invalid("NAMKARAN_LOCALIZATION", reason))?;
    let label_style = parse_label_style(&or_default("NAMKARAN_LABEL_STYLE", "bilingual"))
        .map_err(|reason| invalid("NAMKARAN_LABEL_STYLE", reason))?;

    let compute_delay_ms = parse_u64("NAMKARAN_COMPUTE_DELAY_MS", "2000")?;
    let rate_limit_max_requests = parse_usize("NAMKARAN_RATE_LIMIT_MAX_REQUESTS", "120")?;
    let rate_limit_window_secs = parse_u64("NAMKARAN_RATE_LIMIT_WINDOW_SECS", "60")?;

    if rate_limit_window_secs == 0 {
        return Err(invalid(
            "NAMKARAN_RATE_LIMIT_WINDOW_SECS",
            "window must be at least one second".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        corpus_path,
        result_size_mode,
        include_lunar_mansion,
        localization,
        label_style,
        compute_delay_ms,
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_result_size_mode(s: &str) -> Result<ResultSizeMode, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "bounded" => Ok(ResultSizeMode::Bounded),
        "full" => Ok(ResultSizeMode::Full),
        other => Err(format!("expected 'bounded' or 'full', got '{other}'")),
    }
}

fn parse_localization(s: &str) -> Result<Localization, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "corpus" => Ok(Localization::CorpusBased),
        "language" => Ok(Localization::LanguageBased),
        other => Err(format!("expected 'corpus' or 'language', got '{other}'")),
    }
}

fn parse_label_style(s: &str) -> Result<LabelStyle, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "romanized" => Ok(LabelStyle::Romanized),
        "bilingual" => Ok(LabelStyle::Bilingual),
        other => Err(format!("expected 'romanized' or 'bilingual', got '{other}'")),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
