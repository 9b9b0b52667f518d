//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AppConfig;
use crate::core::export::{AssetStateFilter, ExportFormat};
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix of environment variables overriding configuration values
pub const ENV_PREFIX: &str = "ASSET_EXPORT_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AppConfig
/// 4. Applies environment variable overrides (ASSET_EXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns `ExportError::Configuration` if any step fails, and
/// `ExportError::InvalidState` if an override names an unknown asset state
/// filter.
///
/// # Examples
///
/// ```no_run
/// use asset_export::config::loader::load_config;
///
/// let config = load_config("asset-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: AppConfig = toml::from_str(&contents)
        .map_err(|e| ExportError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ExportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched. All missing variables are reported in
/// a single error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExportError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

/// Applies environment variable overrides using the ASSET_EXPORT_* prefix
///
/// Variables follow the pattern `ASSET_EXPORT_<SECTION>_<KEY>`, for example
/// `ASSET_EXPORT_EXPORT_ASSET_STATE` or `ASSET_EXPORT_STORAGE_PATH`.
fn apply_env_overrides(config: &mut AppConfig) -> Result<()> {
    // Application overrides
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = env_override("APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Project and storage overrides
    if let Some(val) = env_override("PROJECT_PATH") {
        config.project.path = val;
    }
    if let Some(val) = env_override("STORAGE_PATH") {
        config.storage.path = val;
    }

    // Export overrides
    if let Some(val) = env_override("EXPORT_FORMAT") {
        config.export.format = val.parse::<ExportFormat>()?;
    }
    if let Some(val) = env_override("EXPORT_ASSET_STATE") {
        config.export.asset_state = Some(val.parse::<AssetStateFilter>()?);
    }

    // Logging overrides
    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("LOADER_TEST_ROOT", "/srv/assets");
        let input = "path = \"${LOADER_TEST_ROOT}/out\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "path = \"/srv/assets/out\"\n");
        std::env::remove_var("LOADER_TEST_ROOT");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("LOADER_TEST_MISSING");
        let input = "path = \"${LOADER_TEST_MISSING}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("LOADER_TEST_MISSING"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("LOADER_TEST_IN_COMMENT");
        let input = "# path = \"${LOADER_TEST_IN_COMMENT}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "# path = \"${LOADER_TEST_IN_COMMENT}\"\n");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(ExportError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[project]
path = "projects/demo.vott"

[storage]
provider_type = "localFileSystem"
path = "/data/demo"

[export]
format = "tensorFlowPascalVoc"
asset_state = "tagged"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.project.path, "projects/demo.vott");
        assert_eq!(config.storage.path, "/data/demo");
        assert_eq!(config.export.asset_state, Some(AssetStateFilter::Tagged));
    }
}
