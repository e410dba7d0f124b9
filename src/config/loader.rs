//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{IngestConfig, LogFormat};
use crate::domain::errors::CatalogError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into IngestConfig
/// 4. Applies environment variable overrides
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use catalog_ingest::config::loader::load_config;
///
/// let config = load_config("catalog-ingest.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<IngestConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CatalogError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CatalogError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let lookup = |name: &str| std::env::var(name).ok();
    let contents = substitute_env_vars(&contents, &lookup)?;

    let mut config: IngestConfig = toml::from_str(&contents)
        .map_err(|e| CatalogError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config, &lookup);
    validate(config)
}

/// Loads configuration from a file when it exists, else from the environment
///
/// Lambda functions usually ship without a configuration file, so a missing
/// file is not an error here: defaults plus environment overrides are used.
pub fn load_config_or_env(path: impl AsRef<Path>) -> Result<IngestConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults and environment"
    );
    config_from_env(|name| std::env::var(name).ok())
}

/// Builds configuration from defaults plus variables resolved by `lookup`
pub fn config_from_env(lookup: impl Fn(&str) -> Option<String>) -> Result<IngestConfig> {
    let mut config = IngestConfig::default();
    apply_env_overrides(&mut config, &lookup);
    validate(config)
}

fn validate(config: IngestConfig) -> Result<IngestConfig> {
    config.validate().map_err(|e| {
        CatalogError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str, lookup: &dyn Fn(&str) -> Option<String>) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| CatalogError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
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
            match lookup(var_name) {
                Some(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                None => {
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
        return Err(CatalogError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides
///
/// Variables follow the pattern `CATALOG_<SECTION>_<KEY>`, for example
/// `CATALOG_DYNAMODB_PRODUCTS_TABLE`. The conventional deployment variables
/// `PRODUCTS_TABLE_NAME`, `STOCKS_TABLE_NAME`, `PRODUCT_TITLES_TABLE_NAME`,
/// `CREATE_PRODUCT_TOPIC_ARN` and `REGION` are honoured as well, with the
/// `CATALOG_*` form taking precedence.
fn apply_env_overrides(config: &mut IngestConfig, lookup: &dyn Fn(&str) -> Option<String>) {
    let var = |primary: &str, fallback: Option<&str>| {
        lookup(primary).or_else(|| fallback.and_then(|name| lookup(name)))
    };

    // Application overrides
    if let Some(val) = var("CATALOG_APPLICATION_LOG_LEVEL", None) {
        config.application.log_level = val.to_lowercase();
    }
    if let Some(val) = var("CATALOG_APPLICATION_DRY_RUN", None) {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // AWS overrides
    if let Some(val) = var("CATALOG_AWS_REGION", Some("REGION")) {
        config.aws.region = Some(val);
    }
    if let Some(val) = var("CATALOG_AWS_ENDPOINT_URL", None) {
        config.aws.endpoint_url = Some(val);
    }
    if let Some(val) = var("CATALOG_AWS_MAX_ATTEMPTS", None) {
        if let Ok(attempts) = val.parse() {
            config.aws.max_attempts = attempts;
        }
    }

    // DynamoDB overrides
    if let Some(val) = var("CATALOG_DYNAMODB_PRODUCTS_TABLE", Some("PRODUCTS_TABLE_NAME")) {
        config.dynamodb.products_table = val;
    }
    if let Some(val) = var("CATALOG_DYNAMODB_STOCKS_TABLE", Some("STOCKS_TABLE_NAME")) {
        config.dynamodb.stocks_table = val;
    }
    if let Some(val) = var(
        "CATALOG_DYNAMODB_PRODUCT_TITLES_TABLE",
        Some("PRODUCT_TITLES_TABLE_NAME"),
    ) {
        config.dynamodb.product_titles_table = val;
    }

    // Ingest overrides
    if let Some(val) = var("CATALOG_INGEST_MAX_CONCURRENCY", None) {
        if let Ok(concurrency) = val.parse() {
            config.ingest.max_concurrency = concurrency;
        }
    }

    // Notification overrides. Setting a topic ARN implies enabling
    // notifications unless explicitly disabled.
    if let Some(val) = var(
        "CATALOG_NOTIFICATIONS_TOPIC_ARN",
        Some("CREATE_PRODUCT_TOPIC_ARN"),
    ) {
        config.notifications.topic_arn = Some(val);
        config.notifications.enabled = true;
    }
    if let Some(val) = var("CATALOG_NOTIFICATIONS_ENABLED", None) {
        config.notifications.enabled = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Some(val) = var("CATALOG_LOGGING_FORMAT", None) {
        match val.to_lowercase().as_str() {
            "json" => config.logging.format = LogFormat::Json,
            "pretty" => config.logging.format = LogFormat::Pretty,
            other => tracing::warn!(format = %other, "Ignoring unknown CATALOG_LOGGING_FORMAT"),
        }
    }
}
