use crate::error::AppError;
use std::path::Path;

/// Checks that a value looks like a URL or a bare domain name.
fn validate_domain(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{field} cannot be empty")));
    }

    if !value.starts_with("http://")
        && !value.starts_with("https://")
        && !value.contains('.')
        && !value.starts_with("localhost")
    {
        return Err(AppError::config_error(format!(
            "{field} must be a valid URL or domain name"
        )));
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - API endpoint and site domain cannot be empty and must look like URLs or domain names
/// - API token cannot be empty
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_endpoint: &str,
    api_token: &str,
    site_domain: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_domain("API endpoint", api_endpoint)?;
    validate_domain("Site domain", site_domain)?;

    if api_token.trim().is_empty() {
        return Err(AppError::config_error("API token cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
