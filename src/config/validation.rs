use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `suffixes` - Business suffixes stripped during normalization
/// * `log_file_path` - Optional log file path to validate
///
/// # Validation Rules
/// - Every suffix must be non-empty lowercase ASCII letters or digits, since
///   anything else can never occur at the end of a normalized name
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
///
/// The threshold is not range-checked.
pub fn validate_config(suffixes: &[String], log_file_path: &Option<String>) -> Result<(), AppError> {
    for suffix in suffixes {
        if suffix.is_empty() {
            return Err(AppError::config_error("Suffixes cannot be empty strings"));
        }
        if !suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(AppError::config_error(format!(
                "Suffix '{suffix}' must contain only lowercase ASCII letters and digits"
            )));
        }
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
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
