//! Error formatting utilities
//!
//! Renders errors with their nested causes for terminal output and as
//! structured values for logs.

use crate::Error;
use std::error::Error as StdError;

/// Format error for display, appending nested causes
pub fn format_error(error: &Error) -> String {
    let formatted = match error {
        Error::Status { status, body } if body.trim().is_empty() => {
            format!("Server returned status {}", status)
        }

        Error::InvalidValue {
            field,
            value,
            message,
        } => format!(
            "Invalid value for {} (value: '{}'): {}",
            field,
            value.escape_debug(),
            message
        ),

        // For everything else the Display implementation is enough
        _ => error.to_string(),
    };

    let mut result = formatted;
    let mut source = error.source();

    while let Some(cause) = source {
        if !result.contains(&cause.to_string()) {
            result = format!("{} (caused by {})", result, cause);
        }
        source = cause.source();
    }

    result
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": format_error(error),
        "category": error.category(),
        "retryable": error.is_retryable(),
    });

    match error {
        Error::Status { status, .. } => {
            log_data["status"] = serde_json::Value::Number((*status).into());
        }
        Error::Parse { fragment, .. } => {
            log_data["fragment"] = serde_json::Value::String(fragment.clone());
        }
        Error::MissingField { field }
        | Error::DuplicateField { field }
        | Error::InvalidValue { field, .. }
        | Error::Config { field, .. } => {
            log_data["field"] = serde_json::Value::String(field.clone());
        }
        _ => {}
    }

    log_data
}
