use anyhow::{Context, Result};
use std::fmt;
use thiserror::Error;
use tracing::{error, warn};

/// Failures the customer screens know how to describe.
#[derive(Error, Debug)]
pub enum CustomerError {
    #[error("Customer request failed: {message}")]
    Transport { message: String },

    #[error("Customer response could not be decoded: {message}")]
    Decode { message: String },

    #[error("Customer cache slot {key} unavailable: {message}")]
    Storage { key: String, message: String },

    #[error("Invalid batch quantity: {quantity}")]
    InvalidQuantity { quantity: u32 },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Names an operation and the values it ran with, attached to a failure as
/// `anyhow` context so the log line says which slot or batch was involved.
pub struct ErrorContext {
    operation: &'static str,
    details: Vec<(&'static str, String)>,
}

impl ErrorContext {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            details: Vec::new(),
        }
    }

    pub fn with_detail(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.details.push((key, value.to_string()));
        self
    }

    pub fn wrap<T>(self, result: Result<T>) -> Result<T> {
        result.with_context(|| self.to_string())
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed", self.operation)?;
        for (i, (key, value)) in self.details.iter().enumerate() {
            let sep = if i == 0 { " (" } else { ", " };
            write!(f, "{sep}{key}={value}")?;
        }
        if !self.details.is_empty() {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Structured logging helpers
pub struct LogHelper;

impl LogHelper {
    pub fn log_error_with_context(context: &str, error: &anyhow::Error) {
        error!(
            context = %context,
            error = %error,
            error_chain = ?error.chain().map(|e| e.to_string()).collect::<Vec<_>>(),
            "Error occurred"
        );
    }

    pub fn log_swallowed(context: &str, error: &anyhow::Error) {
        warn!(
            context = %context,
            error = %error,
            "Failure recovered locally"
        );
    }
}

/// User-friendly error messages
pub struct UserErrorFormatter;

impl UserErrorFormatter {
    pub fn format_for_ui(error: &anyhow::Error) -> String {
        if let Some(customer_error) = error.chain().find_map(|e| e.downcast_ref::<CustomerError>()) {
            return Self::format_customer_error(customer_error);
        }

        let error_str = error.to_string().to_lowercase();

        if error_str.contains("network") || error_str.contains("connection") {
            return "Network connection error. Please check your internet connection and try again.".to_string();
        }

        if error_str.contains("timeout") {
            return "The operation timed out. Please try again.".to_string();
        }

        "An unexpected error occurred. Please try again.".to_string()
    }

    fn format_customer_error(error: &CustomerError) -> String {
        match error {
            CustomerError::Transport { .. } => {
                "Could not load customers. Check your connection and press Refresh.".to_string()
            }
            CustomerError::Decode { .. } => {
                "The customer service returned data we could not read.".to_string()
            }
            CustomerError::Storage { .. } => {
                "Changes are kept for this session but could not be saved in the browser.".to_string()
            }
            CustomerError::InvalidQuantity { quantity } => {
                format!("Cannot request {} customers", quantity)
            }
            CustomerError::Configuration { message } => {
                format!("Configuration error: {}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_formatting() {
        let error = anyhow::Error::new(CustomerError::Transport {
            message: "dns failure".to_string(),
        });

        let formatted = UserErrorFormatter::format_for_ui(&error);
        assert!(formatted.contains("Could not load customers"));
    }

    #[test]
    fn test_formatting_finds_wrapped_error() {
        let error = anyhow::Error::new(CustomerError::Decode {
            message: "missing field `data`".to_string(),
        })
        .context("fetch customers");

        let formatted = UserErrorFormatter::format_for_ui(&error);
        assert!(formatted.contains("could not read"));
    }

    #[test]
    fn test_error_context_names_operation_and_values() {
        let result: Result<()> = Err(CustomerError::Storage {
            key: "customers".to_string(),
            message: "quota exceeded".to_string(),
        }
        .into());

        let wrapped = ErrorContext::new("persist customers")
            .with_detail("key", "customers")
            .with_detail("count", 50)
            .wrap(result)
            .unwrap_err();

        assert_eq!(wrapped.to_string(), "persist customers failed (key=customers, count=50)");
        // the typed cause is still reachable for the UI message
        assert!(UserErrorFormatter::format_for_ui(&wrapped).contains("could not be saved"));
    }
}
