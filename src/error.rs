//! Error types and handling for the `TripCast` service

use thiserror::Error;

/// Main error type for the `TripCast` service
#[derive(Error, Debug)]
pub enum TripCastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// No location matched the query
    #[error("Location not found: {message}")]
    NotFound { message: String },

    /// An upstream provider failed or answered with a non-success status
    #[error("{service} service error: {message}")]
    Upstream { service: String, message: String },
}

impl TripCastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::Upstream {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripCastError::Config { .. } => {
                "Service configuration error. Please try again later.".to_string()
            }
            TripCastError::Validation { message } => message.clone(),
            TripCastError::NotFound { message } => message.clone(),
            TripCastError::Upstream { service, .. } => {
                format!("{service} service is unavailable")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripCastError::config("missing base URL");
        assert!(matches!(config_err, TripCastError::Config { .. }));

        let validation_err = TripCastError::validation("empty city");
        assert!(matches!(validation_err, TripCastError::Validation { .. }));

        let not_found_err = TripCastError::not_found("City could not be found");
        assert!(matches!(not_found_err, TripCastError::NotFound { .. }));

        let upstream_err = TripCastError::upstream("Geocoding", "connection refused");
        assert!(matches!(upstream_err, TripCastError::Upstream { .. }));
    }

    #[test]
    fn test_user_messages() {
        let not_found_err = TripCastError::not_found("Could not find Warwick in any state, US");
        assert_eq!(
            not_found_err.user_message(),
            "Could not find Warwick in any state, US"
        );

        let upstream_err = TripCastError::upstream("Weather", "timed out");
        assert_eq!(upstream_err.user_message(), "Weather service is unavailable");

        let config_err = TripCastError::config("test");
        assert!(config_err.user_message().contains("configuration error"));
    }
}
