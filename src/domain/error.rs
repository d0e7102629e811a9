use thiserror::Error;

/// Backend fault raised by a query store.
///
/// Carries the failure message of the underlying backend. Cloneable and
/// comparable so a suppressed fault can travel through a resolution outcome
/// and error handlers can be checked against the fault they were given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Query store error: {message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Gateway level errors
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl GatewayError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let error = StoreError::new("connection refused");
        assert_eq!(error.to_string(), "Query store error: connection refused");
        assert_eq!(error.message(), "connection refused");
    }

    #[test]
    fn test_store_error_equality() {
        let original = StoreError::new("timed out");
        let copy = original.clone();
        assert_eq!(original, copy);
        assert_ne!(original, StoreError::new("something else"));
    }

    #[test]
    fn test_configuration_error() {
        let error = GatewayError::configuration("unknown store type");
        assert_eq!(error.to_string(), "Configuration error: unknown store type");
    }

    #[test]
    fn test_store_error_converts_to_gateway_error() {
        let error: GatewayError = StoreError::new("connection refused").into();
        assert_eq!(error.to_string(), "Query store error: connection refused");
    }
}
