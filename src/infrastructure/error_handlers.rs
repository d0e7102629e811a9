//! Error handler implementations

use tracing::warn;

use crate::domain::{ErrorHandler, StoreError};

/// Default policy: every store fault escalates unchanged.
#[derive(Debug, Clone, Default)]
pub struct FailFastErrorHandler;

impl FailFastErrorHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorHandler for FailFastErrorHandler {
    fn handle(&self, error: StoreError) -> Result<(), StoreError> {
        Err(error)
    }
}

/// Log-and-continue policy: faults are logged at warn level and suppressed.
#[derive(Debug, Clone, Default)]
pub struct LoggingErrorHandler;

impl LoggingErrorHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorHandler for LoggingErrorHandler {
    fn handle(&self, error: StoreError) -> Result<(), StoreError> {
        warn!(error = %error, "Suppressed query store fault");
        Ok(())
    }
}
