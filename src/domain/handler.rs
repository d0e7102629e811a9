//! Error handler trait definition

use std::fmt::Debug;

use crate::domain::StoreError;

/// Policy hook consulted whenever the query store faults.
///
/// Returning `Err` escalates: the enclosing request fails with the returned
/// error. Returning `Ok(())` suppresses: the resolver degrades that item
/// instead of aborting. Handlers receive the fault by value and may return
/// it unchanged, a transformed error, or nothing at all.
pub trait ErrorHandler: Send + Sync + Debug {
    /// Decides the fate of a store fault
    fn handle(&self, error: StoreError) -> Result<(), StoreError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Handler that records every fault it sees, for testing
    #[derive(Debug)]
    pub struct RecordingErrorHandler {
        observed: Mutex<Vec<StoreError>>,
        suppress: bool,
    }

    impl RecordingErrorHandler {
        /// Records and re-raises, like the default policy
        pub fn escalating() -> Self {
            Self {
                observed: Mutex::new(Vec::new()),
                suppress: false,
            }
        }

        /// Records and swallows every fault
        pub fn suppressing() -> Self {
            Self {
                observed: Mutex::new(Vec::new()),
                suppress: true,
            }
        }

        /// Faults seen so far, in arrival order
        pub fn observed(&self) -> Vec<StoreError> {
            self.observed.lock().unwrap().clone()
        }
    }

    impl ErrorHandler for RecordingErrorHandler {
        fn handle(&self, error: StoreError) -> Result<(), StoreError> {
            self.observed.lock().unwrap().push(error.clone());

            if self.suppress { Ok(()) } else { Err(error) }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_escalating_returns_original_fault() {
            let handler = RecordingErrorHandler::escalating();
            let fault = StoreError::new("backend down");

            let result = handler.handle(fault.clone());
            assert_eq!(result, Err(fault.clone()));
            assert_eq!(handler.observed(), vec![fault]);
        }

        #[test]
        fn test_suppressing_swallows_fault() {
            let handler = RecordingErrorHandler::suppressing();
            let fault = StoreError::new("backend down");

            assert_eq!(handler.handle(fault.clone()), Ok(()));
            assert_eq!(handler.observed(), vec![fault]);
        }
    }
}
