//! Persisted query resolution

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{ErrorHandler, QueryStore, Resolution, StoreError, sha256_hex};

/// Resolves one request item's hash/text pair into an effective document.
///
/// Holds a fixed store/handler pair; the gateway builds a fresh resolver
/// per request from its current configuration, so runtime swaps never
/// affect work already in flight.
#[derive(Debug, Clone)]
pub struct QueryResolver {
    store: Arc<dyn QueryStore>,
    error_handler: Arc<dyn ErrorHandler>,
}

impl QueryResolver {
    pub fn new(store: Arc<dyn QueryStore>, error_handler: Arc<dyn ErrorHandler>) -> Self {
        Self {
            store,
            error_handler,
        }
    }

    /// Resolves the effective document for one request item.
    ///
    /// `Err` means a store fault escalated through the error handler and
    /// the enclosing request fails with it. Every other path produces an
    /// outcome.
    pub async fn resolve(
        &self,
        hash: Option<&str>,
        query: Option<&str>,
    ) -> Result<Resolution, StoreError> {
        match (query, hash) {
            (Some(query), hash) => self.register(hash, query).await,
            (None, Some(hash)) => self.lookup(hash).await,
            (None, None) => {
                debug!("Request carried neither document nor hash");
                Ok(Resolution::NotFound)
            }
        }
    }

    /// Text-provided path: persist under the client hash, or the content
    /// digest when the client did not pin one. Execution proceeds with the
    /// literal text even when a suppressed save failed.
    async fn register(&self, hash: Option<&str>, query: &str) -> Result<Resolution, StoreError> {
        let key = match hash {
            Some(hash) => hash.to_string(),
            None => sha256_hex(query),
        };

        match self.store.save_query(&key, query).await {
            Ok(()) => debug!(hash = %key, "Persisted query document"),
            Err(error) => {
                let cause = self.route(error)?;
                warn!(hash = %key, error = %cause, "Proceeding without persisting document");
            }
        }

        Ok(Resolution::Resolved(query.to_string()))
    }

    /// Hash-only path: a miss is clean, a fault consults the handler.
    async fn lookup(&self, hash: &str) -> Result<Resolution, StoreError> {
        match self.store.fetch_query(hash).await {
            Ok(Some(query)) => {
                debug!(hash = %hash, "Resolved persisted query");
                Ok(Resolution::Resolved(query))
            }
            Ok(None) => {
                debug!(hash = %hash, "Unknown persisted query hash");
                Ok(Resolution::NotFound)
            }
            Err(error) => {
                let cause = self.route(error)?;
                Ok(Resolution::StoreError(cause))
            }
        }
    }

    /// Runs a fault through the handler. Escalation propagates whatever
    /// the handler returned; suppression hands back the original fault.
    fn route(&self, error: StoreError) -> Result<StoreError, StoreError> {
        let cause = error.clone();
        self.error_handler.handle(error)?;
        Ok(cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockQueryStore, RecordingErrorHandler};
    use crate::infrastructure::error_handlers::FailFastErrorHandler;

    fn resolver_with(
        store: Arc<MockQueryStore>,
        handler: Arc<RecordingErrorHandler>,
    ) -> QueryResolver {
        QueryResolver::new(store, handler)
    }

    #[tokio::test]
    async fn test_neither_document_nor_hash() {
        let resolver = QueryResolver::new(
            Arc::new(MockQueryStore::new()),
            Arc::new(FailFastErrorHandler::new()),
        );

        let resolution = resolver.resolve(None, None).await.unwrap();
        assert_eq!(resolution, Resolution::NotFound);
    }

    #[tokio::test]
    async fn test_register_keys_by_content_digest() {
        let store = Arc::new(MockQueryStore::new());
        let resolver =
            QueryResolver::new(store.clone(), Arc::new(FailFastErrorHandler::new()));

        let resolution = resolver
            .resolve(None, Some("query { someData }"))
            .await
            .unwrap();

        assert_eq!(
            resolution,
            Resolution::Resolved("query { someData }".to_string())
        );
        assert_eq!(
            store.entry("3a7408a3748c777e77a3bece877a26d26a9ebcd07c20023fb005be4430152857"),
            Some("query { someData }".to_string())
        );
    }

    #[tokio::test]
    async fn test_register_prefers_client_hash() {
        let store = Arc::new(MockQueryStore::new());
        let resolver =
            QueryResolver::new(store.clone(), Arc::new(FailFastErrorHandler::new()));

        let resolution = resolver
            .resolve(Some("client-key-1"), Some("{ hello }"))
            .await
            .unwrap();

        assert_eq!(resolution, Resolution::Resolved("{ hello }".to_string()));
        assert_eq!(store.entry("client-key-1"), Some("{ hello }".to_string()));
        assert_eq!(
            store.entry("001c3174e099bd72b729d0c0a529ba9f5a740c446e2a6e1d71b283cb84ec3065"),
            None
        );
    }

    #[tokio::test]
    async fn test_lookup_hit() {
        let store = Arc::new(MockQueryStore::new().with_entry("hash1", "{ hello }"));
        let resolver = QueryResolver::new(store, Arc::new(FailFastErrorHandler::new()));

        let resolution = resolver.resolve(Some("hash1"), None).await.unwrap();
        assert_eq!(resolution, Resolution::Resolved("{ hello }".to_string()));
    }

    #[tokio::test]
    async fn test_lookup_miss() {
        let resolver = QueryResolver::new(
            Arc::new(MockQueryStore::new()),
            Arc::new(FailFastErrorHandler::new()),
        );

        let resolution = resolver.resolve(Some("unknown"), None).await.unwrap();
        assert_eq!(resolution, Resolution::NotFound);
    }

    #[tokio::test]
    async fn test_register_fault_escalates() {
        let store = Arc::new(MockQueryStore::new().with_error("backend down"));
        let handler = Arc::new(RecordingErrorHandler::escalating());
        let resolver = resolver_with(store, handler.clone());

        let result = resolver.resolve(None, Some("{ hello }")).await;

        assert_eq!(result, Err(StoreError::new("backend down")));
        assert_eq!(handler.observed(), vec![StoreError::new("backend down")]);
    }

    #[tokio::test]
    async fn test_register_fault_suppressed_proceeds_with_text() {
        let store = Arc::new(MockQueryStore::new().with_error("backend down"));
        let handler = Arc::new(RecordingErrorHandler::suppressing());
        let resolver = resolver_with(store, handler.clone());

        let resolution = resolver.resolve(None, Some("{ hello }")).await.unwrap();

        assert_eq!(resolution, Resolution::Resolved("{ hello }".to_string()));
        assert_eq!(handler.observed(), vec![StoreError::new("backend down")]);
    }

    #[tokio::test]
    async fn test_lookup_fault_escalates() {
        let store = Arc::new(MockQueryStore::new().with_error("backend down"));
        let handler = Arc::new(RecordingErrorHandler::escalating());
        let resolver = resolver_with(store, handler.clone());

        let result = resolver.resolve(Some("hash1"), None).await;

        assert_eq!(result, Err(StoreError::new("backend down")));
        assert_eq!(handler.observed(), vec![StoreError::new("backend down")]);
    }

    #[tokio::test]
    async fn test_lookup_fault_suppressed_becomes_soft_outcome() {
        let store = Arc::new(MockQueryStore::new().with_error("backend down"));
        let handler = Arc::new(RecordingErrorHandler::suppressing());
        let resolver = resolver_with(store, handler.clone());

        let resolution = resolver.resolve(Some("hash1"), None).await.unwrap();

        assert_eq!(
            resolution,
            Resolution::StoreError(StoreError::new("backend down"))
        );
    }

    #[tokio::test]
    async fn test_empty_document_counts_as_present() {
        let store = Arc::new(MockQueryStore::new());
        let resolver =
            QueryResolver::new(store.clone(), Arc::new(FailFastErrorHandler::new()));

        let resolution = resolver.resolve(None, Some("")).await.unwrap();

        assert_eq!(resolution, Resolution::Resolved(String::new()));
        assert_eq!(
            store.entry("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
            Some(String::new())
        );
    }
}
