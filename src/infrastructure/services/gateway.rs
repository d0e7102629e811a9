//! Query gateway: dispatch, batching, and runtime configuration

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{
    ErrorHandler, ExecutionEngine, QueryRequest, QueryResponse, QueryStore, Resolution, StoreError,
};
use crate::infrastructure::error_handlers::FailFastErrorHandler;
use crate::infrastructure::store::MemoryStore;

use super::resolver::QueryResolver;

/// Persisted-query gateway in front of an execution engine.
///
/// Owns one query store and one error handler, both swappable at runtime.
/// Each request resolves against a snapshot taken at entry, so a swap never
/// disturbs requests already in flight.
#[derive(Debug)]
pub struct QueryGateway {
    engine: Arc<dyn ExecutionEngine>,
    store: RwLock<Arc<dyn QueryStore>>,
    error_handler: RwLock<Arc<dyn ErrorHandler>>,
}

impl QueryGateway {
    /// Creates a gateway with the default in-memory store and fail-fast
    /// error handler
    pub fn new(engine: Arc<dyn ExecutionEngine>) -> Self {
        Self {
            engine,
            store: RwLock::new(Arc::new(MemoryStore::new())),
            error_handler: RwLock::new(Arc::new(FailFastErrorHandler::new())),
        }
    }

    /// Replaces the store at construction time
    pub fn with_store(self, store: Arc<dyn QueryStore>) -> Self {
        Self {
            store: RwLock::new(store),
            ..self
        }
    }

    /// Replaces the error handler at construction time
    pub fn with_error_handler(self, error_handler: Arc<dyn ErrorHandler>) -> Self {
        Self {
            error_handler: RwLock::new(error_handler),
            ..self
        }
    }

    /// Swaps the store; requests already in flight keep the previous one
    pub async fn set_store(&self, store: Arc<dyn QueryStore>) {
        *self.store.write().await = store;
    }

    /// Swaps the error handler; requests already in flight keep the
    /// previous one
    pub async fn set_error_handler(&self, error_handler: Arc<dyn ErrorHandler>) {
        *self.error_handler.write().await = error_handler;
    }

    /// The currently installed store
    pub async fn store(&self) -> Arc<dyn QueryStore> {
        self.store.read().await.clone()
    }

    /// The currently installed error handler
    pub async fn error_handler(&self) -> Arc<dyn ErrorHandler> {
        self.error_handler.read().await.clone()
    }

    async fn resolver(&self) -> QueryResolver {
        QueryResolver::new(self.store().await, self.error_handler().await)
    }

    /// Executes a single request.
    ///
    /// `Err` carries a store fault the error handler escalated; every other
    /// path produces a response, including the fixed `PersistedQueryNotFound`
    /// error for an unknown hash.
    pub async fn execute(&self, request: &QueryRequest) -> Result<QueryResponse, StoreError> {
        let resolver = self.resolver().await;
        self.execute_with(&resolver, request).await
    }

    async fn execute_with(
        &self,
        resolver: &QueryResolver,
        request: &QueryRequest,
    ) -> Result<QueryResponse, StoreError> {
        let resolution = resolver
            .resolve(request.persisted_hash(), request.query.as_deref())
            .await?;

        match resolution {
            Resolution::Resolved(query) => Ok(self.engine.execute(&query, &request.params).await),
            Resolution::NotFound => Ok(QueryResponse::not_found()),
            Resolution::StoreError(cause) => Ok(QueryResponse::from_error(cause.to_string())),
        }
    }

    /// Executes a batch of requests with per-item isolation.
    ///
    /// The output is index-aligned with the input. An item that fails, even
    /// through an escalating error handler, only turns its own slot into an
    /// error response. The whole batch resolves against a single
    /// store/handler snapshot.
    pub async fn execute_batch(&self, requests: &[QueryRequest]) -> Vec<QueryResponse> {
        debug!(items = requests.len(), "Executing request batch");

        let resolver = self.resolver().await;

        let items = requests.iter().map(|request| {
            let resolver = &resolver;
            async move {
                self.execute_with(resolver, request)
                    .await
                    .unwrap_or_else(|error| QueryResponse::from_error(error.to_string()))
            }
        });

        join_all(items).await
    }
}
