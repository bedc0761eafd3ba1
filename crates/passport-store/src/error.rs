/// Errors surfaced by document-network clients.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no authenticated identity is bound to the client")]
    Unbound,

    #[error("no record in slot: {0}")]
    RecordNotFound(String),

    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("network error: {0}")]
    Network(String),
}

/// Internal error channel for passport operations.
///
/// Never crosses the public API: [`crate::PassportStore`] catches these at
/// the boundary, logs the cause, and degrades to absence or a no-op.
#[derive(Debug, thiserror::Error)]
pub enum PassportError {
    #[error("document store error: {0}")]
    Store(#[from] StoreError),

    #[error("malformed record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}
