use async_trait::async_trait;
use serde_json::Value;

use passport_core::Did;

use crate::error::StoreError;

/// Client contract for the decentralized document network.
///
/// The network offers one mutable named record per slot per authenticated
/// identity, plus content-addressed immutable documents. Pointers are opaque
/// URL strings understood only by the client. Timeouts and cancellation are
/// the client's concern, not the caller's. Concurrent writers to one slot
/// resolve last-write-wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Bind the authenticated identity whose records the named slots address.
    fn bind(&self, did: &Did) -> Result<(), StoreError>;

    /// Read the record in a named slot, if any.
    async fn get(&self, slot: &str) -> Result<Option<Value>, StoreError>;

    /// Overwrite the record in a named slot. Returns a pointer to the
    /// written record.
    async fn set(&self, slot: &str, record: Value) -> Result<String, StoreError>;

    /// Shallow partial-field update of an existing record. Fails with
    /// [`StoreError::RecordNotFound`] when the slot is empty.
    async fn merge(&self, slot: &str, partial: Value) -> Result<String, StoreError>;

    /// Drop the record in a named slot.
    async fn remove(&self, slot: &str) -> Result<(), StoreError>;

    /// Store an immutable document of the given kind. Returns its pointer.
    async fn create_document(&self, kind: &str, body: Value) -> Result<String, StoreError>;

    /// Load an immutable document's body by pointer.
    async fn load_document(&self, pointer: &str) -> Result<Value, StoreError>;
}
