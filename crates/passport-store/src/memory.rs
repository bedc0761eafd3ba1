use std::sync::RwLock;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use uuid::Uuid;

use passport_core::Did;

use crate::datastore::DocumentStore;
use crate::error::StoreError;

/// In-process document network used by tests and local development.
///
/// Records are scoped by the bound identity, mirroring how the real network
/// scopes named records by the authenticated DID. Every `set` mints a fresh
/// document and repoints the slot at it, so repeated creates on one slot
/// leave independent documents behind with the slot holding the latest —
/// last write wins. `merge` updates the current document in place and keeps
/// its pointer.
pub struct MemoryDocumentStore {
    /// Lowercased root DID of the bound identity.
    identity: RwLock<Option<String>>,
    /// Identity-scoped slot key → pointer of the current record.
    records: DashMap<String, String>,
    /// Pointer → document body (records and immutable documents alike).
    documents: DashMap<String, Value>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            identity: RwLock::new(None),
            records: DashMap::new(),
            documents: DashMap::new(),
        }
    }

    fn slot_key(&self, slot: &str) -> Result<String, StoreError> {
        let guard = self.identity.read().expect("identity lock poisoned");
        match guard.as_deref() {
            Some(did) => Ok(format!("{}/{}", did, slot)),
            None => Err(StoreError::Unbound),
        }
    }

    fn mint_pointer(kind: &str) -> String {
        format!("mem://{}/{}", kind, Uuid::now_v7())
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn bind(&self, did: &Did) -> Result<(), StoreError> {
        let mut guard = self.identity.write().expect("identity lock poisoned");
        *guard = Some(did.root().to_lowercase());
        Ok(())
    }

    async fn get(&self, slot: &str) -> Result<Option<Value>, StoreError> {
        let key = self.slot_key(slot)?;
        match self.records.get(&key) {
            Some(pointer) => Ok(self
                .documents
                .get(pointer.value())
                .map(|doc| doc.value().clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, slot: &str, record: Value) -> Result<String, StoreError> {
        let key = self.slot_key(slot)?;
        let pointer = Self::mint_pointer("record");
        self.documents.insert(pointer.clone(), record);
        self.records.insert(key, pointer.clone());
        Ok(pointer)
    }

    async fn merge(&self, slot: &str, partial: Value) -> Result<String, StoreError> {
        let key = self.slot_key(slot)?;
        let pointer = self
            .records
            .get(&key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::RecordNotFound(slot.to_string()))?;
        let mut entry = self
            .documents
            .get_mut(&pointer)
            .ok_or_else(|| StoreError::DocumentNotFound(pointer.clone()))?;
        match (entry.value_mut(), partial) {
            (Value::Object(current), Value::Object(fields)) => {
                for (name, value) in fields {
                    current.insert(name, value);
                }
            }
            (current, other) => *current = other,
        }
        Ok(pointer)
    }

    async fn remove(&self, slot: &str) -> Result<(), StoreError> {
        let key = self.slot_key(slot)?;
        self.records.remove(&key);
        Ok(())
    }

    async fn create_document(&self, kind: &str, body: Value) -> Result<String, StoreError> {
        let pointer = Self::mint_pointer(kind);
        self.documents.insert(pointer.clone(), body);
        Ok(pointer)
    }

    async fn load_document(&self, pointer: &str) -> Result<Value, StoreError> {
        // Documents are content-addressed; loads need no bound identity.
        self.documents
            .get(pointer)
            .map(|doc| doc.value().clone())
            .ok_or_else(|| StoreError::DocumentNotFound(pointer.to_string()))
    }
}
