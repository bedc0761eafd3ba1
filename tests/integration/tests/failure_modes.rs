//! Integration test: the degraded-failure contract. Every lower-level
//! failure surfaces to callers as absence or a silent no-op, never as an
//! error.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use passport_core::Did;
use passport_store::{DocumentStore, MemoryDocumentStore, PassportStore, StoreError};

use passport_integration_tests::{holder, stamp_for, HOLDER};

/// Client double that accepts the identity binding but fails every
/// subsequent operation at the network layer.
struct UnreachableNetwork;

#[async_trait]
impl DocumentStore for UnreachableNetwork {
    fn bind(&self, _did: &Did) -> Result<(), StoreError> {
        Ok(())
    }
    async fn get(&self, _slot: &str) -> Result<Option<Value>, StoreError> {
        Err(StoreError::Network("gateway timeout".into()))
    }
    async fn set(&self, _slot: &str, _record: Value) -> Result<String, StoreError> {
        Err(StoreError::Network("gateway timeout".into()))
    }
    async fn merge(&self, _slot: &str, _partial: Value) -> Result<String, StoreError> {
        Err(StoreError::Network("gateway timeout".into()))
    }
    async fn remove(&self, _slot: &str) -> Result<(), StoreError> {
        Err(StoreError::Network("gateway timeout".into()))
    }
    async fn create_document(&self, _kind: &str, _body: Value) -> Result<String, StoreError> {
        Err(StoreError::Network("gateway timeout".into()))
    }
    async fn load_document(&self, _pointer: &str) -> Result<Value, StoreError> {
        Err(StoreError::Network("gateway timeout".into()))
    }
}

/// Client double whose identity binding itself fails.
struct RejectingNetwork;

#[async_trait]
impl DocumentStore for RejectingNetwork {
    fn bind(&self, _did: &Did) -> Result<(), StoreError> {
        Err(StoreError::Network("authentication rejected".into()))
    }
    async fn get(&self, _slot: &str) -> Result<Option<Value>, StoreError> {
        Err(StoreError::Unbound)
    }
    async fn set(&self, _slot: &str, _record: Value) -> Result<String, StoreError> {
        Err(StoreError::Unbound)
    }
    async fn merge(&self, _slot: &str, _partial: Value) -> Result<String, StoreError> {
        Err(StoreError::Unbound)
    }
    async fn remove(&self, _slot: &str) -> Result<(), StoreError> {
        Err(StoreError::Unbound)
    }
    async fn create_document(&self, _kind: &str, _body: Value) -> Result<String, StoreError> {
        Err(StoreError::Unbound)
    }
    async fn load_document(&self, _pointer: &str) -> Result<Value, StoreError> {
        Err(StoreError::Unbound)
    }
}

#[tokio::test]
async fn test_network_failure_reads_as_absence() {
    let store = PassportStore::new(&holder(), Arc::new(UnreachableNetwork));

    assert!(store.create_passport().await.is_none());
    assert!(store.get_passport().await.is_none());
}

#[tokio::test]
async fn test_network_failure_writes_are_noops() {
    let store = PassportStore::new(&holder(), Arc::new(UnreachableNetwork));

    // Neither call panics or surfaces an error.
    store.add_stamp(stamp_for(HOLDER, "Google")).await;
    store.delete_passport().await;
}

#[tokio::test]
async fn test_bind_failure_is_deferred_to_operations() {
    // Construction succeeds even though the binding is rejected.
    let store = PassportStore::new(&holder(), Arc::new(RejectingNetwork));

    assert!(store.get_passport().await.is_none());
    assert!(store.create_passport().await.is_none());
}

#[tokio::test]
async fn test_foreign_subject_stamp_never_lands() {
    let client = Arc::new(MemoryDocumentStore::new());
    let store = PassportStore::new(&holder(), client.clone());
    store.create_passport().await.unwrap();

    store
        .add_stamp(stamp_for("did:pkh:eip155:1:0xSomeoneElse", "Google"))
        .await;

    let passport = store.get_passport().await.unwrap();
    assert!(passport.stamps.is_empty());

    // Nothing landed in the raw record either.
    let raw = client.get("Passport").await.unwrap().unwrap();
    assert_eq!(raw["stamps"], json!([]));
}

#[tokio::test]
async fn test_stamp_before_creation_never_lands() {
    let client = Arc::new(MemoryDocumentStore::new());
    let store = PassportStore::new(&holder(), client.clone());

    store.add_stamp(stamp_for(HOLDER, "Google")).await;

    assert!(store.get_passport().await.is_none());
    assert!(client.get("Passport").await.unwrap().is_none());
}

#[tokio::test]
async fn test_dangling_stamp_pointer_reads_as_absence() {
    let client = Arc::new(MemoryDocumentStore::new());
    let store = PassportStore::new(&holder(), client.clone());
    store.create_passport().await.unwrap();

    client
        .merge(
            "Passport",
            json!({"stamps": [{"provider": "Google", "credential": "mem://record/gone"}]}),
        )
        .await
        .unwrap();

    // A present-but-unreadable passport is indistinguishable from absence.
    assert!(store.get_passport().await.is_none());
}
