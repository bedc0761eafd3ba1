use std::sync::Arc;

use chrono::Utc;
use futures::future;
use serde_json::json;

use passport_core::{Did, StoreConfig};
use passport_identity::{Passport, Stamp, StoredPassport, StoredStamp};

use crate::datastore::DocumentStore;
use crate::error::PassportError;

/// Document kind under which stamp credential bodies are stored.
const CREDENTIAL_KIND: &str = "VerifiableCredential";

/// Per-identity passport access over an injected document-network client.
///
/// Bound at construction to one owner identity and one client; the bindings
/// are immutable afterwards. Public operations never surface typed errors:
/// every failure is logged and degrades to absence or a no-op. The internal
/// `try_*` channel carries the real causes for logging and tests.
pub struct PassportStore {
    /// Lowercased root identity; authorization check only, never a key.
    owner: String,
    slot: String,
    store: Arc<dyn DocumentStore>,
}

impl PassportStore {
    /// Create a store bound to `did`, with the default configuration.
    pub fn new(did: &Did, store: Arc<dyn DocumentStore>) -> Self {
        Self::with_config(did, store, StoreConfig::default())
    }

    /// Create a store bound to `did` with an explicit configuration.
    ///
    /// Eagerly binds the identity to the client. A binding failure is logged
    /// rather than returned; it resurfaces when the first operation fails.
    pub fn with_config(did: &Did, store: Arc<dyn DocumentStore>, config: StoreConfig) -> Self {
        // Ownership checks run against the root identity even when the
        // acting identity is a delegated child credential.
        let owner = did.root().to_lowercase();
        if let Err(e) = store.bind(did) {
            tracing::error!(owner = %owner, error = %e, "failed to bind identity to document client");
        }
        Self {
            owner,
            slot: config.slot,
            store,
        }
    }

    /// The lowercased root identity this store accepts stamps for.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Write a fresh passport with no stamps into the owner's slot,
    /// overwriting any existing record. Returns a pointer to the new record,
    /// or `None` when the write fails (logged).
    ///
    /// Issuance and expiry are both set to the creation time; callers
    /// reconcile the expiry window afterwards.
    pub async fn create_passport(&self) -> Option<String> {
        match self.try_create_passport().await {
            Ok(pointer) => {
                tracing::debug!(slot = %self.slot, pointer = %pointer, "passport created");
                Some(pointer)
            }
            Err(e) => {
                tracing::error!(slot = %self.slot, error = %e, "failed to create passport");
                None
            }
        }
    }

    async fn try_create_passport(&self) -> Result<String, PassportError> {
        let record = StoredPassport::empty(Utc::now());
        let value = serde_json::to_value(&record)?;
        let pointer = self.store.set(&self.slot, value).await?;
        Ok(pointer)
    }

    /// Read and materialize the owner's passport.
    ///
    /// Resolves every stamp's credential pointer into its full body; the
    /// resolutions run concurrently and the results keep stamp order (by
    /// index, not completion time). Returns `None` when no record exists —
    /// and also when the read or any resolution fails (logged). Callers
    /// cannot distinguish the two.
    pub async fn get_passport(&self) -> Option<Passport> {
        match self.try_get_passport().await {
            Ok(passport) => passport,
            Err(e) => {
                tracing::error!(slot = %self.slot, error = %e, "failed to read passport");
                None
            }
        }
    }

    async fn try_get_passport(&self) -> Result<Option<Passport>, PassportError> {
        let Some(value) = self.store.get(&self.slot).await? else {
            return Ok(None);
        };
        let stored: StoredPassport = serde_json::from_value(value)?;

        let resolutions = stored.stamps.iter().map(|stamp| self.resolve_stamp(stamp));
        let stamps = future::try_join_all(resolutions).await?;

        Ok(Some(Passport {
            issuance_date: stored.issuance_date,
            expiry_date: stored.expiry_date,
            stamps,
        }))
    }

    async fn resolve_stamp(&self, stored: &StoredStamp) -> Result<Stamp, PassportError> {
        let body = self.store.load_document(&stored.credential).await?;
        let credential = serde_json::from_value(body)?;
        Ok(Stamp {
            provider: stored.provider.clone(),
            credential,
        })
    }

    /// Append a stamp to the owner's passport.
    ///
    /// A silent no-op when no passport exists or when the credential's
    /// subject is not the owner (case-insensitive) — never attach a
    /// credential that speaks about a different subject. The append is
    /// read-append-merge, not atomic: two concurrent appenders can read the
    /// same list and the later merge wins, losing the earlier stamp. That
    /// window is inherited from the store's merge primitive.
    pub async fn add_stamp(&self, stamp: Stamp) {
        match self.try_add_stamp(&stamp).await {
            Ok(AddStampOutcome::Added) => {
                tracing::debug!(slot = %self.slot, provider = %stamp.provider, "stamp added");
            }
            Ok(outcome) => {
                tracing::debug!(
                    slot = %self.slot,
                    provider = %stamp.provider,
                    ?outcome,
                    "stamp skipped"
                );
            }
            Err(e) => {
                tracing::error!(
                    slot = %self.slot,
                    provider = %stamp.provider,
                    error = %e,
                    "failed to add stamp"
                );
            }
        }
    }

    pub(crate) async fn try_add_stamp(
        &self,
        stamp: &Stamp,
    ) -> Result<AddStampOutcome, PassportError> {
        let Some(value) = self.store.get(&self.slot).await? else {
            return Ok(AddStampOutcome::MissingPassport);
        };
        let stored: StoredPassport = serde_json::from_value(value)?;

        if stamp.credential.subject_id().to_lowercase() != self.owner {
            return Ok(AddStampOutcome::SubjectMismatch);
        }

        let body = serde_json::to_value(&stamp.credential)?;
        let pointer = self.store.create_document(CREDENTIAL_KIND, body).await?;

        let mut stamps = stored.stamps;
        stamps.push(StoredStamp {
            provider: stamp.provider.clone(),
            credential: pointer,
        });

        // Merge only the stamps field so unrelated fields survive.
        self.store.merge(&self.slot, json!({ "stamps": stamps })).await?;
        Ok(AddStampOutcome::Added)
    }

    /// Remove the passport record entirely. A development/test affordance:
    /// no existence check, no confirmation, failures logged and swallowed.
    pub async fn delete_passport(&self) {
        if let Err(e) = self.store.remove(&self.slot).await {
            tracing::error!(slot = %self.slot, error = %e, "failed to delete passport");
        }
    }
}

/// Result of an append attempt. Internal so the guard causes stay testable
/// while callers only ever observe the silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddStampOutcome {
    Added,
    MissingPassport,
    SubjectMismatch,
}
