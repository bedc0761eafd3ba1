use serde::{Deserialize, Serialize};

/// Default document-network endpoint (test network).
pub const DEFAULT_TESTNET_ENDPOINT: &str = "https://testnet.documents.passport-protocol.org";

/// Name of the slot that holds a holder's passport record.
pub const DEFAULT_PASSPORT_SLOT: &str = "Passport";

/// Configuration for a passport store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Document-network endpoint the client connects to.
    pub endpoint: String,
    /// Named slot holding the passport record, one per identity.
    pub slot: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TESTNET_ENDPOINT.into(),
            slot: DEFAULT_PASSPORT_SLOT.into(),
            log_level: "info".into(),
        }
    }
}
