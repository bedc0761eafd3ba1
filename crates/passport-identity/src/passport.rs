use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::credential::VerifiableCredential;

/// A provider-named proof backed by a full verifiable credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stamp {
    /// Identity provider that issued the backing credential (e.g., "Google").
    pub provider: String,
    /// The embedded credential body.
    pub credential: VerifiableCredential,
}

/// A stamp as persisted: the credential body lives in its own document and is
/// referenced here by pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredStamp {
    /// Identity provider that issued the backing credential.
    pub provider: String,
    /// Opaque pointer (URL) to the stored credential document.
    pub credential: String,
}

/// The materialized per-identity passport record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passport {
    pub issuance_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    /// Append-only history of proofs; order is insertion order.
    pub stamps: Vec<Stamp>,
}

/// The persisted form of a passport. Stamps hold pointers, never bodies:
/// credentials can be large and independently addressable, and keeping them
/// out-of-line bounds the record size and lets them load in parallel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPassport {
    pub issuance_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub stamps: Vec<StoredStamp>,
}

impl StoredPassport {
    /// A new empty passport whose issuance and expiry both equal `now`.
    ///
    /// Expiry equalling issuance at creation is the documented contract;
    /// callers reconcile the window afterwards.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            issuance_date: now,
            expiry_date: now,
            stamps: Vec::new(),
        }
    }
}
