//! Passport Identity — the passport data model.
//!
//! A passport is a per-identity record of an issuance/expiry window plus an
//! append-only list of stamps. Each type exists in two forms: the
//! materialized shape callers work with (credential bodies embedded) and the
//! stored shape persisted in the document network (credential bodies replaced
//! by pointers to their own documents).

pub mod credential;
pub mod passport;

pub use credential::{CredentialProof, CredentialSubject, VerifiableCredential};
pub use passport::{Passport, Stamp, StoredPassport, StoredStamp};
