use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A W3C-style verifiable credential as issued by a provider.
///
/// The envelope is typed only as far as this system reads it; provider
/// claims and proof metadata round-trip untouched through the flattened
/// maps. The single field this system ever enforces is
/// `credential_subject.id` — signature verification belongs to a separate
/// verifier and never happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiableCredential {
    /// JSON-LD context(s).
    #[serde(rename = "@context", default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<serde_json::Value>,
    /// Type(s) of the credential (e.g., ["VerifiableCredential"]).
    #[serde(rename = "type", default, skip_serializing_if = "Vec::is_empty")]
    pub credential_type: Vec<String>,
    /// DID of the issuer.
    pub issuer: String,
    /// When the credential was issued.
    pub issuance_date: DateTime<Utc>,
    /// Optional expiration date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    /// The subject the claims are about.
    pub credential_subject: CredentialSubject,
    /// Issuer proof metadata, carried opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<CredentialProof>,
}

/// Subject section of a credential: a typed DID plus arbitrary claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialSubject {
    /// DID of the subject. Must match the passport owner for a stamp to land.
    pub id: String,
    /// Provider-specific claims, carried opaquely.
    #[serde(flatten)]
    pub claims: serde_json::Map<String, serde_json::Value>,
}

/// Proof attached to a credential. Only the type is addressed; the remaining
/// fields (proofPurpose, verificationMethod, jws, ...) stay opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialProof {
    /// Proof type (e.g., "Ed25519Signature2018").
    #[serde(rename = "type")]
    pub proof_type: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl VerifiableCredential {
    /// Create a minimal unsigned credential about `subject`.
    pub fn new(issuer: String, subject: String) -> Self {
        Self {
            context: vec![serde_json::json!(
                "https://www.w3.org/2018/credentials/v1"
            )],
            credential_type: vec!["VerifiableCredential".to_string()],
            issuer,
            issuance_date: Utc::now(),
            expiration_date: None,
            credential_subject: CredentialSubject {
                id: subject,
                claims: serde_json::Map::new(),
            },
            proof: None,
        }
    }

    /// Attach a subject claim.
    pub fn with_claim(mut self, name: &str, value: serde_json::Value) -> Self {
        self.credential_subject.claims.insert(name.to_string(), value);
        self
    }

    /// Set the expiration date.
    pub fn with_expiration(mut self, expiration: DateTime<Utc>) -> Self {
        self.expiration_date = Some(expiration);
        self
    }

    /// DID of the credential subject.
    pub fn subject_id(&self) -> &str {
        &self.credential_subject.id
    }

    /// Check if the credential has expired.
    pub fn is_expired(&self) -> bool {
        self.expiration_date
            .map(|exp| Utc::now() > exp)
            .unwrap_or(false)
    }
}
