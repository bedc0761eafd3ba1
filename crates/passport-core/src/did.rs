use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Decentralized identifier of a passport holder.
///
/// The URI is opaque beyond its `did:` scheme; resolution and authentication
/// live in the document-network client, not here. A DID may carry a parent
/// URI when the acting identity is a delegated child credential of a root
/// identity — ownership checks always go through [`Did::root`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Did {
    uri: String,
    parent: Option<String>,
}

impl Did {
    /// Create a DID from a full URI string.
    pub fn new(uri: impl Into<String>) -> Result<Self, CoreError> {
        let uri = uri.into();
        if !uri.starts_with("did:") {
            return Err(CoreError::InvalidDid(format!(
                "DID must start with 'did:', got: {}",
                uri
            )));
        }
        Ok(Self { uri, parent: None })
    }

    /// Create a delegated DID whose root identity is `parent`.
    pub fn with_parent(
        uri: impl Into<String>,
        parent: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let parent = parent.into();
        if !parent.starts_with("did:") {
            return Err(CoreError::InvalidDid(format!(
                "parent DID must start with 'did:', got: {}",
                parent
            )));
        }
        let mut did = Self::new(uri)?;
        did.parent = Some(parent);
        Ok(did)
    }

    /// Get the full DID URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The parent URI, when this is a delegated child identity.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Whether this DID is a delegated child of another identity.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// The root identity: the parent when delegated, the DID itself otherwise.
    pub fn root(&self) -> &str {
        self.parent.as_deref().unwrap_or(&self.uri)
    }

    /// Extract the DID method (pkh, key, ...).
    pub fn method(&self) -> Option<&str> {
        self.uri.split(':').nth(1)
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri)
    }
}
