//! Passport Store — the read/merge protocol over a decentralized document
//! network.
//!
//! Passport records reference their stamps indirectly: each stored stamp
//! points at a separately stored credential document. Reads materialize a
//! passport by resolving every pointer concurrently; writes append through a
//! partial merge of the record's stamp list. The network itself sits behind
//! the [`DocumentStore`] contract and is injected, never owned.

pub mod datastore;
pub mod error;
pub mod memory;
pub mod store;

pub use datastore::DocumentStore;
pub use error::{PassportError, StoreError};
pub use memory::MemoryDocumentStore;
pub use store::PassportStore;
