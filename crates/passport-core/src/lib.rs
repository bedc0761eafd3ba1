//! Passport Core — shared primitives for the passport crates:
//! - Holder DIDs with delegated-identity (parent) support
//! - Store configuration
//! - Core error type

pub mod config;
pub mod did;
pub mod error;

pub use config::StoreConfig;
pub use did::Did;
pub use error::CoreError;
