pub mod json_backend;
pub mod memory;

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Fixed document key for the persisted code catalog.
pub const CATALOG_STORE: &str = "catalog";
/// Fixed document key for the persisted entry ledger.
pub const LEDGER_STORE: &str = "ledger";

/// Abstraction over durable sinks the stores load from at construction and
/// save to after every successful mutation. Documents are serialized JSON,
/// keyed by a fixed per-store name.
pub trait PersistenceGateway {
    /// Returns the prior serialized state for `store`, or `None` when the
    /// sink holds nothing under that key.
    fn load(&self, store: &str) -> Result<Option<String>>;

    /// Replaces the document stored under `store` with `state`.
    fn save(&self, store: &str, state: &str) -> Result<()>;
}

pub use json_backend::JsonFileGateway;
pub use memory::MemoryGateway;
