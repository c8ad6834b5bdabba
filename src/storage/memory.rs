use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::{PersistenceGateway, Result};

/// In-memory gateway for tests and embedders that manage durability
/// themselves. Clones share the same underlying map, so a handle kept by a
/// test observes every save the store issues. Single-threaded by design,
/// matching the cooperative model of the stores.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    documents: Rc<RefCell<HashMap<String, String>>>,
    save_counts: Rc<RefCell<HashMap<String, usize>>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a document, simulating state left by a previous run.
    pub fn seed(&self, store: &str, state: &str) {
        self.documents
            .borrow_mut()
            .insert(store.to_string(), state.to_string());
    }

    /// Returns the current document for `store`, if any.
    pub fn document(&self, store: &str) -> Option<String> {
        self.documents.borrow().get(store).cloned()
    }

    /// Number of saves issued against `store` since construction.
    pub fn save_count(&self, store: &str) -> usize {
        self.save_counts.borrow().get(store).copied().unwrap_or(0)
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self, store: &str) -> Result<Option<String>> {
        Ok(self.documents.borrow().get(store).cloned())
    }

    fn save(&self, store: &str, state: &str) -> Result<()> {
        self.documents
            .borrow_mut()
            .insert(store.to_string(), state.to_string());
        *self
            .save_counts
            .borrow_mut()
            .entry(store.to_string())
            .or_insert(0) += 1;
        Ok(())
    }
}
