#![doc(test(attr(deny(warnings))))]

//! wRVU Core offers the catalog, ledger, and persistence primitives that power
//! clinician productivity tracking workflows.

pub mod catalog;
pub mod csv;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("wRVU Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
