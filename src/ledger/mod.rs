//! Usage ledger: entry snapshots and the owning store with on-demand
//! aggregation.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use entry::Entry;
pub use ledger::{round2, Ledger};
