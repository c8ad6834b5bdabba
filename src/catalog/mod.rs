//! Grouped CPT-code catalog: domain models and the owning store.

#[allow(clippy::module_inception)]
pub mod catalog;
pub mod code;
pub mod group;

pub use catalog::Catalog;
pub use code::CptCode;
pub use group::Group;
