//! Block kinds, facings, the placed-block registry, and the block catalog.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod registry;
pub mod types;

pub use catalog::{BlockCatalog, BlockDef};
pub use registry::{BlockRegistry, Cell};
pub use types::{Block, BlockKind, Direction};
