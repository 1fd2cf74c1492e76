//! Repository Layer
//!
//! Access to the remote Task collection.

mod traits;
mod error;
mod parse_store;

#[cfg(test)]
mod memory_store;
#[cfg(test)]
mod tests;

pub use traits::TaskStore;
pub use error::{StoreError, StoreResult};
pub use parse_store::ParseTaskStore;

#[cfg(test)]
pub use memory_store::MemoryTaskStore;
