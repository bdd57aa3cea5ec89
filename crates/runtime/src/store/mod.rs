//! Persistent store adapter.
//!
//! Collections are stored as whole JSON documents, one per key:
//! - [`KeyValueStore`] is the backend seam (file-backed or in-memory)
//! - [`Storage`] is the typed, fail-safe adapter every repository reads and
//!   writes through
//!
//! Reads never fail and writes never fail to the caller; both log and fall
//! back instead.

mod adapter;
mod collection;
mod error;
mod file;
mod memory;
mod traits;

pub use adapter::{Records, Storage, WriteOutcome};
pub use collection::Collection;
pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use traits::KeyValueStore;
