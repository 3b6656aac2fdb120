//! Data loader, in-memory directory store, and query service.
//!
//! The directory is loaded once at startup and then only read:
//!
//! 1. [`loader`] reads and validates the shelters and veterinarias files
//! 2. [`store::Directory`] holds the records, indexed by ID
//! 3. [`query::QueryService`] turns raw request parameters into lookups
//!
//! The store has no knowledge of HTTP or HTML; rendering lives in the web
//! crate.

pub mod error;
pub mod loader;
pub mod query;
pub mod store;

// Re-export primary types for convenience.
pub use error::{LoadError, QueryError};
pub use loader::{from_json_str, load_directory};
pub use query::{AnimalMatch, QueryService};
pub use store::Directory;
