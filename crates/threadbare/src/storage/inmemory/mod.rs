//! In-memory storage backend for testing.
//!
//! Items live in a `BTreeMap` behind `Arc<RwLock<_>>` and are lost when the
//! repository is dropped. Filtering and ordering reuse the pure functions from
//! `threadbare_core::catalog`, so results match the SQLite backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use threadbare::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
