//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `threadbare_core::storage`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: non-persistent backend for tests and demos
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p threadbare
//! ```
//!
//! Build with the in-memory store:
//! ```bash
//! cargo build -p threadbare --no-default-features --features inmemory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p threadbare --features sqlite"
);

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
