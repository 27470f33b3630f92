//! Pure catalog logic for the threadbare shop.
//!
//! Nothing in this crate performs I/O. The `storage` module only declares the
//! repository contract; concrete backends live in the `threadbare` binary.

pub mod catalog;
pub mod serde;
pub mod storage;
