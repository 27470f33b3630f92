pub mod api;
pub mod catalog;
pub mod error;
pub mod health;
pub mod pages;
pub mod product;

pub use error::AppError;
