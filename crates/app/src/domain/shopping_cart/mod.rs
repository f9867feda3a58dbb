//! Shopping Cart
//!
//! Recipes a user intends to cook, and the export of their combined
//! ingredients as a downloadable receipt.

pub mod errors;
pub mod export;
mod repository;
pub mod service;

pub use errors::{ShoppingCartExportError, ShoppingCartServiceError};
pub use export::*;
pub use service::*;
