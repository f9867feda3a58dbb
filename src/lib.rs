//! Pantry
//!
//! Shopping cart aggregation and receipt rendering for the Pantry recipe service.

pub mod aggregate;
pub mod lines;
pub mod prelude;
pub mod receipt;
