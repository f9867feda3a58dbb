//! Pantry Domain Concerns

pub mod favorites;
pub mod recipes;
pub mod shopping_cart;
pub mod users;
