//! Shopping Cart Handlers

pub(crate) mod add;
pub(crate) mod download;
pub(crate) mod remove;
