//! Favorite Handlers

pub(crate) mod add;
pub(crate) mod remove;
