//! Request handlers

pub mod clients;
pub mod health;
pub mod policies;
pub mod premium;
