//! Request handlers.

pub mod auth;
pub mod docs;
pub mod health;
pub mod messages;
pub mod rentals;
pub mod users;
