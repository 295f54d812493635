//! Resource services orchestrating persistence and DTO shaping.

pub mod auth;
pub mod messages;
pub mod rentals;
