//! Route authorization policy.
//!
//! A static allow-list decides which paths bypass authentication. Every
//! other path requires a verified bearer token whose subject resolves to an
//! existing user. There is no role model: all authenticated users have
//! identical access.

use crate::routes;

/// Paths reachable without credentials, matched exactly.
pub const PUBLIC_PATHS: &[&str] = &[routes::AUTH_REGISTER, routes::AUTH_LOGIN, routes::HEALTH];

/// Path prefixes reachable without credentials (API docs, served images).
pub const PUBLIC_PREFIXES: &[&str] = &["/api-docs", "/images"];

/// Whether `path` is exempt from authentication.
pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path) || PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p))
}
