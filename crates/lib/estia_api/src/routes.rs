//! Route path table.
//!
//! Every path is registered explicitly so the router and the authorization
//! policy share a single source of truth.

/// `POST` register a new account.
pub const AUTH_REGISTER: &str = "/api/auth/register";

/// `POST` authenticate with email and password.
pub const AUTH_LOGIN: &str = "/api/auth/login";

/// `GET` the authenticated caller's profile.
pub const AUTH_ME: &str = "/api/auth/me";

/// `GET` a user's public profile by id.
pub const USER_BY_ID: &str = "/api/user/{id}";

/// `GET` all rentals / `POST` a new rental.
pub const RENTALS: &str = "/api/rentals";

/// `GET` / `PUT` a rental by id.
pub const RENTAL_BY_ID: &str = "/api/rentals/{id}";

/// `POST` a message to a rental owner.
pub const MESSAGES: &str = "/api/messages";

/// `GET` service liveness.
pub const HEALTH: &str = "/api/health";

/// `GET` the OpenAPI document.
pub const OPENAPI: &str = "/api-docs/openapi.json";
