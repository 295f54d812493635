//! OpenAPI document endpoint.

use axum::Json;
use serde_json::{Value, json};

/// `GET /api-docs/openapi.json` - machine-readable description of the API.
pub async fn openapi_handler() -> Json<Value> {
    Json(json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Estia API",
            "description": "Rental listing REST backend.",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "components": {
            "securitySchemes": {
                "bearerAuth": {"type": "http", "scheme": "bearer", "bearerFormat": "JWT"}
            }
        },
        "security": [{"bearerAuth": []}],
        "paths": {
            "/api/auth/register": {"post": {
                "summary": "Register a new account",
                "security": [],
                "responses": {
                    "201": {"description": "Account created, token returned"},
                    "400": {"description": "Missing field"},
                    "409": {"description": "Email already registered"}
                }
            }},
            "/api/auth/login": {"post": {
                "summary": "Authenticate with email and password",
                "security": [],
                "responses": {
                    "200": {"description": "Token returned"},
                    "401": {"description": "Invalid credentials"}
                }
            }},
            "/api/auth/me": {"get": {
                "summary": "Authenticated caller's profile",
                "responses": {
                    "200": {"description": "Profile"},
                    "401": {"description": "Unauthenticated"}
                }
            }},
            "/api/user/{id}": {"get": {
                "summary": "User profile by id",
                "responses": {
                    "200": {"description": "Profile"},
                    "404": {"description": "Unknown user"}
                }
            }},
            "/api/rentals": {
                "get": {
                    "summary": "All rentals",
                    "responses": {"200": {"description": "Rental list"}}
                },
                "post": {
                    "summary": "Create a rental (multipart form, image required)",
                    "responses": {
                        "201": {"description": "Created"},
                        "400": {"description": "Missing field"},
                        "415": {"description": "Unsupported image format"}
                    }
                }
            },
            "/api/rentals/{id}": {
                "get": {
                    "summary": "Rental by id",
                    "responses": {
                        "200": {"description": "Rental"},
                        "404": {"description": "Unknown rental"}
                    }
                },
                "put": {
                    "summary": "Update a rental (multipart form)",
                    "responses": {
                        "200": {"description": "Updated"},
                        "404": {"description": "Unknown rental"}
                    }
                }
            },
            "/api/messages": {"post": {
                "summary": "Message a rental owner",
                "responses": {
                    "201": {"description": "Sent"},
                    "400": {"description": "Missing field"},
                    "404": {"description": "Unknown rental or user"}
                }
            }},
            "/api/health": {"get": {
                "summary": "Liveness and database connectivity",
                "security": [],
                "responses": {"200": {"description": "Status"}}
            }}
        }
    }))
}
