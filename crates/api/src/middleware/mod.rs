//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the bearer token in the `Authorization` header to a user.

pub mod auth;
