//! Session-backed authentication extractors.
//!
//! - [`auth::CurrentUser`] -- Resolves the session cookie to a user row.
//! - [`rbac::RequireAdmin`] -- Requires an admin user.

pub mod auth;
pub mod rbac;
