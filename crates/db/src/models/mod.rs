//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//! - A filter struct for list queries, where the entity has one

pub mod festival;
pub mod hotspot;
pub mod media;
pub mod monastery;
pub mod session;
pub mod user;
