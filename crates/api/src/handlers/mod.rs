pub mod auth;
pub mod festival;
pub mod hotspot;
pub mod media;
pub mod monastery;
