//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod festival_repo;
pub mod hotspot_repo;
pub mod media_repo;
pub mod monastery_repo;
pub mod session_repo;
pub mod user_repo;

pub use festival_repo::FestivalRepo;
pub use hotspot_repo::TourHotspotRepo;
pub use media_repo::MediaRepo;
pub use monastery_repo::MonasteryRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
