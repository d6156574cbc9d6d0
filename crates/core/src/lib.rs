//! Domain vocabulary shared by the storage and HTTP crates.
//!
//! Nothing in here performs I/O: it holds the id/timestamp aliases, the
//! domain error type, and the enumerations and field rules for monasteries,
//! festivals, media and tour hotspots.

pub mod error;
pub mod festival;
pub mod hotspot;
pub mod media;
pub mod monastery;
pub mod types;
pub mod validation;
