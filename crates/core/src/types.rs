use serde::{Deserialize, Deserializer};

/// All database primary keys are server-generated UUIDs.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Deserializer for nullable fields of a partial update.
///
/// Pair with `#[serde(default)]`: an absent key stays `None` (keep the
/// stored value) while an explicit `null` becomes `Some(None)` (clear it).
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
