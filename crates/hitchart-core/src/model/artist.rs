use serde::{Deserialize, Serialize};

/// A charting artist.
///
/// Field names match the `artists.csv` headers exactly; the CSV loader
/// deserializes rows straight into this struct. `artist_names` is the
/// display/search key — it is not guaranteed unique across rows, but
/// lookups treat it as the key regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub artist_id: i64,
    pub artist_names: String,
    pub num_hit_songs: i64,
    pub total_weeks: i64,
}

impl Artist {
    #[must_use]
    pub fn new(artist_id: i64, name: impl Into<String>, num_hit_songs: i64, total_weeks: i64) -> Self {
        Self {
            artist_id,
            artist_names: name.into(),
            num_hit_songs,
            total_weeks,
        }
    }
}
