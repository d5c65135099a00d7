use serde::{Deserialize, Serialize};

/// A charting song.
///
/// Field names match the `songs.csv` headers exactly. `artist_id`
/// references an artist row but is not enforced by a constraint; joins
/// silently drop songs whose artist is missing. `peak_rank` is the best
/// chart position reached (lower is better).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub artist_id: i64,
    pub track_name: String,
    pub duration_ms: i64,
    pub peak_rank: i64,
    pub weeks_on_chart: i64,
}

impl Song {
    #[must_use]
    pub fn new(
        artist_id: i64,
        track_name: impl Into<String>,
        duration_ms: i64,
        peak_rank: i64,
        weeks_on_chart: i64,
    ) -> Self {
        Self {
            artist_id,
            track_name: track_name.into(),
            duration_ms,
            peak_rank,
            weeks_on_chart,
        }
    }
}
