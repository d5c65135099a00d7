use rusqlite::{params, Connection};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Artist, Song};

use super::tables::{EntityKind, TABLES};

/// Values selected for one distinct display key, in request order.
///
/// When the same display key occurs on several rows the later row
/// replaces the earlier one wholesale. Results are keyed by name rather
/// than by id, so this loses per-row granularity on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedFields {
    pub name: String,
    pub fields: Vec<(String, i64)>,
}

/// The track names joined to one artist, in join iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Songlist {
    pub artist: String,
    pub tracks: Vec<String>,
}

/// The closed set of named aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Artists,
    Songs,
    Duration,
}

/// A read-mostly connection to the chart store.
///
/// All public read operations collapse store failures to `None` after
/// logging: callers distinguish only "got data", "got nothing", and
/// "got a failure", never a specific error code.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a store at the given path and apply the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.apply_schema()?;
        Ok(db)
    }

    /// Open an in-memory store (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.apply_schema()?;
        Ok(db)
    }

    /// Get a reference to the underlying connection (for advanced queries).
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    fn apply_schema(&self) -> Result<()> {
        // LIKE must stay case-sensitive so prefix searches match the
        // stored casing exactly.
        self.conn
            .pragma_update(None, "case_sensitive_like", true)?;
        for table in TABLES {
            log::debug!("Applying schema for table {}", table.name);
            self.conn.execute_batch(&table.create_sql())?;
        }
        Ok(())
    }
}

// Write path, used only by the loader and by tests.
impl Database {
    /// Insert an artist row.
    pub fn insert_artist(&self, artist: &Artist) -> Result<()> {
        self.conn.execute(
            "INSERT INTO artists (artist_id, artist_names, num_hit_songs, total_weeks)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                artist.artist_id,
                artist.artist_names,
                artist.num_hit_songs,
                artist.total_weeks,
            ],
        )?;
        Ok(())
    }

    /// Insert a song row.
    pub fn insert_song(&self, song: &Song) -> Result<()> {
        self.conn.execute(
            "INSERT INTO songs (artist_id, track_name, duration_ms, peak_rank, weeks_on_chart)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                song.artist_id,
                song.track_name,
                song.duration_ms,
                song.peak_rank,
                song.weeks_on_chart,
            ],
        )?;
        Ok(())
    }
}

// Read operations.
impl Database {
    /// Exact-match lookup on the entity's display key.
    ///
    /// Returns one entry per distinct display value with the requested
    /// columns; an empty vec when nothing matches; `None` only when the
    /// query itself fails (including a column not in the schema).
    pub fn fetch_by_name(
        &self,
        kind: EntityKind,
        name: &str,
        columns: &[&str],
    ) -> Option<Vec<NamedFields>> {
        match self.try_fetch_by_name(kind, name, columns) {
            Ok(rows) => Some(rows),
            Err(e) => {
                log::warn!("fetch_by_name on {} failed: {e}", kind.table().name);
                None
            }
        }
    }

    fn try_fetch_by_name(
        &self,
        kind: EntityKind,
        name: &str,
        columns: &[&str],
    ) -> Result<Vec<NamedFields>> {
        let table = kind.table();
        for column in columns {
            if !table.has_column(column) {
                return Err(Error::UnknownColumn {
                    table: table.name,
                    column: (*column).to_string(),
                });
            }
        }

        let select_list = columns
            .iter()
            .map(|c| format!("\"{c}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let key = table.display_key;
        let sql = format!(
            "SELECT \"{key}\", {select_list} FROM \"{}\" WHERE \"{key}\" = ?1",
            table.name
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![name])?;
        let mut results: Vec<NamedFields> = Vec::new();
        while let Some(row) = rows.next()? {
            let key_value: String = row.get(0)?;
            let mut fields = Vec::with_capacity(columns.len());
            for (i, column) in columns.iter().enumerate() {
                fields.push(((*column).to_string(), row.get::<_, i64>(i + 1)?));
            }
            match results.iter_mut().find(|r| r.name == key_value) {
                Some(existing) => existing.fields = fields,
                None => results.push(NamedFields {
                    name: key_value,
                    fields,
                }),
            }
        }
        Ok(results)
    }

    /// All track names for an exact artist-name match, grouped per
    /// artist in join iteration order; duplicates preserved.
    pub fn songs_for_artist(&self, artist_name: &str) -> Option<Vec<Songlist>> {
        match self.try_songs_for_artist(artist_name) {
            Ok(lists) => Some(lists),
            Err(e) => {
                log::warn!("songs_for_artist failed: {e}");
                None
            }
        }
    }

    fn try_songs_for_artist(&self, artist_name: &str) -> Result<Vec<Songlist>> {
        let mut stmt = self.conn.prepare(
            "SELECT artist_names, track_name FROM artists
             INNER JOIN songs ON artists.artist_id = songs.artist_id
             WHERE artist_names = ?1",
        )?;
        let mut rows = stmt.query(params![artist_name])?;
        let mut lists: Vec<Songlist> = Vec::new();
        while let Some(row) = rows.next()? {
            let artist: String = row.get(0)?;
            let track: String = row.get(1)?;
            match lists.iter_mut().find(|l| l.artist == artist) {
                Some(list) => list.tracks.push(track),
                None => lists.push(Songlist {
                    artist,
                    tracks: vec![track],
                }),
            }
        }
        Ok(lists)
    }

    /// The artist who performed an exact track-name match.
    ///
    /// Only the first joined artist is surfaced when a track name is
    /// shared — a known precision-losing shortcut, kept as-is. `None`
    /// when nothing matches or the query fails.
    pub fn author_of_song(&self, song_name: &str) -> Option<String> {
        let result = self.try_author_of_song(song_name);
        match result {
            Ok(author) => author,
            Err(e) => {
                log::warn!("author_of_song failed: {e}");
                None
            }
        }
    }

    fn try_author_of_song(&self, song_name: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT artist_names FROM artists
             INNER JOIN songs ON artists.artist_id = songs.artist_id
             WHERE track_name = ?1",
        )?;
        let mut rows = stmt.query(params![song_name])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Display names starting with `prefix`, case-sensitive, in store
    /// iteration order. A `%` inside the prefix keeps its wildcard
    /// meaning.
    pub fn search_by_prefix(&self, kind: EntityKind, prefix: &str) -> Option<Vec<String>> {
        match self.try_search_by_prefix(kind, prefix) {
            Ok(names) => Some(names),
            Err(e) => {
                log::warn!("search_by_prefix on {} failed: {e}", kind.table().name);
                None
            }
        }
    }

    fn try_search_by_prefix(&self, kind: EntityKind, prefix: &str) -> Result<Vec<String>> {
        let table = kind.table();
        let key = table.display_key;
        let sql = format!(
            "SELECT \"{key}\" FROM \"{}\" WHERE \"{key}\" LIKE ?1",
            table.name
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let names = stmt
            .query_map(params![format!("{prefix}%")], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    /// One of the fixed named aggregates, pre-formatted as a sentence.
    pub fn aggregate(&self, which: Aggregate) -> Option<String> {
        match self.try_aggregate(which) {
            Ok(sentence) => Some(sentence),
            Err(e) => {
                log::warn!("aggregate {which:?} failed: {e}");
                None
            }
        }
    }

    fn try_aggregate(&self, which: Aggregate) -> Result<String> {
        match which {
            Aggregate::Artists => {
                let count: i64 =
                    self.conn
                        .query_row("SELECT COUNT(*) FROM artists", [], |row| row.get(0))?;
                Ok(format!("The total number of artists stored is: {count}"))
            }
            Aggregate::Songs => {
                let count: i64 =
                    self.conn
                        .query_row("SELECT COUNT(*) FROM songs", [], |row| row.get(0))?;
                Ok(format!("The total number of songs stored is: {count}"))
            }
            Aggregate::Duration => {
                let avg: f64 = self.conn.query_row(
                    "SELECT AVG(duration_ms) FROM songs",
                    [],
                    |row| row.get(0),
                )?;
                Ok(format!(
                    "The average duration of songs store in ms is: {avg}"
                ))
            }
        }
    }
}
