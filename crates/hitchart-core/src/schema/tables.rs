//! Static descriptions of the two chart tables.
//!
//! The loader turns these into `CREATE TABLE` statements and the query
//! layer uses them to assert that requested columns exist before
//! interpolating them into SQL.

use std::fmt::Write as _;

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
}

impl ColumnType {
    #[must_use]
    pub const fn sql(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Text => "TEXT",
        }
    }
}

/// An ordered column definition.
#[derive(Debug)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
}

/// A table definition: ordered columns, optional primary key, and the
/// display-key column used for name lookups.
#[derive(Debug)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub primary_key: Option<&'static str>,
    pub display_key: &'static str,
}

impl TableSchema {
    /// Whether `name` is a column of this table.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Generate the idempotent DDL for this table.
    #[must_use]
    pub fn create_sql(&self) -> String {
        let mut sql = format!("CREATE TABLE IF NOT EXISTS \"{}\"(", self.name);
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            let _ = write!(sql, "\"{}\" {}", column.name, column.ty.sql());
        }
        if let Some(pk) = self.primary_key {
            let _ = write!(sql, ", PRIMARY KEY(\"{pk}\")");
        }
        sql.push_str(");");
        sql
    }
}

pub const ARTISTS: TableSchema = TableSchema {
    name: "artists",
    columns: &[
        Column { name: "artist_id", ty: ColumnType::Integer },
        Column { name: "artist_names", ty: ColumnType::Text },
        Column { name: "num_hit_songs", ty: ColumnType::Integer },
        Column { name: "total_weeks", ty: ColumnType::Integer },
    ],
    primary_key: Some("artist_id"),
    display_key: "artist_names",
};

pub const SONGS: TableSchema = TableSchema {
    name: "songs",
    columns: &[
        Column { name: "artist_id", ty: ColumnType::Integer },
        Column { name: "track_name", ty: ColumnType::Text },
        Column { name: "duration_ms", ty: ColumnType::Integer },
        Column { name: "peak_rank", ty: ColumnType::Integer },
        Column { name: "weeks_on_chart", ty: ColumnType::Integer },
    ],
    primary_key: None,
    display_key: "track_name",
};

pub const TABLES: &[&TableSchema] = &[&ARTISTS, &SONGS];

/// Which of the two entity tables a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Artist,
    Song,
}

impl EntityKind {
    #[must_use]
    pub const fn table(self) -> &'static TableSchema {
        match self {
            Self::Artist => &ARTISTS,
            Self::Song => &SONGS,
        }
    }

    /// The human-readable name column used for lookups.
    #[must_use]
    pub const fn display_key(self) -> &'static str {
        self.table().display_key
    }
}
