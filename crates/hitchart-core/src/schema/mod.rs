pub mod db;
pub mod tables;

pub use db::{Aggregate, Database, NamedFields, Songlist};
pub use tables::{ColumnType, EntityKind, TableSchema, ARTISTS, SONGS, TABLES};
