//! Session state and top-level command dispatch.
//!
//! The session owns the store handle explicitly (no ambient globals):
//! Idle until the store file exists, Active afterwards, with the
//! connection opened lazily on the first command that needs it and
//! released when the session drops at exit.

use std::path::PathBuf;

use hitchart_core::loader;
use hitchart_core::schema::{Aggregate, Database};

use crate::parser;
use crate::presenter;

/// Fixed response for any data command issued before LOAD DATA.
pub const NOT_LOADED: &str = "You haven't loaded the data yet. Please execute LOAD DATA.";

/// One interactive session over the chart store.
#[derive(Debug)]
pub struct Session {
    db_path: PathBuf,
    artists_csv: PathBuf,
    songs_csv: PathBuf,
    db: Option<Database>,
}

impl Session {
    #[must_use]
    pub const fn new(db_path: PathBuf, artists_csv: PathBuf, songs_csv: PathBuf) -> Self {
        Self {
            db_path,
            artists_csv,
            songs_csv,
            db: None,
        }
    }

    /// Handle one raw input line and return the full response text
    /// (possibly multiple lines, possibly empty).
    ///
    /// LOAD DATA and HELP work in any state; everything else requires
    /// the store file to exist. Validation failures are reported with
    /// the uniform ` Invalid Input: ...` prefix and keep the session
    /// running.
    pub fn handle(&mut self, line: &str) -> String {
        let input = line.trim();
        let keyword = input.to_uppercase();

        if keyword == "LOAD DATA" {
            return match loader::load_from_csv(&self.db_path, &self.artists_csv, &self.songs_csv)
            {
                Ok(()) => "Successfully loaded data.".to_string(),
                Err(e) => {
                    log::warn!("load failed: {e}");
                    "Error loading data. Please try again.".to_string()
                }
            };
        }
        if keyword == "HELP" {
            return presenter::help_text().to_string();
        }
        if !self.db_path.exists() {
            return NOT_LOADED.to_string();
        }

        let db = match &mut self.db {
            Some(db) => db,
            slot @ None => match Database::open(&self.db_path) {
                Ok(db) => slot.insert(db),
                Err(e) => {
                    log::warn!("could not open store {}: {e}", self.db_path.display());
                    return NOT_LOADED.to_string();
                }
            },
        };

        match keyword.as_str() {
            "TOTAL ARTISTS" => {
                presenter::render_aggregate(db.aggregate(Aggregate::Artists).as_deref())
            }
            "TOTAL SONGS" => {
                presenter::render_aggregate(db.aggregate(Aggregate::Songs).as_deref())
            }
            "AVG DURATION" => {
                presenter::render_aggregate(db.aggregate(Aggregate::Duration).as_deref())
            }
            _ => match parser::parse_command(input)
                .and_then(|command| parser::run_query(db, &command))
            {
                Ok(output) => output,
                Err(e) => format!(" Invalid Input: {e} Please try again."),
            },
        }
    }
}
