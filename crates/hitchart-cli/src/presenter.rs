//! Pure formatting of query-layer results into user-facing text.
//!
//! Each query result shape has exactly one renderer. A `None` input
//! means the store failed; every renderer maps it to a fixed error
//! line so the user never sees a distinction between "store
//! unreachable" and "malformed query".

use std::fmt::Write as _;

use hitchart_core::schema::{NamedFields, Songlist};

/// Render a `fetch_by_name` result: per distinct key a group of
/// space-prefixed `column: value` pairs, groups joined by a comma.
#[must_use]
pub fn render_fields(rows: Option<&[NamedFields]>) -> String {
    let Some(rows) = rows else {
        return "Error in Selection. Please try again.".to_string();
    };
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        for (column, value) in &row.fields {
            let _ = write!(out, " {column}: {value}");
        }
    }
    out
}

/// Render a `songs_for_artist` result, one line per artist.
#[must_use]
pub fn render_songlist(lists: Option<&[Songlist]>) -> String {
    let Some(lists) = lists else {
        return "Error in selection. Please try again.".to_string();
    };
    lists
        .iter()
        .map(|list| format!("Songlist for {}: {}", list.artist, list.tracks.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render an `author_of_song` result.
#[must_use]
pub fn render_author(song: &str, artist: Option<&str>) -> String {
    match artist {
        Some(artist) => format!("{song} was performed by {artist}"),
        None => "Error in selection. Please try again.".to_string(),
    }
}

/// Render an aggregate sentence.
#[must_use]
pub fn render_aggregate(sentence: Option<&str>) -> String {
    match sentence {
        Some(sentence) => sentence.to_string(),
        None => "Error in data calculation. Please try again.".to_string(),
    }
}

/// Render a search result: each match quoted and pipe-separated, with
/// a line break after every 5 entries (the 5th entry's own separator
/// still appears before the break).
#[must_use]
pub fn render_search(results: Option<&[String]>) -> String {
    let Some(results) = results else {
        return "Bad Input. Try Again.".to_string();
    };
    if results.is_empty() {
        return "No Relevant Results.".to_string();
    }
    let mut out = String::from("Relevant Results: ");
    let mut on_line = 0;
    for name in results {
        let _ = write!(out, "\"{name}\" | ");
        on_line += 1;
        if on_line == 5 {
            out.push('\n');
            on_line = 0;
        }
    }
    out
}

/// The static help page.
#[must_use]
pub const fn help_text() -> &'static str {
    "--------------------------------------------------
General Assistance:
HELP -- brings up general help page
LOAD DATA -- loads all the required data
EXIT -- to exit the program

Artist Queries:
\"search_string\" ARTIST SEARCH -- returns all artists with the given character(s)
\"artist_name\" ARTIST SONGLIST -- returns specific artist's list of songs
\"artist_name\" ARTIST HITS -- returns specific artist's # of top songs
\"artist_name\" ARTIST WEEKS -- returns specific artist's # weeks as a top artist
\"artist_name\" ARTIST INFO -- returns complete artist's info
- Example Input: \"Adele\" ARTIST HITS -- would return number of Adele's hits, so 3.

Song Queries:
\"search_string\" SONG SEARCH -- returns all songs with the given character(s)
\"song_name\" SONG AUTHOR -- returns specific song's author
\"song_name\" SONG DURATION -- returns specific song's duration (in MS, milliseconds)
\"song_name\" SONG RANK -- returns specific song's rank on top song list
\"song_name\" SONG WEEK -- returns specific song's weeks on top song list
\"song_name\" SONG INFO -- returns complete song's info
- Example Input: \"Butter\" SONG DURATION -- would return the duration of the song \"Butter\", so 164442.

Meta Data Queries:
TOTAL ARTISTS -- returns the total number of artists in the database
TOTAL SONGS -- returns the total number of songs in the database
AVG DURATION -- returns the average length of all of the songs (in MS, milliseconds)
--------------------------------------------------"
}
