//! End-to-end tests driving a full session over a temp store: load the
//! sample CSVs, then exercise every command shape through
//! `Session::handle` exactly as the REPL would.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use hitchart::session::{Session, NOT_LOADED};

const ARTISTS_CSV: &str = "\
artist_id,artist_names,num_hit_songs,total_weeks
1,Adele,3,44
2,BTS,5,60
3,Doja Cat,2,25
4,\"Doja Cat, SZA\",1,18
5,Glass Animals,1,40
";

const SONGS_CSV: &str = "\
artist_id,track_name,duration_ms,peak_rank,weeks_on_chart
1,Hello,295000,1,30
1,Easy On Me,224000,1,24
2,Butter,164442,1,21
4,Kiss Me More,208000,3,19
5,Heat Waves,238000,1,42
";

fn session(dir: &TempDir) -> Session {
    let artists = dir.path().join("artists.csv");
    let songs = dir.path().join("songs.csv");
    fs::write(&artists, ARTISTS_CSV).unwrap();
    fs::write(&songs, SONGS_CSV).unwrap();
    Session::new(dir.path().join("music.db"), artists, songs)
}

fn loaded_session(dir: &TempDir) -> Session {
    let mut s = session(dir);
    assert_eq!(s.handle("LOAD DATA"), "Successfully loaded data.");
    s
}

#[test]
fn test_idle_state_rejects_queries() {
    let dir = TempDir::new().unwrap();
    let mut s = session(&dir);
    assert_eq!(s.handle("\"Adele\" ARTIST HITS"), NOT_LOADED);
    assert_eq!(s.handle("TOTAL ARTISTS"), NOT_LOADED);
}

#[test]
fn test_help_works_while_idle() {
    let dir = TempDir::new().unwrap();
    let mut s = session(&dir);
    assert!(s.handle("HELP").contains("LOAD DATA -- loads all the required data"));
}

#[test]
fn test_load_data_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    assert_eq!(s.handle("load data"), "Successfully loaded data.");
}

#[test]
fn test_artist_hits() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    assert_eq!(s.handle("\"Adele\" ARTIST HITS"), " num_hit_songs: 3");
}

#[test]
fn test_artist_info_contains_both_columns() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    assert_eq!(
        s.handle("\"Adele\" ARTIST INFO"),
        " num_hit_songs: 3 total_weeks: 44"
    );
}

#[test]
fn test_artist_songlist() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    assert_eq!(
        s.handle("\"Adele\" ARTIST SONGLIST"),
        "Songlist for Adele: Hello, Easy On Me"
    );
}

#[test]
fn test_song_duration() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    assert_eq!(s.handle("\"Butter\" SONG DURATION"), " duration_ms: 164442");
}

#[test]
fn test_song_author() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    assert_eq!(s.handle("\"Butter\" SONG AUTHOR"), "Butter was performed by BTS");
}

#[test]
fn test_song_info() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    assert_eq!(
        s.handle("\"Heat Waves\" SONG INFO"),
        " duration_ms: 238000 peak_rank: 1 weeks_on_chart: 42"
    );
}

#[test]
fn test_total_artists() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    assert_eq!(
        s.handle("TOTAL ARTISTS"),
        "The total number of artists stored is: 5"
    );
}

#[test]
fn test_total_songs_and_avg_duration() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    assert_eq!(
        s.handle("total songs"),
        "The total number of songs stored is: 5"
    );
    assert!(s
        .handle("avg duration")
        .starts_with("The average duration of songs store in ms is: "));
}

#[test]
fn test_missing_name_rejected_at_probe() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    assert_eq!(
        s.handle("\"xyz\" SONG AUTHOR"),
        " Invalid Input: \"xyz\" was not found in the songs database. Please try again."
    );
    assert_eq!(
        s.handle("\"Nobody\" ARTIST WEEKS"),
        " Invalid Input: \"Nobody\" was not found in the artists database. Please try again."
    );
}

#[test]
fn test_grammar_rejections() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    assert_eq!(
        s.handle("Adele ARTIST HITS"),
        " Invalid Input: Command not recognised. Please try again."
    );
    assert_eq!(
        s.handle("\"Adele\" ARTIST"),
        " Invalid Input: Invalid number of commands. Please try again."
    );
    assert_eq!(
        s.handle("\"Adele\" BAND HITS"),
        " Invalid Input: BAND Please try again."
    );
    assert_eq!(
        s.handle("\"Adele\" ARTIST DANCE"),
        " Invalid Input: DANCE Please try again."
    );
}

#[test]
fn test_search_matches_prefix_and_credits() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    // Direct prefix match plus the "%, SZA" credit fallback.
    assert_eq!(
        s.handle("\"Doja\" ARTIST SEARCH"),
        "Relevant Results: \"Doja Cat\" | \"Doja Cat, SZA\" | "
    );
    assert_eq!(
        s.handle("\"SZA\" ARTIST SEARCH"),
        "Relevant Results: \"Doja Cat, SZA\" | "
    );
}

#[test]
fn test_search_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    let first = s.handle("\"H\" SONG SEARCH");
    let second = s.handle("\"H\" SONG SEARCH");
    assert_eq!(first, second);
    assert_eq!(first, "Relevant Results: \"Hello\" | \"Heat Waves\" | ");
}

#[test]
fn test_search_no_results() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    assert_eq!(s.handle("\"zzz\" SONG SEARCH"), "No Relevant Results.");
}

#[test]
fn test_session_survives_errors() {
    let dir = TempDir::new().unwrap();
    let mut s = loaded_session(&dir);
    let _rejected = s.handle("\"xyz\" SONG AUTHOR");
    // The store stays active and later commands still work.
    assert_eq!(s.handle("\"Adele\" ARTIST WEEKS"), " total_weeks: 44");
}

#[test]
fn test_load_failure_leaves_session_idle() {
    let dir = TempDir::new().unwrap();
    let mut s = Session::new(
        dir.path().join("music.db"),
        PathBuf::from("absent-artists.csv"),
        PathBuf::from("absent-songs.csv"),
    );
    assert_eq!(s.handle("LOAD DATA"), "Error loading data. Please try again.");
    assert_eq!(s.handle("TOTAL ARTISTS"), NOT_LOADED);
}
