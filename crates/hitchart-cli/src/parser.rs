//! The targeted/search command grammar.
//!
//! Input of the form `"<name>" <ENTITY> <ACTION>` is validated in a
//! fixed order: quoting, token count, entity keyword, existence probe,
//! action keyword. The action keyword resolves against a closed
//! (entity, keyword) table and dispatches to the query layer. Keywords
//! match case-insensitively; the quoted name is case-sensitive.

use thiserror::Error;

use hitchart_core::schema::{Database, EntityKind};

use crate::presenter;

/// A recoverable validation failure. The detail string is reported to
/// the user with a uniform prefix and never ends the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidInput(pub String);

/// One recognised action keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Songlist,
    Hits,
    Weeks,
    Info,
    Search,
    Author,
    Duration,
    Rank,
    Week,
}

/// The (entity, keyword) grammar as data.
const ACTION_TABLE: &[(EntityKind, &str, Action)] = &[
    (EntityKind::Artist, "SONGLIST", Action::Songlist),
    (EntityKind::Artist, "HITS", Action::Hits),
    (EntityKind::Artist, "WEEKS", Action::Weeks),
    (EntityKind::Artist, "INFO", Action::Info),
    (EntityKind::Artist, "SEARCH", Action::Search),
    (EntityKind::Song, "AUTHOR", Action::Author),
    (EntityKind::Song, "DURATION", Action::Duration),
    (EntityKind::Song, "RANK", Action::Rank),
    (EntityKind::Song, "WEEK", Action::Week),
    (EntityKind::Song, "INFO", Action::Info),
    (EntityKind::Song, "SEARCH", Action::Search),
];

impl Action {
    fn lookup(entity: EntityKind, keyword: &str) -> Option<Self> {
        ACTION_TABLE
            .iter()
            .find(|(e, k, _)| *e == entity && *k == keyword)
            .map(|(_, _, action)| *action)
    }
}

/// A command that passed grammar validation. The action keyword is
/// still raw: it resolves against the action table only after the
/// existence probe, so an unknown name is reported before an unknown
/// action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetedCommand {
    pub name: String,
    pub entity: EntityKind,
    pub action: String,
}

/// Parse a raw line against the grammar: quoting, token count, entity
/// keyword. The name and action are carried through for [`run_query`].
pub fn parse_command(input: &str) -> Result<TargetedCommand, InvalidInput> {
    if input.matches('"').count() != 2 {
        return Err(InvalidInput("Command not recognised.".to_string()));
    }
    let open = input
        .find('"')
        .ok_or_else(|| InvalidInput("Command not recognised.".to_string()))?;
    let close = input
        .rfind('"')
        .ok_or_else(|| InvalidInput("Command not recognised.".to_string()))?;
    let name = &input[open + 1..close];

    let keywords = input[close + 1..].to_uppercase();
    let tokens: Vec<&str> = keywords.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(InvalidInput("Invalid number of commands.".to_string()));
    }

    let entity = match tokens[0] {
        "ARTIST" => EntityKind::Artist,
        "SONG" => EntityKind::Song,
        other => return Err(InvalidInput(other.to_string())),
    };

    Ok(TargetedCommand {
        name: name.to_string(),
        entity,
        action: tokens[1].to_string(),
    })
}

/// Column probed to decide whether a name exists at all.
const fn probe_column(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Artist => "total_weeks",
        EntityKind::Song => "weeks_on_chart",
    }
}

/// Execute a parsed command against the store and render the result.
///
/// Every action except SEARCH first probes the store for the name and
/// rejects the command when the probe comes back empty. A probe that
/// fails at the store level does not reject; the action's own query
/// will surface the failure.
pub fn run_query(db: &Database, command: &TargetedCommand) -> Result<String, InvalidInput> {
    let TargetedCommand {
        name,
        entity,
        action,
    } = command;

    if action != "SEARCH" {
        let probe = db.fetch_by_name(*entity, name, &[probe_column(*entity)]);
        if matches!(probe, Some(ref rows) if rows.is_empty()) {
            return Err(InvalidInput(format!(
                "\"{name}\" was not found in the {} database.",
                entity.table().name
            )));
        }
    }

    let action =
        Action::lookup(*entity, action).ok_or_else(|| InvalidInput(action.clone()))?;

    let output = match action {
        Action::Songlist => presenter::render_songlist(db.songs_for_artist(name).as_deref()),
        Action::Author => presenter::render_author(name, db.author_of_song(name).as_deref()),
        Action::Search => presenter::render_search(search(db, *entity, name).as_deref()),
        Action::Hits => fetch(db, *entity, name, &["num_hit_songs"]),
        Action::Weeks => fetch(db, *entity, name, &["total_weeks"]),
        Action::Duration => fetch(db, *entity, name, &["duration_ms"]),
        Action::Rank => fetch(db, *entity, name, &["peak_rank"]),
        Action::Week => fetch(db, *entity, name, &["weeks_on_chart"]),
        Action::Info => match entity {
            EntityKind::Artist => fetch(db, *entity, name, &["num_hit_songs", "total_weeks"]),
            EntityKind::Song => fetch(
                db,
                *entity,
                name,
                &["duration_ms", "peak_rank", "weeks_on_chart"],
            ),
        },
    };
    Ok(output)
}

fn fetch(db: &Database, entity: EntityKind, name: &str, columns: &[&str]) -> String {
    presenter::render_fields(db.fetch_by_name(entity, name, columns).as_deref())
}

/// Prefix search, with the multi-artist credit fallback.
///
/// An empty name or one already containing a `%` wildcard runs a single
/// verbatim search. Otherwise two searches run — the name itself and
/// the literal `"%, " + name`, which also matches credits formatted as
/// `"Other, Name"` — and their results are concatenated without
/// deduplication.
fn search(db: &Database, entity: EntityKind, name: &str) -> Option<Vec<String>> {
    if name.is_empty() || name.contains('%') {
        return db.search_by_prefix(entity, name);
    }
    let direct = db.search_by_prefix(entity, name);
    let credited = db.search_by_prefix(entity, &format!("%, {name}"));
    match (direct, credited) {
        (Some(mut results), Some(more)) => {
            results.extend(more);
            Some(results)
        }
        _ => None,
    }
}
