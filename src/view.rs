//! View selection and per-view results.
//! The GUI re-resolves the active view on every frame from these functions;
//! results that only depend on the table live in `ViewCache`.

use crate::data::{DataProcessor, PlayerRecord, PlayerTable, LEADERBOARD_SIZE};

pub const NO_MATCH_MESSAGE: &str = "No players matched your search.";
pub const NOT_FOUND_MESSAGE: &str = "No player data found for the selected name.";

/// The four display modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    ExplorePlayer,
    Leaderboard,
    ExploreByClub,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Home,
        View::ExplorePlayer,
        View::Leaderboard,
        View::ExploreByClub,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "🏠 Home",
            View::ExplorePlayer => "🔎 Explore Player",
            View::Leaderboard => "🏆 Leaderboard",
            View::ExploreByClub => "🏟 Explore by Club",
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum PlayerOutcome<'a> {
    NoMatches,
    NotFound,
    Detail(&'a PlayerRecord),
}

impl PlayerOutcome<'_> {
    /// Warning shown instead of the detail, if any.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            PlayerOutcome::NoMatches => Some(NO_MATCH_MESSAGE),
            PlayerOutcome::NotFound => Some(NOT_FOUND_MESSAGE),
            PlayerOutcome::Detail(_) => None,
        }
    }
}

/// Result of the player search view for one interaction.
#[derive(Debug)]
pub struct PlayerSearch<'a> {
    /// Distinct matching names offered for selection.
    pub names: Vec<&'a str>,
    pub outcome: PlayerOutcome<'a>,
}

/// Run the search and resolve the selection.
///
/// A selection that is no longer among the matches falls back to the first
/// match; with no matches the selection is cleared.
pub fn resolve_player<'a>(
    table: &'a PlayerTable,
    query: &str,
    selection: &mut Option<String>,
) -> PlayerSearch<'a> {
    let names = DataProcessor::matching_names(table, query);
    if names.is_empty() {
        *selection = None;
        return PlayerSearch {
            names,
            outcome: PlayerOutcome::NoMatches,
        };
    }

    let still_listed = selection
        .as_deref()
        .is_some_and(|s| names.contains(&s));
    if !still_listed {
        *selection = Some(names[0].to_string());
    }

    let outcome = selection
        .as_deref()
        .and_then(|name| DataProcessor::find_first(table, name))
        .map(PlayerOutcome::Detail)
        .unwrap_or(PlayerOutcome::NotFound);

    PlayerSearch { names, outcome }
}

/// Table-derived lists, built once after load.
#[derive(Debug, Clone, Default)]
pub struct ViewCache {
    /// Distinct clubs, sorted.
    pub clubs: Vec<String>,
    pub leaderboard: Vec<PlayerRecord>,
}

impl ViewCache {
    pub fn build(table: &PlayerTable) -> Self {
        Self {
            clubs: DataProcessor::clubs(table)
                .into_iter()
                .map(str::to_string)
                .collect(),
            leaderboard: DataProcessor::leaderboard(table, LEADERBOARD_SIZE)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

/// Result of the club view for one interaction.
#[derive(Debug)]
pub struct ClubRoster<'a> {
    pub clubs: &'a [String],
    pub selected: Option<&'a str>,
    pub players: Vec<&'a PlayerRecord>,
}

impl ClubRoster<'_> {
    pub fn heading(&self) -> Option<String> {
        self.selected
            .map(|club| format!("{} Players ({})", club, self.players.len()))
    }
}

/// Resolve the selected club among `clubs`, defaulting to the first one.
pub fn resolve_club<'a>(
    table: &'a PlayerTable,
    clubs: &'a [String],
    selection: &mut Option<String>,
) -> ClubRoster<'a> {
    let selected = selection
        .as_deref()
        .and_then(|s| clubs.iter().map(String::as_str).find(|c| *c == s))
        .or_else(|| clubs.first().map(String::as_str));
    *selection = selected.map(str::to_string);

    let players = selected
        .map(|club| DataProcessor::roster(table, club))
        .unwrap_or_default();

    ClubRoster {
        clubs,
        selected,
        players,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::player;

    fn table() -> PlayerTable {
        PlayerTable::from_records(vec![
            player("Messi", 93, Some("Paris SG")),
            player("Ronaldo", 92, Some("Man Utd")),
            player("Neymar Jr", 89, Some("Paris SG")),
            player("Ronaldo", 75, Some("Other FC")),
            player("Free Agent", 70, None),
        ])
    }

    #[test]
    fn test_view_labels_are_distinct() {
        let labels: std::collections::HashSet<&str> = View::ALL.iter().map(View::label).collect();
        assert_eq!(labels.len(), 4);
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn test_no_match_warns_and_clears_selection() {
        let table = table();
        let mut selection = Some("Messi".to_string());
        let search = resolve_player(&table, "zidane", &mut selection);
        assert!(search.names.is_empty());
        assert_eq!(search.outcome, PlayerOutcome::NoMatches);
        assert_eq!(search.outcome.warning(), Some(NO_MATCH_MESSAGE));
        assert_eq!(selection, None);
    }

    #[test]
    fn test_selection_defaults_to_first_match() {
        let table = table();
        let mut selection = None;
        let search = resolve_player(&table, "", &mut selection);
        assert_eq!(search.names.len(), 4);
        assert_eq!(selection.as_deref(), Some("Messi"));
        assert!(matches!(search.outcome, PlayerOutcome::Detail(p) if p.name() == "Messi"));
        assert_eq!(search.outcome.warning(), None);
    }

    #[test]
    fn test_stale_selection_is_replaced() {
        let table = table();
        let mut selection = Some("Messi".to_string());
        let search = resolve_player(&table, "ron", &mut selection);
        assert_eq!(search.names, vec!["Ronaldo"]);
        assert_eq!(selection.as_deref(), Some("Ronaldo"));
        // First of the duplicate names
        assert!(matches!(search.outcome, PlayerOutcome::Detail(p) if p.overall == 92));
    }

    #[test]
    fn test_kept_selection_survives_new_query() {
        let table = table();
        let mut selection = Some("Neymar Jr".to_string());
        let search = resolve_player(&table, "e", &mut selection);
        assert_eq!(search.names, vec!["Messi", "Neymar Jr", "Free Agent"]);
        assert_eq!(selection.as_deref(), Some("Neymar Jr"));
    }

    #[test]
    fn test_not_found_warning() {
        assert_eq!(PlayerOutcome::NotFound.warning(), Some(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_cache_holds_leaderboard_and_clubs() {
        let table = table();
        let cache = ViewCache::build(&table);
        assert_eq!(cache.leaderboard.len(), 5);
        assert_eq!(cache.leaderboard[0].name(), "Messi");
        assert_eq!(cache.clubs, vec!["Man Utd", "Other FC", "Paris SG"]);
    }

    #[test]
    fn test_cache_keeps_unnamed_players() {
        let table = PlayerTable::from_records(vec![
            PlayerRecord {
                short_name: None,
                ..player("ignored", 95, Some("Club"))
            },
            player("B", 80, Some("Club")),
        ]);
        let cache = ViewCache::build(&table);
        assert_eq!(cache.leaderboard[0].overall, 95);

        let mut selection = None;
        let roster = resolve_club(&table, &cache.clubs, &mut selection);
        assert_eq!(roster.players.len(), 2);
        assert_eq!(roster.heading().as_deref(), Some("Club Players (2)"));

        let search = resolve_player(&table, "", &mut selection);
        assert_eq!(search.names, vec!["B"]);
    }

    #[test]
    fn test_club_roster_defaults_and_counts() {
        let table = table();
        let cache = ViewCache::build(&table);
        let mut selection = None;
        let roster = resolve_club(&table, &cache.clubs, &mut selection);
        assert_eq!(roster.clubs.to_vec(), vec!["Man Utd", "Other FC", "Paris SG"]);
        assert_eq!(roster.selected, Some("Man Utd"));
        assert_eq!(selection.as_deref(), Some("Man Utd"));

        let mut selection = Some("Paris SG".to_string());
        let roster = resolve_club(&table, &cache.clubs, &mut selection);
        assert_eq!(roster.players.len(), 2);
        assert!(roster
            .players
            .iter()
            .all(|p| p.club_name.as_deref() == Some("Paris SG")));
        assert_eq!(roster.heading().as_deref(), Some("Paris SG Players (2)"));
    }

    #[test]
    fn test_club_roster_on_empty_table() {
        let table = PlayerTable::default();
        let cache = ViewCache::build(&table);
        assert!(cache.leaderboard.is_empty());
        let mut selection = Some("Paris SG".to_string());
        let roster = resolve_club(&table, &cache.clubs, &mut selection);
        assert!(roster.clubs.is_empty());
        assert!(roster.players.is_empty());
        assert_eq!(roster.heading(), None);
        assert_eq!(selection, None);
    }
}
