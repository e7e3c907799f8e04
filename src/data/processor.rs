//! Data Processor Module
//! Filtering, sorting and grouping over the loaded player table.

use crate::data::record::{PlayerRecord, PlayerTable};
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashSet};

/// Number of entries on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

/// Read-only queries over a `PlayerTable`. Every result keeps table order
/// unless stated otherwise.
pub struct DataProcessor;

impl DataProcessor {
    /// Records whose short name contains `query`, ignoring case.
    /// An empty query returns every record.
    pub fn search<'a>(table: &'a PlayerTable, query: &str) -> Vec<&'a PlayerRecord> {
        let needle = query.to_lowercase();
        table
            .rows()
            .par_iter()
            .filter(|p| p.name_contains(&needle))
            .collect()
    }

    /// Distinct names among the search results, in order of first appearance.
    pub fn matching_names<'a>(table: &'a PlayerTable, query: &str) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        Self::search(table, query)
            .into_iter()
            .filter_map(|p| p.short_name.as_deref())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// First record with exactly this short name.
    pub fn find_first<'a>(table: &'a PlayerTable, name: &str) -> Option<&'a PlayerRecord> {
        table
            .rows()
            .iter()
            .find(|p| p.short_name.as_deref() == Some(name))
    }

    /// Top `n` records by `overall`, descending. Ties keep table order.
    pub fn leaderboard(table: &PlayerTable, n: usize) -> Vec<&PlayerRecord> {
        let mut ranked: Vec<&PlayerRecord> = table.rows().iter().collect();
        // sort_by_key is stable
        ranked.sort_by_key(|p| Reverse(p.overall));
        ranked.truncate(n);
        ranked
    }

    /// Distinct non-null club names, sorted alphabetically.
    pub fn clubs(table: &PlayerTable) -> Vec<&str> {
        table
            .rows()
            .iter()
            .filter_map(|p| p.club_name.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every record whose club is exactly `club`.
    pub fn roster<'a>(table: &'a PlayerTable, club: &str) -> Vec<&'a PlayerRecord> {
        table
            .rows()
            .iter()
            .filter(|p| p.club_name.as_deref() == Some(club))
            .collect()
    }
}
