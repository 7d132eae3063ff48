//! Reordering reports by a user-supplied list of names.

use std::collections::HashMap;

use somnus_core::models::report::ScoreReport;
use somnus_core::models::sort_spec::SortSpec;
use tracing::debug;

use crate::phonetic::PhoneticKey;

/// Rank lookup built from a [`SortSpec`].
///
/// Blank entries are skipped. When two entries share a phonetic key the
/// first one keeps its rank and later ones are ignored, so ranks are the
/// entry's position in the original list.
#[derive(Debug, Clone, Default)]
pub struct NameOrder {
    ranks: HashMap<PhoneticKey, usize>,
}

impl NameOrder {
    pub fn from_spec(spec: &SortSpec) -> Self {
        let mut ranks = HashMap::new();
        for (index, name) in spec.names().enumerate() {
            let key = PhoneticKey::of(name);
            if key.is_empty() {
                continue;
            }
            ranks.entry(key).or_insert(index);
        }
        Self { ranks }
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Position of `name` in the sort list, or `None` when it is not listed.
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.ranks.get(&PhoneticKey::of(name)).copied()
    }

    /// Stable sort of `items` by the rank of each item's name. Unlisted
    /// names go last; equal ranks keep their input order.
    pub fn apply_by<T, F>(&self, items: Vec<T>, name_of: F) -> Vec<T>
    where
        F: Fn(&T) -> &str,
    {
        if self.is_empty() {
            return items;
        }

        let mut ranked: Vec<(usize, T)> = items
            .into_iter()
            .map(|item| (self.rank(name_of(&item)).unwrap_or(usize::MAX), item))
            .collect();
        ranked.sort_by_key(|(rank, _)| *rank);

        let unmatched = ranked.iter().filter(|(r, _)| *r == usize::MAX).count();
        debug!(
            listed = self.ranks.len(),
            items = ranked.len(),
            unmatched,
            "applied name order"
        );

        ranked.into_iter().map(|(_, item)| item).collect()
    }

    pub fn apply(&self, reports: Vec<ScoreReport>) -> Vec<ScoreReport> {
        self.apply_by(reports, |r| r.name.as_str())
    }

    /// Names of reports that the sort list does not mention.
    pub fn unmatched<'a>(&self, reports: &'a [ScoreReport]) -> Vec<&'a str> {
        reports
            .iter()
            .map(|r| r.name.as_str())
            .filter(|name| self.rank(name).is_none())
            .collect()
    }
}

/// Reorder `reports` to follow `spec`. An empty name list returns the input
/// unchanged.
pub fn reorder_by_names(reports: Vec<ScoreReport>, spec: &SortSpec) -> Vec<ScoreReport> {
    NameOrder::from_spec(spec).apply(reports)
}
