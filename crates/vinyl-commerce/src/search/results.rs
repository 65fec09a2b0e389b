//! Search results and the empty-query display policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::filter_records;

/// What to show when the search box is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyQueryPolicy {
    /// Show no results grid at all.
    #[default]
    Hide,
    /// Show the whole catalog.
    #[serde(alias = "all")]
    ShowAll,
}

impl EmptyQueryPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyQueryPolicy::Hide => "hide",
            EmptyQueryPolicy::ShowAll => "show_all",
        }
    }
}

impl fmt::Display for EmptyQueryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmptyQueryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hide" => Ok(EmptyQueryPolicy::Hide),
            "show_all" | "all" => Ok(EmptyQueryPolicy::ShowAll),
            other => Err(format!("unknown empty query policy: {}", other)),
        }
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResults<'a> {
    /// Nothing typed and the policy hides the grid.
    Idle,
    /// Records matching the query, in catalog order. May be empty.
    Matches {
        query: String,
        records: Vec<&'a Product>,
    },
}

impl<'a> SearchResults<'a> {
    /// Matching records (empty when idle).
    pub fn records(&self) -> &[&'a Product] {
        match self {
            SearchResults::Idle => &[],
            SearchResults::Matches { records, .. } => records,
        }
    }

    /// Check if a query ran and found nothing.
    pub fn is_nothing_found(&self) -> bool {
        matches!(self, SearchResults::Matches { records, .. } if records.is_empty())
    }

    /// Check if the results grid is suppressed.
    pub fn is_idle(&self) -> bool {
        matches!(self, SearchResults::Idle)
    }
}

/// Run a search over `records` honouring the empty-query policy.
///
/// The query is used as typed; surrounding whitespace is significant.
pub fn search<'a>(
    records: &'a [Product],
    query: &str,
    policy: EmptyQueryPolicy,
) -> SearchResults<'a> {
    if query.is_empty() && policy == EmptyQueryPolicy::Hide {
        return SearchResults::Idle;
    }
    SearchResults::Matches {
        query: query.to_string(),
        records: filter_records(records, query),
    }
}
