//! Text filter over catalog records.

use crate::catalog::Product;

/// Records whose title, artist or genre contains `query`, ignoring case.
///
/// Order follows the input slice. An empty query matches every record; whether
/// that is shown is a display decision, see [`EmptyQueryPolicy`].
///
/// [`EmptyQueryPolicy`]: crate::search::EmptyQueryPolicy
pub fn filter_records<'a>(records: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches_lowercase(&needle))
        .collect()
}
