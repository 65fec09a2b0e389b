//! Record search.

use anyhow::Result;
use vinyl_commerce::search::{search, EmptyQueryPolicy, SearchResults};

use super::SearchArgs;
use crate::commands::catalog::print_records;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let policy = if args.all {
        EmptyQueryPolicy::ShowAll
    } else {
        ctx.config.search.empty_query
    };

    let results = search(catalog.products(), &args.query, policy);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    match &results {
        SearchResults::Idle => {
            ctx.output.info("Type a title, artist or genre to search");
        }
        SearchResults::Matches { query, records } if records.is_empty() => {
            ctx.output.warn(&format!("Nothing found for \"{}\"", query));
        }
        SearchResults::Matches { query, records } => {
            if query.is_empty() {
                ctx.output.header("All records");
            } else {
                ctx.output.header(&format!("Results for \"{}\"", query));
            }
            print_records(ctx, records, catalog.currency());
            ctx.output.info(&format!("{} match(es)", records.len()));
        }
    }

    Ok(())
}
