//! Catalog listing.

use anyhow::Result;
use vinyl_commerce::catalog::Product;
use vinyl_commerce::Currency;

use super::{CatalogArgs, CatalogSort};
use crate::context::Context;

const WIDTHS: [usize; 6] = [3, 20, 22, 12, 4, 9];

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let mut records: Vec<&Product> = catalog
        .iter()
        .filter(|p| match &args.genre {
            Some(genre) => p.genre.to_lowercase() == genre.to_lowercase(),
            None => true,
        })
        .collect();
    sort_records(&mut records, args.sort);

    if ctx.output.is_json() {
        ctx.output.json(&records);
        return Ok(());
    }

    ctx.output.header(&ctx.config.store.name);

    if records.is_empty() {
        match &args.genre {
            Some(genre) => ctx.output.info(&format!("No {} records in the catalog", genre)),
            None => ctx.output.info("The catalog is empty"),
        }
        return Ok(());
    }

    print_records(ctx, &records, catalog.currency());
    ctx.output.info(&format!("{} record(s)", records.len()));

    Ok(())
}

fn sort_records(records: &mut [&Product], sort: CatalogSort) {
    match sort {
        CatalogSort::Catalog => {}
        CatalogSort::Price => records.sort_by_key(|p| p.price),
        CatalogSort::Year => records.sort_by(|a, b| b.year.cmp(&a.year)),
        CatalogSort::Title => records.sort_by_key(|p| p.title.to_lowercase()),
    }
}

/// Print records as a table.
pub(crate) fn print_records(ctx: &Context, records: &[&Product], currency: Currency) {
    ctx.output.table_row(&["#", "Title", "Artist", "Genre", "Year", "Price"], &WIDTHS);

    for product in records {
        let id = product.id.to_string();
        let year = product.year.to_string();
        let price = product.unit_price(currency).to_string();
        ctx.output.table_row(
            &[&id, &product.title, &product.artist, &product.genre, &year, &price],
            &WIDTHS,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinyl_commerce::catalog::Catalog;

    fn titles(records: &[&Product]) -> Vec<String> {
        records.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_sort_by_price() {
        let catalog = Catalog::vinyl_shop();
        let mut records: Vec<&Product> = catalog.iter().collect();
        sort_records(&mut records, CatalogSort::Price);
        assert_eq!(records[0].title, "Retrograde");
        assert_eq!(records[5].title, "Classical Moments");
    }

    #[test]
    fn test_sort_by_year_is_stable() {
        let catalog = Catalog::vinyl_shop();
        let mut records: Vec<&Product> = catalog.iter().collect();
        sort_records(&mut records, CatalogSort::Year);
        assert_eq!(
            titles(&records),
            vec![
                "Solitude",
                "Midnight Sessions",
                "Neon Dreams",
                "Urban Echoes",
                "Classical Moments",
                "Retrograde"
            ]
        );
    }

    #[test]
    fn test_catalog_order_untouched() {
        let catalog = Catalog::vinyl_shop();
        let mut records: Vec<&Product> = catalog.iter().collect();
        sort_records(&mut records, CatalogSort::Catalog);
        assert_eq!(records[0].title, "Midnight Sessions");
    }
}
