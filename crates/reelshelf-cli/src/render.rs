//! Tables and JSON documents for catalog records.

use catalog_core::presentation::{
    backdrop_url, display_date, display_title, display_year, format_rating, poster_url,
};
use catalog_core::WatchlistStore;
use catalog_models::{CatalogItem, Paged, WatchlistEntry};
use comfy_table::{Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use serde_json::{json, Value};

pub fn item_json(item: &CatalogItem) -> Value {
    json!({
        "id": item.id(),
        "kind": item.kind().path_segment(),
        "title": display_title(item),
        "date": display_date(item),
        "year": display_year(item),
        "rating": item.vote_average(),
        "votes": item.vote_count(),
        "popularity": item.popularity(),
        "overview": item.overview(),
        "poster_url": poster_url(item.poster_path()),
        "backdrop_url": backdrop_url(item.backdrop_path()),
    })
}

pub fn page_json(page: &Paged<CatalogItem>) -> Value {
    json!({
        "page": page.page,
        "total_pages": page.total_pages,
        "total_results": page.total_results,
        "results": page.results.iter().map(item_json).collect::<Vec<_>>(),
    })
}

pub fn entry_json(entry: &WatchlistEntry) -> Value {
    let mut value = item_json(&entry.snapshot);
    value["identifier"] = json!(entry.identifier);
    value
}

pub fn page_footer<T>(page: &Paged<T>) -> String {
    if page.total_pages == 0 {
        return "No results".to_string();
    }
    format!(
        "Page {} of {} ({} results)",
        page.page, page.total_pages, page.total_results
    )
}

fn header(columns: &[&str]) -> Vec<Cell> {
    columns
        .iter()
        .map(|c| Cell::new(c).fg(Color::Cyan).add_attribute(Attribute::Bold))
        .collect()
}

fn year_cell(item: &CatalogItem) -> Cell {
    Cell::new(display_year(item).map(|y| y.to_string()).unwrap_or_else(|| "-".to_string()))
}

/// One row per item; the last column marks titles already on the watchlist
pub fn items_table(items: &[CatalogItem], watchlist: &WatchlistStore) -> Table {
    let mut table = Table::new();
    table.set_header(header(&["ID", "Kind", "Title", "Year", "Rating", "Saved"]));

    for item in items {
        let saved = if watchlist.contains(item.id(), item.kind()) {
            "✓".green().to_string()
        } else {
            String::new()
        };
        table.add_row(vec![
            Cell::new(item.id()),
            Cell::new(item.kind().label()),
            Cell::new(display_title(item)),
            year_cell(item),
            Cell::new(format_rating(item.vote_average())),
            Cell::new(saved),
        ]);
    }
    table
}

pub fn watchlist_table(entries: &[WatchlistEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(header(&["#", "ID", "Kind", "Title", "Year", "Rating"]));

    for (position, entry) in entries.iter().enumerate() {
        let item = &entry.snapshot;
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(entry.identifier),
            Cell::new(entry.kind.label()),
            Cell::new(display_title(item)),
            year_cell(item),
            Cell::new(format_rating(item.vote_average())),
        ]);
    }
    table
}
