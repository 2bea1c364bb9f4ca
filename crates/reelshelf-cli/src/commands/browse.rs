use crate::context::AppContext;
use crate::output::Output;
use crate::render;
use catalog_core::{HomeFeed, WatchlistStore};
use catalog_models::{CatalogItem, Paged};
use catalog_sources::{CatalogError, CatalogSource, FilmCategory, SeriesCategory};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::{json, Value};

pub async fn run_home(ctx: &AppContext, output: &Output) -> Result<()> {
    let catalog = ctx.catalog()?;
    let watchlist = ctx.watchlist();
    let feed = HomeFeed::load(&catalog).await;

    let hero = feed.trending.as_ref().map(|_| Paged {
        results: feed.hero().to_vec(),
        ..Paged::empty()
    });
    let sections: Vec<(&str, Result<Paged<CatalogItem>, &CatalogError>)> = vec![
        ("Trending Movies", hero),
        ("Popular Movies", as_items(&feed.popular_films)),
        ("Top Rated Movies", as_items(&feed.top_rated_films)),
        ("Upcoming Movies", as_items(&feed.upcoming_films)),
        ("Popular TV Shows", as_items(&feed.popular_series)),
        ("Top Rated TV Shows", as_items(&feed.top_rated_series)),
    ];

    if output.is_human() {
        for (title, section) in &sections {
            output.heading(title);
            match section {
                Ok(page) if page.results.is_empty() => output.info("Nothing to show"),
                Ok(page) => output.table(render::items_table(&page.results, &watchlist)),
                Err(e) => output.warn(format!("Could not load {}: {}", title, e)),
            }
        }
    } else {
        let mut doc = serde_json::Map::new();
        for (title, section) in &sections {
            let value = match section {
                Ok(page) => json!(page.results.iter().map(render::item_json).collect::<Vec<_>>()),
                Err(e) => json!({ "error": e.to_string() }),
            };
            doc.insert(section_key(title), value);
        }
        output.json(&Value::Object(doc));
    }

    if feed.failed_sections().len() == sections.len() {
        return Err(eyre!("Could not load any home section"));
    }
    Ok(())
}

fn section_key(title: &str) -> String {
    title.to_lowercase().replace(' ', "_")
}

fn as_items<T>(section: &Result<Paged<T>, CatalogError>) -> Result<Paged<CatalogItem>, &CatalogError>
where
    T: Clone + Into<CatalogItem>,
{
    section
        .as_ref()
        .map(|page| page.clone().map(Into::into))
}

pub async fn run_movies(ctx: &AppContext, category: FilmCategory, page: u32, output: &Output) -> Result<()> {
    let catalog = ctx.catalog()?;
    let list = catalog
        .film_list(category, page)
        .await
        .map_err(|e| eyre!("Failed to load {}: {}", category.title(), e))?;

    show_page(category.title(), list.map(Into::into), &ctx.watchlist(), output);
    Ok(())
}

pub async fn run_tv(ctx: &AppContext, category: SeriesCategory, page: u32, output: &Output) -> Result<()> {
    let catalog = ctx.catalog()?;
    let list = catalog
        .series_list(category, page)
        .await
        .map_err(|e| eyre!("Failed to load {}: {}", category.title(), e))?;

    show_page(category.title(), list.map(Into::into), &ctx.watchlist(), output);
    Ok(())
}

pub(crate) fn show_page(title: &str, page: Paged<CatalogItem>, watchlist: &WatchlistStore, output: &Output) {
    if !output.is_human() {
        output.json(&render::page_json(&page));
        return;
    }

    output.heading(title);
    if page.results.is_empty() {
        output.info("No results");
        return;
    }
    output.table(render::items_table(&page.results, watchlist));
    output.info(render::page_footer(&page));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_key() {
        assert_eq!(section_key("Top Rated TV Shows"), "top_rated_tv_shows");
    }
}
