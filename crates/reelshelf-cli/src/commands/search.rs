use super::browse::show_page;
use crate::context::AppContext;
use crate::output::Output;
use catalog_core::{combined_search, SearchScope};
use color_eyre::eyre::eyre;
use color_eyre::Result;

pub async fn run_search(ctx: &AppContext, query: &str, scope: SearchScope, page: u32, output: &Output) -> Result<()> {
    if query.trim().is_empty() {
        output.warn("Enter a search term");
        return Ok(());
    }

    let catalog = ctx.catalog()?;
    let results = combined_search(&catalog, query, page, scope)
        .await
        .map_err(|e| eyre!("Search for '{}' failed: {}", query, e))?;

    let title = match scope {
        SearchScope::All => format!("Results for \"{}\"", query.trim()),
        SearchScope::Films => format!("Movies matching \"{}\"", query.trim()),
        SearchScope::Series => format!("TV shows matching \"{}\"", query.trim()),
    };
    show_page(&title, results, &ctx.watchlist(), output);
    Ok(())
}
