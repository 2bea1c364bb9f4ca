use crate::context::AppContext;
use crate::output::Output;
use crate::render;
use crate::WatchlistCommands;
use catalog_core::presentation::display_title;
use catalog_core::WatchlistStore;
use catalog_models::{CatalogId, MediaKind};
use catalog_sources::CatalogSource;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::json;

pub async fn run_watchlist(ctx: &AppContext, cmd: WatchlistCommands, output: &Output) -> Result<()> {
    let watchlist = ctx.watchlist();
    match cmd {
        WatchlistCommands::List { kind } => {
            list(&watchlist, kind, output);
            Ok(())
        }
        WatchlistCommands::Add { kind, id } => add(ctx, &watchlist, kind, id, output).await,
        WatchlistCommands::Remove { kind, id } => {
            remove(&watchlist, kind, id, output);
            Ok(())
        }
        WatchlistCommands::Clear => {
            let removed = watchlist.clear();
            report_sync(&watchlist, output);
            output.success(format!("Removed {} title(s) from the watchlist", removed));
            Ok(())
        }
    }
}

fn list(watchlist: &WatchlistStore, kind: Option<MediaKind>, output: &Output) {
    let entries = match kind {
        Some(kind) => watchlist.list_by_kind(kind),
        None => watchlist.list(),
    };

    if !output.is_human() {
        output.json(&json!({
            "count": entries.len(),
            "entries": entries.iter().map(render::entry_json).collect::<Vec<_>>(),
        }));
        return;
    }

    if entries.is_empty() {
        match kind {
            Some(kind) => output.info(format!("No {} on your watchlist", kind.label())),
            None => output.info("Your watchlist is empty. Add titles with `reelshelf watchlist add <movie|tv> <id>`."),
        }
        return;
    }

    output.heading("My Watchlist");
    output.table(render::watchlist_table(&entries));
}

async fn add(
    ctx: &AppContext,
    watchlist: &WatchlistStore,
    kind: MediaKind,
    id: CatalogId,
    output: &Output,
) -> Result<()> {
    if watchlist.contains(id, kind) {
        output.info(format!("{} {} is already on your watchlist", kind.label(), id));
        return Ok(());
    }

    let catalog = ctx.catalog()?;
    let details = match catalog.details(kind, id).await {
        Ok(details) => details,
        Err(e) if e.is_not_found() => return Err(eyre!("Item not found: {} {}", kind.label(), id)),
        Err(e) => return Err(eyre!("Failed to fetch {} {}: {}", kind.label(), id, e)),
    };

    let item = details.summary();
    let title = display_title(&item).to_string();
    watchlist.add(item);
    report_sync(watchlist, output);
    output.success(format!("Added \"{}\" to your watchlist", title));
    Ok(())
}

fn remove(watchlist: &WatchlistStore, kind: MediaKind, id: CatalogId, output: &Output) {
    if watchlist.remove(id, kind) {
        report_sync(watchlist, output);
        output.success(format!("Removed {} {} from your watchlist", kind.label(), id));
    } else {
        output.info(format!("{} {} is not on your watchlist", kind.label(), id));
    }
}

fn report_sync(watchlist: &WatchlistStore, output: &Output) {
    if !watchlist.is_synced() {
        output.warn("Could not save the watchlist; the change only lasts for this run");
    }
}
