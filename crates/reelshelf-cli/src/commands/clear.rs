use crate::context::AppContext;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::fs;

pub fn run_clear(ctx: &AppContext, all: bool, watchlist: bool, credentials: bool, output: &Output) -> Result<()> {
    if !(all || watchlist || credentials) {
        output.warn("No clear option specified. Use --watchlist, --credentials, or --all");
        output.info("\nExample: reelshelf clear --watchlist");
        return Ok(());
    }

    if all || watchlist {
        clear_watchlist(ctx, output);
    }
    if all || credentials {
        clear_credentials(ctx, output)?;
    }
    Ok(())
}

fn clear_watchlist(ctx: &AppContext, output: &Output) {
    let store = ctx.watchlist();
    if store.is_empty() {
        output.info("Watchlist is already empty");
        return;
    }
    let removed = store.clear();
    if store.is_synced() {
        output.success(format!("Cleared {} watchlist title(s)", removed));
    } else {
        output.warn("Could not write the emptied watchlist to storage");
    }
}

fn clear_credentials(ctx: &AppContext, output: &Output) -> Result<()> {
    let credentials_file = ctx.paths.credentials_file();

    if credentials_file.exists() {
        fs::remove_file(&credentials_file).map_err(|e| {
            eyre!(
                "Failed to remove credentials file at {}: {}",
                credentials_file.display(),
                e
            )
        })?;
        output.success(format!("Cleared credentials: {}", credentials_file.display()));
    } else {
        output.info("No credentials file found to clear");
    }
    Ok(())
}
