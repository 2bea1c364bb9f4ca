use catalog_core::SearchScope;
use catalog_models::{CatalogId, MediaKind};
use catalog_sources::{FilmCategory, SeriesCategory};
use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::{browse, clear, config, details, search, watchlist};

mod commands;
mod context;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "reelshelf")]
#[command(about = "ReelShelf - Browse TMDB and keep a local watchlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trending and curated lists for the front page
    #[command(long_about = "Show the home feed: the top trending movies, popular, top rated and upcoming movies, and popular and top rated TV shows. Sections that fail to load are reported and skipped.")]
    Home,

    /// Browse a movie list
    Movies {
        /// popular, top-rated, upcoming or now-playing
        #[arg(long, default_value = "popular")]
        category: FilmCategory,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Browse a TV list
    Tv {
        /// popular, top-rated, on-the-air or airing-today
        #[arg(long, default_value = "popular")]
        category: SeriesCategory,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Search movies and TV shows
    Search {
        query: String,

        /// all, movies or tv
        #[arg(long, default_value = "all")]
        scope: SearchScope,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Show details, cast, trailer and similar titles
    Show {
        /// movie or tv
        kind: MediaKind,
        id: CatalogId,
    },

    /// Manage the local watchlist
    Watchlist {
        #[command(subcommand)]
        cmd: WatchlistCommands,
    },

    /// View or change settings
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },

    /// Remove stored data
    #[command(long_about = "Remove stored data. Use --watchlist to empty the watchlist, --credentials to delete the stored API key, or --all for both.")]
    Clear {
        #[arg(long, action = ArgAction::SetTrue)]
        all: bool,

        #[arg(long, action = ArgAction::SetTrue)]
        watchlist: bool,

        #[arg(long, action = ArgAction::SetTrue)]
        credentials: bool,
    },
}

#[derive(Subcommand)]
pub enum WatchlistCommands {
    /// List saved titles in the order they were added
    List {
        /// Only movies or only TV shows
        #[arg(long)]
        kind: Option<MediaKind>,
    },
    /// Fetch a title and save it
    Add { kind: MediaKind, id: CatalogId },
    /// Remove a saved title
    Remove { kind: MediaKind, id: CatalogId },
    /// Remove every saved title
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (the API key is masked)
    Show {
        /// Show the API key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
    /// Store the TMDB API key
    #[command(long_about = "Store the TMDB API key in the credentials file. When --key is omitted the key is read from a hidden prompt. TMDB_API_KEY in the environment takes precedence over the stored key.")]
    ApiKey {
        #[arg(long)]
        key: Option<String>,
    },
    /// Set the catalog language, e.g. en-US
    Language { tag: String },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let ctx = context::AppContext::load()?;

    let log_file = ctx
        .config
        .logging
        .file
        .as_deref()
        .map(|file| ctx.paths.resolve_log_file(file));
    logging::init_logging(
        cli.verbose,
        cli.quiet,
        &ctx.config.logging.level,
        log_file.as_deref(),
    )
    .map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Home => browse::run_home(&ctx, &output).await,
        Commands::Movies { category, page } => browse::run_movies(&ctx, category, page, &output).await,
        Commands::Tv { category, page } => browse::run_tv(&ctx, category, page, &output).await,
        Commands::Search { query, scope, page } => search::run_search(&ctx, &query, scope, page, &output).await,
        Commands::Show { kind, id } => details::run_show(&ctx, kind, id, &output).await,
        Commands::Watchlist { cmd } => watchlist::run_watchlist(&ctx, cmd, &output).await,
        Commands::Config { cmd } => config::run_config(&ctx, cmd, &output),
        Commands::Clear { all, watchlist, credentials } => clear::run_clear(&ctx, all, watchlist, credentials, &output),
    }
}
