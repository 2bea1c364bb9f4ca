use crate::context::AppContext;
use crate::output::Output;
use crate::render;
use catalog_core::presentation::{
    backdrop_url, creators, display_title, format_long_date, format_rating, poster_url,
    profile_url, regular_seasons, season_year, trailer_url, DEFAULT_CAST_LIMIT,
};
use catalog_core::{load_title, TitleView};
use catalog_models::{CatalogId, MediaKind, SeriesDetails, TitleDetails};
use comfy_table::{Attribute, Cell, Table};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run_show(ctx: &AppContext, kind: MediaKind, id: CatalogId, output: &Output) -> Result<()> {
    let catalog = ctx.catalog()?;
    let view = match load_title(&catalog, kind, id).await {
        Ok(view) => view,
        Err(e) if e.is_not_found() => {
            return Err(eyre!("Item not found: {} {}", kind.label(), id));
        }
        Err(e) => return Err(eyre!("Failed to load {} {}: {}", kind.label(), id, e)),
    };

    let on_watchlist = ctx.watchlist().contains(id, kind);

    if output.is_human() {
        print_title(&view, on_watchlist, output);
    } else {
        output.json(&title_json(&view, on_watchlist));
    }
    Ok(())
}

fn release_line(details: &TitleDetails) -> Option<String> {
    let date = match details {
        TitleDetails::Film(film) => film.film.release_date.as_deref(),
        TitleDetails::Series(series) => series.series.first_air_date.as_deref(),
    }?;
    format_long_date(date)
}

fn print_title(view: &TitleView, on_watchlist: bool, output: &Output) {
    let summary = view.summary();
    let details = &view.details;

    output.heading(display_title(&summary));
    if let Some(tagline) = details.tagline() {
        output.info(tagline.italic().to_string());
    }

    let mut facts = Table::new();
    let mut fact = |label: &str, value: String| {
        facts.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), Cell::new(value)]);
    };

    fact("Kind", summary.kind().label().to_string());
    if let Some(released) = release_line(details) {
        fact("Released", released);
    }
    if let Some(runtime) = view.runtime() {
        fact("Runtime", runtime);
    }
    fact(
        "Rating",
        format!("{} ({} votes)", format_rating(summary.vote_average()), summary.vote_count()),
    );
    if !details.genres().is_empty() {
        let genres: Vec<&str> = details.genres().iter().map(|g| g.name.as_str()).collect();
        fact("Genres", genres.join(", "));
    }
    if let Some(status) = details.status() {
        fact("Status", status.to_string());
    }
    if let TitleDetails::Series(series) = details {
        let created_by = creators(series);
        if !created_by.is_empty() {
            fact("Created by", created_by.join(", "));
        }
        fact(
            "Seasons",
            format!("{} ({} episodes)", series.number_of_seasons, series.number_of_episodes),
        );
        if !series.networks.is_empty() {
            let networks: Vec<&str> = series.networks.iter().map(|n| n.name.as_str()).collect();
            fact("Networks", networks.join(", "));
        }
    }
    let directors: Vec<&str> = view.directors().iter().map(|d| d.name.as_str()).collect();
    if !directors.is_empty() {
        fact("Director", directors.join(", "));
    }
    if let Some(trailer) = view.trailer() {
        fact("Trailer", trailer_url(trailer));
    }
    fact("Poster", poster_url(summary.poster_path()));
    fact(
        "Watchlist",
        if on_watchlist { "✓".green().to_string() } else { "✗".red().to_string() },
    );
    output.table(facts);

    if !summary.overview().is_empty() {
        output.heading("Overview");
        output.info(summary.overview());
    }

    if let TitleDetails::Series(series) = details {
        if let Some(table) = seasons_table(series) {
            output.heading("Seasons");
            output.table(table);
        }
    }

    let cast = view.cast(DEFAULT_CAST_LIMIT);
    if !cast.is_empty() {
        output.heading("Cast");
        let mut table = Table::new();
        table.set_header(vec!["Name", "Character"]);
        for member in cast {
            table.add_row(vec![
                member.name.clone(),
                member.character.clone().unwrap_or_default(),
            ]);
        }
        output.table(table);
    }

    if !view.similar.is_empty() {
        output.heading("Similar");
        let mut table = Table::new();
        table.set_header(vec!["ID", "Title", "Rating"]);
        for item in view.similar.iter().take(10) {
            table.add_row(vec![
                item.id().to_string(),
                display_title(item).to_string(),
                format_rating(item.vote_average()),
            ]);
        }
        output.table(table);
    }
}

fn seasons_table(series: &SeriesDetails) -> Option<Table> {
    let seasons = regular_seasons(series);
    if seasons.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec!["#", "Season", "Episodes", "Year"]);
    for season in seasons {
        table.add_row(vec![
            season.season_number.to_string(),
            season.name.clone(),
            season.episode_count.to_string(),
            season_year(season).map(|y| y.to_string()).unwrap_or_default(),
        ]);
    }
    Some(table)
}

fn seasons_json(series: &SeriesDetails) -> serde_json::Value {
    json!(regular_seasons(series)
        .into_iter()
        .map(|s| json!({
            "season_number": s.season_number,
            "name": s.name,
            "episode_count": s.episode_count,
            "air_date": s.air_date,
            "poster_url": poster_url(s.poster_path.as_deref()),
        }))
        .collect::<Vec<_>>())
}

fn title_json(view: &TitleView, on_watchlist: bool) -> serde_json::Value {
    let summary = view.summary();
    let mut doc = render::item_json(&summary);

    doc["tagline"] = json!(view.details.tagline());
    doc["status"] = json!(view.details.status());
    doc["release_date_long"] = json!(release_line(&view.details));
    doc["runtime"] = json!(view.runtime());
    doc["genres"] = json!(view
        .details
        .genres()
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>());
    doc["backdrop_url"] = json!(backdrop_url(summary.backdrop_path()));
    doc["trailer_url"] = json!(view.trailer().map(trailer_url));
    doc["directors"] = json!(view
        .directors()
        .iter()
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>());
    doc["cast"] = json!(view
        .cast(DEFAULT_CAST_LIMIT)
        .iter()
        .map(|c| json!({
            "name": c.name,
            "character": c.character,
            "profile_url": profile_url(c.profile_path.as_deref()),
        }))
        .collect::<Vec<_>>());
    if let TitleDetails::Series(series) = &view.details {
        doc["created_by"] = json!(creators(series));
        doc["seasons"] = seasons_json(series);
    }
    doc["similar"] = json!(view.similar.iter().map(render::item_json).collect::<Vec<_>>());
    doc["on_watchlist"] = json!(on_watchlist);
    doc
}
