use crate::context::AppContext;
use crate::output::Output;
use crate::ConfigCommands;
use catalog_config::TMDB_API_KEY_ENV;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use serde_json::json;

pub fn run_config(ctx: &AppContext, cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { full } => show_config(ctx, full, output),
        ConfigCommands::ApiKey { key } => configure_api_key(ctx, key, output),
        ConfigCommands::Language { tag } => configure_language(ctx, &tag, output),
    }
}

fn show_config(ctx: &AppContext, full: bool, output: &Output) -> Result<()> {
    let credentials = ctx.credentials()?;
    let from_env = std::env::var(TMDB_API_KEY_ENV)
        .map(|k| !k.trim().is_empty())
        .unwrap_or(false);
    let api_key = credentials
        .resolve_tmdb_api_key()
        .map(|k| if full { k } else { mask_string(&k) })
        .unwrap_or_else(|| "<not set>".to_string());
    let key_source = if from_env { "environment" } else { "credentials file" };
    let config = &ctx.config;
    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| p.display().to_string());

    if !output.is_human() {
        output.json(&json!({
            "config_file": ctx.paths.config_file().display().to_string(),
            "storage_dir": ctx.paths.storage_dir().display().to_string(),
            "tmdb": {
                "base_url": config.tmdb.base_url,
                "language": config.tmdb.language,
                "timeout_seconds": config.tmdb.timeout_seconds,
                "api_key": api_key,
                "api_key_source": key_source,
            },
            "watchlist": { "slot": config.watchlist.slot },
            "logging": { "level": config.logging.level, "file": log_file },
        }));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Setting").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    let rows = [
        ("Config File", ctx.paths.config_file().display().to_string()),
        ("Storage Directory", ctx.paths.storage_dir().display().to_string()),
        ("TMDB Base URL", config.tmdb.base_url.clone()),
        ("Language", config.tmdb.language.clone()),
        ("Timeout", format!("{}s", config.tmdb.timeout_seconds)),
        ("API Key", format!("{} ({})", api_key, key_source)),
        ("Watchlist Slot", config.watchlist.slot.clone()),
        ("Log Level", config.logging.level.clone()),
        ("Log File", log_file.unwrap_or_else(|| "<stderr>".to_string())),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }

    output.heading("Configuration");
    output.table(table);
    Ok(())
}

fn configure_api_key(ctx: &AppContext, key: Option<String>, output: &Output) -> Result<()> {
    let key = match key {
        Some(key) => key,
        None => rpassword::prompt_password("TMDB API key: ")
            .map_err(|e| eyre!("Failed to read API key: {}", e))?,
    };
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(eyre!("API key cannot be empty"));
    }

    ctx.paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create config directories: {}", e))?;
    let mut credentials = ctx.credentials()?;
    credentials.set_tmdb_api_key(key);
    credentials
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    output.success(format!(
        "TMDB API key saved to {}",
        ctx.paths.credentials_file().display()
    ));
    if std::env::var(TMDB_API_KEY_ENV).is_ok() {
        output.warn(format!("{} is set and takes precedence over the stored key", TMDB_API_KEY_ENV));
    }
    Ok(())
}

fn configure_language(ctx: &AppContext, tag: &str, output: &Output) -> Result<()> {
    let tag = tag.trim();
    if !is_language_tag(tag) {
        return Err(eyre!("'{}' is not a language tag like en-US or de", tag));
    }

    ctx.paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create config directories: {}", e))?;
    let mut config = ctx.config.clone();
    config.tmdb.language = tag.to_string();
    let config_file = ctx.paths.config_file();
    config
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to save config to {}: {}", config_file.display(), e))?;

    output.success(format!("Language set to {}", tag));
    Ok(())
}

/// Primary subtag of 2-3 letters, optionally followed by a region
fn is_language_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let primary_ok = parts
        .next()
        .map(|p| (2..=3).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(false);
    let region_ok = match parts.next() {
        None => true,
        Some(region) => (2..=3).contains(&region.len()) && region.chars().all(|c| c.is_ascii_alphanumeric()),
    };
    primary_ok && region_ok && parts.next().is_none()
}

fn mask_string(s: &str) -> String {
    if s.is_empty() {
        return "<not set>".to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string(""), "<not set>");
        assert_eq!(mask_string("abcd"), "****");
        assert_eq!(mask_string("0123456789abcdef"), "01***ef");
    }

    #[test]
    fn test_language_tags() {
        assert!(is_language_tag("en-US"));
        assert!(is_language_tag("de"));
        assert!(is_language_tag("es-419"));
        assert!(!is_language_tag(""));
        assert!(!is_language_tag("english"));
        assert!(!is_language_tag("en-US-x"));
    }
}
