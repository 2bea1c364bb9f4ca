use anyhow::Result;
use std::io;
use std::io::IsTerminal;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter directives for the given flags.
///
/// 0 = `default_level`, 1 = debug (hyper connection noise suppressed), 2+ = trace.
/// `RUST_LOG` wins over everything except `-q`.
pub fn filter_directives(verbose_level: u8, quiet: bool, default_level: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose_level {
        0 => default_level.to_string(),
        1 => "debug,hyper::proto::h1=warn,hyper::client::pool=warn".to_string(),
        _ => "trace".to_string(),
    }
}

pub fn init_logging(
    verbose_level: u8,
    quiet: bool,
    default_level: &str,
    log_file: Option<&Path>,
) -> Result<()> {
    let directives = filter_directives(verbose_level, quiet, default_level);
    let filter = if quiet {
        EnvFilter::new(directives)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
    };

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or_else(|_| !io::stderr().is_terminal());

    let registry = Registry::default().with(filter);

    if let Some(log_path) = log_file {
        let log_dir = log_path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Log file path has no parent directory"))?;
        std::fs::create_dir_all(log_dir)?;

        let log_filename = log_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid log filename"))?;
        // "reelshelf.log" rotates as reelshelf.<date>
        let log_prefix = log_filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(log_filename);

        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, log_prefix);

        if json {
            let json_layer = fmt::layer()
                .json()
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(file_appender);
            registry.with(json_layer).init();
        } else {
            let fmt_layer = fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(file_appender);
            registry.with(fmt_layer).init();
        }
    } else if json {
        let json_layer = fmt::layer()
            .json()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(io::stderr);
        registry.with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(io::stderr);
        registry.with(fmt_layer).init();
    }

    Ok(())
}
