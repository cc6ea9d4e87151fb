use clap::Parser;
use paper_diff::config::{Config, ViewMode};
use paper_diff::render;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "paper-diff",
    version,
    about = "Show a line diff between two files"
)]
struct Cli {
    /// File before the edit
    original: PathBuf,

    /// File after the edit
    revised: PathBuf,

    /// unified, split or suggestion (defaults to the configured view)
    #[arg(long, value_parser = parse_view)]
    view: Option<ViewMode>,

    /// Context lines kept around each change in the suggestion view
    #[arg(long, value_name = "N")]
    context: Option<usize>,

    /// Print the view as JSON
    #[arg(long)]
    json: bool,
}

fn parse_view(value: &str) -> Result<ViewMode, String> {
    value.parse().map_err(|e: paper_diff::config::ConfigError| e.to_string())
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn run(cli: Cli) -> Result<String, CliError> {
    let config = Config::default();
    let mut settings = config.settings.diff;
    if let Some(context_lines) = cli.context {
        settings.context_lines = context_lines;
    }
    let engine = settings.engine();
    let view = cli.view.unwrap_or(settings.default_view);

    let original = read(&cli.original)?;
    let revised = read(&cli.revised)?;

    let output = match view {
        ViewMode::Split => {
            let rows = engine.split(&original, &revised);
            if cli.json {
                serde_json::to_string_pretty(&rows)?
            } else {
                render::render_split(&rows, render::left_column_width(&rows))
            }
        }
        ViewMode::Unified => {
            let lines = engine.unified(&original, &revised);
            if cli.json {
                serde_json::to_string_pretty(&lines)?
            } else {
                render::render_unified(&lines)
            }
        }
        ViewMode::Suggestion => {
            let lines = engine.suggestion(&original, &revised);
            if cli.json {
                serde_json::to_string_pretty(&lines)?
            } else if lines.is_empty() {
                "No changes.".to_string()
            } else {
                format!(
                    "{}\n{}",
                    render::render_stats(&engine.stats(&original, &revised)),
                    render::render_unified(&lines)
                )
            }
        }
    };

    Ok(output)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "paper-diff",
            "a.txt",
            "--view",
            "unified",
            "b.txt",
            "--context",
            "5",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.original, PathBuf::from("a.txt"));
        assert_eq!(cli.revised, PathBuf::from("b.txt"));
        assert_eq!(cli.view, Some(ViewMode::Unified));
        assert_eq!(cli.context, Some(5));
        assert!(cli.json);
    }

    #[test]
    fn flags_are_optional() {
        let cli = Cli::try_parse_from(["paper-diff", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.view, None);
        assert_eq!(cli.context, None);
        assert!(!cli.json);
    }

    #[test]
    fn rejects_bad_arguments() {
        let kind = |args: &[&str]| Cli::try_parse_from(args.iter().copied()).unwrap_err().kind();

        assert_eq!(
            kind(&["paper-diff", "a"]),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            kind(&["paper-diff", "a", "b", "--context", "x"]),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            kind(&["paper-diff", "a", "b", "--view", "wide"]),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            kind(&["paper-diff", "a", "b", "--color"]),
            ErrorKind::UnknownArgument
        );
    }
}
