mod render;
mod table;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use colsort_lib::error::CollectSink;
use colsort_lib::options::{DeclarativeAttributes, NAMESPACE, SessionOptions};
use colsort_lib::session::SessionBuilder;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::render::{JsonReport, TableSession, render_text};
use crate::table::Table;

#[derive(Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(about = "Sort a delimited text table by header clicks.")]
struct Args {
    /// Table file. The first non-blank line is the header.
    input: PathBuf,

    /// Cell delimiter.
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Column specs, `|`-delimited (e.g. `|alpha|int|date:dd/mm/yyyy`).
    #[arg(long)]
    specs: Option<String>,

    /// Initial sort: `false`, `-1`/`true` (first sortable column), or a
    /// column index with an optional `A`/`D` suffix.
    #[arg(long = "initial-sort", allow_hyphen_values = true)]
    initial_sort: Option<String>,

    /// JSON file with session options.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Declarative table attribute (repeatable). Applied after `--specs`
    /// and `--initial-sort`.
    #[arg(long = "attr", value_name = "NAME=VALUE")]
    attrs: Vec<String>,

    /// Header column to click, in order (repeatable).
    #[arg(long = "click", value_name = "COLUMN")]
    clicks: Vec<usize>,

    /// Column whose cells are right-to-left text (repeatable).
    #[arg(long = "rtl-column", value_name = "COLUMN")]
    rtl_columns: Vec<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.log_file.as_deref())?;

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let table = Table::parse(&text, args.delimiter, &args.rtl_columns)?;
    let options = args.config.as_deref().map(load_options).transpose()?;
    let attributes = declarative_attributes(&args)?;

    let sink = Arc::new(CollectSink::new());
    let column_count = table.column_count();
    let mut builder = SessionBuilder::new(column_count, table.rows)
        .attributes(attributes)
        .diagnostics(sink.clone());
    if let Some(options) = options {
        builder = builder.options(options);
    }
    let mut session: TableSession = builder.build().context("failed to build sort session")?;

    for &column in &args.clicks {
        session
            .click(column)
            .with_context(|| format!("failed to sort column {column}"))?;
    }

    let diagnostics: Vec<String> = sink.take().iter().map(ToString::to_string).collect();
    for diagnostic in &diagnostics {
        eprintln!("warning: {diagnostic}");
    }

    match args.format {
        OutputFormat::Text => {
            println!("{}", render_text(&table.header, &session));
        }
        OutputFormat::Json => {
            let report = JsonReport::new(&table.header, &session, diagnostics);
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer(&mut handle, &report)?;
            handle.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), file)
        }
        None => WriteLogger::init(level, Config::default(), std::io::stderr()),
    }
    .context("failed to initialize logger")
}

fn load_options(path: &Path) -> Result<SessionOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn declarative_attributes(args: &Args) -> Result<DeclarativeAttributes> {
    let mut attributes = DeclarativeAttributes::new();
    if let Some(specs) = &args.specs {
        attributes.insert(NAMESPACE, specs.as_str());
    }
    if let Some(initial_sort) = &args.initial_sort {
        attributes.insert(format!("{NAMESPACE}-initialsort"), initial_sort.as_str());
    }
    for attr in &args.attrs {
        let Some((name, value)) = attr.split_once('=') else {
            anyhow::bail!("invalid --attr '{attr}' (expected format: <name>=<value>)");
        };
        attributes.insert(name.trim(), value);
    }
    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(["colsort", "table.csv"].iter().chain(extra)).unwrap()
    }

    #[test]
    fn test_shorthands_write_declarative_attributes() {
        let args = args(&["--specs", "|alpha|int", "--initial-sort", "-1"]);
        let attributes = declarative_attributes(&args).unwrap();
        assert_eq!(
            attributes,
            DeclarativeAttributes::new()
                .with("data-colsort", "|alpha|int")
                .with("data-colsort-initialsort", "-1")
        );
    }

    #[test]
    fn test_attr_flags_are_applied_last() {
        let args = args(&[
            "--specs",
            "alpha",
            "--attr",
            "data-colsort=int|int",
            "--attr",
            "data-colsort-markers-asc=^",
        ]);
        let attributes = declarative_attributes(&args).unwrap();
        assert_eq!(attributes.table_spec(), Some("int|int"));
        assert_eq!(
            attributes.options().collect::<Vec<_>>(),
            vec![("markersasc".to_string(), "^")]
        );
    }

    #[test]
    fn test_attr_without_value_is_rejected() {
        let args = args(&["--attr", "data-colsort"]);
        let error = declarative_attributes(&args).unwrap_err();
        assert!(error.to_string().contains("expected format"));
    }

    #[test]
    fn test_repeated_clicks_and_verbosity() {
        let args = args(&["--click", "1", "--click", "1", "-vv", "--format", "json"]);
        assert_eq!(args.clicks, vec![1, 1]);
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.format, OutputFormat::Json));
    }
}
