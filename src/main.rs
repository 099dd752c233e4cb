use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use log::{debug, info, warn};
use std::io::{self, Write};
use std::path::PathBuf;

use pathquill::config::Config;
use pathquill::document::node::{YamlKey, YamlValue};
use pathquill::document::parser::parse_scalar;
use pathquill::document::tree::YamlTree;
use pathquill::file::loader::{load_file, load_from_stdin};
use pathquill::output::{format_matches, format_value, OutputFormat};
use pathquill::search::{SearchOptions, SearchTarget};

/// PathQuill - find every path where a key or value occurs
#[derive(Parser)]
#[command(name = "pathquill")]
#[command(version)]
#[command(about = "Find every path where a key or value occurs in a YAML or JSON document", long_about = None)]
#[command(group(ArgGroup::new("query").required(true).args(["key", "value", "path"])))]
struct Cli {
    /// Document to search: .yaml/.yml, .json, .jsonl/.ndjson, optionally .gz (omit or '-' for stdin)
    file: Option<PathBuf>,

    /// Report every mapping entry with this key
    #[arg(short, long)]
    key: Option<String>,

    /// Report every position holding this value
    #[arg(long)]
    value: Option<String>,

    /// Print the node at this path instead of searching
    #[arg(short, long)]
    path: Option<String>,

    /// Treat the key or value as text instead of reading it as a YAML scalar
    #[arg(short, long)]
    text: bool,

    /// Drop repeated matches (output order becomes unspecified)
    #[arg(short, long)]
    dedupe: bool,

    /// Output format (default: from config, else plain)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormatArg>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormatArg {
    Plain,
    Json,
    Yaml,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Plain => OutputFormat::Plain,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Sets up env_logger: `-v` flags win, then `RUST_LOG`, then the config file.
fn init_logging(verbose: u8, config: &Config) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level));
    let level = match verbose {
        0 => None,
        1 => Some(log::LevelFilter::Info),
        2 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

fn read_target(cli: &Cli) -> Result<Option<SearchTarget>> {
    let literal = |text: &str| -> Result<YamlValue> {
        if cli.text {
            Ok(YamlValue::String(text.to_string()))
        } else {
            parse_scalar(text)
        }
    };

    if let Some(key) = &cli.key {
        let value = literal(key)?;
        let key = YamlKey::try_from(&value).with_context(|| format!("Invalid key '{}'", key))?;
        return Ok(Some(SearchTarget::Key(key)));
    }
    if let Some(value) = &cli.value {
        return Ok(Some(SearchTarget::Value(literal(value)?)));
    }
    Ok(None)
}

fn load(file: Option<&PathBuf>) -> Result<YamlTree> {
    match file {
        Some(path) if path.as_os_str() != "-" => load_file(path),
        _ => load_from_stdin(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The log level may come from the config, so a bad config file can only
    // be reported once logging is set up.
    let (config, problem) = Config::load_or_default();
    init_logging(cli.verbose, &config);
    if let Some(e) = problem {
        warn!("{:#}; using default settings", e);
    }
    debug!("Using config {:?}", config);

    let format: OutputFormat = cli.format.map(Into::into).unwrap_or(config.format);
    let dedupe = cli.dedupe || config.dedupe;

    let tree = load(cli.file.as_ref())?;

    let rendered = if let Some(match_path) = &cli.path {
        let node = tree
            .resolve(match_path)
            .with_context(|| format!("Invalid path '{}'", match_path))?
            .with_context(|| format!("Nothing found at '{}'", match_path))?;
        let mut text = format_value(node, format)?;
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text
    } else {
        let target = read_target(&cli)?.context("Nothing to search for")?;
        let matches = tree.search(&target, &SearchOptions { dedupe })?;
        info!("{} matches", matches.len());
        let mut text = format_matches(&matches, format)?;
        if format != OutputFormat::Plain && !text.ends_with('\n') {
            text.push('\n');
        }
        text
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
