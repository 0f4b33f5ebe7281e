use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use httpconst::catalog::{self, Export};
use httpconst::config::{self, CatalogConfig, DEFAULT_CONFIG_FILE, OutputFormat};
use httpconst::http::status::{self, HttpStatus, StatusEntry};
use httpconst::{CatalogError, Entry, Result};

#[derive(Parser, Debug)]
#[command(name = "httpconst", version, about = "Look up HTTP protocol constants")]
struct Cli {
    /// Config file (defaults to ./httpconst.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(long, global = true, value_enum)]
    format: Option<Format>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Plain,
    Toml,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Plain => OutputFormat::Plain,
            Format::Toml => OutputFormat::Toml,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every table with its size
    Tables,
    /// Print the literal behind a symbolic name
    Get { table: String, name: String },
    /// Find which symbolic names map to a literal
    Find {
        value: String,
        #[arg(long)]
        table: Option<String>,
    },
    /// Describe a status code, given as a number or a mnemonic
    Status { code: String },
    /// Dump the whole catalog as TOML
    Export,
}

#[derive(Serialize)]
struct TableRow {
    key: &'static str,
    title: &'static str,
    entries: usize,
}

#[derive(Serialize)]
struct Match {
    table: &'static str,
    #[serde(flatten)]
    entry: Entry,
}

#[derive(Serialize)]
struct Listing<T> {
    rows: Vec<T>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .finish();
    let cfg = tracing::subscriber::with_default(bootstrap, || CatalogConfig::from_file(&path));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = config::set_config(cfg) {
        tracing::error!(%err, "could not install config");
        return ExitCode::FAILURE;
    }
    tracing::debug!(config = ?config::config(), "loaded config");

    let format = cli.format.map(OutputFormat::from).unwrap_or(config::config().format);
    match run(cli.command, format) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, format: OutputFormat) -> Result<String> {
    match command {
        Command::Tables => {
            let rows: Vec<_> = catalog::TABLES
                .iter()
                .map(|t| TableRow { key: t.key(), title: t.title(), entries: t.len() })
                .collect();
            render(format, &Listing { rows }, |listing| {
                listing
                    .rows
                    .iter()
                    .map(|r| format!("{}\t{}\t{}\n", r.key, r.entries, r.title))
                    .collect()
            })
        }
        Command::Get { table, name } => {
            let name = if config::config().case_insensitive_names {
                symbolic_name(&name)
            } else {
                name
            };
            let entry = catalog::lookup(&table, &name)?;
            render(format, entry, |e| format!("{}\n", e.value))
        }
        Command::Find { value, table } => {
            let hits: Vec<_> = match &table {
                Some(key) => {
                    let table = catalog::require_table(key)?;
                    table.find(&value).map(|e| (table, e)).into_iter().collect()
                }
                None => catalog::find_anywhere(&value),
            };
            if hits.is_empty() {
                let table = table.unwrap_or_else(|| "catalog".to_string());
                return Err(CatalogError::NotFound { table, query: value });
            }
            tracing::debug!(value = %value, hits = hits.len(), "reverse lookup");
            let rows: Vec<_> = hits
                .into_iter()
                .map(|(t, e)| Match { table: t.key(), entry: *e })
                .collect();
            render(format, &Listing { rows }, |listing| {
                listing
                    .rows
                    .iter()
                    .map(|m| format!("{}\t{}\t{}\n", m.table, m.entry.name, m.entry.value))
                    .collect()
            })
        }
        Command::Status { code } => {
            let status = resolve_status(&code)?;
            render(format, status.entry(), |e: &StatusEntry| {
                format!("{} {}\t{}\t{}\t{}\n", e.code, e.phrase, e.name, status.class(), e.defined_in)
            })
        }
        Command::Export => Export::new().to_toml(),
    }
}

/// Spells a loosely typed name the way the tables declare it:
/// `content-type` and `openid2.local_id` become `CONTENT_TYPE` and
/// `OPENID2_LOCAL_ID`. Runs of other characters collapse into one `_`.
fn symbolic_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_uppercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    if out.ends_with('_') {
        out.pop();
    }
    out
}

fn resolve_status(query: &str) -> Result<HttpStatus> {
    if let Ok(code) = query.parse::<u16>() {
        return HttpStatus::from_code(code);
    }
    status::by_mnemonic(query)
        .or_else(|| status::by_reason_phrase(query))
        .ok_or_else(|| CatalogError::NotFound { table: "status_codes".to_string(), query: query.to_string() })
}

fn render<T: Serialize>(format: OutputFormat, value: &T, plain: impl Fn(&T) -> String) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(plain(value)),
        OutputFormat::Toml => Ok(toml::to_string(value)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolic_name() {
        assert_eq!(symbolic_name("content-type"), "CONTENT_TYPE");
        assert_eq!(symbolic_name("CONTENT_TYPE"), "CONTENT_TYPE");
        assert_eq!(symbolic_name("openid2.local_id"), "OPENID2_LOCAL_ID");
        assert_eq!(symbolic_name("application/vnd.api+json"), "APPLICATION_VND_API_JSON");
        assert_eq!(symbolic_name("image/svg+xml"), "IMAGE_SVG_XML");
        assert_eq!(symbolic_name("-x--y-"), "X_Y");
    }
}
