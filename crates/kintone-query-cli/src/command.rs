use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use kintone_query_build::{FormFields, generate_query_builder};
use kintone_query_config::Config;
use kintone_query_core::validate::{query_length, validate_query_string_length};
use std::{fs, num::NonZeroUsize, path::PathBuf};
use tracing::info;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "kintone-query", version)]
#[command(about = "Typed query tooling for kintone apps", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to ./kintone-query.toml when present)
    #[arg(long, short, global = true)]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Generate query field declarations from a form/fields.json response
    Generate(GenerateArgs),

    /// Check a query string against the configured length limit
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    /// Form field descriptor (JSON)
    #[arg(long, short)]
    pub(crate) fields: PathBuf,

    /// App name written into the generated header
    #[arg(long, short)]
    pub(crate) app: String,

    /// Emit subtable columns as table fields
    #[arg(long)]
    pub(crate) include_subtable: bool,

    /// Emit related-records display fields as table fields
    #[arg(long)]
    pub(crate) include_related: bool,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub(crate) out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    /// Query string to check
    #[arg(long, short)]
    pub(crate) query: String,

    /// Override the configured maximum length (at least 1)
    #[arg(long)]
    pub(crate) max_length: Option<NonZeroUsize>,
}

impl Cli {
    /// Execute the selected command and return what should go to stdout.
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        let config = Config::load_or_default(self.config.as_deref())
            .context("failed to load configuration")?;

        match &self.command {
            Command::Generate(args) => generate(&config, args),
            Command::Check(args) => check(&config, args),
        }
    }
}

pub(crate) fn generate(config: &Config, args: &GenerateArgs) -> anyhow::Result<String> {
    let json = fs::read_to_string(&args.fields)
        .with_context(|| format!("failed to read {}", args.fields.display()))?;
    let fields = FormFields::from_json(&json)
        .with_context(|| format!("failed to parse {}", args.fields.display()))?;

    let mut options = config.generate_options();
    options.include_subtable |= args.include_subtable;
    options.include_related |= args.include_related;

    let source = generate_query_builder(&fields, &args.app, &options)?;

    match &args.out {
        Some(path) => {
            fs::write(path, &source)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), fields = fields.properties.len(), "query fields written");

            Ok(format!("wrote {}\n", path.display()))
        }
        None => Ok(source),
    }
}

pub(crate) fn check(config: &Config, args: &CheckArgs) -> anyhow::Result<String> {
    let mut options = config.validation_options();
    if let Some(max_length) = args.max_length {
        options = options.with_max_length(max_length.get());
    }

    validate_query_string_length(&args.query, &options)?;

    Ok(format!("ok ({} chars)\n", query_length(&args.query)))
}
