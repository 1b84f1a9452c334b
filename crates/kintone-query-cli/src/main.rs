//! `kintone-query`: generate typed query fields from a form descriptor and
//! check ready-made query strings against the configured limits.

mod command;


use clap::Parser;
use command::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries generated source, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = cli.run()?;
    print!("{output}");

    Ok(())
}
