use anyhow::Result;
use clap::Parser;
use docsearch_server::cli::{run, Config};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // stdout carries result rows only
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let config = Config::parse();
    let answered = run(&config)?;
    tracing::info!(answered, docs = %config.docs.display(), "done");
    Ok(())
}
