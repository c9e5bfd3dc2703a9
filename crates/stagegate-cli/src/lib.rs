//! Shared plumbing for the stagegate binaries.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use stagegate_runner::Config;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; stdout carries only the summary and the status token.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load_or_default(path)
}

/// Like `Parser::parse`, but usage errors exit 1 so every failure shares one code.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    }
}
