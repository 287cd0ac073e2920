//! Print the OpenAPI document as JSON.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use exoplanet_backend::doc::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Print the exoplanet service OpenAPI document",
    version
)]
struct CliArgs {
    /// Write the document to this file instead of stdout.
    #[arg(long, value_name = "path")]
    output: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = CliArgs::parse();
    let document = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|err| io::Error::other(format!("serialise OpenAPI document: {err}")))?;

    match args.output {
        Some(path) => std::fs::write(path, document),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{document}")
        }
    }
}
