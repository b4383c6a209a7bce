//! `curlgen` command-line front end.
//!
//! Turns flags, a JSON options document or the example form into a curl
//! command line. All formatting lives in `curlgen-core`; this crate only
//! gathers input, prints, and performs the optional clipboard copy.

pub mod args;
pub mod clipboard;
pub mod compose;
pub mod config;
pub mod logging;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use curlgen_core::{format_command, FormState, RequestOptions};
use tracing::{debug, info};

pub use args::{BuildArgs, Cli, Commands};
pub use config::Config;

/// Produce the text `curlgen` prints for `cli`.
pub fn execute(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Build(args) => {
            let config = match &cli.config {
                Some(path) => {
                    info!(path = %path.display(), "loading_config");
                    Config::load(path)?
                }
                None => Config::default(),
            };
            let options = compose::options_from_args(config.seed(), args.clone());
            debug!(?options, "build_options");
            Ok(format_command(&options))
        }
        Commands::Render { file } => {
            let text = match file.as_deref() {
                None => read_stdin()?,
                Some(path) if path == Path::new("-") => read_stdin()?,
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("reading options {}", path.display()))?,
            };
            let options = RequestOptions::from_json(&text).context("parsing options document")?;
            Ok(format_command(&options))
        }
        Commands::Example { json } => {
            let form = FormState::default();
            if *json {
                Ok(serde_json::to_string_pretty(form.options())?)
            } else {
                Ok(form.command().to_string())
            }
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("reading options from stdin")?;
    Ok(text)
}
