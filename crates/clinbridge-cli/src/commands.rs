//! Subcommand implementations.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tracing::debug;

use clinbridge_fhir::run_resource_mapper;
use clinbridge_hl7::run_hl7_parser;

use crate::cli::{MapArgs, ParseArgs};

/// Outcome of a subcommand: the wire JSON plus whether the pipeline
/// accepted the request (drives the exit code).
pub struct CommandResult {
    pub ok: bool,
    pub output: Value,
}

pub fn run_parse(args: &ParseArgs) -> Result<CommandResult> {
    let text = read_input(args.input.as_ref())?;
    let request = if args.raw {
        json!({ "message": text })
    } else {
        parse_request(&text)?
    };
    let outcome = run_hl7_parser(&request);
    Ok(CommandResult {
        ok: outcome.is_ok(),
        output: outcome.into_json(),
    })
}

pub fn run_map(args: &MapArgs) -> Result<CommandResult> {
    let text = read_input(args.input.as_ref())?;
    let request = parse_request(&text)?;
    let outcome = run_resource_mapper(&request);
    Ok(CommandResult {
        ok: outcome.is_ok(),
        output: outcome.into_json(),
    })
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "reading request file");
            fs::read_to_string(path)
                .with_context(|| format!("failed to read input file: {}", path.display()))
        }
        None => {
            debug!("reading request from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn parse_request(text: &str) -> Result<Value> {
    serde_json::from_str(text).context("request is not valid JSON")
}
