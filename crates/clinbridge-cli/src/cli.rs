//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "clinbridge",
    version,
    about = "Convert legacy HL7 v2 messages and map clinical payloads to FHIR resources",
    long_about = "Two stateless conversion pipelines behind one binary:\n\n\
                  parse-hl7 tokenizes a pipe-delimited HL7 v2 message and extracts\n\
                  MSH metadata; map-resource validates a Patient or Observation\n\
                  payload and maps it to a FHIR-style resource.\n\n\
                  Both read a JSON request from a file or stdin and print the\n\
                  outcome JSON on stdout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for silence).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Pretty-print the outcome JSON.
    #[arg(long = "pretty", global = true)]
    pub pretty: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse an HL7 v2 message into segments and MSH metadata.
    ParseHl7(ParseArgs),

    /// Validate a clinical payload and map it to a FHIR resource.
    MapResource(MapArgs),
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Request file (JSON, `{"message": "..."}`). Reads stdin when omitted.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Treat the input as a bare HL7 message instead of a JSON request.
    #[arg(long = "raw")]
    pub raw: bool,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Request file (JSON, tagged by resourceType). Reads stdin when omitted.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
