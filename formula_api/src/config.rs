//! Command-line and environment configuration.
//!
//! Every flag has an environment fallback so the service can be configured
//! in a container without a wrapper script.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, for local development
    Pretty,
    /// One JSON object per line, for log aggregation
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "formula_api")]
#[command(about = "HTTP service evaluating closed-form physics formulas", long_about = None)]
#[command(version)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "FORMULA_API_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// JSON file of additional explanation records, merged over the bundled ones
    #[arg(long, env = "FORMULA_API_EXPLANATIONS")]
    pub explanations: Option<PathBuf>,

    /// Log output format
    #[arg(long, env = "FORMULA_API_LOG_FORMAT", value_enum, default_value = "pretty")]
    pub log_format: LogFormat,

    /// Include resolved input values in successful responses
    #[arg(long, env = "FORMULA_API_ECHO_INPUTS")]
    pub echo_inputs: bool,
}
