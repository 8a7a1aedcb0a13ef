//! # formula_cli
//!
//! Evaluate physics formulas from the terminal. Output is JSON on stdout;
//! failures are JSON on stderr with a non-zero exit status.
//!
//! ```bash
//! formula_cli list
//! formula_cli eval centripetal-acceleration v=10 r=5 --digits 2
//! formula_cli describe kinetic-energy --lang es
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use formula_core::adapter::{self, Failure, Reply};
use formula_core::explanations::DEFAULT_LANGUAGE;
use formula_core::{registry, ExplanationStore, FormulaError, ParameterSet};

#[derive(Parser, Debug)]
#[command(name = "formula_cli")]
#[command(about = "Evaluate closed-form physics formulas", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every formula with its parameters
    List,
    /// Evaluate a formula
    Eval {
        /// Formula identifier, e.g. centripetal-acceleration
        id: String,

        /// Inputs as key=value pairs
        #[arg(value_parser = parse_pair)]
        params: Vec<(String, String)>,

        /// Decimal places in the result (0-16)
        #[arg(short, long)]
        digits: Option<String>,

        /// Include resolved inputs in the output
        #[arg(long)]
        echo_inputs: bool,
    },
    /// Show the explanation record for a formula
    Describe {
        id: String,

        /// Language code
        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        lang: String,
    },
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("{}", json!({ "error": e.to_string() })),
    }
}

fn fail(failure: &Failure) -> ExitCode {
    eprintln!("{}", serde_json::to_string(failure).unwrap_or_else(|_| failure.error.clone()));
    ExitCode::FAILURE
}

fn eval(id: &str, params: Vec<(String, String)>, digits: Option<String>, echo_inputs: bool) -> ExitCode {
    let mut pairs = params;
    if let Some(digits) = digits {
        pairs.push(("digits".to_string(), digits));
    }
    let params = ParameterSet::from_pairs(pairs);

    match adapter::handle_params(id, &params, echo_inputs) {
        Reply::Failure(failure) => fail(&failure),
        reply => {
            print_json(&reply);
            ExitCode::SUCCESS
        }
    }
}

fn describe(id: &str, lang: &str) -> ExitCode {
    let lookup = || -> Result<Value, FormulaError> {
        let formula = registry::find(id)?;
        let store = ExplanationStore::bundled()?;
        let descriptor = store.find(lang, formula.subject.as_str(), id)?;
        serde_json::to_value(descriptor).map_err(|e| FormulaError::SerializationError { reason: e.to_string() })
    };

    match lookup() {
        Ok(value) => {
            print_json(&value);
            ExitCode::SUCCESS
        }
        Err(err) => fail(&Failure::from(&err)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            print_json(&registry::summaries());
            ExitCode::SUCCESS
        }
        Commands::Eval {
            id,
            params,
            digits,
            echo_inputs,
        } => eval(&id, params, digits, echo_inputs),
        Commands::Describe { id, lang } => describe(&id, &lang),
    }
}
