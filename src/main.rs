//! Inputguard command-line wrapper.
//!
//! Runs one validator over command-line input and reports the outcome:
//! exit 0 when valid, 1 when rejected, 2 on usage or configuration errors.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use inputguard::{
    validate_env_list, validate_pem_encoded_key, validate_strings, Config, UrlPolicy,
    ValidationError,
};

#[derive(Parser, Debug)]
#[command(name = "inputguard")]
#[command(about = "Validate environment, URLs, strings, accounts and PEM key material")]
#[command(version)]
struct Args {
    /// JSON configuration file
    #[arg(long, global = true, env = "INPUTGUARD_CONFIG")]
    config: Option<PathBuf>,

    /// Print the outcome as a JSON object
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that environment variables are set
    Env {
        /// Variable names
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Check a URL's scheme, path and components
    Url {
        url: String,
        /// Allowed scheme (repeatable); defaults to the configured set
        #[arg(long = "scheme")]
        schemes: Vec<String>,
        /// Required path; defaults to the configured path
        #[arg(long)]
        path: Option<String>,
    },
    /// Check strings against the safe character class
    Strings { values: Vec<String> },
    /// Check a username/password pair
    Account { username: String, password: String },
    /// Check PEM-armored or raw base64 key material
    Pem {
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        value: Option<String>,
        /// Read the candidate from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

/// Result of one validator run.
#[derive(Debug, Serialize)]
struct Outcome {
    ok: bool,
    error: Option<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<Vec<String>>,
}

impl Outcome {
    fn from_result(result: Result<(), ValidationError>) -> Self {
        Self {
            ok: result.is_ok(),
            error: result.err(),
            missing: None,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("inputguard: {err}");
                return ExitCode::from(EXIT_USAGE);
            }
        },
        None => Config::default(),
    };

    inputguard::observability::init_tracing_with(&config.observability);

    let outcome = match run(args.command, &config) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("inputguard: {err}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    report(&outcome, args.json)
}

fn run(command: Command, config: &Config) -> inputguard::Result<Outcome> {
    let outcome = match command {
        Command::Env { names } => {
            let (missing, result) = validate_env_list(&names);
            Outcome {
                missing: Some(missing.into_iter().collect()),
                ..Outcome::from_result(result)
            }
        }
        Command::Url { url, schemes, path } => {
            let policy = UrlPolicy {
                allowed_schemes: if schemes.is_empty() {
                    config.url.allowed_schemes.clone()
                } else {
                    schemes.into_iter().collect()
                },
                required_path: path.unwrap_or_else(|| config.url.required_path.clone()),
            };
            Outcome::from_result(policy.validate(&url))
        }
        Command::Strings { values } => Outcome::from_result(validate_strings(&values)),
        Command::Account { username, password } => {
            Outcome::from_result(config.account.validate(&username, &password))
        }
        Command::Pem { value, file } => {
            let candidate = match (value, file) {
                (Some(value), _) => value,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => return Err(inputguard::Error::config("no PEM input given")),
            };
            Outcome::from_result(validate_pem_encoded_key(&candidate))
        }
    };
    Ok(outcome)
}

fn report(outcome: &Outcome, json: bool) -> ExitCode {
    ExitCode::from(emit(outcome, json))
}

const EXIT_VALID: u8 = 0;
const EXIT_INVALID: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// Print the outcome and return the process exit status.
fn emit(outcome: &Outcome, json: bool) -> u8 {
    if json {
        match serde_json::to_string(outcome) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                eprintln!("inputguard: {err}");
                return EXIT_USAGE;
            }
        }
    } else {
        match outcome.error {
            None => println!("ok"),
            Some(err) => {
                println!("invalid: {err}");
                if let Some(missing) = outcome.missing.as_ref().filter(|m| !m.is_empty()) {
                    println!("missing: {}", missing.join(", "));
                }
            }
        }
    }

    if outcome.ok {
        EXIT_VALID
    } else {
        EXIT_INVALID
    }
}
