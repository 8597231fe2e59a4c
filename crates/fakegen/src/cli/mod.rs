//! Command-line front end for the generator.
//!
//! The binary only parses arguments and wires standard streams; everything
//! else lives here so it can be exercised without spawning a process.

mod settings;

use std::io::Write;

use clap::Parser;
use thiserror::Error;

use crate::arguments::Arguments;
use crate::documentor::{DocumentorError, Documentor};
use crate::error::GeneratorError;
use crate::generator::Generator;
use crate::providers;
use crate::template::render_value;

pub use settings::{FakegenSettings, load_settings};

/// `fakegen` command arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "fakegen",
    about = "Print fake data from a formatter or a {{ token }} template",
    version
)]
pub struct CliArgs {
    /// Formatter to invoke, e.g. `name` or `words`.
    #[arg(value_name = "formatter", conflicts_with_all = ["template", "list"])]
    pub formatter: Option<String>,
    /// Positional arguments passed to the formatter.
    #[arg(value_name = "arg", requires = "formatter")]
    pub arguments: Vec<String>,
    /// Keyword argument passed to the formatter; may be repeated.
    #[arg(long = "kw", value_name = "key=value", value_parser = parse_keyword, requires = "formatter")]
    pub keywords: Vec<(String, String)>,
    /// Template whose tokens are replaced by formatter output.
    #[arg(long, short = 't', value_name = "text", conflicts_with = "list")]
    pub template: Option<String>,
    /// List providers and their formatters, optionally for one provider.
    #[arg(long, value_name = "provider")]
    pub list: Option<Option<String>>,
    /// Seed for reproducible output; overrides `FAKEGEN_SEED`.
    #[arg(long, value_name = "seed")]
    pub seed: Option<u64>,
    /// Number of values to print; overrides `FAKEGEN_COUNT`.
    #[arg(long, short = 'n', value_name = "count")]
    pub count: Option<usize>,
}

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print values from a formatter.
    Format {
        /// Formatter name.
        name: String,
        /// Positional arguments.
        positional: Vec<String>,
        /// Keyword arguments.
        keywords: Vec<(String, String)>,
    },
    /// Print template expansions.
    Template(String),
    /// Print formatter listings.
    List(Option<String>),
}

impl CliArgs {
    /// Returns the command requested by these arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingCommand`] when neither a formatter, a
    /// template nor `--list` was given.
    pub fn command(&self) -> Result<Command, CliError> {
        if let Some(provider) = &self.list {
            return Ok(Command::List(provider.clone()));
        }
        if let Some(template) = &self.template {
            return Ok(Command::Template(template.clone()));
        }
        self.formatter
            .as_ref()
            .map(|name| Command::Format {
                name: name.clone(),
                positional: self.arguments.clone(),
                keywords: self.keywords.clone(),
            })
            .ok_or(CliError::MissingCommand)
    }
}

/// Errors surfaced by the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// No formatter, template or listing was requested.
    #[error("nothing to do: pass a formatter name, --template or --list")]
    MissingCommand,
    /// Settings could not be loaded.
    #[error("invalid settings: {message}")]
    Settings {
        /// Description of the settings failure.
        message: String,
    },
    /// Output could not be written.
    #[error("failed to write output: {message}")]
    Output {
        /// Description of the I/O failure.
        message: String,
    },
    /// Formatting or templating failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// Listing failed.
    #[error(transparent)]
    Documentor(#[from] DocumentorError),
}

/// Builds a generator with the built-in providers.
#[must_use]
pub fn build_generator(seed: Option<u64>) -> Generator {
    let mut generator = seed.map_or_else(Generator::new, Generator::with_seed);
    providers::register_defaults(&mut generator);
    generator
}

/// Runs one invocation, writing results to `out`.
///
/// Command-line flags take precedence over `settings`.
///
/// # Errors
///
/// Returns [`CliError`] when the command is missing, a formatter is unknown
/// or fails, or output cannot be written.
pub fn run<W: Write>(
    args: &CliArgs,
    settings: &FakegenSettings,
    out: &mut W,
) -> Result<(), CliError> {
    let command = args.command()?;
    let mut generator = build_generator(args.seed.or(settings.seed));
    let count = args.count.unwrap_or(settings.count);

    match command {
        Command::List(provider) => {
            let mut documentor = Documentor::new(&mut generator);
            let docs = match provider {
                Some(name) => vec![documentor.document_provider(&name)?],
                None => documentor.document_all(),
            };
            for doc in docs {
                write!(out, "{doc}").map_err(output_error)?;
            }
        }
        Command::Template(template) => {
            for _ in 0..count {
                let line = generator.parse(&template)?;
                writeln!(out, "{line}").map_err(output_error)?;
            }
        }
        Command::Format {
            name,
            positional,
            keywords,
        } => {
            let arguments = to_arguments(positional, keywords);
            for _ in 0..count {
                let value = generator.format(&name, &arguments)?;
                writeln!(out, "{}", render_value(&value)).map_err(output_error)?;
            }
        }
    }
    Ok(())
}

/// Converts command-line strings into formatter arguments.
///
/// Values that parse as JSON scalars (numbers, booleans, `null`) are passed
/// as such; anything else is passed as a string.
fn to_arguments(positional: Vec<String>, keywords: Vec<(String, String)>) -> Arguments {
    let mut arguments = Arguments::new();
    for value in positional {
        arguments.push_positional(coerce(value));
    }
    for (key, value) in keywords {
        arguments.insert_keyword(key, coerce(value));
    }
    arguments
}

fn coerce(raw: String) -> serde_json::Value {
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) if !value.is_object() && !value.is_array() && !value.is_string() => value,
        _ => serde_json::Value::String(raw),
    }
}

fn parse_keyword(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("missing keyword name in '{raw}'"));
    }
    Ok((key.to_owned(), value.to_owned()))
}

fn output_error(err: std::io::Error) -> CliError {
    CliError::Output {
        message: err.to_string(),
    }
}
