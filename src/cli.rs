//! Command line arguments.
//!
//! `subnet-calc <address>/<prefix> [--json]`

use crate::error::CalcError;

pub const USAGE: &str = "usage: subnet-calc <address>/<prefix> [--json]";

/// How the summary is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The raw `<address>/<prefix>` argument.
    pub cidr: String,
    pub format: OutputFormat,
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Args, CalcError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut format = OutputFormat::Text;
        let mut positional = Vec::new();
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--json" => format = OutputFormat::Json,
                flag if flag.starts_with("--") => {
                    return Err(CalcError::MalformedInput(format!(
                        "unknown option {flag}; {USAGE}"
                    )));
                }
                _ => positional.push(arg.to_string()),
            }
        }
        log::trace!("args positional={positional:?} format={format:?}");

        match positional.len() {
            1 => Ok(Args {
                cidr: positional.remove(0),
                format,
            }),
            n => Err(CalcError::MalformedInput(format!(
                "expected 1 argument, got {n}; {USAGE}"
            ))),
        }
    }
}
