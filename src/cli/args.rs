//! Command-line argument parsing for the regionswitch CLI.
//!
//! This module turns the raw argument list into a [`CliCommand`]. Region
//! arguments are validated here so commands only see well-formed codes.

use crate::domain::{RegionCode, Token};
use crate::error::SwitchError;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// List stored regions with masked tokens
    Tokens,
    /// Store a token for a region
    Store { region: RegionCode, token: Token },
    /// Check the stored token for a region against the identity endpoint
    Validate { region: RegionCode },
    /// Print the region a navigation target asks for
    Resolve {
        url: String,
        current: Option<RegionCode>,
    },
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: regionswitch <COMMAND>

Commands:
  tokens                              List stored regions with masked tokens
  store <REGION> <TOKEN>              Store a session token for a region
  validate <REGION>                   Check the stored token for a region
  resolve <URL> [--current <REGION>]  Print the region a URL asks for

Options:
  -h, --help     Print help
  -V, --version  Print version";

/// Parse command-line arguments and return the command to run.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use regionswitch::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["regionswitch".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, SwitchError>
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let mut args = args.skip(1);

    let Some(first) = args.next() else {
        return Ok(CliCommand::Help);
    };

    match first.as_str() {
        "--version" | "-V" => Ok(CliCommand::Version),
        "--help" | "-h" | "help" => Ok(CliCommand::Help),
        "tokens" => Ok(CliCommand::Tokens),
        "store" => {
            let region = required(&mut args, "store", "REGION")?.parse()?;
            let token = required(&mut args, "store", "TOKEN")?;
            Ok(CliCommand::Store {
                region,
                token: Token::new(token),
            })
        }
        "validate" => {
            let region = required(&mut args, "validate", "REGION")?.parse()?;
            Ok(CliCommand::Validate { region })
        }
        "resolve" => {
            let url = required(&mut args, "resolve", "URL")?;
            let mut current = None;
            while let Some(flag) = args.next() {
                match flag.as_str() {
                    "--current" => {
                        current = Some(required(&mut args, "--current", "REGION")?.parse()?);
                    }
                    other => {
                        return Err(SwitchError::Config(format!(
                            "unexpected argument '{}' for resolve",
                            other
                        )))
                    }
                }
            }
            Ok(CliCommand::Resolve { url, current })
        }
        other => Err(SwitchError::Config(format!(
            "unknown command '{}', see --help",
            other
        ))),
    }
}

fn required<I>(args: &mut I, command: &str, name: &str) -> Result<String, SwitchError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| SwitchError::Config(format!("{} requires <{}>", command, name)))
}
