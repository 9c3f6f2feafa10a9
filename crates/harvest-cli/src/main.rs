mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use harvest_client::ClientError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Harvest - turn a Credit Karma HAR capture into CSV exports

Usage:
  harvest export <har-path> <year>

How it works:
  1. Open your browser's network tab on the Credit Karma transactions
     page, scroll until every transaction has loaded, then save the
     session (Save all as HAR).
  2. Run `harvest export capture.har 2023`.
  3. Two files land in the current directory:
     mint_transactions_<year>.csv and creditkarma_transactions_<year>.csv.

Options:
  --out-dir <dir>   Write the CSV files somewhere else
  --dry-run         Validate the capture without writing files
  --json            Machine-readable output

Run `harvest export --help` for details.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }

            // Argument mistakes are a clean exit: print the usage text
            // and return without error status.
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, Some("export"));
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Ok(ExitCode::SUCCESS);
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

/// Strips clap's trailing boilerplate (Usage line, "For more
/// information" hint) so the recovery steps are the single source of
/// guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    // A missing input file is a user-facing message, not a crash.
    if error.code == "har_file_not_found" {
        return ExitCode::SUCCESS;
    }
    if error.code.starts_with("internal_") {
        return ExitCode::from(2);
    }
    ExitCode::from(1)
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}
