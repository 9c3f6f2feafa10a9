use clap::{Parser, Subcommand};

/// Validates the year argument: exactly four digits, a plausible
/// calendar year.
pub fn parse_year(value: &str) -> Result<i32, String> {
    if value.len() != 4 || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err("year must be a four-digit number like 2023".to_string());
    }
    value
        .parse::<i32>()
        .map_err(|_| "year must be a four-digit number like 2023".to_string())
}

#[derive(Debug, Parser)]
#[command(name = "harvest", version, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a captured HAR session into Mint and Credit Karma CSV exports
    Export {
        /// Path to the captured .har file
        har_path: String,

        /// Calendar year to keep (YYYY)
        #[arg(value_parser = parse_year)]
        year: i32,

        /// Directory the CSV files are written to (default: current directory)
        #[arg(long = "out-dir")]
        out_dir: Option<String>,

        /// Validate the capture and report counts without writing files
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Emit the machine-readable JSON envelope instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
