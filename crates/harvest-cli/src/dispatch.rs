use harvest_client::commands;
use harvest_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Export {
            har_path,
            year,
            out_dir,
            dry_run,
            json: _,
        } => commands::export::run(har_path.clone(), *year, out_dir.clone(), *dry_run),
    }
}
