//! Paths command handler for enumerating every connection.

use anyhow::Result;

use flightpath_cli::output::OutputFormat;
use flightpath_lib::{plan_all_routes, AllRoutesRequest, FlightDataset, RankKey};

use super::route::friendly_error;

/// Arguments for the paths command.
#[derive(Debug, Clone)]
pub struct PathsCommandArgs {
    pub from: String,
    pub to: String,
    pub max_transfers: usize,
    pub rank_by: RankKey,
    pub limit: Option<usize>,
}

/// Handle the paths subcommand.
///
/// An empty result is not an error; the renderer reports it instead.
pub fn handle_paths_command(
    dataset: &FlightDataset,
    format: OutputFormat,
    args: &PathsCommandArgs,
) -> Result<()> {
    let request = AllRoutesRequest {
        start: args.from.clone(),
        goal: args.to.clone(),
        max_transfers: args.max_transfers,
        rank_by: args.rank_by,
    };
    let plan = plan_all_routes(dataset, &request).map_err(friendly_error)?;

    print!("{}", format.render_all_routes(dataset, &plan, args.limit)?);
    Ok(())
}
