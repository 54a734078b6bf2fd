//! Flights command handler for listing and sorting flights.

use anyhow::Result;
use tracing::debug;

use flightpath_cli::output::OutputFormat;
use flightpath_cli::terminal::ColorPalette;
use flightpath_lib::{sort_flights, FlightDataset, SortKey};

use super::route::friendly_error;

/// Handle the flights subcommand.
///
/// City filters accept either a code or a name and are resolved before
/// filtering, so a typo fails with suggestions instead of an empty table.
pub fn handle_flights_command(
    dataset: &FlightDataset,
    format: OutputFormat,
    from: Option<&str>,
    to: Option<&str>,
    sort: SortKey,
) -> Result<()> {
    let from = match from {
        Some(query) => Some(dataset.resolve_city(query).map_err(friendly_error)?.code.as_str()),
        None => None,
    };
    let to = match to {
        Some(query) => Some(dataset.resolve_city(query).map_err(friendly_error)?.code.as_str()),
        None => None,
    };

    let flights = sort_flights(&dataset.filter_flights(from, to), sort);
    debug!(count = flights.len(), %sort, "listing flights");

    print!(
        "{}",
        format.render_flights(&flights, sort, ColorPalette::detect())?
    );
    Ok(())
}
