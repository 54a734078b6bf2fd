//! Cities command handler.

use anyhow::Result;

use flightpath_cli::output::OutputFormat;
use flightpath_lib::FlightDataset;

/// Handle the cities subcommand.
pub fn handle_cities_command(dataset: &FlightDataset, format: OutputFormat) -> Result<()> {
    print!("{}", format.render_cities(dataset)?);
    Ok(())
}
