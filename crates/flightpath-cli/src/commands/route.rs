//! Route command handler for the single optimal connection.

use anyhow::Result;

use flightpath_cli::output::OutputFormat;
use flightpath_lib::{
    compare_alternatives, plan_route, CostKey, Error as RouteError, FlightDataset, RouteRequest,
    DEFAULT_ALTERNATIVES,
};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting city code or name.
    pub from: String,
    /// Destination city code or name.
    pub to: String,
    /// Cost to minimise.
    pub optimize: CostKey,
    /// Append a comparison with the runner-up connections.
    pub compare: bool,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from.clone(),
            goal: self.to.clone(),
            optimization: self.optimize,
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    dataset: &FlightDataset,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let plan = plan_route(dataset, &args.to_request()).map_err(friendly_error)?;

    let comparison = args.compare.then(|| {
        compare_alternatives(
            dataset.flights(),
            &plan.connection,
            plan.optimization,
            DEFAULT_ALTERNATIVES,
        )
    });

    print!(
        "{}",
        format.render_route(dataset, &plan, comparison.as_ref())?
    );
    Ok(())
}

/// Turn lookup failures into messages aimed at the person at the terminal.
pub(crate) fn friendly_error(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownCity { name, suggestions } => {
            anyhow::anyhow!(format_unknown_city_message(&name, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(
                "No route found between {} and {}. Try `flightpath paths` with a larger --max-transfers.",
                start,
                goal
            )
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_city_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown city '{}'.", name);
    match suggestions {
        [] => message.push_str(" Run `flightpath cities` to list known cities."),
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}
