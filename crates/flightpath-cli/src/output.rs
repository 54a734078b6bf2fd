//! Output formatting for command results.
//!
//! Every command renders through [`OutputFormat`], which produces the full
//! text for stdout: a colored table or plain route listing, markdown, or
//! pretty-printed JSON.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use flightpath_lib::{
    format_duration, format_price, AllRoutesPlan, Flight, FlightDataset, RouteComparison,
    RouteOutputKind, RouteRenderMode, RoutePlan, RouteSummary, SortKey,
};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Markdown suitable for notes and chat.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    fn render_mode(self) -> RouteRenderMode {
        match self {
            OutputFormat::Rich => RouteRenderMode::RichText,
            _ => RouteRenderMode::PlainText,
        }
    }

    /// Render a flight listing.
    pub fn render_flights(
        self,
        flights: &[Flight],
        sort: SortKey,
        palette: ColorPalette,
    ) -> Result<String> {
        if self == OutputFormat::Json {
            return to_json(&flights);
        }

        let mut buffer = String::new();
        if flights.is_empty() {
            let _ = writeln!(buffer, "No flights found.");
            return Ok(buffer);
        }

        let _ = writeln!(
            buffer,
            "{}{} flights (sorted by {}){}",
            palette.white_bold,
            flights.len(),
            sort,
            palette.reset
        );
        if self == OutputFormat::Rich {
            let _ = writeln!(
                buffer,
                "| ID | Airline | From | To | Departs | Arrives | Price | Duration |"
            );
            let _ = writeln!(buffer, "|---|---|---|---|---|---|---|---|");
            for flight in flights {
                let _ = writeln!(
                    buffer,
                    "| {} | {} | {} | {} | {} | {} | {} | {} |",
                    flight.id,
                    flight.airline,
                    flight.from,
                    flight.to,
                    flight.departure_time,
                    flight.arrival_time,
                    format_price(flight.price),
                    format_duration(flight.duration)
                );
            }
            return Ok(buffer);
        }

        let _ = writeln!(
            buffer,
            "{:<6} {:<10} {:<4} {:<4} {:<5} {:<5} {:>8} {:>8}",
            "ID", "Airline", "From", "To", "Dep", "Arr", "Price", "Duration"
        );
        for flight in flights {
            let _ = writeln!(
                buffer,
                "{}{:<6}{} {:<10} {:<4} {:<4} {:<5} {:<5} {}{:>8}{} {}{:>8}{}",
                palette.gray,
                flight.id,
                palette.reset,
                flight.airline,
                flight.from,
                flight.to,
                flight.departure_time,
                flight.arrival_time,
                palette.green,
                format_price(flight.price),
                palette.reset,
                palette.cyan,
                format_duration(flight.duration),
                palette.reset
            );
        }
        Ok(buffer)
    }

    /// Render the city catalog.
    pub fn render_cities(self, dataset: &FlightDataset) -> Result<String> {
        if self == OutputFormat::Json {
            return to_json(&dataset.cities());
        }

        let mut buffer = String::new();
        let _ = writeln!(buffer, "Cities ({}):", dataset.cities().len());
        for city in dataset.cities() {
            match self {
                OutputFormat::Rich => {
                    let _ = writeln!(buffer, "* `{}` {}", city.code, city.name);
                }
                _ => {
                    let _ = writeln!(buffer, "{:<5} {}", city.code, city.name);
                }
            }
        }
        Ok(buffer)
    }

    /// Render an optimal route, optionally followed by its comparison.
    pub fn render_route(
        self,
        dataset: &FlightDataset,
        plan: &RoutePlan,
        comparison: Option<&RouteComparison>,
    ) -> Result<String> {
        let summary = RouteSummary::from_connection(
            RouteOutputKind::for_optimization(plan.optimization),
            dataset,
            &plan.start,
            &plan.goal,
            &plan.connection,
        );

        if self == OutputFormat::Json {
            #[derive(Serialize)]
            struct RouteOutput<'a> {
                algorithm: flightpath_lib::RouteAlgorithm,
                route: &'a RouteSummary,
                #[serde(skip_serializing_if = "Option::is_none")]
                comparison: Option<&'a RouteComparison>,
            }
            return to_json(&RouteOutput {
                algorithm: plan.algorithm,
                route: &summary,
                comparison,
            });
        }

        let mut buffer = summary.render(self.render_mode());
        if let Some(comparison) = comparison {
            buffer.push('\n');
            buffer.push_str(&comparison.render_plain());
        }
        Ok(buffer)
    }

    /// Render a ranked list of connections, keeping at most `limit`.
    pub fn render_all_routes(
        self,
        dataset: &FlightDataset,
        plan: &AllRoutesPlan,
        limit: Option<usize>,
    ) -> Result<String> {
        let shown = limit.unwrap_or(plan.connections.len());
        let summaries: Vec<RouteSummary> = plan
            .connections
            .iter()
            .take(shown)
            .enumerate()
            .map(|(index, connection)| {
                RouteSummary::from_connection(
                    RouteOutputKind::Option,
                    dataset,
                    &plan.start,
                    &plan.goal,
                    connection,
                )
                .with_rank(index + 1)
            })
            .collect();

        if self == OutputFormat::Json {
            #[derive(Serialize)]
            struct AllRoutesOutput<'a> {
                algorithm: flightpath_lib::RouteAlgorithm,
                max_transfers: usize,
                rank_by: flightpath_lib::RankKey,
                total: usize,
                routes: &'a [RouteSummary],
            }
            return to_json(&AllRoutesOutput {
                algorithm: plan.algorithm,
                max_transfers: plan.max_transfers,
                rank_by: plan.rank_by,
                total: plan.connections.len(),
                routes: &summaries,
            });
        }

        let mut buffer = String::new();
        if summaries.is_empty() {
            let _ = writeln!(
                buffer,
                "No routes found between {} and {} with at most {} transfers.",
                plan.start, plan.goal, plan.max_transfers
            );
            return Ok(buffer);
        }

        let _ = writeln!(
            buffer,
            "{} routes from {} to {} (max {} transfers, ranked by {}), showing {}",
            plan.connections.len(),
            plan.start,
            plan.goal,
            plan.max_transfers,
            plan.rank_by,
            summaries.len()
        );
        for summary in &summaries {
            buffer.push('\n');
            buffer.push_str(&summary.render(self.render_mode()));
        }
        Ok(buffer)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightpath_lib::{plan_all_routes, plan_route, AllRoutesRequest, RouteRequest};

    #[test]
    fn text_flight_table_has_header_and_rows() {
        let dataset = FlightDataset::sample();
        let flights = dataset.filter_flights(Some("NYC"), Some("SFO"));
        let text = OutputFormat::Text
            .render_flights(&flights, SortKey::Price, ColorPalette::plain())
            .expect("renders");
        assert!(text.starts_with("2 flights (sorted by price)"));
        assert!(text.contains("F060"));
        assert!(text.contains("$450"));
        assert!(text.contains("6h 0m"));
    }

    #[test]
    fn empty_flight_listing_says_so() {
        let text = OutputFormat::Rich
            .render_flights(&[], SortKey::Airline, ColorPalette::plain())
            .expect("renders");
        assert_eq!(text, "No flights found.\n");
    }

    #[test]
    fn json_route_includes_algorithm() {
        let dataset = FlightDataset::sample();
        let plan = plan_route(&dataset, &RouteRequest::cheapest("NYC", "DEN")).expect("route");
        let text = OutputFormat::Json
            .render_route(&dataset, &plan, None)
            .expect("renders");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["algorithm"], "dijkstra");
        assert_eq!(value["route"]["total_price"], 200.0);
        assert!(value.get("comparison").is_none());
    }

    #[test]
    fn limit_truncates_listing_but_not_total() {
        let dataset = FlightDataset::sample();
        let plan =
            plan_all_routes(&dataset, &AllRoutesRequest::new("NYC", "DEN")).expect("routes");
        let text = OutputFormat::Text
            .render_all_routes(&dataset, &plan, Some(2))
            .expect("renders");
        assert!(text.starts_with("331 routes from NYC to DEN"));
        assert!(text.contains("Option #2"));
        assert!(!text.contains("Option #3"));
    }
}
