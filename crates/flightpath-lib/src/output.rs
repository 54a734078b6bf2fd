use std::fmt::Write;

use serde::Serialize;

use crate::comparison::RouteComparison;
use crate::dataset::FlightDataset;
use crate::flight::{CityCode, Connection, CostKey};

/// Classifies the query that produced a route summary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutputKind {
    Cheapest,
    Fastest,
    Option,
}

impl RouteOutputKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            RouteOutputKind::Cheapest => "Cheapest route",
            RouteOutputKind::Fastest => "Fastest route",
            RouteOutputKind::Option => "Option",
        }
    }

    /// Summary kind for an optimal route under `optimization`.
    pub fn for_optimization(optimization: CostKey) -> Self {
        match optimization {
            CostKey::Price => RouteOutputKind::Cheapest,
            CostKey::Duration => RouteOutputKind::Fastest,
        }
    }
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// City at either end of a leg or route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub code: CityCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn resolve(dataset: &FlightDataset, code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: dataset.city_name(code).map(str::to_string),
        }
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }
}

/// One flight of a summarised route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteLeg {
    pub index: usize,
    pub flight_id: String,
    pub airline: String,
    pub from: RouteEndpoint,
    pub to: RouteEndpoint,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: f64,
    pub duration: f64,
}

/// Structured representation of a connection that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub kind: RouteOutputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub transfers: usize,
    pub total_price: f64,
    pub total_duration: f64,
    pub legs: Vec<RouteLeg>,
}

impl RouteSummary {
    /// Convert a [`Connection`] into a summary with resolved city names.
    ///
    /// `start` and `goal` are passed explicitly because a zero-flight
    /// connection carries no endpoints of its own.
    pub fn from_connection(
        kind: RouteOutputKind,
        dataset: &FlightDataset,
        start: &str,
        goal: &str,
        connection: &Connection,
    ) -> Self {
        let legs = connection
            .flights
            .iter()
            .enumerate()
            .map(|(index, flight)| RouteLeg {
                index: index + 1,
                flight_id: flight.id.clone(),
                airline: flight.airline.clone(),
                from: RouteEndpoint::resolve(dataset, &flight.from),
                to: RouteEndpoint::resolve(dataset, &flight.to),
                departure_time: flight.departure_time.clone(),
                arrival_time: flight.arrival_time.clone(),
                price: flight.price,
                duration: flight.duration,
            })
            .collect();

        Self {
            kind,
            rank: None,
            start: RouteEndpoint::resolve(dataset, start),
            goal: RouteEndpoint::resolve(dataset, goal),
            transfers: connection.transfers,
            total_price: connection.total_price,
            total_duration: connection.total_duration,
            legs,
        }
    }

    /// Attach a 1-based position within a ranked listing.
    pub fn with_rank(mut self, rank: usize) -> Self {
        self.rank = Some(rank);
        self
    }

    /// `A → B → C` chain of city codes.
    pub fn city_chain(&self) -> String {
        let mut codes: Vec<&str> = Vec::with_capacity(self.legs.len() + 1);
        match self.legs.first() {
            Some(first) => codes.push(&first.from.code),
            None => codes.push(&self.start.code),
        }
        codes.extend(self.legs.iter().map(|leg| leg.to.code.as_str()));
        codes.join(" → ")
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn heading(&self) -> String {
        match self.rank {
            Some(rank) => format!("{} #{}", self.kind.label(), rank),
            None => self.kind.label().to_string(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{}: {} -> {}",
            self.heading(),
            self.start.display_name(),
            self.goal.display_name()
        );

        if self.legs.is_empty() {
            let _ = writeln!(buffer, "  already at destination");
            return buffer;
        }

        let _ = writeln!(
            buffer,
            "  {} | {} | {} | {}",
            self.city_chain(),
            format_price(self.total_price),
            format_duration(self.total_duration),
            format_transfers(self.transfers)
        );
        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "  {:>2}. {:<5} {:<10} {} -> {}  {}-{}  {} {}",
                leg.index,
                leg.flight_id,
                leg.airline,
                leg.from.code,
                leg.to.code,
                leg.departure_time,
                leg.arrival_time,
                format_price(leg.price),
                format_duration(leg.duration)
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**{}** _{} → {}_",
            self.heading(),
            self.start.display_name(),
            self.goal.display_name()
        );

        if self.legs.is_empty() {
            let _ = writeln!(buffer, "* already at destination");
            return buffer;
        }

        let _ = writeln!(
            buffer,
            "`{}` · **{}** · {} · {}",
            self.city_chain(),
            format_price(self.total_price),
            format_duration(self.total_duration),
            format_transfers(self.transfers)
        );
        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** `{}` {} → {} ({}–{}, {}, {})",
                leg.index,
                leg.airline,
                leg.flight_id,
                leg.from.display_name(),
                leg.to.display_name(),
                leg.departure_time,
                leg.arrival_time,
                format_price(leg.price),
                format_duration(leg.duration)
            );
        }
        buffer
    }
}

impl RouteComparison {
    /// Plain-text explanation of why the optimal connection wins.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let metric = |value: f64| format_metric(self.optimization, value);

        let _ = writeln!(
            buffer,
            "Optimal: {} ({})",
            connection_chain(&self.optimal),
            metric(self.optimization.total(&self.optimal))
        );
        if self.alternatives.is_empty() {
            let _ = writeln!(buffer, "No direct or one-stop alternatives.");
            return buffer;
        }
        for (index, alternative) in self.alternatives.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "Alternative #{}: {} ({}, +{} / +{}%, {})",
                index + 1,
                connection_chain(&alternative.connection),
                metric(self.optimization.total(&alternative.connection)),
                metric(alternative.savings),
                alternative.savings_percent,
                format_transfers(alternative.connection.transfers)
            );
        }
        buffer
    }
}

fn connection_chain(connection: &Connection) -> String {
    connection.cities().join(" → ")
}

fn format_metric(optimization: CostKey, value: f64) -> String {
    match optimization {
        CostKey::Price => format_price(value),
        CostKey::Duration => format_duration(value),
    }
}

/// Format minutes as `Xh Ym`.
pub fn format_duration(minutes: f64) -> String {
    let total = minutes.round().max(0.0) as u64;
    format!("{}h {}m", total / 60, total % 60)
}

/// Format a price as whole dollars, or with cents when fractional.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}

fn format_transfers(transfers: usize) -> String {
    match transfers {
        0 => "direct".to_string(),
        1 => "1 transfer".to_string(),
        n => format!("{n} transfers"),
    }
}
