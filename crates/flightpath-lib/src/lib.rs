//! Flightpath library entry points.
//!
//! This crate loads flight datasets, builds graph representations of them,
//! and runs the routing algorithms: a quicksort for flight listings and
//! rankings, Dijkstra for the cheapest or fastest connection, and a bounded
//! breadth-first enumeration of every connection. Higher-level consumers
//! (the CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod comparison;
pub mod dataset;
pub mod error;
pub mod flight;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod sort;

pub use comparison::{compare_alternatives, Alternative, RouteComparison, DEFAULT_ALTERNATIVES};
pub use dataset::{default_dataset_path, load_dataset, FlightDataset, DATASET_ENV_VAR};
pub use error::{Error, Result};
pub use flight::{City, CityCode, Connection, CostKey, Flight};
pub use graph::{build_graph, Graph};
pub use output::{
    format_duration, format_price, RouteEndpoint, RouteLeg, RouteOutputKind, RouteRenderMode,
    RouteSummary,
};
pub use path::{
    find_all_paths, find_all_paths_ranked, find_cheapest_path, find_fastest_path,
    find_optimal_path,
};
pub use routing::{
    plan_all_routes, plan_route, AllRoutesPlan, AllRoutesRequest, RouteAlgorithm, RoutePlan,
    RouteRequest, DEFAULT_MAX_TRANSFERS,
};
pub use sort::{quick_sort_by, rank_connections, sort_flights, RankKey, SortKey};
