use flightpath_lib::{
    plan_all_routes, plan_route, AllRoutesRequest, CostKey, Error, FlightDataset, RankKey,
    RouteAlgorithm, RouteRequest,
};

#[test]
fn cheapest_route_plan_resolves_names() {
    let dataset = FlightDataset::sample();
    let plan = plan_route(&dataset, &RouteRequest::cheapest("New York", "san francisco"))
        .expect("route exists");
    assert_eq!(plan.algorithm, RouteAlgorithm::Dijkstra);
    assert_eq!(plan.optimization, CostKey::Price);
    assert_eq!(plan.start, "NYC");
    assert_eq!(plan.goal, "SFO");
    assert_eq!(plan.hop_count(), 2);
    assert_eq!(plan.connection.total_price, 350.0);
}

#[test]
fn fastest_route_plan_uses_duration() {
    let dataset = FlightDataset::sample();
    let plan = plan_route(&dataset, &RouteRequest::fastest("NYC", "SFO")).expect("route exists");
    assert_eq!(plan.optimization, CostKey::Duration);
    assert_eq!(plan.connection.flight_ids(), vec!["F061"]);
}

#[test]
fn unknown_city_is_an_error() {
    let dataset = FlightDataset::sample();
    let err = plan_route(&dataset, &RouteRequest::cheapest("NYC", "Gotham")).expect_err("unknown");
    assert!(matches!(err, Error::UnknownCity { .. }));
}

#[test]
fn unreachable_destination_is_route_not_found() {
    let dataset = FlightDataset::from_json_reader(
        r#"{"flights": [
            {"id": "1", "from": "A", "to": "B", "airline": "X", "price": 1, "duration": 1,
             "departureTime": "", "arrivalTime": ""}
        ]}"#
        .as_bytes(),
    )
    .expect("valid");
    let err = plan_route(&dataset, &RouteRequest::cheapest("B", "A")).expect_err("unreachable");
    assert!(format!("{err}").contains("no route found"));
}

#[test]
fn same_city_plan_has_no_flights() {
    let dataset = FlightDataset::sample();
    let plan = plan_route(&dataset, &RouteRequest::cheapest("DEN", "Denver")).expect("trivial");
    assert_eq!(plan.hop_count(), 0);
}

#[test]
fn all_routes_default_allows_three_transfers() {
    let dataset = FlightDataset::sample();
    let request = AllRoutesRequest::new("NYC", "DEN");
    assert_eq!(request.max_transfers, 3);
    assert_eq!(request.max_hops(), 4);

    let plan = plan_all_routes(&dataset, &request).expect("plan");
    assert_eq!(plan.algorithm, RouteAlgorithm::Bfs);
    assert_eq!(plan.rank_by, RankKey::Price);
    assert_eq!(plan.connections.len(), 331);
    assert!(plan.connections.iter().all(|c| c.transfers <= 3));
    assert_eq!(plan.connections[0].total_price, 200.0);
}

#[test]
fn all_routes_with_no_transfers_lists_direct_flights() {
    let dataset = FlightDataset::sample();
    let request = AllRoutesRequest {
        max_transfers: 0,
        rank_by: RankKey::Duration,
        ..AllRoutesRequest::new("NYC", "SFO")
    };
    let plan = plan_all_routes(&dataset, &request).expect("plan");
    let ids: Vec<Vec<&str>> = plan.connections.iter().map(|c| c.flight_ids()).collect();
    assert_eq!(ids, vec![vec!["F061"], vec!["F060"]]);
}

#[test]
fn all_routes_between_same_city_is_empty() {
    let dataset = FlightDataset::sample();
    let plan = plan_all_routes(&dataset, &AllRoutesRequest::new("NYC", "NYC")).expect("plan");
    assert!(plan.connections.is_empty());
}
