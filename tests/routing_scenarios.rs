//! End-to-end routing scenarios over small facility layouts.

use aeroroute::prelude::*;
use geo::{Distance, Geodesic, Geometry, Point, polygon};

fn empty_zones() -> ZoneLayers {
    ZoneLayers::new(RegionSet::empty("no_fly"), RegionSet::empty("avoidance"))
}

fn rect(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> Geometry<f64> {
    Geometry::Polygon(polygon![
        (x: lon_min, y: lat_min),
        (x: lon_max, y: lat_min),
        (x: lon_max, y: lat_max),
        (x: lon_min, y: lat_max),
    ])
}

fn km(from: (f64, f64), to: (f64, f64)) -> f64 {
    // arguments are (lat, lon)
    Geodesic.distance(Point::new(from.1, from.0), Point::new(to.1, to.0)) / 1000.0
}

fn labels(itinerary: &Itinerary) -> Vec<&str> {
    itinerary.stops.iter().map(|s| s.label.as_str()).collect()
}

/// Three facilities on a diagonal, spaced so that a tight range threshold
/// only allows consecutive hops: the route must chain Start-A-B-C-End and
/// cost exactly the sum of consecutive geodesic distances.
#[test]
fn linear_chain_visits_every_facility() {
    let a = (5.58, -0.13);
    let b = (5.60, -0.15);
    let c = (5.62, -0.17);
    let start = (5.573, -0.123);
    let end = (5.627, -0.177);
    let facilities = vec![
        Facility::new(0, a.0, a.1, Some("A".into())),
        Facility::new(1, b.0, b.1, Some("B".into())),
        Facility::new(2, c.0, c.1, Some("C".into())),
    ];
    let zones = empty_zones();

    // consecutive hops are ~1.1-3.2 km; skipping a facility needs > 3.5 km
    let range_km = 3.5;
    let graph = build_flight_graph(&facilities, &zones, range_km, &DistancePolicy).unwrap();

    let outcome = plan_route(&graph, start, end, &zones, range_km, &DistancePolicy).unwrap();
    let RouteOutcome::Found(itinerary) = outcome else {
        panic!("expected a route, got {outcome:?}");
    };

    assert_eq!(
        labels(&itinerary),
        vec![
            "Start",
            "Charging Station 0",
            "Charging Station 1",
            "Charging Station 2",
            "End"
        ]
    );

    let expected = km(start, a) + km(a, b) + km(b, c) + km(c, end);
    assert!((itinerary.total_weight - expected).abs() < 1e-9);
}

/// An avoidance zone covers the direct corridor between A and C. The
/// penalized direct edges cost more than the two-hop detour through B,
/// which sits well off the corridor.
#[test]
fn avoidance_zone_forces_detour_through_middle_facility() {
    let facilities = vec![
        Facility::new(0, 5.58, -0.13, Some("A".into())),
        Facility::new(1, 5.63, -0.12, Some("B".into())),
        Facility::new(2, 5.62, -0.17, Some("C".into())),
    ];
    let start = (5.578, -0.128);
    let end = (5.622, -0.172);
    let range_km = 7.0;

    // without the zone, the route goes straight and skips B
    let clear = empty_zones();
    let graph = build_flight_graph(&facilities, &clear, range_km, &DistancePolicy).unwrap();
    let outcome = plan_route(&graph, start, end, &clear, range_km, &DistancePolicy).unwrap();
    let RouteOutcome::Found(direct) = outcome else {
        panic!("expected a route, got {outcome:?}");
    };
    assert!(!direct.stops.iter().any(|s| s.label == "Charging Station 1"));

    // with an avoidance rectangle over the A-C midline, B wins
    let mut zones = empty_zones();
    zones.avoidance = RegionSet::new("avoidance", vec![rect(-0.16, 5.59, -0.14, 5.61)]);
    let graph = build_flight_graph(&facilities, &zones, range_km, &DistancePolicy).unwrap();

    // the direct A-C edge exists but is penalized tenfold
    let a_c = graph.edge_weight(0, 2).unwrap();
    assert!((a_c - 10.0 * km((5.58, -0.13), (5.62, -0.17))).abs() < 1e-9);

    let outcome = plan_route(&graph, start, end, &zones, range_km, &DistancePolicy).unwrap();
    let RouteOutcome::Found(detour) = outcome else {
        panic!("expected a route, got {outcome:?}");
    };
    assert!(detour.stops.iter().any(|s| s.label == "Charging Station 1"));
    assert!(detour.total_weight < a_c);
}

/// A no-fly zone swallows facility B entirely: B is never a node, and with
/// no alternative facility in range the request reports "no route".
#[test]
fn no_fly_zone_around_only_relay_yields_no_route() {
    let facilities = vec![
        Facility::new(0, 5.58, -0.13, Some("A".into())),
        Facility::new(1, 5.60, -0.15, Some("B".into())),
        Facility::new(2, 5.62, -0.17, Some("C".into())),
    ];
    let mut zones = empty_zones();
    zones.no_fly = RegionSet::new("no_fly", vec![rect(-0.155, 5.595, -0.145, 5.605)]);

    // range covers A-B and B-C but not A-C
    let range_km = 4.0;
    let graph = build_flight_graph(&facilities, &zones, range_km, &DistancePolicy).unwrap();
    assert!(!graph.contains(1));

    let outcome = plan_route(
        &graph,
        (5.578, -0.128),
        (5.622, -0.172),
        &zones,
        range_km,
        &DistancePolicy,
    )
    .unwrap();
    assert_eq!(outcome, RouteOutcome::NoRoute);
}

/// Same blocked relay, but an off-corridor facility D offers a legal
/// detour, so the route goes around the zone instead of failing.
#[test]
fn no_fly_zone_is_routed_around_when_an_alternative_exists() {
    let facilities = vec![
        Facility::new(0, 5.58, -0.13, Some("A".into())),
        Facility::new(1, 5.60, -0.15, Some("B".into())),
        Facility::new(2, 5.62, -0.17, Some("C".into())),
        Facility::new(3, 5.63, -0.12, Some("D".into())),
    ];
    let mut zones = empty_zones();
    zones.no_fly = RegionSet::new("no_fly", vec![rect(-0.1563, 5.5937, -0.1421, 5.6058)]);

    let range_km = 7.0;
    let graph = build_flight_graph(&facilities, &zones, range_km, &DistancePolicy).unwrap();
    assert!(!graph.contains(1));
    // the direct A-C connection crosses the zone and must not exist
    assert!(graph.edge_weight(0, 2).is_none());

    let outcome = plan_route(
        &graph,
        (5.578, -0.128),
        (5.622, -0.172),
        &zones,
        range_km,
        &DistancePolicy,
    )
    .unwrap();
    let RouteOutcome::Found(itinerary) = outcome else {
        panic!("expected a route, got {outcome:?}");
    };
    assert!(itinerary.stops.iter().any(|s| s.label == "Charging Station 3"));
    assert!(!itinerary.stops.iter().any(|s| s.label == "Charging Station 1"));
}

/// Requesting a route from a point inside a no-fly zone returns the
/// blocked outcome before any path computation.
#[test]
fn start_inside_no_fly_zone_is_blocked() {
    let facilities = vec![
        Facility::new(0, 5.58, -0.13, Some("A".into())),
        Facility::new(1, 5.60, -0.15, Some("B".into())),
    ];
    let mut zones = empty_zones();
    zones.no_fly = RegionSet::new("no_fly", vec![rect(-0.20, 5.55, -0.18, 5.57)]);

    let graph = build_flight_graph(&facilities, &zones, 7.0, &DistancePolicy).unwrap();

    let outcome = plan_route(
        &graph,
        (5.56, -0.19), // inside the zone
        (5.60, -0.15),
        &zones,
        7.0,
        &DistancePolicy,
    )
    .unwrap();
    assert_eq!(
        outcome,
        RouteOutcome::Blocked {
            label: "Start".to_string()
        }
    );

    let outcome = plan_route(
        &graph,
        (5.60, -0.15),
        (5.56, -0.19),
        &zones,
        7.0,
        &DistancePolicy,
    )
    .unwrap();
    assert_eq!(
        outcome,
        RouteOutcome::Blocked {
            label: "End".to_string()
        }
    );
}

/// The cached graph is a faithful stand-in for a freshly built one.
#[test]
fn routing_over_a_reloaded_graph_matches_the_original() {
    let facilities = vec![
        Facility::new(0, 5.58, -0.13, Some("A".into())),
        Facility::new(1, 5.60, -0.15, Some("B".into())),
        Facility::new(2, 5.62, -0.17, Some("C".into())),
    ];
    let zones = empty_zones();
    let graph = build_flight_graph(&facilities, &zones, 3.5, &DistancePolicy).unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    save_graph(&graph, file.path()).unwrap();
    let reloaded = load_graph(file.path()).unwrap().unwrap();

    let start = (5.573, -0.123);
    let end = (5.627, -0.177);
    let fresh = plan_route(&graph, start, end, &zones, 3.5, &DistancePolicy).unwrap();
    let cached = plan_route(&reloaded, start, end, &zones, 3.5, &DistancePolicy).unwrap();
    assert_eq!(fresh, cached);
}

/// The segmented policy plugs into the same pipeline and still respects
/// no-fly legality.
#[test]
fn segmented_policy_routes_end_to_end() {
    let facilities = vec![
        Facility::new(0, 5.58, -0.13, Some("A".into())),
        Facility::new(1, 5.60, -0.15, Some("B".into())),
        Facility::new(2, 5.62, -0.17, Some("C".into())),
    ];
    let mut zones = empty_zones();
    zones.roads = RegionSet::new("roads", vec![rect(-0.16, 5.59, -0.14, 5.61)]);

    let policy = SegmentedPolicy::new(0.001);
    let graph = build_flight_graph(&facilities, &zones, 3.5, &policy).unwrap();
    assert!(graph.edge_count() > 0);

    let outcome = plan_route(
        &graph,
        (5.573, -0.123),
        (5.627, -0.177),
        &zones,
        3.5,
        &policy,
    )
    .unwrap();
    let RouteOutcome::Found(itinerary) = outcome else {
        panic!("expected a route, got {outcome:?}");
    };
    assert!(itinerary.total_weight > 0.0);
    assert_eq!(itinerary.stops.first().unwrap().label, "Start");
    assert_eq!(itinerary.stops.last().unwrap().label, "End");
}
