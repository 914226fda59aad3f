use std::io::Cursor;

use courier::domain::{FleetSpec, OfferCatalog, Parcel};
use courier::runner::run_session;
use courier::solver::fleet_assignment::{assign_fleet, plan_fleet};

fn sample_batch() -> Vec<Parcel> {
    vec![
        Parcel::new("pkg1", 50.0, 30.0, 100.0),
        Parcel::new("pkg2", 75.0, 125.0, 100.0),
        Parcel::new("pkg3", 175.0, 100.0, 100.0),
        Parcel::new("pkg4", 110.0, 60.0, 100.0),
        Parcel::new("pkg5", 155.0, 95.0, 100.0),
    ]
}

fn times(parcels: &[Parcel]) -> Vec<(String, String)> {
    parcels
        .iter()
        .map(|p| {
            let time = p.delivery_time.map(|t| t.to_string()).unwrap_or_default();
            (p.id.clone(), time)
        })
        .collect()
}

fn expected(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(id, time)| (id.to_string(), time.to_string()))
        .collect()
}

#[test]
fn five_parcel_batch_on_two_vehicles() {
    let fleet = FleetSpec::new(2, 70.0, 200.0).unwrap();
    let assigned = assign_fleet(&sample_batch(), &fleet).unwrap();

    assert_eq!(
        times(&assigned),
        expected(&[
            ("pkg1", "3.98"),
            ("pkg2", "1.78"),
            ("pkg3", "1.42"),
            ("pkg4", "0.85"),
            ("pkg5", "4.19"),
        ])
    );
}

#[test]
fn trips_follow_priority_order() {
    let parcels = sample_batch();
    let fleet = FleetSpec::new(2, 70.0, 200.0).unwrap();
    let plan = plan_fleet(&parcels, &fleet).unwrap();

    let trips: Vec<Vec<&str>> = plan
        .trips
        .iter()
        .map(|t| t.deliveries.iter().map(|d| d.parcel_id.as_str()).collect())
        .collect();
    assert_eq!(
        trips,
        [vec!["pkg4", "pkg2"], vec!["pkg3"], vec!["pkg5"], vec!["pkg1"]]
    );
    assert!(plan.unassigned.is_empty());
}

#[test]
fn three_parcel_batch_pairs_the_light_ones() {
    let parcels = sample_batch()[..3].to_vec();
    let fleet = FleetSpec::new(2, 70.0, 200.0).unwrap();
    let assigned = assign_fleet(&parcels, &fleet).unwrap();

    assert_eq!(
        times(&assigned),
        expected(&[("pkg1", "0.42"), ("pkg2", "1.78"), ("pkg3", "1.42")])
    );
}

#[test]
fn single_vehicle_single_trip_round_trip_is_double_longest_leg() {
    let parcels = vec![
        Parcel::new("a", 20.0, 30.0, 0.0),
        Parcel::new("b", 20.0, 100.0, 0.0),
    ];
    let fleet = FleetSpec::new(1, 50.0, 100.0).unwrap();
    let plan = plan_fleet(&parcels, &fleet).unwrap();

    assert_eq!(plan.trips.len(), 1);
    assert_eq!(plan.trips[0].outbound, 2.0);
    assert_eq!(plan.trips[0].returns_at, 4.0);
}

#[test]
fn interactive_session_end_to_end() {
    let catalog = OfferCatalog::builtin().unwrap();
    let transcript = "100 5\n\
                      PKG1 50 30 OFR001\n\
                      PKG2 75 125 OFR008\n\
                      PKG3 175 100 OFR003\n\
                      PKG4 110 60 OFR002\n\
                      PKG5 155 95 NA\n\
                      y\n\
                      2 70 200\n";
    let mut input = Cursor::new(transcript);
    let mut out: Vec<u8> = Vec::new();

    run_session(&mut input, &mut out, &catalog).unwrap();

    let text = String::from_utf8(out).unwrap();
    let result: Vec<&str> = text
        .lines()
        .skip_while(|line| !line.contains("Result:"))
        .skip(1)
        .collect();
    assert_eq!(
        result,
        [
            "PKG1 0 750 3.98",
            "PKG2 0 1475 1.78",
            "PKG3 0 2350 1.42",
            "PKG4 105 1395 0.85",
            "PKG5 0 2125 4.19",
        ]
    );
}

#[test]
fn overweight_parcel_is_still_priced() {
    let catalog = OfferCatalog::builtin().unwrap();
    let transcript = "100 2\n\
                      light 10 70 NA\n\
                      heavy 500 10 NA\n\
                      y\n\
                      1 70 200\n";
    let mut input = Cursor::new(transcript);
    let mut out: Vec<u8> = Vec::new();

    let rows = run_session(&mut input, &mut out, &catalog).unwrap();

    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["heavy", "light"]);
    assert!(rows[0].delivery_time.is_none());

    let text = String::from_utf8(out).unwrap();
    let result: Vec<&str> = text
        .lines()
        .skip_while(|line| !line.contains("Result:"))
        .skip(1)
        .collect();
    assert_eq!(result, ["heavy 0 5150", "light 0 550 1.00"]);
}
