// tests/properties.rs
use orbital_station::{Facing, Station};
use proptest::prelude::*;

fn any_facing() -> impl Strategy<Value = Facing> {
    prop::sample::select(Facing::ALL.to_vec())
}

fn any_station() -> impl Strategy<Value = Station> {
    (
        -1_000_000i64..1_000_000,
        -1_000_000i64..1_000_000,
        -1_000_000i64..1_000_000,
        any_facing(),
    )
        .prop_map(|(x, y, z, facing)| Station::new(x, y, z, facing))
}

/// Tokens drawn from the full command language plus some noise.
fn any_token() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["R", "L", "F", "B", "U", "D", "P", "X", "DOCK_", "??"])
            .prop_map(str::to_owned),
        "[A-H]{1,3}".prop_map(|name| format!("DOCK_{name}")),
        "[A-H]{1,3}".prop_map(|name| format!("UNDOCK_{name}")),
    ]
}

proptest! {
    /// Property: R and L are inverses, and four turns either way close the cycle
    #[test]
    fn rotation_is_closed_and_invertible(facing in any_facing()) {
        prop_assert_eq!(facing.counter_clockwise().clockwise(), facing);
        prop_assert_eq!(facing.clockwise().counter_clockwise(), facing);

        let mut station = Station::new(0, 0, 0, facing);
        station.execute_commands("R R R R");
        prop_assert_eq!(station.facing(), facing);
        station.execute_commands("L L L L");
        prop_assert_eq!(station.facing(), facing);
    }

    /// Property: F then B returns to the starting position
    #[test]
    fn forward_then_backward_round_trips(station in any_station()) {
        let mut moved = station.clone();
        moved.execute_commands("F B");
        prop_assert_eq!(moved, station);
    }

    /// Property: forward never changes altitude and always moves exactly one unit
    #[test]
    fn forward_is_a_unit_horizontal_step(mut station in any_station()) {
        let before = station.position();
        station.execute("F");
        let delta = station.position() - before;
        prop_assert_eq!(delta.z, 0);
        prop_assert_eq!(delta.x.abs() + delta.y.abs(), 1);
    }

    /// Property: docking the same name twice equals docking it once
    #[test]
    fn docking_is_idempotent(name in "[A-Z]{1,8}") {
        let command = format!("DOCK_{name}");
        let mut once = Station::new(0, 0, 0, Facing::North);
        once.execute(&command);
        let mut twice = once.clone();
        twice.execute(&command);
        prop_assert_eq!(twice.docked_modules(), [name.as_str()]);
        prop_assert_eq!(twice, once);
    }

    /// Property: the bay never exceeds capacity and never holds duplicates
    #[test]
    fn bay_stays_bounded_and_unique(tokens in prop::collection::vec(any_token(), 0..64)) {
        let mut station = Station::new(0, 0, 0, Facing::North);
        for token in &tokens {
            station.execute(token);

            let modules = station.docked_modules();
            prop_assert!(modules.len() <= station.max_modules());
            for (i, name) in modules.iter().enumerate() {
                prop_assert!(!modules[i + 1..].contains(name), "duplicate module {}", name);
            }
        }
    }

    /// Property: while unpowered, nothing but P changes the station
    #[test]
    fn unpowered_station_only_answers_power(
        station in any_station(),
        tokens in prop::collection::vec(any_token(), 0..32)
    ) {
        let mut station = station;
        station.execute("P");
        let frozen = station.clone();

        for token in tokens.iter().filter(|t| t.as_str() != "P") {
            station.execute(token);
        }
        prop_assert_eq!(station, frozen);
    }

    /// Property: toggling power twice restores the original state exactly
    #[test]
    fn double_toggle_is_identity(
        station in any_station(),
        tokens in prop::collection::vec(any_token(), 0..16)
    ) {
        let mut station = station;
        for token in &tokens {
            station.execute(token);
        }
        let before = station.clone();
        station.execute_commands("P P");
        prop_assert_eq!(station, before);
    }
}
