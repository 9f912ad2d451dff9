//! # orbital-station
//!
//! A single station on an integer 3D grid, driven by a small command language.
//!
//! The station has a position, a cardinal [`Facing`], a power flag and a
//! capacity-bounded [`DockingBay`]. Feed it whitespace-separated tokens
//! (`R L F B U D P DOCK_<NAME> UNDOCK_<NAME>`) through
//! [`Station::execute_commands`] and read the result back through its accessors.
//!
//! ```
//! use orbital_station::{Facing, Station};
//!
//! let mut station = Station::new(0, 0, 0, Facing::North);
//! station.execute_commands("R F F U DOCK_SOLAR L B D");
//! assert_eq!(station.coordinates(), (2, -1, 0));
//! assert_eq!(station.docked_modules(), ["SOLAR"]);
//! ```

pub mod docking;
pub mod interpreter;
pub mod station;

pub use docking::*;
pub use interpreter::*;
pub use station::*;
