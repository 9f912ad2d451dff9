//! Station state and its primitive motions.

use crate::docking::{DockOutcome, DockingBay};
use glam::I64Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// One of the four cardinal directions a station can point toward.
///
/// There is no vertical facing: ascending and descending never depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Facing {
    /// All facings in clockwise order, starting from North.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// The facing a quarter turn clockwise from this one.
    pub fn clockwise(self) -> Self {
        Self::ALL[(self as usize + 1) % 4]
    }

    /// The facing a quarter turn counter-clockwise from this one.
    pub fn counter_clockwise(self) -> Self {
        Self::ALL[(self as usize + 3) % 4]
    }

    /// Unit displacement of a forward step. Z is always zero.
    pub fn forward(self) -> I64Vec3 {
        match self {
            Facing::North => I64Vec3::Y,
            Facing::East => I64Vec3::X,
            Facing::South => I64Vec3::NEG_Y,
            Facing::West => I64Vec3::NEG_X,
        }
    }

    /// The one-letter symbol used by the command language.
    pub fn symbol(self) -> &'static str {
        match self {
            Facing::North => "N",
            Facing::East => "E",
            Facing::South => "S",
            Facing::West => "W",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when text does not name one of the four facings.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid facing `{0}`: expected one of N, E, S, W")]
pub struct FacingParseError(pub String);

impl FromStr for Facing {
    type Err = FacingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let facing = match s.to_ascii_uppercase().as_str() {
            "N" | "NORTH" => Facing::North,
            "E" | "EAST" => Facing::East,
            "S" | "SOUTH" => Facing::South,
            "W" | "WEST" => Facing::West,
            _ => return Err(FacingParseError(s.to_owned())),
        };
        Ok(facing)
    }
}

/// Construction-time configuration for a [`Station`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationConfig {
    /// How many modules can be docked at once. Default: 4.
    pub max_modules: usize,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self { max_modules: 4 }
    }
}

/// A movable, rotatable station on an integer 3D grid.
///
/// Power starts on and the docking bay starts empty. All mutation goes through
/// the command interpreter ([`Station::execute`], [`Station::apply`]) or the
/// direct bay operations [`Station::dock`] / [`Station::undock`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub(crate) position: I64Vec3,
    pub(crate) facing: Facing,
    pub(crate) powered: bool,
    pub(crate) bay: DockingBay,
}

impl Station {
    /// Creates a powered station at `(x, y, z)` with the default configuration.
    pub fn new(x: i64, y: i64, z: i64, facing: Facing) -> Self {
        Self::with_config(x, y, z, facing, StationConfig::default())
    }

    /// Creates a powered station at `(x, y, z)` whose bay holds `config.max_modules`.
    pub fn with_config(x: i64, y: i64, z: i64, facing: Facing, config: StationConfig) -> Self {
        Self {
            position: I64Vec3::new(x, y, z),
            facing,
            powered: true,
            bay: DockingBay::new(config.max_modules),
        }
    }

    /// Current grid position.
    pub fn position(&self) -> I64Vec3 {
        self.position
    }

    /// Position as a plain `(x, y, z)` triple.
    pub fn coordinates(&self) -> (i64, i64, i64) {
        (self.position.x, self.position.y, self.position.z)
    }

    /// Current facing.
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Whether the station accepts commands other than `P`.
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Docked module names in the order they were docked.
    pub fn docked_modules(&self) -> &[String] {
        self.bay.modules()
    }

    /// The docking bay itself, for capacity and membership queries.
    pub fn bay(&self) -> &DockingBay {
        &self.bay
    }

    /// Bay capacity.
    pub fn max_modules(&self) -> usize {
        self.bay.capacity()
    }

    /// Quarter turn clockwise.
    pub fn rotate_right(&mut self) {
        self.facing = self.facing.clockwise();
    }

    /// Quarter turn counter-clockwise.
    pub fn rotate_left(&mut self) {
        self.facing = self.facing.counter_clockwise();
    }

    // Steps wrap at the i64 edge.

    /// One step along the facing.
    pub fn move_forward(&mut self) {
        self.position = self.position.wrapping_add(self.facing.forward());
    }

    /// One step against the facing.
    pub fn move_backward(&mut self) {
        self.position = self.position.wrapping_sub(self.facing.forward());
    }

    /// One step up the Z axis.
    pub fn move_up(&mut self) {
        self.position = self.position.wrapping_add(I64Vec3::Z);
    }

    /// One step down the Z axis.
    pub fn move_down(&mut self) {
        self.position = self.position.wrapping_sub(I64Vec3::Z);
    }

    /// Flips the power flag.
    pub fn toggle_power(&mut self) {
        self.powered = !self.powered;
        info!(powered = self.powered, "station power toggled");
    }

    /// Docks `name` if there is room and it is not already docked.
    ///
    /// Bypasses the power gate; the command path only reaches this while powered.
    pub fn dock(&mut self, name: &str) -> DockOutcome {
        let outcome = self.bay.dock(name);
        if outcome != DockOutcome::Docked {
            debug!(module = name, ?outcome, "dock request rejected");
        }
        outcome
    }

    /// Undocks `name`, returning whether it was docked.
    pub fn undock(&mut self, name: &str) -> bool {
        let removed = self.bay.undock(name);
        if !removed {
            debug!(module = name, "undock request for module that is not docked");
        }
        removed
    }
}
