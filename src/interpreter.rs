//! Command interpreter that drives a [`Station`] from whitespace-separated tokens.
//!
//! Each token is mapped to a [`StationOp`] with [`StationOp::parse`] and then
//! applied with [`Station::apply`]. Unknown tokens map to [`StationOp::Ignore`].
//! While the station is unpowered every operation except
//! [`StationOp::TogglePower`] is dropped. Nothing on this path returns an error.

use crate::station::Station;
use std::fmt;
use tracing::{debug, trace};

const DOCK_PREFIX: &str = "DOCK_";
const UNDOCK_PREFIX: &str = "UNDOCK_";

/// Operations understood by the station.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StationOp<'a> {
    // --- Orientation ---
    /// Quarter turn clockwise (`R`).
    RotateRight,
    /// Quarter turn counter-clockwise (`L`).
    RotateLeft,

    // --- Translation ---
    /// One step along the facing (`F`).
    Forward,
    /// One step against the facing (`B`).
    Backward,
    /// One step up the Z axis (`U`).
    Ascend,
    /// One step down the Z axis (`D`).
    Descend,

    // --- Power ---
    /// Flip the power flag (`P`). Runs even while unpowered.
    TogglePower,

    // --- Docking ---
    /// Attach a module (`DOCK_<NAME>`).
    Dock(&'a str),
    /// Detach a module (`UNDOCK_<NAME>`).
    Undock(&'a str),

    /// No-op: the token has no registered meaning.
    Ignore,
}

impl<'a> StationOp<'a> {
    /// Maps a single token to its operation.
    ///
    /// Module names are everything after the prefix, so `DOCK_FUEL_TANK` docks
    /// `FUEL_TANK`. A prefix with no name after it (`DOCK_`) maps to
    /// [`StationOp::Ignore`]. Matching is case-sensitive.
    pub fn parse(token: &'a str) -> Self {
        let mappings = [
            ("R", StationOp::RotateRight),
            ("L", StationOp::RotateLeft),
            ("F", StationOp::Forward),
            ("B", StationOp::Backward),
            ("U", StationOp::Ascend),
            ("D", StationOp::Descend),
            ("P", StationOp::TogglePower),
        ];

        if let Some((_, op)) = mappings.iter().find(|(sym, _)| *sym == token) {
            return *op;
        }

        if let Some(name) = token.strip_prefix(DOCK_PREFIX)
            && !name.is_empty()
        {
            StationOp::Dock(name)
        } else if let Some(name) = token.strip_prefix(UNDOCK_PREFIX)
            && !name.is_empty()
        {
            StationOp::Undock(name)
        } else {
            StationOp::Ignore
        }
    }

    /// Lazily parses every whitespace-separated token in `commands`.
    pub fn parse_all(commands: &'a str) -> impl Iterator<Item = StationOp<'a>> + 'a {
        commands.split_whitespace().map(StationOp::parse)
    }
}

impl fmt::Display for StationOp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationOp::RotateRight => f.write_str("R"),
            StationOp::RotateLeft => f.write_str("L"),
            StationOp::Forward => f.write_str("F"),
            StationOp::Backward => f.write_str("B"),
            StationOp::Ascend => f.write_str("U"),
            StationOp::Descend => f.write_str("D"),
            StationOp::TogglePower => f.write_str("P"),
            StationOp::Dock(name) => write!(f, "{DOCK_PREFIX}{name}"),
            StationOp::Undock(name) => write!(f, "{UNDOCK_PREFIX}{name}"),
            StationOp::Ignore => f.write_str("?"),
        }
    }
}

impl Station {
    /// Executes every whitespace-separated token in `commands`, in order.
    ///
    /// Runs of whitespace collapse and leading/trailing whitespace yields no tokens.
    pub fn execute_commands(&mut self, commands: &str) {
        for token in commands.split_whitespace() {
            self.execute(token);
        }
    }

    /// Executes a single command token.
    pub fn execute(&mut self, command: &str) {
        let op = StationOp::parse(command);
        if op == StationOp::Ignore {
            debug!(command, powered = self.powered, "unrecognised command ignored");
            return;
        }
        self.apply(op);
    }

    /// Applies `op` behind the power gate.
    ///
    /// [`StationOp::Ignore`] does nothing, powered or not.
    pub fn apply(&mut self, op: StationOp<'_>) {
        if op == StationOp::Ignore {
            return;
        }
        if !self.powered && op != StationOp::TogglePower {
            debug!(%op, "station unpowered, command ignored");
            return;
        }

        match op {
            StationOp::RotateRight => self.rotate_right(),
            StationOp::RotateLeft => self.rotate_left(),
            StationOp::Forward => self.move_forward(),
            StationOp::Backward => self.move_backward(),
            StationOp::Ascend => self.move_up(),
            StationOp::Descend => self.move_down(),
            StationOp::TogglePower => self.toggle_power(),
            StationOp::Dock(name) => {
                self.dock(name);
            }
            StationOp::Undock(name) => {
                self.undock(name);
            }
            StationOp::Ignore => {}
        }

        trace!(%op, position = %self.position, facing = %self.facing, "applied");
    }
}
