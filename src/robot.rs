//! Robot state and operations.

use crate::error::{ParseError, Result};
use crate::report::ReportSink;
use crate::table::Table;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point on (or off) the table. Adding a facing's unit vector steps one cell.
pub type Position = IVec2;

/// The cardinal direction the robot points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// 90 degrees counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// 90 degrees clockwise.
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// One cell forward in this direction. North is `+y`, East is `+x`.
    pub fn unit_vector(self) -> Position {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Upper-case name used in commands and reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facing {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|facing| facing.name() == s)
            .ok_or_else(|| ParseError::InvalidFacing(s.to_owned()))
    }
}

/// Lifecycle of the robot. A position never exists without a facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RobotState {
    #[default]
    Unplaced,
    Placed { position: Position, facing: Facing },
}

/// A snapshot of a placed robot, as emitted by `REPORT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.facing)
    }
}

/// A single robot bound to one table for its whole life.
///
/// Every mutator checks placement and bounds before committing, so the robot
/// is always either fully placed on the table or fully unplaced. Failures are
/// reported as `false` and leave the state untouched.
#[derive(Debug)]
pub struct Robot<'a> {
    table: &'a Table,
    state: RobotState,
    sink: ReportSink,
}

impl<'a> Robot<'a> {
    /// Creates an unplaced robot that reports to standard output.
    pub fn new(table: &'a Table) -> Self {
        Self::with_sink(table, ReportSink::Stdout)
    }

    /// Creates an unplaced robot that reports to `sink`.
    pub fn with_sink(table: &'a Table, sink: ReportSink) -> Self {
        Self {
            table,
            state: RobotState::Unplaced,
            sink,
        }
    }

    /// The table this robot is bound to.
    pub fn table(&self) -> &Table {
        self.table
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RobotState {
        self.state
    }

    /// `true` once a `place` has succeeded.
    pub fn is_placed(&self) -> bool {
        matches!(self.state, RobotState::Placed { .. })
    }

    /// Current cell, if placed.
    pub fn position(&self) -> Option<Position> {
        match self.state {
            RobotState::Placed { position, .. } => Some(position),
            RobotState::Unplaced => None,
        }
    }

    /// Current direction, if placed.
    pub fn facing(&self) -> Option<Facing> {
        match self.state {
            RobotState::Placed { facing, .. } => Some(facing),
            RobotState::Unplaced => None,
        }
    }

    /// Where reports are written.
    pub fn sink(&self) -> &ReportSink {
        &self.sink
    }

    /// Puts the robot at `(x, y)` facing `facing`, whether or not it was
    /// already placed. Off-table coordinates leave the state unchanged.
    pub fn place(&mut self, x: i32, y: i32, facing: Facing) -> bool {
        let position = Position::new(x, y);
        if !self.table.contains(position) {
            return false;
        }
        self.state = RobotState::Placed { position, facing };
        true
    }

    /// Steps one cell forward unless that would leave the table.
    pub fn move_forward(&mut self) -> bool {
        let RobotState::Placed { position, facing } = self.state else {
            return false;
        };
        let next = position + facing.unit_vector();
        if !self.table.contains(next) {
            return false;
        }
        self.state = RobotState::Placed {
            position: next,
            facing,
        };
        true
    }

    /// Turns 90 degrees counter-clockwise in place. Fails when unplaced.
    pub fn left(&mut self) -> bool {
        self.turn(Facing::left)
    }

    /// Turns 90 degrees clockwise in place. Fails when unplaced.
    pub fn right(&mut self) -> bool {
        self.turn(Facing::right)
    }

    fn turn(&mut self, rotate: fn(Facing) -> Facing) -> bool {
        match &mut self.state {
            RobotState::Placed { facing, .. } => {
                *facing = rotate(*facing);
                true
            }
            RobotState::Unplaced => false,
        }
    }

    /// Current position and facing, if placed.
    pub fn snapshot(&self) -> Option<Report> {
        match self.state {
            RobotState::Placed { position, facing } => Some(Report {
                x: position.x,
                y: position.y,
                facing,
            }),
            RobotState::Unplaced => None,
        }
    }

    /// Writes `"<x>, <y>, <FACING>"` to the sink.
    ///
    /// Returns `Ok(false)` without writing when unplaced. Only a sink I/O
    /// failure produces an error.
    pub fn report(&mut self) -> Result<bool> {
        let Some(report) = self.snapshot() else {
            return Ok(false);
        };
        self.sink.write_line(&report.to_string())?;
        Ok(true)
    }
}
