//! Interpreter that turns lines of command text into [`Robot`] operations.
//!
//! The entry point is [`CommandInterpreter`]. Feed it one line at a time with
//! [`CommandInterpreter::execute`], or a whole script with
//! [`CommandInterpreter::run_reader`] / [`CommandInterpreter::run_file`].
//!
//! # Command language
//!
//! | Text                    | Effect                                   |
//! |-------------------------|------------------------------------------|
//! | `PLACE <x>,<y>,<DIR>`   | Place (or re-place) the robot            |
//! | `MOVE`                  | Step one cell forward                    |
//! | `LEFT` / `RIGHT`        | Turn 90 degrees                          |
//! | `REPORT`                | Write `"<x>, <y>, <DIR>"` to the sink    |
//!
//! `x` and `y` are unsigned decimal integers and `DIR` is one of `NORTH`,
//! `EAST`, `SOUTH`, `WEST`. Whitespace around tokens and commas is ignored.
//! Anything else is unsupported and never reaches the robot.

use crate::error::{ParseError, Result};
use crate::robot::{Facing, Robot};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Mixed valid and invalid commands exercising every operation.
pub const DEMO_COMMANDS: &[&str] = &[
    "MOVE",
    "PLACE 0,0,NORTH",
    "MOVE",
    "REPORT",
    "dsfsdf",
    "PLACE -1,0,NORTH",
    "PLACE 0,0,SDFDSF",
    "PLACE 0,0,NORTH",
    "LEFT",
    "REPORT",
    "PLACE 1,2,EAST",
    "MOVE",
    "MOVE",
    "LEFT",
    "MOVE",
    "REPORT",
];

/// A parsed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place the robot at `(x, y)` facing `facing`.
    Place { x: i32, y: i32, facing: Facing },
    /// Step one cell forward.
    Move,
    /// Turn 90 degrees counter-clockwise.
    Left,
    /// Turn 90 degrees clockwise.
    Right,
    /// Emit the current position and facing.
    Report,
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Some(args) = line.strip_prefix("PLACE") {
            return parse_place(args);
        }
        match line {
            "MOVE" => Ok(Self::Move),
            "LEFT" => Ok(Self::Left),
            "RIGHT" => Ok(Self::Right),
            "REPORT" => Ok(Self::Report),
            _ => Err(ParseError::Unsupported(line.to_owned())),
        }
    }
}

fn parse_place(args: &str) -> std::result::Result<Command, ParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let [x, y, facing] = parts.as_slice() else {
        return Err(ParseError::InvalidPlace(args.trim().to_owned()));
    };
    Ok(Command::Place {
        x: parse_coordinate(x)?,
        y: parse_coordinate(y)?,
        facing: facing.parse()?,
    })
}

fn parse_coordinate(s: &str) -> std::result::Result<i32, ParseError> {
    // Signs are rejected here rather than by i32::from_str, which accepts "+1".
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidCoordinate(s.to_owned()));
    }
    // Too large for i32 means off any table; saturate so the robot refuses it.
    Ok(s.parse().unwrap_or(i32::MAX))
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place { x, y, facing } => write!(f, "PLACE({x}, {y}, {facing})"),
            Self::Move => f.write_str("MOVE"),
            Self::Left => f.write_str("LEFT"),
            Self::Right => f.write_str("RIGHT"),
            Self::Report => f.write_str("REPORT"),
        }
    }
}

/// What happened to one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Succeeded(Command),
    /// The robot refused the command; its state is unchanged.
    Failed(Command),
    /// The line did not parse; the robot was not touched.
    Unsupported(ParseError),
}

impl Outcome {
    /// `true` only for [`Outcome::Succeeded`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded(cmd) => write!(f, "[SUCCESS] {cmd}"),
            Self::Failed(cmd) => write!(f, "[FAILED] {cmd}"),
            Self::Unsupported(err) => write!(
                f,
                "Unsupported command ({err}). Only \"PLACE <X>,<Y>,<NORTH|EAST|SOUTH|WEST>\", \
                 \"MOVE\", \"LEFT\", \"RIGHT\", and \"REPORT\" are supported."
            ),
        }
    }
}

/// Tally of outcomes over a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub unsupported: usize,
}

impl RunSummary {
    /// Counts one outcome.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Succeeded(_) => self.succeeded += 1,
            Outcome::Failed(_) => self.failed += 1,
            Outcome::Unsupported(_) => self.unsupported += 1,
        }
    }

    /// Number of non-blank lines processed.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed + self.unsupported
    }
}

/// Parses command text and dispatches it to a [`Robot`].
#[derive(Debug)]
pub struct CommandInterpreter<'a> {
    robot: Robot<'a>,
}

impl<'a> CommandInterpreter<'a> {
    /// Wraps a robot; the interpreter owns it for the run.
    pub fn new(robot: Robot<'a>) -> Self {
        Self { robot }
    }

    /// The robot being driven.
    pub fn robot(&self) -> &Robot<'a> {
        &self.robot
    }

    /// Ends the session and hands the robot back.
    pub fn into_robot(self) -> Robot<'a> {
        self.robot
    }

    /// Applies an already-parsed command. Returns the robot's verdict.
    pub fn dispatch(&mut self, command: Command) -> Result<bool> {
        let ok = match command {
            Command::Place { x, y, facing } => self.robot.place(x, y, facing),
            Command::Move => self.robot.move_forward(),
            Command::Left => self.robot.left(),
            Command::Right => self.robot.right(),
            Command::Report => self.robot.report()?,
        };
        log::debug!("{command} -> {ok} (state: {:?})", self.robot.state());
        Ok(ok)
    }

    /// Parses and runs one line.
    ///
    /// Only a report sink failure is returned as `Err`; refused and
    /// unparseable commands come back as [`Outcome`] values.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                log::warn!("Rejected {:?}: {err}", line.trim());
                return Ok(Outcome::Unsupported(err));
            }
        };
        Ok(if self.dispatch(command)? {
            Outcome::Succeeded(command)
        } else {
            Outcome::Failed(command)
        })
    }

    /// Runs each non-blank line in order, handing every outcome to `on_outcome`.
    pub fn run_lines<'l, I, F>(&mut self, lines: I, mut on_outcome: F) -> Result<RunSummary>
    where
        I: IntoIterator<Item = &'l str>,
        F: FnMut(&str, &Outcome),
    {
        let mut summary = RunSummary::default();
        for line in lines {
            self.run_one(line, &mut summary, &mut on_outcome)?;
        }
        Ok(summary)
    }

    /// Runs commands from `reader` until end of input.
    pub fn run_reader<R, F>(&mut self, reader: R, mut on_outcome: F) -> Result<RunSummary>
    where
        R: BufRead,
        F: FnMut(&str, &Outcome),
    {
        let mut summary = RunSummary::default();
        for raw in reader.split(b'\n') {
            // Undecodable bytes become U+FFFD and the line is rejected by the parser.
            let raw = raw?;
            let line = String::from_utf8_lossy(&raw);
            self.run_one(&line, &mut summary, &mut on_outcome)?;
        }
        Ok(summary)
    }

    /// Runs a command file, one command per line.
    pub fn run_file<P, F>(&mut self, path: P, on_outcome: F) -> Result<RunSummary>
    where
        P: AsRef<Path>,
        F: FnMut(&str, &Outcome),
    {
        let path = path.as_ref();
        log::info!("Running commands from {}", path.display());
        let file = File::open(path)?;
        self.run_reader(BufReader::new(file), on_outcome)
    }

    fn run_one<F>(&mut self, line: &str, summary: &mut RunSummary, on_outcome: &mut F) -> Result<()>
    where
        F: FnMut(&str, &Outcome),
    {
        if line.trim().is_empty() {
            log::trace!("Skipping blank line");
            return Ok(());
        }
        let outcome = self.execute(line)?;
        summary.record(&outcome);
        on_outcome(line, &outcome);
        Ok(())
    }
}
