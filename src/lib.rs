//! # toy-robot
//!
//! A toy robot on a bounded rectangular table, driven by a small command
//! language (`PLACE`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`).
//!
//! The [`Robot`] is a two-state machine (unplaced or placed) that checks the
//! [`Table`] bounds before committing any change, so it can never be observed
//! off the table. The [`CommandInterpreter`] parses text and dispatches to it.

pub mod config;
pub mod error;
pub mod interpreter;
pub mod report;
pub mod robot;
pub mod table;

pub use config::AppConfig;
pub use error::{Error, ParseError, Result};
pub use interpreter::*;
pub use report::ReportSink;
pub use robot::*;
pub use table::Table;
