//! University timetabling as a constraint satisfaction problem.
//!
//! Every (lesson, group) cell of a weekly calendar receives a
//! (teacher, room, subject) triple by backtracking search, with pluggable
//! variable and value ordering and an optional arc-consistency pre-pass.

pub mod arc_consistency;
pub mod checker;
pub mod data;
pub mod error;
pub mod grid;
pub mod heuristics;
pub mod instance;
pub mod search;
pub mod solver;
pub mod timetable;
pub mod university;

#[cfg(test)]
mod fixtures;

pub use data::{SchedulingInput, SchedulingOutput, SolverConfig};
pub use error::ScheduleError;
pub use solver::solve;
pub use timetable::Timetable;
