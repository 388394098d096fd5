use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::ScheduleError;
use crate::timetable::Timetable;

/// Kind of teaching a room is equipped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomCategory {
    Lecture,
    Lab,
    Tutorial,
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoomCategory::Lecture => "lec",
            RoomCategory::Lab => "lab",
            RoomCategory::Tutorial => "td",
        };
        f.write_str(label)
    }
}

/// A physical room and the category of lessons it hosts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Room {
    pub name: String,
    pub category: RoomCategory,
}

/// A teacher with the modules they are qualified for.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Teacher {
    pub name: String,
    pub subjects: Vec<String>,
}

/// A student group with the modules it must be taught.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Group {
    pub name: String,
    pub curriculum: Vec<String>,
}

/// Weekly grid shape; lessons are numbered day-major.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Calendar {
    pub days: Vec<String>,
    pub slots: Vec<String>,
}

impl Calendar {
    pub fn total_lessons(&self) -> usize {
        self.days.len() * self.slots.len()
    }
}

/// Strategy for picking the next unassigned (lesson, group) cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableHeuristic {
    #[default]
    Naive,
    Degree,
    CalendarOrder,
}

/// Strategy for ordering the candidate triples of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueHeuristic {
    #[default]
    Naive,
    LeastConstraining,
    ForwardChecking,
}

/// Search settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolverConfig {
    pub variable_heuristic: VariableHeuristic,
    pub value_heuristic: ValueHeuristic,
    /// Run the AC-3 curriculum pruning pass before searching.
    pub arc_consistency: bool,
    /// Seed for candidate shuffling; `None` draws from OS entropy.
    pub random_seed: Option<u64>,
    /// Number of distinct room categories each subject must be taught in.
    pub coverage_categories: usize,
    /// Check a group's coverage once its row is complete instead of waiting
    /// for the whole grid.
    pub early_coverage: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            variable_heuristic: VariableHeuristic::default(),
            value_heuristic: ValueHeuristic::default(),
            arc_consistency: false,
            random_seed: None,
            coverage_categories: 2,
            early_coverage: false,
        }
    }
}

impl SolverConfig {
    pub fn rng(&self) -> StdRng {
        match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// The complete input for the timetabling problem.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingInput {
    pub modules: Vec<String>,
    pub teachers: Vec<Teacher>,
    pub rooms: Vec<Room>,
    pub groups: Vec<Group>,
    pub calendar: Calendar,
    #[serde(default)]
    pub solver: SolverConfig,
}

impl SchedulingInput {
    pub fn from_json_str(json: &str) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// The final output of the solver.
///
/// `timetable` is `None` when the search space was exhausted without finding a
/// consistent assignment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingOutput {
    pub timetable: Option<Timetable>,
    pub constraint_checks: u64,
    pub elapsed_ms: u64,
}

impl SchedulingOutput {
    pub fn is_solved(&self) -> bool {
        self.timetable.is_some()
    }
}
