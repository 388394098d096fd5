use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;

use crate::data::RoomCategory;
use crate::grid::Grid;
use crate::instance::{GroupId, ProblemInstance, SubjectId};

/// Hard-constraint predicate over the grid.
///
/// Checks that no teacher and no room serves two groups in the same lesson,
/// and that every subject of a group's original curriculum is taught in
/// exactly `coverage_categories` distinct room categories. Coverage is only
/// evaluated on a complete grid, or on a complete group row when
/// `early_coverage` is set.
#[derive(Debug, Clone)]
pub struct Checker {
    coverage_categories: usize,
    early_coverage: bool,
    checks: u64,
}

impl Checker {
    pub fn new(coverage_categories: usize, early_coverage: bool) -> Self {
        Self {
            coverage_categories,
            early_coverage,
            checks: 0,
        }
    }

    /// Number of times [`Checker::check`] has been called.
    pub fn checks(&self) -> u64 {
        self.checks
    }

    pub fn check(&mut self, grid: &Grid, instance: &ProblemInstance) -> bool {
        self.checks += 1;

        if self.early_coverage {
            for group in 0..grid.n_groups() {
                if grid.is_column_complete(group) && !self.is_covered(grid, instance, group) {
                    return false;
                }
            }
        } else if grid.is_complete() {
            for group in 0..grid.n_groups() {
                if !self.is_covered(grid, instance, group) {
                    return false;
                }
            }
        }

        (0..grid.total_lessons()).all(|lesson| is_exclusive(grid, lesson))
    }

    fn is_covered(&self, grid: &Grid, instance: &ProblemInstance, group: GroupId) -> bool {
        let curriculum = instance.curriculum(group);
        let mut categories: HashMap<SubjectId, BTreeSet<RoomCategory>> =
            curriculum.iter().map(|&s| (s, BTreeSet::new())).collect();
        for lesson in grid.column(group).flatten() {
            match categories.get_mut(&lesson.subject) {
                Some(seen) => {
                    seen.insert(instance.room_category(lesson.room));
                }
                None => return false,
            }
        }
        categories
            .values()
            .all(|seen| seen.len() == self.coverage_categories)
    }
}

/// No teacher and no room appears twice among the assigned cells of a row.
pub fn is_exclusive(grid: &Grid, lesson: usize) -> bool {
    let row = grid.row(lesson);
    row.iter().flatten().map(|l| l.teacher).all_unique()
        && row.iter().flatten().map(|l| l.room).all_unique()
}
