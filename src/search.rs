use log::{debug, trace};
use rand::RngCore;

use crate::checker::Checker;
use crate::grid::Grid;
use crate::heuristics::{ValueOrderer, VariableSelector};
use crate::instance::ProblemInstance;

/// Depth-first backtracking over the grid cells.
///
/// Recursion depth is bounded by the number of cells. Every tentative
/// assignment that fails, or whose subtree fails, is reset to unassigned
/// before the next candidate is tried.
pub struct Backtracking<'a> {
    instance: &'a ProblemInstance,
    grid: &'a mut Grid,
    checker: &'a mut Checker,
    selector: &'a dyn VariableSelector,
    orderer: &'a dyn ValueOrderer,
    rng: &'a mut dyn RngCore,
}

impl<'a> Backtracking<'a> {
    pub fn new(
        instance: &'a ProblemInstance,
        grid: &'a mut Grid,
        checker: &'a mut Checker,
        selector: &'a dyn VariableSelector,
        orderer: &'a dyn ValueOrderer,
        rng: &'a mut dyn RngCore,
    ) -> Self {
        Self {
            instance,
            grid,
            checker,
            selector,
            orderer,
            rng,
        }
    }

    /// Returns `true` once every cell holds a consistent lesson, `false` if
    /// the whole space was exhausted.
    pub fn run(&mut self) -> bool {
        self.backtrack(0)
    }

    fn backtrack(&mut self, depth: usize) -> bool {
        let Some((lesson, group)) = self.selector.select(self.grid, self.instance) else {
            return true;
        };

        let candidates = self
            .orderer
            .candidates(lesson, group, self.grid, self.instance, self.rng);
        trace!(
            "depth {depth}: lesson {lesson}, group {group}, {} candidates",
            candidates.len()
        );

        for value in candidates {
            self.grid.set(lesson, group, value);
            if self.checker.check(self.grid, self.instance) && self.backtrack(depth + 1) {
                return true;
            }
            self.grid.unset(lesson, group);
            if depth == 0 {
                debug!(
                    "Backtracked out of root candidate after {} checks",
                    self.checker.checks()
                );
            }
        }
        false
    }
}
