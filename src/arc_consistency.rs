//! AC-3 style pruning of group curricula.
//!
//! Every pair of groups sharing a lesson is an arc. A subject is dropped from
//! the first group's curriculum when no placement of it at that lesson leaves
//! room for any placement of the second group.

use std::collections::{BTreeSet, VecDeque};

use log::{debug, info};
use rand::RngCore;

use crate::checker::Checker;
use crate::error::ScheduleError;
use crate::grid::Grid;
use crate::heuristics::{Shuffled, ValueOrderer};
use crate::instance::{GroupId, ProblemInstance, SubjectId};

/// Shrinks the working curricula in `grid` until every arc is consistent.
///
/// The grid's cells are left exactly as they were found; only curricula
/// change. Fails if a group ends up with nothing left to learn.
pub fn enforce(
    grid: &mut Grid,
    instance: &ProblemInstance,
    checker: &mut Checker,
    rng: &mut dyn RngCore,
) -> Result<(), ScheduleError> {
    let n_groups = grid.n_groups();
    let mut queue: VecDeque<(usize, GroupId, GroupId)> = VecDeque::new();
    for lesson in 0..grid.total_lessons() {
        for first in 0..n_groups {
            for second in first + 1..n_groups {
                queue.push_back((lesson, first, second));
            }
        }
    }
    info!("Enforcing arc consistency over {} arcs...", queue.len());

    let mut removed = 0;
    while let Some((lesson, first, second)) = queue.pop_front() {
        let pruned = revise(grid, instance, checker, rng, lesson, first, second);
        if pruned.is_empty() {
            continue;
        }
        for &subject in &pruned {
            debug!(
                "{} can never take {} alongside {} at lesson {}",
                instance.group_name(first),
                instance.subject_name(subject),
                instance.group_name(second),
                lesson
            );
        }
        removed += pruned.len();
        if grid.curriculum(first).is_empty() {
            return Err(ScheduleError::CurriculumExhausted {
                group: instance.group_name(first).to_string(),
            });
        }
        for other in (0..n_groups).filter(|&g| g != first) {
            queue.push_back((lesson, first, other));
        }
    }
    info!("Arc consistency removed {removed} subject(s) from curricula.");
    Ok(())
}

/// Removes the subjects of `first` that never have support in `second` at
/// `lesson`, returning them.
fn revise(
    grid: &mut Grid,
    instance: &ProblemInstance,
    checker: &mut Checker,
    rng: &mut dyn RngCore,
    lesson: usize,
    first: GroupId,
    second: GroupId,
) -> Vec<SubjectId> {
    let previous_first = grid.get(lesson, first);
    let previous_second = grid.get(lesson, second);
    let mut good = BTreeSet::new();
    let mut bad = BTreeSet::new();

    for value in Shuffled.candidates(lesson, first, grid, instance, rng) {
        // one supported placement is enough to keep a subject
        if good.contains(&value.subject) {
            continue;
        }
        grid.set(lesson, first, value);
        if checker.check(grid, instance) {
            let supported = Shuffled
                .candidates(lesson, second, grid, instance, rng)
                .into_iter()
                .any(|other| {
                    grid.set(lesson, second, other);
                    checker.check(grid, instance)
                });
            grid.restore(lesson, second, previous_second);
            if supported {
                good.insert(value.subject);
            } else {
                bad.insert(value.subject);
            }
        }
        grid.restore(lesson, first, previous_first);
    }

    let pruned: Vec<SubjectId> = bad.difference(&good).copied().collect();
    for &subject in &pruned {
        grid.remove_subject(first, subject);
    }
    pruned
}
