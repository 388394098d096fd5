//! Variable selection and value ordering strategies for the search.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::data::{ValueHeuristic, VariableHeuristic};
use crate::grid::{Grid, Lesson};
use crate::instance::{GroupId, ProblemInstance, RoomId, SubjectId, TeacherId};

/// Picks the next unassigned (lesson, group) cell, or `None` when the grid
/// is complete.
pub trait VariableSelector {
    fn select(&self, grid: &Grid, instance: &ProblemInstance) -> Option<(usize, GroupId)>;

    fn name(&self) -> &str;
}

/// Produces the candidate triples for a cell, in the order they are tried.
///
/// Every call returns a fresh sequence. Candidates only respect static
/// qualifications; exclusivity is left to the [`Checker`](crate::checker::Checker).
pub trait ValueOrderer {
    fn candidates(
        &self,
        lesson: usize,
        group: GroupId,
        grid: &Grid,
        instance: &ProblemInstance,
        rng: &mut dyn RngCore,
    ) -> Vec<Lesson>;

    fn name(&self) -> &str;
}

pub fn variable_selector(heuristic: VariableHeuristic) -> Box<dyn VariableSelector> {
    match heuristic {
        VariableHeuristic::Naive => Box::new(FirstUnassigned),
        VariableHeuristic::Degree => Box::new(Degree),
        VariableHeuristic::CalendarOrder => Box::new(CalendarOrder),
    }
}

pub fn value_orderer(heuristic: ValueHeuristic) -> Box<dyn ValueOrderer> {
    match heuristic {
        ValueHeuristic::Naive => Box::new(Shuffled),
        ValueHeuristic::LeastConstraining => Box::new(LeastConstraining),
        ValueHeuristic::ForwardChecking => Box::new(ForwardChecking),
    }
}

/// First unassigned cell in row-major (lesson, group) order.
#[derive(Debug, Clone, Copy)]
pub struct FirstUnassigned;

impl VariableSelector for FirstUnassigned {
    fn select(&self, grid: &Grid, _instance: &ProblemInstance) -> Option<(usize, GroupId)> {
        (0..grid.total_lessons()).find_map(|lesson| first_empty(grid, lesson))
    }

    fn name(&self) -> &str {
        "naive"
    }
}

/// Lesson row with the most unassigned groups; the earliest row wins ties.
#[derive(Debug, Clone, Copy)]
pub struct Degree;

impl VariableSelector for Degree {
    fn select(&self, grid: &Grid, _instance: &ProblemInstance) -> Option<(usize, GroupId)> {
        let mut best: Option<(usize, usize)> = None;
        for lesson in 0..grid.total_lessons() {
            let open = grid.unassigned_in_row(lesson);
            if open > 0 && best.is_none_or(|(_, most)| open > most) {
                best = Some((lesson, open));
            }
        }
        best.and_then(|(lesson, _)| first_empty(grid, lesson))
    }

    fn name(&self) -> &str {
        "degree"
    }
}

/// Walks the calendar day by day, slot by slot.
#[derive(Debug, Clone, Copy)]
pub struct CalendarOrder;

impl VariableSelector for CalendarOrder {
    fn select(&self, grid: &Grid, instance: &ProblemInstance) -> Option<(usize, GroupId)> {
        for day in 0..instance.n_days() {
            for slot in 0..instance.slots_per_day() {
                if let Some(var) = first_empty(grid, instance.lesson(day, slot)) {
                    return Some(var);
                }
            }
        }
        None
    }

    fn name(&self) -> &str {
        "calendar-order"
    }
}

fn first_empty(grid: &Grid, lesson: usize) -> Option<(usize, GroupId)> {
    grid.row(lesson)
        .iter()
        .position(Option::is_none)
        .map(|group| (lesson, group))
}

/// Teachers, rooms and subjects each in random order.
#[derive(Debug, Clone, Copy)]
pub struct Shuffled;

impl ValueOrderer for Shuffled {
    fn candidates(
        &self,
        _lesson: usize,
        group: GroupId,
        grid: &Grid,
        instance: &ProblemInstance,
        rng: &mut dyn RngCore,
    ) -> Vec<Lesson> {
        let mut teachers: Vec<TeacherId> = (0..instance.n_teachers()).collect();
        teachers.shuffle(rng);
        let rooms: Vec<RoomId> = (0..instance.n_rooms()).collect();
        expand(&teachers, &rooms, group, grid, instance, rng)
    }

    fn name(&self) -> &str {
        "naive"
    }
}

/// Teachers whose qualifications overlap least with the other groups'
/// curricula are tried first; rooms and subjects stay shuffled.
#[derive(Debug, Clone, Copy)]
pub struct LeastConstraining;

impl ValueOrderer for LeastConstraining {
    fn candidates(
        &self,
        _lesson: usize,
        group: GroupId,
        grid: &Grid,
        instance: &ProblemInstance,
        rng: &mut dyn RngCore,
    ) -> Vec<Lesson> {
        let mut teachers: Vec<TeacherId> = (0..instance.n_teachers()).collect();
        teachers.sort_by_cached_key(|&teacher| {
            (0..grid.n_groups())
                .filter(|&other| other != group)
                .map(|other| {
                    grid.curriculum(other)
                        .intersection(instance.capabilities(teacher))
                        .count()
                })
                .sum::<usize>()
        });
        let rooms: Vec<RoomId> = (0..instance.n_rooms()).collect();
        expand(&teachers, &rooms, group, grid, instance, rng)
    }

    fn name(&self) -> &str {
        "least-constraining"
    }
}

/// Like [`Shuffled`], but drops teachers and rooms already busy elsewhere in
/// the same lesson.
#[derive(Debug, Clone, Copy)]
pub struct ForwardChecking;

impl ValueOrderer for ForwardChecking {
    fn candidates(
        &self,
        lesson: usize,
        group: GroupId,
        grid: &Grid,
        instance: &ProblemInstance,
        rng: &mut dyn RngCore,
    ) -> Vec<Lesson> {
        let busy: Vec<Lesson> = grid
            .row(lesson)
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != group)
            .filter_map(|(_, cell)| *cell)
            .collect();

        let mut teachers: Vec<TeacherId> = (0..instance.n_teachers())
            .filter(|t| busy.iter().all(|l| l.teacher != *t))
            .collect();
        teachers.shuffle(rng);
        let rooms: Vec<RoomId> = (0..instance.n_rooms())
            .filter(|r| busy.iter().all(|l| l.room != *r))
            .collect();
        expand(&teachers, &rooms, group, grid, instance, rng)
    }

    fn name(&self) -> &str {
        "forward-checking"
    }
}

/// For each teacher in the given order, every room (shuffled per teacher)
/// crossed with every subject the teacher can give the group (shuffled per
/// room).
fn expand(
    teachers: &[TeacherId],
    rooms: &[RoomId],
    group: GroupId,
    grid: &Grid,
    instance: &ProblemInstance,
    rng: &mut dyn RngCore,
) -> Vec<Lesson> {
    let mut candidates = Vec::new();
    for &teacher in teachers {
        let available: Vec<SubjectId> = grid
            .curriculum(group)
            .intersection(instance.capabilities(teacher))
            .copied()
            .collect();
        if available.is_empty() {
            continue;
        }
        let mut rooms = rooms.to_vec();
        rooms.shuffle(rng);
        for room in rooms {
            let mut subjects = available.clone();
            subjects.shuffle(rng);
            candidates.extend(subjects.into_iter().map(|subject| Lesson {
                teacher,
                room,
                subject,
            }));
        }
    }
    candidates
}
