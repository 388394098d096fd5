use std::collections::BTreeSet;

use crate::instance::{GroupId, ProblemInstance, RoomId, SubjectId, TeacherId};

/// A (teacher, room, subject) triple occupying one cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lesson {
    pub teacher: TeacherId,
    pub room: RoomId,
    pub subject: SubjectId,
}

/// Mutable search state: one optional [`Lesson`] per (lesson index, group),
/// stored row by row, plus each group's working curriculum.
///
/// A cell is either fully assigned or empty, never partially set.
#[derive(Debug, Clone)]
pub struct Grid {
    n_groups: usize,
    cells: Vec<Option<Lesson>>,
    curricula: Vec<BTreeSet<SubjectId>>,
}

impl Grid {
    pub fn new(instance: &ProblemInstance) -> Self {
        Self {
            n_groups: instance.n_groups(),
            cells: vec![None; instance.total_lessons() * instance.n_groups()],
            curricula: (0..instance.n_groups())
                .map(|g| instance.curriculum(g).clone())
                .collect(),
        }
    }

    pub fn total_lessons(&self) -> usize {
        self.cells.len() / self.n_groups
    }

    pub fn n_groups(&self) -> usize {
        self.n_groups
    }

    pub fn get(&self, lesson: usize, group: GroupId) -> Option<Lesson> {
        self.cells[lesson * self.n_groups + group]
    }

    pub fn set(&mut self, lesson: usize, group: GroupId, value: Lesson) {
        self.cells[lesson * self.n_groups + group] = Some(value);
    }

    /// Puts back whatever was in the cell before, assigned or not.
    pub fn restore(&mut self, lesson: usize, group: GroupId, previous: Option<Lesson>) {
        self.cells[lesson * self.n_groups + group] = previous;
    }

    pub fn unset(&mut self, lesson: usize, group: GroupId) {
        self.cells[lesson * self.n_groups + group] = None;
    }

    /// All groups' cells at one lesson.
    pub fn row(&self, lesson: usize) -> &[Option<Lesson>] {
        let start = lesson * self.n_groups;
        &self.cells[start..start + self.n_groups]
    }

    /// One group's cells across the whole week.
    pub fn column(&self, group: GroupId) -> impl Iterator<Item = Option<Lesson>> + '_ {
        self.cells.iter().skip(group).step_by(self.n_groups).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_column_complete(&self, group: GroupId) -> bool {
        self.column(group).all(|cell| cell.is_some())
    }

    pub fn unassigned_in_row(&self, lesson: usize) -> usize {
        self.row(lesson).iter().filter(|cell| cell.is_none()).count()
    }

    /// Subjects the group still has to be taught; may shrink under arc
    /// consistency but never during search.
    pub fn curriculum(&self, group: GroupId) -> &BTreeSet<SubjectId> {
        &self.curricula[group]
    }

    pub fn remove_subject(&mut self, group: GroupId, subject: SubjectId) -> bool {
        self.curricula[group].remove(&subject)
    }
}
