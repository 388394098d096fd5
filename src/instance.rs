use std::collections::{BTreeSet, HashMap};

use crate::data::{RoomCategory, SchedulingInput};
use crate::error::ScheduleError;

// Indices into the instance tables.
pub type SubjectId = usize;
pub type TeacherId = usize;
pub type RoomId = usize;
pub type GroupId = usize;

/// Immutable, validated view of a [`SchedulingInput`].
///
/// Names are resolved to dense indices once so the search only ever compares
/// integers. Capability and curriculum sets are ordered so that a seeded run
/// produces the same candidate order every time.
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    subjects: Vec<String>,
    teachers: Vec<String>,
    capabilities: Vec<BTreeSet<SubjectId>>,
    rooms: Vec<String>,
    room_categories: Vec<RoomCategory>,
    groups: Vec<String>,
    curricula: Vec<BTreeSet<SubjectId>>,
    days: Vec<String>,
    slots: Vec<String>,
}

impl ProblemInstance {
    pub fn new(input: &SchedulingInput) -> Result<Self, ScheduleError> {
        if input.calendar.total_lessons() == 0 {
            return Err(ScheduleError::EmptyCalendar);
        }
        if input.groups.is_empty() {
            return Err(ScheduleError::NoGroups);
        }
        if input.rooms.is_empty() {
            return Err(ScheduleError::NoRooms);
        }
        if input.teachers.is_empty() {
            return Err(ScheduleError::NoTeachers);
        }

        let subject_ids: HashMap<&str, SubjectId> = input
            .modules
            .iter()
            .enumerate()
            .map(|(id, name)| (name.as_str(), id))
            .collect();
        let resolve = |owner: &str, names: &[String]| -> Result<BTreeSet<SubjectId>, ScheduleError> {
            names
                .iter()
                .map(|name| {
                    subject_ids.get(name.as_str()).copied().ok_or_else(|| {
                        ScheduleError::UnknownSubject {
                            owner: owner.to_string(),
                            subject: name.clone(),
                        }
                    })
                })
                .collect()
        };

        let capabilities = input
            .teachers
            .iter()
            .map(|t| resolve(&t.name, &t.subjects))
            .collect::<Result<Vec<_>, _>>()?;
        let curricula = input
            .groups
            .iter()
            .map(|g| resolve(&g.name, &g.curriculum))
            .collect::<Result<Vec<_>, _>>()?;

        let teachable: BTreeSet<SubjectId> = capabilities.iter().flatten().copied().collect();
        for (group, curriculum) in input.groups.iter().zip(&curricula) {
            if curriculum.is_empty() {
                return Err(ScheduleError::EmptyCurriculum {
                    group: group.name.clone(),
                });
            }
            if let Some(&subject) = curriculum.iter().find(|&s| !teachable.contains(s)) {
                return Err(ScheduleError::UnteachableSubject {
                    group: group.name.clone(),
                    subject: input.modules[subject].clone(),
                });
            }
        }

        Ok(Self {
            subjects: input.modules.clone(),
            teachers: input.teachers.iter().map(|t| t.name.clone()).collect(),
            capabilities,
            rooms: input.rooms.iter().map(|r| r.name.clone()).collect(),
            room_categories: input.rooms.iter().map(|r| r.category).collect(),
            groups: input.groups.iter().map(|g| g.name.clone()).collect(),
            curricula,
            days: input.calendar.days.clone(),
            slots: input.calendar.slots.clone(),
        })
    }

    pub fn n_teachers(&self) -> usize {
        self.teachers.len()
    }

    pub fn n_rooms(&self) -> usize {
        self.rooms.len()
    }

    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn n_days(&self) -> usize {
        self.days.len()
    }

    pub fn slots_per_day(&self) -> usize {
        self.slots.len()
    }

    pub fn total_lessons(&self) -> usize {
        self.days.len() * self.slots.len()
    }

    /// Linear lesson index of `slot` on `day`.
    pub fn lesson(&self, day: usize, slot: usize) -> usize {
        day * self.slots.len() + slot
    }

    pub fn capabilities(&self, teacher: TeacherId) -> &BTreeSet<SubjectId> {
        &self.capabilities[teacher]
    }

    /// Curriculum as given in the input, before any pruning.
    pub fn curriculum(&self, group: GroupId) -> &BTreeSet<SubjectId> {
        &self.curricula[group]
    }

    pub fn room_category(&self, room: RoomId) -> RoomCategory {
        self.room_categories[room]
    }

    pub fn subject_name(&self, subject: SubjectId) -> &str {
        &self.subjects[subject]
    }

    pub fn teacher_name(&self, teacher: TeacherId) -> &str {
        &self.teachers[teacher]
    }

    pub fn room_name(&self, room: RoomId) -> &str {
        &self.rooms[room]
    }

    pub fn group_name(&self, group: GroupId) -> &str {
        &self.groups[group]
    }

    pub fn day_name(&self, day: usize) -> &str {
        &self.days[day]
    }

    pub fn slot_name(&self, slot: usize) -> &str {
        &self.slots[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn resolves_names_to_indices() {
        let instance = ProblemInstance::new(&fixtures::prunable()).unwrap();
        assert_eq!(instance.n_groups(), 2);
        assert_eq!(instance.total_lessons(), 2);
        assert_eq!(instance.subject_name(2), "C");
        assert_eq!(instance.capabilities(0), &BTreeSet::from([0, 1, 2]));
        assert_eq!(instance.curriculum(1), &BTreeSet::from([2]));
        assert_eq!(instance.room_category(1), RoomCategory::Lecture);
    }

    #[test]
    fn lessons_are_numbered_day_major() {
        let mut input = fixtures::two_by_two();
        input.calendar.days = vec!["Sun".into(), "Mon".into()];
        input.calendar.slots = vec!["a".into(), "b".into(), "c".into()];
        let instance = ProblemInstance::new(&input).unwrap();
        assert_eq!(instance.lesson(0, 2), 2);
        assert_eq!(instance.lesson(1, 0), 3);
        assert_eq!(instance.total_lessons(), 6);
    }

    #[test]
    fn empty_calendar_is_rejected() {
        let mut input = fixtures::trivial();
        input.calendar.slots.clear();
        assert!(matches!(
            ProblemInstance::new(&input),
            Err(ScheduleError::EmptyCalendar)
        ));
    }

    #[test]
    fn unteachable_subject_is_rejected() {
        let mut input = fixtures::trivial();
        input.modules.push("Y".into());
        input.groups[0].curriculum.push("Y".into());
        match ProblemInstance::new(&input) {
            Err(ScheduleError::UnteachableSubject { group, subject }) => {
                assert_eq!(group, "G1");
                assert_eq!(subject, "Y");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_subject_is_rejected() {
        let mut input = fixtures::trivial();
        input.teachers[0].subjects.push("Z".into());
        assert!(matches!(
            ProblemInstance::new(&input),
            Err(ScheduleError::UnknownSubject { .. })
        ));
    }

    #[test]
    fn empty_curriculum_is_rejected() {
        let mut input = fixtures::trivial();
        input.groups[0].curriculum.clear();
        assert!(matches!(
            ProblemInstance::new(&input),
            Err(ScheduleError::EmptyCurriculum { .. })
        ));
    }
}
