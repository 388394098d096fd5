//! Small hand-checked instances shared by the unit tests.

use crate::data::{
    Calendar, Group, Room, RoomCategory, SchedulingInput, SolverConfig, Teacher,
};

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn input(
    modules: &[&str],
    teachers: &[(&str, &[&str])],
    rooms: &[(&str, RoomCategory)],
    groups: &[(&str, &[&str])],
    slots: usize,
) -> SchedulingInput {
    SchedulingInput {
        modules: strings(modules),
        teachers: teachers
            .iter()
            .map(|(name, subjects)| Teacher {
                name: name.to_string(),
                subjects: strings(subjects),
            })
            .collect(),
        rooms: rooms
            .iter()
            .map(|(name, category)| Room {
                name: name.to_string(),
                category: *category,
            })
            .collect(),
        groups: groups
            .iter()
            .map(|(name, curriculum)| Group {
                name: name.to_string(),
                curriculum: strings(curriculum),
            })
            .collect(),
        calendar: Calendar {
            days: strings(&["Sunday"]),
            slots: (0..slots).map(|s| format!("slot{s}")).collect(),
        },
        solver: SolverConfig {
            random_seed: Some(42),
            ..SolverConfig::default()
        },
    }
}

/// One group, one lesson, one subject, one teacher, one room.
pub(crate) fn trivial() -> SchedulingInput {
    let mut input = input(
        &["X"],
        &[("T1", &["X"])],
        &[("TD1", RoomCategory::Tutorial)],
        &[("G1", &["X"])],
        1,
    );
    input.solver.coverage_categories = 1;
    input
}

/// Two groups sharing subject X in a single lesson with two tutorial rooms.
pub(crate) fn shared_subject() -> SchedulingInput {
    let mut input = input(
        &["X"],
        &[("T1", &["X"]), ("T2", &["X"])],
        &[("TD1", RoomCategory::Tutorial), ("TD2", RoomCategory::Tutorial)],
        &[("G1", &["X"]), ("G2", &["X"])],
        1,
    );
    input.solver.coverage_categories = 1;
    input
}

/// Two groups over two lessons; each must see A once in a lecture hall and
/// once in a tutorial room.
pub(crate) fn two_by_two() -> SchedulingInput {
    input(
        &["A"],
        &[("T1", &["A"]), ("T2", &["A"])],
        &[
            ("Amphi1", RoomCategory::Lecture),
            ("Amphi2", RoomCategory::Lecture),
            ("TD1", RoomCategory::Tutorial),
            ("TD2", RoomCategory::Tutorial),
        ],
        &[("G1", &["A"]), ("G2", &["A"])],
        2,
    )
}

/// G2 can only be taught by T1, so G1 can never take B (only T1 teaches it).
pub(crate) fn prunable() -> SchedulingInput {
    input(
        &["A", "B", "C"],
        &[("T1", &["A", "B", "C"]), ("T2", &["A"])],
        &[("TD1", RoomCategory::Tutorial), ("Amphi1", RoomCategory::Lecture)],
        &[("G1", &["A", "B"]), ("G2", &["C"])],
        2,
    )
}
