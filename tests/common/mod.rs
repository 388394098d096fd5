use std::collections::{HashMap, HashSet};

use timetable_csp::data::RoomCategory;
use timetable_csp::{SchedulingInput, Timetable};

/// Two groups over two lessons; each needs subject A once in a lecture hall
/// and once in a tutorial room.
pub fn two_by_two() -> SchedulingInput {
    SchedulingInput::from_json_str(
        r#"{
            "modules": ["A"],
            "teachers": [
                { "name": "T1", "subjects": ["A"] },
                { "name": "T2", "subjects": ["A"] }
            ],
            "rooms": [
                { "name": "Amphi1", "category": "lecture" },
                { "name": "Amphi2", "category": "lecture" },
                { "name": "TD1", "category": "tutorial" },
                { "name": "TD2", "category": "tutorial" }
            ],
            "groups": [
                { "name": "G1", "curriculum": ["A"] },
                { "name": "G2", "curriculum": ["A"] }
            ],
            "calendar": { "days": ["Sunday"], "slots": ["08.30", "10.10"] },
            "solver": { "randomSeed": 1 }
        }"#,
    )
    .unwrap()
}

/// Two groups with two subjects each over four lessons and one teacher per
/// subject, so the groups must alternate.
pub fn two_subjects() -> SchedulingInput {
    SchedulingInput::from_json_str(
        r#"{
            "modules": ["AI", "Net"],
            "teachers": [
                { "name": "Lekehali", "subjects": ["AI"] },
                { "name": "Zenadji", "subjects": ["Net"] }
            ],
            "rooms": [
                { "name": "Amphi7", "category": "lecture" },
                { "name": "TD1", "category": "tutorial" },
                { "name": "TP1", "category": "lab" }
            ],
            "groups": [
                { "name": "Group1", "curriculum": ["AI", "Net"] },
                { "name": "Group2", "curriculum": ["AI", "Net"] }
            ],
            "calendar": { "days": ["Sunday", "Monday"], "slots": ["08.30", "10.10"] },
            "solver": { "randomSeed": 1 }
        }"#,
    )
    .unwrap()
}

/// Asserts exclusivity, qualification and coverage on a finished timetable.
pub fn assert_valid(input: &SchedulingInput, timetable: &Timetable) {
    let capabilities: HashMap<&str, &Vec<String>> = input
        .teachers
        .iter()
        .map(|t| (t.name.as_str(), &t.subjects))
        .collect();

    for day in 0..timetable.days.len() {
        for slot in 0..timetable.slots.len() {
            let mut teachers = HashSet::new();
            let mut rooms = HashSet::new();
            for group in 0..timetable.groups.len() {
                let lesson = timetable.get(day, slot, group).unwrap();
                assert!(teachers.insert(lesson.teacher.clone()), "teacher double-booked");
                assert!(rooms.insert(lesson.room.clone()), "room double-booked");
                assert!(capabilities[lesson.teacher.as_str()].contains(&lesson.subject));
            }
        }
    }

    let required = input.solver.coverage_categories;
    for group in &input.groups {
        for subject in &group.curriculum {
            let categories: HashSet<RoomCategory> = timetable
                .lessons
                .iter()
                .filter(|l| l.group == group.name && l.subject == *subject)
                .map(|l| l.room_category)
                .collect();
            assert_eq!(categories.len(), required, "{} / {}", group.name, subject);
        }
    }
}
