use itertools::Itertools;
use serde::Serialize;
use std::fmt;

use crate::data::RoomCategory;
use crate::grid::Grid;
use crate::instance::ProblemInstance;

/// One resolved cell of a finished timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledLesson {
    pub day: String,
    pub slot: String,
    pub group: String,
    pub subject: String,
    pub room_category: RoomCategory,
    pub room: String,
    pub teacher: String,
}

/// A complete weekly timetable with names in place of indices.
///
/// Lessons are stored day by day, slot by slot, group by group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    pub days: Vec<String>,
    pub slots: Vec<String>,
    pub groups: Vec<String>,
    pub lessons: Vec<ScheduledLesson>,
}

impl Timetable {
    /// Resolves a grid into names; `None` if any cell is still unassigned.
    pub fn from_grid(grid: &Grid, instance: &ProblemInstance) -> Option<Self> {
        let mut lessons = Vec::with_capacity(grid.total_lessons() * grid.n_groups());
        for day in 0..instance.n_days() {
            for slot in 0..instance.slots_per_day() {
                let row = grid.row(instance.lesson(day, slot));
                for (group, cell) in row.iter().enumerate() {
                    let lesson = (*cell)?;
                    lessons.push(ScheduledLesson {
                        day: instance.day_name(day).to_string(),
                        slot: instance.slot_name(slot).to_string(),
                        group: instance.group_name(group).to_string(),
                        subject: instance.subject_name(lesson.subject).to_string(),
                        room_category: instance.room_category(lesson.room),
                        room: instance.room_name(lesson.room).to_string(),
                        teacher: instance.teacher_name(lesson.teacher).to_string(),
                    });
                }
            }
        }
        Some(Self {
            days: (0..instance.n_days()).map(|d| instance.day_name(d).to_string()).collect(),
            slots: (0..instance.slots_per_day())
                .map(|s| instance.slot_name(s).to_string())
                .collect(),
            groups: (0..instance.n_groups())
                .map(|g| instance.group_name(g).to_string())
                .collect(),
            lessons,
        })
    }

    pub fn get(&self, day: usize, slot: usize, group: usize) -> Option<&ScheduledLesson> {
        if day >= self.days.len() || slot >= self.slots.len() || group >= self.groups.len() {
            return None;
        }
        let index = (day * self.slots.len() + slot) * self.groups.len() + group;
        self.lessons.get(index)
    }
}

impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<10} {}", "", self.slots.iter().join(" | "))?;
        for (day, name) in self.days.iter().enumerate() {
            writeln!(f, "{name}")?;
            for (group, group_name) in self.groups.iter().enumerate() {
                let cells = (0..self.slots.len())
                    .filter_map(|slot| self.get(day, slot, group))
                    .map(|l| {
                        format!("{} ({}) {} / {}", l.subject, l.room_category, l.room, l.teacher)
                    })
                    .join(" | ");
                writeln!(f, "  {group_name:<8} {cells}")?;
            }
        }
        Ok(())
    }
}
