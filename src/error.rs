use thiserror::Error;

/// Problems with the input that are detected before any search happens, plus
/// the arc-consistency pass emptying a curriculum.
///
/// Running out of candidates during search is not an error: it is reported
/// as an unsolved [`SchedulingOutput`](crate::data::SchedulingOutput).
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("calendar has no lessons")]
    EmptyCalendar,

    #[error("no groups to schedule")]
    NoGroups,

    #[error("no rooms available")]
    NoRooms,

    #[error("no teachers available")]
    NoTeachers,

    #[error("{owner} refers to unknown subject {subject}")]
    UnknownSubject { owner: String, subject: String },

    #[error("group {group} requires {subject}, which no teacher can teach")]
    UnteachableSubject { group: String, subject: String },

    #[error("group {group} has an empty curriculum")]
    EmptyCurriculum { group: String },

    /// Arc consistency proved the group can take none of its subjects.
    #[error("arc consistency removed every subject of group {group}")]
    CurriculumExhausted { group: String },
}
