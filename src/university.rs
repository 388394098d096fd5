//! Built-in dataset: a computer-science department's final-year week.

use rand::{Rng, RngCore};

use crate::data::{Calendar, Group, Room, RoomCategory, SchedulingInput, SolverConfig, Teacher};

const MODULES: [&str; 17] = [
    "Securite_lecture",
    "Securite_td",
    "Methodes_formelles_lecture",
    "Methodes_formelles_td",
    "Analyse_numerique_lecture",
    "Analyse_numerique_td",
    "Entrepreneuriat_lecture",
    "Recherche_operationnelle_lecture",
    "Recherche_operationnelle_td",
    "Distributed_architecture_lecture",
    "Distributed_architecture_td",
    "Reseaux_lecture",
    "Reseaux_td",
    "Reseaux_tp",
    "AI_lecture",
    "AI_td",
    "AI_tp",
];

const TEACHERS: [(&str, &[&str]); 17] = [
    ("Mme. Zaidi", &["Reseaux_tp"]),
    ("Dr. Issadi", &["Recherche_operationnelle_lecture", "Recherche_operationnelle_td"]),
    ("Dr. Zedek", &["Methodes_formelles_lecture", "Methodes_formelles_td"]),
    ("Mr. Sahli", &["Reseaux_td"]),
    ("Mme. Hamma", &["AI_tp"]),
    ("Dr. Djenadi", &["Distributed_architecture_lecture", "Distributed_architecture_td"]),
    ("Dr. Lekehali", &["AI_lecture", "AI_td"]),
    ("Dr. Alkama", &["Analyse_numerique_lecture", "Analyse_numerique_td"]),
    ("Dr. Kaci", &["Entrepreneuriat_lecture"]),
    ("M. Abbas && Mme. Ladlani", &["AI_tp"]),
    ("Mme. Djenane", &["Securite_td"]),
    ("Dr. Zenadji", &["Reseaux_lecture", "Reseaux_td"]),
    ("Mme. Khelouf", &["Securite_td"]),
    ("Mme. Kassa", &["Securite_td"]),
    ("Dr. Saba", &["Analyse_numerique_td"]),
    ("Dr. Djebari", &["Securite_lecture"]),
    ("M. Bechar", &["AI_tp"]),
];

const DAYS: [&str; 5] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"];

const TIME_SLOTS: [&str; 5] = [
    "08.30 to 10.00",
    "10.10 to 11.40",
    "11.50 to 13.20",
    "13.30 to 15.00",
    "15.10 to 16.40",
];

const GROUPS: usize = 6;

/// Chance that a module ends up in a given group's curriculum.
const MODULE_PROBABILITY: f64 = 0.3;

/// Builds the department dataset; each group's curriculum is drawn from
/// `rng`, so the same seed always yields the same instance.
pub fn dataset(rng: &mut dyn RngCore) -> SchedulingInput {
    let rooms = (1..=25)
        .map(|n| room(format!("TD{n}"), RoomCategory::Tutorial))
        .chain((1..=11).map(|n| room(format!("TP{n}"), RoomCategory::Lab)))
        .chain(std::iter::once(room("Amphi7".to_string(), RoomCategory::Lecture)))
        .collect();

    let groups = (1..=GROUPS)
        .map(|n| Group {
            name: format!("Group{n}"),
            curriculum: draw_curriculum(rng),
        })
        .collect();

    SchedulingInput {
        modules: MODULES.iter().map(|m| m.to_string()).collect(),
        teachers: TEACHERS
            .iter()
            .map(|(name, subjects)| Teacher {
                name: name.to_string(),
                subjects: subjects.iter().map(|s| s.to_string()).collect(),
            })
            .collect(),
        rooms,
        groups,
        calendar: Calendar {
            days: DAYS.iter().map(|d| d.to_string()).collect(),
            slots: TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
        },
        solver: SolverConfig::default(),
    }
}

/// Includes each module with `MODULE_PROBABILITY`, redrawing until at least
/// one module is picked.
fn draw_curriculum(rng: &mut dyn RngCore) -> Vec<String> {
    loop {
        let curriculum: Vec<String> = MODULES
            .iter()
            .filter(|_| rng.gen_bool(MODULE_PROBABILITY))
            .map(|m| m.to_string())
            .collect();
        if !curriculum.is_empty() {
            return curriculum;
        }
    }
}

fn room(name: String, category: RoomCategory) -> Room {
    Room { name, category }
}
