use crate::domain::models::Exercise;

pub fn default_exercises() -> Vec<Exercise> {
    vec![
        exercise(
            "neck_side_bend",
            "Nacken seitlich neigen",
            "Nacken",
            "5 je Seite",
            30,
            "Kopf langsam zur Seite neigen, Schultern bleiben locker.",
        ),
        exercise(
            "neck_half_circle",
            "Nacken-Halbkreis",
            "Nacken",
            "5",
            30,
            "Kopf langsam von einer Schulter zur anderen rollen, nicht nach hinten.",
        ),
        exercise(
            "shoulder_shrug",
            "Schultern hochziehen",
            "Schultern",
            "10",
            20,
            "Schultern Richtung Ohren ziehen und locker fallen lassen.",
        ),
        exercise(
            "shoulder_circle",
            "Schulterkreisen",
            "Schultern",
            "10 vor und zurück",
            30,
            "Große, langsame Kreise mit den Schultern.",
        ),
        exercise(
            "chest_open",
            "Brust öffnen",
            "Brust/Rücken",
            "10–15 Sekunden",
            15,
            "Hände hinter dem Rücken verschränken und Brust öffnen.",
        ),
        exercise(
            "upper_back_round",
            "Oberer Rücken rund",
            "Rücken",
            "5 Atemzüge",
            30,
            "Arme nach vorne strecken und Rücken rund machen.",
        ),
        exercise(
            "pelvic_tilt",
            "Becken kippen",
            "Wirbelsäule",
            "10",
            30,
            "Becken im Stand vor- und zurückkippen.",
        ),
        exercise(
            "torso_rotation",
            "Oberkörperrotation",
            "Wirbelsäule",
            "5 je Seite",
            30,
            "Oberkörper locker rotieren, Arme hängen lassen.",
        ),
        exercise(
            "hip_circle",
            "Hüftkreise",
            "Hüfte",
            "5–10 je Richtung",
            40,
            "Becken langsam kreisen lassen.",
        ),
        exercise(
            "small_lunge",
            "Kleiner Ausfallschritt",
            "Hüfte",
            "10 Sekunden je Seite",
            20,
            "Kleiner Ausfallschritt, Hüfte leicht nach vorne schieben.",
        ),
        exercise(
            "knee_bend",
            "Knie beugen und strecken",
            "Knie",
            "10–15",
            30,
            "Knie locker beugen und wieder strecken.",
        ),
        exercise(
            "weight_shift",
            "Gewicht verlagern",
            "Knie/Beine",
            "10",
            30,
            "Gewicht langsam von einem Bein auf das andere verlagern.",
        ),
        exercise(
            "ankle_raise",
            "Fußspitzen anheben",
            "Sprunggelenke",
            "15",
            30,
            "Aufrechte Haltung, Fußspitzen anheben und senken.",
        ),
        exercise(
            "ankle_circle",
            "Fußgelenke kreisen",
            "Sprunggelenke",
            "5 je Seite",
            30,
            "Fuß im Stand oder leicht angehoben kreisen.",
        ),
    ]
}

fn exercise(
    id: &str,
    name: &str,
    body_part: &str,
    repetitions: &str,
    duration_seconds: u32,
    description: &str,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        body_part: body_part.to_string(),
        repetitions: repetitions.to_string(),
        duration_seconds,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_catalog_is_populated_with_unique_ids() {
        let exercises = default_exercises();
        assert!(exercises.len() >= 2);

        let ids = exercises
            .iter()
            .map(|exercise| exercise.id.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), exercises.len());
    }

    #[test]
    fn default_catalog_entries_are_complete() {
        for exercise in default_exercises() {
            assert!(!exercise.id.trim().is_empty());
            assert!(!exercise.name.trim().is_empty());
            assert!(!exercise.body_part.trim().is_empty());
            assert!(exercise.duration_seconds > 0);
        }
    }
}
