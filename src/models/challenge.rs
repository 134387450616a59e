use super::difficulty::{ChallengeCategory, Difficulty};

#[derive(Debug, PartialEq, Eq)]
pub struct Challenge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub points: u32,
    pub difficulty: Difficulty,
    pub category: ChallengeCategory,
}

// Order matters: daily selection indexes into the per-difficulty lists in
// catalogue order.
pub static CHALLENGES: &[Challenge] = &[
    Challenge {
        id: "1",
        title: "Sort your plastic containers",
        description: "Rinse the plastic containers you used today and put them out for recycling.",
        points: 5,
        difficulty: Difficulty::Easy,
        category: ChallengeCategory::Recycling,
    },
    Challenge {
        id: "2",
        title: "Take public transport",
        description: "Leave the car at home: take the bus or subway, walk, or ride a bike.",
        points: 5,
        difficulty: Difficulty::Easy,
        category: ChallengeCategory::Lifestyle,
    },
    Challenge {
        id: "3",
        title: "Carry a tumbler",
        description: "Use your own tumbler instead of a disposable cup at cafes today.",
        points: 5,
        difficulty: Difficulty::Easy,
        category: ChallengeCategory::Lifestyle,
    },
    Challenge {
        id: "4",
        title: "Recycle paper",
        description: "Bundle up old newspapers and boxes at home and put them out for recycling.",
        points: 5,
        difficulty: Difficulty::Easy,
        category: ChallengeCategory::Recycling,
    },
    Challenge {
        id: "5",
        title: "Unplug idle appliances",
        description: "Pull the plugs of appliances you are not using.",
        points: 5,
        difficulty: Difficulty::Easy,
        category: ChallengeCategory::Lifestyle,
    },
    Challenge {
        id: "15",
        title: "Leave no leftovers",
        description: "Serve yourself sensible portions to cut down on food waste.",
        points: 5,
        difficulty: Difficulty::Easy,
        category: ChallengeCategory::Lifestyle,
    },
    Challenge {
        id: "6",
        title: "No disposables",
        description: "Avoid disposable cups and straws for the whole day.",
        points: 10,
        difficulty: Difficulty::Medium,
        category: ChallengeCategory::Lifestyle,
    },
    Challenge {
        id: "7",
        title: "Use eco-friendly products",
        description: "Use an eco-friendly detergent or product today.",
        points: 10,
        difficulty: Difficulty::Medium,
        category: ChallengeCategory::Lifestyle,
    },
    Challenge {
        id: "8",
        title: "Switch off the lights",
        description: "Turn the lights off whenever you leave a room.",
        points: 10,
        difficulty: Difficulty::Medium,
        category: ChallengeCategory::Lifestyle,
    },
    Challenge {
        id: "9",
        title: "Bring a shopping bag",
        description: "Take a reusable bag instead of plastic bags when you shop.",
        points: 10,
        difficulty: Difficulty::Medium,
        category: ChallengeCategory::Lifestyle,
    },
    Challenge {
        id: "10",
        title: "Use a handkerchief",
        description: "Use a handkerchief instead of paper towels in public restrooms.",
        points: 10,
        difficulty: Difficulty::Medium,
        category: ChallengeCategory::Lifestyle,
    },
    Challenge {
        id: "11",
        title: "Donate old clothes",
        description: "Send clothes you no longer wear to a donation center.",
        points: 20,
        difficulty: Difficulty::Hard,
        category: ChallengeCategory::Recycling,
    },
    Challenge {
        id: "12",
        title: "Upcycling DIY",
        description: "Make something new out of recyclables (e.g. a PET bottle flower pot).",
        points: 20,
        difficulty: Difficulty::Hard,
        category: ChallengeCategory::Recycling,
    },
    Challenge {
        id: "13",
        title: "Go plogging",
        description: "Pick up litter while you jog.",
        points: 20,
        difficulty: Difficulty::Hard,
        category: ChallengeCategory::Lifestyle,
    },
    Challenge {
        id: "14",
        title: "Bring your own container",
        description: "Use your own container when ordering takeout.",
        points: 20,
        difficulty: Difficulty::Hard,
        category: ChallengeCategory::Lifestyle,
    },
];

pub fn find_challenge(id: &str) -> Option<&'static Challenge> {
    CHALLENGES.iter().find(|c| c.id == id)
}

pub fn challenges_by_difficulty(
    catalogue: &[Challenge],
    difficulty: Difficulty,
) -> Vec<&Challenge> {
    catalogue
        .iter()
        .filter(|c| c.difficulty == difficulty)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = CHALLENGES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CHALLENGES.len());
    }

    #[test]
    fn test_points_follow_difficulty() {
        for c in CHALLENGES {
            let expected = match c.difficulty {
                Difficulty::Easy => 5,
                Difficulty::Medium => 10,
                Difficulty::Hard => 20,
            };
            assert_eq!(c.points, expected, "challenge {}", c.id);
        }
    }

    #[test]
    fn test_difficulty_lists_keep_catalogue_order() {
        let easy: Vec<_> = challenges_by_difficulty(CHALLENGES, Difficulty::Easy)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(easy, ["1", "2", "3", "4", "5", "15"]);
        assert_eq!(challenges_by_difficulty(CHALLENGES, Difficulty::Medium).len(), 5);
        assert_eq!(challenges_by_difficulty(CHALLENGES, Difficulty::Hard).len(), 4);
    }

    #[test]
    fn test_find_challenge() {
        assert_eq!(find_challenge("15").map(|c| c.points), Some(5));
        assert!(find_challenge("99").is_none());
    }
}
