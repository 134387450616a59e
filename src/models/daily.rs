use chrono::NaiveDate;

use super::challenge::{challenges_by_difficulty, Challenge, CHALLENGES};
use super::difficulty::Difficulty;
use super::seed::SeededRandom;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's offer: one challenge per difficulty, easy first.
pub fn daily_challenges(date: NaiveDate) -> Vec<&'static Challenge> {
    draw_from(CHALLENGES, date)
}

pub fn is_offered_on(date: NaiveDate, id: &str) -> bool {
    daily_challenges(date).iter().any(|c| c.id == id)
}

fn draw_from(catalogue: &[Challenge], date: NaiveDate) -> Vec<&Challenge> {
    let mut rng = SeededRandom::new(&date.format(DATE_FORMAT).to_string());

    Difficulty::ALL
        .iter()
        .filter_map(|&difficulty| {
            let list = challenges_by_difficulty(catalogue, difficulty);
            if list.is_empty() {
                return None;
            }
            Some(list[pick_index(rng.next_f64(), list.len())])
        })
        .collect()
}

/// Maps `r` in `[0, 1]` to an index below `len`. `r == 1.0` lands on the
/// last element. `len` must be non-zero.
fn pick_index(r: f64, len: usize) -> usize {
    ((r * len as f64) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::difficulty::ChallengeCategory;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn ids(date_str: &str) -> Vec<&'static str> {
        daily_challenges(date(date_str)).iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_known_days() {
        assert_eq!(ids("2024-01-01"), ["1", "6", "13"]);
        assert_eq!(ids("2025-06-15"), ["5", "9", "14"]);
        assert_eq!(ids("2023-12-31"), ["4", "10", "14"]);
    }

    #[test]
    fn test_one_per_difficulty_in_order() {
        let picks = daily_challenges(date("2026-10-16"));
        let difficulties: Vec<_> = picks.iter().map(|c| c.difficulty).collect();
        assert_eq!(difficulties, Difficulty::ALL);
    }

    #[test]
    fn test_selection_is_stable_for_a_date() {
        assert_eq!(ids("2026-03-09"), ids("2026-03-09"));
    }

    #[test]
    fn test_pick_index_bounds() {
        assert_eq!(pick_index(0.0, 4), 0);
        assert_eq!(pick_index(0.2499, 4), 0);
        assert_eq!(pick_index(0.25, 4), 1);
        assert_eq!(pick_index(0.999, 4), 3);
        assert_eq!(pick_index(1.0, 4), 3);
        assert_eq!(pick_index(1.0, 1), 0);
    }

    #[test]
    fn test_is_offered_on() {
        assert!(is_offered_on(date("2024-01-01"), "13"));
        assert!(!is_offered_on(date("2024-01-01"), "14"));
    }

    #[test]
    fn test_missing_difficulty_is_skipped() {
        let catalogue = [Challenge {
            id: "only",
            title: "Only one",
            description: "",
            points: 10,
            difficulty: Difficulty::Medium,
            category: ChallengeCategory::Lifestyle,
        }];
        let picks = draw_from(&catalogue, date("2024-01-01"));
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].id, "only");
    }
}
