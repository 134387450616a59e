//! Challenge selections and completions, plus the point and streak
//! aggregates computed from them.
//!
//! Every operation takes the reference day explicitly; the CLI passes the
//! local calendar day.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Days, NaiveDate};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::challenge::{find_challenge, Challenge};
use super::daily::is_offered_on;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub date: NaiveDate,
    pub challenge_id: String,
    pub completed: bool,
}

/// Persisted progress document. Invariant: at most one completion per
/// `(date, challenge_id)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub completions: Vec<Completion>,
    #[serde(default)]
    pub selections: BTreeMap<NaiveDate, String>,
}

impl Progress {
    /// Picks one of the challenges offered on `today`. Changing the pick is
    /// allowed until something has been completed that day.
    pub fn select(&mut self, today: NaiveDate, id: &str) -> Result<&'static Challenge> {
        let challenge = find_challenge(id).ok_or_else(|| Error::UnknownChallenge(id.to_string()))?;
        if !is_offered_on(today, id) {
            return Err(Error::NotOfferedToday {
                id: id.to_string(),
                date: today,
            });
        }
        if self.has_completion_on(today) && self.selected_on(today) != Some(id) {
            return Err(Error::AlreadyCompleted(today));
        }

        info!("selected challenge {} for {}", id, today);
        self.selections.insert(today, id.to_string());
        Ok(challenge)
    }

    pub fn selected_on(&self, date: NaiveDate) -> Option<&str> {
        self.selections.get(&date).map(String::as_str)
    }

    /// Marks today's selected challenge as completed, replacing any earlier
    /// record for the same day and challenge.
    pub fn complete_selected(&mut self, today: NaiveDate) -> Result<&'static Challenge> {
        let id = self
            .selected_on(today)
            .ok_or(Error::NoSelection(today))?
            .to_string();
        let challenge = find_challenge(&id).ok_or_else(|| Error::UnknownChallenge(id.clone()))?;

        self.completions
            .retain(|c| !(c.date == today && c.challenge_id == id));
        self.completions.push(Completion {
            date: today,
            challenge_id: id,
            completed: true,
        });
        info!("completed challenge {} on {}", challenge.id, today);
        Ok(challenge)
    }

    pub fn is_completed(&self, date: NaiveDate, id: &str) -> bool {
        self.completions
            .iter()
            .any(|c| c.date == date && c.challenge_id == id && c.completed)
    }

    pub fn completions_on(&self, date: NaiveDate) -> Vec<&Completion> {
        self.completions
            .iter()
            .filter(|c| c.date == date && c.completed)
            .collect()
    }

    fn has_completion_on(&self, date: NaiveDate) -> bool {
        self.completions.iter().any(|c| c.date == date && c.completed)
    }

    /// Sum of catalogue points; ids missing from the catalogue count as 0.
    pub fn total_points(&self) -> u32 {
        self.completions
            .iter()
            .filter(|c| c.completed)
            .map(|c| {
                find_challenge(&c.challenge_id).map_or_else(
                    || {
                        debug!("ignoring unknown challenge id {}", c.challenge_id);
                        0
                    },
                    |challenge| challenge.points,
                )
            })
            .sum()
    }

    pub fn completed_days(&self) -> usize {
        self.completed_dates().len()
    }

    fn completed_dates(&self) -> BTreeSet<NaiveDate> {
        self.completions
            .iter()
            .filter(|c| c.completed)
            .map(|c| c.date)
            .collect()
    }

    /// Consecutive completed days ending today. A streak that ended
    /// yesterday is still alive until today is over.
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        let dates = self.completed_dates();
        let start = if dates.contains(&today) {
            today
        } else {
            match today.checked_sub_days(Days::new(1)) {
                Some(yesterday) if dates.contains(&yesterday) => yesterday,
                _ => return 0,
            }
        };

        let mut streak = 0;
        let mut day = Some(start);
        while let Some(d) = day.filter(|d| dates.contains(d)) {
            streak += 1;
            day = d.pred_opt();
        }
        streak
    }

    pub fn longest_streak(&self) -> u32 {
        let mut longest = 0;
        let mut run = 0;
        let mut previous: Option<NaiveDate> = None;

        for date in self.completed_dates() {
            run = match previous {
                Some(p) if p.succ_opt() == Some(date) => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            previous = Some(date);
        }
        longest
    }

    pub fn completed_dates_in_month(&self, year: i32, month: u32) -> BTreeSet<NaiveDate> {
        self.completed_dates()
            .into_iter()
            .filter(|d| d.year() == year && d.month() == month)
            .collect()
    }
}
