use std::collections::BTreeSet;

use chrono::{Datelike, Months, NaiveDate};

use crate::models::guide::{GENERAL_NOTICE, REGIONAL_NOTICE};
use crate::models::{find_challenge, Challenge, GuideCategory, Progress};

pub fn display_today(
    today: NaiveDate,
    challenges: &[&Challenge],
    progress: &Progress,
    user_name: &str,
) {
    println!("\n{}", "=".repeat(60));
    println!("  ECOLIFE - Daily Challenge for {}", today);
    println!("{}\n", "=".repeat(60));
    println!("Hi {}! Pick one of today's challenges (one per difficulty).\n", user_name);

    if challenges.is_empty() {
        println!("No challenges today.");
        return;
    }

    let selected = progress.selected_on(today);
    for challenge in challenges {
        let status = if progress.is_completed(today, challenge.id) {
            "[done]"
        } else if selected == Some(challenge.id) {
            "[selected]"
        } else {
            ""
        };

        println!(
            "#{:<3} {} ({}, {}P) {}",
            challenge.id,
            challenge.title,
            challenge.difficulty.display_name(),
            challenge.points,
            status
        );
        println!("     {}", challenge.description);
        println!("     Category: {}\n", challenge.category.display_name());
    }

    println!("{}", "-".repeat(60));
    match selected {
        None => println!("Run `ecolife select <ID>` to choose a challenge"),
        Some(id) if progress.is_completed(today, id) => {
            println!("Today's challenge is complete. Come back tomorrow!")
        }
        Some(_) => println!("Run `ecolife complete` once you've done it"),
    }
    println!("{}\n", "-".repeat(60));
}

pub fn display_stats(progress: &Progress, today: NaiveDate) {
    let completed_today = !progress.completions_on(today).is_empty();
    if completed_today {
        println!("You've completed today's challenge!");
    } else {
        println!("You still have a challenge to complete today!");
    }

    println!("\nTotal points: {}", progress.total_points());
    println!("Days completed: {}", progress.completed_days());
    println!("Current streak: {} day(s)", progress.current_streak(today));
    println!("Longest streak: {} day(s)", progress.longest_streak());
}

pub fn display_calendar(progress: &Progress, date: NaiveDate) {
    let marked = progress.completed_dates_in_month(date.year(), date.month());
    println!("\n{}", render_month(date.year(), date.month(), &marked));
    println!("(* = challenge completed)\n");

    println!("{}", date.format("%B %-d, %Y"));
    let completions = progress.completions_on(date);
    if completions.is_empty() {
        println!("  No challenge completed on this day.");
        return;
    }

    println!("  Challenge complete!");
    for completion in completions {
        if let Some(challenge) = find_challenge(&completion.challenge_id) {
            println!("  - {} (+{}P)", challenge.title, challenge.points);
        }
    }
}

/// Sunday-first month grid; completed days carry a `*`.
pub fn render_month(year: i32, month: u32, marked: &BTreeSet<NaiveDate>) -> String {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return String::new();
    };
    let days_in_month = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day());

    let mut out = format!("{:^28}\n", first.format("%B %Y").to_string());
    out.push_str(" Su  Mo  Tu  We  Th  Fr  Sa\n");

    let mut line = "    ".repeat(first.weekday().num_days_from_sunday() as usize);
    for day in first.iter_days().take(days_in_month as usize) {
        let mark = if marked.contains(&day) { '*' } else { ' ' };
        line.push_str(&format!("{:>3}{}", day.day(), mark));
        if day.weekday().num_days_from_sunday() == 6 {
            out.push_str(line.trim_end());
            out.push('\n');
            line.clear();
        }
    }
    if !line.is_empty() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn display_guide(categories: &[&GuideCategory]) {
    println!("\n{}", "=".repeat(60));
    println!("  ECOLIFE - Recycling Guide");
    println!("{}\n", "=".repeat(60));
    println!("Important: {}\n", GENERAL_NOTICE);

    if categories.is_empty() {
        println!("No results found.");
        return;
    }

    for category in categories {
        println!("{} ({} items)", category.title, category.items.len());
        println!("{}", "-".repeat(60));
        for item in category.items {
            let badge = if item.can_recycle {
                "recyclable"
            } else {
                "general waste"
            };
            println!("  {} [{}]", item.name, badge);
            println!("    {}", item.method);
            for tip in item.tips {
                println!("    * {}", tip);
            }
        }
        println!();
    }

    println!("{}", REGIONAL_NOTICE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_month_layout() {
        // February 2024 starts on a Thursday and has 29 days.
        let marked: BTreeSet<_> = [NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()].into();
        let grid = render_month(2024, 2, &marked);
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines[1], " Su  Mo  Tu  We  Th  Fr  Sa");
        assert_eq!(lines[2], "                  1   2   3");
        assert!(lines[4].contains(" 14*"));
        assert!(lines.last().unwrap().ends_with("29"));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_render_month_invalid_month() {
        assert!(render_month(2024, 13, &BTreeSet::new()).is_empty());
    }
}
