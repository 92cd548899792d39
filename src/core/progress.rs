//! Progress engine: balance, percentage, streak and per-day totals derived
//! from the action log. Everything here is a pure function of its inputs.
//!
//! Point values come from each entry's snapshot, so editing or deleting an
//! action type never changes historical totals.
//!
//! A streak counts consecutive calendar days with at least one
//! positive-valued action. The same definition is used for the "is the
//! streak still alive" gate (today or yesterday) and for the backward walk.

use crate::models::{DayTotal, LoggedAction, ProgressSnapshot};
use chrono::{Days, NaiveDate};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Hard bound on the backward streak walk.
pub const MAX_STREAK_DAYS: u32 = 365;

pub struct ProgressEngine;

impl ProgressEngine {
    pub fn compute(actions: &[LoggedAction], goal: i64, today: NaiveDate) -> ProgressSnapshot {
        let total_earned: i64 = actions.iter().filter(|a| a.is_positive()).map(|a| a.value()).sum();
        let total_lost: i64 = actions
            .iter()
            .filter(|a| a.is_negative())
            .map(|a| a.value())
            .sum::<i64>()
            .abs();

        let net_gain = total_earned - total_lost;

        let snapshot = ProgressSnapshot {
            total_earned,
            total_lost,
            net_gain,
            current_balance: goal - net_gain,
            progress_percent: progress_percent(net_gain, goal),
            current_streak: current_streak(actions, today),
            today_action_count: actions.iter().filter(|a| a.date == today).count(),
        };

        debug!(?snapshot, goal, %today, "progress recomputed");
        snapshot
    }

    /// Earned / lost / count per calendar day, oldest first.
    pub fn daily_totals<'a, I>(actions: I) -> BTreeMap<NaiveDate, DayTotal>
    where
        I: IntoIterator<Item = &'a LoggedAction>,
    {
        let mut out: BTreeMap<NaiveDate, DayTotal> = BTreeMap::new();
        for a in actions {
            let day = out.entry(a.date).or_default();
            day.count += 1;
            if a.is_positive() {
                day.earned += a.value();
            } else if a.is_negative() {
                day.lost += a.value().abs();
            }
        }
        out
    }
}

/// `net_gain / goal` as a percentage clamped to [0, 100]. A zero goal yields 0.
pub fn progress_percent(net_gain: i64, goal: i64) -> f64 {
    if goal <= 0 {
        return 0.0;
    }
    (net_gain as f64 / goal as f64 * 100.0).clamp(0.0, 100.0)
}

/// Consecutive days, walking back from `today`, with a positive action.
pub fn current_streak(actions: &[LoggedAction], today: NaiveDate) -> u32 {
    let active: HashSet<NaiveDate> = actions
        .iter()
        .filter(|a| a.is_positive())
        .map(|a| a.date)
        .collect();

    let yesterday = today.checked_sub_days(Days::new(1));
    let alive = active.contains(&today) || yesterday.is_some_and(|y| active.contains(&y));
    if !alive {
        return 0;
    }

    let mut streak = 0;
    let mut cursor = today;
    while streak < MAX_STREAK_DAYS && active.contains(&cursor) {
        streak += 1;
        match cursor.checked_sub_days(Days::new(1)) {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionType, Category};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn days_ago(n: u64) -> NaiveDate {
        today().checked_sub_days(Days::new(n)).unwrap()
    }

    fn entry(id: u64, value: i64, date: NaiveDate) -> LoggedAction {
        let category = Category::of_value(value);
        let t = ActionType::new(id as u32, "t", category, value, false);
        LoggedAction::new(id, &t, date, None)
    }

    #[test]
    fn scenario_goal_20000() {
        let actions = vec![entry(1, 5000, days_ago(1)), entry(2, -2000, today())];
        let p = ProgressEngine::compute(&actions, 20_000, today());

        assert_eq!(p.total_earned, 5000);
        assert_eq!(p.total_lost, 2000);
        assert_eq!(p.net_gain, 3000);
        assert_eq!(p.current_balance, 17_000);
        assert_eq!(p.progress_percent, 15.0);
        assert_eq!(p.today_action_count, 1);
    }

    #[test]
    fn percent_is_clamped_but_balance_is_not() {
        let actions = vec![entry(1, 50_000, today())];
        let p = ProgressEngine::compute(&actions, 20_000, today());
        assert_eq!(p.progress_percent, 100.0);
        assert_eq!(p.current_balance, -30_000);

        let actions = vec![entry(1, -500, today())];
        let p = ProgressEngine::compute(&actions, 20_000, today());
        assert_eq!(p.progress_percent, 0.0);
        assert_eq!(p.current_balance, 20_500);
    }

    #[test]
    fn zero_goal_does_not_divide() {
        assert_eq!(progress_percent(100, 0), 0.0);
    }

    #[test]
    fn seven_consecutive_days() {
        let actions: Vec<LoggedAction> = (0..7).map(|i| entry(i + 1, 100, days_ago(i))).collect();
        assert_eq!(current_streak(&actions, today()), 7);
    }

    #[test]
    fn gap_breaks_streak() {
        let actions = vec![entry(1, 100, days_ago(2))];
        assert_eq!(current_streak(&actions, today()), 0);

        let actions = vec![
            entry(1, 100, today()),
            entry(2, 100, days_ago(1)),
            entry(3, 100, days_ago(3)),
        ];
        assert_eq!(current_streak(&actions, today()), 2);
    }

    #[test]
    fn walk_starts_at_today() {
        // yesterday passes the gate, but the walk starts today and finds nothing
        let actions = vec![entry(1, 100, days_ago(1)), entry(2, 100, days_ago(2))];
        assert_eq!(current_streak(&actions, today()), 0);
    }

    #[test]
    fn negative_actions_do_not_count_toward_streak() {
        let actions = vec![entry(1, -100, today()), entry(2, -100, days_ago(1))];
        assert_eq!(current_streak(&actions, today()), 0);

        let actions = vec![
            entry(1, 100, today()),
            entry(2, -100, days_ago(1)),
            entry(3, 100, days_ago(2)),
        ];
        assert_eq!(current_streak(&actions, today()), 1);
    }

    #[test]
    fn streak_is_bounded() {
        let actions: Vec<LoggedAction> = (0..400).map(|i| entry(i + 1, 10, days_ago(i))).collect();
        assert_eq!(current_streak(&actions, today()), MAX_STREAK_DAYS);
    }

    #[test]
    fn daily_totals_group_by_day() {
        let actions = vec![
            entry(1, 300, today()),
            entry(2, -100, today()),
            entry(3, 50, days_ago(1)),
        ];
        let totals = ProgressEngine::daily_totals(&actions);
        let t = &totals[&today()];
        assert_eq!((t.earned, t.lost, t.count, t.net()), (300, 100, 2, 200));
        assert_eq!(totals[&days_ago(1)].net(), 50);
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn earned_minus_lost_is_net() {
        let actions: Vec<LoggedAction> = (0..50)
            .map(|i| {
                let v = if i % 3 == 0 { -(i as i64 * 7 + 1) } else { i as i64 * 13 + 1 };
                entry(i + 1, v, days_ago(i % 10))
            })
            .collect();
        let p = ProgressEngine::compute(&actions, 1000, today());
        assert_eq!(p.total_earned - p.total_lost, p.net_gain);
        assert!((0.0..=100.0).contains(&p.progress_percent));
    }
}
