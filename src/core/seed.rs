//! Built-in content: default action types, badge definitions and the
//! built-in weekly routine.

use crate::models::workout::{DayOfWeek, Exercise, Routine};
use crate::models::{ActionType, AppState, Badge, BadgeKind, Category};

const DEFAULT_POSITIVE: &[(&str, i64)] = &[
    ("Workout", 500),
    ("Cooked at home", 300),
    ("Saved money", 1000),
    ("Walked 10k steps", 250),
    ("Meditated", 200),
];

const DEFAULT_NEGATIVE: &[(&str, i64)] = &[
    ("Junk food", 400),
    ("Impulse purchase", 1000),
    ("Skipped workout", 300),
    ("Overate", 500),
];

/// Fill an empty state with built-in action types and badges.
/// Existing entries are left alone.
pub fn apply(state: &mut AppState) {
    if state.catalog.is_empty() {
        for (name, value) in DEFAULT_POSITIVE {
            push_default(state, Category::Positive, name, *value);
        }
        for (name, value) in DEFAULT_NEGATIVE {
            push_default(state, Category::Negative, name, *value);
        }
    }

    ensure_badges(state);
}

/// Add any built-in badge definition the state lacks. Returns how many.
pub fn ensure_badges(state: &mut AppState) -> usize {
    let mut added = 0;
    for badge in default_badges() {
        if !state.badges.iter().any(|b| b.id == badge.id) {
            state.badges.push(badge);
            added += 1;
        }
    }
    added
}

fn push_default(state: &mut AppState, category: Category, name: &str, value: i64) {
    let id = state.sequences.next_action_type_id;
    state.sequences.next_action_type_id += 1;
    state
        .catalog
        .bucket_mut(category)
        .push(ActionType::new(id, name, category, value, true));
}

pub fn default_badges() -> Vec<Badge> {
    use BadgeKind::*;

    vec![
        Badge::new("first_step", "First Step", "Log your first action", "🌱", Milestone, 1.0),
        Badge::new("getting_started", "Getting Started", "Log 10 actions", "🚀", Milestone, 10.0),
        Badge::new("dedicated", "Dedicated", "Log 50 actions", "📚", Milestone, 50.0),
        Badge::new("three_day", "On a Roll", "Keep a 3-day streak", "🔥", Streak, 3.0),
        Badge::new("week_warrior", "Week Warrior", "Keep a 7-day streak", "🗓️", Streak, 7.0),
        Badge::new("monthly_master", "Monthly Master", "Keep a 30-day streak", "🏅", Streak, 30.0),
        Badge::new("quarter_way", "Quarter Way", "Reach 25% of your goal", "💰", Savings, 0.25),
        Badge::new("halfway", "Halfway There", "Reach 50% of your goal", "⚖️", Savings, 0.5),
        Badge::new("debt_free", "Debt Free", "Reach 100% of your goal", "🏆", Savings, 1.0),
        Badge::new("good_habits", "Good Habits", "Log 25 positive actions", "💪", Actions, 25.0),
        Badge::new("centurion", "Centurion", "Log 100 positive actions", "👑", Actions, 100.0),
    ]
}

/// Built-in routine for a weekday, if the plan has one. Rest days return None.
pub fn builtin_routine(day: DayOfWeek) -> Option<Routine> {
    let (name, description, exercises) = match day {
        DayOfWeek::Monday => (
            "Upper Body Push",
            "Chest, shoulders and triceps",
            vec![
                Exercise::new("Push-ups", 3, "12", "Chest and core strength"),
                Exercise::new("Pike push-ups", 3, "8", "Shoulder strength"),
                Exercise::new("Bench dips", 3, "10", "Triceps"),
            ],
        ),
        DayOfWeek::Tuesday => (
            "Cardio",
            "Steady-state conditioning",
            vec![
                Exercise::new("Brisk walk or jog", 1, "30min", "Aerobic base"),
                Exercise::new("Jump rope", 3, "60s", "Coordination"),
            ],
        ),
        DayOfWeek::Wednesday => (
            "Lower Body",
            "Legs and glutes",
            vec![
                Exercise::new("Squats", 4, "15", "Quads and glutes"),
                Exercise::new("Lunges", 3, "10", "Balance and leg strength"),
                Exercise::new("Glute bridges", 3, "15", "Posterior chain"),
                Exercise::new("Calf raises", 3, "20", "Ankle stability"),
            ],
        ),
        DayOfWeek::Thursday => (
            "Upper Body Pull",
            "Back and biceps",
            vec![
                Exercise::new("Inverted rows", 3, "10", "Upper back"),
                Exercise::new("Superman hold", 3, "30s", "Lower back"),
                Exercise::new("Band curls", 3, "12", "Biceps"),
            ],
        ),
        DayOfWeek::Friday => (
            "Full Body Circuit",
            "Short, intense finisher for the week",
            vec![
                Exercise::new("Burpees", 3, "10", "Full body conditioning"),
                Exercise::new("Mountain climbers", 3, "30s", "Core and cardio"),
                Exercise::new("Plank", 3, "45s", "Core stability"),
            ],
        ),
        DayOfWeek::Saturday | DayOfWeek::Sunday => return None,
    };

    Some(Routine {
        name: name.to_string(),
        description: description.to_string(),
        exercises,
    })
}
