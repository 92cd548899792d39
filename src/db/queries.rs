//! Row-level CRUD for the SQLite store. Every query is scoped to a user id.

use crate::errors::AppError;
use crate::models::{
    ActionSnapshot, ActionType, Badge, BadgeKind, Category, CustomWorkouts, DayOfWeek, Exercise,
    LoggedAction, Routine, Sequences, Theme, UserSettings, WorkoutProgress,
};
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_err(col: usize, e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(e))
}

fn parse_category(col: usize, s: &str) -> Result<Category> {
    Category::from_db_str(s)
        .ok_or_else(|| conversion_err(col, AppError::Persistence(format!("invalid category: {s}"))))
}

// ---------------------------
// settings
// ---------------------------

pub fn load_settings(conn: &Connection, user_id: &str) -> Result<Option<(UserSettings, Sequences)>> {
    conn.query_row(
        "SELECT goal, reminder_time, theme, quick_actions, next_action_type_id, next_logged_action_id
         FROM settings WHERE user_id = ?1",
        [user_id],
        |row| {
            let theme_str: String = row.get(2)?;
            let theme = Theme::from_db_str(&theme_str).unwrap_or_default();

            let quick_str: String = row.get(3)?;
            let quick_actions: Vec<u32> = serde_json::from_str(&quick_str)
                .map_err(|e| conversion_err(3, AppError::Json(e)))?;

            let settings = UserSettings {
                goal: row.get(0)?,
                reminder_time: row.get(1)?,
                theme,
                quick_actions,
            };
            let sequences = Sequences {
                next_action_type_id: row.get(4)?,
                next_logged_action_id: row.get::<_, i64>(5)? as u64,
            };
            Ok((settings, sequences))
        },
    )
    .optional()
}

pub fn upsert_settings(
    conn: &Connection,
    user_id: &str,
    settings: &UserSettings,
    sequences: &Sequences,
) -> Result<()> {
    let quick = serde_json::to_string(&settings.quick_actions)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    conn.execute(
        "INSERT INTO settings (user_id, goal, reminder_time, theme, quick_actions,
                               next_action_type_id, next_logged_action_id, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(user_id) DO UPDATE SET
            goal = excluded.goal,
            reminder_time = excluded.reminder_time,
            theme = excluded.theme,
            quick_actions = excluded.quick_actions,
            next_action_type_id = excluded.next_action_type_id,
            next_logged_action_id = excluded.next_logged_action_id,
            updated_at = excluded.updated_at",
        params![
            user_id,
            settings.goal,
            settings.reminder_time,
            settings.theme.as_str(),
            quick,
            sequences.next_action_type_id,
            sequences.next_logged_action_id as i64,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

// ---------------------------
// action types
// ---------------------------

fn map_action_type(row: &Row) -> Result<ActionType> {
    let category_str: String = row.get("category")?;
    Ok(ActionType {
        id: row.get("id")?,
        name: row.get("name")?,
        value: row.get("value")?,
        is_default: row.get::<_, i32>("is_default")? == 1,
        category: parse_category(4, &category_str)?,
    })
}

pub fn load_action_types(conn: &Connection, user_id: &str) -> Result<Vec<ActionType>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, value, is_default, category FROM action_types
         WHERE user_id = ?1
         ORDER BY position ASC, id ASC",
    )?;
    let rows = stmt.query_map([user_id], map_action_type)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_action_type(
    conn: &Connection,
    user_id: &str,
    t: &ActionType,
    position: usize,
) -> Result<()> {
    conn.execute(
        "INSERT INTO action_types (user_id, id, name, value, category, is_default, position)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user_id,
            t.id,
            t.name,
            t.value,
            t.category.as_str(),
            if t.is_default { 1 } else { 0 },
            position as i64,
        ],
    )?;
    Ok(())
}

// ---------------------------
// logged actions
// ---------------------------

fn map_logged_action(row: &Row) -> Result<LoggedAction> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_err(6, AppError::InvalidDate(date_str.clone())))?;

    let created_str: String = row.get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_str)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_err(8, AppError::InvalidDate(created_str.clone())))?;

    let category_str: String = row.get("type_category")?;

    Ok(LoggedAction {
        id: row.get::<_, i64>("id")? as u64,
        action_type_id: row.get("action_type_id")?,
        snapshot: ActionSnapshot {
            name: row.get("type_name")?,
            value: row.get("type_value")?,
            category: parse_category(5, &category_str)?,
        },
        date,
        note: row.get("note")?,
        created_at,
    })
}

pub fn load_logged_actions(conn: &Connection, user_id: &str) -> Result<Vec<LoggedAction>> {
    let mut stmt = conn.prepare(
        "SELECT id, action_type_id, type_name, type_value, type_category, date, note, created_at
         FROM logged_actions
         WHERE user_id = ?1
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([user_id], map_logged_action)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_logged_action(conn: &Connection, user_id: &str, a: &LoggedAction) -> Result<()> {
    conn.execute(
        "INSERT INTO logged_actions (user_id, id, action_type_id, type_name, type_value,
                                     type_category, date, note, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            user_id,
            a.id as i64,
            a.action_type_id,
            a.snapshot.name,
            a.snapshot.value,
            a.snapshot.category.as_str(),
            a.date_str(),
            a.note,
            a.created_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn delete_logged_action(conn: &Connection, user_id: &str, id: u64) -> Result<usize> {
    conn.execute(
        "DELETE FROM logged_actions WHERE user_id = ?1 AND id = ?2",
        params![user_id, id as i64],
    )
}

pub fn count_logged_actions(conn: &Connection, user_id: &str) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM logged_actions WHERE user_id = ?1",
        [user_id],
        |row| row.get(0),
    )
}

// ---------------------------
// badges
// ---------------------------

fn map_badge(row: &Row) -> Result<Badge> {
    let kind_str: String = row.get("kind")?;
    let kind = BadgeKind::from_db_str(&kind_str).ok_or_else(|| {
        conversion_err(4, AppError::Persistence(format!("invalid badge kind: {kind_str}")))
    })?;

    Ok(Badge {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        icon: row.get("icon")?,
        kind,
        requirement: row.get("requirement")?,
        earned: row.get::<_, i32>("earned")? == 1,
    })
}

pub fn load_badges(conn: &Connection, user_id: &str) -> Result<Vec<Badge>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, icon, kind, requirement, earned FROM badges
         WHERE user_id = ?1
         ORDER BY position ASC",
    )?;
    let rows = stmt.query_map([user_id], map_badge)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_badge(conn: &Connection, user_id: &str, b: &Badge, position: usize) -> Result<()> {
    conn.execute(
        "INSERT INTO badges (user_id, id, name, description, icon, kind, requirement, earned, position)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            user_id,
            b.id,
            b.name,
            b.description,
            b.icon,
            b.kind.as_str(),
            b.requirement,
            if b.earned { 1 } else { 0 },
            position as i64,
        ],
    )?;
    Ok(())
}

/// Only ever raises the flag: a stored `earned = 1` is kept.
pub fn update_badge_earned(conn: &Connection, user_id: &str, b: &Badge) -> Result<usize> {
    conn.execute(
        "UPDATE badges SET earned = MAX(earned, ?3) WHERE user_id = ?1 AND id = ?2",
        params![user_id, b.id, if b.earned { 1 } else { 0 }],
    )
}

// ---------------------------
// workouts
// ---------------------------

pub fn load_workout_progress(conn: &Connection, user_id: &str) -> Result<WorkoutProgress> {
    let mut stmt = conn.prepare(
        "SELECT day, exercise_index, completed FROM workout_progress
         WHERE user_id = ?1
         ORDER BY day, exercise_index",
    )?;
    let rows = stmt.query_map([user_id], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, i32>(2)? == 1,
        ))
    })?;

    let mut out = WorkoutProgress::new();
    for r in rows {
        let (day_str, idx, done) = r?;
        // unknown day codes are skipped rather than failing the whole load
        if let Some(day) = DayOfWeek::from_code(&day_str) {
            out.entry(day).or_default().insert(idx as usize, done);
        }
    }
    Ok(out)
}

pub fn insert_workout_progress(
    conn: &Connection,
    user_id: &str,
    progress: &WorkoutProgress,
) -> Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO workout_progress (user_id, day, exercise_index, completed)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for (day, flags) in progress {
        for (idx, done) in flags {
            stmt.execute(params![
                user_id,
                day.as_str(),
                *idx as i64,
                if *done { 1 } else { 0 }
            ])?;
        }
    }
    Ok(())
}

pub fn load_custom_workouts(conn: &Connection, user_id: &str) -> Result<CustomWorkouts> {
    let mut stmt = conn.prepare(
        "SELECT day, name, description, exercises FROM custom_workouts WHERE user_id = ?1",
    )?;
    let rows = stmt.query_map([user_id], |row| {
        let exercises_str: String = row.get(3)?;
        let exercises: Vec<Exercise> = serde_json::from_str(&exercises_str)
            .map_err(|e| conversion_err(3, AppError::Json(e)))?;
        Ok((
            row.get::<_, String>(0)?,
            Routine {
                name: row.get(1)?,
                description: row.get(2)?,
                exercises,
            },
        ))
    })?;

    let mut out = CustomWorkouts::new();
    for r in rows {
        let (day_str, routine) = r?;
        if let Some(day) = DayOfWeek::from_code(&day_str) {
            out.insert(day, routine);
        }
    }
    Ok(out)
}

pub fn insert_custom_workout(
    conn: &Connection,
    user_id: &str,
    day: DayOfWeek,
    routine: &Routine,
) -> Result<()> {
    let exercises = serde_json::to_string(&routine.exercises)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    conn.execute(
        "INSERT INTO custom_workouts (user_id, day, name, description, exercises)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, day.as_str(), routine.name, routine.description, exercises],
    )?;
    Ok(())
}

/// Remove every row owned by `user_id` (used before a full resync).
pub fn clear_user(conn: &Connection, user_id: &str) -> Result<()> {
    for table in [
        "action_types",
        "logged_actions",
        "badges",
        "workout_progress",
        "custom_workouts",
    ] {
        conn.execute(&format!("DELETE FROM {table} WHERE user_id = ?1"), [user_id])?;
    }
    Ok(())
}
