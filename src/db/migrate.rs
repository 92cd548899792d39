use rusqlite::{Connection, OptionalExtension, Result, params};
use tracing::info;

/// Ordered schema migrations. A version is applied at most once and is
/// recorded in `schema_migrations`.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "20250310_0001_initial_schema",
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            user_id               TEXT PRIMARY KEY,
            goal                  INTEGER NOT NULL,
            reminder_time         TEXT NOT NULL DEFAULT '20:00',
            theme                 TEXT NOT NULL DEFAULT 'system'
                                  CHECK(theme IN ('light','dark','system')),
            quick_actions         TEXT NOT NULL DEFAULT '[]',
            next_action_type_id   INTEGER NOT NULL DEFAULT 1,
            next_logged_action_id INTEGER NOT NULL DEFAULT 1,
            updated_at            TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS action_types (
            user_id     TEXT NOT NULL,
            id          INTEGER NOT NULL,
            name        TEXT NOT NULL,
            value       INTEGER NOT NULL,
            category    TEXT NOT NULL CHECK(category IN ('positive','negative')),
            is_default  INTEGER NOT NULL DEFAULT 0,
            position    INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (user_id, id)
        );

        CREATE TABLE IF NOT EXISTS logged_actions (
            user_id         TEXT NOT NULL,
            id              INTEGER NOT NULL,
            action_type_id  INTEGER NOT NULL,
            type_name       TEXT NOT NULL,
            type_value      INTEGER NOT NULL,
            type_category   TEXT NOT NULL CHECK(type_category IN ('positive','negative')),
            date            TEXT NOT NULL,
            note            TEXT,
            created_at      TEXT NOT NULL,
            PRIMARY KEY (user_id, id),
            UNIQUE (user_id, action_type_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_logged_actions_date ON logged_actions(user_id, date);

        CREATE TABLE IF NOT EXISTS badges (
            user_id      TEXT NOT NULL,
            id           TEXT NOT NULL,
            name         TEXT NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            icon         TEXT NOT NULL DEFAULT '',
            kind         TEXT NOT NULL CHECK(kind IN ('milestone','streak','savings','actions')),
            requirement  REAL NOT NULL,
            earned       INTEGER NOT NULL DEFAULT 0,
            position     INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (user_id, id)
        );

        CREATE TABLE IF NOT EXISTS workout_progress (
            user_id         TEXT NOT NULL,
            day             TEXT NOT NULL,
            exercise_index  INTEGER NOT NULL,
            completed       INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (user_id, day, exercise_index)
        );
        "#,
    ),
    (
        "20250428_0002_custom_workouts",
        r#"
        CREATE TABLE IF NOT EXISTS custom_workouts (
            user_id      TEXT NOT NULL,
            day          TEXT NOT NULL,
            name         TEXT NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            exercises    TEXT NOT NULL DEFAULT '[]',
            PRIMARY KEY (user_id, day)
        );
        "#,
    ),
];

fn ensure_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version     TEXT PRIMARY KEY,
            applied_at  TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM schema_migrations WHERE version = ?1 LIMIT 1")?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    ensure_migrations_table(conn)?;
    let mut stmt = conn.prepare("SELECT version FROM schema_migrations ORDER BY version ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations. Returns how many ran.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_migrations_table(conn)?;

    let mut applied = 0;
    for (version, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        conn.execute_batch(&format!("BEGIN;\n{sql}\nCOMMIT;"))?;
        conn.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, ?2)",
            params![version, chrono::Local::now().to_rfc3339()],
        )?;

        info!(version, "migration applied");
        applied += 1;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);
        assert_eq!(applied_versions(&conn).unwrap().len(), MIGRATIONS.len());
    }
}
