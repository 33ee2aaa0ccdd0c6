use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |r| r.get(0),
    )?;

    if version < 1 {
        info!("Running migration v1 (devices, messages)");
        conn.execute_batch(
            "
            BEGIN;

            CREATE TABLE devices (
                device_id   TEXT PRIMARY KEY,
                public_key  TEXT,
                token_hash  TEXT NOT NULL UNIQUE,
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );

            -- No foreign key on device_id: messages may name devices that never registered.
            CREATE TABLE messages (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                device_id   TEXT NOT NULL,
                role        TEXT NOT NULL CHECK (role IN ('user', 'assistant', 'anchor')),
                text        TEXT NOT NULL,
                symbols     TEXT NOT NULL DEFAULT '[]',
                created_at  TEXT NOT NULL
            );

            CREATE INDEX idx_messages_created
                ON messages(created_at, id);

            INSERT INTO schema_version (version) VALUES (1);

            COMMIT;
            ",
        )?;
    }

    info!("Database migrations complete");
    Ok(())
}
