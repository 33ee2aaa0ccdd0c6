#[cfg(test)]
use crate::models::DeviceRow;
use crate::models::MessageRow;
use crate::{Database, token};
use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};
use spark_types::models::{ClientRole, Role};
use spark_types::timestamp;

impl Database {
    // -- Devices / tokens --

    /// Issue a fresh token for `device_id`, replacing any earlier one.
    ///
    /// The upsert is a single statement, so concurrent registrations of the
    /// same device leave exactly one live token behind.
    pub fn issue_token(&self, device_id: &str, public_key: Option<&str>) -> Result<String> {
        let token = token::generate();
        let token_hash = token::digest(&token);

        self.with_conn_mut(|conn| {
            let now = timestamp::to_storage(self.now());
            conn.execute(
                "INSERT INTO devices (device_id, public_key, token_hash, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)
                 ON CONFLICT(device_id) DO UPDATE SET
                     public_key = excluded.public_key,
                     token_hash = excluded.token_hash,
                     updated_at = excluded.updated_at",
                rusqlite::params![device_id, public_key, token_hash, now],
            )?;
            Ok(())
        })?;

        Ok(token)
    }

    /// Exact-match lookup of a presented token. Returns the owning device id.
    pub fn resolve_token(&self, token: &str) -> Result<Option<String>> {
        let token_hash = token::digest(token);
        self.with_conn(|conn| {
            let device_id = conn
                .query_row(
                    "SELECT device_id FROM devices WHERE token_hash = ?1",
                    [&token_hash],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(device_id)
        })
    }

    #[cfg(test)]
    pub fn get_device(&self, device_id: &str) -> Result<Option<DeviceRow>> {
        self.with_conn(|conn| query_device(conn, device_id))
    }

    // -- Messages --

    /// Append a client-submitted message. Only user/assistant roles get here.
    pub fn append_message(
        &self,
        device_id: &str,
        role: ClientRole,
        text: &str,
        symbols: &[String],
    ) -> Result<MessageRow> {
        self.insert_message(device_id, role.into(), text, symbols)
    }

    /// Append a server-generated message with any role.
    pub fn append_system_message(
        &self,
        device_id: &str,
        role: Role,
        text: &str,
        symbols: &[String],
    ) -> Result<MessageRow> {
        self.insert_message(device_id, role, text, symbols)
    }

    /// All messages, oldest first, optionally only those strictly after `after`.
    pub fn messages_since(&self, after: Option<DateTime<Utc>>) -> Result<Vec<MessageRow>> {
        let after = after.map(timestamp::to_storage);
        self.with_conn(|conn| query_messages_since(conn, after.as_deref()))
    }

    pub fn message_count(&self) -> Result<i64> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?;
            Ok(count)
        })
    }

    fn insert_message(
        &self,
        device_id: &str,
        role: Role,
        text: &str,
        symbols: &[String],
    ) -> Result<MessageRow> {
        let symbols_json = serde_json::to_string(symbols)?;

        self.with_conn_mut(|conn| {
            let created_at = timestamp::to_storage(self.now());
            conn.execute(
                "INSERT INTO messages (device_id, role, text, symbols, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![device_id, role.as_str(), text, symbols_json, created_at],
            )?;

            Ok(MessageRow {
                id: conn.last_insert_rowid(),
                device_id: device_id.to_string(),
                role: role.as_str().to_string(),
                text: text.to_string(),
                symbols: symbols_json,
                created_at,
            })
        })
    }
}

#[cfg(test)]
fn query_device(conn: &Connection, device_id: &str) -> Result<Option<DeviceRow>> {
    let mut stmt = conn.prepare(
        "SELECT device_id, public_key, created_at, updated_at FROM devices WHERE device_id = ?1",
    )?;

    let row = stmt
        .query_row([device_id], |row| {
            Ok(DeviceRow {
                device_id: row.get(0)?,
                public_key: row.get(1)?,
                created_at: row.get(2)?,
                updated_at: row.get(3)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_messages_since(conn: &Connection, after: Option<&str>) -> Result<Vec<MessageRow>> {
    // created_at is fixed-width UTC text, so string order is time order.
    // id breaks ties between writes that share a clock tick.
    let mut stmt = conn.prepare(
        "SELECT id, device_id, role, text, symbols, created_at
         FROM messages
         WHERE ?1 IS NULL OR created_at > ?1
         ORDER BY created_at ASC, id ASC",
    )?;

    let rows = stmt
        .query_map([after], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                device_id: row.get(1)?,
                role: row.get(2)?,
                text: row.get(3)?,
                symbols: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
