//! Database row types. These map directly to SQLite rows.
//! Distinct from spark-types models to keep the DB layer independent.

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct DeviceRow {
    pub device_id: String,
    pub public_key: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct MessageRow {
    pub id: i64,
    pub device_id: String,
    pub role: String,
    pub text: String,
    /// JSON array text.
    pub symbols: String,
    pub created_at: String,
}
