use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobEntry {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub employer_id: i32,
}
