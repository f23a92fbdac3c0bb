use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicantEntry {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub resume_text: Option<String>,
}
