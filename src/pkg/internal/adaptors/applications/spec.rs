use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationEntry {
    pub id: i32,
    pub applicant_id: i32,
    pub job_id: i32,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
}

/// Application row joined with the applicant it belongs to, for the
/// employer dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationWithApplicant {
    pub id: i32,
    pub applicant_id: i32,
    pub job_id: i32,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub applicant_name: String,
    pub applicant_email: String,
}
