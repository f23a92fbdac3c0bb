use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployerEntry {
    pub id: i32,
    pub company_name: String,
    pub contact_email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
