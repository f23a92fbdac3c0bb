use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applicants::spec::ApplicantEntry;
use crate::prelude::Result;

pub struct ApplicantSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicantSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicantSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<ApplicantEntry>> {
        let row = sqlx::query_as::<_, ApplicantEntry>(
            "SELECT id, full_name, email, resume_text
             FROM applicants WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_by_email(&mut self, email: &str) -> Result<Option<ApplicantEntry>> {
        let row = sqlx::query_as::<_, ApplicantEntry>(
            "SELECT id, full_name, email, resume_text
             FROM applicants WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
