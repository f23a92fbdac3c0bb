use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applications::spec::ApplicationEntry;
use crate::prelude::Result;

pub struct ApplicationMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationMutator { pool }
    }

    pub async fn create(
        &mut self,
        applicant_id: i32,
        job_id: i32,
        cover_letter: Option<&str>,
    ) -> Result<ApplicationEntry> {
        let row = sqlx::query_as::<_, ApplicationEntry>(
            r#"
            INSERT INTO applications (applicant_id, job_id, cover_letter)
            VALUES ($1, $2, $3)
            RETURNING id, applicant_id, job_id, cover_letter, applied_at
            "#,
        )
        .bind(applicant_id)
        .bind(job_id)
        .bind(cover_letter)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
