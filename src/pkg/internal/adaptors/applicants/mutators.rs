use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applicants::spec::ApplicantEntry;
use crate::prelude::Result;

pub struct ApplicantMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicantMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicantMutator { pool }
    }

    pub async fn create(
        &mut self,
        full_name: &str,
        email: &str,
        resume_text: Option<&str>,
    ) -> Result<ApplicantEntry> {
        let row = sqlx::query_as::<_, ApplicantEntry>(
            r#"
            INSERT INTO applicants (full_name, email, resume_text)
            VALUES ($1, $2, $3)
            RETURNING id, full_name, email, resume_text
            "#,
        )
        .bind(full_name)
        .bind(email)
        .bind(resume_text)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
