use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::prelude::Result;

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    /// `created_at` is assigned by the database, not the caller.
    pub async fn create(
        &mut self,
        title: &str,
        description: &str,
        location: Option<&str>,
        employer_id: i32,
    ) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (title, description, location, employer_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, location, created_at, employer_id
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(location)
        .bind(employer_id)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
