use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applications::spec::{
    ApplicationEntry, ApplicationWithApplicant,
};
use crate::prelude::Result;

pub struct ApplicationSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationSelector { pool }
    }

    /// One applicant holds at most one application per job; the apply
    /// handler checks this before inserting.
    pub async fn get_by_pair(
        &mut self,
        applicant_id: i32,
        job_id: i32,
    ) -> Result<Option<ApplicationEntry>> {
        let row = sqlx::query_as::<_, ApplicationEntry>(
            "SELECT id, applicant_id, job_id, cover_letter, applied_at
             FROM applications WHERE applicant_id = $1 AND job_id = $2",
        )
        .bind(applicant_id)
        .bind(job_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_by_job(&mut self, job_id: i32) -> Result<Vec<ApplicationWithApplicant>> {
        let rows = sqlx::query_as::<_, ApplicationWithApplicant>(
            "SELECT a.id, a.applicant_id, a.job_id, a.cover_letter, a.applied_at,
                    p.full_name AS applicant_name, p.email AS applicant_email
             FROM applications a
             JOIN applicants p ON p.id = a.applicant_id
             WHERE a.job_id = $1
             ORDER BY a.applied_at DESC, a.id DESC",
        )
        .bind(job_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }
}
