use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::prelude::Result;

/// Number of jobs shown on the home page.
pub const HOME_JOB_LIMIT: i64 = 5;

pub struct JobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, description, location, created_at, employer_id
             FROM jobs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, description, location, created_at, employer_id
             FROM jobs ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_latest(&mut self, limit: i64) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, description, location, created_at, employer_id
             FROM jobs ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_by_employer(&mut self, employer_id: i32) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, description, location, created_at, employer_id
             FROM jobs WHERE employer_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(employer_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use crate::{
        pkg::{
            internal::adaptors::{
                employers::mutators::EmployerMutator,
                jobs::{
                    mutators::JobMutator,
                    selectors::{HOME_JOB_LIMIT, JobSelector},
                },
            },
            server::state::{AppState, GetTxn},
        },
        prelude::Result,
    };

    #[tokio::test]
    #[traced_test]
    #[ignore = "needs a running postgres with migrations applied"]
    async fn test_latest_jobs_capped_and_newest_first() -> Result<()> {
        let state = AppState::new().await?;
        let mut tx = state.db_pool.begin_txn().await?;
        let employer = EmployerMutator::new(&mut tx)
            .create(
                "Listing Co",
                &format!("listing+{}@co.test", std::process::id()),
                "$argon2id$stub",
            )
            .await?;
        for n in 0..6 {
            JobMutator::new(&mut tx)
                .create(&format!("Role {n}"), "come work here", None, employer.id)
                .await?;
        }
        let latest = JobSelector::new(&mut tx).get_latest(HOME_JOB_LIMIT).await?;
        assert_eq!(latest.len(), HOME_JOB_LIMIT as usize);
        assert!(
            latest
                .windows(2)
                .all(|w| (w[0].created_at, w[0].id) >= (w[1].created_at, w[1].id))
        );
        let all = JobSelector::new(&mut tx)
            .get_by_employer(employer.id)
            .await?;
        assert_eq!(all.len(), 6);
        Ok(())
    }
}
