use sqlx::PgConnection;

use crate::pkg::internal::adaptors::employers::spec::EmployerEntry;
use crate::prelude::Result;

pub struct EmployerMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EmployerMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EmployerMutator { pool }
    }

    /// `password_hash` must already be hashed; plaintext never reaches storage.
    pub async fn create(
        &mut self,
        company_name: &str,
        contact_email: &str,
        password_hash: &str,
    ) -> Result<EmployerEntry> {
        let row = sqlx::query_as::<_, EmployerEntry>(
            r#"
            INSERT INTO employers (company_name, contact_email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, company_name, contact_email, password_hash
            "#,
        )
        .bind(company_name)
        .bind(contact_email)
        .bind(password_hash)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use crate::{
        pkg::{
            internal::adaptors::employers::{
                mutators::EmployerMutator, selectors::EmployerSelector,
            },
            server::state::{AppState, GetTxn},
        },
        prelude::Result,
    };

    #[tokio::test]
    #[traced_test]
    #[ignore = "needs a running postgres with migrations applied"]
    async fn test_employer_create_and_lookup() -> Result<()> {
        let state = AppState::new().await?;
        let mut tx = state.db_pool.begin_txn().await?;
        let email = format!("hiring+{}@acme.test", std::process::id());
        let created = EmployerMutator::new(&mut tx)
            .create("Acme Corp", &email, "$argon2id$stub")
            .await?;
        assert!(created.id > 0);
        let fetched = EmployerSelector::new(&mut tx)
            .get_by_id(created.id)
            .await?
            .expect("employer just inserted");
        assert_eq!(fetched.company_name, "Acme Corp");
        let by_email = EmployerSelector::new(&mut tx).get_by_email(&email).await?;
        assert_eq!(by_email.map(|e| e.id), Some(created.id));
        Ok(())
    }
}
