use sqlx::PgConnection;

use crate::pkg::internal::adaptors::employers::spec::EmployerEntry;
use crate::prelude::Result;

pub struct EmployerSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EmployerSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EmployerSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<EmployerEntry>> {
        let row = sqlx::query_as::<_, EmployerEntry>(
            "SELECT id, company_name, contact_email, password_hash
             FROM employers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_by_email(&mut self, contact_email: &str) -> Result<Option<EmployerEntry>> {
        let row = sqlx::query_as::<_, EmployerEntry>(
            "SELECT id, company_name, contact_email, password_hash
             FROM employers WHERE contact_email = $1",
        )
        .bind(contact_email)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
