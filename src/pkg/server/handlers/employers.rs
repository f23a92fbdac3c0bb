use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use axum_extra::extract::CookieJar;
use password_auth::generate_hash;
use serde::Deserialize;
use standard_error::{HtmlRes, StandardError, Status};
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::{
            applications::selectors::ApplicationSelector,
            employers::{mutators::EmployerMutator, selectors::EmployerSelector},
            jobs::selectors::JobSelector,
        },
        server::{
            flash,
            state::{AppState, GetTxn},
            uispec::{DashboardJob, EmployerDashboard, NotFound, RegisterEmployer},
        },
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct RegisterEmployerInput {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub contact_email: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub password: String,
}

pub async fn new(jar: CookieJar) -> Result<(CookieJar, Html<String>)> {
    let (jar, message) = flash::take(jar);
    Ok((jar, Html(RegisterEmployer { flash: message }.render()?)))
}

pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<RegisterEmployerInput>,
) -> Result<(CookieJar, Redirect)> {
    if input.validate().is_err() {
        return Ok((
            flash::set(jar, "All fields are required."),
            Redirect::to("/register_employer"),
        ));
    }
    let mut tx = state.db_pool.begin_txn().await?;
    if EmployerSelector::new(&mut tx)
        .get_by_email(&input.contact_email)
        .await?
        .is_some()
    {
        return Ok((
            flash::set(jar, "This email is already registered."),
            Redirect::to("/register_employer"),
        ));
    }
    // only the hash is stored
    let employer = EmployerMutator::new(&mut tx)
        .create(
            &input.company_name,
            &input.contact_email,
            &generate_hash(&input.password),
        )
        .await?;
    tx.commit().await?;
    tracing::info!("registered employer {}", employer.id);
    Ok((
        flash::set(
            jar,
            &format!(
                "Employer registered successfully. Your employer ID: {}",
                employer.id
            ),
        ),
        Redirect::to("/"),
    ))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Path(employer_id): Path<i32>,
) -> Result<Html<String>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let Some(employer) = EmployerSelector::new(&mut tx).get_by_id(employer_id).await? else {
        return Err(StandardError::new("ERR-EMPLOYER-404")
            .code(StatusCode::NOT_FOUND)
            .template(NotFound {}.render()?));
    };
    let jobs = JobSelector::new(&mut tx).get_by_employer(employer.id).await?;
    let mut boards = Vec::with_capacity(jobs.len());
    for job in jobs {
        let applications = ApplicationSelector::new(&mut tx).get_by_job(job.id).await?;
        boards.push(DashboardJob { job, applications });
    }
    let template = EmployerDashboard {
        employer,
        jobs: boards,
    };
    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::RegisterEmployerInput;

    #[test]
    fn test_required_fields() {
        let input = RegisterEmployerInput {
            company_name: "Acme".into(),
            contact_email: "hiring@acme.test".into(),
            password: "".into(),
        };
        assert!(input.validate().is_err());

        let input = RegisterEmployerInput {
            company_name: "Acme".into(),
            contact_email: "hiring@acme.test".into(),
            password: "hunter2".into(),
        };
        assert!(input.validate().is_ok());
    }
}
