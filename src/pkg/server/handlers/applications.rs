use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use standard_error::{HtmlRes, StandardError, Status};

use super::blank_to_none;
use crate::{
    pkg::{
        internal::adaptors::{
            applicants::selectors::ApplicantSelector,
            applications::{mutators::ApplicationMutator, selectors::ApplicationSelector},
            jobs::selectors::JobSelector,
        },
        server::{
            flash,
            state::{AppState, GetTxn},
            uispec::{Apply, NotFound},
        },
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct ApplyInput {
    #[serde(default)]
    pub applicant_id: String,
    #[serde(default)]
    pub cover_letter: String,
}

pub async fn new(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(job_id): Path<i32>,
) -> Result<(CookieJar, Html<String>)> {
    let mut tx = state.db_pool.begin_txn().await?;
    let Some(job) = JobSelector::new(&mut tx).get_by_id(job_id).await? else {
        return Err(StandardError::new("ERR-JOB-404")
            .code(StatusCode::NOT_FOUND)
            .template(NotFound {}.render()?));
    };
    let (jar, message) = flash::take(jar);
    let template = Apply {
        flash: message,
        job,
    };
    Ok((jar, Html(template.render()?)))
}

pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(job_id): Path<i32>,
    Form(input): Form<ApplyInput>,
) -> Result<(CookieJar, Redirect)> {
    let mut tx = state.db_pool.begin_txn().await?;
    let Some(job) = JobSelector::new(&mut tx).get_by_id(job_id).await? else {
        return Err(StandardError::new("ERR-JOB-404")
            .code(StatusCode::NOT_FOUND)
            .template(NotFound {}.render()?));
    };
    let applicant = match input.applicant_id.trim().parse::<i32>() {
        Ok(id) => ApplicantSelector::new(&mut tx).get_by_id(id).await?,
        Err(_) => None,
    };
    let Some(applicant) = applicant else {
        return Ok((
            flash::set(jar, "Applicant ID not found. Please register first."),
            Redirect::to("/register_applicant"),
        ));
    };
    if ApplicationSelector::new(&mut tx)
        .get_by_pair(applicant.id, job.id)
        .await?
        .is_some()
    {
        return Ok((
            flash::set(jar, "You have already applied for this job."),
            Redirect::to("/jobs"),
        ));
    }
    let application = ApplicationMutator::new(&mut tx)
        .create(applicant.id, job.id, blank_to_none(&input.cover_letter))
        .await?;
    tx.commit().await?;
    tracing::info!(
        "applicant {} applied to job {} (application {})",
        applicant.id,
        job.id,
        application.id
    );
    Ok((
        flash::set(jar, "Application submitted successfully."),
        Redirect::to("/jobs"),
    ))
}
