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
use validator::Validate;

use super::blank_to_none;
use crate::{
    pkg::{
        internal::adaptors::{
            employers::selectors::EmployerSelector,
            jobs::{mutators::JobMutator, selectors::JobSelector},
        },
        server::{
            flash,
            state::{AppState, GetTxn},
            uispec::{JobDetail, Jobs, NotFound, PostJob},
        },
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct PostJobInput {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub employer_id: String,
    #[serde(default)]
    pub location: String,
}

pub async fn new(jar: CookieJar) -> Result<(CookieJar, Html<String>)> {
    let (jar, message) = flash::take(jar);
    Ok((jar, Html(PostJob { flash: message }.render()?)))
}

pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<PostJobInput>,
) -> Result<(CookieJar, Redirect)> {
    if input.validate().is_err() {
        return Ok((
            flash::set(jar, "Title, description and employer ID are required."),
            Redirect::to("/post_job"),
        ));
    }
    let Ok(employer_id) = input.employer_id.trim().parse::<i32>() else {
        return Ok((
            flash::set(jar, "Employer ID not found. Please check and try again."),
            Redirect::to("/post_job"),
        ));
    };
    let mut tx = state.db_pool.begin_txn().await?;
    let Some(employer) = EmployerSelector::new(&mut tx).get_by_id(employer_id).await? else {
        return Ok((
            flash::set(jar, "Employer ID not found. Please check and try again."),
            Redirect::to("/post_job"),
        ));
    };
    let job = JobMutator::new(&mut tx)
        .create(
            &input.title,
            &input.description,
            blank_to_none(&input.location),
            employer.id,
        )
        .await?;
    tx.commit().await?;
    tracing::info!("employer {} posted job {}", employer.id, job.id);
    Ok((
        flash::set(jar, "Job posted successfully."),
        Redirect::to("/"),
    ))
}

pub async fn list(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let mut tx = state.db_pool.begin_txn().await?;
    let jobs = JobSelector::new(&mut tx).get_all().await?;
    let (jar, message) = flash::take(jar);
    let template = Jobs {
        flash: message,
        jobs,
    };
    Ok((jar, Html(template.render()?)))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<Html<String>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let Some(job) = JobSelector::new(&mut tx).get_by_id(job_id).await? else {
        return Err(StandardError::new("ERR-JOB-404")
            .code(StatusCode::NOT_FOUND)
            .template(NotFound {}.render()?));
    };
    let Some(employer) = EmployerSelector::new(&mut tx).get_by_id(job.employer_id).await? else {
        return Err(StandardError::new("ERR-EMPLOYER-404")
            .code(StatusCode::NOT_FOUND)
            .template(NotFound {}.render()?));
    };
    Ok(Html(JobDetail { job, employer }.render()?))
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::PostJobInput;

    #[test]
    fn test_required_fields() {
        let input = PostJobInput {
            title: "Gardener".into(),
            description: "".into(),
            employer_id: "1".into(),
            location: "".into(),
        };
        assert!(input.validate().is_err());

        let input = PostJobInput {
            title: "Gardener".into(),
            description: "tend the gardens".into(),
            employer_id: "1".into(),
            location: "".into(),
        };
        assert!(input.validate().is_ok());
    }
}
