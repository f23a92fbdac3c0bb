use askama::Template;
use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use validator::Validate;

use super::blank_to_none;
use crate::{
    pkg::{
        internal::adaptors::applicants::{
            mutators::ApplicantMutator, selectors::ApplicantSelector,
        },
        server::{
            flash,
            state::{AppState, GetTxn},
            uispec::RegisterApplicant,
        },
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct RegisterApplicantInput {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub email: String,
    #[serde(default)]
    pub resume_text: String,
}

pub async fn new(jar: CookieJar) -> Result<(CookieJar, Html<String>)> {
    let (jar, message) = flash::take(jar);
    Ok((jar, Html(RegisterApplicant { flash: message }.render()?)))
}

pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<RegisterApplicantInput>,
) -> Result<(CookieJar, Redirect)> {
    if input.validate().is_err() {
        return Ok((
            flash::set(jar, "Name and email are required."),
            Redirect::to("/register_applicant"),
        ));
    }
    let mut tx = state.db_pool.begin_txn().await?;
    if ApplicantSelector::new(&mut tx)
        .get_by_email(&input.email)
        .await?
        .is_some()
    {
        return Ok((
            flash::set(jar, "This email is already registered."),
            Redirect::to("/register_applicant"),
        ));
    }
    let applicant = ApplicantMutator::new(&mut tx)
        .create(
            &input.full_name,
            &input.email,
            blank_to_none(&input.resume_text),
        )
        .await?;
    tx.commit().await?;
    tracing::info!("registered applicant {}", applicant.id);
    Ok((
        flash::set(
            jar,
            &format!(
                "Applicant registered successfully. Your applicant ID: {}",
                applicant.id
            ),
        ),
        Redirect::to("/"),
    ))
}
