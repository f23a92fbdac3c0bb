use askama::Template;
use axum::{extract::State, response::Html};
use axum_extra::extract::CookieJar;

use crate::{
    pkg::{
        internal::adaptors::jobs::selectors::{HOME_JOB_LIMIT, JobSelector},
        server::{
            flash,
            state::{AppState, GetTxn},
            uispec::Home,
        },
    },
    prelude::Result,
};

pub async fn home(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let mut tx = state.db_pool.begin_txn().await?;
    let jobs = JobSelector::new(&mut tx).get_latest(HOME_JOB_LIMIT).await?;
    tracing::debug!("home view with {} jobs", jobs.len());
    let (jar, message) = flash::take(jar);
    let template = Home {
        flash: message,
        jobs,
    };
    Ok((jar, Html(template.render()?)))
}
