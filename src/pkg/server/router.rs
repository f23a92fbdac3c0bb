use axum::{Router, routing::get};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::handlers::ui::home;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/", get(home))
        .route(
            "/register_applicant",
            get(handlers::applicants::new).post(handlers::applicants::create),
        )
        .route(
            "/register_employer",
            get(handlers::employers::new).post(handlers::employers::create),
        )
        .route(
            "/post_job",
            get(handlers::jobs::new).post(handlers::jobs::create),
        )
        .route("/jobs", get(handlers::jobs::list))
        .route("/job/{job_id}", get(handlers::jobs::detail))
        .route(
            "/apply/{job_id}",
            get(handlers::applications::new).post(handlers::applications::create),
        )
        .route(
            "/employer/{employer_id}/dashboard",
            get(handlers::employers::dashboard),
        )
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::util::ServiceExt;

    use super::build_routes;

    // these only exercise routes that respond before any query runs, so no
    // database is needed (the pool is lazy)

    #[tokio::test]
    async fn test_livez() {
        let app = build_routes().await.unwrap();
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_form_pages_render() {
        for uri in ["/register_applicant", "/register_employer", "/post_job"] {
            let app = build_routes().await.unwrap();
            let res = app
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK, "{uri}");
        }
    }

    async fn post_form(uri: &str, body: &'static str) -> axum::response::Response {
        let app = build_routes().await.unwrap();
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_register_applicant_empty_fields_redirects_back() {
        let res = post_form("/register_applicant", "full_name=&email=").await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/register_applicant");
        let cookie = res.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.contains("joblite_flash"));
    }

    #[tokio::test]
    async fn test_register_employer_empty_fields_redirects_back() {
        let res = post_form(
            "/register_employer",
            "company_name=&contact_email=&password=",
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/register_employer");
    }

    #[tokio::test]
    async fn test_post_job_empty_fields_redirects_back() {
        let res = post_form("/post_job", "title=&description=&employer_id=").await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/post_job");
    }
}
