use askama::Template;

use crate::pkg::internal::adaptors::{
    applications::spec::ApplicationWithApplicant, employers::spec::EmployerEntry,
    jobs::spec::JobEntry,
};

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home {
    pub flash: Option<String>,
    pub jobs: Vec<JobEntry>,
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct Jobs {
    pub flash: Option<String>,
    pub jobs: Vec<JobEntry>,
}

#[derive(Template)]
#[template(path = "job_detail.html")]
pub struct JobDetail {
    pub job: JobEntry,
    pub employer: EmployerEntry,
}

#[derive(Template)]
#[template(path = "register_applicant.html")]
pub struct RegisterApplicant {
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "register_employer.html")]
pub struct RegisterEmployer {
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "post_job.html")]
pub struct PostJob {
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "apply.html")]
pub struct Apply {
    pub flash: Option<String>,
    pub job: JobEntry,
}

pub struct DashboardJob {
    pub job: JobEntry,
    pub applications: Vec<ApplicationWithApplicant>,
}

#[derive(Template)]
#[template(path = "employer_dashboard.html")]
pub struct EmployerDashboard {
    pub employer: EmployerEntry,
    pub jobs: Vec<DashboardJob>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFound {}
