pub mod applicants;
pub mod applications;
pub mod employers;
pub mod jobs;
