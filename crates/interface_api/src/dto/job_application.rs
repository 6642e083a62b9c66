//! Job application DTOs

use chrono::NaiveDate;
use serde::Deserialize;

use core_kernel::{JobId, UserId};
use infra_db::repositories::job_application::{JobApplicationPatch, NewJobApplication};

#[derive(Debug, Deserialize)]
pub struct CreateJobApplicationRequest {
    pub caregiver_user_id: UserId,
    pub job_id: JobId,
    pub date_applied: NaiveDate,
}

impl From<CreateJobApplicationRequest> for NewJobApplication {
    fn from(request: CreateJobApplicationRequest) -> Self {
        NewJobApplication {
            caregiver_user_id: request.caregiver_user_id,
            job_id: request.job_id,
            date_applied: request.date_applied,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateJobApplicationRequest {
    pub date_applied: Option<NaiveDate>,
}

impl From<UpdateJobApplicationRequest> for JobApplicationPatch {
    fn from(request: UpdateJobApplicationRequest) -> Self {
        JobApplicationPatch {
            date_applied: request.date_applied,
        }
    }
}
