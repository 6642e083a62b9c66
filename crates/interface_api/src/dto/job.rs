//! Job DTOs

use chrono::NaiveDate;
use serde::Deserialize;

use core_kernel::UserId;
use infra_db::repositories::job::{JobPatch, NewJob};

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub member_user_id: UserId,
    pub required_caregiving_type: String,
    pub other_requirements: Option<String>,
    pub date_posted: NaiveDate,
}

impl From<CreateJobRequest> for NewJob {
    fn from(request: CreateJobRequest) -> Self {
        NewJob {
            member_user_id: request.member_user_id,
            required_caregiving_type: request.required_caregiving_type,
            other_requirements: request.other_requirements,
            date_posted: request.date_posted,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateJobRequest {
    pub member_user_id: Option<UserId>,
    pub required_caregiving_type: Option<String>,
    pub other_requirements: Option<String>,
    pub date_posted: Option<NaiveDate>,
}

impl From<UpdateJobRequest> for JobPatch {
    fn from(request: UpdateJobRequest) -> Self {
        JobPatch {
            member_user_id: request.member_user_id,
            required_caregiving_type: request.required_caregiving_type,
            other_requirements: request.other_requirements,
            date_posted: request.date_posted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_posted_parses_iso_calendar_date() {
        let request: CreateJobRequest = serde_json::from_str(
            r#"{
                "member_user_id": 3,
                "required_caregiving_type": "child care",
                "date_posted": "2024-01-01"
            }"#,
        )
        .unwrap();

        assert_eq!(
            request.date_posted,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(request.other_requirements.is_none());
    }
}
