//! Pre-built test data for common entities
//!
//! Fixture values are deterministic so tests can assert on them directly.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal_macros::dec;

use core_kernel::{JobId, UserId};
use infra_db::repositories::address::NewAddress;
use infra_db::repositories::appointment::NewAppointment;
use infra_db::repositories::caregiver::NewCaregiver;
use infra_db::repositories::job::NewJob;
use infra_db::repositories::job_application::NewJobApplication;
use infra_db::repositories::member::NewMember;
use infra_db::repositories::user::NewUser;

/// A complete user create input
pub fn sample_user() -> NewUser {
    NewUser {
        email: "a@x.com".to_string(),
        given_name: "A".to_string(),
        surname: "B".to_string(),
        city: "C".to_string(),
        phone_number: "123".to_string(),
        profile_description: None,
        password: "p".to_string(),
    }
}

/// A caregiver profile for the given user key
pub fn sample_caregiver(caregiver_user_id: UserId) -> NewCaregiver {
    NewCaregiver {
        caregiver_user_id,
        photo: None,
        gender: "female".to_string(),
        caregiving_type: "elderly care".to_string(),
        hourly_rate: dec!(25.50),
    }
}

/// A member for the given user key
pub fn sample_member(member_user_id: UserId) -> NewMember {
    NewMember {
        member_user_id,
        house_rules: "No smoking".to_string(),
    }
}

/// An address for the given member key
pub fn sample_address(member_user_id: UserId) -> NewAddress {
    NewAddress {
        member_user_id,
        house_number: "12".to_string(),
        street: "Abay Avenue".to_string(),
        town: "Astana".to_string(),
    }
}

/// A job posting by the given member
pub fn sample_job(member_user_id: UserId) -> NewJob {
    NewJob {
        member_user_id,
        required_caregiving_type: "child care".to_string(),
        other_requirements: Some("First-aid certificate".to_string()),
        date_posted: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

/// An application from a caregiver to a job
pub fn sample_job_application(caregiver_user_id: UserId, job_id: JobId) -> NewJobApplication {
    NewJobApplication {
        caregiver_user_id,
        job_id,
        date_applied: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

/// An appointment between the given caregiver and member
pub fn sample_appointment(caregiver_user_id: UserId, member_user_id: UserId) -> NewAppointment {
    NewAppointment {
        caregiver_user_id,
        member_user_id,
        appointment_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        appointment_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        work_hours: 4,
        status: "pending".to_string(),
    }
}
