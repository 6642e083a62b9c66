//! Caregiver DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use core_kernel::UserId;
use infra_db::repositories::caregiver::{CaregiverPatch, NewCaregiver};

/// Largest value NUMERIC(5,2) can hold
fn max_hourly_rate() -> Decimal {
    Decimal::new(99_999, 2)
}

/// Rejects rates that would overflow the NUMERIC(5,2) column
fn validate_hourly_rate(rate: &Decimal) -> Result<(), ValidationError> {
    if rate.abs() > max_hourly_rate() {
        return Err(ValidationError::new("hourly_rate_out_of_range"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCaregiverRequest {
    pub caregiver_user_id: UserId,
    pub photo: Option<String>,
    pub gender: String,
    pub caregiving_type: String,
    #[validate(custom(function = validate_hourly_rate))]
    pub hourly_rate: Decimal,
}

impl From<CreateCaregiverRequest> for NewCaregiver {
    fn from(request: CreateCaregiverRequest) -> Self {
        NewCaregiver {
            caregiver_user_id: request.caregiver_user_id,
            photo: request.photo,
            gender: request.gender,
            caregiving_type: request.caregiving_type,
            hourly_rate: request.hourly_rate,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCaregiverRequest {
    pub photo: Option<String>,
    pub gender: Option<String>,
    pub caregiving_type: Option<String>,
    #[validate(custom(function = validate_hourly_rate))]
    pub hourly_rate: Option<Decimal>,
}

impl From<UpdateCaregiverRequest> for CaregiverPatch {
    fn from(request: UpdateCaregiverRequest) -> Self {
        CaregiverPatch {
            photo: request.photo,
            gender: request.gender,
            caregiving_type: request.caregiving_type,
            hourly_rate: request.hourly_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request_with_rate(rate: Decimal) -> CreateCaregiverRequest {
        CreateCaregiverRequest {
            caregiver_user_id: UserId::new(1),
            photo: None,
            gender: "female".to_string(),
            caregiving_type: "elderly care".to_string(),
            hourly_rate: rate,
        }
    }

    #[test]
    fn test_rate_at_column_maximum_is_accepted() {
        assert!(request_with_rate(dec!(999.99)).validate().is_ok());
    }

    #[test]
    fn test_rate_overflowing_column_is_rejected() {
        assert!(request_with_rate(dec!(1000.00)).validate().is_err());
    }
}
