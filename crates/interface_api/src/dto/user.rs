//! User DTOs

use serde::Deserialize;
use validator::Validate;

use infra_db::repositories::user::{NewUser, UserPatch};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,
    pub given_name: String,
    pub surname: String,
    pub city: String,
    pub phone_number: String,
    pub profile_description: Option<String>,
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            email: request.email,
            given_name: request.given_name,
            surname: request.surname,
            city: request.city,
            phone_number: request.phone_number,
            profile_description: request.profile_description,
            password: request.password,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
    pub profile_description: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(request: UpdateUserRequest) -> Self {
        UserPatch {
            email: request.email,
            given_name: request.given_name,
            surname: request.surname,
            city: request.city,
            phone_number: request.phone_number,
            profile_description: request.profile_description,
            password: request.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_malformed_email() {
        let request = CreateUserRequest {
            email: "not-an-email".to_string(),
            given_name: "A".to_string(),
            surname: "B".to_string(),
            city: "C".to_string(),
            phone_number: "123".to_string(),
            profile_description: None,
            password: "p".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_valid_email() {
        let request = CreateUserRequest {
            email: "a@x.com".to_string(),
            given_name: "A".to_string(),
            surname: "B".to_string(),
            city: "C".to_string(),
            phone_number: "123".to_string(),
            profile_description: None,
            password: "p".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_update_fields_deserialize_as_none() {
        let request: UpdateUserRequest = serde_json::from_str(r#"{"city": "D"}"#).unwrap();
        let patch = UserPatch::from(request);

        assert_eq!(patch.city.as_deref(), Some("D"));
        assert!(patch.email.is_none());
        assert!(patch.password.is_none());
    }
}
