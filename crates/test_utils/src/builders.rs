//! Builder patterns for test data construction
//!
//! Builders start from realistic fake values and let a test override only
//! the fields it asserts on.

use fake::faker::address::en::CityName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::UserId;
use infra_db::repositories::caregiver::NewCaregiver;
use infra_db::repositories::user::NewUser;

/// Builder for user create inputs
pub struct UserBuilder {
    email: String,
    given_name: String,
    surname: String,
    city: String,
    phone_number: String,
    profile_description: Option<String>,
    password: String,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            email: SafeEmail().fake(),
            given_name: FirstName().fake(),
            surname: LastName().fake(),
            city: CityName().fake(),
            phone_number: PhoneNumber().fake(),
            profile_description: None,
            password: "secret".to_string(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn given_name(mut self, given_name: impl Into<String>) -> Self {
        self.given_name = given_name.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn profile_description(mut self, description: impl Into<String>) -> Self {
        self.profile_description = Some(description.into());
        self
    }

    pub fn build(self) -> NewUser {
        NewUser {
            email: self.email,
            given_name: self.given_name,
            surname: self.surname,
            city: self.city,
            phone_number: self.phone_number,
            profile_description: self.profile_description,
            password: self.password,
        }
    }
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for caregiver create inputs
pub struct CaregiverBuilder {
    caregiver_user_id: UserId,
    photo: Option<String>,
    gender: String,
    caregiving_type: String,
    hourly_rate: Decimal,
}

impl CaregiverBuilder {
    pub fn new(caregiver_user_id: UserId) -> Self {
        Self {
            caregiver_user_id,
            photo: None,
            gender: "female".to_string(),
            caregiving_type: "elderly care".to_string(),
            hourly_rate: dec!(20.00),
        }
    }

    pub fn caregiving_type(mut self, caregiving_type: impl Into<String>) -> Self {
        self.caregiving_type = caregiving_type.into();
        self
    }

    pub fn hourly_rate(mut self, hourly_rate: Decimal) -> Self {
        self.hourly_rate = hourly_rate;
        self
    }

    pub fn build(self) -> NewCaregiver {
        NewCaregiver {
            caregiver_user_id: self.caregiver_user_id,
            photo: self.photo,
            gender: self.gender,
            caregiving_type: self.caregiving_type,
            hourly_rate: self.hourly_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_builder_overrides_only_named_fields() {
        let user = UserBuilder::new().email("a@x.com").city("Astana").build();

        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.city, "Astana");
        assert!(!user.given_name.is_empty());
        assert!(!user.surname.is_empty());
    }

    #[test]
    fn test_caregiver_builder_carries_key() {
        let caregiver = CaregiverBuilder::new(UserId::new(8))
            .hourly_rate(dec!(99.99))
            .build();

        assert_eq!(caregiver.caregiver_user_id, UserId::new(8));
        assert_eq!(caregiver.hourly_rate, dec!(99.99));
    }
}
