//! Strongly-typed identifiers for marketplace records
//!
//! Using newtype wrappers around the database's integer keys provides type
//! safety and prevents accidental mixing of different identifier types, e.g.
//! passing a job id where a user id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw database key
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying integer key
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    UserId,
    "Key of a platform user; also identifies the caregiver/member/address extensions"
);
define_id!(JobId, "Sequence-assigned key of a job posting");
define_id!(AppointmentId, "Sequence-assigned key of a scheduled appointment");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_integer() {
        let id = UserId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_parsing_round_trip() {
        let original = JobId::new(7);
        let parsed: JobId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_ids_of_different_entities_are_distinct_types() {
        // UserId and JobId wrap the same integer but never compare across types;
        // this only has to compile to prove the point.
        let user = UserId::new(1);
        let job = JobId::new(1);
        assert_eq!(user.value(), job.value());
    }
}
