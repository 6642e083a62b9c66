//! Identifier serialization tests

use core_kernel::{AppointmentId, JobId, UserId};
use proptest::prelude::*;

#[test]
fn test_user_id_serializes_transparently() {
    let id = UserId::new(5);
    assert_eq!(serde_json::to_string(&id).unwrap(), "5");
}

#[test]
fn test_user_id_deserializes_from_bare_integer() {
    let id: UserId = serde_json::from_str("9").unwrap();
    assert_eq!(id, UserId::new(9));
}

#[test]
fn test_appointment_id_ordering_follows_key_order() {
    let earlier = AppointmentId::new(1);
    let later = AppointmentId::new(2);
    assert!(earlier < later);
}

proptest! {
    #[test]
    fn prop_job_id_json_round_trip(value in any::<i64>()) {
        let id = JobId::new(value);
        let json = serde_json::to_string(&id).unwrap();
        let back: JobId = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(id, back);
    }
}
