//! Repository integration tests
//!
//! These tests run against a real PostgreSQL instance in a testcontainer
//! and require a local Docker daemon. Each test starts an isolated database
//! so whole-table assertions (pagination, key generation) hold.

use rust_decimal_macros::dec;

use core_kernel::{JobId, UserId};
use infra_db::repositories::appointment::AppointmentPatch;
use infra_db::repositories::caregiver::CaregiverPatch;
use infra_db::repositories::user::UserPatch;
use infra_db::repositories::{
    AddressRepository, AppointmentRepository, CaregiverRepository, JobApplicationRepository,
    JobRepository, MemberRepository, UserRepository,
};
use infra_db::{DatabaseError, Page};
use test_utils::{
    create_isolated_test_database, sample_address, sample_appointment, sample_caregiver,
    sample_job, sample_job_application, sample_member, sample_user, UserBuilder,
};

/// Create followed by get yields the created record with its generated key
#[tokio::test]
async fn test_user_create_then_get_round_trip() {
    let db = create_isolated_test_database().await.unwrap();
    let repo = UserRepository::new(db.pool().clone());

    let created = repo.create(sample_user()).await.unwrap();
    assert_eq!(created.email.as_deref(), Some("a@x.com"));
    assert_eq!(created.given_name.as_deref(), Some("A"));

    let fetched = repo.get(created.user_id).await.unwrap();
    assert_eq!(fetched, created);
}

/// Get on a key never created fails with NotFound; delete on the same key
/// succeeds with a confirmation and get still fails afterwards
#[tokio::test]
async fn test_missing_user_get_fails_and_delete_is_silent() {
    let db = create_isolated_test_database().await.unwrap();
    let repo = UserRepository::new(db.pool().clone());
    let ghost = UserId::new(404);

    let err = repo.get(ghost).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "User not found");

    repo.delete(ghost).await.unwrap();

    let err = repo.get(ghost).await.unwrap_err();
    assert!(err.is_not_found());
}

/// The overwrite-with-defaults merge law: a partial update touching one
/// field clears every other mutable field, including email
#[tokio::test]
async fn test_user_update_clears_unsupplied_fields() {
    let db = create_isolated_test_database().await.unwrap();
    let repo = UserRepository::new(db.pool().clone());

    let created = repo.create(sample_user()).await.unwrap();

    let patch = UserPatch {
        city: Some("D".to_string()),
        ..UserPatch::default()
    };
    let echoed = repo.update(created.user_id, patch).await.unwrap();

    // The response echoes the key plus the supplied fields only
    assert_eq!(echoed.user_id, created.user_id);
    assert_eq!(echoed.city.as_deref(), Some("D"));
    assert!(echoed.email.is_none());

    // The stored row has the same shape: city updated, everything else NULL,
    // email included since it was not re-supplied
    let stored = repo.get(created.user_id).await.unwrap();
    assert_eq!(stored.city.as_deref(), Some("D"));
    assert!(stored.email.is_none());
    assert!(stored.given_name.is_none());
    assert!(stored.surname.is_none());
    assert!(stored.phone_number.is_none());
    assert!(stored.profile_description.is_none());
    assert!(stored.password.is_none());
}

/// The merge law holds for the empty patch: every mutable field clears
#[tokio::test]
async fn test_user_empty_update_clears_every_field() {
    let db = create_isolated_test_database().await.unwrap();
    let repo = UserRepository::new(db.pool().clone());

    let created = repo.create(sample_user()).await.unwrap();
    repo.update(created.user_id, UserPatch::default())
        .await
        .unwrap();

    let stored = repo.get(created.user_id).await.unwrap();
    assert_eq!(stored.user_id, created.user_id);
    assert!(stored.email.is_none());
    assert!(stored.city.is_none());
    assert!(stored.password.is_none());
}

/// Update on a missing key affects zero rows and still reports success
#[tokio::test]
async fn test_user_update_missing_key_is_silent_noop() {
    let db = create_isolated_test_database().await.unwrap();
    let repo = UserRepository::new(db.pool().clone());
    let ghost = UserId::new(999);

    let patch = UserPatch {
        city: Some("Nowhere".to_string()),
        ..UserPatch::default()
    };
    let echoed = repo.update(ghost, patch).await.unwrap();
    assert_eq!(echoed.user_id, ghost);
    assert_eq!(echoed.city.as_deref(), Some("Nowhere"));

    assert!(repo.get(ghost).await.unwrap_err().is_not_found());
}

/// List(skip, limit) returns max(0, min(limit, N - skip)) records in key order
#[tokio::test]
async fn test_user_list_pagination_window() {
    let db = create_isolated_test_database().await.unwrap();
    let repo = UserRepository::new(db.pool().clone());

    let mut ids = Vec::new();
    for _ in 0..5 {
        let user = repo.create(UserBuilder::new().build()).await.unwrap();
        ids.push(user.user_id);
    }

    // Full scan equals insertion order
    let all = repo.list(Page::new(0, 5)).await.unwrap();
    let listed_ids: Vec<_> = all.iter().map(|u| u.user_id).collect();
    assert_eq!(listed_ids, ids);

    // Window in the middle
    let window = repo.list(Page::new(2, 2)).await.unwrap();
    assert_eq!(window.len(), 2);
    assert_eq!(window[0].user_id, ids[2]);
    assert_eq!(window[1].user_id, ids[3]);

    // Truncated tail: N=5, skip=4, limit=3 -> 1 record
    let tail = repo.list(Page::new(4, 3)).await.unwrap();
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].user_id, ids[4]);

    // Skip past the end
    assert!(repo.list(Page::new(10, 20)).await.unwrap().is_empty());

    // Defaults: skip 0, limit 20 covers the whole table here
    assert_eq!(repo.list(Page::default()).await.unwrap().len(), 5);
}

/// Generated keys increase monotonically and are never reused after deletion
#[tokio::test]
async fn test_user_keys_are_monotonic_and_never_reused() {
    let db = create_isolated_test_database().await.unwrap();
    let repo = UserRepository::new(db.pool().clone());

    let first = repo.create(UserBuilder::new().build()).await.unwrap();
    let second = repo.create(UserBuilder::new().build()).await.unwrap();
    assert!(second.user_id > first.user_id);

    repo.delete(second.user_id).await.unwrap();

    let third = repo.create(UserBuilder::new().build()).await.unwrap();
    assert!(third.user_id > second.user_id);
}

/// Caller-supplied key collision is rejected as a duplicate entry
#[tokio::test]
async fn test_caregiver_duplicate_key_is_rejected() {
    let db = create_isolated_test_database().await.unwrap();
    let repo = CaregiverRepository::new(db.pool().clone());
    let key = UserId::new(1);

    repo.create(sample_caregiver(key)).await.unwrap();
    let err = repo.create(sample_caregiver(key)).await.unwrap_err();

    assert!(matches!(err, DatabaseError::DuplicateEntry(_)));
}

/// The hourly rate round-trips exactly at the NUMERIC(5,2) extremes
#[tokio::test]
async fn test_caregiver_rate_round_trips_exactly() {
    let db = create_isolated_test_database().await.unwrap();
    let repo = CaregiverRepository::new(db.pool().clone());

    let mut input = sample_caregiver(UserId::new(2));
    input.hourly_rate = dec!(999.99);
    repo.create(input).await.unwrap();

    let stored = repo.get(UserId::new(2)).await.unwrap();
    assert_eq!(stored.hourly_rate, Some(dec!(999.99)));

    let patch = CaregiverPatch {
        hourly_rate: Some(dec!(0.01)),
        ..CaregiverPatch::default()
    };
    repo.update(UserId::new(2), patch).await.unwrap();
    let updated = repo.get(UserId::new(2)).await.unwrap();
    assert_eq!(updated.hourly_rate, Some(dec!(0.01)));
    assert!(updated.gender.is_none());
}

/// Member and address round-trip under their caller-supplied keys
#[tokio::test]
async fn test_member_and_address_round_trip() {
    let db = create_isolated_test_database().await.unwrap();
    let members = MemberRepository::new(db.pool().clone());
    let addresses = AddressRepository::new(db.pool().clone());
    let key = UserId::new(3);

    let member = members.create(sample_member(key)).await.unwrap();
    assert_eq!(member.house_rules.as_deref(), Some("No smoking"));
    assert_eq!(members.get(key).await.unwrap(), member);

    let address = addresses.create(sample_address(key)).await.unwrap();
    assert_eq!(address.town.as_deref(), Some("Astana"));
    assert_eq!(addresses.get(key).await.unwrap(), address);

    let err = members.get(UserId::new(99)).await.unwrap_err();
    assert_eq!(err.to_string(), "Member not found");
    let err = addresses.get(UserId::new(99)).await.unwrap_err();
    assert_eq!(err.to_string(), "Address not found");
}

/// The composite-key scenario: create (5, 9), get it back, delete it, and
/// the subsequent get fails with NotFound
#[tokio::test]
async fn test_job_application_composite_key_lifecycle() {
    let db = create_isolated_test_database().await.unwrap();
    let repo = JobApplicationRepository::new(db.pool().clone());
    let caregiver = UserId::new(5);
    let job = JobId::new(9);

    let created = repo
        .create(sample_job_application(caregiver, job))
        .await
        .unwrap();
    assert_eq!(created.caregiver_user_id, caregiver);
    assert_eq!(created.job_id, job);

    let fetched = repo.get(caregiver, job).await.unwrap();
    assert_eq!(fetched, created);

    // Applying twice to the same job collides on the composite key
    let err = repo
        .create(sample_job_application(caregiver, job))
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::DuplicateEntry(_)));

    repo.delete(caregiver, job).await.unwrap();
    let err = repo.get(caregiver, job).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Job application not found");
}

/// Jobs and appointments round-trip with their date/time fields intact
#[tokio::test]
async fn test_job_and_appointment_round_trip() {
    let db = create_isolated_test_database().await.unwrap();
    let jobs = JobRepository::new(db.pool().clone());
    let appointments = AppointmentRepository::new(db.pool().clone());
    let member = UserId::new(4);
    let caregiver = UserId::new(5);

    let job = jobs.create(sample_job(member)).await.unwrap();
    let fetched = jobs.get(job.job_id).await.unwrap();
    assert_eq!(fetched, job);
    assert_eq!(fetched.date_posted, sample_job(member).date_posted.into());

    let appointment = appointments
        .create(sample_appointment(caregiver, member))
        .await
        .unwrap();
    let fetched = appointments.get(appointment.appointment_id).await.unwrap();
    assert_eq!(fetched, appointment);
    assert_eq!(
        fetched.appointment_time,
        Some(sample_appointment(caregiver, member).appointment_time)
    );
}

/// Writing NULL into a NOT NULL column of an existing row is a store-level
/// constraint fault, while the same partial update against a missing key
/// silently updates zero rows
#[tokio::test]
async fn test_partial_appointment_update_hits_not_null_constraint() {
    let db = create_isolated_test_database().await.unwrap();
    let repo = AppointmentRepository::new(db.pool().clone());

    let created = repo
        .create(sample_appointment(UserId::new(1), UserId::new(2)))
        .await
        .unwrap();

    // status is the only supplied field; appointment_date and friends would
    // be overwritten with NULL, which the schema forbids on an existing row
    let patch = AppointmentPatch {
        status: Some("confirmed".to_string()),
        ..AppointmentPatch::default()
    };
    let err = repo
        .update(created.appointment_id, patch.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::ConstraintViolation(_)));

    // Zero rows match, so nothing violates the constraint
    let ghost = core_kernel::AppointmentId::new(12345);
    let echoed = repo.update(ghost, patch).await.unwrap();
    assert_eq!(echoed.appointment_id, ghost);
    assert_eq!(echoed.status.as_deref(), Some("confirmed"));
}
