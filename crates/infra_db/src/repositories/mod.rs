//! Repository implementations for marketplace entities
//!
//! One module per entity. Each repository translates typed
//! create/get/list/update/delete requests into SQL against its table and
//! defines the record, input, and patch types it works with.
//!
//! # Shared contract
//!
//! - `create` inserts and returns the stored row, including the key the
//!   sequence assigned where the entity uses a generated key.
//! - `get` fails with [`DatabaseError::NotFound`](crate::DatabaseError) when
//!   no row matches.
//! - `list` pages through the table in primary-key order.
//! - `update` overwrites every mutable column from the patch (unsupplied
//!   fields become NULL) and echoes the patch back with the key; a missing
//!   key updates zero rows and still succeeds.
//! - `delete` is unconditional; deleting a missing key succeeds.
//!
//! There are no foreign keys between the tables. The keys of caregivers,
//! members, and addresses are assumed, not verified, to reference an
//! existing user.

pub mod address;
pub mod appointment;
pub mod caregiver;
pub mod job;
pub mod job_application;
pub mod member;
pub mod user;

pub use address::AddressRepository;
pub use appointment::AppointmentRepository;
pub use caregiver::CaregiverRepository;
pub use job::JobRepository;
pub use job_application::JobApplicationRepository;
pub use member::MemberRepository;
pub use user::UserRepository;
