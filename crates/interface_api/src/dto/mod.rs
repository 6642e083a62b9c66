//! Request/response data transfer objects
//!
//! One module per entity. Create requests carry the required fields and are
//! validated before any store access; update requests are partial records
//! where every field is optional. Responses reuse the stored record types
//! from `infra_db` directly.

pub mod address;
pub mod appointment;
pub mod caregiver;
pub mod job;
pub mod job_application;
pub mod member;
pub mod user;

use serde::Serialize;

/// Confirmation body returned by every delete operation
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
