//! Request handlers
//!
//! One module per entity, each exposing the five CRUD handlers wired up in
//! [`create_router`](crate::create_router), plus the health endpoints.

pub mod address;
pub mod appointment;
pub mod caregiver;
pub mod health;
pub mod job;
pub mod job_application;
pub mod member;
pub mod user;
