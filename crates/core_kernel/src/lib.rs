//! Core Kernel - Foundational types for the caregiving marketplace
//!
//! This crate provides the building blocks shared by the persistence and API
//! layers, most importantly the strongly typed record identifiers.

pub mod identifiers;

pub use identifiers::{AppointmentId, JobId, UserId};
