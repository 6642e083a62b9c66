//! Infrastructure Database Layer
//!
//! This crate provides the persistence layer for the caregiving marketplace,
//! backed by PostgreSQL through SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: one repository per entity
//! (users, caregivers, members, addresses, jobs, job applications,
//! appointments), each translating typed create/get/list/update/delete
//! requests into SQL. Repositories hold a clone of the shared connection
//! pool, which is created once at process start.
//!
//! # Update semantics
//!
//! Partial updates overwrite every mutable column: fields the caller does not
//! supply are written as NULL rather than preserved. See the repository
//! module docs for the details of this contract.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig};
//! use infra_db::repositories::UserRepository;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/careconnect")).await?;
//! let users = UserRepository::new(pool);
//! ```

pub mod error;
pub mod pagination;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pagination::Page;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
