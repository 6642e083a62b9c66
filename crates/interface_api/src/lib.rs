//! HTTP API Layer
//!
//! This crate provides the REST API for the caregiving marketplace record
//! service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: the five CRUD handlers per entity plus health checks
//! - **DTOs**: request objects with validation, run before any store access
//! - **Middleware**: request logging, tracing, wide-open CORS
//! - **Error handling**: consistent error responses, 404 for missing
//!   records, 422 for invalid input, 409 for key collisions
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use infra_db::repositories::{
    AddressRepository, AppointmentRepository, CaregiverRepository, JobApplicationRepository,
    JobRepository, MemberRepository, UserRepository,
};

use crate::config::ApiConfig;
use crate::handlers::{
    address, appointment, caregiver, health, job, job_application, member, user,
};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
}

impl AppState {
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    pub fn caregivers(&self) -> CaregiverRepository {
        CaregiverRepository::new(self.pool.clone())
    }

    pub fn members(&self) -> MemberRepository {
        MemberRepository::new(self.pool.clone())
    }

    pub fn addresses(&self) -> AddressRepository {
        AddressRepository::new(self.pool.clone())
    }

    pub fn jobs(&self) -> JobRepository {
        JobRepository::new(self.pool.clone())
    }

    pub fn job_applications(&self) -> JobApplicationRepository {
        JobApplicationRepository::new(self.pool.clone())
    }

    pub fn appointments(&self) -> AppointmentRepository {
        AppointmentRepository::new(self.pool.clone())
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let state = AppState { pool, config };

    // Health routes
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // User routes
    let user_routes = Router::new()
        .route("/", post(user::create_user))
        .route("/", get(user::list_users))
        .route("/:user_id", get(user::get_user))
        .route("/:user_id", put(user::update_user))
        .route("/:user_id", delete(user::delete_user));

    // Caregiver routes
    let caregiver_routes = Router::new()
        .route("/", post(caregiver::create_caregiver))
        .route("/", get(caregiver::list_caregivers))
        .route("/:caregiver_user_id", get(caregiver::get_caregiver))
        .route("/:caregiver_user_id", put(caregiver::update_caregiver))
        .route("/:caregiver_user_id", delete(caregiver::delete_caregiver));

    // Member routes
    let member_routes = Router::new()
        .route("/", post(member::create_member))
        .route("/", get(member::list_members))
        .route("/:member_user_id", get(member::get_member))
        .route("/:member_user_id", put(member::update_member))
        .route("/:member_user_id", delete(member::delete_member));

    // Address routes; the resource path is singular, one address per member
    let address_routes = Router::new()
        .route("/", post(address::create_address))
        .route("/", get(address::list_addresses))
        .route("/:member_user_id", get(address::get_address))
        .route("/:member_user_id", put(address::update_address))
        .route("/:member_user_id", delete(address::delete_address));

    // Job routes
    let job_routes = Router::new()
        .route("/", post(job::create_job))
        .route("/", get(job::list_jobs))
        .route("/:job_id", get(job::get_job))
        .route("/:job_id", put(job::update_job))
        .route("/:job_id", delete(job::delete_job));

    // Job application routes, addressed by the composite key
    let job_application_routes = Router::new()
        .route("/", post(job_application::create_job_application))
        .route("/", get(job_application::list_job_applications))
        .route(
            "/:caregiver_user_id/:job_id",
            get(job_application::get_job_application),
        )
        .route(
            "/:caregiver_user_id/:job_id",
            put(job_application::update_job_application),
        )
        .route(
            "/:caregiver_user_id/:job_id",
            delete(job_application::delete_job_application),
        );

    // Appointment routes
    let appointment_routes = Router::new()
        .route("/", post(appointment::create_appointment))
        .route("/", get(appointment::list_appointments))
        .route("/:appointment_id", get(appointment::get_appointment))
        .route("/:appointment_id", put(appointment::update_appointment))
        .route("/:appointment_id", delete(appointment::delete_appointment));

    Router::new()
        .merge(health_routes)
        .nest("/users/", user_routes)
        .nest("/caregivers/", caregiver_routes)
        .nest("/members/", member_routes)
        .nest("/address/", address_routes)
        .nest("/jobs/", job_routes)
        .nest("/job_applications/", job_application_routes)
        .nest("/appointments/", appointment_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
