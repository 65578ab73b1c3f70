//! HTTP server module.
//!
//! Axum-based REST surface over the catalog services and the predictor.
//! Handlers stay thin: parse the request, delegate to the service layer,
//! map domain errors onto HTTP responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
