//! # ExoVis Backend
//!
//! Rust backend for the ExoVis exoplanet visualization frontend.
//!
//! Serves three NASA mission catalogs (Kepler KOI, TESS TOI, K2 planets
//! and candidates) reshaped into a unified JSON planet schema, derives
//! multi-planet system records for the orrery view, and classifies
//! candidate feature vectors with a pre-trained model loaded once at
//! startup.
//!
//! ## Architecture
//!
//! - [`catalog`]: raw CSV access, per-mission column profiles, checksums
//! - [`models`]: unified planet and system wire types
//! - [`services`]: normalization, system grouping and summaries
//! - [`predict`]: model artifacts and inference
//! - [`http`]: axum-based REST API
//!
//! Every request re-reads the source files from disk; there is no shared
//! mutable state. The only process-wide resource is the read-only
//! predictor handle injected through the HTTP state.

pub mod catalog;
pub mod config;
pub mod http;
pub mod models;
pub mod predict;
pub mod services;
