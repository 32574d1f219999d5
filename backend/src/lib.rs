//! # SpaceX Launch Records Dashboard
//!
//! Backend for a single-page dashboard over a static launch-records dataset.
//! A site dropdown and a payload range control drive two charts: a pie of
//! launch outcomes and a payload-versus-outcome scatter.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Launch records, the shared dataset and the selection state
//! - [`io`]: CSV loading of the dataset, with descriptive load errors
//! - [`services`]: Aggregation engine, reactive binder and dashboard sessions
//! - [`routes`]: View-model and control types served to the page
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`config`]: TOML file + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The dataset is loaded once and shared read-only; each view is a pure
//! function of `(dataset, selection)`.

pub mod api;

pub mod config;
pub mod io;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
