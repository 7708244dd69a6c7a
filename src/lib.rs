//! Furniture recommendation service.
//!
//! Matches a shopper's questionnaire answers against a sofa catalog: hard
//! filtering, weighted scoring, ranking, and progressive relaxation when too
//! few items qualify. The HTTP layer in [`api`] hosts the engine.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
