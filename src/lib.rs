//! Library exports for the Idaho Data API, shared between the binary and tests.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod startup;
pub mod state;
