//! AI Endpoint Probe - integration-test CLI for the SM4RT W4TCH AI API
//!
//! This library authenticates against the API and exercises the AI
//! endpoints (connectivity, insights, predictions), printing readable
//! summaries of whatever the server returns.

pub mod cli;
pub mod client;
pub mod common;
pub mod model;
pub mod probes;
pub mod sample;

// Re-export commonly used types for tests
pub use client::ApiClient;
pub use common::{Error, Result};
