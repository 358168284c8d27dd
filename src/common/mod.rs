//! Common utilities shared across the probe modules

pub mod error;
pub mod logging;

pub use error::{Error, Result};
