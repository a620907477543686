//! Core types and configuration for the Fundamenticks dashboard.
//!
//! This crate provides shared types used across all other crates:
//! - Calendar events and their scores
//! - Seasonality data (monthly returns, trend lines)
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
