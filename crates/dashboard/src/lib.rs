//! Dashboard layer for Fundamenticks.
//!
//! This crate provides:
//! - One-shot loading of the calendar and seasonality datasets
//! - Explicit session/navigation state with tier gating
//! - Serializable view models per page
//! - Plain-text reports for the command line

pub mod store;
pub mod navigation;
pub mod view;
pub mod report;

pub use store::Datasets;
pub use navigation::{NavAction, Page, Route, Session, Tab, User};
pub use view::{Dashboard, Screen, View};
