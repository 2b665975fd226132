//! Common utilities shared across the workspace.
//!
//! This crate provides unified error handling and its HTTP rendering.

pub mod error;

pub use error::{AppError, AppResult};
