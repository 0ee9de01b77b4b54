//! Data persistence and file operations

pub mod deployments;

pub use deployments::*;
