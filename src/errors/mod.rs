//! Error handling for configuration, validation and deployment

pub mod deploy_error;

pub use deploy_error::*;
