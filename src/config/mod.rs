//! Configuration management for the deployer

pub mod settings;
pub mod selection;

pub use settings::*;
pub use selection::*;
