//! Core data types and structures

pub mod addresses;
pub mod network;
pub mod profile;
pub mod deployment;

pub use addresses::*;
pub use network::*;
pub use profile::*;
pub use deployment::*;
