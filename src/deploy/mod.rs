//! Contract deployment: executor seam, selector and executors

pub mod executor;
pub mod selector;
pub mod artifact;
pub mod rpc;
pub mod dry_run;

pub use executor::*;
pub use selector::*;
pub use artifact::*;
pub use rpc::*;
pub use dry_run::*;
