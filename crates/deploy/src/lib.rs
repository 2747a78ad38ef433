//! `supadeploy` library crate.
//!
//! Re-exports internal modules for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod rpc;
pub mod runner;

pub use config::DeployConfig;
pub use error::DeployError;
pub use pipeline::run;
