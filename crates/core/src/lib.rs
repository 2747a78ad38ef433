//! Pure building blocks for the schema deployer.
//!
//! Nothing in this crate talks to the network. The `supadeploy` crate
//! wires these pieces to the remote RPC endpoint.

pub mod credentials;
pub mod env_file;
pub mod error;
pub mod outcome;
pub mod statements;
