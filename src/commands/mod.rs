//! CLI command implementations
//!
//! Each command is in its own submodule.

pub mod init;

pub use init::{execute_init, InitOptions};
