// crates/cli/src/lib.rs
// bitflags: clap/notify pull in different major versions transitively
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
