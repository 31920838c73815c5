//! Decision table for the ThreadX port selector.
//!
//! Maps the set of target symbols visible to a build to exactly one
//! [`PortModule`], or fails with [`Error::UnsupportedTarget`]. There is no
//! default port: an unmatched configuration is always an error.
//!
//! This crate is used by the `threadx-port` build script. Its `log` output
//! (resolution steps, shadowed entries) only shows up where a logger is
//! installed; the build script reports through `cargo:warning` instead.

mod error;
mod port;
mod symbol;
mod table;

pub use error::Error;
pub use port::PortModule;
pub use symbol::{SymbolSet, TargetSymbol};
pub use table::{table_path, Entry, Resolution, Table};

/// Environment variable naming an integrator-supplied YAML table.
///
/// A relative path is taken relative to the `threadx-port` manifest
/// directory, see [`table_path`].
pub const TABLE_ENV: &str = "THREADX_PORT_TABLE";
