//! Docker command generation
//!
//! # Modules
//!
//! - [`command`]: Tag naming and build/push command formatting
//! - [`output`]: Section rendering for standard output
//! - [`planner`]: Which releases get a command, in which order

pub mod command;
pub mod output;
pub mod planner;
