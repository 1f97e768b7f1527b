//! A registry of microcontroller board descriptions.
//!
//! The firmware build and the documentation generator both need a complete,
//! validated record of each board variant they target. This crate holds the
//! built-in board set, loads additional descriptions from YAML files, and
//! resolves a board name into a [`Board`] that is guaranteed valid and ready
//! to query.
#![warn(missing_docs)]

mod board;
mod builtin;
mod registry;

pub use board::Board;
pub use registry::{Registry, RegistryError};
