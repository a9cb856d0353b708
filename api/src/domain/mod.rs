//! Domain layer
//!
//! Contains the record types and port definitions, with no I/O of its own.
//! - `entities`: Normalized records handed to consumers
//! - `ports`: Trait definitions for upstream data sources

pub mod entities;
pub mod ports;
