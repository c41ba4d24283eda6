//! Module registry contracts.
//!
//! This module defines the registry provider, the per-instance module
//! registry it produces, and the process-wide module environment. Module
//! packaging, versioned distribution and UI rendering are out of scope
//! for this crate.

pub mod class;
pub mod delegate;
pub mod descriptor;
pub mod environment;
pub mod module;
pub mod module_registry;
pub mod provider;
