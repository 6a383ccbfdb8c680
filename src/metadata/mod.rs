//! Metadata types used while instrumenting a loaded module.
//!
//! # Key Components
//!
//! - [`token`] - Metadata table row references
//! - [`tableid`] - The tables wrapper references point into
//! - [`import`] - The read-only metadata-import capability of a module
//! - [`identity`] - Assembly names and versions
//! - [`integration`] - Integration definitions and wrapper cache keys
//! - [`config`] - Store configuration
//! - [`modulemetadata`] - The per-module store and its wrapper caches

/// Cache configuration and overwrite diagnostics
pub mod config;
/// Assembly references and versions
pub mod identity;
/// The metadata-import capability and its owning handle
pub mod import;
/// Integration definitions
pub mod integration;
/// Per-module metadata store
pub mod modulemetadata;
/// Metadata table identifiers
pub mod tableid;
/// Metadata tokens
pub mod token;
