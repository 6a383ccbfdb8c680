//! # wrapmeta Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the wrapmeta library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all wrapmeta operations
pub use crate::Error;

/// The result type used throughout wrapmeta
pub use crate::Result;

// ================================================================================================
// Per-Module Store
// ================================================================================================

/// Metadata state of one loaded module
pub use crate::metadata::modulemetadata::{ModuleMetadata, SharedModuleMetadata};

/// Store configuration
pub use crate::metadata::config::{CacheConfig, OverwritePolicy};

// ================================================================================================
// Metadata Types
// ================================================================================================

/// Metadata token type for referencing table entries
pub use crate::metadata::token::Token;

/// Table identifiers carried in the high byte of a token
pub use crate::metadata::tableid::TableId;

/// The metadata-import capability and its owning handle
pub use crate::metadata::import::{MetadataImport, MetadataImportHandle};

// ================================================================================================
// Integrations
// ================================================================================================

/// Integration definitions and the method references they are made of
pub use crate::metadata::integration::{Integration, MethodReference, MethodReplacement};

/// Assembly identities used by method references
pub use crate::metadata::identity::{AssemblyReference, AssemblyVersion};
