//! Read access to the metadata tables of a loaded module.
//!
//! The runtime hands the profiler a metadata-import capability for every module it loads. This
//! module describes that capability as the [`MetadataImport`] trait and provides the
//! [`MetadataImportHandle`], the single owner of one live capability for the lifetime of a
//! module's [`crate::metadata::modulemetadata::ModuleMetadata`].
//!
//! Names cross this boundary as UTF-16, the encoding the runtime uses for metadata strings.
//!
//! # Examples
//!
//! ```rust
//! use widestring::{u16cstr, U16CStr};
//! use wrapmeta::{
//!     metadata::import::{MetadataImport, MetadataImportHandle},
//!     Result, Token,
//! };
//!
//! struct Empty;
//!
//! impl MetadataImport for Empty {
//!     fn find_type_ref(&self, _scope: Token, _name: &U16CStr) -> Result<Option<Token>> {
//!         Ok(None)
//!     }
//!
//!     fn find_member_ref(
//!         &self,
//!         _parent: Token,
//!         _name: &U16CStr,
//!         _signature: &[u8],
//!     ) -> Result<Option<Token>> {
//!         Ok(None)
//!     }
//!
//!     fn find_assembly_ref(&self, _name: &U16CStr) -> Result<Option<Token>> {
//!         Ok(None)
//!     }
//! }
//!
//! let handle = MetadataImportHandle::new(Box::new(Empty));
//! assert!(handle.find_assembly_ref(u16cstr!("mscorlib"))?.is_none());
//! # Ok::<(), wrapmeta::Error>(())
//! ```

use std::{fmt, ops::Deref};

use widestring::U16CStr;

use crate::{metadata::token::Token, Result};

/// Read-only lookups over a module's existing metadata tables.
///
/// Every lookup returns `Ok(None)` when the requested row does not exist; `Err` is reserved
/// for failures of the underlying capability. Implementations are not required to be
/// reentrant across threads, which is why a shared store serializes all access to them
/// behind its per-module lock.
pub trait MetadataImport {
    /// Finds a `TypeRef` row by its fully qualified name within a resolution scope
    /// (usually an `AssemblyRef` token).
    ///
    /// # Errors
    /// Returns [`crate::Error::MetadataImport`] if the underlying capability fails.
    fn find_type_ref(&self, scope: Token, name: &U16CStr) -> Result<Option<Token>>;

    /// Finds a `MemberRef` row by parent type, member name and signature blob.
    ///
    /// # Errors
    /// Returns [`crate::Error::MetadataImport`] if the underlying capability fails.
    fn find_member_ref(
        &self,
        parent: Token,
        name: &U16CStr,
        signature: &[u8],
    ) -> Result<Option<Token>>;

    /// Finds an `AssemblyRef` row by simple assembly name.
    ///
    /// # Errors
    /// Returns [`crate::Error::MetadataImport`] if the underlying capability fails.
    fn find_assembly_ref(&self, name: &U16CStr) -> Result<Option<Token>>;
}

/// Unique owner of a module's metadata-import capability.
///
/// The handle cannot be cloned and has no empty state, so a store holding one always has a
/// live capability. The capability is released exactly once, when the handle is dropped.
pub struct MetadataImportHandle {
    inner: Box<dyn MetadataImport + Send>,
}

impl MetadataImportHandle {
    /// Takes ownership of an acquired metadata-import capability
    #[must_use]
    pub fn new(import: Box<dyn MetadataImport + Send>) -> Self {
        MetadataImportHandle { inner: import }
    }

    /// Borrows the underlying capability
    #[must_use]
    pub fn get(&self) -> &dyn MetadataImport {
        self.inner.as_ref()
    }
}

impl Deref for MetadataImportHandle {
    type Target = dyn MetadataImport + Send;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl fmt::Debug for MetadataImportHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataImportHandle").finish_non_exhaustive()
    }
}

impl Drop for MetadataImportHandle {
    fn drop(&mut self) {
        log::trace!("releasing metadata import capability");
    }
}

impl<T: MetadataImport + Send + 'static> From<Box<T>> for MetadataImportHandle {
    fn from(import: Box<T>) -> Self {
        MetadataImportHandle::new(import)
    }
}
