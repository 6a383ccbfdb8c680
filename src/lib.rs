// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # wrapmeta
//!
//! Per-module metadata state for CLR bytecode instrumentation.
//!
//! A profiler that redirects call sites to wrapper methods has to reference each wrapper, and
//! the wrapper's declaring type, from inside the module it rewrites. Creating those references
//! adds rows to the module's metadata tables, so `wrapmeta` memoizes the resulting tokens per
//! module and keeps them next to the module's metadata-import capability, its assembly name and
//! the integrations that apply to it.
//!
//! ## Quick Start
//!
//! ```rust
//! use widestring::U16CStr;
//! use wrapmeta::prelude::*;
//!
//! struct Empty;
//!
//! impl MetadataImport for Empty {
//!     fn find_type_ref(&self, _scope: Token, _name: &U16CStr) -> Result<Option<Token>> {
//!         Ok(None)
//!     }
//!     fn find_member_ref(&self, _p: Token, _n: &U16CStr, _s: &[u8]) -> Result<Option<Token>> {
//!         Ok(None)
//!     }
//!     fn find_assembly_ref(&self, _name: &U16CStr) -> Result<Option<Token>> {
//!         Ok(None)
//!     }
//! }
//!
//! let module = ModuleMetadata::new(Box::new(Empty).into(), "Sample.dll", Vec::new());
//! let shared = module.into_shared();
//!
//! let token = shared.get_or_create_wrapper_member_ref("Wrap::Log", |_import| {
//!     // Emit the MemberRef row here
//!     Ok(Token::new(0x0A000123))
//! })?;
//! assert_eq!(token, Token::new(0x0A000123));
//! # Ok::<(), wrapmeta::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`metadata`] - Tokens, the metadata-import capability, integrations and the per-module store
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: construction and release of a
//! module's store at `debug`, cache population at `trace`, and divergent cache overwrites at
//! `warn` (see [`metadata::config::OverwritePolicy`]). No logger is installed by the library.

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use wrapmeta::prelude::*;
///
/// let token = Token::new(0x0A000001);
/// assert_eq!(token.kind(), Some(TableId::MemberRef));
/// ```
pub mod prelude;

/// Metadata tokens, the metadata-import capability, integration definitions and the
/// per-module wrapper caches.
pub mod metadata;

/// `wrapmeta` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `wrapmeta` Error type
///
/// The main error type for all fallible operations in this crate.
pub use error::Error;

/// Metadata token, see [`metadata::token::Token`].
pub use metadata::token::Token;

/// Per-module store, see [`metadata::modulemetadata`].
pub use metadata::modulemetadata::{ModuleMetadata, SharedModuleMetadata};
