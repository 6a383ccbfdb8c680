use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Cache misses are never errors: lookups return [`Option`] and inserts always succeed. The
/// variants below cover the remaining failure surface of a module's metadata store, which is
/// the per-module lock, the metadata-import collaborator and the parsing of assembly identities
/// found in integration definitions.
///
/// # Error Categories
///
/// ## Parsing Errors
/// - [`Error::Malformed`] - Invalid assembly display name or version string
///
/// ## Collaborator Errors
/// - [`Error::MetadataImport`] - The metadata-import capability reported a failure
/// - [`Error::TokenResolution`] - A wrapper token could not be resolved or created
///
/// ## Synchronization Errors
/// - [`Error::LockError`] - The per-module lock was poisoned
///
/// # Examples
///
/// ```rust
/// use wrapmeta::{Error, metadata::identity::AssemblyVersion};
///
/// match AssemblyVersion::parse("1.x") {
///     Ok(version) => println!("Parsed {}", version),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed version: {} ({}:{})", message, file, line);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be parsed.
    ///
    /// Raised for assembly display names and version strings that do not follow the
    /// `Name[, Version=a.b.c.d][, Culture=..][, PublicKeyToken=..]` format. The error includes
    /// the source location where the malformation was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The metadata-import capability reported a failure.
    ///
    /// Implementations of [`crate::metadata::import::MetadataImport`] map their native
    /// failure codes into this variant.
    #[error("Metadata import failed - {0}")]
    MetadataImport(String),

    /// A wrapper token could not be resolved or created for a cache key.
    ///
    /// Returned by the callbacks handed to the get-or-create operations of
    /// [`crate::metadata::modulemetadata::ModuleMetadata`]. Nothing is cached when this
    /// error is produced.
    #[error("Failed to resolve wrapper token for '{key}' - {message}")]
    TokenResolution {
        /// The cache key that was being resolved
        key: String,
        /// Description of the failure
        message: String,
    },

    /// Failed to lock target.
    ///
    /// This error occurs when the per-module lock guarding a shared store was poisoned by a
    /// thread that panicked while holding it.
    #[error("Failed to lock target")]
    LockError,
}
