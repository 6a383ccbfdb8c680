//! Assembly identities referenced by integration definitions.
//!
//! Integration definitions name the assembly that declares each target and wrapper method,
//! either as a simple name or as a full display name. The types here parse and format those
//! identities and provide the version strings used inside wrapper cache keys.
//!
//! # Examples
//!
//! ```rust
//! use wrapmeta::metadata::identity::{AssemblyReference, AssemblyVersion};
//!
//! let reference = AssemblyReference::parse(
//!     "Wrap.Managed, Version=1.19.0.0, Culture=neutral, PublicKeyToken=def86d061d0d2eeb",
//! )?;
//! assert_eq!(reference.name, "Wrap.Managed");
//! assert_eq!(reference.version, AssemblyVersion::new(1, 19, 0, 0));
//! assert!(reference.culture.is_none());
//! # Ok::<(), wrapmeta::Error>(())
//! ```

use std::fmt::{self, Write};

use crate::Result;

/// Four-part assembly version, `major.minor.build.revision`.
///
/// Ordering is component-wise from `major` to `revision`, which is what version ranges in
/// integration definitions rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AssemblyVersion {
    /// Major version component
    pub major: u16,
    /// Minor version component
    pub minor: u16,
    /// Build version component
    pub build: u16,
    /// Revision version component
    pub revision: u16,
}

impl AssemblyVersion {
    /// The lowest possible version, `0.0.0.0`
    pub const MIN: AssemblyVersion = AssemblyVersion::new(0, 0, 0, 0);

    /// The highest possible version, `65535.65535.65535.65535`
    pub const MAX: AssemblyVersion = AssemblyVersion::new(u16::MAX, u16::MAX, u16::MAX, u16::MAX);

    /// Create a version from its four components
    #[must_use]
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        AssemblyVersion {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Parse a version string of one to four dot-separated components.
    ///
    /// Missing trailing components default to zero, so `"2.0"` parses as `2.0.0.0`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the string is empty, has more than four
    /// components, or a component is not a 16-bit unsigned integer.
    pub fn parse(version_str: &str) -> Result<Self> {
        let parts: Vec<&str> = version_str.trim().split('.').collect();

        if parts.len() > 4 {
            return Err(malformed_error!("Invalid version format: {}", version_str));
        }

        let mut components = [0u16; 4];
        for (i, part) in parts.iter().enumerate() {
            components[i] = part
                .parse::<u16>()
                .map_err(|_| malformed_error!("Invalid version component: '{}'", part))?;
        }

        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// Reference to an assembly by display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AssemblyReference {
    /// Simple assembly name
    pub name: String,
    /// Assembly version, `0.0.0.0` when not specified
    pub version: AssemblyVersion,
    /// Culture, `None` for culture-neutral assemblies
    pub culture: Option<String>,
    /// Public key token in display byte order, `None` when the assembly is not strong named
    pub public_key_token: Option<[u8; 8]>,
}

impl AssemblyReference {
    /// Create a culture-neutral, non strong-named reference
    pub fn new(name: impl Into<String>, version: AssemblyVersion) -> Self {
        AssemblyReference {
            name: name.into(),
            version,
            culture: None,
            public_key_token: None,
        }
    }

    /// Parse an assembly display name.
    ///
    /// # Format
    ///
    /// ```text
    /// AssemblyName[, Version=Major.Minor.Build.Revision][, Culture=culture][, PublicKeyToken=token]
    /// ```
    ///
    /// Unknown components are ignored. `Culture=neutral` and `PublicKeyToken=null` map to `None`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the name is empty, the version is invalid or the
    /// public key token is not 16 hex characters.
    pub fn parse(display_name: &str) -> Result<Self> {
        let mut parts = display_name.split(',').map(str::trim);

        let name = parts.next().unwrap_or_default();
        if name.is_empty() {
            return Err(malformed_error!("Assembly name cannot be empty"));
        }

        let mut reference = AssemblyReference::new(name, AssemblyVersion::MIN);
        for part in parts {
            if let Some(value) = part.strip_prefix("Version=") {
                reference.version = AssemblyVersion::parse(value)?;
            } else if let Some(value) = part.strip_prefix("Culture=") {
                if value != "neutral" && !value.is_empty() {
                    reference.culture = Some(value.to_string());
                }
            } else if let Some(value) = part.strip_prefix("PublicKeyToken=") {
                if value != "null" && !value.is_empty() {
                    reference.public_key_token = Some(parse_public_key_token(value)?);
                }
            }
        }

        Ok(reference)
    }

    /// Format this reference as a display name
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut result = String::with_capacity(self.name.len() + 80);

        result.push_str(&self.name);
        let _ = write!(result, ", Version={}", self.version);
        let _ = write!(
            result,
            ", Culture={}",
            self.culture.as_deref().unwrap_or("neutral")
        );

        result.push_str(", PublicKeyToken=");
        match &self.public_key_token {
            Some(token) => result.push_str(&hex::encode(token)),
            None => result.push_str("null"),
        }

        result
    }
}

impl fmt::Display for AssemblyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

fn parse_public_key_token(value: &str) -> Result<[u8; 8]> {
    let token_bytes = hex::decode(value)
        .map_err(|e| malformed_error!("Invalid hex in PublicKeyToken '{}': {}", value, e))?;

    if token_bytes.len() != 8 {
        return Err(malformed_error!(
            "PublicKeyToken must be exactly 8 bytes (16 hex characters), got {} bytes from '{}'",
            token_bytes.len(),
            value
        ));
    }

    let mut token = [0u8; 8];
    token.copy_from_slice(&token_bytes);
    Ok(token)
}
