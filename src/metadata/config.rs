//! Configuration of a module's wrapper caches.

use strum::{Display, EnumString};

/// What a store does when a cache key is re-registered with a different token.
///
/// Re-registration always succeeds and the last write wins; the policy only controls the
/// diagnostic. Parsed case-insensitively, e.g. from an environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OverwritePolicy {
    /// Overwrite silently
    Allow,
    /// Overwrite and emit a `warn` level log record naming the key and both tokens
    #[default]
    Warn,
}

/// Configuration applied to a [`crate::metadata::modulemetadata::ModuleMetadata`] at
/// construction.
///
/// # Examples
///
/// ```rust
/// use wrapmeta::metadata::config::{CacheConfig, OverwritePolicy};
///
/// let config = CacheConfig::default()
///     .with_divergent_overwrite(OverwritePolicy::Allow)
///     .with_capacity(64, 16);
/// assert_eq!(config.member_ref_capacity, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Diagnostic emitted when a key is overwritten with a different token
    pub divergent_overwrite: OverwritePolicy,

    /// Initial capacity of the wrapper member reference cache
    pub member_ref_capacity: usize,

    /// Initial capacity of the wrapper parent type cache
    pub type_ref_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            divergent_overwrite: OverwritePolicy::Warn,
            member_ref_capacity: 0,
            type_ref_capacity: 0,
        }
    }
}

impl CacheConfig {
    /// Set the divergent overwrite policy
    #[must_use]
    pub fn with_divergent_overwrite(mut self, policy: OverwritePolicy) -> Self {
        self.divergent_overwrite = policy;
        self
    }

    /// Set the initial capacities of the member reference and parent type caches
    #[must_use]
    pub fn with_capacity(mut self, member_refs: usize, type_refs: usize) -> Self {
        self.member_ref_capacity = member_refs;
        self.type_ref_capacity = type_refs;
        self
    }
}
