//! Integration definitions applied to a module.
//!
//! An [`Integration`] groups the [`MethodReplacement`]s of one instrumented library. Each
//! replacement names a target method whose call sites get rewritten and the wrapper method
//! that is invoked instead. The definitions are produced by the configuration loader and are
//! only read here; deciding which replacements apply to a given call site is done elsewhere.
//!
//! [`MethodReference`] also derives the keys under which the wrapper tokens of a module are
//! memoized, see [`MethodReference::method_cache_key`] and [`MethodReference::type_cache_key`].

use crate::metadata::identity::{AssemblyReference, AssemblyVersion};

/// A method identified by assembly, declaring type, name and signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodReference {
    /// Assembly declaring the method
    pub assembly: AssemblyReference,
    /// Fully qualified name of the declaring type
    pub type_name: String,
    /// Method name
    pub method_name: String,
    /// Method signature blob, empty when any signature matches
    pub method_signature: Vec<u8>,
    /// Lowest assembly version the reference applies to
    pub min_version: AssemblyVersion,
    /// Highest assembly version the reference applies to
    pub max_version: AssemblyVersion,
}

impl MethodReference {
    /// Create a reference that applies to every version of `assembly`
    pub fn new(
        assembly: AssemblyReference,
        type_name: impl Into<String>,
        method_name: impl Into<String>,
        method_signature: Vec<u8>,
    ) -> Self {
        MethodReference {
            assembly,
            type_name: type_name.into(),
            method_name: method_name.into(),
            method_signature,
            min_version: AssemblyVersion::MIN,
            max_version: AssemblyVersion::MAX,
        }
    }

    /// Restrict the reference to the inclusive version range `min..=max`
    #[must_use]
    pub fn with_versions(mut self, min: AssemblyVersion, max: AssemblyVersion) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Key of the declaring type in a module's wrapper parent type cache.
    ///
    /// Format: `[Assembly]Namespace.Type_vMin_a.b.c.d_vMax_a.b.c.d`
    #[must_use]
    pub fn type_cache_key(&self) -> String {
        format!(
            "[{}]{}_vMin_{}_vMax_{}",
            self.assembly.name, self.type_name, self.min_version, self.max_version
        )
    }

    /// Key of the method in a module's wrapper member reference cache.
    ///
    /// Format: `[Assembly]Namespace.Type.Method_vMin_a.b.c.d_vMax_a.b.c.d`
    #[must_use]
    pub fn method_cache_key(&self) -> String {
        format!(
            "[{}]{}.{}_vMin_{}_vMax_{}",
            self.assembly.name,
            self.type_name,
            self.method_name,
            self.min_version,
            self.max_version
        )
    }
}

/// Replace calls to `target` with calls to `wrapper`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodReplacement {
    /// Restricts the replacement to call sites inside this method, `None` for any caller
    pub caller: Option<MethodReference>,
    /// Method whose call sites are rewritten
    pub target: MethodReference,
    /// Method invoked in place of `target`
    pub wrapper: MethodReference,
}

impl MethodReplacement {
    /// Create a replacement that applies to every caller
    #[must_use]
    pub fn new(target: MethodReference, wrapper: MethodReference) -> Self {
        MethodReplacement {
            caller: None,
            target,
            wrapper,
        }
    }

    /// Restrict the replacement to call sites inside `caller`
    #[must_use]
    pub fn with_caller(mut self, caller: MethodReference) -> Self {
        self.caller = Some(caller);
        self
    }
}

/// The method replacements of one instrumented library, in definition order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integration {
    /// Name of the integration, e.g. `AdoNet`
    pub name: String,
    /// Replacements in the order they were defined
    pub replacements: Vec<MethodReplacement>,
}

impl Integration {
    /// Create an integration from its replacements
    pub fn new(name: impl Into<String>, replacements: Vec<MethodReplacement>) -> Self {
        Integration {
            name: name.into(),
            replacements,
        }
    }

    /// Iterates over the wrapper methods of this integration
    pub fn wrappers(&self) -> impl Iterator<Item = &MethodReference> {
        self.replacements.iter().map(|replacement| &replacement.wrapper)
    }
}
