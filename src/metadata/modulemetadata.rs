//! Per-module metadata state used while rewriting a module's methods.
//!
//! Every call site the rewriter redirects to a wrapper method needs a `MemberRef` token for
//! the wrapper and a `TypeRef` token for the wrapper's declaring type, both valid in the
//! module being rewritten. Creating those tokens adds rows to the module's metadata tables,
//! so they are created at most once per module and memoized here under a stable key
//! (see [`crate::metadata::integration::MethodReference::method_cache_key`]).
//!
//! # Key Components
//!
//! - [`ModuleMetadata`] - Owns the metadata-import capability, the assembly name, the
//!   integrations and the two wrapper caches of one module
//! - [`SharedModuleMetadata`] - A [`ModuleMetadata`] behind one per-module lock, for rewriters
//!   that instrument methods of the same module from several threads
//!
//! # Thread Safety
//!
//! [`ModuleMetadata`] requires `&mut self` to populate its caches. The lookup, create and
//! insert sequence is only atomic when it runs under a single lock acquisition, which
//! [`SharedModuleMetadata::get_or_create_wrapper_member_ref`] and its type counterpart do.
//!
//! # Examples
//!
//! ```rust
//! use widestring::U16CStr;
//! use wrapmeta::{
//!     metadata::{import::MetadataImport, modulemetadata::ModuleMetadata},
//!     Result, Token,
//! };
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
//! let mut module = ModuleMetadata::new(Box::new(Empty).into(), "Sample.dll", Vec::new());
//!
//! assert_eq!(module.try_get_wrapper_member_ref("Wrap::Log"), None);
//! module.set_wrapper_member_ref("Wrap::Log", Token::new(0x0A000123));
//! assert_eq!(
//!     module.try_get_wrapper_member_ref("Wrap::Log"),
//!     Some(Token::new(0x0A000123))
//! );
//! assert_eq!(module.try_get_wrapper_parent_type_ref("Wrap::Log"), None);
//! ```

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};

use crate::{
    metadata::{
        config::{CacheConfig, OverwritePolicy},
        import::{MetadataImport, MetadataImportHandle},
        integration::Integration,
        token::Token,
    },
    Result,
};

/// String keyed token memo, one per wrapper namespace.
struct TokenCache {
    label: &'static str,
    entries: HashMap<String, Token>,
}

impl TokenCache {
    fn new(label: &'static str, capacity: usize) -> Self {
        TokenCache {
            label,
            entries: HashMap::with_capacity(capacity),
        }
    }

    fn get(&self, key: &str) -> Option<Token> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, token: Token, policy: OverwritePolicy) -> Option<Token> {
        let previous = self.entries.insert(key.to_string(), token);

        if let Some(previous) = previous {
            if previous != token && policy == OverwritePolicy::Warn {
                log::warn!(
                    "{} cache entry '{}' overwritten: {} -> {}",
                    self.label,
                    key,
                    previous,
                    token
                );
            }
        } else {
            log::trace!("{} cache entry '{}' set to {}", self.label, key, token);
        }

        previous
    }

    fn get_or_create<F>(
        &mut self,
        key: &str,
        import: &dyn MetadataImport,
        policy: OverwritePolicy,
        create: F,
    ) -> Result<Token>
    where
        F: FnOnce(&dyn MetadataImport) -> Result<Token>,
    {
        if let Some(token) = self.get(key) {
            return Ok(token);
        }

        let token = create(import)?;
        self.set(key, token, policy);
        Ok(token)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Metadata state of one loaded module.
///
/// Created when the module is first seen and its integrations are resolved, dropped when the
/// module unloads. Dropping the store releases its metadata-import capability.
///
/// The assembly name, the integrations and the import capability are fixed at construction.
/// Only the two wrapper caches change afterwards. They are independent: the same key can map
/// to one token in the member reference cache and to another in the parent type cache.
pub struct ModuleMetadata {
    metadata_import: MetadataImportHandle,
    assembly_name: String,
    integrations: Vec<Integration>,
    member_refs: TokenCache,
    type_refs: TokenCache,
    config: CacheConfig,
}

impl ModuleMetadata {
    /// Create the store of a module with the default [`CacheConfig`].
    ///
    /// ## Arguments
    /// * `metadata_import` - The module's metadata-import capability, owned by the store from now on
    /// * `assembly_name`   - Name of the assembly containing the module
    /// * `integrations`    - Integrations that apply to the module, in definition order
    pub fn new(
        metadata_import: MetadataImportHandle,
        assembly_name: impl Into<String>,
        integrations: Vec<Integration>,
    ) -> Self {
        Self::with_config(
            metadata_import,
            assembly_name,
            integrations,
            CacheConfig::default(),
        )
    }

    /// Create the store of a module with an explicit [`CacheConfig`]
    pub fn with_config(
        metadata_import: MetadataImportHandle,
        assembly_name: impl Into<String>,
        integrations: Vec<Integration>,
        config: CacheConfig,
    ) -> Self {
        let assembly_name = assembly_name.into();
        log::debug!(
            "tracking module metadata for '{}' with {} integration(s)",
            assembly_name,
            integrations.len()
        );

        ModuleMetadata {
            metadata_import,
            assembly_name,
            integrations,
            member_refs: TokenCache::new("wrapper member ref", config.member_ref_capacity),
            type_refs: TokenCache::new("wrapper parent type ref", config.type_ref_capacity),
            config,
        }
    }

    /// The module's metadata-import capability
    #[must_use]
    pub fn metadata_import(&self) -> &dyn MetadataImport {
        self.metadata_import.get()
    }

    /// Name of the assembly containing the module
    #[must_use]
    pub fn assembly_name(&self) -> &str {
        &self.assembly_name
    }

    /// Integrations that apply to the module, in definition order
    #[must_use]
    pub fn integrations(&self) -> &[Integration] {
        &self.integrations
    }

    /// Number of integrations that apply to the module
    #[must_use]
    pub fn integration_count(&self) -> usize {
        self.integrations.len()
    }

    /// The configuration the store was created with
    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Look up the wrapper member reference cached under `key`. Never creates an entry.
    #[must_use]
    pub fn try_get_wrapper_member_ref(&self, key: &str) -> Option<Token> {
        self.member_refs.get(key)
    }

    /// Look up the wrapper parent type reference cached under `key`. Never creates an entry.
    #[must_use]
    pub fn try_get_wrapper_parent_type_ref(&self, key: &str) -> Option<Token> {
        self.type_refs.get(key)
    }

    /// Cache `token` as the wrapper member reference for `key`.
    ///
    /// An existing entry is overwritten and returned. Callers must only re-register a key with
    /// an equivalent token; a different token is accepted and reported according to
    /// [`CacheConfig::divergent_overwrite`].
    pub fn set_wrapper_member_ref(&mut self, key: &str, token: Token) -> Option<Token> {
        self.member_refs
            .set(key, token, self.config.divergent_overwrite)
    }

    /// Cache `token` as the wrapper parent type reference for `key`.
    ///
    /// Same overwrite behaviour as [`ModuleMetadata::set_wrapper_member_ref`].
    pub fn set_wrapper_parent_type_ref(&mut self, key: &str, token: Token) -> Option<Token> {
        self.type_refs
            .set(key, token, self.config.divergent_overwrite)
    }

    /// Return the wrapper member reference for `key`, creating and caching it on a miss.
    ///
    /// `create` runs at most once and receives the module's metadata-import capability.
    ///
    /// # Errors
    /// Returns the error produced by `create`; the cache is left unchanged in that case.
    pub fn get_or_create_wrapper_member_ref<F>(&mut self, key: &str, create: F) -> Result<Token>
    where
        F: FnOnce(&dyn MetadataImport) -> Result<Token>,
    {
        self.member_refs.get_or_create(
            key,
            self.metadata_import.get(),
            self.config.divergent_overwrite,
            create,
        )
    }

    /// Return the wrapper parent type reference for `key`, creating and caching it on a miss.
    ///
    /// # Errors
    /// Returns the error produced by `create`; the cache is left unchanged in that case.
    pub fn get_or_create_wrapper_parent_type_ref<F>(
        &mut self,
        key: &str,
        create: F,
    ) -> Result<Token>
    where
        F: FnOnce(&dyn MetadataImport) -> Result<Token>,
    {
        self.type_refs.get_or_create(
            key,
            self.metadata_import.get(),
            self.config.divergent_overwrite,
            create,
        )
    }

    /// Number of cached wrapper member references
    #[must_use]
    pub fn wrapper_member_ref_count(&self) -> usize {
        self.member_refs.len()
    }

    /// Number of cached wrapper parent type references
    #[must_use]
    pub fn wrapper_parent_type_ref_count(&self) -> usize {
        self.type_refs.len()
    }

    /// Move the store behind a per-module lock
    #[must_use]
    pub fn into_shared(self) -> SharedModuleMetadata {
        SharedModuleMetadata::new(self)
    }
}

impl fmt::Debug for ModuleMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleMetadata")
            .field("assembly_name", &self.assembly_name)
            .field("integrations", &self.integrations.len())
            .field("member_refs", &self.member_refs.len())
            .field("type_refs", &self.type_refs.len())
            .finish_non_exhaustive()
    }
}

impl Drop for ModuleMetadata {
    fn drop(&mut self) {
        log::debug!(
            "releasing module metadata for '{}' ({} member refs, {} type refs cached)",
            self.assembly_name,
            self.member_refs.len(),
            self.type_refs.len()
        );
    }
}

/// A [`ModuleMetadata`] shared between rewriter threads.
///
/// All access, including access to the metadata-import capability, goes through one mutex
/// owned by this module's store. Clones share the same store; stores of different modules
/// never share a lock.
#[derive(Clone)]
pub struct SharedModuleMetadata {
    inner: Arc<Mutex<ModuleMetadata>>,
}

impl SharedModuleMetadata {
    /// Put `metadata` behind a new per-module lock
    #[must_use]
    pub fn new(metadata: ModuleMetadata) -> Self {
        SharedModuleMetadata {
            inner: Arc::new(Mutex::new(metadata)),
        }
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the lock was poisoned.
    pub fn with<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut ModuleMetadata) -> R,
    {
        with_lock!(self.inner, f)
    }

    /// Locked [`ModuleMetadata::try_get_wrapper_member_ref`]
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the lock was poisoned.
    pub fn try_get_wrapper_member_ref(&self, key: &str) -> Result<Option<Token>> {
        Ok(lock!(self.inner)?.try_get_wrapper_member_ref(key))
    }

    /// Locked [`ModuleMetadata::try_get_wrapper_parent_type_ref`]
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the lock was poisoned.
    pub fn try_get_wrapper_parent_type_ref(&self, key: &str) -> Result<Option<Token>> {
        Ok(lock!(self.inner)?.try_get_wrapper_parent_type_ref(key))
    }

    /// Locked [`ModuleMetadata::set_wrapper_member_ref`]
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the lock was poisoned.
    pub fn set_wrapper_member_ref(&self, key: &str, token: Token) -> Result<Option<Token>> {
        Ok(lock!(self.inner)?.set_wrapper_member_ref(key, token))
    }

    /// Locked [`ModuleMetadata::set_wrapper_parent_type_ref`]
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the lock was poisoned.
    pub fn set_wrapper_parent_type_ref(&self, key: &str, token: Token) -> Result<Option<Token>> {
        Ok(lock!(self.inner)?.set_wrapper_parent_type_ref(key, token))
    }

    /// Lookup, create and insert of a wrapper member reference under one lock acquisition.
    ///
    /// Concurrent callers asking for the same key run `create` once between them.
    ///
    /// `create` runs while the per-module lock is held and must not call back into this
    /// store or any of its clones; the lock is not reentrant and such a call deadlocks.
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the lock was poisoned, or the error of `create`.
    pub fn get_or_create_wrapper_member_ref<F>(&self, key: &str, create: F) -> Result<Token>
    where
        F: FnOnce(&dyn MetadataImport) -> Result<Token>,
    {
        lock!(self.inner)?.get_or_create_wrapper_member_ref(key, create)
    }

    /// Lookup, create and insert of a wrapper parent type reference under one lock acquisition.
    ///
    /// Same locking rules as [`SharedModuleMetadata::get_or_create_wrapper_member_ref`]: `create`
    /// must not re-enter this store.
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the lock was poisoned, or the error of `create`.
    pub fn get_or_create_wrapper_parent_type_ref<F>(&self, key: &str, create: F) -> Result<Token>
    where
        F: FnOnce(&dyn MetadataImport) -> Result<Token>,
    {
        lock!(self.inner)?.get_or_create_wrapper_parent_type_ref(key, create)
    }

    /// Name of the assembly containing the module
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the lock was poisoned.
    pub fn assembly_name(&self) -> Result<String> {
        Ok(lock!(self.inner)?.assembly_name().to_string())
    }
}

impl fmt::Debug for SharedModuleMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Ok(metadata) => f
                .debug_tuple("SharedModuleMetadata")
                .field(&*metadata)
                .finish(),
            Err(_) => f.write_str("SharedModuleMetadata(<locked>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use widestring::U16CStr;

    use super::*;
    use crate::{
        metadata::{
            identity::{AssemblyReference, AssemblyVersion},
            integration::{MethodReference, MethodReplacement},
        },
        Error,
    };

    struct NullImport;

    impl MetadataImport for NullImport {
        fn find_type_ref(&self, _scope: Token, _name: &U16CStr) -> Result<Option<Token>> {
            Ok(None)
        }

        fn find_member_ref(
            &self,
            _parent: Token,
            _name: &U16CStr,
            _signature: &[u8],
        ) -> Result<Option<Token>> {
            Ok(None)
        }

        fn find_assembly_ref(&self, _name: &U16CStr) -> Result<Option<Token>> {
            Ok(None)
        }
    }

    fn module(name: &str, integrations: Vec<Integration>) -> ModuleMetadata {
        ModuleMetadata::new(Box::new(NullImport).into(), name, integrations)
    }

    fn integration(name: &str) -> Integration {
        let assembly = AssemblyReference::new("Wrap.Managed", AssemblyVersion::new(1, 0, 0, 0));
        let target = MethodReference::new(assembly.clone(), "Target", "Run", Vec::new());
        let wrapper = MethodReference::new(assembly, "Wrapper", "Run", Vec::new());
        Integration::new(name, vec![MethodReplacement::new(target, wrapper)])
    }

    #[test]
    fn test_sample_scenario() {
        let mut metadata = module("Sample.dll", Vec::new());

        assert_eq!(metadata.try_get_wrapper_member_ref("Wrap::Log"), None);
        assert_eq!(
            metadata.set_wrapper_member_ref("Wrap::Log", Token(0x0A000123)),
            None
        );
        assert_eq!(
            metadata.try_get_wrapper_member_ref("Wrap::Log"),
            Some(Token(0x0A000123))
        );
        assert_eq!(metadata.try_get_wrapper_parent_type_ref("Wrap::Log"), None);
    }

    #[test]
    fn test_type_ref_miss_then_hit() {
        let mut metadata = module("Sample.dll", Vec::new());

        assert_eq!(metadata.try_get_wrapper_parent_type_ref("Wrap"), None);
        metadata.set_wrapper_parent_type_ref("Wrap", Token(0x01000007));
        assert_eq!(
            metadata.try_get_wrapper_parent_type_ref("Wrap"),
            Some(Token(0x01000007))
        );
        assert_eq!(metadata.try_get_wrapper_member_ref("Wrap"), None);
    }

    #[test]
    fn test_same_key_in_both_namespaces() {
        let mut metadata = module("Sample.dll", Vec::new());

        metadata.set_wrapper_member_ref("X", Token(0x0A000001));
        metadata.set_wrapper_parent_type_ref("X", Token(0x01000001));

        assert_eq!(metadata.try_get_wrapper_member_ref("X"), Some(Token(0x0A000001)));
        assert_eq!(
            metadata.try_get_wrapper_parent_type_ref("X"),
            Some(Token(0x01000001))
        );
        assert_eq!(metadata.wrapper_member_ref_count(), 1);
        assert_eq!(metadata.wrapper_parent_type_ref_count(), 1);
    }

    #[test]
    fn test_reregistration() {
        let mut metadata = module("Sample.dll", Vec::new());

        metadata.set_wrapper_member_ref("K", Token(0x0A000001));
        assert_eq!(
            metadata.set_wrapper_member_ref("K", Token(0x0A000001)),
            Some(Token(0x0A000001))
        );
        assert_eq!(metadata.try_get_wrapper_member_ref("K"), Some(Token(0x0A000001)));

        assert_eq!(
            metadata.set_wrapper_member_ref("K", Token(0x0A000002)),
            Some(Token(0x0A000001))
        );
        assert_eq!(metadata.try_get_wrapper_member_ref("K"), Some(Token(0x0A000002)));
        assert_eq!(metadata.wrapper_member_ref_count(), 1);
    }

    #[test]
    fn test_silent_overwrite_policy() {
        let config = CacheConfig::default().with_divergent_overwrite(OverwritePolicy::Allow);
        let mut metadata =
            ModuleMetadata::with_config(Box::new(NullImport).into(), "A", Vec::new(), config);

        metadata.set_wrapper_parent_type_ref("T", Token(0x01000001));
        metadata.set_wrapper_parent_type_ref("T", Token(0x01000002));
        assert_eq!(
            metadata.try_get_wrapper_parent_type_ref("T"),
            Some(Token(0x01000002))
        );
        assert_eq!(metadata.config().divergent_overwrite, OverwritePolicy::Allow);
    }

    #[test]
    fn test_construction_preserves_identity() {
        let metadata = module(
            "MyAssembly",
            vec![integration("First"), integration("Second"), integration("Third")],
        );

        assert_eq!(metadata.assembly_name(), "MyAssembly");
        let names: Vec<&str> = metadata
            .integrations()
            .iter()
            .map(|integration| integration.name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
        assert_eq!(metadata.integration_count(), 3);
        assert_eq!(module("Empty.dll", Vec::new()).integration_count(), 0);
        assert_eq!(metadata.wrapper_member_ref_count(), 0);
        assert_eq!(metadata.wrapper_parent_type_ref_count(), 0);
    }

    #[test]
    fn test_independent_instances() {
        let mut a = module("A.dll", Vec::new());
        let b = module("B.dll", Vec::new());

        a.set_wrapper_member_ref("Wrap::Log", Token(0x0A000001));
        assert_eq!(b.try_get_wrapper_member_ref("Wrap::Log"), None);
    }

    #[test]
    fn test_get_or_create_caches_once() {
        let mut metadata = module("Sample.dll", Vec::new());
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let token = metadata
                .get_or_create_wrapper_member_ref("Wrap::Log", |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(Token(0x0A000010))
                })
                .unwrap();
            assert_eq!(token, Token(0x0A000010));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_get_or_create_failure_leaves_cache() {
        let mut metadata = module("Sample.dll", Vec::new());

        let result = metadata.get_or_create_wrapper_parent_type_ref("Wrap", |import| {
            match import.find_assembly_ref(widestring::u16cstr!("Wrap.Managed"))? {
                Some(token) => Ok(token),
                None => Err(Error::TokenResolution {
                    key: "Wrap".to_string(),
                    message: "assembly not referenced".to_string(),
                }),
            }
        });

        assert!(matches!(result, Err(Error::TokenResolution { .. })));
        assert_eq!(metadata.try_get_wrapper_parent_type_ref("Wrap"), None);
        assert_eq!(metadata.wrapper_parent_type_ref_count(), 0);
    }

    #[test]
    fn test_shared_store() {
        let shared = module("Sample.dll", Vec::new()).into_shared();
        let clone = shared.clone();

        assert_eq!(shared.try_get_wrapper_member_ref("K").unwrap(), None);
        clone.set_wrapper_member_ref("K", Token(0x0A000005)).unwrap();
        assert_eq!(
            shared.try_get_wrapper_member_ref("K").unwrap(),
            Some(Token(0x0A000005))
        );

        clone
            .set_wrapper_parent_type_ref("K", Token(0x01000005))
            .unwrap();
        assert_eq!(
            shared.try_get_wrapper_parent_type_ref("K").unwrap(),
            Some(Token(0x01000005))
        );

        assert_eq!(shared.assembly_name().unwrap(), "Sample.dll");
        assert_eq!(
            shared
                .with(|metadata| metadata.wrapper_member_ref_count())
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_shared_poisoned_lock() {
        let shared = module("Sample.dll", Vec::new()).into_shared();
        let poisoner = shared.clone();

        let _ = std::thread::spawn(move || {
            let _ = poisoner.with(|metadata| {
                if metadata.assembly_name() == "Sample.dll" {
                    panic!("rewriter crashed");
                }
            });
        })
        .join();

        assert!(matches!(
            shared.try_get_wrapper_member_ref("K"),
            Err(Error::LockError)
        ));
    }

    thread_local! {
        static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    /// Keeps the records of the logging thread, so parallel tests do not see each other.
    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            RECORDS.with(|records| {
                records
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()));
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    fn capture_warnings<F: FnOnce()>(f: F) -> Vec<String> {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        RECORDS.with(|records| records.borrow_mut().clear());
        f();
        RECORDS.with(|records| {
            records
                .borrow()
                .iter()
                .filter(|(level, _)| *level == log::Level::Warn)
                .map(|(_, message)| message.clone())
                .collect()
        })
    }

    #[test]
    fn test_divergent_overwrite_warns() {
        let mut metadata = module("Sample.dll", Vec::new());
        metadata.set_wrapper_member_ref("Wrap::Log", Token(0x0A000001));

        let warnings = capture_warnings(|| {
            metadata.set_wrapper_member_ref("Wrap::Log", Token(0x0A000002));
        });

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Wrap::Log"));
        assert!(warnings[0].contains("0x0a000001"));
        assert!(warnings[0].contains("0x0a000002"));
    }

    #[test]
    fn test_identical_reregistration_is_quiet() {
        let mut metadata = module("Sample.dll", Vec::new());

        let warnings = capture_warnings(|| {
            metadata.set_wrapper_parent_type_ref("Wrap", Token(0x01000001));
            metadata.set_wrapper_parent_type_ref("Wrap", Token(0x01000001));
        });

        assert!(warnings.is_empty());
    }

    #[test]
    fn test_allow_policy_overwrites_silently() {
        let config = CacheConfig::default().with_divergent_overwrite(OverwritePolicy::Allow);
        let mut metadata =
            ModuleMetadata::with_config(Box::new(NullImport).into(), "A", Vec::new(), config);
        metadata.set_wrapper_member_ref("Wrap::Log", Token(0x0A000001));

        let warnings = capture_warnings(|| {
            metadata.set_wrapper_member_ref("Wrap::Log", Token(0x0A000002));
        });

        assert!(warnings.is_empty());
        assert_eq!(
            metadata.try_get_wrapper_member_ref("Wrap::Log"),
            Some(Token(0x0A000002))
        );
    }
}
