//! Named validators for self-referential and mutually recursive shapes.
//!
//! A shape that contains itself cannot build its own validator before that
//! validator exists. The registry breaks the cycle in two phases: during
//! construction, [`ValidatorRegistry::index`] stores finished validators
//! under a key and [`ValidatorRegistry::provider`] hands out deferred
//! references to keys that may not be stored yet; during evaluation, each
//! [`Provider`] looks its key up and re-enters the stored validator.

use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::result::ValidationResult;
use crate::validator::{Validator, ValueValidator};

/// Type alias for the validator storage map.
type ValidatorMap = IndexMap<String, Validator>;

/// Validators shared between a registry and its providers.
///
/// Entries are indexed into `building` during construction. `finish` moves
/// them into `frozen`, which providers then read without a lock.
#[derive(Default)]
struct Storage {
    building: RwLock<ValidatorMap>,
    frozen: OnceLock<ValidatorMap>,
}

impl Storage {
    fn lookup(&self, key: &str) -> Option<Validator> {
        match self.frozen.get() {
            Some(validators) => validators.get(key).cloned(),
            None => self.building.read().get(key).cloned(),
        }
    }

    fn freeze(&self) {
        let validators = std::mem::take(&mut *self.building.write());
        // Only `finish` freezes, and it consumes the registry.
        let _ = self.frozen.set(validators);
    }
}

/// Construction-time storage of named validators.
///
/// Each validator graph gets its own registry. The registry is consumed by
/// [`finish`](Self::finish), so nothing can be indexed once the graph has
/// been handed out for evaluation.
///
/// # Example
///
/// ```rust
/// use runtype::{num, optional, props, Property, ValidatorRegistry};
/// use serde_json::json;
///
/// let registry = ValidatorRegistry::new();
/// let node = registry.index(
///     "Node",
///     props([
///         Property::field("id", num()),
///         Property::field("child", optional(registry.provider("Node"))),
///     ]),
/// );
/// let node = registry.finish(node).unwrap();
///
/// assert!(node.is_valid(&json!({"id": 1, "child": {"id": 2}})));
/// ```
pub struct ValidatorRegistry {
    storage: Arc<Storage>,
    referenced: Mutex<Vec<String>>,
    duplicates: Mutex<Vec<String>>,
}

impl ValidatorRegistry {
    /// Creates an empty registry for one validator graph.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(Storage::default()),
            referenced: Mutex::new(Vec::new()),
            duplicates: Mutex::new(Vec::new()),
        }
    }

    /// Registers `validator` under `key` and returns it unchanged, so it can
    /// be embedded where it is defined.
    ///
    /// The map is append-only: if `key` is already registered the first
    /// validator is kept and [`finish`](Self::finish) reports the duplicate.
    pub fn index(&self, key: impl Into<String>, validator: Validator) -> Validator {
        let key = key.into();
        let mut validators = self.storage.building.write();

        if validators.contains_key(&key) {
            warn!(key = %key, "validator key registered twice");
            self.duplicates.lock().push(key);
        } else {
            trace!(key = %key, "indexed validator");
            validators.insert(key, validator.clone());
        }
        validator
    }

    /// Returns a deferred reference to the validator registered under `key`.
    ///
    /// The key does not need to be registered yet; it must be by the time
    /// the provider is resolved.
    pub fn provider(&self, key: impl Into<String>) -> Provider {
        let key = key.into();
        trace!(key = %key, "created provider");
        self.referenced.lock().push(key.clone());
        Provider {
            key,
            storage: Arc::downgrade(&self.storage),
        }
    }

    /// Returns the validator registered under `key`, if any.
    pub fn get(&self, key: &str) -> Option<Validator> {
        self.storage.lookup(key)
    }

    /// Returns true if `key` has been registered.
    pub fn contains(&self, key: &str) -> bool {
        self.storage.building.read().contains_key(key)
    }

    /// Returns the registered keys in registration order.
    pub fn keys(&self) -> Vec<String> {
        self.storage.building.read().keys().cloned().collect()
    }

    /// Returns the number of registered validators.
    pub fn len(&self) -> usize {
        self.storage.building.read().len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.storage.building.read().is_empty()
    }

    /// Returns every key a provider refers to that is not registered,
    /// sorted and deduplicated.
    pub fn unresolved(&self) -> Vec<String> {
        let validators = self.storage.building.read();
        let mut unresolved: Vec<String> = self
            .referenced
            .lock()
            .iter()
            .filter(|key| !validators.contains_key(key.as_str()))
            .cloned()
            .collect();

        unresolved.sort();
        unresolved.dedup();
        unresolved
    }

    /// Ends construction and returns `root` ready for evaluation.
    ///
    /// The returned validator keeps the registry storage alive for as long
    /// as it (or a clone) exists. From here on providers resolve against a
    /// frozen map without locking.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateKey` if a key was indexed twice, and
    /// `RegistryError::UnresolvedKeys` if any provider refers to a key that
    /// was never indexed.
    pub fn finish(self, root: Validator) -> Result<Validator, RegistryError> {
        if let Some(key) = self.duplicates.lock().first() {
            return Err(RegistryError::DuplicateKey(key.clone()));
        }

        let unresolved = self.unresolved();
        if !unresolved.is_empty() {
            return Err(RegistryError::UnresolvedKeys(unresolved));
        }

        debug!(
            keys = self.len(),
            providers = self.referenced.lock().len(),
            "validator registry finished"
        );
        self.storage.freeze();
        Ok(Validator::new(RegistryRoot {
            _storage: self.storage,
            root,
        }))
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("keys", &self.keys())
            .finish_non_exhaustive()
    }
}

/// Builds one validator graph with its own fresh registry.
///
/// # Errors
///
/// Returns the error of [`ValidatorRegistry::finish`].
///
/// # Example
///
/// ```rust
/// use runtype::{array, create_validator, or, props, str, value, Property, ValidatorOrProvider};
/// use serde_json::json;
///
/// let tree = create_validator(|registry| {
///     registry.index(
///         "Tree",
///         props([
///             Property::field("name", str()),
///             Property::field(
///                 "parent",
///                 or([
///                     ValidatorOrProvider::from(value(json!(null))),
///                     registry.provider("Tree").into(),
///                 ]),
///             ),
///             Property::field("children", array(registry.provider("Tree"))),
///         ]),
///     )
/// })
/// .unwrap();
///
/// assert!(tree.is_valid(&json!({"name": "root", "parent": null, "children": []})));
/// ```
pub fn create_validator<F>(factory: F) -> Result<Validator, RegistryError>
where
    F: FnOnce(&ValidatorRegistry) -> Validator,
{
    let registry = ValidatorRegistry::new();
    let root = factory(&registry);
    registry.finish(root)
}

/// Owns the registry storage on behalf of a finished graph.
///
/// Providers only hold weak handles to the storage, so the graph's
/// self-references do not form an `Arc` cycle.
struct RegistryRoot {
    _storage: Arc<Storage>,
    root: Validator,
}

impl ValueValidator for RegistryRoot {
    fn validate_value(&self, value: Option<&Value>) -> ValidationResult {
        self.root.validate_optional(value)
    }
}

/// A deferred reference to a registered validator.
#[derive(Clone)]
pub struct Provider {
    key: String,
    storage: Weak<Storage>,
}

impl Provider {
    /// Returns the key this provider resolves.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Looks up the referenced validator.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnresolvedKey` if the key is not registered,
    /// and `RegistryError::RegistryDropped` if neither the registry nor a
    /// finished graph built from it is alive.
    pub fn resolve(&self) -> Result<Validator, RegistryError> {
        let storage = self
            .storage
            .upgrade()
            .ok_or_else(|| RegistryError::RegistryDropped(self.key.clone()))?;
        storage
            .lookup(&self.key)
            .ok_or_else(|| RegistryError::UnresolvedKey(self.key.clone()))
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider").field("key", &self.key).finish()
    }
}

/// Errors that can occur while building a validator graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A provider was resolved before its key was indexed.
    #[error("unable to find validator for key '{0}'")]
    UnresolvedKey(String),

    /// Providers refer to keys that were never indexed.
    #[error("no validator registered for keys {0:?}")]
    UnresolvedKeys(Vec<String>),

    /// The same key was indexed more than once.
    #[error("validator key '{0}' already registered")]
    DuplicateKey(String),

    /// A provider outlived the registry it was created from.
    #[error("registry for key '{0}' was dropped before the provider was resolved")]
    RegistryDropped(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::TypeName;
    use crate::validator::{num, optional, props, str, Property};
    use serde_json::json;

    #[test]
    fn test_index_is_pass_through() {
        let registry = ValidatorRegistry::new();
        let indexed = registry.index("Name", str());
        assert!(indexed.is_valid(&json!("a")));
        assert!(registry.contains("Name"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_provider_resolves_forward_reference() {
        let registry = ValidatorRegistry::new();
        let provider = registry.provider("Later");
        assert_eq!(
            provider.resolve().unwrap_err(),
            RegistryError::UnresolvedKey("Later".to_string())
        );

        registry.index("Later", num());
        assert!(provider.resolve().unwrap().is_valid(&json!(1)));
    }

    #[test]
    fn test_keys_in_registration_order() {
        let registry = ValidatorRegistry::new();
        registry.index("b", num());
        registry.index("a", str());
        registry.index("c", num());
        assert_eq!(registry.keys(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_unresolved_sorted_and_deduplicated() {
        let registry = ValidatorRegistry::new();
        registry.provider("Z");
        registry.provider("A");
        registry.provider("Z");
        registry.provider("Known");
        registry.index("Known", num());
        assert_eq!(registry.unresolved(), vec!["A", "Z"]);
    }

    #[test]
    fn test_finish_rejects_unresolved_keys() {
        let result = create_validator(|registry| {
            props([Property::field("next", registry.provider("Missing"))])
        });
        assert_eq!(
            result.unwrap_err(),
            RegistryError::UnresolvedKeys(vec!["Missing".to_string()])
        );
    }

    #[test]
    fn test_finish_rejects_duplicate_keys() {
        let result = create_validator(|registry| {
            registry.index("Id", num());
            registry.index("Id", str())
        });
        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateKey("Id".to_string())
        );
    }

    #[test]
    fn test_first_registration_wins() {
        let registry = ValidatorRegistry::new();
        registry.index("Id", num());
        registry.index("Id", str());
        assert!(registry.get("Id").unwrap().is_valid(&json!(1)));
    }

    #[test]
    fn test_finished_graph_outlives_registry() {
        let node = create_validator(|registry| {
            registry.index(
                "Node",
                props([
                    Property::field("id", num()),
                    Property::field("next", optional(registry.provider("Node"))),
                ]),
            )
        })
        .unwrap();

        assert!(node.is_valid(&json!({"id": 1, "next": {"id": 2, "next": null}})));
        assert!(!node.is_valid(&json!({"id": 1, "next": {"id": "2"}})));
    }

    #[test]
    fn test_finish_freezes_storage() {
        let registry = ValidatorRegistry::new();
        let provider = registry.provider("Id");
        registry.index("Id", num());
        let storage = Arc::clone(&registry.storage);

        let root = registry.finish(props([Property::field("id", provider.clone())]));
        assert!(root.unwrap().is_valid(&json!({"id": 1})));

        assert!(storage.frozen.get().is_some_and(|m| m.contains_key("Id")));
        assert!(storage.building.read().is_empty());
        assert!(provider.resolve().unwrap().is_valid(&json!(2)));
    }

    #[test]
    fn test_provider_after_registry_dropped() {
        let provider = {
            let registry = ValidatorRegistry::new();
            registry.index("Gone", num());
            registry.provider("Gone")
        };
        assert_eq!(
            provider.resolve().unwrap_err(),
            RegistryError::RegistryDropped("Gone".to_string())
        );
    }

    #[test]
    #[should_panic(expected = "unable to find validator for key 'Missing'")]
    fn test_evaluating_unfinished_graph_with_missing_key_panics() {
        let registry = ValidatorRegistry::new();
        let validator = props([Property::field("x", registry.provider("Missing"))]);
        validator.validate(&json!({"x": 1}));
    }

    #[test]
    fn test_root_forwards_absent_values() {
        let validator = create_validator(|_| num()).unwrap();
        assert_eq!(
            validator.validate_optional(None),
            ValidationResult::InvalidType {
                expected: TypeName::Number,
                actual: TypeName::Undefined,
            }
        );
    }
}
