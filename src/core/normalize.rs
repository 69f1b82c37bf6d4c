//! Splitting raw translation keys into namespace and key.
//!
//! Keys are written as `namespace:key`. Only the first colon separates the two
//! parts; anything after it, further colons included, belongs to the key.

use std::fmt;

use serde::Serialize;

/// Namespace used when a raw key carries no `namespace:` prefix.
pub const DEFAULT_NAMESPACE: &str = "general";

/// A namespace-qualified translation key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct KeyRef {
    pub namespace: String,
    pub key: String,
}

impl KeyRef {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for KeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

/// Split a raw matched key into `(namespace, key)`.
///
/// Never fails: degenerate input such as `"ns:"` or `":"` yields empty parts.
///
/// ```
/// use tolk::core::normalize_key;
///
/// let k = normalize_key("config:save");
/// assert_eq!((k.namespace.as_str(), k.key.as_str()), ("config", "save"));
///
/// let k = normalize_key("cancel");
/// assert_eq!((k.namespace.as_str(), k.key.as_str()), ("general", "cancel"));
/// ```
pub fn normalize_key(raw: &str) -> KeyRef {
    match raw.split_once(':') {
        Some((namespace, key)) => KeyRef::new(namespace, key),
        None => KeyRef::new(DEFAULT_NAMESPACE, raw),
    }
}
