//! Canonical parameter encoding for signed requests.
//!
//! The server rebuilds this string from the logical parameters to check the
//! signature, so both sides must agree on it byte for byte: pairs sorted by
//! key, form-urlencoded keys and values, `=` and `&` separators.
//!
//! Escaping follows the exchange's reference encoder: ASCII letters, digits
//! and `-_.~` pass through, a space becomes `+`, every other byte is
//! percent-encoded (so `*` is `%2A`).

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped in a form component.
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_component(component: &str) -> String {
    // `%` itself is escaped, so `%20` can only come from a space.
    utf8_percent_encode(component, FORM_COMPONENT)
        .to_string()
        .replace("%20", "+")
}

/// An ordered set of named request parameters.
///
/// Iteration, and therefore encoding, is lexicographic by key regardless of
/// insertion order. Inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalParams {
    params: BTreeMap<String, String>,
}

impl CanonicalParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Look up a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encode into the canonical `application/x-www-form-urlencoded` string.
    pub fn encode(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for CanonicalParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
