//! Ordered field-set storage — the generic keyed-message layer under every
//! protocol message.
//!
//! A [`ParameterList`] preserves insertion order (wire serialization is
//! order-sensitive for some providers) and keeps keys unique: setting an
//! existing key replaces its value in place. It also speaks the OpenID
//! key-value text form (`key:value` per line, newline-terminated), used for
//! fixtures and diagnostics here; direct-request transport encoding is a
//! layer above this crate.

use crate::errors::AssocError;

/// A single `key=value` wire field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub key: String,
    pub value: String,
}

/// Ordered, unique-key field set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterList {
    params: Vec<Parameter>,
}

impl ParameterList {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a field set from `(key, value)` pairs, last value winning on
    /// duplicate keys.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut list = Self::new();
        for (key, value) in pairs {
            list.set(*key, *value);
        }
        list
    }

    /// Sets a field, replacing the value in place (original position kept)
    /// if the key already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|p| p.key == key) {
            Some(existing) => existing.value = value,
            None => self.params.push(Parameter { key, value }),
        }
    }

    /// Returns the value for `key`, or `None` if the key is absent.
    ///
    /// An empty string is a present value — callers that care about the
    /// present-but-empty distinction (legacy session_type) rely on this.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Returns true if `key` is present, regardless of value.
    pub fn has(&self, key: &str) -> bool {
        self.params.iter().any(|p| p.key == key)
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.params.iter().position(|p| p.key == key)?;
        Some(self.params.remove(pos).value)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }

    // ── Key-value text form ─────────────────────────────────────

    /// Encodes the field set in key-value form: one `key:value` pair per
    /// line, each line newline-terminated, insertion order preserved.
    ///
    /// # Errors
    ///
    /// Returns `AssocError::Encoding` if a key contains `:` or a newline, or
    /// a value contains a newline — such fields cannot be represented in
    /// this form.
    pub fn to_key_value_form(&self) -> Result<String, AssocError> {
        let mut out = String::new();
        for p in &self.params {
            if p.key.contains(':') || p.key.contains('\n') {
                return Err(AssocError::Encoding(format!(
                    "key {:?} cannot be encoded in key-value form",
                    p.key
                )));
            }
            if p.value.contains('\n') {
                return Err(AssocError::Encoding(format!(
                    "value of {:?} contains a newline",
                    p.key
                )));
            }
            out.push_str(&p.key);
            out.push(':');
            out.push_str(&p.value);
            out.push('\n');
        }
        Ok(out)
    }

    /// Parses key-value form text. Values are split on the first `:`, so
    /// values may themselves contain colons. Duplicate keys keep the last
    /// value seen.
    ///
    /// # Errors
    ///
    /// Returns `AssocError::Encoding` on a non-empty line without a `:`.
    pub fn from_key_value_form(text: &str) -> Result<Self, AssocError> {
        let mut list = Self::new();
        for line in text.split('\n') {
            if line.is_empty() {
                continue;
            }
            let (key, value) = line.split_once(':').ok_or_else(|| {
                AssocError::Encoding(format!("malformed key-value line: {line:?}"))
            })?;
            list.set(key, value);
        }
        Ok(list)
    }
}
