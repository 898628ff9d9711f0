//! # Canonical Serialization
//!
//! `CanonicalBytes` is the sole construction path for durable token bytes.
//!
//! ## Invariant
//!
//! The inner field is private and the only constructor is
//! [`CanonicalBytes::new()`], which serializes through `serde_jcs`
//! (RFC 8785, JSON Canonicalization Scheme): sorted keys, compact
//! separators, UTF-8. Equal principals therefore always encode to the same
//! byte sequence, and so to the same fingerprint.

use serde::Serialize;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(String);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::SerializationFailed`] if the value
    /// cannot be represented as JSON.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        Ok(Self(serde_jcs::to_string(obj)?))
    }

    /// Access the canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The canonical bytes as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the wrapper, returning the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
