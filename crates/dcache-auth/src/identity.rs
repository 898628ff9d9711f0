//! # Identity Principals
//!
//! The two leaf principal types of the authentication layer.
//!
//! - [`NumericIdentityPrincipal`] — the login UID of a signed-in user.
//! - [`NamedIdentityPrincipal`] — the trusted username of a signed-in
//!   person, as opposed to a login name that has not been authenticated yet.
//!
//! ## Validation
//!
//! Both types validate at construction time and route deserialization
//! through the same constructors, so an instance that exists is always
//! valid. Neither type can be mutated after construction.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrincipalError;
use crate::principal::Principal;

// ---------------------------------------------------------------------------
// Login UID
// ---------------------------------------------------------------------------

/// A non-negative numeric login UID.
///
/// The canonical name is the decimal form of the id, and parsing that name
/// with [`FromStr`] reproduces an equal principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NumericIdentityPrincipal(i64);

impl NumericIdentityPrincipal {
    /// Create a principal for a login UID.
    ///
    /// # Errors
    ///
    /// Returns [`PrincipalError::InvalidArgument`] if `id` is negative.
    pub fn new(id: i64) -> Result<Self, PrincipalError> {
        if id < 0 {
            return Err(PrincipalError::InvalidArgument(id));
        }
        Ok(Self(id))
    }

    /// The login UID.
    pub fn id(&self) -> i64 {
        self.0
    }
}

impl Principal for NumericIdentityPrincipal {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(self.0.to_string())
    }
}

impl fmt::Display for NumericIdentityPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumericIdentityPrincipal[{}]", self.0)
    }
}

impl FromStr for NumericIdentityPrincipal {
    type Err = PrincipalError;

    /// Parse a base-10 login UID.
    ///
    /// No upper bound is applied beyond the range of `i64`; out-of-range
    /// input is a [`PrincipalError::ParseError`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.parse::<i64>().map_err(|source| PrincipalError::ParseError {
            input: s.to_string(),
            source,
        })?;
        Self::new(id)
    }
}

impl TryFrom<i64> for NumericIdentityPrincipal {
    type Error = PrincipalError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<u32> for NumericIdentityPrincipal {
    fn from(id: u32) -> Self {
        Self(i64::from(id))
    }
}

impl<'de> Deserialize<'de> for NumericIdentityPrincipal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        Self::new(id).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Username
// ---------------------------------------------------------------------------

/// The trusted username of a signed-in person.
///
/// Any string is accepted, including the empty string. Comparison is exact
/// and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NamedIdentityPrincipal(String);

impl NamedIdentityPrincipal {
    /// Create a principal for a username.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Create a principal from a value that may be absent, as found in
    /// untrusted input.
    ///
    /// # Errors
    ///
    /// Returns [`PrincipalError::NullArgument`] if `name` is `None`.
    pub fn from_optional<S: Into<String>>(name: Option<S>) -> Result<Self, PrincipalError> {
        name.map(Self::new).ok_or(PrincipalError::NullArgument)
    }

    /// Access the username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Principal for NamedIdentityPrincipal {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

impl fmt::Display for NamedIdentityPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamedIdentityPrincipal[{}]", self.0)
    }
}

impl TryFrom<Option<String>> for NamedIdentityPrincipal {
    type Error = PrincipalError;

    fn try_from(name: Option<String>) -> Result<Self, Self::Error> {
        Self::from_optional(name)
    }
}

impl From<String> for NamedIdentityPrincipal {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for NamedIdentityPrincipal {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl<'de> Deserialize<'de> for NamedIdentityPrincipal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Self::from_optional(raw).map_err(serde::de::Error::custom)
    }
}
