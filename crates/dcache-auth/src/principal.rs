//! # The Principal Capability
//!
//! [`Principal`] is the one thing every identity token can do: report its
//! canonical name. [`AnyPrincipal`] lets callers hold principals of
//! different kinds in a single collection.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::identity::{NamedIdentityPrincipal, NumericIdentityPrincipal};

/// An identity associated with an authenticated action.
pub trait Principal {
    /// The canonical name of this principal.
    fn name(&self) -> Cow<'_, str>;
}

/// Discriminates the principal types this crate knows how to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalKind {
    /// [`NumericIdentityPrincipal`].
    Numeric,
    /// [`NamedIdentityPrincipal`].
    Named,
}

impl PrincipalKind {
    /// Returns the stable tag written into durable tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Named => "named",
        }
    }

    /// Look up a kind by its durable tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "numeric" => Some(Self::Numeric),
            "named" => Some(Self::Named),
            _ => None,
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either kind of principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnyPrincipal {
    /// A login UID.
    Numeric(NumericIdentityPrincipal),
    /// A username.
    Named(NamedIdentityPrincipal),
}

impl AnyPrincipal {
    /// Which kind of principal this is.
    pub fn kind(&self) -> PrincipalKind {
        match self {
            Self::Numeric(_) => PrincipalKind::Numeric,
            Self::Named(_) => PrincipalKind::Named,
        }
    }
}

impl Principal for AnyPrincipal {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Numeric(p) => p.name(),
            Self::Named(p) => p.name(),
        }
    }
}

impl fmt::Display for AnyPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(p) => p.fmt(f),
            Self::Named(p) => p.fmt(f),
        }
    }
}

impl From<NumericIdentityPrincipal> for AnyPrincipal {
    fn from(p: NumericIdentityPrincipal) -> Self {
        Self::Numeric(p)
    }
}

impl From<NamedIdentityPrincipal> for AnyPrincipal {
    fn from(p: NamedIdentityPrincipal) -> Self {
        Self::Named(p)
    }
}

impl TryFrom<AnyPrincipal> for NumericIdentityPrincipal {
    type Error = TokenError;

    fn try_from(any: AnyPrincipal) -> Result<Self, Self::Error> {
        match any {
            AnyPrincipal::Numeric(p) => Ok(p),
            other => Err(TokenError::KindMismatch {
                expected: PrincipalKind::Numeric,
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<AnyPrincipal> for NamedIdentityPrincipal {
    type Error = TokenError;

    fn try_from(any: AnyPrincipal) -> Result<Self, Self::Error> {
        match any {
            AnyPrincipal::Named(p) => Ok(p),
            other => Err(TokenError::KindMismatch {
                expected: PrincipalKind::Named,
                found: other.kind(),
            }),
        }
    }
}
