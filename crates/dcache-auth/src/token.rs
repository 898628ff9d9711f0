//! # Durable Tokens
//!
//! Encodes principals for storage or transmission across process
//! boundaries, and decodes them back into equal instances.
//!
//! ## Format
//!
//! A token is an RFC 8785 canonical JSON object with three members:
//!
//! ```text
//! {"kind":"numeric","name":"1000","version":1}
//! {"kind":"named","name":"alice","version":1}
//! ```
//!
//! `name` is the principal's canonical name and `version` is
//! [`TOKEN_FORMAT_VERSION`]. The version is read before anything else and
//! any other value is rejected, so a token in an incompatible future format
//! is reported as [`TokenError::UnsupportedVersion`] whatever its other
//! members look like. Members not listed above are ignored.
//!
//! ## Size limit
//!
//! A [`TokenCodec`] refuses to encode or decode tokens longer than its
//! `max_token_len`, so it never emits a token it would not read back. The
//! `to_token`/`from_token` pair on each principal type applies no limit and
//! round-trips every principal.
//!
//! Decoding applies the same construction rules as the principal types:
//! a negative or unparsable login UID, or a missing/`null` name, is a
//! [`TokenError::Principal`].

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;
use crate::config::CodecConfig;
use crate::error::{PrincipalError, TokenError};
use crate::identity::{NamedIdentityPrincipal, NumericIdentityPrincipal};
use crate::principal::{AnyPrincipal, Principal, PrincipalKind};

/// Format version written into every token.
pub const TOKEN_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a> {
    kind: PrincipalKind,
    name: Cow<'a, str>,
    version: u32,
}

#[derive(Deserialize)]
struct VersionTag {
    version: u32,
}

#[derive(Deserialize)]
struct RawEnvelope {
    kind: String,
    #[serde(default)]
    name: Option<String>,
}

/// SHA-256 over a token's canonical bytes.
///
/// Identifies a token in logs without revealing the principal it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenFingerprint([u8; 32]);

impl TokenFingerprint {
    fn of(bytes: &CanonicalBytes) -> Self {
        let hash = Sha256::digest(bytes.as_bytes());
        let mut out = [0u8; 32];
        out.copy_from_slice(&hash);
        Self(out)
    }

    /// The raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for TokenFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// An encoded principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DurableToken {
    kind: PrincipalKind,
    bytes: CanonicalBytes,
}

impl DurableToken {
    /// Kind of principal this token carries.
    pub fn kind(&self) -> PrincipalKind {
        self.kind
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_bytes()
    }

    /// The encoded token as text.
    pub fn as_str(&self) -> &str {
        self.bytes.as_str()
    }

    /// Consume the token, returning the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes.into_bytes()
    }

    /// Fingerprint of the encoded bytes.
    pub fn fingerprint(&self) -> TokenFingerprint {
        TokenFingerprint::of(&self.bytes)
    }
}

impl AsRef<[u8]> for DurableToken {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for DurableToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encodes and decodes durable tokens under a [`CodecConfig`].
#[derive(Debug, Clone, Default)]
pub struct TokenCodec {
    config: CodecConfig,
}

impl TokenCodec {
    /// Create a codec with the given limits.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// A codec with no size limit, for tokens from trusted storage.
    pub fn unbounded() -> Self {
        Self::new(CodecConfig {
            max_token_len: usize::MAX,
        })
    }

    /// The limits this codec applies.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a principal.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::TooLarge`] if the token would exceed
    /// `max_token_len`, and [`TokenError::Canonicalization`] if canonical
    /// serialization fails.
    pub fn encode(&self, principal: &AnyPrincipal) -> Result<DurableToken, TokenError> {
        self.encode_parts(principal.kind(), principal.name())
    }

    fn encode_parts(&self, kind: PrincipalKind, name: Cow<'_, str>) -> Result<DurableToken, TokenError> {
        let envelope = Envelope {
            kind,
            name,
            version: TOKEN_FORMAT_VERSION,
        };
        let bytes = CanonicalBytes::new(&envelope)?;
        self.check_len(bytes.len())?;
        let token = DurableToken { kind, bytes };
        tracing::debug!(%kind, fingerprint = %token.fingerprint(), "encoded principal token");
        Ok(token)
    }

    /// Decode a token of either kind.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::TooLarge`] if the input exceeds
    /// `max_token_len`, [`TokenError::Malformed`] if it is not a token
    /// envelope, [`TokenError::UnknownKind`] or
    /// [`TokenError::UnsupportedVersion`] for tokens this build cannot read,
    /// and [`TokenError::Principal`] if the payload is not a valid principal.
    pub fn decode(&self, bytes: &[u8]) -> Result<AnyPrincipal, TokenError> {
        match self.decode_inner(bytes) {
            Ok(principal) => {
                tracing::debug!(kind = %principal.kind(), "decoded principal token");
                Ok(principal)
            }
            Err(e) => {
                tracing::warn!(error = %e, len = bytes.len(), "rejected principal token");
                Err(e)
            }
        }
    }

    /// Decode a token that must carry a specific principal type.
    ///
    /// # Errors
    ///
    /// As [`decode()`](Self::decode), plus [`TokenError::KindMismatch`] if
    /// the token holds a different kind.
    pub fn decode_as<T>(&self, bytes: &[u8]) -> Result<T, TokenError>
    where
        T: TryFrom<AnyPrincipal, Error = TokenError>,
    {
        T::try_from(self.decode(bytes)?)
    }

    fn check_len(&self, len: usize) -> Result<(), TokenError> {
        let max = self.config.max_token_len;
        if len > max {
            return Err(TokenError::TooLarge { len, max });
        }
        Ok(())
    }

    fn decode_inner(&self, bytes: &[u8]) -> Result<AnyPrincipal, TokenError> {
        self.check_len(bytes.len())?;

        let tag: VersionTag =
            serde_json::from_slice(bytes).map_err(|e| TokenError::Malformed(e.to_string()))?;
        if tag.version != TOKEN_FORMAT_VERSION {
            return Err(TokenError::UnsupportedVersion {
                found: tag.version,
                expected: TOKEN_FORMAT_VERSION,
            });
        }

        let raw: RawEnvelope =
            serde_json::from_slice(bytes).map_err(|e| TokenError::Malformed(e.to_string()))?;
        let kind = PrincipalKind::from_tag(&raw.kind).ok_or(TokenError::UnknownKind(raw.kind))?;

        let principal = match kind {
            PrincipalKind::Numeric => {
                let name = raw.name.ok_or(PrincipalError::NullArgument)?;
                AnyPrincipal::Numeric(name.parse::<NumericIdentityPrincipal>()?)
            }
            PrincipalKind::Named => {
                AnyPrincipal::Named(NamedIdentityPrincipal::from_optional(raw.name)?)
            }
        };
        Ok(principal)
    }
}

impl NumericIdentityPrincipal {
    /// Encode this principal with no size limit.
    ///
    /// # Errors
    ///
    /// See [`TokenCodec::encode()`].
    pub fn to_token(&self) -> Result<DurableToken, TokenError> {
        TokenCodec::unbounded().encode_parts(PrincipalKind::Numeric, self.name())
    }

    /// Decode a numeric principal with no size limit.
    ///
    /// # Errors
    ///
    /// See [`TokenCodec::decode_as()`].
    pub fn from_token(bytes: &[u8]) -> Result<Self, TokenError> {
        TokenCodec::unbounded().decode_as(bytes)
    }
}

impl NamedIdentityPrincipal {
    /// Encode this principal with no size limit.
    ///
    /// # Errors
    ///
    /// See [`TokenCodec::encode()`].
    pub fn to_token(&self) -> Result<DurableToken, TokenError> {
        TokenCodec::unbounded().encode_parts(PrincipalKind::Named, self.name())
    }

    /// Decode a named principal with no size limit.
    ///
    /// # Errors
    ///
    /// See [`TokenCodec::decode_as()`].
    pub fn from_token(bytes: &[u8]) -> Result<Self, TokenError> {
        TokenCodec::unbounded().decode_as(bytes)
    }
}
