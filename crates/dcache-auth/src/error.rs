//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Principal construction errors are raised synchronously; a failed
//!   constructor never yields a partially built value.
//! - Token errors carry enough context (kind, versions, lengths) to log a
//!   rejected token without echoing its payload.

use std::num::ParseIntError;

use thiserror::Error;

use crate::principal::PrincipalKind;

/// A principal could not be constructed from the given input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrincipalError {
    /// Numeric identifier is negative.
    #[error("login uid must be non-negative, got {0}")]
    InvalidArgument(i64),

    /// The input is not a base-10 integer representation.
    #[error("not a valid login uid: {input:?}")]
    ParseError {
        /// The rejected input.
        input: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A required name was absent.
    #[error("principal name is required")]
    NullArgument,
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// A durable token could not be encoded or decoded.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The payload violates a principal invariant.
    #[error("invalid principal in token: {0}")]
    Principal(#[from] PrincipalError),

    /// Canonical encoding failed.
    #[error("token encoding failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// The token exceeds the configured size limit.
    #[error("token is {len} bytes, limit is {max}")]
    TooLarge {
        /// Length of the rejected token.
        len: usize,
        /// Configured `max_token_len`.
        max: usize,
    },

    /// The input is not a token envelope.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// The kind tag names no known principal type.
    #[error("unknown principal kind {0:?}")]
    UnknownKind(String),

    /// The token was written by an incompatible format version.
    #[error("unsupported token version {found}, expected {expected}")]
    UnsupportedVersion {
        /// Version found in the token.
        found: u32,
        /// Version this build reads.
        expected: u32,
    },

    /// The token holds a different principal type than requested.
    #[error("expected a {expected} principal, found {found}")]
    KindMismatch {
        /// Requested kind.
        expected: PrincipalKind,
        /// Kind actually present.
        found: PrincipalKind,
    },
}

/// Codec configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The YAML document could not be parsed.
    #[error("failed to parse codec configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A value is out of range.
    #[error("invalid codec configuration: {0}")]
    Invalid(String),
}
