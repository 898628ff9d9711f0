//! # dcache-auth — Identity Principals
//!
//! Value types the authentication layer uses to say *who* is associated
//! with a request. Login strategies and mapping engines produce these;
//! authorization code consumes them as opaque identity tokens.
//!
//! ## Key Design Principles
//!
//! 1. **Validated newtypes.** [`NumericIdentityPrincipal`] (a login UID) and
//!    [`NamedIdentityPrincipal`] (a trusted username) can only be built
//!    through constructors that enforce their invariants, including when
//!    deserialized.
//!
//! 2. **One capability, no shared data.** Both implement [`Principal`],
//!    which exposes only the canonical name. [`AnyPrincipal`] holds either
//!    kind so heterogeneous principals can share one set.
//!
//! 3. **Explicit durable tokens.** Principals cross process boundaries as
//!    [`DurableToken`]s: canonical JSON carrying a kind tag and a format
//!    version, produced only through [`CanonicalBytes`].
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All principal types are immutable, `Send + Sync`, and usable as map keys.

pub mod canonical;
pub mod config;
pub mod error;
pub mod identity;
pub mod principal;
pub mod token;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use config::CodecConfig;
pub use error::{CanonicalizationError, ConfigError, PrincipalError, TokenError};
pub use identity::{NamedIdentityPrincipal, NumericIdentityPrincipal};
pub use principal::{AnyPrincipal, Principal, PrincipalKind};
pub use token::{DurableToken, TokenCodec, TokenFingerprint, TOKEN_FORMAT_VERSION};
