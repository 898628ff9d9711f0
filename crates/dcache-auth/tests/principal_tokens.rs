//! # Principal and Durable Token Integration Tests
//!
//! Exercises the public API the way an authentication service uses it:
//! principals are built from untrusted identity data, collected into one
//! set, shipped as durable tokens, and read back on the other side.

use std::collections::HashSet;

use dcache_auth::{
    AnyPrincipal, CodecConfig, NamedIdentityPrincipal, NumericIdentityPrincipal, Principal,
    PrincipalError, TokenCodec, TokenError,
};

fn login_principals() -> Vec<AnyPrincipal> {
    vec![
        NumericIdentityPrincipal::new(1000).unwrap().into(),
        NamedIdentityPrincipal::new("alice").into(),
        NumericIdentityPrincipal::from(0u32).into(),
        NamedIdentityPrincipal::new("").into(),
    ]
}

// ---------------------------------------------------------------------------
// Construction from untrusted input
// ---------------------------------------------------------------------------

#[test]
fn uid_from_untrusted_strings() {
    let ok: NumericIdentityPrincipal = "1000".parse().unwrap();
    assert_eq!(ok.id(), 1000);
    assert_eq!(ok, NumericIdentityPrincipal::new(1000).unwrap());

    assert!(matches!(
        "abc".parse::<NumericIdentityPrincipal>(),
        Err(PrincipalError::ParseError { .. })
    ));
    assert!(matches!(
        "".parse::<NumericIdentityPrincipal>(),
        Err(PrincipalError::ParseError { .. })
    ));
    assert!(matches!(
        "12.5".parse::<NumericIdentityPrincipal>(),
        Err(PrincipalError::ParseError { .. })
    ));
    assert_eq!(
        "-1000".parse::<NumericIdentityPrincipal>(),
        Err(PrincipalError::InvalidArgument(-1000))
    );
}

#[test]
fn username_from_untrusted_json() {
    let present: Option<String> = serde_json::from_str("\"alice\"").unwrap();
    assert_eq!(
        NamedIdentityPrincipal::try_from(present).unwrap().name(),
        "alice"
    );

    let absent: Option<String> = serde_json::from_str("null").unwrap();
    assert_eq!(
        NamedIdentityPrincipal::try_from(absent),
        Err(PrincipalError::NullArgument)
    );
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        PrincipalError::InvalidArgument(-3).to_string(),
        "login uid must be non-negative, got -3"
    );
    let err = "x1".parse::<NumericIdentityPrincipal>().unwrap_err();
    assert_eq!(err.to_string(), "not a valid login uid: \"x1\"");
    assert!(std::error::Error::source(&err).is_some());
}

// ---------------------------------------------------------------------------
// Set semantics
// ---------------------------------------------------------------------------

#[test]
fn heterogeneous_set_deduplicates() {
    let mut set: HashSet<AnyPrincipal> = login_principals().into_iter().collect();
    set.extend(login_principals());
    assert_eq!(set.len(), 4);
    assert!(set.contains(&AnyPrincipal::from(NamedIdentityPrincipal::new("alice"))));
    assert!(!set.contains(&AnyPrincipal::from(NamedIdentityPrincipal::new("Alice"))));
}

#[test]
fn display_for_logging() {
    let shown: Vec<String> = login_principals().iter().map(ToString::to_string).collect();
    assert_eq!(
        shown,
        [
            "NumericIdentityPrincipal[1000]",
            "NamedIdentityPrincipal[alice]",
            "NumericIdentityPrincipal[0]",
            "NamedIdentityPrincipal[]",
        ]
    );
}

// ---------------------------------------------------------------------------
// Durable tokens
// ---------------------------------------------------------------------------

#[test]
fn every_principal_survives_a_token_roundtrip() {
    let codec = TokenCodec::default();
    for principal in login_principals() {
        let token = codec.encode(&principal).unwrap();
        assert_eq!(token.kind(), principal.kind());
        let decoded = codec.decode(&token.into_bytes()).unwrap();
        assert_eq!(decoded, principal);
    }
}

#[test]
fn tokens_are_transmitted_as_text() {
    let token = NumericIdentityPrincipal::new(4242).unwrap().to_token().unwrap();
    let wire = token.to_string();
    let back = NumericIdentityPrincipal::from_token(wire.as_bytes()).unwrap();
    assert_eq!(back.id(), 4242);
}

#[test]
fn codec_from_yaml_config() {
    let config = CodecConfig::from_yaml_str("max_token_len: 64\n").unwrap();
    let codec = TokenCodec::new(config);
    assert_eq!(codec.config().max_token_len, 64);

    let short = NamedIdentityPrincipal::new("bob");
    let token = codec.encode(&short.clone().into()).unwrap();
    assert_eq!(codec.decode_as::<NamedIdentityPrincipal>(token.as_bytes()).unwrap(), short);

    // The limited codec neither writes nor reads an oversized token.
    let long = NamedIdentityPrincipal::new("x".repeat(100));
    assert!(matches!(
        codec.encode(&long.clone().into()),
        Err(TokenError::TooLarge { max: 64, .. })
    ));
    let stored = long.to_token().unwrap();
    assert!(matches!(
        codec.decode(stored.as_bytes()),
        Err(TokenError::TooLarge { max: 64, .. })
    ));
    assert_eq!(NamedIdentityPrincipal::from_token(stored.as_bytes()).unwrap(), long);
}

#[test]
fn future_format_versions_are_detected() {
    let err = TokenCodec::default()
        .decode(br#"{"kind":"numeric","name":"1000","version":2}"#)
        .unwrap_err();
    match err {
        TokenError::UnsupportedVersion { found, expected } => {
            assert_eq!(found, 2);
            assert_eq!(expected, dcache_auth::TOKEN_FORMAT_VERSION);
        }
        other => panic!("expected UnsupportedVersion, got {other:?}"),
    }

    // A later format may introduce kinds and payload shapes this build
    // does not know; the version still identifies it.
    let err = TokenCodec::default()
        .decode(br#"{"kind":"group","name":{"gid":100},"version":2}"#)
        .unwrap_err();
    assert!(matches!(err, TokenError::UnsupportedVersion { found: 2, .. }));
}
