//! Conformance: construction paths + validation predicate.
//!
//! Invariants under test:
//! - ns presence is the version discriminator and must agree with the
//!   resolved session type
//! - the three dh_* fields travel all-or-nothing
//! - legacy requests must carry the session_type key even when empty
//! - build-then-reparse yields field-for-field equality

use assoc_core::constants::{
    ASSOC_HMAC_SHA256, FIELD_ASSOC_TYPE, FIELD_DH_CONSUMER_PUBLIC, FIELD_DH_GEN, FIELD_DH_MODULUS,
    FIELD_MODE, FIELD_NS, FIELD_SESSION_TYPE, MODE_ASSOC, OPENID2_NS, SESSION_DH_SHA256,
};
use assoc_core::{AssocError, AssociationRequest, AssociationSessionType, DhSession, ParameterList};

fn dh_session(session_type: AssociationSessionType) -> DhSession {
    DhSession::from_raw(session_type, &[0x00, 0xdc, 0xf9, 0x3a], &[0x02], &[0x42; 16]).unwrap()
}

/// The concrete DH-SHA256 scenario: every field present, exact values.
#[test]
fn conformance_v2_dh_sha256_full_field_set() {
    let dh = dh_session(AssociationSessionType::DH_SHA256);
    let req =
        AssociationRequest::build(AssociationSessionType::DH_SHA256, Some(dh.clone())).unwrap();

    assert!(req.is_valid());
    assert!(req.is_version2());
    assert_eq!(req.params().get(FIELD_NS), Some(OPENID2_NS));
    assert_eq!(req.params().get(FIELD_MODE), Some(MODE_ASSOC));
    assert_eq!(req.params().get(FIELD_SESSION_TYPE), Some(SESSION_DH_SHA256));
    assert_eq!(req.params().get(FIELD_ASSOC_TYPE), Some(ASSOC_HMAC_SHA256));
    assert_eq!(req.params().get(FIELD_DH_MODULUS), Some(dh.modulus()));
    assert_eq!(req.params().get(FIELD_DH_GEN), Some(dh.generator()));
    assert_eq!(
        req.params().get(FIELD_DH_CONSUMER_PUBLIC),
        Some(dh.public_key())
    );
    assert_eq!(req.params().len(), 7);
}

/// Same scenario with dh_consumer_public removed: must flip to invalid.
#[test]
fn conformance_v2_dh_sha256_without_public_key_rejected() {
    let dh = dh_session(AssociationSessionType::DH_SHA256);
    let req = AssociationRequest::build(AssociationSessionType::DH_SHA256, Some(dh)).unwrap();

    let mut params = req.params().clone();
    params.remove(FIELD_DH_CONSUMER_PUBLIC);
    let err = AssociationRequest::from_parameters(params).unwrap_err();
    assert!(matches!(err, AssocError::MalformedParameters(_)));
}

#[test]
fn conformance_v2_no_encryption_valid_without_dh_fields() {
    for session_type in [
        AssociationSessionType::NO_ENCRYPTION_SHA1MAC,
        AssociationSessionType::NO_ENCRYPTION_SHA256MAC,
    ] {
        let req = AssociationRequest::build(session_type, None).unwrap();
        assert!(req.is_valid());
        assert!(req.params().has(FIELD_NS));
        assert!(!req.params().has(FIELD_DH_MODULUS));
        assert!(!req.params().has(FIELD_DH_GEN));
        assert!(!req.params().has(FIELD_DH_CONSUMER_PUBLIC));
    }
}

/// Legacy cleartext request: session_type key present with empty value,
/// no assoc_type, no ns, no dh_* — valid.
#[test]
fn conformance_legacy_empty_session_type_valid() {
    let params = ParameterList::from_pairs(&[(FIELD_MODE, MODE_ASSOC), (FIELD_SESSION_TYPE, "")]);
    let req = AssociationRequest::from_parameters(params).unwrap();
    assert!(req.is_valid());
    assert!(!req.is_version2());
    assert_eq!(
        req.resolve_type().unwrap(),
        AssociationSessionType::NO_ENCRYPTION_COMPAT_SHA1MAC
    );
}

/// Legacy request with the session_type key entirely absent: invalid, even
/// though the registry lookup alone would tolerate the absence.
#[test]
fn conformance_legacy_absent_session_type_rejected() {
    let params = ParameterList::from_pairs(&[(FIELD_MODE, MODE_ASSOC)]);
    let err = AssociationRequest::from_parameters(params).unwrap_err();
    assert!(matches!(err, AssocError::MalformedParameters(_)));
}

/// Partial dh_* subsets are invalid regardless of the declared session type.
#[test]
fn conformance_partial_dh_field_sets_always_rejected() {
    let dh = dh_session(AssociationSessionType::DH_SHA256);
    let full = AssociationRequest::build(AssociationSessionType::DH_SHA256, Some(dh)).unwrap();

    for missing in [FIELD_DH_MODULUS, FIELD_DH_GEN, FIELD_DH_CONSUMER_PUBLIC] {
        let mut params = full.params().clone();
        params.remove(missing);
        assert!(
            AssociationRequest::from_parameters(params).is_err(),
            "field set missing {missing} was accepted"
        );
    }

    // A cleartext request with a single stray dh field is just as invalid.
    let mut params = ParameterList::from_pairs(&[
        (FIELD_NS, OPENID2_NS),
        (FIELD_MODE, MODE_ASSOC),
        (FIELD_SESSION_TYPE, "no-encryption"),
        (FIELD_ASSOC_TYPE, "HMAC-SHA1"),
    ]);
    params.set(FIELD_DH_GEN, "Ag==");
    assert!(AssociationRequest::from_parameters(params).is_err());
}

/// Declaring the 2.0 namespace while supplying a legacy-only session type
/// must fail the generation cross-check.
#[test]
fn conformance_ns_with_legacy_session_type_rejected() {
    let params = ParameterList::from_pairs(&[
        (FIELD_NS, OPENID2_NS),
        (FIELD_MODE, MODE_ASSOC),
        (FIELD_SESSION_TYPE, ""),
    ]);
    assert!(AssociationRequest::from_parameters(params).is_err());
}

/// Path A build, then path B reparse of the same field set: both valid,
/// field-for-field equal.
#[test]
fn conformance_build_reparse_round_trip() {
    let cases: Vec<AssociationRequest> = vec![
        AssociationRequest::build(
            AssociationSessionType::DH_SHA256,
            Some(dh_session(AssociationSessionType::DH_SHA256)),
        )
        .unwrap(),
        AssociationRequest::build(
            AssociationSessionType::DH_SHA1,
            Some(dh_session(AssociationSessionType::DH_SHA1)),
        )
        .unwrap(),
        AssociationRequest::build(AssociationSessionType::NO_ENCRYPTION_SHA256MAC, None).unwrap(),
        AssociationRequest::build(AssociationSessionType::NO_ENCRYPTION_COMPAT_SHA1MAC, None)
            .unwrap(),
    ];

    for built in cases {
        let parsed = AssociationRequest::from_parameters(built.params().clone())
            .unwrap_or_else(|e| panic!("reparse failed: {e}"));
        assert!(parsed.is_valid());
        assert_eq!(parsed.params(), built.params());
    }
}

/// The key-value text form survives a round trip and reparses to a valid
/// request.
#[test]
fn conformance_key_value_form_round_trip() {
    let built = AssociationRequest::build(
        AssociationSessionType::DH_SHA256,
        Some(dh_session(AssociationSessionType::DH_SHA256)),
    )
    .unwrap();

    let text = built.params().to_key_value_form().unwrap();
    let params = ParameterList::from_key_value_form(&text).unwrap();
    let parsed = AssociationRequest::from_parameters(params).unwrap();
    assert_eq!(parsed.params(), built.params());
}
