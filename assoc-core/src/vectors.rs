//! Deterministic golden request vectors (test use only).
//!
//! Each vector is a complete association request field set with its
//! expected validation outcome. The conformance harness replays every
//! vector through the parse path; [`to_json`] emits the same set as JSON so
//! implementations in other languages can consume identical inputs.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ASSOC_HMAC_SHA1, ASSOC_HMAC_SHA256, FIELD_ASSOC_TYPE, FIELD_DH_CONSUMER_PUBLIC, FIELD_DH_GEN,
    FIELD_DH_MODULUS, FIELD_MODE, FIELD_NS, FIELD_SESSION_TYPE, MODE_ASSOC, OPENID2_NS,
    SESSION_DH_SHA1, SESSION_DH_SHA256, SESSION_NO_ENCRYPTION,
};
use crate::dh::{DEFAULT_GENERATOR_BASE64, DEFAULT_MODULUS_BASE64};

/// Fixed relying-party public key used by every DH vector (base64 of
/// `[1, 2, 3]`). Arbitrary but stable — vectors must never change between
/// releases.
pub const VECTOR_PUBLIC_KEY_BASE64: &str = "AQID";

/// One golden association request field set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestVector {
    /// Stable vector identifier.
    pub name: String,
    /// Wire fields in serialization order.
    pub fields: Vec<(String, String)>,
    /// Expected outcome of the validation predicate.
    pub expect_valid: bool,
}

fn vector(name: &str, fields: &[(&str, &str)], expect_valid: bool) -> RequestVector {
    RequestVector {
        name: name.to_string(),
        fields: fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        expect_valid,
    }
}

/// The canonical vector set, stable across releases.
pub fn golden_request_vectors() -> Vec<RequestVector> {
    vec![
        vector(
            "v2-dh-sha256-full",
            &[
                (FIELD_NS, OPENID2_NS),
                (FIELD_MODE, MODE_ASSOC),
                (FIELD_SESSION_TYPE, SESSION_DH_SHA256),
                (FIELD_ASSOC_TYPE, ASSOC_HMAC_SHA256),
                (FIELD_DH_MODULUS, DEFAULT_MODULUS_BASE64),
                (FIELD_DH_GEN, DEFAULT_GENERATOR_BASE64),
                (FIELD_DH_CONSUMER_PUBLIC, VECTOR_PUBLIC_KEY_BASE64),
            ],
            true,
        ),
        vector(
            "v2-no-encryption-sha256",
            &[
                (FIELD_NS, OPENID2_NS),
                (FIELD_MODE, MODE_ASSOC),
                (FIELD_SESSION_TYPE, SESSION_NO_ENCRYPTION),
                (FIELD_ASSOC_TYPE, ASSOC_HMAC_SHA256),
            ],
            true,
        ),
        vector(
            "v1-no-encryption-empty-session-type",
            &[(FIELD_MODE, MODE_ASSOC), (FIELD_SESSION_TYPE, "")],
            true,
        ),
        vector(
            "v1-dh-sha1-implied-mac",
            &[
                (FIELD_MODE, MODE_ASSOC),
                (FIELD_SESSION_TYPE, SESSION_DH_SHA1),
                (FIELD_DH_MODULUS, DEFAULT_MODULUS_BASE64),
                (FIELD_DH_GEN, DEFAULT_GENERATOR_BASE64),
                (FIELD_DH_CONSUMER_PUBLIC, VECTOR_PUBLIC_KEY_BASE64),
            ],
            true,
        ),
        vector(
            "v2-dh-sha256-missing-consumer-public",
            &[
                (FIELD_NS, OPENID2_NS),
                (FIELD_MODE, MODE_ASSOC),
                (FIELD_SESSION_TYPE, SESSION_DH_SHA256),
                (FIELD_ASSOC_TYPE, ASSOC_HMAC_SHA256),
                (FIELD_DH_MODULUS, DEFAULT_MODULUS_BASE64),
                (FIELD_DH_GEN, DEFAULT_GENERATOR_BASE64),
            ],
            false,
        ),
        vector(
            "v1-session-type-key-absent",
            &[(FIELD_MODE, MODE_ASSOC), (FIELD_ASSOC_TYPE, ASSOC_HMAC_SHA1)],
            false,
        ),
        vector(
            "v2-ns-with-legacy-empty-session-type",
            &[
                (FIELD_NS, OPENID2_NS),
                (FIELD_MODE, MODE_ASSOC),
                (FIELD_SESSION_TYPE, ""),
            ],
            false,
        ),
        vector(
            "v1-dh-sha256-not-in-legacy-registry",
            &[
                (FIELD_MODE, MODE_ASSOC),
                (FIELD_SESSION_TYPE, SESSION_DH_SHA256),
                (FIELD_ASSOC_TYPE, ASSOC_HMAC_SHA256),
                (FIELD_DH_MODULUS, DEFAULT_MODULUS_BASE64),
                (FIELD_DH_GEN, DEFAULT_GENERATOR_BASE64),
                (FIELD_DH_CONSUMER_PUBLIC, VECTOR_PUBLIC_KEY_BASE64),
            ],
            false,
        ),
        vector(
            "v2-no-encryption-with-stray-dh-fields",
            &[
                (FIELD_NS, OPENID2_NS),
                (FIELD_MODE, MODE_ASSOC),
                (FIELD_SESSION_TYPE, SESSION_NO_ENCRYPTION),
                (FIELD_ASSOC_TYPE, ASSOC_HMAC_SHA1),
                (FIELD_DH_GEN, DEFAULT_GENERATOR_BASE64),
            ],
            false,
        ),
    ]
}

/// Serializes the canonical vector set as pretty JSON.
pub fn to_json() -> String {
    serde_json::to_string_pretty(&golden_request_vectors())
        .expect("vector serialization cannot fail")
}
