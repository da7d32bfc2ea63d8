//! Protocol constants — wire-exact values from OpenID Authentication 2.0 §8
//! and the OpenID 1.x compatibility profile.
//!
//! Every string here is interop-critical: field keys and values MUST match
//! the wire byte-for-byte, or the identity provider will reject the
//! association request — or silently resolve it to the wrong session type.

/// OpenID 2.0 namespace URI.
///
/// Presence of `openid.ns` with exactly this value is the version
/// discriminator between 2.0 and 1.x messages; absence means legacy mode.
pub const OPENID2_NS: &str = "http://specs.openid.net/auth/2.0";

/// Mode value carried by every association request.
pub const MODE_ASSOC: &str = "associate";

// ── Wire field keys ─────────────────────────────────────────────

/// Namespace field; present in 2.0 requests only.
pub const FIELD_NS: &str = "openid.ns";

/// Mode discriminator field; always present.
pub const FIELD_MODE: &str = "openid.mode";

/// Key-agreement algorithm name. Required key in legacy requests (value may
/// be empty for no-encryption); required and non-empty in 2.0 requests.
pub const FIELD_SESSION_TYPE: &str = "openid.session_type";

/// MAC association algorithm name. Required in 2.0, optional in legacy.
pub const FIELD_ASSOC_TYPE: &str = "openid.assoc_type";

/// Diffie-Hellman modulus (base64, big-endian two's complement).
pub const FIELD_DH_MODULUS: &str = "openid.dh_modulus";

/// Diffie-Hellman generator (base64, big-endian two's complement).
pub const FIELD_DH_GEN: &str = "openid.dh_gen";

/// Relying party's Diffie-Hellman public key (base64).
pub const FIELD_DH_CONSUMER_PUBLIC: &str = "openid.dh_consumer_public";

// ── Algorithm names ─────────────────────────────────────────────

/// Diffie-Hellman session with SHA-1 secret hashing.
pub const SESSION_DH_SHA1: &str = "DH-SHA1";

/// Diffie-Hellman session with SHA-256 secret hashing (2.0 only).
pub const SESSION_DH_SHA256: &str = "DH-SHA256";

/// Cleartext MAC key exchange (2.0 name; legacy spells it as an empty value).
pub const SESSION_NO_ENCRYPTION: &str = "no-encryption";

/// HMAC-SHA1 association (the only MAC algorithm legacy providers accept).
pub const ASSOC_HMAC_SHA1: &str = "HMAC-SHA1";

/// HMAC-SHA256 association (2.0 only).
pub const ASSOC_HMAC_SHA256: &str = "HMAC-SHA256";
