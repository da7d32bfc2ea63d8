//! Association session type registry.
//!
//! A session type is the validated combination of {key-agreement algorithm,
//! MAC association algorithm, compatibility mode}. [`lookup`] is the single
//! source of truth for which combinations are legal on the wire. Everything
//! downstream, the request validation predicate included, treats a lookup
//! failure as "invalid message", never as a panic.
//!
//! The legacy (1.x) side of the registry is deliberately loose where the
//! protocol was: the association type may be omitted (HMAC-SHA1 is implied)
//! and the session type may be absent or empty for cleartext exchanges. The
//! 2.0 side requires both names, spelled exactly.
//!
//! [`lookup`]: AssociationSessionType::lookup

use crate::constants::{
    ASSOC_HMAC_SHA1, ASSOC_HMAC_SHA256, SESSION_DH_SHA1, SESSION_DH_SHA256, SESSION_NO_ENCRYPTION,
};
use crate::errors::AssocError;

/// A validated session / association algorithm pairing.
///
/// Values are only obtainable from the registry constants or [`Self::lookup`],
/// so holding one is proof the combination is legal for its compatibility
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociationSessionType {
    session_type: &'static str,
    h_algorithm: Option<&'static str>,
    association_type: &'static str,
    version2: bool,
}

impl AssociationSessionType {
    /// 2.0 cleartext MAC key exchange, HMAC-SHA1 association.
    pub const NO_ENCRYPTION_SHA1MAC: Self = Self {
        session_type: SESSION_NO_ENCRYPTION,
        h_algorithm: None,
        association_type: ASSOC_HMAC_SHA1,
        version2: true,
    };

    /// 2.0 cleartext MAC key exchange, HMAC-SHA256 association.
    pub const NO_ENCRYPTION_SHA256MAC: Self = Self {
        session_type: SESSION_NO_ENCRYPTION,
        h_algorithm: None,
        association_type: ASSOC_HMAC_SHA256,
        version2: true,
    };

    /// 2.0 Diffie-Hellman session, SHA-1 secret hashing, HMAC-SHA1 MAC.
    pub const DH_SHA1: Self = Self {
        session_type: SESSION_DH_SHA1,
        h_algorithm: Some("SHA-1"),
        association_type: ASSOC_HMAC_SHA1,
        version2: true,
    };

    /// 2.0 Diffie-Hellman session, SHA-256 secret hashing, HMAC-SHA256 MAC.
    pub const DH_SHA256: Self = Self {
        session_type: SESSION_DH_SHA256,
        h_algorithm: Some("SHA-256"),
        association_type: ASSOC_HMAC_SHA256,
        version2: true,
    };

    /// Legacy cleartext exchange. The wire session_type is the empty string.
    pub const NO_ENCRYPTION_COMPAT_SHA1MAC: Self = Self {
        session_type: "",
        h_algorithm: None,
        association_type: ASSOC_HMAC_SHA1,
        version2: false,
    };

    /// Legacy Diffie-Hellman session (SHA-1 only).
    pub const DH_COMPAT_SHA1: Self = Self {
        session_type: SESSION_DH_SHA1,
        h_algorithm: Some("SHA-1"),
        association_type: ASSOC_HMAC_SHA1,
        version2: false,
    };

    /// Resolves wire algorithm names to a registry entry.
    ///
    /// `session_type` / `assoc_type` are the raw field values (`None` =
    /// field absent). `compat` selects the legacy (1.x) side of the
    /// registry.
    ///
    /// # Errors
    ///
    /// Returns `AssocError::UnsupportedSessionType` for any pairing outside
    /// the matrix — unknown names, a 2.0 name on the legacy side
    /// (`DH-SHA256`, `no-encryption`), a missing name on the 2.0 side, or a
    /// session / MAC algorithm mismatch. Fail closed: there is no default
    /// entry.
    pub fn lookup(
        session_type: Option<&str>,
        assoc_type: Option<&str>,
        compat: bool,
    ) -> Result<Self, AssocError> {
        let resolved = if compat {
            match (session_type, assoc_type) {
                (Some(SESSION_DH_SHA1), None | Some(ASSOC_HMAC_SHA1)) => Some(Self::DH_COMPAT_SHA1),
                (None | Some(""), None | Some(ASSOC_HMAC_SHA1)) => {
                    Some(Self::NO_ENCRYPTION_COMPAT_SHA1MAC)
                }
                _ => None,
            }
        } else {
            match (session_type, assoc_type) {
                (Some(SESSION_DH_SHA1), Some(ASSOC_HMAC_SHA1)) => Some(Self::DH_SHA1),
                (Some(SESSION_DH_SHA256), Some(ASSOC_HMAC_SHA256)) => Some(Self::DH_SHA256),
                (Some(SESSION_NO_ENCRYPTION), Some(ASSOC_HMAC_SHA1)) => {
                    Some(Self::NO_ENCRYPTION_SHA1MAC)
                }
                (Some(SESSION_NO_ENCRYPTION), Some(ASSOC_HMAC_SHA256)) => {
                    Some(Self::NO_ENCRYPTION_SHA256MAC)
                }
                _ => None,
            }
        };

        resolved.ok_or_else(|| {
            AssocError::UnsupportedSessionType(format!(
                "session_type={session_type:?} assoc_type={assoc_type:?} compat={compat}"
            ))
        })
    }

    /// Wire name of the key-agreement algorithm (empty for legacy cleartext).
    pub fn session_type(&self) -> &'static str {
        self.session_type
    }

    /// Wire name of the MAC association algorithm.
    pub fn association_type(&self) -> &'static str {
        self.association_type
    }

    /// Hash algorithm used over the Diffie-Hellman shared secret, or `None`
    /// for cleartext sessions. `Some` means the three `dh_*` wire fields are
    /// mandatory.
    pub fn h_algorithm(&self) -> Option<&'static str> {
        self.h_algorithm
    }

    /// True for OpenID 2.0 entries, false for legacy (1.x) entries.
    pub fn is_version2(&self) -> bool {
        self.version2
    }
}
