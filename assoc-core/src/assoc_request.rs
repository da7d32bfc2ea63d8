//! The association request message.
//!
//! An association request is how a relying party asks an identity provider
//! for a shared MAC key before any assertions flow. The message exists in
//! two protocol generations (2.0 carries `openid.ns`, legacy 1.x has no
//! namespace field) and in two encryption modes (Diffie-Hellman key
//! agreement with the three `dh_*` fields, or cleartext). The wire format
//! encodes generation and encryption mode redundantly: namespace presence,
//! algorithm names, and `dh_*` field presence must all agree, and
//! [`AssociationRequest::is_valid`] enforces exactly that agreement.
//!
//! Two construction paths:
//! - [`AssociationRequest::build`] assembles an outgoing request from a
//!   session type plus optional [`DhSession`];
//! - [`AssociationRequest::from_parameters`] wraps a field set received from
//!   the transport layer.
//!
//! Both are factories in the two-step shape: pure assembly (or wrapping)
//! first, then the validation predicate; a message that fails validation is
//! never handed to the caller.

use crate::constants::{
    FIELD_ASSOC_TYPE, FIELD_DH_CONSUMER_PUBLIC, FIELD_DH_GEN, FIELD_DH_MODULUS, FIELD_MODE,
    FIELD_NS, FIELD_SESSION_TYPE, MODE_ASSOC, OPENID2_NS,
};
use crate::dh::DhSession;
use crate::errors::AssocError;
use crate::params::ParameterList;
use crate::session_type::AssociationSessionType;

/// Fields that must be present in every association request, both
/// generations.
///
/// `openid.session_type` is required even in legacy requests: 1.x providers
/// expect the key to be present with an empty value for cleartext sessions.
/// True absence of the key is rejected.
pub const REQUIRED_FIELDS: [&str; 2] = [FIELD_MODE, FIELD_SESSION_TYPE];

/// Fields whose presence depends on protocol generation and session type.
pub const OPTIONAL_FIELDS: [&str; 5] = [
    FIELD_NS,
    FIELD_ASSOC_TYPE,
    FIELD_DH_MODULUS,
    FIELD_DH_GEN,
    FIELD_DH_CONSUMER_PUBLIC,
];

/// An association request message.
///
/// Immutable once constructed; build a new instance for a new association
/// attempt. Safe to share read-only across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationRequest {
    params: ParameterList,
    /// Owned by this message. `None` for no-encryption associations and for
    /// every parsed (incoming) message — receivers reconstruct the DH state
    /// separately.
    dh_session: Option<DhSession>,
}

impl AssociationRequest {
    /// Pure assembly — populates the field set, no validation.
    fn assemble(session_type: AssociationSessionType, dh_session: Option<DhSession>) -> Self {
        let mut params = ParameterList::new();

        if session_type.is_version2() {
            params.set(FIELD_NS, OPENID2_NS);
        }
        params.set(FIELD_MODE, MODE_ASSOC);
        params.set(FIELD_SESSION_TYPE, session_type.session_type());
        params.set(FIELD_ASSOC_TYPE, session_type.association_type());

        if let Some(dh) = &dh_session {
            params.set(FIELD_DH_MODULUS, dh.modulus());
            params.set(FIELD_DH_GEN, dh.generator());
            params.set(FIELD_DH_CONSUMER_PUBLIC, dh.public_key());
        }

        Self { params, dh_session }
    }

    /// Builds an outgoing association request.
    ///
    /// Pass `None` for cleartext (no-encryption) session types; session
    /// types with a key-agreement hash algorithm require an established
    /// [`DhSession`] whose own type identity equals `session_type`.
    ///
    /// # Errors
    ///
    /// - `AssocError::InvalidCombination` when the session type and DH
    ///   session disagree (missing session for an encrypted type, or a
    ///   session generated for a different type);
    /// - `AssocError::MalformedParameters` when the assembled field set
    ///   fails [`Self::is_valid`].
    pub fn build(
        session_type: AssociationSessionType,
        dh_session: Option<DhSession>,
    ) -> Result<Self, AssocError> {
        match &dh_session {
            None if session_type.h_algorithm().is_some() => {
                return Err(AssocError::InvalidCombination(format!(
                    "session type {:?} requires a Diffie-Hellman session",
                    session_type.session_type()
                )));
            }
            Some(dh) if dh.session_type() != session_type => {
                return Err(AssocError::InvalidCombination(format!(
                    "Diffie-Hellman session was established for {:?}, request declares {:?}",
                    dh.session_type().session_type(),
                    session_type.session_type()
                )));
            }
            _ => {}
        }

        let req = Self::assemble(session_type, dh_session);
        if !req.is_valid() {
            return Err(AssocError::MalformedParameters(
                "assembled association request failed validation".into(),
            ));
        }
        Ok(req)
    }

    /// Wraps a field set received from the transport layer.
    ///
    /// No [`DhSession`] reference is populated — the provider reconstructs
    /// key-agreement state from the `dh_*` fields at a layer above this
    /// crate.
    ///
    /// # Errors
    ///
    /// `AssocError::MalformedParameters` when the field set fails
    /// [`Self::is_valid`].
    pub fn from_parameters(params: ParameterList) -> Result<Self, AssocError> {
        let req = Self {
            params,
            dh_session: None,
        };
        if !req.is_valid() {
            return Err(AssocError::MalformedParameters(
                "received field set is not a valid association request".into(),
            ));
        }
        Ok(req)
    }

    /// The validation predicate: true iff the current field set is a valid
    /// association request for its declared protocol generation.
    ///
    /// Pure and non-panicking; never errors for malformed input — an
    /// unrecognized algorithm name, like a registry lookup failure, degrades
    /// to `false` (fail closed). Checks run cheapest-first and
    /// short-circuit:
    ///
    /// 1. required fields present;
    /// 2. generation = `openid.ns` presence (and exact namespace value);
    /// 3. registry lookup of the declared algorithm names under that
    ///    generation;
    /// 4. the resolved entry's generation must match the declared one;
    /// 5. legacy requests must carry the `openid.session_type` key (empty
    ///    value allowed, absence not);
    /// 6. `dh_*` fields all present for key-agreement types, all absent for
    ///    cleartext types — partial sets are always invalid.
    pub fn is_valid(&self) -> bool {
        if !self.has_required_fields() {
            return false;
        }

        let version2 = self.is_version2();

        let session_type = match self.resolve_type() {
            Ok(t) => t,
            Err(_) => return false,
        };

        if session_type.is_version2() != version2 {
            return false;
        }

        // Kept independent of REQUIRED_FIELDS: legacy handling must not
        // hinge on the declared-field lists.
        if !version2 && !self.params.has(FIELD_SESSION_TYPE) {
            return false;
        }

        let dh_fields = [FIELD_DH_GEN, FIELD_DH_MODULUS, FIELD_DH_CONSUMER_PUBLIC];
        if session_type.h_algorithm().is_some() {
            dh_fields.iter().all(|field| self.params.has(field))
        } else {
            dh_fields.iter().all(|field| !self.params.has(field))
        }
    }

    fn has_required_fields(&self) -> bool {
        REQUIRED_FIELDS.iter().all(|field| self.params.has(field))
    }

    /// True for OpenID 2.0 messages (namespace field present with the exact
    /// 2.0 URI), false otherwise.
    pub fn is_version2(&self) -> bool {
        self.params.get(FIELD_NS) == Some(OPENID2_NS)
    }

    /// Resolves the declared algorithm names against the session-type
    /// registry under this message's protocol generation.
    ///
    /// # Errors
    ///
    /// `AssocError::UnsupportedSessionType` when the declared pairing has no
    /// registry entry.
    pub fn resolve_type(&self) -> Result<AssociationSessionType, AssocError> {
        AssociationSessionType::lookup(
            self.session_type_param(),
            self.assoc_type_param(),
            !self.is_version2(),
        )
    }

    fn session_type_param(&self) -> Option<&str> {
        self.params.get(FIELD_SESSION_TYPE)
    }

    fn assoc_type_param(&self) -> Option<&str> {
        self.params.get(FIELD_ASSOC_TYPE)
    }

    // ── Field accessors ─────────────────────────────────────────

    /// The `openid.mode` value.
    pub fn mode(&self) -> Option<&str> {
        self.params.get(FIELD_MODE)
    }

    /// DH modulus field, `None` for no-encryption requests.
    pub fn dh_modulus(&self) -> Option<&str> {
        self.params.get(FIELD_DH_MODULUS)
    }

    /// DH generator field, `None` for no-encryption requests.
    pub fn dh_gen(&self) -> Option<&str> {
        self.params.get(FIELD_DH_GEN)
    }

    /// Relying party's DH public key field, `None` for no-encryption
    /// requests.
    pub fn dh_consumer_public(&self) -> Option<&str> {
        self.params.get(FIELD_DH_CONSUMER_PUBLIC)
    }

    /// The Diffie-Hellman session this message was built with. `None` for
    /// no-encryption requests and for parsed incoming messages.
    pub fn dh_session(&self) -> Option<&DhSession> {
        self.dh_session.as_ref()
    }

    /// The wire field set, in serialization order.
    pub fn params(&self) -> &ParameterList {
        &self.params
    }

    /// Consumes the message, yielding its field set.
    pub fn into_parameters(self) -> ParameterList {
        self.params
    }
}
