//! Error types for assoc-core.
//!
//! Two error kinds surface from the construction factories:
//! `InvalidCombination` before assembly completes (the caller-supplied
//! session type and Diffie-Hellman session disagree) and
//! `MalformedParameters` after assembly or parse (the validation predicate
//! rejected the field set). Registry lookup failures are
//! `UnsupportedSessionType`; [`AssociationRequest::is_valid`] folds them into
//! plain `false` rather than propagating — an unrecognized algorithm name is
//! an invalid message, not a crash.
//!
//! [`AssociationRequest::is_valid`]: crate::assoc_request::AssociationRequest::is_valid

/// Unified error type for all assoc-core operations.
#[derive(Debug, thiserror::Error)]
pub enum AssocError {
    /// Caller-supplied session type and Diffie-Hellman session are mutually
    /// inconsistent. Raised before message assembly is trusted.
    #[error("invalid association / session combination: {0}")]
    InvalidCombination(String),

    /// The assembled or parsed field set failed the validation predicate.
    #[error("invalid set of parameters for the requested message type: {0}")]
    MalformedParameters(String),

    /// No registry entry for the given session / association algorithm pair
    /// in the given compatibility mode.
    #[error("unsupported association session type: {0}")]
    UnsupportedSessionType(String),

    /// Encoding error (base64, key-value form).
    #[error("encoding error: {0}")]
    Encoding(String),
}
