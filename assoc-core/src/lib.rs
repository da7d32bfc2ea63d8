//! Association protocol core for OpenID relying parties and providers.
//!
//! This crate owns one message type end to end: the association request a
//! relying party sends to an identity provider to establish a shared MAC
//! key (OpenID Authentication 2.0 §8, plus the 1.x compatibility profile).
//! The hard part is not the field plumbing — it is the compatibility matrix
//! between the two protocol generations layered on the optional
//! Diffie-Hellman key-agreement session with its no-encryption fallback.
//! Transport, persistence, and the key-agreement arithmetic itself live in
//! other crates.
//!
//! # Module Map
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`constants`] | Wire field keys, namespace URI, algorithm names |
//! | [`errors`] | [`AssocError`](errors::AssocError) |
//! | [`params`] | Ordered field-set storage, key-value text form |
//! | [`session_type`] | Session / association algorithm registry |
//! | [`dh`] | Diffie-Hellman session value object |
//! | [`assoc_request`] | The association request message itself |
//! | [`vectors`] | Golden request vectors (test-only, feature `vectors`) |

/// Protocol constants — wire-exact field keys and values.
pub mod constants;

/// Error types for assoc-core operations.
pub mod errors;

/// Ordered field-set storage and the key-value text form.
pub mod params;

/// Association session type registry.
pub mod session_type;

/// Diffie-Hellman session value object.
pub mod dh;

/// The association request message.
pub mod assoc_request;

/// Deterministic golden request vectors (test use only).
/// Requires the `vectors` feature: `cargo test --features vectors`.
#[cfg(feature = "vectors")]
pub mod vectors;

pub use assoc_request::AssociationRequest;
pub use dh::DhSession;
pub use errors::AssocError;
pub use params::ParameterList;
pub use session_type::AssociationSessionType;
