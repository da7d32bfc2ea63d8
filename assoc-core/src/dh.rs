//! Diffie-Hellman session value.
//!
//! Carries the base64-encoded key-agreement parameters copied into an
//! association request: modulus, generator, and the relying party's public
//! key, together with the session-type identity the parameters were
//! generated for. No modular arithmetic happens here — parameter generation
//! and the shared-secret computation belong to the crypto layer that
//! produced the values. This crate only guarantees the strings are
//! well-formed base64 and that the session type actually encrypts the MAC
//! key exchange.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::errors::AssocError;
use crate::session_type::AssociationSessionType;

/// Well-known default 1024-bit DH modulus (base64, big-endian two's
/// complement), shared by OpenID 1.x and 2.0.
pub const DEFAULT_MODULUS_BASE64: &str =
    "ANz5OguIOXLsDhmYmsWizjEOHTdxfo2Vcbt2I3MYZuYe91ouJ4mLBX+YkcLiemOcPym2CBRYHNOyyjmG0mg3BVd9\
     RcLn5S3IHHoXGHblzqdLFEi/368Ygo79JRnxTkXjgmY0rxlJ5bU1zIKaSDuKdiI+XUkKJX8Fvf8W8vsixYOr";

/// Default DH generator (the value 2), base64-encoded.
pub const DEFAULT_GENERATOR_BASE64: &str = "Ag==";

/// An established Diffie-Hellman session, ready to be attached to an
/// association request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhSession {
    session_type: AssociationSessionType,
    modulus: String,
    generator: String,
    public_key: String,
}

impl DhSession {
    /// Wraps already-encoded parameters.
    ///
    /// # Errors
    ///
    /// - `AssocError::InvalidCombination` if `session_type` is a cleartext
    ///   (no-encryption) entry — those sessions carry no DH parameters;
    /// - `AssocError::Encoding` if any parameter is not valid base64.
    pub fn new(
        session_type: AssociationSessionType,
        modulus: String,
        generator: String,
        public_key: String,
    ) -> Result<Self, AssocError> {
        if session_type.h_algorithm().is_none() {
            return Err(AssocError::InvalidCombination(format!(
                "no-encryption session type {:?} cannot carry Diffie-Hellman parameters",
                session_type.session_type()
            )));
        }
        for (field, value) in [
            ("dh_modulus", &modulus),
            ("dh_gen", &generator),
            ("dh_consumer_public", &public_key),
        ] {
            STANDARD
                .decode(value)
                .map_err(|e| AssocError::Encoding(format!("invalid base64 in {field}: {e}")))?;
        }
        Ok(Self {
            session_type,
            modulus,
            generator,
            public_key,
        })
    }

    /// Encodes raw big-endian parameter bytes and wraps them.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`] for the session-type check; the encoding step
    /// itself cannot fail.
    pub fn from_raw(
        session_type: AssociationSessionType,
        modulus: &[u8],
        generator: &[u8],
        public_key: &[u8],
    ) -> Result<Self, AssocError> {
        Self::new(
            session_type,
            STANDARD.encode(modulus),
            STANDARD.encode(generator),
            STANDARD.encode(public_key),
        )
    }

    /// The session type these parameters were generated for.
    pub fn session_type(&self) -> AssociationSessionType {
        self.session_type
    }

    /// Base64 modulus.
    pub fn modulus(&self) -> &str {
        &self.modulus
    }

    /// Base64 generator.
    pub fn generator(&self) -> &str {
        &self.generator
    }

    /// Base64 relying-party public key.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}
