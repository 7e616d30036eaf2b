//! Error types.

/// Result type with the `k256-recoverable` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by signing and public key recovery.
///
/// A recovery which simply yields no candidate key (e.g. `r` is not the
/// abscissa of a curve point) is *not* an error: it is reported as
/// `Ok(None)` by the recovery functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Recovery ID outside of `{0, 1}`.
    #[error("invalid recovery id {0}: must be 0 or 1")]
    InvalidRecoveryId(u8),

    /// Digest (or unhashed message) is not exactly [`DIGEST_SIZE`](crate::DIGEST_SIZE) bytes.
    #[error("digest must be 32 bytes, got {actual}")]
    InvalidDigestLength {
        /// Length of the rejected input.
        actual: usize,
    },

    /// `r` is a multiple of the group order and has no inverse.
    #[error("r must be invertible modulo the group order")]
    NonInvertibleR,

    /// Secret scalar is not in `[1, N-1]` or not 32 bytes.
    #[error("secret scalar must be 32 bytes in the range [1, N-1]")]
    InvalidSecretKey,

    /// Bytes do not encode a point on the curve.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// Serialized signature is not 65 bytes.
    #[error("recoverable signature must be 65 bytes, got {0}")]
    InvalidSignatureLength(usize),

    /// `r` or `s` is zero or not reduced modulo the group order.
    #[error("signature scalar out of range")]
    InvalidScalar,

    /// No attempt produced a signature from which the signer's key could be
    /// recovered.
    #[error("no recoverable signature found after {attempts} attempts")]
    AttemptsExhausted {
        /// Number of raw signing attempts made.
        attempts: u32,
    },

    /// Every attempt recovered a valid key, but never the signer's.
    ///
    /// Re-signing cannot fix this: the key pair is inconsistent or the
    /// arithmetic backend is broken.
    #[error("recovered keys never matched the signer's public key in {attempts} attempts")]
    KeyMismatch {
        /// Number of raw signing attempts made.
        attempts: u32,
    },
}

impl Error {
    /// Is this error caused by an invalid argument supplied by the caller?
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(
            self,
            Self::AttemptsExhausted { .. } | Self::KeyMismatch { .. }
        )
    }
}

impl From<Error> for signature::Error {
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}
