//! Recoverable signatures: `r ‖ s ‖ v`.

use crate::{
    Error, PublicKeyBytes, Result,
    recovery::{RecoveryId, recover_public_key},
    sign::RawSignature,
};
use core::fmt;
use elliptic_curve::{
    PrimeField,
    bigint::{Encoding, U256},
};
use k256::{FieldBytes, Secp256k1};

/// Size of a serialized [`SignatureData`] in bytes.
pub const SIZE: usize = 65;

/// Recoverable ECDSA/secp256k1 signature.
///
/// Serialized as 65 bytes:
///
/// - `r`: 32-byte integer, big endian, zero padded
/// - `s`: 32-byte integer, big endian, zero padded
/// - `v`: 1-byte [`RecoveryId`], `0` or `1` with no chain-specific offset
///
/// `s` is not normalized to the lower half of the group order.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SignatureData {
    v: RecoveryId,
    r: [u8; 32],
    s: [u8; 32],
}

impl SignatureData {
    /// Create a signature from its components.
    ///
    /// This is an "unchecked" conversion: no check is made that `v` recovers
    /// the intended key.
    pub fn new(v: RecoveryId, r: [u8; 32], s: [u8; 32]) -> Self {
        Self { v, r, s }
    }

    /// Package a raw signature with the recovery ID that recovers the
    /// signer's key.
    pub fn from_raw<S>(v: RecoveryId, raw: &RawSignature<S>) -> Self
    where
        S: PrimeField<Repr = FieldBytes>,
    {
        Self {
            v,
            r: raw.r_uint().to_be_bytes(),
            s: raw.s_uint().to_be_bytes(),
        }
    }

    /// Recovery ID.
    pub fn v(&self) -> RecoveryId {
        self.v
    }

    /// Big endian `r` component.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// Big endian `s` component.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// `r` as an integer.
    pub fn r_uint(&self) -> U256 {
        U256::from_be_bytes(self.r)
    }

    /// `s` as an integer.
    pub fn s_uint(&self) -> U256 {
        U256::from_be_bytes(self.s)
    }

    /// Serialize as `r ‖ s ‖ v`.
    pub fn to_bytes(&self) -> [u8; SIZE] {
        let mut bytes = [0u8; SIZE];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..64].copy_from_slice(&self.s);
        bytes[64] = self.v.into();
        bytes
    }

    /// Recover the public key which produced this signature over the
    /// 32-byte `digest`.
    pub fn recover_public_key(&self, digest: &[u8]) -> Result<Option<PublicKeyBytes>> {
        recover_public_key(self.v.into(), &self.r_uint(), &self.s_uint(), digest)
    }

    /// Convert to the `ecdsa` crate's signature and recovery ID types.
    ///
    /// Fails if `r` or `s` is zero or not reduced modulo the group order.
    pub fn to_ecdsa(
        &self,
    ) -> Result<(ecdsa_core::Signature<Secp256k1>, ecdsa_core::RecoveryId)> {
        let signature = ecdsa_core::Signature::<Secp256k1>::from_scalars(
            FieldBytes::from(self.r),
            FieldBytes::from(self.s),
        )
        .map_err(|_| Error::InvalidScalar)?;

        Ok((signature, self.v.into()))
    }
}

impl fmt::Debug for SignatureData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignatureData {{ v: {}, r: ", u8::from(self.v))?;
        for byte in &self.r {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(", s: ")?;
        for byte in &self.s {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(" }")
    }
}

impl TryFrom<&[u8]> for SignatureData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; SIZE] = bytes
            .try_into()
            .map_err(|_| Error::InvalidSignatureLength(bytes.len()))?;
        Self::try_from(bytes)
    }
}

impl TryFrom<&[u8; SIZE]> for SignatureData {
    type Error = Error;

    fn try_from(bytes: &[u8; SIZE]) -> Result<Self> {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self::new(RecoveryId::new(bytes[64])?, r, s))
    }
}

impl TryFrom<[u8; SIZE]> for SignatureData {
    type Error = Error;

    fn try_from(bytes: [u8; SIZE]) -> Result<Self> {
        Self::try_from(&bytes)
    }
}

impl From<SignatureData> for [u8; SIZE] {
    fn from(signature: SignatureData) -> [u8; SIZE] {
        signature.to_bytes()
    }
}

impl signature::SignatureEncoding for SignatureData {
    type Repr = [u8; SIZE];
}
