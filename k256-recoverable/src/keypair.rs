//! Signing key pairs and recovered public keys.

use crate::{Error, Result, arithmetic::GroupArithmetic};
use core::fmt;
use elliptic_curve::{
    bigint::{Encoding, U512},
    rand_core::CryptoRngCore,
    sec1::ToEncodedPoint,
};
use k256::{FieldBytes, NonZeroScalar, PublicKey, SecretKey};

/// Size of a [`PublicKeyBytes`] value: `x ‖ y`, 32 bytes each.
pub const PUBLIC_KEY_SIZE: usize = 64;

/// Public key in the form compared during recovery: the uncompressed SEC1
/// encoding of the point with its leading `0x04` tag stripped, i.e. the
/// big endian integer `x ‖ y`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PublicKeyBytes([u8; PUBLIC_KEY_SIZE]);

impl PublicKeyBytes {
    /// Wrap raw `x ‖ y` bytes.
    ///
    /// No check is made that the bytes encode a point on the curve; use
    /// [`PublicKey::try_from`] for that.
    pub const fn new(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrow the `x ‖ y` bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Big endian `x`-coordinate.
    pub fn x(&self) -> &[u8] {
        &self.0[..32]
    }

    /// Big endian `y`-coordinate.
    pub fn y(&self) -> &[u8] {
        &self.0[32..]
    }

    /// Interpret the key as a single 512-bit unsigned integer.
    pub fn to_uint(&self) -> U512 {
        U512::from_be_bytes(self.0)
    }
}

impl AsRef<[u8]> for PublicKeyBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PublicKeyBytes(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for PublicKeyBytes {
    fn from(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<&PublicKey> for PublicKeyBytes {
    fn from(public_key: &PublicKey) -> Self {
        let encoded = public_key.to_encoded_point(false);
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(&encoded.as_bytes()[1..]);
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for PublicKeyBytes {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| Error::InvalidPublicKey)
    }
}

impl TryFrom<&PublicKeyBytes> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &PublicKeyBytes) -> Result<PublicKey> {
        let mut sec1 = [0u8; PUBLIC_KEY_SIZE + 1];
        sec1[0] = 0x04;
        sec1[1..].copy_from_slice(&bytes.0);
        PublicKey::from_sec1_bytes(&sec1).map_err(|_| Error::InvalidPublicKey)
    }
}

/// Compute the public key `d·G` for secret scalar `d`.
///
/// Returns `None` for `d = 0`.
pub fn public_key_from_secret<C: GroupArithmetic>(d: &C::Scalar) -> Option<PublicKeyBytes> {
    C::encode_uncompressed(&C::mul(&C::domain().generator, d))
}

/// secp256k1 secret scalar `d` together with its public key `d·G`.
///
/// The secret scalar is zeroized on drop and is never printed.
#[derive(Clone)]
pub struct KeyPair {
    secret_key: SecretKey,
    public_key: PublicKeyBytes,
}

impl KeyPair {
    /// Generate a random key pair.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self::from_secret_key(SecretKey::random(rng))
    }

    /// Parse a 32-byte big endian secret scalar in the range `[1, N-1]`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; 32] = bytes.try_into().map_err(|_| Error::InvalidSecretKey)?;

        SecretKey::from_bytes(&FieldBytes::from(bytes))
            .map(Self::from_secret_key)
            .map_err(|_| Error::InvalidSecretKey)
    }

    /// Derive the key pair for an existing [`SecretKey`].
    pub fn from_secret_key(secret_key: SecretKey) -> Self {
        let public_key = PublicKeyBytes::from(&secret_key.public_key());
        Self {
            secret_key,
            public_key,
        }
    }

    /// Public key `d·G` as `x ‖ y`.
    pub fn public_key(&self) -> &PublicKeyBytes {
        &self.public_key
    }

    /// Borrow the secret key.
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    pub(crate) fn secret_scalar(&self) -> NonZeroScalar {
        self.secret_key.to_nonzero_scalar()
    }
}

impl From<NonZeroScalar> for KeyPair {
    fn from(scalar: NonZeroScalar) -> Self {
        Self::from_secret_key(SecretKey::from(scalar))
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyPair, PublicKeyBytes, public_key_from_secret};
    use crate::{Error, test_vectors::SIGNING_KEY};
    use elliptic_curve::{PrimeField, bigint::U512};
    use hex_literal::hex;
    use k256::{NonZeroScalar, PublicKey, Scalar, Secp256k1};

    #[test]
    fn derives_public_key() {
        let key_pair = KeyPair::from_bytes(&SIGNING_KEY.d).unwrap();
        assert_eq!(key_pair.public_key().as_bytes(), &SIGNING_KEY.public_key);
        assert_eq!(key_pair.public_key().x(), &SIGNING_KEY.public_key[..32]);
        assert_eq!(key_pair.public_key().y(), &SIGNING_KEY.public_key[32..]);
    }

    #[test]
    fn generic_derivation_agrees() {
        let d = Scalar::from_repr(SIGNING_KEY.d.into()).unwrap();
        assert_eq!(
            public_key_from_secret::<Secp256k1>(&d),
            Some(PublicKeyBytes::new(SIGNING_KEY.public_key))
        );
        assert_eq!(public_key_from_secret::<Secp256k1>(&Scalar::ZERO), None);
    }

    #[test]
    fn one_times_generator() {
        let key_pair = KeyPair::from(NonZeroScalar::new(Scalar::ONE).unwrap());
        assert_eq!(
            key_pair.public_key().as_bytes(),
            &hex!(
                "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
                "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
            )
        );
    }

    #[test]
    fn rejects_out_of_range_scalars() {
        assert_eq!(
            KeyPair::from_bytes(&[0u8; 32]).unwrap_err(),
            Error::InvalidSecretKey
        );
        let order = hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
        assert_eq!(
            KeyPair::from_bytes(&order).unwrap_err(),
            Error::InvalidSecretKey
        );
        assert_eq!(
            KeyPair::from_bytes(&SIGNING_KEY.d[1..]).unwrap_err(),
            Error::InvalidSecretKey
        );
        assert_eq!(
            KeyPair::from_bytes(&[1u8; 33]).unwrap_err(),
            Error::InvalidSecretKey
        );
    }

    #[test]
    fn debug_hides_secret() {
        let key_pair = KeyPair::from_bytes(&SIGNING_KEY.d).unwrap();
        let debug = std::format!("{key_pair:?}");
        assert!(debug.contains("411dbd69"));
        assert!(!debug.contains("bb488aef"));
    }

    #[test]
    fn uint_is_big_endian_concatenation() {
        let mut bytes = [0u8; 64];
        bytes[63] = 7;
        bytes[31] = 1;
        let expected = U512::from_u64(7).wrapping_add(&U512::ONE.shl_vartime(256));
        assert_eq!(PublicKeyBytes::new(bytes).to_uint(), expected);
    }

    #[test]
    fn converts_to_curve_point() {
        let public_key = PublicKeyBytes::new(SIGNING_KEY.public_key);
        let point = PublicKey::try_from(&public_key).unwrap();
        assert_eq!(PublicKeyBytes::from(&point), public_key);

        let mut off_curve = SIGNING_KEY.public_key;
        off_curve[63] ^= 1;
        assert_eq!(
            PublicKey::try_from(&PublicKeyBytes::new(off_curve)).unwrap_err(),
            Error::InvalidPublicKey
        );
    }
}
