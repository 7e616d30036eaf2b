//! Group operations used by signing and recovery.
//!
//! Signing and recovery are written against [`GroupArithmetic`] rather than
//! a concrete curve implementation. The only implementation shipped is the
//! one for [`Secp256k1`], backed by the constant-time arithmetic in `k256`.

use crate::{PublicKeyBytes, domain::CurveDomain};
use elliptic_curve::{
    PrimeField,
    bigint::U256,
    group::Group,
    ops::{LinearCombination, Reduce},
    point::{AffineCoordinates, DecompressPoint},
    sec1::ToEncodedPoint,
    subtle::Choice,
    zeroize::Zeroize,
};
use k256::{AffinePoint, FieldBytes, ProjectivePoint, Scalar, Secp256k1};

/// Elliptic curve group operations over a 256-bit prime order curve.
///
/// Implementations are trusted to be correct: none of these operations
/// report errors other than the documented `None` results.
pub trait GroupArithmetic {
    /// Curve point.
    type Point: Copy + PartialEq + core::fmt::Debug + 'static;

    /// Integer modulo the group order `N`.
    type Scalar: PrimeField<Repr = FieldBytes> + Reduce<U256, Bytes = FieldBytes> + Zeroize;

    /// Domain parameters of the curve.
    fn domain() -> &'static CurveDomain<Self::Point>;

    /// Point addition: `a + b`.
    fn add(a: &Self::Point, b: &Self::Point) -> Self::Point;

    /// Scalar multiplication: `k·p`.
    fn mul(point: &Self::Point, k: &Self::Scalar) -> Self::Point;

    /// Sum of two multiplies: `k·p + l·q`.
    fn lincomb(
        p: &Self::Point,
        k: &Self::Scalar,
        q: &Self::Point,
        l: &Self::Scalar,
    ) -> Self::Point;

    /// Is this the point at infinity?
    fn is_identity(point: &Self::Point) -> bool;

    /// Big endian affine `x`-coordinate, or `None` for the point at infinity.
    fn x_coordinate(point: &Self::Point) -> Option<FieldBytes>;

    /// Uncompressed SEC1 encoding with the leading `0x04` tag removed, or
    /// `None` for the point at infinity.
    fn encode_uncompressed(point: &Self::Point) -> Option<PublicKeyBytes>;

    /// Decode the point with the given `x`-coordinate and `y` parity.
    ///
    /// Returns `None` if `x` is not reduced modulo the field prime, or if
    /// it isn't the `x`-coordinate of any point on the curve.
    fn decompress(x: &FieldBytes, y_is_odd: bool) -> Option<Self::Point>;
}

impl GroupArithmetic for Secp256k1 {
    type Point = ProjectivePoint;
    type Scalar = Scalar;

    fn domain() -> &'static CurveDomain<ProjectivePoint> {
        &crate::domain::SECP256K1
    }

    fn add(a: &ProjectivePoint, b: &ProjectivePoint) -> ProjectivePoint {
        a + b
    }

    fn mul(point: &ProjectivePoint, k: &Scalar) -> ProjectivePoint {
        point * k
    }

    fn lincomb(
        p: &ProjectivePoint,
        k: &Scalar,
        q: &ProjectivePoint,
        l: &Scalar,
    ) -> ProjectivePoint {
        ProjectivePoint::lincomb(p, k, q, l)
    }

    fn is_identity(point: &ProjectivePoint) -> bool {
        point.is_identity().into()
    }

    fn x_coordinate(point: &ProjectivePoint) -> Option<FieldBytes> {
        if Self::is_identity(point) {
            return None;
        }

        Some(point.to_affine().x())
    }

    fn encode_uncompressed(point: &ProjectivePoint) -> Option<PublicKeyBytes> {
        if Self::is_identity(point) {
            return None;
        }

        let encoded = point.to_affine().to_encoded_point(false);
        PublicKeyBytes::try_from(&encoded.as_bytes()[1..]).ok()
    }

    fn decompress(x: &FieldBytes, y_is_odd: bool) -> Option<ProjectivePoint> {
        Option::<AffinePoint>::from(AffinePoint::decompress(x, Choice::from(u8::from(y_is_odd))))
            .map(ProjectivePoint::from)
    }
}

#[cfg(test)]
mod tests {
    use super::GroupArithmetic;
    use elliptic_curve::PrimeField;
    use hex_literal::hex;
    use k256::{FieldBytes, ProjectivePoint, Scalar, Secp256k1};

    const G_X: [u8; 32] = hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
    const G_Y: [u8; 32] = hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");

    fn g() -> ProjectivePoint {
        Secp256k1::domain().generator
    }

    fn encoded_generator<C: GroupArithmetic>() -> Option<crate::PublicKeyBytes> {
        let domain: &'static _ = C::domain();
        C::encode_uncompressed(&domain.generator)
    }

    #[test]
    fn domain_is_reachable_generically() {
        let encoded = encoded_generator::<Secp256k1>().unwrap();
        assert_eq!(encoded.x(), &G_X);
    }

    #[test]
    fn encode_generator() {
        let encoded = Secp256k1::encode_uncompressed(&g()).unwrap();
        assert_eq!(encoded.x(), &G_X);
        assert_eq!(encoded.y(), &G_Y);
        assert_eq!(Secp256k1::x_coordinate(&g()).unwrap(), FieldBytes::from(G_X));
    }

    #[test]
    fn identity_has_no_encoding() {
        let identity = ProjectivePoint::IDENTITY;
        assert!(Secp256k1::is_identity(&identity));
        assert!(Secp256k1::encode_uncompressed(&identity).is_none());
        assert!(Secp256k1::x_coordinate(&identity).is_none());
    }

    #[test]
    fn decompress_selects_parity() {
        let x = FieldBytes::from(G_X);
        // The generator's y-coordinate is even
        assert_eq!(Secp256k1::decompress(&x, false), Some(g()));
        assert_eq!(Secp256k1::decompress(&x, true), Some(-g()));
    }

    #[test]
    fn decompress_rejects_invalid_x() {
        // No point on secp256k1 has x = 0
        assert!(Secp256k1::decompress(&FieldBytes::default(), false).is_none());

        // The field prime itself is not a canonical field element
        let p = hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
        assert!(Secp256k1::decompress(&p.into(), false).is_none());
    }

    #[test]
    fn lincomb_matches_separate_multiplications() {
        let k = Scalar::from(1234567u64);
        let l = Scalar::from(7654321u64);
        let q = Secp256k1::mul(&g(), &Scalar::from(42u64));

        let expected = Secp256k1::add(&Secp256k1::mul(&g(), &k), &Secp256k1::mul(&q, &l));
        assert_eq!(Secp256k1::lincomb(&g(), &k, &q, &l), expected);
    }

    #[test]
    fn order_annihilates_generator() {
        // N·G = (N - 1)·G + G
        let minus_one = -Scalar::ONE;
        let n_g = Secp256k1::add(&Secp256k1::mul(&g(), &minus_one), &g());
        assert!(Secp256k1::is_identity(&n_g));
    }

    #[test]
    fn scalar_repr_is_big_endian() {
        let one = Scalar::ONE.to_repr();
        assert_eq!(one[31], 1);
        assert!(one[..31].iter().all(|&b| b == 0));
    }
}
