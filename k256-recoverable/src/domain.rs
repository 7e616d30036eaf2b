//! Elliptic curve domain parameters.

use elliptic_curve::{Curve, bigint::U256};
use k256::{ProjectivePoint, Secp256k1};

/// Domain parameters of a short Weierstrass curve of prime order.
///
/// Values of this type are compile-time constants: they are never mutated
/// and can be shared across threads freely.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CurveDomain<P> {
    /// Base point `G`.
    pub generator: P,

    /// Order `N` of the subgroup generated by `G`.
    pub order: U256,

    /// Prime `q` of the base field the point coordinates live in.
    pub field_modulus: U256,

    /// Cofactor `H`.
    pub cofactor: u8,
}

/// Field modulus `q = 2^256 - 2^32 - 977` of secp256k1.
const SECP256K1_FIELD_MODULUS: U256 =
    U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

/// secp256k1 as specified in SEC 2: Recommended Elliptic Curve Domain
/// Parameters, section 2.4.1.
pub static SECP256K1: CurveDomain<ProjectivePoint> = CurveDomain {
    generator: ProjectivePoint::GENERATOR,
    order: <Secp256k1 as Curve>::ORDER,
    field_modulus: SECP256K1_FIELD_MODULUS,
    cofactor: 1,
};
