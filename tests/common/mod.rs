//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use crypto_monty::{Limb, Odd, Uint, WideUint};
use num_bigint::BigUint;

/// `Uint` to `num_bigint::BigUint`
pub fn to_biguint<T>(uint: &T) -> BigUint
where
    T: AsRef<[Limb]>,
{
    let mut bytes = Vec::with_capacity(uint.as_ref().len() * Limb::BYTES);

    for limb in uint.as_ref() {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }

    BigUint::from_bytes_le(&bytes)
}

/// `WideUint` to `num_bigint::BigUint`
pub fn wide_to_biguint<const LIMBS: usize>(wide: &WideUint<LIMBS>) -> BigUint {
    let (lo, hi) = wide.split();
    (to_biguint(&hi) << Uint::<LIMBS>::BITS as usize) + to_biguint(&lo)
}

/// `num_bigint::BigUint` to `Uint`, truncating to `LIMBS` limbs.
pub fn from_biguint<const LIMBS: usize>(big_uint: &BigUint) -> Uint<LIMBS> {
    let mut input = vec![0u8; Uint::<LIMBS>::BYTES];
    let encoded = big_uint.to_bytes_le();
    let l = encoded.len().min(Uint::<LIMBS>::BYTES);
    input[..l].copy_from_slice(&encoded[..l]);

    Uint::from_le_slice(&input)
}

/// `num_bigint::BigUint` to `WideUint`, truncating to `2 * LIMBS` limbs.
pub fn wide_from_biguint<const LIMBS: usize>(big_uint: &BigUint) -> WideUint<LIMBS> {
    let lo = from_biguint(big_uint);
    let hi = from_biguint(&(big_uint >> Uint::<LIMBS>::BITS as usize));
    WideUint::new(lo, hi)
}

/// `R = 2^(LIMBS * Limb::BITS)` as a `BigUint`.
pub fn montgomery_r<const LIMBS: usize>() -> BigUint {
    BigUint::from(1u8) << Uint::<LIMBS>::BITS as usize
}

/// Reference Montgomery reduction: `t * R^-1 mod m`.
pub fn reference_reduce<const LIMBS: usize>(t: &BigUint, modulus: &Odd<Uint<LIMBS>>) -> BigUint {
    let m = to_biguint(modulus);
    let r_inv = montgomery_r::<LIMBS>()
        .modinv(&m)
        .expect("odd modulus is coprime to R");
    (t * r_inv) % m
}

/// Curve moduli exercised by the randomized trials, as `(name, big endian hex)`.
pub const CURVES_256: &[(&str, &str)] = &[
    (
        "bn254 base",
        "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47",
    ),
    (
        "bn254 scalar",
        "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001",
    ),
    (
        "bls12-381 scalar",
        "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
    ),
    (
        "pallas base",
        "40000000000000000000000000000000224698fc094cf91b992d30ed00000001",
    ),
    (
        "vesta base",
        "40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001",
    ),
    (
        "secp256k1 base",
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    ),
    (
        "p-256 base",
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    ),
    (
        "p-256 order",
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    ),
];

/// BLS12-381 base field modulus (381 bits, six 64-bit limbs).
pub const BLS12_381_BASE: &str = "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";
