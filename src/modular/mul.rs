//! Montgomery multiplication and squaring entry points.

use super::{
    cios::{mul_montgomery_cios, mul_montgomery_cios_sparebit},
    reduction::{montgomery_reduction, montgomery_reduction_lazy},
};
use crate::{Limb, Odd, Uint};

#[cfg(all(
    feature = "adx",
    target_arch = "x86_64",
    target_pointer_width = "64",
    target_feature = "adx",
    target_feature = "bmi2"
))]
use super::x86_64::mul_montgomery_adx as mul_montgomery_impl;

#[cfg(not(all(
    feature = "adx",
    target_arch = "x86_64",
    target_pointer_width = "64",
    target_feature = "adx",
    target_feature = "bmi2"
)))]
use self::mul_montgomery_portable as mul_montgomery_impl;

/// Computes `a * b * R^-1 mod modulus` where `R = 2^(LIMBS * Limb::BITS)`.
///
/// `a` and `b` must be reduced and `spare_bits` must not exceed `modulus.spare_bits()`. With
/// `skip_final_sub` and at least one spare bit the result is left in `[0, 2 * modulus)`;
/// otherwise it is fully reduced.
///
/// Uses the ADX/BMI2 kernel when the `adx` feature is enabled and the target supports it, and
/// [`mul_montgomery_portable`] otherwise.
#[inline]
pub fn mul_montgomery<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    b: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    mod_neg_inv: Limb,
    spare_bits: u32,
    skip_final_sub: bool,
) -> Uint<LIMBS> {
    mul_montgomery_impl(a, b, modulus, mod_neg_inv, spare_bits, skip_final_sub)
}

/// Portable `const fn` version of [`mul_montgomery`].
///
/// Picks the spare-bit CIOS kernel when `spare_bits >= 1` and the general CIOS kernel otherwise.
pub const fn mul_montgomery_portable<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    b: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    mod_neg_inv: Limb,
    spare_bits: u32,
    skip_final_sub: bool,
) -> Uint<LIMBS> {
    debug_assert!(spare_bits <= modulus.spare_bits());

    if spare_bits >= 1 {
        mul_montgomery_cios_sparebit(a, b, modulus, mod_neg_inv, skip_final_sub)
    } else {
        mul_montgomery_cios(a, b, modulus, mod_neg_inv)
    }
}

/// Computes `a * a * R^-1 mod modulus`.
///
/// Squares with [`square_comba`](crate::square_comba), visiting each cross product once, and
/// then runs a double-width Montgomery reduction. The contract is that of [`mul_montgomery`],
/// and a lazily reduced `a` additionally needs `spare_bits >= 2`.
pub const fn square_montgomery<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    mod_neg_inv: Limb,
    spare_bits: u32,
    skip_final_sub: bool,
) -> Uint<LIMBS> {
    let t = a.square_wide();
    if skip_final_sub {
        montgomery_reduction_lazy(&t, modulus, mod_neg_inv, spare_bits)
    } else {
        montgomery_reduction(&t, modulus, mod_neg_inv, spare_bits)
    }
}
