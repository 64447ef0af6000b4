//! Modular addition with the final correction picked from the modulus shape.

use crate::{Odd, Uint};

/// Computes `a + b mod modulus`.
///
/// `a` and `b` must be reduced. With `spare_bits >= 1` the sum cannot carry out of the top limb
/// and the cheaper no-carry correction is used. `spare_bits` must not exceed
/// `modulus.spare_bits()`, which [`MontyParams`](super::MontyParams) guarantees.
#[inline]
pub const fn add_mod<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    b: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    spare_bits: u32,
) -> Uint<LIMBS> {
    debug_assert!(spare_bits <= modulus.spare_bits());

    if spare_bits >= 1 {
        a.add_mod_spare_bit(b, modulus)
    } else {
        a.add_mod(b, modulus)
    }
}

/// Computes `a + a mod modulus`.
///
/// Same contract as [`add_mod`].
#[inline]
pub const fn double_mod<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    spare_bits: u32,
) -> Uint<LIMBS> {
    debug_assert!(spare_bits <= modulus.spare_bits());

    if spare_bits >= 1 {
        a.add_mod_spare_bit(a, modulus)
    } else {
        a.double_mod(modulus)
    }
}
