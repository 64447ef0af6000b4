//! Finely integrated product scanning (FIPS) Montgomery multiplication.
//!
//! Output limbs are produced column by column as in Comba multiplication, interleaving the
//! partial products of `a * b` with those of `q * modulus` in one three-word accumulator.
//! See Großschädl and Kamendje, "Architectural Enhancements for Montgomery Multiplication on
//! Embedded RISC Processors" (ACNS 2003).

use super::final_sub::final_sub_may_overflow;
use crate::{
    Limb, Odd, Uint,
    primitives::mul_acc,
    uint::mul::comba::{Accumulator, shift_out},
};

/// Computes `a * b * R^-1 mod modulus`, fully reduced, for any odd modulus.
///
/// Inputs must be reduced.
pub const fn mul_montgomery_fips<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    b: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    mod_neg_inv: Limb,
) -> Uint<LIMBS> {
    let a = &a.limbs;
    let b = &b.limbs;
    let m = &modulus.0.limbs;

    // Holds the Montgomery quotient digits first, then the output limbs.
    let mut z = [Limb::ZERO; LIMBS];
    let mut acc: Accumulator = (0, 0, 0);

    let mut i = 0;
    while i < LIMBS {
        let mut j = 0;
        while j < i {
            acc = mul_acc(acc, a[j].0, b[i - j].0);
            acc = mul_acc(acc, z[j].0, m[i - j].0);
            j += 1;
        }
        acc = mul_acc(acc, a[i].0, b[0].0);
        z[i] = Limb(acc.0).wrapping_mul(mod_neg_inv);
        acc = mul_acc(acc, z[i].0, m[0].0);

        // The low word is now zero.
        (_, acc) = shift_out(acc);
        i += 1;
    }

    while i < 2 * LIMBS {
        let mut j = i + 1 - LIMBS;
        while j < LIMBS {
            acc = mul_acc(acc, a[j].0, b[i - j].0);
            acc = mul_acc(acc, z[j].0, m[i - j].0);
            j += 1;
        }
        (z[i - LIMBS], acc) = shift_out(acc);
        i += 1;
    }

    final_sub_may_overflow(&Uint::new(z), Limb(acc.0), modulus)
}
