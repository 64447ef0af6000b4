//! Constant-time exponentiation in Montgomery form.

use super::{
    MontyParams,
    mul::{mul_montgomery, square_montgomery},
};
use crate::{ConstChoice, Limb, Uint, Word};

const WINDOW: u32 = 4;
const WINDOW_MASK: Word = (1 << WINDOW) - 1;

/// Computes `x^exponent` where `x` is in Montgomery form, returning the result in Montgomery form.
///
/// Fixed 4-bit windows over every bit of `exponent`: the sequence of multiplications depends only
/// on `RHS_LIMBS`, and each window's table entry is fetched by a masked scan of the whole table.
pub(crate) fn pow_montgomery_form<const LIMBS: usize, const RHS_LIMBS: usize>(
    x: &Uint<LIMBS>,
    exponent: &Uint<RHS_LIMBS>,
    params: &MontyParams<LIMBS>,
) -> Uint<LIMBS> {
    let mul = |a: &Uint<LIMBS>, b: &Uint<LIMBS>| {
        mul_montgomery(
            a,
            b,
            &params.modulus,
            params.mod_neg_inv,
            params.spare_bits,
            false,
        )
    };

    // powers[i] contains x^i
    let mut powers = [params.one; 1 << WINDOW];
    for i in 1..(1 << WINDOW) {
        powers[i] = mul(&powers[i - 1], x);
    }

    let mut z = params.one;
    for limb in exponent.as_limbs().iter().rev() {
        let w = limb.0;

        let mut window_num = Limb::BITS / WINDOW;
        while window_num > 0 {
            window_num -= 1;

            for _ in 0..WINDOW {
                z = square_montgomery(
                    &z,
                    &params.modulus,
                    params.mod_neg_inv,
                    params.spare_bits,
                    false,
                );
            }

            let idx = (w >> (window_num * WINDOW)) & WINDOW_MASK;

            // Constant-time lookup in the array of powers
            let mut power = powers[0];
            for (i, candidate) in powers.iter().enumerate().skip(1) {
                let hit = ConstChoice::from_word_eq(i as Word, idx);
                power = Uint::select(&power, candidate, hit);
            }

            z = mul(&z, &power);
        }
    }

    z
}
