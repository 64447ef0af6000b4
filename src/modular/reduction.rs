//! Montgomery reduction.

use super::final_sub::{final_sub_may_overflow, final_sub_no_carry};
use crate::{Limb, Odd, Uint, WideUint};

/// Runs the `LIMBS` steps of Algorithm 14.32 in Handbook of Applied Cryptography
/// <https://cacr.uwaterloo.ca/hac/about/chap14.pdf> in place.
///
/// Step `i` clears `lower[i]` by adding `u * modulus * 2^(i * Limb::BITS)` where
/// `u = lower[i] * mod_neg_inv`, and keeps the carries out of each row in a running carry above
/// `upper`. Afterwards `(meta_carry, upper)` holds `(lower, upper) * R^-1 mod modulus`, not yet
/// fully reduced.
#[inline(always)]
const fn reduction_steps<const LIMBS: usize>(
    lower: &mut [Limb; LIMBS],
    upper: &mut [Limb; LIMBS],
    modulus: &[Limb; LIMBS],
    mod_neg_inv: Limb,
) -> Limb {
    let mut meta_carry = Limb::ZERO;

    let mut i = 0;
    while i < LIMBS {
        let u = lower[i].wrapping_mul(mod_neg_inv);

        let (_, mut carry) = lower[i].carrying_mul_add(u, modulus[0], Limb::ZERO);

        let mut j = 1;
        while j < (LIMBS - i) {
            (lower[i + j], carry) = lower[i + j].carrying_mul_add(u, modulus[j], carry);
            j += 1;
        }
        while j < LIMBS {
            (upper[i + j - LIMBS], carry) =
                upper[i + j - LIMBS].carrying_mul_add(u, modulus[j], carry);
            j += 1;
        }

        (upper[i], meta_carry) = upper[i].carrying_add(carry, meta_carry);

        i += 1;
    }

    meta_carry
}

/// Computes `t * R^-1 mod modulus` where `R = 2^(LIMBS * Limb::BITS)`, fully reduced.
///
/// `t` must be less than `modulus * R`, which holds for any product of two reduced values.
/// `spare_bits` selects the final correction and must not exceed `modulus.spare_bits()`.
pub const fn montgomery_reduction<const LIMBS: usize>(
    t: &WideUint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    mod_neg_inv: Limb,
    spare_bits: u32,
) -> Uint<LIMBS> {
    debug_assert!(spare_bits <= modulus.spare_bits());

    let (mut lower, mut upper) = t.split();
    let meta_carry = reduction_steps(
        &mut lower.limbs,
        &mut upper.limbs,
        &modulus.0.limbs,
        mod_neg_inv,
    );

    // Division is simply taking the upper half of the limbs. At this point the value is below
    // `2 * modulus`, so the carry above it is 0 or 1, and always 0 with a spare bit.
    if spare_bits >= 1 {
        final_sub_no_carry(&upper, modulus)
    } else {
        final_sub_may_overflow(&upper, meta_carry, modulus)
    }
}

/// Computes `t * R^-1 mod modulus`, skipping the final subtraction when the modulus has a spare
/// bit.
///
/// With `spare_bits >= 1` the result lies in `[0, 2 * modulus)`. Without a spare bit that range
/// does not fit in `LIMBS` limbs, so the result is fully reduced as in
/// [`montgomery_reduction`].
pub const fn montgomery_reduction_lazy<const LIMBS: usize>(
    t: &WideUint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    mod_neg_inv: Limb,
    spare_bits: u32,
) -> Uint<LIMBS> {
    debug_assert!(spare_bits <= modulus.spare_bits());

    let (mut lower, mut upper) = t.split();
    let meta_carry = reduction_steps(
        &mut lower.limbs,
        &mut upper.limbs,
        &modulus.0.limbs,
        mod_neg_inv,
    );

    if spare_bits >= 1 {
        upper
    } else {
        final_sub_may_overflow(&upper, meta_carry, modulus)
    }
}

/// Computes `a * R^-1 mod modulus`, i.e. converts `a` out of Montgomery form.
///
/// This is a reduction with an implicit zero high half, so it only needs `a < R`. The result is
/// at most `modulus`, which never carries, for any odd modulus.
pub const fn montgomery_retrieve<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    mod_neg_inv: Limb,
) -> Uint<LIMBS> {
    let mut lower = *a;
    let mut upper = Uint::ZERO;
    reduction_steps(
        &mut lower.limbs,
        &mut upper.limbs,
        &modulus.0.limbs,
        mod_neg_inv,
    );
    final_sub_no_carry(&upper, modulus)
}

#[cfg(test)]
mod tests {
    use super::{montgomery_reduction, montgomery_reduction_lazy, montgomery_retrieve};
    use crate::{
        Odd, U128, U256, Uint, WideUint,
        modular::MontyParams,
    };

    const BLS12_381_R: Odd<U256> = Odd::<U256>::from_be_hex(
        "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
    );

    #[test]
    fn reducing_one() {
        let params = MontyParams::new(BLS12_381_R);

        // Computing xR mod modulus without Montgomery reduction
        let x = U256::ONE;
        assert_eq!(
            montgomery_reduction(
                &WideUint::from_lo(params.one()),
                params.modulus(),
                params.mod_neg_inv(),
                params.spare_bits()
            ),
            x
        );
        assert_eq!(
            montgomery_retrieve(params.one(), params.modulus(), params.mod_neg_inv()),
            x
        );
    }

    #[test]
    fn reducing_r2() {
        let params = MontyParams::new(BLS12_381_R);
        assert_eq!(
            montgomery_retrieve(params.r2(), params.modulus(), params.mod_neg_inv()),
            *params.one()
        );
    }

    #[test]
    fn reducing_r_wide() {
        // t = R = (0, 1) reduces to 1.
        let params = MontyParams::new(BLS12_381_R);
        let t = WideUint::new(U256::ZERO, U256::ONE);
        assert_eq!(
            montgomery_reduction(&t, params.modulus(), params.mod_neg_inv(), params.spare_bits()),
            U256::ONE
        );
    }

    #[test]
    fn reducing_modulus_times_r_minus_one() {
        // The largest valid input `modulus * R - 1` on a modulus without a spare bit.
        let params = MontyParams::new(Odd::<U128>::from_be_hex("ffffffffffffffff7fffffffffffffff"));
        let t = WideUint::new(U128::MAX, params.modulus().wrapping_sub(&U128::ONE));
        let r = montgomery_reduction(&t, params.modulus(), params.mod_neg_inv(), 0);
        assert!(r < **params.modulus());

        // (p * R - 1) * R^-1 = -R^-1, and R^-1 * R = 1
        let r_inv = montgomery_retrieve(&U128::ONE, params.modulus(), params.mod_neg_inv());
        assert_eq!(r, r_inv.neg_mod(params.modulus()));
    }

    #[test]
    fn lazy_reduction_is_congruent() {
        let params = MontyParams::new(BLS12_381_R);
        let a = U256::from_be_hex("3c2e1f0b4a5d6e7f8091a2b3c4d5e6f70f1e2d3c4b5a69788796a5b4c3d2e1f0");
        let t = a.square_wide();

        let full = montgomery_reduction(&t, params.modulus(), params.mod_neg_inv(), params.spare_bits());
        let lazy =
            montgomery_reduction_lazy(&t, params.modulus(), params.mod_neg_inv(), params.spare_bits());

        assert!(lazy < params.modulus().shl1());
        assert!(full < **params.modulus());
        assert!(lazy == full || lazy == full.wrapping_add(params.modulus()));
    }

    #[test]
    fn single_limb() {
        let params = MontyParams::new(Odd::new(Uint::<1>::from(0xffffffu32)).unwrap());
        let t = WideUint::from_lo(params.one());
        assert_eq!(
            montgomery_reduction(&t, params.modulus(), params.mod_neg_inv(), params.spare_bits()),
            Uint::ONE
        );
    }
}
