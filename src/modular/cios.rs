//! Coarsely integrated operand scanning (CIOS) Montgomery multiplication.
//!
//! Each outer iteration adds one row `a * b[i]` into the accumulator `t` and immediately clears
//! its lowest limb by adding a multiple of the modulus, so `t` never grows beyond `LIMBS` limbs
//! plus a small carry. See Koç, Acar and Kaliski, "Analyzing and Comparing Montgomery
//! Multiplication Algorithms" (1996) for the general algorithm, and
//! <https://hackmd.io/@gnark/modular_multiplication> for the spare-bit variant.

use super::final_sub::{final_sub_may_overflow, final_sub_no_carry};
use crate::{Limb, Odd, Uint};

/// Computes `a * b * R^-1 mod modulus` for a modulus with at least one spare bit.
///
/// Inputs must be reduced. The spare bit guarantees the running value stays below
/// `2 * modulus < R`, so no carry word above `t` is needed.
///
/// With `skip_final_sub` the result is left in `[0, 2 * modulus)`, which may be fed back into
/// this function only if the modulus has at least two spare bits.
pub const fn mul_montgomery_cios_sparebit<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    b: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    mod_neg_inv: Limb,
    skip_final_sub: bool,
) -> Uint<LIMBS> {
    debug_assert!(modulus.has_spare_bit());

    let a = &a.limbs;
    let m = &modulus.0.limbs;
    let mut t = [Limb::ZERO; LIMBS];

    let mut i = 0;
    while i < LIMBS {
        let bi = b.limbs[i];

        // (hi_a, t[0]) <- t[0] + a[0] * b[i]
        let (t0, mut hi_a) = t[0].carrying_mul_add(a[0], bi, Limb::ZERO);
        t[0] = t0;

        let u = t[0].wrapping_mul(mod_neg_inv);

        // (hi_m, _) <- t[0] + u * m[0], whose low limb is zero by construction
        let (_, mut hi_m) = t[0].carrying_mul_add(u, m[0], Limb::ZERO);

        let mut j = 1;
        while j < LIMBS {
            (t[j], hi_a) = t[j].carrying_mul_add(a[j], bi, hi_a);
            (t[j - 1], hi_m) = t[j].carrying_mul_add(u, m[j], hi_m);
            j += 1;
        }

        t[LIMBS - 1] = hi_m.wrapping_add(hi_a);
        i += 1;
    }

    let t = Uint::new(t);
    if skip_final_sub {
        t
    } else {
        final_sub_no_carry(&t, modulus)
    }
}

/// Computes `a * b * R^-1 mod modulus`, fully reduced, for any odd modulus.
///
/// Inputs must be reduced. Two extra accumulator limbs above `t` absorb the carries which the
/// spare-bit variant can rule out.
pub const fn mul_montgomery_cios<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    b: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    mod_neg_inv: Limb,
) -> Uint<LIMBS> {
    let a = &a.limbs;
    let m = &modulus.0.limbs;
    let mut t = [Limb::ZERO; LIMBS];
    let mut t_n = Limb::ZERO;

    let mut i = 0;
    while i < LIMBS {
        let bi = b.limbs[i];

        // t += a * b[i]
        let mut carry = Limb::ZERO;
        let mut j = 0;
        while j < LIMBS {
            (t[j], carry) = t[j].carrying_mul_add(a[j], bi, carry);
            j += 1;
        }
        let (sum, t_n1) = t_n.carrying_add(carry, Limb::ZERO);
        t_n = sum;

        // t = (t + u * m) / 2^Limb::BITS
        let u = t[0].wrapping_mul(mod_neg_inv);
        let (_, mut carry) = t[0].carrying_mul_add(u, m[0], Limb::ZERO);
        let mut j = 1;
        while j < LIMBS {
            (t[j - 1], carry) = t[j].carrying_mul_add(u, m[j], carry);
            j += 1;
        }
        let (sum, c) = t_n.carrying_add(carry, Limb::ZERO);
        t[LIMBS - 1] = sum;
        t_n = t_n1.wrapping_add(c);

        i += 1;
    }

    final_sub_may_overflow(&Uint::new(t), t_n, modulus)
}
