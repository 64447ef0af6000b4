//! x86-64 Montgomery multiplication built on the ADX and BMI2 extensions.
//!
//! MULX multiplies without touching the flags and ADCX/ADOX carry through CF and OF
//! respectively, so the low and high halves of each row of partial products can be accumulated
//! on two independent carry chains. Only compiled when both target features are statically
//! enabled; the kernel follows the same two-extra-limb CIOS schedule as the portable
//! [`mul_montgomery_cios`](super::mul_montgomery_cios) and obeys the same contract.

#![allow(unsafe_code)]

use super::final_sub::final_sub_may_overflow;
use crate::{Limb, Odd, Uint};
use core::arch::x86_64::{_addcarryx_u64, _mulx_u64};

#[inline(always)]
#[allow(unused_unsafe)]
fn mulx(a: u64, b: u64) -> (u64, u64) {
    let mut hi = 0;
    // SAFETY: this module is only compiled with the `bmi2` target feature enabled.
    let lo = unsafe { _mulx_u64(a, b, &mut hi) };
    (lo, hi)
}

#[inline(always)]
#[allow(unused_unsafe)]
fn addcarryx(carry: u8, a: u64, b: u64, out: &mut u64) -> u8 {
    // SAFETY: this module is only compiled with the `adx` target feature enabled.
    unsafe { _addcarryx_u64(carry, a, b, out) }
}

/// Adds `x * y` into the `LIMBS + 1` limb accumulator `(t, t_n)`, returning the carry out of
/// `t_n`.
///
/// Low product halves go into `t[j]` on one carry chain, high halves into `t[j + 1]` on the
/// other.
#[inline(always)]
fn row_mul_add<const LIMBS: usize>(
    t: &mut [u64; LIMBS],
    t_n: &mut u64,
    x: &[Limb; LIMBS],
    y: u64,
) -> u64 {
    let mut cf = 0u8;
    let mut of = 0u8;

    for j in 0..LIMBS {
        let (lo, hi) = mulx(x[j].0, y);
        cf = addcarryx(cf, t[j], lo, &mut t[j]);

        let next = if j + 1 < LIMBS {
            &mut t[j + 1]
        } else {
            &mut *t_n
        };
        of = addcarryx(of, *next, hi, next);
    }

    let cf = addcarryx(cf, *t_n, 0, t_n);
    u64::from(cf) + u64::from(of)
}

/// Computes `a * b * R^-1 mod modulus` for any odd modulus.
///
/// Inputs must be reduced. With `skip_final_sub` and `spare_bits >= 1` the result is left in
/// `[0, 2 * modulus)`, otherwise it is fully reduced.
pub fn mul_montgomery_adx<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    b: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    mod_neg_inv: Limb,
    spare_bits: u32,
    skip_final_sub: bool,
) -> Uint<LIMBS> {
    debug_assert!(spare_bits <= modulus.spare_bits());

    let m = &modulus.as_ref().limbs;
    let mut t = [0u64; LIMBS];
    let mut t_n = 0u64;

    for i in 0..LIMBS {
        let mut t_n1 = row_mul_add(&mut t, &mut t_n, &a.limbs, b.limbs[i].0);

        let u = t[0].wrapping_mul(mod_neg_inv.0);
        t_n1 += row_mul_add(&mut t, &mut t_n, m, u);

        // t[0] is now zero: divide by the word size.
        t.copy_within(1.., 0);
        t[LIMBS - 1] = t_n;
        t_n = t_n1;
    }

    let t = Uint::from_words(t);
    if skip_final_sub && spare_bits >= 1 {
        t
    } else {
        final_sub_may_overflow(&t, Limb(t_n), modulus)
    }
}
