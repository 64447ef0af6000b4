//! Product-scanning ("Comba") multiplication and squaring.
//!
//! Output limbs are produced in order. For output index `k` every partial product
//! `a[i] * b[j]` with `i + j == k` is summed into a three-word accumulator before a single limb is
//! stored, so no intermediate row is ever written back. Loop bounds depend only on the operand
//! lengths, never on their values.

use crate::{
    Limb, Word,
    primitives::{mul_acc, mul_double_acc},
};

/// Three-word column accumulator: `(lo, hi, extra)`.
pub(crate) type Accumulator = (Word, Word, Word);

/// Add column `k` of `a * b` into `acc`.
#[inline(always)]
pub(crate) const fn mul_column(
    mut acc: Accumulator,
    a: &[Limb],
    b: &[Limb],
    k: usize,
) -> Accumulator {
    let mut i = if k < b.len() { 0 } else { k + 1 - b.len() };
    while i < a.len() && i <= k {
        acc = mul_acc(acc, a[i].0, b[k - i].0);
        i += 1;
    }
    acc
}

/// Add column `k` of `a * a` into `acc`, visiting each off-diagonal pair once and doubling it.
#[inline(always)]
pub(crate) const fn square_column(mut acc: Accumulator, a: &[Limb], k: usize) -> Accumulator {
    let mut i = if k < a.len() { 0 } else { k + 1 - a.len() };
    while i < k - i {
        acc = mul_double_acc(acc, a[i].0, a[k - i].0);
        i += 1;
    }
    if 2 * i == k {
        acc = mul_acc(acc, a[i].0, a[i].0);
    }
    acc
}

/// Emit the low word of `acc` and shift the accumulator down by one word.
#[inline(always)]
pub(crate) const fn shift_out(acc: Accumulator) -> (Limb, Accumulator) {
    (Limb(acc.0), (acc.1, acc.2, 0))
}

/// Computes `r = a * b mod 2^(Limb::BITS * r.len())`.
///
/// `r` may be shorter than `a.len() + b.len()`, in which case the product is truncated, but not
/// longer. Every limb of `r` is overwritten.
pub const fn mul_comba(r: &mut [Limb], a: &[Limb], b: &[Limb]) {
    debug_assert!(r.len() <= a.len() + b.len());

    let mut acc = (0, 0, 0);
    let mut k = 0;
    while k < r.len() {
        acc = mul_column(acc, a, b, k);
        (r[k], acc) = shift_out(acc);
        k += 1;
    }
}

/// Computes `r = a^2 mod 2^(Limb::BITS * r.len())`.
///
/// `r` may be shorter than `2 * a.len()`, in which case the square is truncated, but not longer.
/// Every limb of `r` is overwritten.
pub const fn square_comba(r: &mut [Limb], a: &[Limb]) {
    debug_assert!(r.len() <= 2 * a.len());

    let mut acc = (0, 0, 0);
    let mut k = 0;
    while k < r.len() {
        acc = square_column(acc, a, k);
        (r[k], acc) = shift_out(acc);
        k += 1;
    }
}
