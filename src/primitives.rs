use crate::{WideWord, Word};

/// Computes `lhs + rhs + carry`, returning the result along with the new carry (0, 1, or 2).
#[inline(always)]
pub(crate) const fn carrying_add(lhs: Word, rhs: Word, carry: Word) -> (Word, Word) {
    // We could use `Word::overflowing_add()` here analogous to `overflowing_add()`,
    // but this version seems to produce a slightly better assembly.
    let a = lhs as WideWord;
    let b = rhs as WideWord;
    let carry = carry as WideWord;
    let ret = a + b + carry;
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Computes `lhs + rhs`, returning the result along with the carry (0 or 1).
#[inline(always)]
pub(crate) const fn overflowing_add(lhs: Word, rhs: Word) -> (Word, Word) {
    let (res, carry) = lhs.overflowing_add(rhs);
    (res, carry as Word)
}

/// Computes `lhs - (rhs + borrow)`, returning the result along with the new borrow.
///
/// Borrows use the mask convention: `0` for no borrow and `Word::MAX` for a borrow. Only the
/// high bit of the incoming `borrow` is consulted.
#[inline(always)]
pub(crate) const fn borrowing_sub(lhs: Word, rhs: Word, borrow: Word) -> (Word, Word) {
    let (ret, b2) = lhs.overflowing_sub(borrow >> (Word::BITS - 1));
    let (ret, b1) = ret.overflowing_sub(rhs);
    (ret, Word::MIN.wrapping_sub((b1 | b2) as Word))
}

/// Computes `lhs * rhs`, returning the low and the high words of the result.
#[inline(always)]
pub(crate) const fn widening_mul(lhs: Word, rhs: Word) -> (Word, Word) {
    let a = lhs as WideWord;
    let b = rhs as WideWord;
    let ret = a * b;
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Computes `(lhs * rhs) + addend + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn carrying_mul_add(
    lhs: Word,
    rhs: Word,
    addend: Word,
    carry: Word,
) -> (Word, Word) {
    let lhs = lhs as WideWord;
    let rhs = rhs as WideWord;
    let addend = addend as WideWord;
    let carry = carry as WideWord;

    // Cannot overflow:
    // lhs      * rhs      + addend   + carry
    // (2^64-1) * (2^64-1) + (2^64-1) + (2^64-1) =
    // 2^128 - 2^65 + 1 + 2^64 - 1 + 2^64 - 1 =
    // 2^128 - 2^65 + 2*2^64 - 1 =
    // 2^128 - 1 = u128::MAX
    let ret = ((lhs * rhs) + addend) + carry;
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Adds `lhs * rhs` into the three-word accumulator `(lo, hi, extra)`.
///
/// This is the inner step of product scanning: the accumulator absorbs a whole column of
/// products before a single word is emitted.
#[inline(always)]
pub(crate) const fn mul_acc(acc: (Word, Word, Word), lhs: Word, rhs: Word) -> (Word, Word, Word) {
    let (p_lo, p_hi) = widening_mul(lhs, rhs);
    let (lo, carry) = overflowing_add(acc.0, p_lo);
    let (hi, carry) = carrying_add(acc.1, p_hi, carry);
    (lo, hi, acc.2.wrapping_add(carry))
}

/// Adds `2 * lhs * rhs` into the three-word accumulator `(lo, hi, extra)`.
///
/// Used by squaring, where every off-diagonal product appears twice.
#[inline(always)]
pub(crate) const fn mul_double_acc(
    acc: (Word, Word, Word),
    lhs: Word,
    rhs: Word,
) -> (Word, Word, Word) {
    let (p_lo, p_hi) = widening_mul(lhs, rhs);
    let d_lo = p_lo << 1;
    let d_hi = (p_hi << 1) | (p_lo >> (Word::BITS - 1));
    let d_extra = p_hi >> (Word::BITS - 1);

    let (lo, carry) = overflowing_add(acc.0, d_lo);
    let (hi, carry) = carrying_add(acc.1, d_hi, carry);
    (lo, hi, acc.2.wrapping_add(d_extra).wrapping_add(carry))
}
