//! [`WideUint`] subtraction operations.

use crate::{ConstChoice, Limb, Odd, Uint, WideUint};

impl<const LIMBS: usize> WideUint<LIMBS> {
    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow mask.
    #[inline(always)]
    pub const fn borrowing_sub(&self, rhs: &Self, borrow: Limb) -> (Self, Limb) {
        let (lo, borrow) = self.lo.borrowing_sub(&rhs.lo, borrow);
        let (hi, borrow) = self.hi.borrowing_sub(&rhs.hi, borrow);
        (Self::new(lo, hi), borrow)
    }

    /// Unreduced subtraction, wrapping around `2^(2 * LIMBS * Limb::BITS)`.
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.borrowing_sub(rhs, Limb::ZERO).0
    }

    /// Computes `self - rhs mod p * 2^(LIMBS * Limb::BITS)`.
    ///
    /// Both operands must already be reduced. On underflow `p` is added back to the high half.
    pub const fn sub_mod(&self, rhs: &Self, p: &Odd<Uint<LIMBS>>) -> Self {
        let (lo, borrow) = self.lo.borrowing_sub(&rhs.lo, Limb::ZERO);
        let (hi, borrow) = self.hi.borrowing_sub(&rhs.hi, borrow);
        let (hi, _) = hi.conditional_add(p.as_ref(), ConstChoice::from_word_mask(borrow.0));
        Self::new(lo, hi)
    }

    /// Computes `-self mod p * 2^(LIMBS * Limb::BITS)`.
    ///
    /// `self` must already be reduced. Zero maps to zero.
    pub const fn neg_mod(&self, p: &Odd<Uint<LIMBS>>) -> Self {
        let (lo, borrow) = Uint::ZERO.borrowing_sub(&self.lo, Limb::ZERO);
        let (hi, _) = p.as_ref().borrowing_sub(&self.hi, borrow);
        Self::select(&Self::new(lo, hi), &Self::ZERO, self.is_zero())
    }
}
