//! [`WideUint`] addition operations.

use crate::{Limb, Odd, Uint, WideUint, modular::final_sub_may_overflow};

impl<const LIMBS: usize> WideUint<LIMBS> {
    /// Computes `self + rhs + carry`, returning the result along with the new carry.
    #[inline(always)]
    pub const fn carrying_add(&self, rhs: &Self, carry: Limb) -> (Self, Limb) {
        let (lo, carry) = self.lo.carrying_add(&rhs.lo, carry);
        let (hi, carry) = self.hi.carrying_add(&rhs.hi, carry);
        (Self::new(lo, hi), carry)
    }

    /// Unreduced addition, wrapping around `2^(2 * LIMBS * Limb::BITS)`.
    ///
    /// Intended for accumulating products whose sum is known not to overflow before a single
    /// Montgomery reduction.
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        self.carrying_add(rhs, Limb::ZERO).0
    }

    /// Computes `self + rhs mod p * 2^(LIMBS * Limb::BITS)`.
    ///
    /// Both operands must already be reduced, i.e. their high halves must be less than `p`. Only
    /// the high half takes part in the correction, so the low half is the plain sum.
    pub const fn add_mod(&self, rhs: &Self, p: &Odd<Uint<LIMBS>>) -> Self {
        let (lo, carry) = self.lo.carrying_add(&rhs.lo, Limb::ZERO);
        let (hi, carry) = self.hi.carrying_add(&rhs.hi, carry);
        Self::new(lo, final_sub_may_overflow(&hi, carry, p))
    }
}
