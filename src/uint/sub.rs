//! [`Uint`] subtraction operations.

use crate::{ConstChoice, Limb, Uint};
use core::ops::{Sub, SubAssign};
use num_traits::{WrappingNeg, WrappingSub};
use subtle::CtOption;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `a - (b + borrow)`, returning the result along with the new borrow.
    ///
    /// Both borrows are masks: [`Limb::ZERO`] or [`Limb::MAX`].
    #[inline(always)]
    pub const fn borrowing_sub(&self, rhs: &Self, mut borrow: Limb) -> (Self, Limb) {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            let (w, b) = self.limbs[i].borrowing_sub(rhs.limbs[i], borrow);
            limbs[i] = w;
            borrow = b;
            i += 1;
        }

        (Self { limbs }, borrow)
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around the boundary of the
    /// type.
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.borrowing_sub(rhs, Limb::ZERO).0
    }

    /// Computes `self - rhs` if `choice` is truthy and `self - 0` otherwise, returning the result
    /// along with the borrow mask.
    #[inline]
    pub const fn conditional_sub(&self, rhs: &Self, choice: ConstChoice) -> (Self, Limb) {
        let mut borrow = Limb::ZERO;
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            let masked_rhs = Limb(choice.if_true_word(rhs.limbs[i].0));
            let (w, b) = self.limbs[i].borrowing_sub(masked_rhs, borrow);
            limbs[i] = w;
            borrow = b;
            i += 1;
        }

        (Self { limbs }, borrow)
    }

    /// Perform wrapping negation.
    pub const fn wrapping_neg(&self) -> Self {
        Self::ZERO.wrapping_sub(self)
    }

    /// Perform checked subtraction, returning a [`CtOption`] which `is_some` only if the
    /// operation did not underflow.
    pub fn checked_sub(&self, rhs: &Self) -> CtOption<Self> {
        let (result, underflow) = self.borrowing_sub(rhs, Limb::ZERO);
        CtOption::new(result, underflow.is_zero().into())
    }
}

impl<const LIMBS: usize> Sub for Uint<LIMBS> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.sub(&rhs)
    }
}

impl<const LIMBS: usize> Sub<&Uint<LIMBS>> for Uint<LIMBS> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        self.checked_sub(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl<const LIMBS: usize> SubAssign for Uint<LIMBS> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<const LIMBS: usize> SubAssign<&Uint<LIMBS>> for Uint<LIMBS> {
    fn sub_assign(&mut self, other: &Self) {
        *self = *self - other;
    }
}

impl<const LIMBS: usize> WrappingSub for Uint<LIMBS> {
    fn wrapping_sub(&self, v: &Self) -> Self {
        self.wrapping_sub(v)
    }
}

impl<const LIMBS: usize> WrappingNeg for Uint<LIMBS> {
    fn wrapping_neg(&self) -> Self {
        Uint::wrapping_neg(self)
    }
}
