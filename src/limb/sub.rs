//! Limb subtraction

use crate::{Limb, primitives::borrowing_sub};
use core::ops::Sub;
use num_traits::{WrappingNeg, WrappingSub};
use subtle::{ConstantTimeEq, CtOption};

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow.
    ///
    /// The borrow is a mask: [`Limb::ZERO`] when there was no borrow and [`Limb::MAX`] when
    /// there was one.
    #[inline(always)]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around
    /// the boundary of the type.
    #[inline(always)]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }

    /// Perform wrapping negation.
    #[inline(always)]
    pub const fn wrapping_neg(self) -> Self {
        Limb(self.0.wrapping_neg())
    }

    /// Perform checked subtraction, returning a [`CtOption`] which `is_some` only if the
    /// operation did not underflow.
    #[inline]
    pub fn checked_sub(&self, rhs: &Self) -> CtOption<Self> {
        let (result, underflow) = self.borrowing_sub(*rhs, Limb::ZERO);
        CtOption::new(result, underflow.ct_eq(&Limb::ZERO))
    }
}

impl Sub for Limb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(&rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl WrappingSub for Limb {
    #[inline]
    fn wrapping_sub(&self, v: &Self) -> Self {
        self.wrapping_sub(*v)
    }
}

impl WrappingNeg for Limb {
    #[inline]
    fn wrapping_neg(&self) -> Self {
        Limb::wrapping_neg(*self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;

    #[test]
    fn borrowing_sub_no_borrow() {
        let (res, borrow) = Limb::ONE.borrowing_sub(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::ZERO);
        assert_eq!(borrow, Limb::ZERO);
    }

    #[test]
    fn borrowing_sub_with_borrow() {
        let (res, borrow) = Limb::ZERO.borrowing_sub(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::MAX);
        assert_eq!(borrow, Limb::MAX);
    }

    #[test]
    fn borrowing_sub_borrow_in() {
        let (res, borrow) = Limb::ONE.borrowing_sub(Limb::ZERO, Limb::MAX);
        assert_eq!(res, Limb::ZERO);
        assert_eq!(borrow, Limb::ZERO);

        let (res, borrow) = Limb::ZERO.borrowing_sub(Limb::MAX, Limb::MAX);
        assert_eq!(res, Limb::ZERO);
        assert_eq!(borrow, Limb::MAX);
    }

    #[test]
    fn wrapping_sub_no_borrow() {
        assert_eq!(Limb::ONE.wrapping_sub(Limb::ONE), Limb::ZERO);
    }

    #[test]
    fn wrapping_sub_with_borrow() {
        assert_eq!(Limb::ZERO.wrapping_sub(Limb::ONE), Limb::MAX);
    }

    #[test]
    fn wrapping_neg() {
        assert_eq!(Limb::ZERO.wrapping_neg(), Limb::ZERO);
        assert_eq!(Limb::ONE.wrapping_neg(), Limb::MAX);
        assert_eq!(Limb::MAX.wrapping_neg(), Limb::ONE);
    }

    #[test]
    fn checked_sub_underflow() {
        let result = Limb::ZERO.checked_sub(&Limb::ONE);
        assert!(!bool::from(result.is_some()));
    }
}
