//! Limb multiplication

use crate::{
    Limb,
    primitives::{carrying_mul_add, widening_mul},
};
use core::ops::Mul;
use num_traits::WrappingMul;
use subtle::CtOption;

impl Limb {
    /// Computes `self + (b * c) + carry`, returning the result along with the new carry.
    #[inline(always)]
    pub const fn carrying_mul_add(self, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(b.0, c.0, self.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Compute "wide" multiplication, with a product twice the size of the input.
    ///
    /// Returns a tuple containing the `(lo, hi)` components of the product.
    #[inline(always)]
    pub const fn widening_mul(&self, rhs: Self) -> (Self, Self) {
        let (lo, hi) = widening_mul(self.0, rhs.0);
        (Limb(lo), Limb(hi))
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    pub const fn wrapping_mul(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_mul(rhs.0))
    }
}

impl Limb {
    /// Perform checked multiplication, returning a [`CtOption`] which `is_some` only if the
    /// operation did not overflow.
    #[inline]
    pub fn checked_mul(&self, rhs: Self) -> CtOption<Self> {
        let (lo, hi) = self.widening_mul(rhs);
        CtOption::new(lo, hi.is_zero().into())
    }
}

impl Mul for Limb {
    type Output = Limb;

    #[inline]
    fn mul(self, rhs: Limb) -> Self {
        self.checked_mul(rhs)
            .expect("attempted to multiply with overflow")
    }
}

impl WrappingMul for Limb {
    #[inline]
    fn wrapping_mul(&self, v: &Self) -> Self {
        self.wrapping_mul(*v)
    }
}
