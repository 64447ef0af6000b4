//! Constant-time support for integers in Montgomery form with a constant modulus.

use super::{ConstMontyForm, ConstMontyParams};
use crate::{ConstChoice, Uint};
use core::marker::PhantomData;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> ConstMontyForm<MOD, LIMBS> {
    /// Return `b` if `c` is truthy, otherwise return `a`.
    pub const fn select(a: &Self, b: &Self, c: ConstChoice) -> Self {
        Self {
            montgomery_form: Uint::select(&a.montgomery_form, &b.montgomery_form, c),
            phantom: PhantomData,
        }
    }

    /// Swap `a` and `b` if `c` is truthy, otherwise leave them unchanged.
    pub const fn conditional_swap(a: &mut Self, b: &mut Self, c: ConstChoice) {
        Uint::conditional_swap(&mut a.montgomery_form, &mut b.montgomery_form, c);
    }

    /// Returns `self + rhs` if `c` is truthy, otherwise `self`.
    pub const fn conditional_add(&self, rhs: &Self, c: ConstChoice) -> Self {
        Self::select(self, &self.add(rhs), c)
    }

    /// Returns `self - rhs` if `c` is truthy, otherwise `self`.
    pub const fn conditional_sub(&self, rhs: &Self, c: ConstChoice) -> Self {
        Self::select(self, &self.sub(rhs), c)
    }

    /// Returns `-self` if `c` is truthy, otherwise `self`.
    pub const fn conditional_neg(&self, c: ConstChoice) -> Self {
        Self::select(self, &self.neg(), c)
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> ConditionallySelectable
    for ConstMontyForm<MOD, LIMBS>
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::select(a, b, choice.into())
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> ConstantTimeEq
    for ConstMontyForm<MOD, LIMBS>
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.montgomery_form.ct_eq(&other.montgomery_form)
    }
}
