//! Additions between integers in Montgomery form with a modulus set at runtime.

use super::MontyForm;
use crate::modular::{
    MontyParams,
    add::{add_mod, double_mod},
};
use core::ops::{Add, AddAssign};

impl<const LIMBS: usize> MontyForm<LIMBS> {
    /// Adds `rhs`.
    pub const fn add(&self, rhs: &Self) -> Self {
        Self {
            montgomery_form: add_mod(
                &self.montgomery_form,
                &rhs.montgomery_form,
                &self.params.modulus,
                self.params.spare_bits,
            ),
            params: self.params,
        }
    }

    /// Double `self`.
    pub const fn double(&self) -> Self {
        Self {
            montgomery_form: double_mod(
                &self.montgomery_form,
                &self.params.modulus,
                self.params.spare_bits,
            ),
            params: self.params,
        }
    }

    /// Sums the elements of `iter`, all of which must share `params`.
    ///
    /// Returns zero for an empty iterator.
    pub fn sum<'a, I>(params: MontyParams<LIMBS>, iter: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        iter.into_iter().fold(Self::zero(params), |acc, x| acc.add(x))
    }
}

impl<const LIMBS: usize> Add<&MontyForm<LIMBS>> for &MontyForm<LIMBS> {
    type Output = MontyForm<LIMBS>;
    fn add(self, rhs: &MontyForm<LIMBS>) -> MontyForm<LIMBS> {
        debug_assert_eq!(self.params, rhs.params);
        self.add(rhs)
    }
}

impl<const LIMBS: usize> Add<MontyForm<LIMBS>> for &MontyForm<LIMBS> {
    type Output = MontyForm<LIMBS>;
    #[allow(clippy::op_ref)]
    fn add(self, rhs: MontyForm<LIMBS>) -> MontyForm<LIMBS> {
        self + &rhs
    }
}

impl<const LIMBS: usize> Add<&MontyForm<LIMBS>> for MontyForm<LIMBS> {
    type Output = MontyForm<LIMBS>;
    #[allow(clippy::op_ref)]
    fn add(self, rhs: &MontyForm<LIMBS>) -> MontyForm<LIMBS> {
        &self + rhs
    }
}

impl<const LIMBS: usize> Add<MontyForm<LIMBS>> for MontyForm<LIMBS> {
    type Output = MontyForm<LIMBS>;
    fn add(self, rhs: MontyForm<LIMBS>) -> MontyForm<LIMBS> {
        &self + &rhs
    }
}

impl<const LIMBS: usize> AddAssign<&MontyForm<LIMBS>> for MontyForm<LIMBS> {
    fn add_assign(&mut self, rhs: &MontyForm<LIMBS>) {
        *self = *self + rhs;
    }
}

impl<const LIMBS: usize> AddAssign<MontyForm<LIMBS>> for MontyForm<LIMBS> {
    fn add_assign(&mut self, rhs: MontyForm<LIMBS>) {
        *self += &rhs;
    }
}
