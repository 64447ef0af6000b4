//! Subtractions between integers in Montgomery form with a modulus set at runtime.

use super::MontyForm;
use crate::modular::sub::sub_mod;
use core::ops::{Sub, SubAssign};

impl<const LIMBS: usize> MontyForm<LIMBS> {
    /// Subtracts `rhs`.
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self {
            montgomery_form: sub_mod(
                &self.montgomery_form,
                &rhs.montgomery_form,
                &self.params.modulus,
            ),
            params: self.params,
        }
    }
}

impl<const LIMBS: usize> Sub<&MontyForm<LIMBS>> for &MontyForm<LIMBS> {
    type Output = MontyForm<LIMBS>;
    fn sub(self, rhs: &MontyForm<LIMBS>) -> MontyForm<LIMBS> {
        debug_assert_eq!(self.params, rhs.params);
        self.sub(rhs)
    }
}

impl<const LIMBS: usize> Sub<MontyForm<LIMBS>> for &MontyForm<LIMBS> {
    type Output = MontyForm<LIMBS>;
    #[allow(clippy::op_ref)]
    fn sub(self, rhs: MontyForm<LIMBS>) -> MontyForm<LIMBS> {
        self - &rhs
    }
}

impl<const LIMBS: usize> Sub<&MontyForm<LIMBS>> for MontyForm<LIMBS> {
    type Output = MontyForm<LIMBS>;
    #[allow(clippy::op_ref)]
    fn sub(self, rhs: &MontyForm<LIMBS>) -> MontyForm<LIMBS> {
        &self - rhs
    }
}

impl<const LIMBS: usize> Sub<MontyForm<LIMBS>> for MontyForm<LIMBS> {
    type Output = MontyForm<LIMBS>;
    fn sub(self, rhs: MontyForm<LIMBS>) -> MontyForm<LIMBS> {
        &self - &rhs
    }
}

impl<const LIMBS: usize> SubAssign<&MontyForm<LIMBS>> for MontyForm<LIMBS> {
    fn sub_assign(&mut self, rhs: &MontyForm<LIMBS>) {
        *self = *self - rhs;
    }
}

impl<const LIMBS: usize> SubAssign<MontyForm<LIMBS>> for MontyForm<LIMBS> {
    fn sub_assign(&mut self, rhs: MontyForm<LIMBS>) {
        *self -= &rhs;
    }
}
