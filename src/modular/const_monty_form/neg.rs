//! Negations of integers in Montgomery form with a constant modulus.

use super::{ConstMontyForm, ConstMontyParams};
use crate::modular::sub::neg_mod;
use core::marker::PhantomData;
use core::ops::Neg;

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> ConstMontyForm<MOD, LIMBS> {
    /// Negates the number.
    pub const fn neg(&self) -> Self {
        Self {
            montgomery_form: neg_mod(&self.montgomery_form, &MOD::PARAMS.modulus),
            phantom: PhantomData,
        }
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Neg for ConstMontyForm<MOD, LIMBS> {
    type Output = Self;
    fn neg(self) -> Self {
        ConstMontyForm::neg(&self)
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Neg for &ConstMontyForm<MOD, LIMBS> {
    type Output = ConstMontyForm<MOD, LIMBS>;
    fn neg(self) -> ConstMontyForm<MOD, LIMBS> {
        ConstMontyForm::neg(self)
    }
}
