//! Exponentiation of integers in Montgomery form with a constant modulus.

use super::{ConstMontyForm, ConstMontyParams};
use crate::{Uint, modular::pow::pow_montgomery_form};
use core::marker::PhantomData;

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> ConstMontyForm<MOD, LIMBS> {
    /// Raises to the `exponent` power.
    ///
    /// Constant time in both the value of `self` and the value of `exponent`.
    pub fn pow<const RHS_LIMBS: usize>(&self, exponent: &Uint<RHS_LIMBS>) -> Self {
        Self {
            montgomery_form: pow_montgomery_form(&self.montgomery_form, exponent, &MOD::PARAMS),
            phantom: PhantomData,
        }
    }
}
