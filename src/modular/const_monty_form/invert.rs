//! Multiplicative inverses of integers in Montgomery form with a constant modulus.

use super::{ConstMontyForm, ConstMontyParams};
use crate::Uint;
use subtle::CtOption;

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> ConstMontyForm<MOD, LIMBS> {
    /// Computes `self^-1` representing the multiplicative inverse of `self`,
    /// i.e. `self * self^-1 = 1`, via Fermat's little theorem.
    ///
    /// `MOD` must be prime. The result is none if `self` is zero.
    pub fn invert(&self) -> CtOption<Self> {
        let exponent = MOD::PARAMS.modulus.as_ref().wrapping_sub(&Uint::from_u8(2));
        CtOption::new(self.pow(&exponent), self.is_zero().not().into())
    }
}
