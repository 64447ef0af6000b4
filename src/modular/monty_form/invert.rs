//! Multiplicative inverses of integers in Montgomery form with a modulus set at runtime.

use super::MontyForm;
use crate::Uint;
use subtle::CtOption;

impl<const LIMBS: usize> MontyForm<LIMBS> {
    /// Computes `self^-1` representing the multiplicative inverse of `self`,
    /// i.e. `self * self^-1 = 1`, via Fermat's little theorem.
    ///
    /// The modulus must be prime. The result is none if `self` is zero.
    pub fn invert(&self) -> CtOption<Self> {
        let exponent = self
            .params
            .modulus
            .as_ref()
            .wrapping_sub(&Uint::from_u8(2));
        CtOption::new(self.pow(&exponent), self.is_zero().not().into())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Odd, U256,
        modular::{MontyForm, MontyParams},
    };

    fn params() -> MontyParams<{ U256::LIMBS }> {
        // secp256k1 base field
        MontyParams::new(Odd::<U256>::from_be_hex(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        ))
    }

    #[test]
    fn invert() {
        let params = params();
        let x = MontyForm::new(
            &U256::from_be_hex("77117F1273373C26C700D076B3F780074D03339F56DD0EFB60E7F58441FD3685"),
            params,
        );
        let x_inv = x.invert().unwrap();
        assert_eq!(x * x_inv, MontyForm::one(params));
        assert_eq!(MontyForm::one(params).invert().unwrap(), MontyForm::one(params));
    }

    #[test]
    fn invert_zero() {
        assert!(bool::from(MontyForm::zero(params()).invert().is_none()));
    }
}
