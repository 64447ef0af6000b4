//! Exponentiation of integers in Montgomery form with a modulus set at runtime.

use super::MontyForm;
use crate::{Uint, modular::pow::pow_montgomery_form};

impl<const LIMBS: usize> MontyForm<LIMBS> {
    /// Raises to the `exponent` power.
    ///
    /// Constant time in both the value of `self` and the value of `exponent`; only the width
    /// `RHS_LIMBS` of the exponent affects the running time.
    pub fn pow<const RHS_LIMBS: usize>(&self, exponent: &Uint<RHS_LIMBS>) -> Self {
        Self {
            montgomery_form: pow_montgomery_form(&self.montgomery_form, exponent, &self.params),
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Odd, U64, U256,
        modular::{MontyForm, MontyParams},
    };

    #[test]
    fn pow_small() {
        let params = MontyParams::new(Odd::<U256>::from_be_hex(
            "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001",
        ));
        let base = MontyForm::new(&U256::from(2u8), params);

        assert_eq!(base.pow(&U64::ZERO), MontyForm::one(params));
        assert_eq!(base.pow(&U64::ONE), base);
        assert_eq!(base.pow(&U64::from(10u8)).retrieve(), U256::from(1024u32));
    }

    #[test]
    fn pow_matches_repeated_mul() {
        let params = MontyParams::new(Odd::<U256>::from_be_hex(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        ));
        let base = MontyForm::new(
            &U256::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
            params,
        );

        let mut expected = MontyForm::one(params);
        for _ in 0..37 {
            expected *= base;
        }
        assert_eq!(base.pow(&U64::from(37u8)), expected);
    }
}
