//! Square roots of integers in Montgomery form with a constant modulus.

use super::{ConstMontyForm, ConstMontyParams};
use crate::{
    ConstChoice,
    modular::{
        PrimeParams,
        sqrt::{is_square_montgomery_form, sqrt_montgomery_form},
    },
};
use subtle::CtOption;

/// Extension of [`ConstMontyParams`] for a prime modulus.
///
/// Usually implemented with the [`const_prime_monty_params!`][`crate::const_prime_monty_params`]
/// macro.
pub trait ConstPrimeMontyParams<const LIMBS: usize>: ConstMontyParams<LIMBS> {
    /// Square root parameters for the constant modulus
    const PRIME_PARAMS: PrimeParams<LIMBS>;
}

impl<MOD: ConstPrimeMontyParams<LIMBS>, const LIMBS: usize> ConstMontyForm<MOD, LIMBS> {
    /// Computes a square root of `self`, if one exists.
    ///
    /// Which of the two roots is returned is unspecified.
    pub fn sqrt(&self) -> CtOption<Self> {
        sqrt_montgomery_form(&self.montgomery_form, &MOD::PARAMS, &MOD::PRIME_PARAMS)
            .map(Self::from_montgomery)
    }

    /// Computes `1 / sqrt(self)`, if `self` is a non-zero square.
    pub fn invsqrt(&self) -> CtOption<Self> {
        self.sqrt().and_then(|root| root.invert())
    }

    /// Computes `sqrt(u / v)`, if `v` is non-zero and `u / v` is a square.
    pub fn sqrt_ratio(u: &Self, v: &Self) -> CtOption<Self> {
        v.invert().and_then(|v_inv| u.mul(&v_inv).sqrt())
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> ConstMontyForm<MOD, LIMBS> {
    /// Returns the truthy value if `self` is zero or a square modulo `MOD`, which must be prime.
    pub fn is_square(&self) -> ConstChoice {
        is_square_montgomery_form(&self.montgomery_form, &MOD::PARAMS)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        U256, const_monty_form, const_prime_monty_params,
        modular::{ConstMontyForm, ConstMontyParams},
    };

    // ed25519 base field
    const_prime_monty_params!(
        Ed25519Base,
        U256,
        "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed"
    );

    type Fe = ConstMontyForm<Ed25519Base, { U256::LIMBS }>;

    #[test]
    fn sqrt() {
        let x = const_monty_form!(
            U256::from_be_hex("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a"),
            Ed25519Base
        );
        let root = x.square().sqrt().unwrap();
        assert!(root == x || root == -x);
        assert!(x.square().is_square().is_true_vartime());

        // 2 is not a square when p = 5 mod 8
        let two = Fe::ONE.double();
        assert!(bool::from(two.sqrt().is_none()));
        assert!(!two.is_square().is_true_vartime());
    }

    #[test]
    fn sqrt_minus_one() {
        // p = 1 mod 4, so -1 has a root
        let i = Fe::MINUS_ONE.sqrt().unwrap();
        assert_eq!(i.square(), Fe::MINUS_ONE);
    }

    #[test]
    fn invsqrt() {
        let nine = const_monty_form!(U256::from_u8(9), Ed25519Base);
        let inv_root = nine.invsqrt().unwrap();
        assert_eq!(inv_root.square() * nine, Fe::ONE);
        assert!(bool::from(Fe::ZERO.invsqrt().is_none()));
    }

    #[test]
    fn sqrt_ratio() {
        let u = const_monty_form!(U256::from_u8(50), Ed25519Base);
        let v = Fe::ONE.double();
        let root = Fe::sqrt_ratio(&u, &v).unwrap();
        assert_eq!(root.square(), const_monty_form!(U256::from_u8(25), Ed25519Base));
        assert!(bool::from(Fe::sqrt_ratio(&u, &Fe::ZERO).is_none()));
    }
}
