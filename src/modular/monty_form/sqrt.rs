//! Square roots of integers in Montgomery form with a modulus set at runtime.

use super::MontyForm;
use crate::{
    ConstChoice,
    modular::{
        PrimeParams,
        sqrt::{is_square_montgomery_form, sqrt_montgomery_form},
    },
};
use subtle::CtOption;

impl<const LIMBS: usize> MontyForm<LIMBS> {
    /// Computes a square root of `self`, if one exists.
    ///
    /// `prime_params` must have been computed from this element's [`MontyParams`](super::MontyParams),
    /// whose modulus must be prime. Which of the two roots is returned is unspecified.
    pub fn sqrt(&self, prime_params: &PrimeParams<LIMBS>) -> CtOption<Self> {
        let root = sqrt_montgomery_form(&self.montgomery_form, &self.params, prime_params);
        CtOption::new(
            Self::from_montgomery(root.unwrap_or(self.montgomery_form), self.params),
            root.is_some(),
        )
    }

    /// Computes `1 / sqrt(self)`, if `self` is a non-zero square.
    pub fn invsqrt(&self, prime_params: &PrimeParams<LIMBS>) -> CtOption<Self> {
        let root = self.sqrt(prime_params);
        let inverse = root.unwrap_or(*self).invert();
        CtOption::new(inverse.unwrap_or(*self), root.is_some() & inverse.is_some())
    }

    /// Computes `sqrt(u / v)`, if `v` is non-zero and `u / v` is a square.
    pub fn sqrt_ratio(u: &Self, v: &Self, prime_params: &PrimeParams<LIMBS>) -> CtOption<Self> {
        let v_inv = v.invert();
        let root = u.mul(&v_inv.unwrap_or(*v)).sqrt(prime_params);
        CtOption::new(root.unwrap_or(*u), v_inv.is_some() & root.is_some())
    }

    /// Returns the truthy value if `self` is zero or a square modulo the (prime) modulus.
    ///
    /// Computed with Euler's criterion, in constant time.
    pub fn is_square(&self) -> ConstChoice {
        is_square_montgomery_form(&self.montgomery_form, &self.params)
    }
}
