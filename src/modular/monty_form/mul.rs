//! Multiplications between integers in Montgomery form with a modulus set at runtime.

use super::MontyForm;
use crate::modular::{
    MontyParams,
    mul::{mul_montgomery, square_montgomery},
};
use core::ops::{Mul, MulAssign};

impl<const LIMBS: usize> MontyForm<LIMBS> {
    /// Multiplies by `rhs`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self {
            montgomery_form: mul_montgomery(
                &self.montgomery_form,
                &rhs.montgomery_form,
                &self.params.modulus,
                self.params.mod_neg_inv,
                self.params.spare_bits,
                false,
            ),
            params: self.params,
        }
    }

    /// Computes the (reduced) square.
    pub const fn square(&self) -> Self {
        Self {
            montgomery_form: square_montgomery(
                &self.montgomery_form,
                &self.params.modulus,
                self.params.mod_neg_inv,
                self.params.spare_bits,
                false,
            ),
            params: self.params,
        }
    }

    /// Multiplies the elements of `iter`, all of which must share `params`.
    ///
    /// Returns one for an empty iterator.
    pub fn product<'a, I>(params: MontyParams<LIMBS>, iter: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        iter.into_iter().fold(Self::one(params), |acc, x| acc.mul(x))
    }
}

impl<const LIMBS: usize> Mul<&MontyForm<LIMBS>> for &MontyForm<LIMBS> {
    type Output = MontyForm<LIMBS>;
    fn mul(self, rhs: &MontyForm<LIMBS>) -> MontyForm<LIMBS> {
        debug_assert_eq!(
            self.params, rhs.params,
            "MontyForm::mul: parameters mismatch"
        );
        self.mul(rhs)
    }
}

impl<const LIMBS: usize> Mul<MontyForm<LIMBS>> for &MontyForm<LIMBS> {
    type Output = MontyForm<LIMBS>;
    #[allow(clippy::op_ref)]
    fn mul(self, rhs: MontyForm<LIMBS>) -> MontyForm<LIMBS> {
        self * &rhs
    }
}

impl<const LIMBS: usize> Mul<&MontyForm<LIMBS>> for MontyForm<LIMBS> {
    type Output = MontyForm<LIMBS>;
    #[allow(clippy::op_ref)]
    fn mul(self, rhs: &MontyForm<LIMBS>) -> MontyForm<LIMBS> {
        &self * rhs
    }
}

impl<const LIMBS: usize> Mul<MontyForm<LIMBS>> for MontyForm<LIMBS> {
    type Output = MontyForm<LIMBS>;
    fn mul(self, rhs: MontyForm<LIMBS>) -> MontyForm<LIMBS> {
        &self * &rhs
    }
}

impl<const LIMBS: usize> MulAssign<&Self> for MontyForm<LIMBS> {
    fn mul_assign(&mut self, rhs: &MontyForm<LIMBS>) {
        *self = *self * rhs;
    }
}

impl<const LIMBS: usize> MulAssign<Self> for MontyForm<LIMBS> {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Odd, U128, U256,
        modular::{MontyForm, MontyParams},
    };

    #[test]
    fn mul_small() {
        let params = MontyParams::new(Odd::<U256>::from_be_hex(
            "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
        ));
        let x = MontyForm::new(&U256::from(1234u32), params);
        let y = MontyForm::new(&U256::from(5678u32), params);
        assert_eq!((x * y).retrieve(), U256::from(1234u32 * 5678));

        let mut z = x;
        z *= y;
        assert_eq!(z, x * y);
    }

    #[test]
    fn square_matches_mul() {
        for modulus in ["ffffffffffffffff7fffffffffffffff", "7fffffffffffffffffffffffffffff61"] {
            let params = MontyParams::new(Odd::<U128>::from_be_hex(modulus));
            let x = MontyForm::new(&U128::from_be_hex("ff677f6000000001d79897153fa818fd"), params);
            assert_eq!(x.square(), x * x);
            assert_eq!((-x).square(), x.square());
        }
    }

    #[test]
    fn mul_by_one_and_minus_one() {
        let params = MontyParams::new(Odd::<U128>::from_be_hex("ffffffffffffffff7fffffffffffffff"));
        let x = MontyForm::new(&U128::from_be_hex("0123456789abcdeffedcba9876543210"), params);
        assert_eq!(x * MontyForm::one(params), x);
        assert_eq!(x * MontyForm::minus_one(params), -x);
        assert!((x * MontyForm::zero(params)).is_zero().is_true_vartime());
    }

    #[test]
    fn product() {
        let params = MontyParams::new(Odd::<U128>::from_be_hex("7fffffffffffffffffffffffffffff61"));
        let values = [2u8, 3, 5, 7].map(|n| MontyForm::new(&U128::from(n), params));

        assert_eq!(MontyForm::product(params, &values).retrieve(), U128::from(210u8));
        assert_eq!(MontyForm::product(params, &[]), MontyForm::one(params));
    }
}
