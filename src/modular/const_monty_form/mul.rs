//! Multiplications between integers in Montgomery form with a constant modulus.

use super::{ConstMontyForm, ConstMontyParams};
use crate::modular::mul::{mul_montgomery, square_montgomery};
use core::iter::Product;
use core::marker::PhantomData;
use core::ops::{Mul, MulAssign};

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> ConstMontyForm<MOD, LIMBS> {
    /// Multiplies by `rhs`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self {
            montgomery_form: mul_montgomery(
                &self.montgomery_form,
                &rhs.montgomery_form,
                &MOD::PARAMS.modulus,
                MOD::PARAMS.mod_neg_inv,
                MOD::PARAMS.spare_bits,
                false,
            ),
            phantom: PhantomData,
        }
    }

    /// Computes the (reduced) square.
    pub const fn square(&self) -> Self {
        Self {
            montgomery_form: square_montgomery(
                &self.montgomery_form,
                &MOD::PARAMS.modulus,
                MOD::PARAMS.mod_neg_inv,
                MOD::PARAMS.spare_bits,
                false,
            ),
            phantom: PhantomData,
        }
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Mul<&ConstMontyForm<MOD, LIMBS>>
    for &ConstMontyForm<MOD, LIMBS>
{
    type Output = ConstMontyForm<MOD, LIMBS>;
    fn mul(self, rhs: &ConstMontyForm<MOD, LIMBS>) -> ConstMontyForm<MOD, LIMBS> {
        self.mul(rhs)
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Mul<ConstMontyForm<MOD, LIMBS>>
    for &ConstMontyForm<MOD, LIMBS>
{
    type Output = ConstMontyForm<MOD, LIMBS>;
    #[allow(clippy::op_ref)]
    fn mul(self, rhs: ConstMontyForm<MOD, LIMBS>) -> ConstMontyForm<MOD, LIMBS> {
        self * &rhs
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Mul<&ConstMontyForm<MOD, LIMBS>>
    for ConstMontyForm<MOD, LIMBS>
{
    type Output = ConstMontyForm<MOD, LIMBS>;
    #[allow(clippy::op_ref)]
    fn mul(self, rhs: &ConstMontyForm<MOD, LIMBS>) -> ConstMontyForm<MOD, LIMBS> {
        &self * rhs
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Mul<ConstMontyForm<MOD, LIMBS>>
    for ConstMontyForm<MOD, LIMBS>
{
    type Output = ConstMontyForm<MOD, LIMBS>;
    fn mul(self, rhs: ConstMontyForm<MOD, LIMBS>) -> ConstMontyForm<MOD, LIMBS> {
        &self * &rhs
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> MulAssign<&Self> for ConstMontyForm<MOD, LIMBS> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = *self * rhs;
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> MulAssign<Self> for ConstMontyForm<MOD, LIMBS> {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Product for ConstMontyForm<MOD, LIMBS> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc.mul(&x))
    }
}

impl<'a, MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Product<&'a Self>
    for ConstMontyForm<MOD, LIMBS>
{
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc.mul(x))
    }
}

#[cfg(test)]
mod tests {
    use crate::{U128, U256, const_monty_form, const_monty_params, modular::ConstMontyParams};

    const_monty_params!(
        Bn254Base,
        U256,
        "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47"
    );

    const_monty_params!(NoSpareBit, U128, "ffffffffffffffff7fffffffffffffff");

    #[test]
    fn mul_small() {
        let x = const_monty_form!(U256::from(1234u32), Bn254Base);
        let y = const_monty_form!(U256::from(5678u32), Bn254Base);
        assert_eq!((x * y).retrieve(), U256::from(1234u32 * 5678));
        assert_eq!(x.square(), x * x);
    }

    #[test]
    fn square_of_negation() {
        let a = const_monty_form!(
            U128::from_be_hex("ff677f6000000001d79897153fa818fd"),
            NoSpareBit
        );
        assert_eq!((-a).square(), a.square());
        assert_eq!(a.square(), a * a);

        let mut b = a;
        b *= a;
        assert_eq!(b, a.square());
    }

    #[test]
    fn product() {
        type Fe = crate::modular::ConstMontyForm<Bn254Base, { U256::LIMBS }>;
        let values = [2u32, 3, 5, 7].map(|n| const_monty_form!(U256::from(n), Bn254Base));

        assert_eq!(values.iter().product::<Fe>().retrieve(), U256::from(210u8));
        assert_eq!(values.into_iter().product::<Fe>(), values.iter().product::<Fe>());
        assert_eq!(core::iter::empty::<Fe>().product::<Fe>(), Fe::ONE);
    }
}
