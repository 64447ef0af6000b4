//! [`Uint`] multiplication operations.

use core::ops::{Mul, MulAssign};

use num_traits::WrappingMul;
use subtle::CtOption;

use crate::{Uint, WideUint};

use self::comba::{mul_column, shift_out, square_column};

pub(crate) mod comba;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Compute the full double-width product `self * rhs` as a [`WideUint`].
    pub const fn widening_mul(&self, rhs: &Self) -> WideUint<LIMBS> {
        let mut lo = Self::ZERO;
        let mut hi = Self::ZERO;
        let mut acc = (0, 0, 0);

        let mut k = 0;
        while k < 2 * LIMBS {
            acc = mul_column(acc, &self.limbs, &rhs.limbs, k);
            let (limb, next) = shift_out(acc);
            acc = next;
            if k < LIMBS {
                lo.limbs[k] = limb;
            } else {
                hi.limbs[k - LIMBS] = limb;
            }
            k += 1;
        }

        WideUint::new(lo, hi)
    }

    /// Square self, returning the full double-width result as a [`WideUint`].
    pub const fn square_wide(&self) -> WideUint<LIMBS> {
        let mut lo = Self::ZERO;
        let mut hi = Self::ZERO;
        let mut acc = (0, 0, 0);

        let mut k = 0;
        while k < 2 * LIMBS {
            acc = square_column(acc, &self.limbs, k);
            let (limb, next) = shift_out(acc);
            acc = next;
            if k < LIMBS {
                lo.limbs[k] = limb;
            } else {
                hi.limbs[k - LIMBS] = limb;
            }
            k += 1;
        }

        WideUint::new(lo, hi)
    }

    /// Multiply by a value of a different width, keeping the low `OUT_LIMBS` limbs of the
    /// product.
    ///
    /// `OUT_LIMBS` must not exceed `LIMBS + RHS_LIMBS`.
    pub const fn mul_trunc<const RHS_LIMBS: usize, const OUT_LIMBS: usize>(
        &self,
        rhs: &Uint<RHS_LIMBS>,
    ) -> Uint<OUT_LIMBS> {
        const {
            assert!(
                OUT_LIMBS <= LIMBS + RHS_LIMBS,
                "output is wider than the product"
            );
        }
        let mut out = Uint::<OUT_LIMBS>::ZERO;
        comba::mul_comba(&mut out.limbs, &self.limbs, &rhs.limbs);
        out
    }

    /// Perform wrapping multiplication, discarding overflow.
    pub const fn wrapping_mul(&self, rhs: &Self) -> Self {
        self.mul_trunc(rhs)
    }

    /// Square self, discarding overflow.
    pub const fn square_trunc(&self) -> Self {
        let mut out = Self::ZERO;
        comba::square_comba(&mut out.limbs, &self.limbs);
        out
    }

    /// Perform checked multiplication, returning a [`CtOption`] which `is_some`
    /// only if the operation did not overflow.
    pub fn checked_mul(&self, rhs: &Self) -> CtOption<Self> {
        let (lo, hi) = self.widening_mul(rhs).split();
        CtOption::new(lo, hi.is_zero().into())
    }
}

impl<const LIMBS: usize> Mul for Uint<LIMBS> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul(&rhs)
    }
}

impl<const LIMBS: usize> Mul<&Uint<LIMBS>> for Uint<LIMBS> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self {
        self.checked_mul(rhs)
            .expect("attempted to multiply with overflow")
    }
}

impl<const LIMBS: usize> MulAssign for Uint<LIMBS> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<const LIMBS: usize> MulAssign<&Uint<LIMBS>> for Uint<LIMBS> {
    fn mul_assign(&mut self, other: &Self) {
        *self = *self * other;
    }
}

impl<const LIMBS: usize> WrappingMul for Uint<LIMBS> {
    fn wrapping_mul(&self, v: &Self) -> Self {
        self.wrapping_mul(v)
    }
}

#[cfg(test)]
mod tests {
    use crate::{U64, U128, U256, Uint, WideUint};

    #[test]
    fn widening_mul_zero_and_one() {
        assert_eq!(U64::ZERO.widening_mul(&U64::ZERO), WideUint::ZERO);
        assert_eq!(U64::ZERO.widening_mul(&U64::ONE), WideUint::ZERO);
        assert_eq!(U64::ONE.widening_mul(&U64::ZERO), WideUint::ZERO);
        assert_eq!(
            U64::ONE.widening_mul(&U64::ONE),
            WideUint::new(U64::ONE, U64::ZERO)
        );
    }

    #[test]
    fn widening_mul_lo_only() {
        let primes: &[u32] = &[3, 5, 17, 257, 65537];

        for &a_int in primes {
            for &b_int in primes {
                let (lo, hi) = U64::from_u32(a_int).widening_mul(&U64::from_u32(b_int)).split();
                let expected = U64::from_u64(a_int as u64 * b_int as u64);
                assert_eq!(lo, expected);
                assert!(bool::from(hi.is_zero()));
            }
        }
    }

    #[test]
    fn widening_mul_max() {
        let (lo, hi) = U128::MAX.widening_mul(&U128::MAX).split();
        assert_eq!(lo, U128::ONE);
        assert_eq!(hi, U128::MAX.wrapping_sub(&U128::ONE));
    }

    #[test]
    fn square_wide_matches_widening_mul() {
        let n = U256::from_be_hex("ff677f6000000001d79897153fa818fdff677f6000000001d79897153fa818fd");
        assert_eq!(n.square_wide(), n.widening_mul(&n));
        assert_eq!(U256::MAX.square_wide(), U256::MAX.widening_mul(&U256::MAX));
    }

    #[test]
    fn mul_trunc_mixed_widths() {
        let a = U128::from_be_hex("ffffffffffffffffffffffffffffffff");
        let b = U64::from_u64(2);
        let out: Uint<{ U128::LIMBS + U64::LIMBS }> = a.mul_trunc(&b);
        let expected: U256 =
            U256::from_be_hex("00000000000000000000000000000001fffffffffffffffffffffffffffffffe");
        assert_eq!(out.as_limbs(), &expected.as_limbs()[..U128::LIMBS + U64::LIMBS]);

        let truncated: U64 = a.mul_trunc(&b);
        assert_eq!(truncated, U64::MAX.wrapping_sub(&U64::ONE));
    }

    #[test]
    fn wrapping_mul_and_square_trunc() {
        let n = U128::from_be_hex("0123456789abcdef0123456789abcdef");
        assert_eq!(n.wrapping_mul(&n), n.square_trunc());
        assert_eq!(n.wrapping_mul(&n), n.square_wide().lo());
    }

    #[test]
    fn checked_mul_overflow() {
        assert!(bool::from(U128::MAX.checked_mul(&U128::from(2u8)).is_none()));
        assert_eq!(
            U128::from_u64(6).checked_mul(&U128::from_u64(7)).unwrap(),
            U128::from_u64(42)
        );
    }
}
