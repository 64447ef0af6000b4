//! Modulus-specific Montgomery form parameters.

use super::final_sub::final_sub_no_carry;
use crate::{ConstChoice, Error, Limb, Odd, Uint};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Parameters to efficiently go to/from the Montgomery form for an odd modulus provided at
/// runtime.
///
/// Everything in here is derived from the modulus alone and treated as public.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MontyParams<const LIMBS: usize> {
    /// The constant modulus.
    pub(super) modulus: Odd<Uint<LIMBS>>,

    /// 1 in Montgomery form (a.k.a. `R`).
    pub(super) one: Uint<LIMBS>,

    /// `R^2 mod modulus`, used to move into Montgomery form.
    pub(super) r2: Uint<LIMBS>,

    /// `-modulus^-1 mod 2^Limb::BITS`.
    pub(super) mod_neg_inv: Limb,

    /// Unset high bits in the top limb of the modulus.
    pub(super) spare_bits: u32,
}

impl<const LIMBS: usize> MontyParams<LIMBS> {
    /// Instantiates a new set of `MontyParams` representing the given odd `modulus`.
    pub const fn new(modulus: Odd<Uint<LIMBS>>) -> Self {
        // `R mod modulus` where `R = 2^BITS`, by doubling `1 mod modulus` `BITS` times.
        // Represents 1 in Montgomery form.
        let mut one = final_sub_no_carry(&Uint::ONE, &modulus);
        let mut i = 0;
        while i < Uint::<LIMBS>::BITS {
            one = one.double_mod(&modulus);
            i += 1;
        }

        // `R^2 mod modulus`, used to convert integers to Montgomery form.
        let mut r2 = one;
        let mut i = 0;
        while i < Uint::<LIMBS>::BITS {
            r2 = r2.double_mod(&modulus);
            i += 1;
        }

        let mod_neg_inv = modulus.0.limbs[0].neg_invert_mod_word();
        let spare_bits = modulus.spare_bits();

        Self {
            modulus,
            one,
            r2,
            mod_neg_inv,
            spare_bits,
        }
    }

    /// Instantiates `MontyParams` from a big endian hex modulus, rejecting malformed input and
    /// even moduli.
    pub fn try_from_be_hex(hex: &str) -> Result<Self, Error> {
        Odd::try_from_be_hex(hex).map(Self::new)
    }

    /// Returns the modulus which was used to initialize these parameters.
    pub const fn modulus(&self) -> &Odd<Uint<LIMBS>> {
        &self.modulus
    }

    /// 1 in Montgomery form (a.k.a. `R`).
    pub const fn one(&self) -> &Uint<LIMBS> {
        &self.one
    }

    /// `R^2 mod modulus`, used to move into Montgomery form.
    pub const fn r2(&self) -> &Uint<LIMBS> {
        &self.r2
    }

    /// `-modulus^-1 mod 2^Limb::BITS`, the per-limb Montgomery reduction constant.
    pub const fn mod_neg_inv(&self) -> Limb {
        self.mod_neg_inv
    }

    /// Number of unset high bits in the top limb of the modulus.
    pub const fn spare_bits(&self) -> u32 {
        self.spare_bits
    }

    /// Return `b` if `c` is truthy, otherwise return `a`.
    pub(crate) const fn select(a: &Self, b: &Self, c: ConstChoice) -> Self {
        Self {
            modulus: Odd(Uint::select(&a.modulus.0, &b.modulus.0, c)),
            one: Uint::select(&a.one, &b.one, c),
            r2: Uint::select(&a.r2, &b.r2, c),
            mod_neg_inv: Limb::select(a.mod_neg_inv, b.mod_neg_inv, c),
            spare_bits: c.select_u32(a.spare_bits, b.spare_bits),
        }
    }
}

impl<const LIMBS: usize> fmt::Debug for MontyParams<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MontyParams")
            .field("modulus", &self.modulus)
            .field("one", &self.one)
            .field("r2", &self.r2)
            .field("mod_neg_inv", &self.mod_neg_inv)
            .field("spare_bits", &self.spare_bits)
            .finish()
    }
}

impl<const LIMBS: usize> ConditionallySelectable for MontyParams<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::select(a, b, choice.into())
    }
}

impl<const LIMBS: usize> ConstantTimeEq for MontyParams<LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.modulus.ct_eq(&other.modulus)
            & self.one.ct_eq(&other.one)
            & self.r2.ct_eq(&other.r2)
            & self.mod_neg_inv.ct_eq(&other.mod_neg_inv)
            & self.spare_bits.ct_eq(&other.spare_bits)
    }
}

#[cfg(feature = "zeroize")]
impl<const LIMBS: usize> Zeroize for MontyParams<LIMBS> {
    fn zeroize(&mut self) {
        self.modulus.zeroize();
        self.one.zeroize();
        self.r2.zeroize();
        self.mod_neg_inv.zeroize();
        self.spare_bits.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::MontyParams;
    use crate::{Error, Limb, Odd, U128, U256, Uint};

    #[test]
    fn bls12_381_scalar_params() {
        let params = MontyParams::new(Odd::<U256>::from_be_hex(
            "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
        ));

        assert_eq!(
            params.one(),
            &U256::from_be_hex("1824b159acc5056f998c4fefecbc4ff55884b7fa0003480200000001fffffffe")
        );
        assert_eq!(
            params.r2(),
            &U256::from_be_hex("0748d9d99f59ff1105d314967254398f2b6cedcb87925c23c999e990f3f29c6d")
        );
        assert_eq!(params.spare_bits(), 1);
        assert_eq!(
            params.mod_neg_inv().wrapping_mul(params.modulus().as_limbs()[0]),
            Limb::MAX
        );
    }

    #[test]
    fn no_spare_bit_params() {
        let params = MontyParams::new(Odd::<U128>::from_be_hex("ffffffffffffffff7fffffffffffffff"));
        assert_eq!(params.spare_bits(), 0);

        // R - p = 2^63 + 1
        assert_eq!(params.one(), &U128::from_be_hex("00000000000000008000000000000001"));
    }

    #[test]
    fn modulus_one() {
        let params = MontyParams::new(Odd::new(Uint::<2>::ONE).unwrap());
        assert_eq!(params.one(), &Uint::ZERO);
        assert_eq!(params.r2(), &Uint::ZERO);
    }

    #[test]
    fn try_from_be_hex() {
        assert!(MontyParams::<{ U128::LIMBS }>::try_from_be_hex("ffffffffffffffff7fffffffffffffff").is_ok());
        assert_eq!(
            MontyParams::<{ U128::LIMBS }>::try_from_be_hex("ffffffffffffffff7ffffffffffffffe"),
            Err(Error::EvenModulus)
        );
        assert_eq!(
            MontyParams::<{ U128::LIMBS }>::try_from_be_hex("ffff"),
            Err(Error::InvalidEncoding)
        );
    }
}
