//! [`Uint`] modular addition operations.

use crate::{
    Limb, Odd, Uint,
    modular::{final_sub_may_overflow, final_sub_no_carry},
};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self + rhs mod p`.
    ///
    /// Assumes `self` and `rhs` are both less than `p`. Valid for every odd `p`: the carry out of
    /// the top limb is folded into the final correction.
    pub const fn add_mod(&self, rhs: &Self, p: &Odd<Self>) -> Self {
        let (w, carry) = self.carrying_add(rhs, Limb::ZERO);
        final_sub_may_overflow(&w, carry, p)
    }

    /// Computes `self + rhs mod p` for a modulus with at least one spare bit.
    ///
    /// Assumes `self` and `rhs` are both less than `p`. Since `p < 2^(Self::BITS - 1)` the sum
    /// cannot carry out of the top limb.
    pub const fn add_mod_spare_bit(&self, rhs: &Self, p: &Odd<Self>) -> Self {
        debug_assert!(p.has_spare_bit());
        let w = self.wrapping_add(rhs);
        final_sub_no_carry(&w, p)
    }

    /// Computes `self + self mod p`.
    ///
    /// Assumes `self` is less than `p`.
    pub const fn double_mod(&self, p: &Odd<Self>) -> Self {
        let (w, carry) = self.shl1_with_carry();
        final_sub_may_overflow(&w, carry, p)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Odd, U128, U256};

    // NIST P-256 group order, no spare bit.
    const P256_ORDER: Odd<U256> =
        Odd::<U256>::from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

    // BN254 base field, two spare bits.
    const BN254_P: Odd<U256> =
        Odd::<U256>::from_be_hex("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");

    #[test]
    fn add_mod_nist_p256() {
        let a =
            U256::from_be_hex("44acf6b7e36c1342c2c5897204fe09504e1e2efb1a900377dbc4e7a6a133ec56");
        let b =
            U256::from_be_hex("d5777c45019673125ad240f83094d4252d829516fac8601ed01979ec1ec1a251");

        let actual = a.add_mod(&b, &P256_ORDER);
        let expected =
            U256::from_be_hex("1a2472fde50286541d97ca6a3592dd75beb9c9646e40c511b82496cfc3926956");

        assert_eq!(expected, actual);
    }

    #[test]
    fn add_mod_boundaries() {
        for p in [P256_ORDER, BN254_P] {
            let p_minus_one = p.wrapping_sub(&U256::ONE);
            assert_eq!(p_minus_one.add_mod(&U256::ONE, &p), U256::ZERO);
            assert_eq!(p_minus_one.add_mod(&U256::ZERO, &p), p_minus_one);
            assert_eq!(
                p_minus_one.add_mod(&p_minus_one, &p),
                p.wrapping_sub(&U256::from(2u8))
            );
            assert_eq!(U256::ZERO.add_mod(&U256::ZERO, &p), U256::ZERO);
        }
    }

    #[test]
    fn add_mod_spare_bit_matches_general() {
        let p_minus_one = BN254_P.wrapping_sub(&U256::ONE);
        let values = [
            U256::ZERO,
            U256::ONE,
            p_minus_one,
            U256::from_be_hex("0f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a69788796a5b4c3d2e1f0"),
        ];

        for a in &values {
            for b in &values {
                assert_eq!(
                    a.add_mod_spare_bit(b, &BN254_P),
                    a.add_mod(b, &BN254_P),
                    "{a} + {b}"
                );
            }
        }
    }

    #[test]
    fn double_mod() {
        let p = Odd::<U128>::from_be_hex("ffffffffffffffff7fffffffffffffff");
        let a = p.wrapping_sub(&U128::from(5u8));
        assert_eq!(a.double_mod(&p), a.add_mod(&a, &p));
        assert_eq!(a.double_mod(&p), p.wrapping_sub(&U128::from(10u8)));
        assert_eq!(U128::from(3u8).double_mod(&p), U128::from(6u8));
    }
}
