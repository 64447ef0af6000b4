//! Modular subtraction and negation.

use crate::{Odd, Uint};

/// Computes `a - b mod modulus`.
///
/// `a` and `b` must be reduced. Subtraction needs no spare-bit variant: the borrow mask alone
/// decides whether `modulus` is added back.
#[inline]
pub const fn sub_mod<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    b: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
) -> Uint<LIMBS> {
    a.sub_mod(b, modulus)
}

/// Computes `-a mod modulus`, mapping zero to zero.
#[inline]
pub const fn neg_mod<const LIMBS: usize>(a: &Uint<LIMBS>, modulus: &Odd<Uint<LIMBS>>) -> Uint<LIMBS> {
    a.neg_mod(modulus)
}

#[cfg(test)]
mod tests {
    use super::{neg_mod, sub_mod};
    use crate::{Odd, U128};

    #[test]
    fn sub_then_neg() {
        let p = Odd::<U128>::from_be_hex("ffffffffffffffff7fffffffffffffff");
        let a = U128::from(3u8);
        let b = U128::from(10u8);

        let d = sub_mod(&a, &b, &p);
        assert_eq!(d, p.wrapping_sub(&U128::from(7u8)));
        assert_eq!(neg_mod(&d, &p), U128::from(7u8));
        assert_eq!(sub_mod(&a, &a, &p), U128::ZERO);
        assert_eq!(neg_mod(&U128::ZERO, &p), U128::ZERO);
    }
}
