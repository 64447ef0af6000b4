//! Final correction of a value known to be less than twice the modulus.
//!
//! Both variants always compute `a - p` and then keep either `a` or the difference with a masked
//! select, so the running time does not depend on which one is returned.

use crate::{ConstChoice, Limb, Odd, Uint};

/// Reduces `a` modulo `p`, assuming `a < 2p` and that `a` did not overflow `LIMBS` limbs.
///
/// This is the variant for moduli with at least one spare bit, where `2p` itself fits.
#[inline(always)]
pub const fn final_sub_no_carry<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    p: &Odd<Uint<LIMBS>>,
) -> Uint<LIMBS> {
    let (diff, borrow) = a.borrowing_sub(p.as_ref(), Limb::ZERO);
    Uint::select(&diff, a, ConstChoice::from_word_mask(borrow.0))
}

/// Reduces `carry * 2^(LIMBS * Limb::BITS) + a` modulo `p`, assuming it is less than `2p` and
/// `carry <= 1`.
///
/// The extra carry word lets this work for moduli which use every bit of their top limb.
#[inline(always)]
pub const fn final_sub_may_overflow<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    carry: Limb,
    p: &Odd<Uint<LIMBS>>,
) -> Uint<LIMBS> {
    debug_assert!(carry.0 <= 1);

    let (diff, borrow) = a.borrowing_sub(p.as_ref(), Limb::ZERO);

    // Propagate the borrow through the carry word: it only survives if `carry == 0`.
    let (_, borrow) = carry.borrowing_sub(Limb::ZERO, borrow);
    Uint::select(&diff, a, ConstChoice::from_word_mask(borrow.0))
}

#[cfg(test)]
mod tests {
    use super::{final_sub_may_overflow, final_sub_no_carry};
    use crate::{Limb, Odd, U128, Uint};

    const SPARE: Odd<U128> = Odd::<U128>::from_be_hex("30644e72e131a029b85045b68181585d");
    const FULL: Odd<U128> = Odd::<U128>::from_be_hex("ffffffffffffffff7fffffffffffffff");

    #[test]
    fn no_carry() {
        let p = SPARE.as_ref();
        let two_p_minus_one = p.shl1().wrapping_sub(&U128::ONE);

        assert_eq!(final_sub_no_carry(&U128::ZERO, &SPARE), U128::ZERO);
        assert_eq!(final_sub_no_carry(p, &SPARE), U128::ZERO);
        assert_eq!(
            final_sub_no_carry(&two_p_minus_one, &SPARE),
            p.wrapping_sub(&U128::ONE)
        );
    }

    #[test]
    fn may_overflow() {
        let p = FULL.as_ref();
        let p_minus_one = p.wrapping_sub(&U128::ONE);

        // 2p - 1 overflows 128 bits.
        let (two_p_minus_one, carry) = p.carrying_add(&p_minus_one, Limb::ZERO);
        assert_eq!(carry, Limb::ONE);
        assert_eq!(
            final_sub_may_overflow(&two_p_minus_one, carry, &FULL),
            p_minus_one
        );

        assert_eq!(final_sub_may_overflow(p, Limb::ZERO, &FULL), U128::ZERO);
        assert_eq!(
            final_sub_may_overflow(&U128::from(7u8), Limb::ZERO, &FULL),
            U128::from(7u8)
        );
    }

    #[test]
    fn idempotent_on_reduced_values() {
        let values = [U128::ZERO, U128::ONE, SPARE.wrapping_sub(&U128::ONE)];
        for a in values {
            let once = final_sub_no_carry(&a, &SPARE);
            assert_eq!(once, a);
            assert_eq!(final_sub_no_carry(&once, &SPARE), once);
        }

        let values = [U128::ZERO, U128::MAX.shr1(), FULL.wrapping_sub(&U128::ONE)];
        for a in values {
            let once = final_sub_may_overflow(&a, Limb::ZERO, &FULL);
            assert_eq!(once, a);
            assert_eq!(final_sub_may_overflow(&once, Limb::ZERO, &FULL), once);
        }
    }

    #[test]
    fn single_limb() {
        let p = Odd::new(Uint::<1>::MAX).unwrap();
        let a = Uint::<1>::MAX;
        assert_eq!(final_sub_may_overflow(&a, Limb::ZERO, &p), Uint::ZERO);
    }
}
