//! Constant-time selection support.

use crate::{ConstChoice, Limb, Uint};
use subtle::{Choice, ConditionallySelectable};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Return `b` if `c` is truthy, otherwise return `a`.
    ///
    /// Every limb of both inputs is read regardless of `c`.
    #[inline]
    pub const fn select(a: &Self, b: &Self, c: ConstChoice) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];

        let mut i = 0;
        while i < LIMBS {
            limbs[i] = Limb::select(a.limbs[i], b.limbs[i], c);
            i += 1;
        }

        Uint { limbs }
    }

    /// Swap `a` and `b` if `c` is truthy, otherwise leave them unchanged.
    #[inline]
    pub const fn conditional_swap(a: &mut Self, b: &mut Self, c: ConstChoice) {
        let mut i = 0;
        while i < LIMBS {
            Limb::conditional_swap(&mut a.limbs[i], &mut b.limbs[i], c);
            i += 1;
        }
    }
}

impl<const LIMBS: usize> ConditionallySelectable for Uint<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::select(a, b, choice.into())
    }
}
