//! Constant-time selection support.

use crate::{ConstChoice, Limb};
use subtle::{Choice, ConditionallySelectable};

impl Limb {
    /// Return `b` if `c` is truthy, otherwise return `a`.
    #[inline]
    pub const fn select(a: Self, b: Self, c: ConstChoice) -> Self {
        Self(c.select_word(a.0, b.0))
    }

    /// Swap the values of `a` and `b` if `c` is truthy, otherwise do nothing.
    #[inline]
    pub const fn conditional_swap(a: &mut Self, b: &mut Self, c: ConstChoice) {
        (*a, *b) = (Self::select(*a, *b, c), Self::select(*b, *a, c))
    }
}

impl ConditionallySelectable for Limb {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::select(*a, *b, choice.into())
    }
}
