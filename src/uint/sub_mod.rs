//! [`Uint`] modular subtraction operations.

use crate::{ConstChoice, Limb, Odd, Uint};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self - rhs mod p`.
    ///
    /// Assumes `self` and `rhs` are both less than `p`.
    pub const fn sub_mod(&self, rhs: &Self, p: &Odd<Self>) -> Self {
        let (out, borrow) = self.borrowing_sub(rhs, Limb::ZERO);

        // The borrow is a mask, so `p` is added back exactly when the subtraction underflowed.
        let (out, _) = out.conditional_add(p.as_ref(), ConstChoice::from_word_mask(borrow.0));
        out
    }
}
