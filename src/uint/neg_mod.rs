//! [`Uint`] modular negation and halving.

use crate::{ConstChoice, Limb, Odd, Uint};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `-self mod p`.
    ///
    /// Assumes `self` is less than `p`. Zero maps to zero, so the result is always reduced.
    pub const fn neg_mod(&self, p: &Odd<Self>) -> Self {
        let (diff, _) = p.as_ref().borrowing_sub(self, Limb::ZERO);
        Self::select(&diff, &Self::ZERO, self.is_zero())
    }

    /// Computes `self / 2 mod p`, i.e. the unique reduced `b` with `b + b == self mod p`.
    ///
    /// Assumes `self` is less than `p`. Odd inputs are made even by adding `p` first, keeping the
    /// carry as the new top bit.
    pub const fn div_by_2_mod(&self, p: &Odd<Self>) -> Self {
        let is_odd = self.is_odd();
        let (sum, carry) = self.conditional_add(p.as_ref(), is_odd);
        let mut ret = sum.shr1();
        ret.limbs[LIMBS - 1] = ret.limbs[LIMBS - 1].bitor(carry.shl(Limb::HI_BIT));
        ret
    }

    /// Computes `-self mod p` if `choice` is truthy, otherwise returns `self`.
    pub const fn conditional_neg_mod(&self, p: &Odd<Self>, choice: ConstChoice) -> Self {
        Self::select(self, &self.neg_mod(p), choice)
    }
}
