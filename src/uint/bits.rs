use crate::{ConstChoice, Limb, Uint};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Calculate the number of leading zeros in the binary representation of this number.
    pub const fn leading_zeros(&self) -> u32 {
        let limbs = self.as_limbs();

        let mut count = 0;
        let mut i = LIMBS;
        let mut nonzero_limb_not_encountered = ConstChoice::TRUE;
        while i > 0 {
            i -= 1;
            let l = limbs[i];
            let z = l.leading_zeros();
            count += nonzero_limb_not_encountered.if_true_u32(z);
            nonzero_limb_not_encountered =
                nonzero_limb_not_encountered.and(l.is_nonzero().not());
        }

        count
    }

    /// Calculate the number of bits needed to represent this number.
    pub const fn bits(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// Get the value of the bit at position `index`, as a truthy or falsy `ConstChoice`.
    /// Returns the falsy value for indices out of range.
    pub const fn bit(&self, index: u32) -> ConstChoice {
        let limb_num = index / Limb::BITS;
        let index_in_limb = index % Limb::BITS;
        let index_mask = 1 << index_in_limb;

        let limbs = self.as_limbs();

        let mut result = 0;
        let mut i = 0;
        while i < LIMBS {
            let bit = limbs[i].0 & index_mask;
            let is_right_limb = ConstChoice::from_u32_eq(i as u32, limb_num);
            result |= is_right_limb.if_true_word(bit);
            i += 1;
        }

        ConstChoice::from_word_lsb(result >> index_in_limb)
    }

    /// Computes `self >> 1` in constant-time, returning the shifted value along with the bit
    /// shifted out as a [`ConstChoice`].
    pub(crate) const fn shr1_with_carry(&self) -> (Self, ConstChoice) {
        let mut ret = Self::ZERO;
        let mut i = LIMBS;
        let mut carry = Limb::ZERO;

        while i > 0 {
            i -= 1;
            let limb = self.limbs[i];
            ret.limbs[i] = limb.shr(1).bitor(carry);
            carry = limb.shl(Limb::HI_BIT);
        }

        (ret, ConstChoice::from_word_msb(carry.0))
    }

    /// Computes `self >> 1` in constant-time.
    pub const fn shr1(&self) -> Self {
        self.shr1_with_carry().0
    }

    /// Computes `self << 1` in constant-time, returning the bit shifted out of the top limb as a
    /// [`Limb`] carry.
    pub(crate) const fn shl1_with_carry(&self) -> (Self, Limb) {
        let mut ret = Self::ZERO;
        let mut i = 0;
        let mut carry = Limb::ZERO;

        while i < LIMBS {
            let limb = self.limbs[i];
            ret.limbs[i] = limb.shl(1).bitor(carry);
            carry = limb.shr(Limb::HI_BIT);
            i += 1;
        }

        (ret, carry)
    }

    /// Computes `self << 1` in constant-time.
    pub const fn shl1(&self) -> Self {
        self.shl1_with_carry().0
    }
}
