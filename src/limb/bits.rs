use crate::Limb;

impl Limb {
    /// Calculate the number of bits needed to represent this number.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        Limb::BITS - self.0.leading_zeros()
    }

    /// Calculate the number of leading zeros in the binary representation of this number.
    #[inline(always)]
    pub const fn leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }

    /// Calculate the number of trailing zeros in the binary representation of this number.
    #[inline(always)]
    pub const fn trailing_zeros(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Calculates `a | b`.
    #[inline(always)]
    pub const fn bitor(self, rhs: Self) -> Self {
        Limb(self.0 | rhs.0)
    }

    /// Calculates `a & b`.
    #[inline(always)]
    pub const fn bitand(self, rhs: Self) -> Self {
        Limb(self.0 & rhs.0)
    }

    /// Calculates `a ^ b`.
    #[inline(always)]
    pub const fn bitxor(self, rhs: Self) -> Self {
        Limb(self.0 ^ rhs.0)
    }

    /// Calculates `!a`.
    #[inline(always)]
    pub const fn not(self) -> Self {
        Limb(!self.0)
    }

    /// Computes `self << shift`.
    ///
    /// Panics if `shift >= Self::BITS`.
    #[inline(always)]
    pub const fn shl(self, shift: u32) -> Self {
        Limb(self.0 << shift)
    }

    /// Computes `self >> shift`.
    ///
    /// Panics if `shift >= Self::BITS`.
    #[inline(always)]
    pub const fn shr(self, shift: u32) -> Self {
        Limb(self.0 >> shift)
    }
}
