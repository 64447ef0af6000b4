//! `From`-like conversions for [`Uint`].

use crate::{Limb, Uint, WideWord, Word};

macro_rules! check_limbs {
    ($limbs:expr, $min:expr) => {
        const {
            assert!($limbs >= $min, "number of limbs too small of supplied type");
        }
    };
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Create a [`Uint`] from a `u8` (const-friendly)
    #[inline]
    pub const fn from_u8(n: u8) -> Self {
        check_limbs!(LIMBS, 1);
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n as Word;
        Self { limbs }
    }

    /// Create a [`Uint`] from a `u32` (const-friendly)
    #[allow(trivial_numeric_casts)]
    #[inline]
    pub const fn from_u32(n: u32) -> Self {
        check_limbs!(LIMBS, 1);
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n as Word;
        Self { limbs }
    }

    /// Create a [`Uint`] from a `u64` (const-friendly)
    #[cfg(target_pointer_width = "32")]
    #[inline]
    pub const fn from_u64(n: u64) -> Self {
        check_limbs!(LIMBS, 2);
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = (n & 0xFFFFFFFF) as u32;
        limbs[1].0 = (n >> 32) as u32;
        Self { limbs }
    }

    /// Create a [`Uint`] from a `u64` (const-friendly)
    #[cfg(target_pointer_width = "64")]
    #[inline]
    pub const fn from_u64(n: u64) -> Self {
        check_limbs!(LIMBS, 1);
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n;
        Self { limbs }
    }

    /// Create a [`Uint`] from a `Word` (const-friendly)
    #[inline]
    pub const fn from_word(n: Word) -> Self {
        check_limbs!(LIMBS, 1);
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n;
        Self { limbs }
    }

    /// Create a [`Uint`] from a `WideWord` (const-friendly)
    #[inline]
    pub const fn from_wide_word(n: WideWord) -> Self {
        check_limbs!(LIMBS, 2);
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n as Word;
        limbs[1].0 = (n >> Limb::BITS) as Word;
        Self { limbs }
    }
}

impl<const LIMBS: usize> From<u8> for Uint<LIMBS> {
    #[inline]
    fn from(n: u8) -> Self {
        Self::from_u8(n)
    }
}

impl<const LIMBS: usize> From<u32> for Uint<LIMBS> {
    #[inline]
    fn from(n: u32) -> Self {
        Self::from_u32(n)
    }
}

impl<const LIMBS: usize> From<u64> for Uint<LIMBS> {
    #[inline]
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl<const LIMBS: usize> From<Limb> for Uint<LIMBS> {
    #[inline]
    fn from(limb: Limb) -> Self {
        Self::from_word(limb.0)
    }
}

impl<const LIMBS: usize> From<[Word; LIMBS]> for Uint<LIMBS> {
    #[inline]
    fn from(arr: [Word; LIMBS]) -> Self {
        Self::from_words(arr)
    }
}

impl<const LIMBS: usize> From<Uint<LIMBS>> for [Word; LIMBS] {
    #[inline]
    fn from(n: Uint<LIMBS>) -> [Word; LIMBS] {
        n.to_words()
    }
}
