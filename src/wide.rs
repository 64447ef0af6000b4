//! Double-width unsigned integers.
//!
//! A [`WideUint<LIMBS>`] holds `2 * LIMBS` limbs as two [`Uint<LIMBS>`] halves. It is the type of
//! full products and of the input to Montgomery reduction, and supports modular arithmetic with
//! respect to `p * 2^(LIMBS * Limb::BITS)` so that sums and differences of unreduced products can be
//! accumulated before a single reduction.

mod add;
mod sub;

use crate::{ConstChoice, Limb, Uint};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::DefaultIsZeroes;

/// Double-width unsigned integer made of a low and a high [`Uint`].
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Default, Hash)]
pub struct WideUint<const LIMBS: usize> {
    pub(crate) lo: Uint<LIMBS>,
    pub(crate) hi: Uint<LIMBS>,
}

impl<const LIMBS: usize> WideUint<LIMBS> {
    /// The value `0`.
    pub const ZERO: Self = Self::new(Uint::ZERO, Uint::ZERO);

    /// The value `1`.
    pub const ONE: Self = Self::new(Uint::ONE, Uint::ZERO);

    /// Maximum value this [`WideUint`] can express.
    pub const MAX: Self = Self::new(Uint::MAX, Uint::MAX);

    /// Build a double-width integer from its low and high halves.
    pub const fn new(lo: Uint<LIMBS>, hi: Uint<LIMBS>) -> Self {
        Self { lo, hi }
    }

    /// Zero-extend a single-width integer.
    pub const fn from_lo(lo: &Uint<LIMBS>) -> Self {
        Self::new(*lo, Uint::ZERO)
    }

    /// Create a new [`WideUint`] from the provided big endian hex string.
    ///
    /// # Panics
    /// - if the hex is malformed or not zero-padded to `2 * Uint::<LIMBS>::BYTES` bytes.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        assert!(
            bytes.len() == Uint::<LIMBS>::BYTES * 4,
            "hex string is not the expected size"
        );

        let (hi_hex, lo_hex) = bytes.split_at(Uint::<LIMBS>::BYTES * 2);
        let (hi, hi_err) = Uint::decode_be_hex(hi_hex);
        let (lo, lo_err) = Uint::decode_be_hex(lo_hex);
        assert!((hi_err | lo_err) == 0, "invalid hex byte");

        Self::new(lo, hi)
    }

    /// The low half.
    pub const fn lo(&self) -> Uint<LIMBS> {
        self.lo
    }

    /// The high half.
    pub const fn hi(&self) -> Uint<LIMBS> {
        self.hi
    }

    /// Split into `(lo, hi)` halves.
    pub const fn split(&self) -> (Uint<LIMBS>, Uint<LIMBS>) {
        (self.lo, self.hi)
    }

    /// Limb `i` of the `2 * LIMBS`-limb little endian representation.
    #[inline(always)]
    pub const fn limb(&self, i: usize) -> Limb {
        if i < LIMBS {
            self.lo.limbs[i]
        } else {
            self.hi.limbs[i - LIMBS]
        }
    }

    /// Return `b` if `c` is truthy, otherwise return `a`.
    #[inline]
    pub const fn select(a: &Self, b: &Self, c: ConstChoice) -> Self {
        Self::new(
            Uint::select(&a.lo, &b.lo, c),
            Uint::select(&a.hi, &b.hi, c),
        )
    }

    /// Returns the truthy value if `self` is zero and the falsy value otherwise.
    pub const fn is_zero(&self) -> ConstChoice {
        self.lo.is_zero().and(self.hi.is_zero())
    }

    /// Returns the truthy value if `self < rhs` and the falsy value otherwise.
    pub const fn lt(lhs: &Self, rhs: &Self) -> ConstChoice {
        let (_, borrow) = lhs.borrowing_sub(rhs, Limb::ZERO);
        ConstChoice::from_word_mask(borrow.0)
    }
}

impl<const LIMBS: usize> From<(Uint<LIMBS>, Uint<LIMBS>)> for WideUint<LIMBS> {
    fn from((lo, hi): (Uint<LIMBS>, Uint<LIMBS>)) -> Self {
        Self::new(lo, hi)
    }
}

impl<const LIMBS: usize> From<WideUint<LIMBS>> for (Uint<LIMBS>, Uint<LIMBS>) {
    fn from(wide: WideUint<LIMBS>) -> Self {
        wide.split()
    }
}

impl<const LIMBS: usize> ConditionallySelectable for WideUint<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::select(a, b, choice.into())
    }
}

impl<const LIMBS: usize> ConstantTimeEq for WideUint<LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.lo.ct_eq(&other.lo) & self.hi.ct_eq(&other.hi)
    }
}

impl<const LIMBS: usize> Eq for WideUint<LIMBS> {}

impl<const LIMBS: usize> PartialEq for WideUint<LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const LIMBS: usize> fmt::Debug for WideUint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideUint(0x{self:X})")
    }
}

impl<const LIMBS: usize> fmt::Display for WideUint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<const LIMBS: usize> fmt::LowerHex for WideUint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:x}{:x}", &self.hi, &self.lo)
    }
}

impl<const LIMBS: usize> fmt::UpperHex for WideUint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:X}{:X}", &self.hi, &self.lo)
    }
}

#[cfg(feature = "zeroize")]
impl<const LIMBS: usize> DefaultIsZeroes for WideUint<LIMBS> {}
