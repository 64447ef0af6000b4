//! Limb comparisons

use crate::{ConstChoice, Limb};
use core::cmp::Ordering;
use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

impl Limb {
    /// Is this limb an odd number?
    #[inline]
    pub const fn is_odd(&self) -> ConstChoice {
        ConstChoice::from_word_lsb(self.0 & 1)
    }

    /// Perform a comparison of the inner value in variable-time.
    ///
    /// Note that the [`PartialOrd`] and [`Ord`] impls wrap constant-time
    /// comparisons using the `subtle` crate.
    pub fn cmp_vartime(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Performs an equality check in variable-time.
    pub const fn eq_vartime(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    /// Returns the truthy value if `lhs == rhs` and the falsy value otherwise.
    #[inline]
    pub(crate) const fn ct_eq_const(lhs: Self, rhs: Self) -> ConstChoice {
        ConstChoice::from_word_eq(lhs.0, rhs.0)
    }

    /// Returns the truthy value if `lhs < rhs` and the falsy value otherwise.
    #[inline]
    pub(crate) const fn ct_lt_const(lhs: Self, rhs: Self) -> ConstChoice {
        ConstChoice::from_word_lt(lhs.0, rhs.0)
    }

    /// Returns the truthy value if `lhs > rhs` and the falsy value otherwise.
    #[inline]
    pub(crate) const fn ct_gt_const(lhs: Self, rhs: Self) -> ConstChoice {
        ConstChoice::from_word_gt(lhs.0, rhs.0)
    }
}

impl ConstantTimeEq for Limb {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        Limb::ct_eq_const(*self, *other).into()
    }
}

impl ConstantTimeGreater for Limb {
    #[inline]
    fn ct_gt(&self, other: &Self) -> Choice {
        Limb::ct_gt_const(*self, *other).into()
    }
}

impl ConstantTimeLess for Limb {
    #[inline]
    fn ct_lt(&self, other: &Self) -> Choice {
        Limb::ct_lt_const(*self, *other).into()
    }
}

impl Eq for Limb {}

impl Ord for Limb {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut n = 0i8;
        n -= self.ct_lt(other).unwrap_u8() as i8;
        n += self.ct_gt(other).unwrap_u8() as i8;

        match n {
            -1 => Ordering::Less,
            1 => Ordering::Greater,
            _ => {
                debug_assert_eq!(n, 0);
                debug_assert!(bool::from(self.ct_eq(other)));
                Ordering::Equal
            }
        }
    }
}

impl PartialOrd for Limb {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Limb {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}
