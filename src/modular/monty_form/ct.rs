//! Constant-time support for integers in Montgomery form with a modulus set at runtime.

use super::MontyForm;
use crate::{ConstChoice, Uint, modular::MontyParams};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

impl<const LIMBS: usize> MontyForm<LIMBS> {
    /// Return `b` if `c` is truthy, otherwise return `a`.
    ///
    /// Both operands must share the same parameters.
    pub const fn select(a: &Self, b: &Self, c: ConstChoice) -> Self {
        Self {
            montgomery_form: Uint::select(&a.montgomery_form, &b.montgomery_form, c),
            params: MontyParams::select(&a.params, &b.params, c),
        }
    }

    /// Swap `a` and `b` if `c` is truthy, otherwise leave them unchanged.
    pub const fn conditional_swap(a: &mut Self, b: &mut Self, c: ConstChoice) {
        Uint::conditional_swap(&mut a.montgomery_form, &mut b.montgomery_form, c);
    }

    /// Returns `self + rhs` if `c` is truthy, otherwise `self`.
    pub const fn conditional_add(&self, rhs: &Self, c: ConstChoice) -> Self {
        Self::select(self, &self.add(rhs), c)
    }

    /// Returns `self - rhs` if `c` is truthy, otherwise `self`.
    pub const fn conditional_sub(&self, rhs: &Self, c: ConstChoice) -> Self {
        Self::select(self, &self.sub(rhs), c)
    }

    /// Returns `-self` if `c` is truthy, otherwise `self`.
    pub const fn conditional_neg(&self, c: ConstChoice) -> Self {
        Self::select(self, &self.neg(), c)
    }
}

impl<const LIMBS: usize> ConditionallySelectable for MontyForm<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::select(a, b, choice.into())
    }
}

impl<const LIMBS: usize> ConstantTimeEq for MontyForm<LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.montgomery_form.ct_eq(&other.montgomery_form) & self.params.ct_eq(&other.params)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ConstChoice, Odd, U128,
        modular::{MontyForm, MontyParams},
    };
    use subtle::{ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

    fn params() -> MontyParams<{ U128::LIMBS }> {
        MontyParams::new(Odd::<U128>::from_be_hex("ffffffffffffffff7fffffffffffffff"))
    }

    #[test]
    fn select_and_swap() {
        let params = params();
        let a = MontyForm::new(&U128::from(3u8), params);
        let b = MontyForm::new(&U128::from(5u8), params);

        assert_eq!(MontyForm::select(&a, &b, ConstChoice::FALSE), a);
        assert_eq!(MontyForm::select(&a, &b, ConstChoice::TRUE), b);
        assert_eq!(MontyForm::conditional_select(&a, &b, 1u8.into()), b);

        let (mut x, mut y) = (a, b);
        MontyForm::conditional_swap(&mut x, &mut y, ConstChoice::FALSE);
        assert_eq!((x, y), (a, b));
        MontyForm::conditional_swap(&mut x, &mut y, ConstChoice::TRUE);
        assert_eq!((x, y), (b, a));
    }

    #[test]
    fn conditional_arithmetic() {
        let params = params();
        let a = MontyForm::new(&U128::from(3u8), params);
        let b = MontyForm::new(&U128::from(5u8), params);

        assert_eq!(a.conditional_add(&b, ConstChoice::FALSE), a);
        assert_eq!(a.conditional_add(&b, ConstChoice::TRUE).retrieve(), U128::from(8u8));
        assert_eq!(b.conditional_sub(&a, ConstChoice::FALSE), b);
        assert_eq!(b.conditional_sub(&a, ConstChoice::TRUE).retrieve(), U128::from(2u8));
        assert_eq!(a.conditional_neg(ConstChoice::TRUE), -a);

        let mut c = a;
        c.conditional_negate(0u8.into());
        assert_eq!(c, a);
        c.conditional_negate(1u8.into());
        assert_eq!(c, -a);
    }

    #[test]
    fn ct_eq() {
        let params = params();
        let a = MontyForm::new(&U128::from(3u8), params);
        let b = MontyForm::new(&U128::from(5u8), params);
        assert!(bool::from(a.ct_eq(&a)));
        assert!(!bool::from(a.ct_eq(&b)));
    }
}
