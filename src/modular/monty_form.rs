//! Implements `MontyForm`s, supporting modular arithmetic with a modulus set at runtime.

mod add;
mod ct;
mod invert;
mod mul;
mod neg;
mod pow;
mod sqrt;
mod sub;

use super::{
    MontyParams, Retrieve,
    const_monty_form::{ConstMontyForm, ConstMontyParams},
    reduction::{montgomery_reduction, montgomery_retrieve},
};
use crate::{ConstChoice, Error, Uint};

#[cfg(feature = "rand_core")]
use crate::{RandomMod, rand_core::TryRngCore};

/// An integer in Montgomery form modulo an odd modulus set at runtime, represented using `LIMBS`
/// limbs.
///
/// The value is always fully reduced. Arithmetic picks the kernel variant that the modulus in
/// its [`MontyParams`] allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MontyForm<const LIMBS: usize> {
    montgomery_form: Uint<LIMBS>,
    params: MontyParams<LIMBS>,
}

impl<const LIMBS: usize> MontyForm<LIMBS> {
    /// Instantiates a new `MontyForm` that represents this `integer` mod `params.modulus()`.
    ///
    /// `integer` does not need to be reduced.
    pub const fn new(integer: &Uint<LIMBS>, params: MontyParams<LIMBS>) -> Self {
        // integer * R^2 < R * modulus, so a single reduction suffices.
        let product = integer.widening_mul(&params.r2);
        let montgomery_form = montgomery_reduction(
            &product,
            &params.modulus,
            params.mod_neg_inv,
            params.spare_bits,
        );

        Self {
            montgomery_form,
            params,
        }
    }

    /// Instantiates a new `MontyForm` from an integer which must already be reduced.
    ///
    /// Intended for values decoded from untrusted input. Whether `integer` was reduced is leaked
    /// through the return value.
    pub fn try_new(integer: &Uint<LIMBS>, params: MontyParams<LIMBS>) -> Result<Self, Error> {
        if Uint::lt(integer, params.modulus.as_ref()).is_true_vartime() {
            Ok(Self::new(integer, params))
        } else {
            Err(Error::NotReduced)
        }
    }

    /// Retrieves the integer currently encoded in this `MontyForm`, guaranteed to be reduced.
    pub const fn retrieve(&self) -> Uint<LIMBS> {
        montgomery_retrieve(
            &self.montgomery_form,
            &self.params.modulus,
            self.params.mod_neg_inv,
        )
    }

    /// Instantiates a new `MontyForm` that represents zero.
    pub const fn zero(params: MontyParams<LIMBS>) -> Self {
        Self {
            montgomery_form: Uint::<LIMBS>::ZERO,
            params,
        }
    }

    /// Instantiates a new `MontyForm` that represents 1.
    pub const fn one(params: MontyParams<LIMBS>) -> Self {
        Self {
            montgomery_form: params.one,
            params,
        }
    }

    /// Instantiates a new `MontyForm` that represents `-1`, i.e. `modulus - 1`.
    pub const fn minus_one(params: MontyParams<LIMBS>) -> Self {
        Self::one(params).neg()
    }

    /// Returns the parameter struct used to initialize this object.
    pub const fn params(&self) -> &MontyParams<LIMBS> {
        &self.params
    }

    /// Access the `MontyForm` value in Montgomery form.
    pub const fn as_montgomery(&self) -> &Uint<LIMBS> {
        &self.montgomery_form
    }

    /// Create a `MontyForm` from a value in Montgomery form.
    ///
    /// `integer` must be less than the modulus.
    pub const fn from_montgomery(integer: Uint<LIMBS>, params: MontyParams<LIMBS>) -> Self {
        debug_assert!(Uint::lt(&integer, params.modulus.as_ref()).is_true_vartime());
        Self {
            montgomery_form: integer,
            params,
        }
    }

    /// Extract the value from the `MontyForm` in Montgomery form.
    pub const fn to_montgomery(&self) -> Uint<LIMBS> {
        self.montgomery_form
    }

    /// Is this value zero?
    pub const fn is_zero(&self) -> ConstChoice {
        self.montgomery_form.is_zero()
    }

    /// Is this value one?
    pub const fn is_one(&self) -> ConstChoice {
        Uint::eq(&self.montgomery_form, &self.params.one)
    }

    /// Is this value `-1`, i.e. `modulus - 1`?
    pub const fn is_minus_one(&self) -> ConstChoice {
        Uint::eq(
            &self.montgomery_form,
            &Self::minus_one(self.params).montgomery_form,
        )
    }

    /// Performs division by 2, that is returns `x` such that `x + x = self`.
    pub const fn div_by_2(&self) -> Self {
        Self {
            montgomery_form: self.montgomery_form.div_by_2_mod(&self.params.modulus),
            params: self.params,
        }
    }

    /// Generate a random value modulo `params.modulus()`.
    #[cfg(feature = "rand_core")]
    pub fn try_random<R: TryRngCore + ?Sized>(
        rng: &mut R,
        params: MontyParams<LIMBS>,
    ) -> Result<Self, R::Error> {
        let integer = Uint::try_random_mod(rng, params.modulus.as_ref())?;
        Ok(Self::new(&integer, params))
    }

    /// Generate a random value modulo `params.modulus()`.
    #[cfg(feature = "rand_core")]
    pub fn random<R: rand_core::RngCore + ?Sized>(rng: &mut R, params: MontyParams<LIMBS>) -> Self {
        let Ok(out) = Self::try_random(rng, params);
        out
    }
}

impl<const LIMBS: usize> Retrieve for MontyForm<LIMBS> {
    type Output = Uint<LIMBS>;
    fn retrieve(&self) -> Self::Output {
        self.retrieve()
    }
}

impl<const LIMBS: usize, P: ConstMontyParams<LIMBS>> From<&ConstMontyForm<P, LIMBS>>
    for MontyForm<LIMBS>
{
    fn from(const_monty_form: &ConstMontyForm<P, LIMBS>) -> Self {
        Self {
            montgomery_form: const_monty_form.to_montgomery(),
            params: P::PARAMS,
        }
    }
}

#[cfg(feature = "zeroize")]
impl<const LIMBS: usize> zeroize::Zeroize for MontyForm<LIMBS> {
    fn zeroize(&mut self) {
        self.montgomery_form.zeroize();
        self.params.zeroize();
    }
}
