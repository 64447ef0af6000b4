//! Modular arithmetic support.
//!
//! This module provides the Montgomery kernels and the field-element types built on them.
//!
//! # Kernels
//!
//! The free functions operate on reduced [`Uint`](crate::Uint) values and an odd modulus, taking
//! the per-modulus constants (`mod_neg_inv`, `spare_bits`) explicitly. They are what the field
//! types below call, and are exposed for callers that manage their own representation.
//!
//! | Kernel | Operation |
//! |---|---|
//! | [`add_mod`], [`double_mod`], [`sub_mod`], [`neg_mod`] | modular add/sub with branchless correction |
//! | [`montgomery_reduction`] | `T * R^-1 mod M` for a double-width `T` |
//! | [`mul_montgomery`], [`square_montgomery`] | fused Montgomery multiplication and squaring |
//! | [`mul_montgomery_cios_sparebit`], [`mul_montgomery_cios`], [`mul_montgomery_fips`] | individual portable multiplication kernels |
//!
//! # Constant moduli
//!
//! The [`ConstMontyForm`] and [`ConstMontyParams`] types implement support for modular arithmetic where the
//! modulus is fixed at compile-time.
//!
//! The [`const_monty_params!`][`crate::const_monty_params`] macro can be used to define a compile-time modulus,
//! whereas the [`const_monty_form!`][`crate::const_monty_form`] macro can define a [`ConstMontyForm`] constant.
//!
//! # Dynamic moduli chosen at runtime
//!
//! The [`MontyForm`] and [`MontyParams`] types implement support for modular arithmetic where
//! the modulus can vary at runtime.
//!
//! # Square roots
//!
//! Square roots need a few more constants of a prime modulus, held in [`PrimeParams`]. For
//! compile-time moduli the [`const_prime_monty_params!`][`crate::const_prime_monty_params`]
//! macro computes them along with the [`ConstMontyParams`] and implements
//! [`ConstPrimeMontyParams`].

mod const_monty_form;
mod monty_form;
mod monty_params;
mod prime_params;

mod add;
mod cios;
mod final_sub;
mod fips;
mod mul;
mod pow;
mod reduction;
mod sqrt;
mod sub;

#[cfg(all(
    feature = "adx",
    target_arch = "x86_64",
    target_pointer_width = "64",
    target_feature = "adx",
    target_feature = "bmi2"
))]
mod x86_64;

pub use self::{
    add::{add_mod, double_mod},
    cios::{mul_montgomery_cios, mul_montgomery_cios_sparebit},
    const_monty_form::{ConstMontyForm, ConstMontyParams, ConstPrimeMontyParams},
    final_sub::{final_sub_may_overflow, final_sub_no_carry},
    fips::mul_montgomery_fips,
    monty_form::MontyForm,
    monty_params::MontyParams,
    mul::{mul_montgomery, mul_montgomery_portable, square_montgomery},
    prime_params::PrimeParams,
    reduction::{montgomery_reduction, montgomery_reduction_lazy, montgomery_retrieve},
    sub::{neg_mod, sub_mod},
};
pub use crate::traits::Retrieve;

#[cfg(all(
    feature = "adx",
    target_arch = "x86_64",
    target_pointer_width = "64",
    target_feature = "adx",
    target_feature = "bmi2"
))]
pub use self::x86_64::mul_montgomery_adx;

#[cfg(test)]
mod tests {
    use crate::{
        U256, Uint, WideUint, const_monty_form, const_monty_params,
        modular::{
            const_monty_form::{ConstMontyForm, ConstMontyParams},
            reduction::montgomery_reduction,
        },
    };

    const_monty_params!(
        Modulus,
        U256,
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"
    );

    fn reduce(t: &WideUint<{ U256::LIMBS }>) -> U256 {
        montgomery_reduction(
            t,
            Modulus::PARAMS.modulus(),
            Modulus::PARAMS.mod_neg_inv(),
            Modulus::PARAMS.spare_bits(),
        )
    }

    #[test]
    fn test_reducing_one() {
        // Divide the value R by R, which should equal 1
        assert_eq!(reduce(&WideUint::from_lo(Modulus::PARAMS.one())), Uint::ONE);
    }

    #[test]
    fn test_reducing_r2() {
        // Divide the value R^2 by R, which should equal R
        assert_eq!(
            reduce(&WideUint::from_lo(Modulus::PARAMS.r2())),
            *Modulus::PARAMS.one()
        );
    }

    #[test]
    fn test_reducing_r2_wide() {
        // Divide the value ONE^2 by R, which should equal ONE
        assert_eq!(
            reduce(&Modulus::PARAMS.one().square_wide()),
            *Modulus::PARAMS.one()
        );
    }

    #[test]
    fn test_reducing_xr_wide() {
        // Reducing xR should return x
        let x =
            U256::from_be_hex("44acf6b7e36c1342c2c5897204fe09504e1e2efb1a900377dbc4e7a6a133ec56");
        let product = x.widening_mul(Modulus::PARAMS.one());
        assert_eq!(reduce(&product), x);
    }

    #[test]
    fn test_new_retrieve() {
        let x =
            U256::from_be_hex("44acf6b7e36c1342c2c5897204fe09504e1e2efb1a900377dbc4e7a6a133ec56");
        let x_mod = ConstMontyForm::<Modulus, { Modulus::LIMBS }>::new(&x);

        // Confirm that when creating a Modular and retrieving the value, that it equals the original
        assert_eq!(x, x_mod.retrieve());
    }

    #[test]
    fn test_const_monty_form_macro() {
        let x =
            U256::from_be_hex("44acf6b7e36c1342c2c5897204fe09504e1e2efb1a900377dbc4e7a6a133ec56");
        assert_eq!(
            ConstMontyForm::<Modulus, { Modulus::LIMBS }>::new(&x),
            const_monty_form!(x, Modulus)
        );
    }
}
