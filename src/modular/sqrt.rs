//! Constant-time square roots and quadratic residuosity in Montgomery form.

use super::{MontyForm, MontyParams, PrimeParams};
use crate::{ConstChoice, Uint};
use subtle::CtOption;

/// Compute a modular square root (if it exists) of `monty_value`, given in Montgomery form
/// together with the [`MontyParams`] and [`PrimeParams`] of its modulus.
///
/// Uses Shanks' `x^((p+1)/4)` when `p = 3 mod 4` and constant-time Tonelli-Shanks otherwise. The
/// sequence of operations depends only on the modulus.
pub(crate) fn sqrt_montgomery_form<const LIMBS: usize>(
    monty_value: &Uint<LIMBS>,
    monty_params: &MontyParams<LIMBS>,
    prime_params: &PrimeParams<LIMBS>,
) -> CtOption<Uint<LIMBS>> {
    let value = MontyForm::from_montgomery(*monty_value, *monty_params);
    let b = value.pow(&prime_params.sqrt_exp);

    let root = if prime_params.s == 1 {
        b
    } else {
        // x = value^((t+1)/2), d = value^t
        let mut x = value.mul(&b);
        let mut d = x.mul(&b);
        let mut z = MontyForm::from_montgomery(prime_params.monty_root_unity, *monty_params);
        let mut v = prime_params.s;

        for max_v in (1..=prime_params.s).rev() {
            let mut k = 1;
            let mut tmp = d.square();
            let mut j_less_than_v = ConstChoice::TRUE;

            for j in 2..max_v {
                let tmp_is_one = tmp.is_one();
                let squared = MontyForm::select(&tmp, &z, tmp_is_one).square();
                tmp = MontyForm::select(&squared, &tmp, tmp_is_one);
                j_less_than_v = j_less_than_v.and(ConstChoice::from_u32_eq(j, v).not());
                z = MontyForm::select(&z, &squared, tmp_is_one.and(j_less_than_v));
                k = tmp_is_one.select_u32(j, k);
            }

            x = MontyForm::select(&x.mul(&z), &x, d.is_one());
            z = z.square();
            d = d.mul(&z);
            v = k;
        }

        x
    };

    let is_root = Uint::eq(root.square().as_montgomery(), value.as_montgomery());
    CtOption::new(root.to_montgomery(), is_root.into())
}

/// Euler's criterion: truthy if `monty_value` is zero or a quadratic residue modulo the prime
/// modulus of `monty_params`.
pub(crate) fn is_square_montgomery_form<const LIMBS: usize>(
    monty_value: &Uint<LIMBS>,
    monty_params: &MontyParams<LIMBS>,
) -> ConstChoice {
    let value = MontyForm::from_montgomery(*monty_value, *monty_params);
    // (p - 1) / 2 for odd p
    let legendre_exp = monty_params.modulus.as_ref().shr1();
    value.pow(&legendre_exp).is_one().or(value.is_zero())
}
