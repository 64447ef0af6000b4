//! Parameter calculation for prime moduli.

use super::{
    MontyForm, MontyParams,
    mul::{mul_montgomery_portable, square_montgomery},
};
use crate::{Limb, Uint, WideWord};

/// Parameters for computing square roots modulo a prime, derived from its [`MontyParams`].
///
/// Everything here is a function of the modulus alone, so it is computed in variable time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeParams<const LIMBS: usize> {
    /// A constant such that the modulus `p = t * 2^s + 1` for `s > 0` and some odd `t`.
    pub(super) s: u32,
    /// The smallest quadratic non-residue of the modulus.
    pub(super) generator: u32,
    /// The exponent to use in computing a modular square root.
    pub(super) sqrt_exp: Uint<LIMBS>,
    /// A primitive `2^s`-th root of unity for the modulus, in Montgomery form.
    pub(super) monty_root_unity: Uint<LIMBS>,
}

impl<const LIMBS: usize> PrimeParams<LIMBS> {
    /// Instantiates a new set of [`PrimeParams`] given [`MontyParams`] for a prime modulus.
    ///
    /// Returns `None` if no quadratic non-residue was found, which proves the modulus composite.
    /// A `Some` result does not prove the modulus prime.
    pub const fn new_vartime(params: &MontyParams<LIMBS>) -> Option<Self> {
        let p = params.modulus.as_ref();
        let p_minus_one = p.wrapping_sub(&Uint::ONE);
        if p_minus_one.is_zero().is_true_vartime() {
            return None;
        }

        let mut s = 0;
        while !p_minus_one.bit(s).is_true_vartime() {
            s += 1;
        }

        let Some(generator) = find_non_residue(p) else {
            return None;
        };

        let (sqrt_exp, monty_root_unity) = if s == 1 {
            // (p + 1) / 4, and -1 is the square root of unity
            let exp = p.shr1().shr1().wrapping_add(&Uint::ONE);
            (exp, p.wrapping_sub(&params.one))
        } else {
            // t = (p - 1) / 2^s, exp = (t - 1) / 2, and generator^t has order 2^s
            let mut t = p_minus_one;
            let mut i = 0;
            while i < s {
                t = t.shr1();
                i += 1;
            }
            let g = MontyForm::new(&Uint::from_u32(generator), *params);
            (t.shr1(), pow_vartime(g.as_montgomery(), &t, params))
        };

        Some(Self {
            s,
            generator,
            sqrt_exp,
            monty_root_unity,
        })
    }

    /// Get the constant `s` such that `p = t * 2^s + 1` for odd `t`.
    pub const fn s(&self) -> u32 {
        self.s
    }

    /// Get the quadratic non-residue used to derive the root of unity.
    pub const fn generator(&self) -> u32 {
        self.generator
    }
}

/// Computes `x^exponent` in Montgomery form by square-and-multiply, in variable time.
const fn pow_vartime<const LIMBS: usize>(
    x: &Uint<LIMBS>,
    exponent: &Uint<LIMBS>,
    params: &MontyParams<LIMBS>,
) -> Uint<LIMBS> {
    let mut z = params.one;
    let mut i = exponent.bits();
    while i > 0 {
        i -= 1;
        z = square_montgomery(
            &z,
            &params.modulus,
            params.mod_neg_inv,
            params.spare_bits,
            false,
        );
        if exponent.bit(i).is_true_vartime() {
            z = mul_montgomery_portable(
                &z,
                x,
                &params.modulus,
                params.mod_neg_inv,
                params.spare_bits,
                false,
            );
        }
    }
    z
}

/// Finds the smallest `g >= 2` with Jacobi symbol `(g / p) == -1`.
const fn find_non_residue<const LIMBS: usize>(p: &Uint<LIMBS>) -> Option<u32> {
    let mut g = 2u32;
    loop {
        match jacobi_symbol_vartime(g, p) {
            -1 => return Some(g),
            0 => return None,
            _ => {
                g = match g.checked_add(1) {
                    Some(next) => next,
                    None => return None,
                };
            }
        }
    }
}

/// Jacobi symbol `(a / p)` for a small `a` and an odd `p`.
const fn jacobi_symbol_vartime<const LIMBS: usize>(a: u32, p: &Uint<LIMBS>) -> i8 {
    #[allow(trivial_numeric_casts)]
    let p_mod_8 = (p.limbs[0].0 & 7) as u32;
    let mut sign = 1i8;

    let mut a = a;
    while a % 2 == 0 {
        a /= 2;
        if p_mod_8 == 3 || p_mod_8 == 5 {
            sign = -sign;
        }
    }

    // Quadratic reciprocity brings the pair down to single words.
    if a % 4 == 3 && p_mod_8 % 4 == 3 {
        sign = -sign;
    }
    sign * jacobi_symbol_u32(rem_u32(p, a), a)
}

/// Jacobi symbol `(a / n)` for an odd `n`.
const fn jacobi_symbol_u32(mut a: u32, mut n: u32) -> i8 {
    let mut sign = 1i8;
    a %= n;
    while a != 0 {
        while a % 2 == 0 {
            a /= 2;
            let r = n % 8;
            if r == 3 || r == 5 {
                sign = -sign;
            }
        }
        let tmp = a;
        a = n;
        n = tmp;
        if a % 4 == 3 && n % 4 == 3 {
            sign = -sign;
        }
        a %= n;
    }

    if n == 1 { sign } else { 0 }
}

/// Computes `p mod d` for a non-zero `d`.
const fn rem_u32<const LIMBS: usize>(p: &Uint<LIMBS>, d: u32) -> u32 {
    let d = d as WideWord;
    let mut rem: WideWord = 0;
    let mut i = LIMBS;
    while i > 0 {
        i -= 1;
        rem = ((rem << Limb::BITS) | p.limbs[i].0 as WideWord) % d;
    }
    rem as u32
}

#[cfg(test)]
mod tests {
    use super::{PrimeParams, jacobi_symbol_vartime};
    use crate::{
        Odd, U64, U256,
        modular::{MontyForm, MontyParams},
    };

    #[test]
    fn jacobi_symbol() {
        let p = U64::from_u64(101);
        // squares mod 101
        assert_eq!(jacobi_symbol_vartime(4, &p), 1);
        assert_eq!(jacobi_symbol_vartime(5, &p), 1);
        // non-residues mod 101
        assert_eq!(jacobi_symbol_vartime(2, &p), -1);
        assert_eq!(jacobi_symbol_vartime(3, &p), -1);
        // shares a factor with 15
        assert_eq!(jacobi_symbol_vartime(3, &U64::from_u64(15)), 0);
    }

    #[test]
    fn s_1() {
        // P-256 base field, p = 3 mod 4
        let params = MontyParams::new(Odd::<U256>::from_be_hex(
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        ));
        let prime_params = PrimeParams::new_vartime(&params).unwrap();
        assert_eq!(prime_params.s(), 1);
        assert_eq!(prime_params.generator(), 3);
        assert_eq!(
            MontyForm::from_montgomery(prime_params.monty_root_unity, params),
            MontyForm::minus_one(params)
        );
    }

    #[test]
    fn s_32() {
        // BLS12-381 scalar field, p = 1 mod 2^32
        let params = MontyParams::new(Odd::<U256>::from_be_hex(
            "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
        ));
        let prime_params = PrimeParams::new_vartime(&params).unwrap();
        assert_eq!(prime_params.s(), 32);
        assert_eq!(prime_params.generator(), 5);

        // The root of unity has order exactly 2^32.
        let mut root = MontyForm::from_montgomery(prime_params.monty_root_unity, params);
        for _ in 0..31 {
            root = root.square();
        }
        assert_eq!(root, MontyForm::minus_one(params));
    }

    #[test]
    fn composite_modulus() {
        let params = MontyParams::new(Odd::new(U64::from_u64(15)).unwrap());
        assert!(PrimeParams::new_vartime(&params).is_none());
    }
}
