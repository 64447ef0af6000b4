//! [`ConstMontyForm`]/[`ConstMontyParams`] support macros.

#[cfg(doc)]
use crate::modular::{ConstMontyForm, ConstMontyParams, ConstPrimeMontyParams};

/// Create a type representing a modulus which impls the [`ConstMontyParams`] trait with the given
/// name, type, value (in big endian hex), and optional documentation string.
///
/// # Usage
///
/// ```
/// use crypto_monty::{U256, const_monty_params};
///
/// const_monty_params!(
///     MyModulus,
///     U256,
///     "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
///     "Docs for my modulus"
/// );
/// ```
///
/// The modulus _must_ be odd, or this will panic.
// TODO: use `adt_const_params` when stable to make a `ConstMontyForm` generic around a modulus
#[macro_export]
macro_rules! const_monty_params {
    ($name:ident, $uint_type:ty, $value:expr) => {
        $crate::const_monty_params!(
            $name,
            $uint_type,
            $value,
            "Modulus which impls `ConstMontyParams`"
        );
    };
    ($name:ident, $uint_type:ty, $value:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name;
        impl $crate::modular::ConstMontyParams<{ <$uint_type>::LIMBS }> for $name {
            const LIMBS: usize = <$uint_type>::LIMBS;
            const PARAMS: $crate::modular::MontyParams<{ <$uint_type>::LIMBS }> =
                $crate::modular::MontyParams::new($crate::Odd::<$uint_type>::from_be_hex($value));
        }
    };
}

/// Like [`const_monty_params!`][`crate::const_monty_params`], but additionally impls
/// [`ConstPrimeMontyParams`] so that square roots are available.
///
/// # Usage
///
/// ```
/// use crypto_monty::{U256, const_prime_monty_params};
///
/// const_prime_monty_params!(
///     P256Base,
///     U256,
///     "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
///     "P-256 base field modulus"
/// );
/// ```
///
/// The modulus _must_ be prime. Composite moduli are only caught when a quadratic non-residue
/// search fails, in which case using the parameters fails to compile.
#[macro_export]
macro_rules! const_prime_monty_params {
    ($name:ident, $uint_type:ty, $value:expr) => {
        $crate::const_prime_monty_params!(
            $name,
            $uint_type,
            $value,
            "Prime modulus which impls `ConstPrimeMontyParams`"
        );
    };
    ($name:ident, $uint_type:ty, $value:expr, $doc:expr) => {
        $crate::const_monty_params!($name, $uint_type, $value, $doc);
        impl $crate::modular::ConstPrimeMontyParams<{ <$uint_type>::LIMBS }> for $name {
            const PRIME_PARAMS: $crate::modular::PrimeParams<{ <$uint_type>::LIMBS }> =
                match $crate::modular::PrimeParams::new_vartime(
                    &<$name as $crate::modular::ConstMontyParams<{ <$uint_type>::LIMBS }>>::PARAMS,
                ) {
                    Some(params) => params,
                    None => panic!("modulus is not prime"),
                };
        }
    };
}

/// Creates a [`ConstMontyForm`] with the given value for a specific modulus, i.e. a type which
/// impls [`ConstMontyParams`].
///
/// # Usage
///
/// ```
/// use crypto_monty::{U256, modular::ConstMontyParams, const_monty_form};
/// #
/// # crypto_monty::const_monty_params!(
/// #    MyModulus,
/// #    U256,
/// #    "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
/// #    "Docs for my modulus"
/// # );
///
/// const_monty_form!(U256::from(105u64), MyModulus);
/// ```
#[macro_export]
macro_rules! const_monty_form {
    ($value:expr, $modulus:ident) => {
        $crate::modular::ConstMontyForm::<$modulus, { $modulus::LIMBS }>::new(&$value)
    };
}
