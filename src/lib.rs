#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

//! # Usage
//!
//! The core kernels operate on [`Uint`] values and an odd modulus wrapped in [`Odd`]. Most
//! callers will want [`modular::MontyParams`] and [`modular::MontyForm`], which precompute the
//! Montgomery constants for a modulus and select the right kernel variant for it:
//!
//! ```
//! use crypto_monty::{U256, Odd, modular::{MontyForm, MontyParams}};
//!
//! // BN254 scalar field
//! let modulus = Odd::<U256>::from_be_hex(
//!     "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"
//! );
//! let params = MontyParams::new(modulus);
//!
//! let a = MontyForm::new(&U256::from(3u8), params);
//! let b = MontyForm::new(&U256::from(5u8), params);
//!
//! assert_eq!((a * b).retrieve(), U256::from(15u8));
//! assert_eq!((a - b).retrieve(), modulus.wrapping_sub(&U256::from(2u8)));
//! ```
//!
//! The same kernels are exposed directly for callers that manage their own representation:
//!
//! ```
//! use crypto_monty::{U128, Odd, modular::{self, MontyParams}};
//!
//! let params = MontyParams::new(Odd::<U128>::from_be_hex("ffffffffffffffff7fffffffffffffff"));
//! let a = U128::from_be_hex("ff677f6000000001d79897153fa818fd");
//!
//! // a * a * R^-1 mod M
//! let product = modular::mul_montgomery(
//!     &a,
//!     &a,
//!     params.modulus(),
//!     params.mod_neg_inv(),
//!     params.spare_bits(),
//!     false,
//! );
//! let reduced = modular::montgomery_reduction(
//!     &a.square_wide(),
//!     params.modulus(),
//!     params.mod_neg_inv(),
//!     params.spare_bits(),
//! );
//! assert_eq!(product, reduced);
//! ```

#[macro_use]
mod macros;

mod const_choice;
mod error;
mod limb;
pub mod modular;
mod odd;
mod primitives;
mod traits;
mod uint;
mod wide;
mod word;

pub use crate::{
    const_choice::{ConstChoice, ConstCtOption},
    error::{Error, Result},
    limb::Limb,
    odd::Odd,
    traits::*,
    uint::*,
    wide::WideUint,
    word::{WideWord, Word},
};
pub use subtle;

#[cfg(feature = "rand_core")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;
