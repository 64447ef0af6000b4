//! Error type.

use core::fmt;

/// Result type with the `crypto-monty` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while configuring a modulus or decoding inputs.
///
/// None of these can occur inside an arithmetic kernel: they are all detected before a kernel
/// runs, on public data.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The modulus is even, so it has no Montgomery representation.
    EvenModulus,

    /// The input was not a well-formed hex string or byte string of the expected size.
    InvalidEncoding,

    /// The value is not less than the modulus.
    NotReduced,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EvenModulus => f.write_str("modulus must be odd"),
            Error::InvalidEncoding => f.write_str("invalid encoding"),
            Error::NotReduced => f.write_str("value is not reduced modulo the modulus"),
        }
    }
}

impl core::error::Error for Error {}
