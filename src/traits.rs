//! Traits provided by this crate

#[cfg(feature = "rand_core")]
use rand_core::{RngCore, TryRngCore};

/// Zero values.
pub trait Zero: Sized {
    /// The value `0`.
    const ZERO: Self;

    /// Determine if this value is equal to zero.
    ///
    /// # Returns
    ///
    /// If zero, returns `Choice(1)`. Otherwise, returns `Choice(0)`.
    fn is_zero(&self) -> subtle::Choice;
}

/// One values.
pub trait One: Sized {
    /// The value `1`.
    const ONE: Self;
}

/// Random number generation support.
#[cfg(feature = "rand_core")]
pub trait Random: Sized {
    /// Generate a random value.
    ///
    /// If `rng` is a CSRNG, the generation is cryptographically secure as well.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let Ok(out) = Self::try_random(rng);
        out
    }

    /// Generate a random value, returning the RNG error if it fails.
    fn try_random<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, R::Error>;
}

/// Modular random number generation support.
#[cfg(feature = "rand_core")]
pub trait RandomMod: Sized + Zero {
    /// Generate a random number which is less than a given `modulus`.
    ///
    /// This uses rejection sampling, a method which produces an unbiased distribution of
    /// in-range values provided the underlying RNG is unbiased, but runs in variable-time.
    ///
    /// The variable-time nature of the algorithm should not pose a security issue so long as
    /// the underlying random number generator is truly a CSRNG, where previous outputs are
    /// unrelated to subsequent outputs and do not reveal information about the RNG's internal
    /// state.
    fn random_mod<R: RngCore + ?Sized>(rng: &mut R, modulus: &Self) -> Self {
        let Ok(out) = Self::try_random_mod(rng, modulus);
        out
    }

    /// Generate a random number which is less than a given `modulus`, returning the RNG error
    /// if it fails.
    fn try_random_mod<R: TryRngCore + ?Sized>(
        rng: &mut R,
        modulus: &Self,
    ) -> Result<Self, R::Error>;
}

/// Encoding support.
pub trait Encoding: Sized {
    /// Byte array representation.
    type Repr: AsRef<[u8]> + AsMut<[u8]> + Copy + Clone + Sized;

    /// Decode from big endian bytes.
    fn from_be_bytes(bytes: Self::Repr) -> Self;

    /// Decode from little endian bytes.
    fn from_le_bytes(bytes: Self::Repr) -> Self;

    /// Encode to big endian bytes.
    fn to_be_bytes(&self) -> Self::Repr;

    /// Encode to little endian bytes.
    fn to_le_bytes(&self) -> Self::Repr;
}

/// A generalization for numbers kept in optimized representations (e.g. Montgomery)
/// that can be converted back to the original form.
pub trait Retrieve {
    /// The original type.
    type Output;

    /// Convert the number back from the optimized representation.
    fn retrieve(&self) -> Self::Output;
}
