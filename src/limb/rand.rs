//! Random number generator support

use super::Limb;
use crate::{Random, RandomMod, Word};
use rand_core::TryRngCore;
use subtle::ConstantTimeLess;

impl Random for Limb {
    fn try_random<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, R::Error> {
        #[cfg(target_pointer_width = "32")]
        let val = rng.try_next_u32()?;
        #[cfg(target_pointer_width = "64")]
        let val = rng.try_next_u64()?;

        Ok(Self(val))
    }
}

impl RandomMod for Limb {
    fn try_random_mod<R: TryRngCore + ?Sized>(
        rng: &mut R,
        modulus: &Self,
    ) -> Result<Self, R::Error> {
        assert!(modulus.0 != 0, "modulus must be non-zero");
        let mask = Word::MAX >> modulus.leading_zeros();

        loop {
            let n = Limb(Limb::try_random(rng)?.0 & mask);
            if n.ct_lt(modulus).into() {
                return Ok(n);
            }
        }
    }
}
