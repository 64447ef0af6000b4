//! Random number generator support

use super::Uint;
use crate::{Limb, Random, RandomMod, Word};
use rand_core::TryRngCore;
use subtle::ConstantTimeLess;

impl<const LIMBS: usize> Random for Uint<LIMBS> {
    fn try_random<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, R::Error> {
        let mut limbs = [Limb::ZERO; LIMBS];

        for limb in &mut limbs {
            *limb = Limb::try_random(rng)?;
        }

        Ok(Self::new(limbs))
    }
}

impl<const LIMBS: usize> RandomMod for Uint<LIMBS> {
    fn try_random_mod<R: TryRngCore + ?Sized>(
        rng: &mut R,
        modulus: &Self,
    ) -> Result<Self, R::Error> {
        assert!(
            modulus.is_nonzero().is_true_vartime(),
            "modulus must be non-zero"
        );

        // Only the limbs up to the top set bit of the modulus are sampled, and the top one is
        // masked down to the same bit length, so each attempt succeeds with probability > 1/2.
        let n_bits = modulus.bits();
        let n_limbs = n_bits.div_ceil(Limb::BITS) as usize;
        let hi_bits = n_bits - (n_limbs as u32 - 1) * Limb::BITS;
        let mask = Word::MAX >> (Limb::BITS - hi_bits);

        let mut n = Self::ZERO;
        loop {
            for limb in &mut n.limbs[..n_limbs] {
                *limb = Limb::try_random(rng)?;
            }
            n.limbs[n_limbs - 1] = Limb(n.limbs[n_limbs - 1].0 & mask);

            if n.ct_lt(modulus).into() {
                return Ok(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Random, RandomMod, U256, Uint};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn random() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let a = U256::random(&mut rng);
        let b = U256::random(&mut rng);
        assert_ne!(a, b);
        assert_ne!(a, U256::ZERO);
    }

    #[test]
    fn random_mod() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        // Single limb modulus
        let modulus = Uint::<4>::from(42u8);
        for _ in 0..50 {
            let res = Uint::<4>::random_mod(&mut rng, &modulus);
            assert!(res < modulus);
        }

        // Modulus spanning more than one limb, with a partial top limb
        let modulus =
            U256::from_be_hex("00000000000000000000000000000001ffffffffffffffffffffffffffffffff");
        for _ in 0..50 {
            let res = U256::random_mod(&mut rng, &modulus);
            assert!(res < modulus);
        }

        // Full width modulus
        let modulus = U256::MAX;
        let res = U256::random_mod(&mut rng, &modulus);
        assert!(res < modulus);
    }
}
