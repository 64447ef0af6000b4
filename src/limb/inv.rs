use crate::Limb;

impl Limb {
    /// Computes the inverse of an odd limb modulo `2^Limb::BITS`.
    ///
    /// Uses Newton's iteration `x <- x * (2 - self * x)`, which doubles the number of correct
    /// low bits each step. Every odd `a` satisfies `a * a = 1 mod 8`, so `x = a` starts with three
    /// correct bits. Runs in constant time; the result is meaningless for even inputs.
    pub const fn invert_mod_word(self) -> Self {
        debug_assert!(self.is_odd().is_true_vartime());
        let mut x = self;
        let mut correct_bits = 3;
        while correct_bits < Limb::BITS {
            x = x.wrapping_mul(Limb(2).wrapping_sub(self.wrapping_mul(x)));
            correct_bits *= 2;
        }
        x
    }

    /// Computes `-self^-1 mod 2^Limb::BITS` for an odd limb.
    ///
    /// This is the `m0ninv` constant of Montgomery reduction for a modulus whose least
    /// significant limb is `self`.
    pub const fn neg_invert_mod_word(self) -> Self {
        self.invert_mod_word().wrapping_neg()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, Word};

    #[test]
    fn invert_mod_word() {
        for a in [1, 3, 5, 0xffff_fffd, Word::MAX, Word::MAX - 2, 0x1234_5679] {
            let a = Limb(a);
            assert_eq!(a.wrapping_mul(a.invert_mod_word()), Limb::ONE);
        }
    }

    #[test]
    fn neg_invert_mod_word() {
        // BN254 base field least significant limb
        #[cfg(target_pointer_width = "64")]
        {
            let m0 = Limb(0x3c208c16d87cfd47);
            assert_eq!(m0.neg_invert_mod_word(), Limb(0x87d20782e4866389));
        }

        for a in [1, 7, Word::MAX] {
            let a = Limb(a);
            assert_eq!(a.wrapping_mul(a.neg_invert_mod_word()), Limb::MAX);
        }
    }
}
