//! Limb encoding

use super::{Limb, Word};

impl Limb {
    /// Decode a limb from its big endian byte representation.
    #[inline]
    pub const fn from_be_bytes(bytes: [u8; Limb::BYTES]) -> Self {
        Limb(Word::from_be_bytes(bytes))
    }

    /// Decode a limb from its little endian byte representation.
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; Limb::BYTES]) -> Self {
        Limb(Word::from_le_bytes(bytes))
    }

    /// Serialize this limb as big endian bytes.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; Limb::BYTES] {
        self.0.to_be_bytes()
    }

    /// Serialize this limb as little endian bytes.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; Limb::BYTES] {
        self.0.to_le_bytes()
    }
}
