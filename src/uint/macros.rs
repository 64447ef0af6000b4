//! Macros used to define type aliases of `Uint`.

// TODO: use `generic_const_exprs` when stable to make generic around bits.
macro_rules! impl_uint_aliases {
    ($(($name:ident, $bits:expr, $doc:expr)),+) => {
        $(
            #[doc = $doc]
            #[doc = "unsigned big integer."]
            pub type $name = Uint<{ nlimbs!($bits) }>;

            impl $crate::Encoding for $name {
                type Repr = [u8; { nlimbs!($bits) * Limb::BYTES }];

                #[inline]
                fn from_be_bytes(bytes: Self::Repr) -> Self {
                    Self::from_be_slice(&bytes)
                }

                #[inline]
                fn from_le_bytes(bytes: Self::Repr) -> Self {
                    Self::from_le_slice(&bytes)
                }

                #[inline]
                fn to_be_bytes(&self) -> Self::Repr {
                    let mut result = [0u8; { nlimbs!($bits) * Limb::BYTES }];
                    self.write_be_bytes(&mut result);
                    result
                }

                #[inline]
                fn to_le_bytes(&self) -> Self::Repr {
                    let mut result = [0u8; { nlimbs!($bits) * Limb::BYTES }];
                    self.write_le_bytes(&mut result);
                    result
                }
            }
        )+
    };
}
