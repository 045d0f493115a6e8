//! Prime-field elements in Montgomery form, generated per curve by [`prime_field!`].

use ff::{Field, PrimeField};
use subtle::ConditionallyNegatable;

/// Byte-level access that generic hashing code needs beyond [`PrimeField`].
pub trait PrimeFieldBytes: PrimeField + ConditionallyNegatable {
    /// Width in bytes of the canonical big-endian encoding.
    const BYTES: usize;

    /// Reduces a big-endian integer of at most `2 * BYTES` bytes modulo `p`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is longer than `2 * BYTES`.
    fn from_be_bytes_wide(bytes: &[u8]) -> Self;
}

/// Inverts every element of `values` into `inverses` with a single field inversion
/// (Montgomery's trick). Zero inputs produce zero outputs.
///
/// This will panic if `values.len() != inverses.len()`.
pub fn batch_invert<F: Field>(values: &[F], inverses: &mut [F]) {
    assert_eq!(values.len(), inverses.len());

    let mut acc = F::ONE;
    for (v, inv) in values.iter().zip(inverses.iter_mut()) {
        // inverses[i] = v_0 * ... * v_{i-1}, skipping zeros
        *inv = acc;
        acc = F::conditional_select(&(acc * v), &acc, v.is_zero());
    }

    // acc is a product of non-zero values, so this cannot fail
    acc = acc.invert().unwrap_or(F::ZERO);

    for (v, inv) in values.iter().rev().zip(inverses.iter_mut().rev()) {
        let is_zero = v.is_zero();
        let tmp = *inv * acc;
        acc = F::conditional_select(&(acc * v), &acc, is_zero);
        *inv = F::conditional_select(&tmp, &F::ZERO, is_zero);
    }
}

/// Generates a prime-field element type backed by a `crypto_bigint::UInt` in
/// Montgomery form, together with its `ff::Field`, `ff::PrimeField` and
/// [`PrimeFieldBytes`] implementations.
///
/// The modulus must be odd and leave at least one unused bit in the top limb.
/// Constants are given as big-endian hex of exactly the backing integer's width.
macro_rules! prime_field {
    (
        $(#[$attr:meta])*
        $field:ident,
        repr: $repr:ident,
        limbs: $limbs:expr,
        bytes: $bytes:expr,
        bits: $bits:expr,
        modulus: $modulus:literal,
        modulus_str: $modulus_str:literal,
        generator: $generator:expr,
        s: $s:expr,
        two_inv: $two_inv:literal,
        root_of_unity: $root:literal,
        root_of_unity_inv: $root_inv:literal,
        delta: $delta:literal $(,)?
    ) => {
        type Inner = ::crypto_bigint::UInt<{ $limbs }>;

        const FIELD: $crate::util::Montgomery<{ $limbs }> =
            $crate::util::Montgomery::new(Inner::from_be_hex($modulus));

        /// `p - 2`, the inversion exponent.
        const P_MINUS_2: Inner = FIELD.modulus.wrapping_sub(&Inner::from_u64(2));

        /// `(t - 1) / 2` where `p - 1 = 2^S * t` with `t` odd.
        const T_MINUS1_OVER2: Inner = FIELD.modulus.shr_vartime($s + 1);

        /// Canonical big-endian encoding of a field element.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $repr(pub [u8; $bytes]);

        impl Default for $repr {
            fn default() -> Self {
                Self([0u8; $bytes])
            }
        }

        impl AsRef<[u8]> for $repr {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl AsMut<[u8]> for $repr {
            fn as_mut(&mut self) -> &mut [u8] {
                &mut self.0
            }
        }

        $(#[$attr])*
        #[derive(Clone, Copy, Eq)]
        #[repr(transparent)]
        pub struct $field(Inner);

        impl $field {
            /// Builds an element from a big-endian hex string of the backing
            /// integer's full width. The value must already be below the modulus.
            pub const fn from_be_hex(hex: &str) -> Self {
                Self(FIELD.from_canonical(&Inner::from_be_hex(hex)))
            }

            pub const fn from_u64(v: u64) -> Self {
                Self(FIELD.from_canonical(&Inner::from_u64(v)))
            }

            /// Decodes a canonical big-endian encoding, failing if the value is
            /// not below the modulus.
            pub fn from_bytes(bytes: &[u8; $bytes]) -> ::subtle::CtOption<Self> {
                let mut buf = [0u8; FIELD_WIDTH];
                buf[FIELD_WIDTH - $bytes..].copy_from_slice(bytes);
                FIELD
                    .try_from_canonical(&Inner::from_be_slice(&buf))
                    .map(Self)
            }

            /// Canonical big-endian encoding.
            pub fn to_bytes(&self) -> [u8; $bytes] {
                let canonical = FIELD.to_canonical(&self.0);
                let mut buf = [0u8; FIELD_WIDTH];
                for (chunk, limb) in buf
                    .chunks_exact_mut(::crypto_bigint::Limb::BYTE_SIZE)
                    .zip(canonical.limbs().iter().rev())
                {
                    chunk.copy_from_slice(&limb.0.to_be_bytes());
                }
                let mut out = [0u8; $bytes];
                out.copy_from_slice(&buf[FIELD_WIDTH - $bytes..]);
                out
            }

            /// Reduces a big-endian integer of up to twice the encoding width.
            ///
            /// # Panics
            ///
            /// Panics if `bytes` is longer than `2 * BYTES`.
            pub fn from_be_bytes_wide(bytes: &[u8]) -> Self {
                assert!(bytes.len() <= 2 * FIELD_WIDTH, "input too long for wide reduction");
                let mut buf = [0u8; 2 * FIELD_WIDTH];
                buf[2 * FIELD_WIDTH - bytes.len()..].copy_from_slice(bytes);
                let hi = Inner::from_be_slice(&buf[..FIELD_WIDTH]);
                let lo = Inner::from_be_slice(&buf[FIELD_WIDTH..]);
                Self(FIELD.from_canonical_wide(&lo, &hi))
            }

            #[inline]
            pub const fn add(&self, rhs: &Self) -> Self {
                Self(FIELD.add(&self.0, &rhs.0))
            }

            #[inline]
            pub const fn sub(&self, rhs: &Self) -> Self {
                Self(FIELD.sub(&self.0, &rhs.0))
            }

            #[inline]
            pub const fn neg(&self) -> Self {
                Self(FIELD.neg(&self.0))
            }

            #[inline]
            pub const fn mul(&self, rhs: &Self) -> Self {
                Self(FIELD.mul(&self.0, &rhs.0))
            }

            #[inline]
            pub const fn square(&self) -> Self {
                Self(FIELD.square(&self.0))
            }

            #[inline]
            pub const fn double(&self) -> Self {
                Self(FIELD.double(&self.0))
            }

            pub fn is_zero(&self) -> ::subtle::Choice {
                ::subtle::ConstantTimeEq::ct_eq(&self.0, &Inner::ZERO)
            }

            /// Computes the multiplicative inverse, if `self` is non-zero.
            pub fn invert(&self) -> ::subtle::CtOption<Self> {
                let res = Self(FIELD.pow_vartime(&self.0, &P_MINUS_2));
                ::subtle::CtOption::new(res, !self.is_zero())
            }

            /// Square root by constant-time Tonelli-Shanks
            /// (<https://eprint.iacr.org/2012/685.pdf>, algorithm 5).
            pub fn sqrt(&self) -> ::subtle::CtOption<Self> {
                use ::subtle::{ConditionallySelectable, ConstantTimeEq};

                let one = <Self as ::ff::Field>::ONE;
                let w = Self(FIELD.pow_vartime(&self.0, &T_MINUS1_OVER2));
                let mut v: u32 = $s;
                let mut x = self.mul(&w);
                let mut b = x.mul(&w);
                let mut z = <Self as ::ff::PrimeField>::ROOT_OF_UNITY;

                for max_v in (1..=$s).rev() {
                    let mut k: u32 = 1;
                    let mut tmp = b.square();
                    let mut j_less_than_v: ::subtle::Choice = 1.into();

                    for j in 2..max_v {
                        let tmp_is_one = tmp.ct_eq(&one);
                        let squared = Self::conditional_select(&tmp, &z, tmp_is_one).square();
                        tmp = Self::conditional_select(&squared, &tmp, tmp_is_one);
                        let new_z = Self::conditional_select(&z, &squared, tmp_is_one);
                        j_less_than_v &= !j.ct_eq(&v);
                        k = u32::conditional_select(&j, &k, tmp_is_one);
                        z = Self::conditional_select(&z, &new_z, j_less_than_v);
                    }

                    let result = x.mul(&z);
                    x = Self::conditional_select(&result, &x, b.ct_eq(&one));
                    z = z.square();
                    b = b.mul(&z);
                    v = k;
                }

                ::subtle::CtOption::new(x, x.square().ct_eq(self))
            }

            /// Parity of the canonical representative (`sgn0` for prime fields).
            pub fn is_odd(&self) -> ::subtle::Choice {
                ::subtle::Choice::from(self.to_bytes()[$bytes - 1] & 1)
            }
        }

        const FIELD_WIDTH: usize = $limbs * ::crypto_bigint::Limb::BYTE_SIZE;

        impl ::core::fmt::Debug for $field {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "0x")?;
                for b in self.to_bytes().iter() {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
        }

        impl ::core::fmt::Display for $field {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{:?}", self)
            }
        }

        impl Default for $field {
            #[inline]
            fn default() -> Self {
                <Self as ::ff::Field>::ZERO
            }
        }

        #[cfg(feature = "zeroize")]
        impl ::zeroize::DefaultIsZeroes for $field {}

        impl From<u64> for $field {
            fn from(v: u64) -> Self {
                Self::from_u64(v)
            }
        }

        impl ::subtle::ConstantTimeEq for $field {
            fn ct_eq(&self, other: &Self) -> ::subtle::Choice {
                ::subtle::ConstantTimeEq::ct_eq(&self.0, &other.0)
            }
        }

        impl PartialEq for $field {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                bool::from(::subtle::ConstantTimeEq::ct_eq(self, other))
            }
        }

        impl ::subtle::ConditionallySelectable for $field {
            fn conditional_select(a: &Self, b: &Self, choice: ::subtle::Choice) -> Self {
                Self(<Inner as ::subtle::ConditionallySelectable>::conditional_select(
                    &a.0, &b.0, choice,
                ))
            }
        }

        impl<'a> ::core::ops::Neg for &'a $field {
            type Output = $field;

            #[inline]
            fn neg(self) -> $field {
                self.neg()
            }
        }

        impl ::core::ops::Neg for $field {
            type Output = $field;

            #[inline]
            fn neg(self) -> $field {
                -&self
            }
        }

        impl<'a, 'b> ::core::ops::Add<&'b $field> for &'a $field {
            type Output = $field;

            #[inline]
            fn add(self, rhs: &'b $field) -> $field {
                self.add(rhs)
            }
        }

        impl<'a, 'b> ::core::ops::Sub<&'b $field> for &'a $field {
            type Output = $field;

            #[inline]
            fn sub(self, rhs: &'b $field) -> $field {
                self.sub(rhs)
            }
        }

        impl<'a, 'b> ::core::ops::Mul<&'b $field> for &'a $field {
            type Output = $field;

            #[inline]
            fn mul(self, rhs: &'b $field) -> $field {
                self.mul(rhs)
            }
        }

        impl_binops_additive!($field);
        impl_binops_multiplicative!($field);

        impl<T: ::core::borrow::Borrow<$field>> ::core::iter::Sum<T> for $field {
            fn sum<I: Iterator<Item = T>>(iter: I) -> Self {
                iter.fold(<Self as ::ff::Field>::ZERO, |acc, x| {
                    acc.add(::core::borrow::Borrow::borrow(&x))
                })
            }
        }

        impl<T: ::core::borrow::Borrow<$field>> ::core::iter::Product<T> for $field {
            fn product<I: Iterator<Item = T>>(iter: I) -> Self {
                iter.fold(<Self as ::ff::Field>::ONE, |acc, x| {
                    acc.mul(::core::borrow::Borrow::borrow(&x))
                })
            }
        }

        impl ::ff::Field for $field {
            const ZERO: Self = Self(Inner::ZERO);
            const ONE: Self = Self(FIELD.one());

            fn random(mut rng: impl ::rand_core::RngCore) -> Self {
                let mut buf = [0u8; 2 * $bytes];
                rng.fill_bytes(&mut buf);
                Self::from_be_bytes_wide(&buf)
            }

            fn square(&self) -> Self {
                self.square()
            }

            fn double(&self) -> Self {
                self.double()
            }

            fn invert(&self) -> ::subtle::CtOption<Self> {
                self.invert()
            }

            fn sqrt(&self) -> ::subtle::CtOption<Self> {
                self.sqrt()
            }

            fn sqrt_ratio(num: &Self, div: &Self) -> (::subtle::Choice, Self) {
                ::ff::helpers::sqrt_ratio_generic(num, div)
            }
        }

        impl ::ff::PrimeField for $field {
            type Repr = $repr;

            fn from_repr(r: Self::Repr) -> ::subtle::CtOption<Self> {
                Self::from_bytes(&r.0)
            }

            fn to_repr(&self) -> Self::Repr {
                $repr(self.to_bytes())
            }

            fn is_odd(&self) -> ::subtle::Choice {
                self.is_odd()
            }

            const MODULUS: &'static str = $modulus_str;
            const NUM_BITS: u32 = $bits;
            const CAPACITY: u32 = $bits - 1;
            const TWO_INV: Self = Self::from_be_hex($two_inv);
            const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64($generator);
            const S: u32 = $s;
            const ROOT_OF_UNITY: Self = Self::from_be_hex($root);
            const ROOT_OF_UNITY_INV: Self = Self::from_be_hex($root_inv);
            const DELTA: Self = Self::from_be_hex($delta);
        }

        impl $crate::field::PrimeFieldBytes for $field {
            const BYTES: usize = $bytes;

            fn from_be_bytes_wide(bytes: &[u8]) -> Self {
                Self::from_be_bytes_wide(bytes)
            }
        }
    };
}

/// Checks shared by every generated field, run from each curve's field module.
#[cfg(test)]
pub(crate) fn check_field_arithmetic<F: PrimeFieldBytes>() {
    use rand_core::SeedableRng;

    let mut rng = rand_xorshift::XorShiftRng::from_seed([
        0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc,
        0xe5,
    ]);

    assert_eq!(F::ONE.double(), F::from(2));
    assert_eq!(F::TWO_INV.double(), F::ONE);
    assert_eq!(-F::ONE + F::ONE, F::ZERO);
    assert!(bool::from(F::ZERO.invert().is_none()));
    assert!(!bool::from(F::ZERO.is_odd()));
    assert!(bool::from(F::ONE.is_odd()));

    // ROOT_OF_UNITY has order exactly 2^S
    let mut r = F::ROOT_OF_UNITY;
    for _ in 0..F::S - 1 {
        r = r.square();
    }
    assert_eq!(r, -F::ONE);
    assert_eq!(F::ROOT_OF_UNITY * F::ROOT_OF_UNITY_INV, F::ONE);

    // DELTA = GENERATOR^(2^S)
    let mut d = F::MULTIPLICATIVE_GENERATOR;
    for _ in 0..F::S {
        d = d.square();
    }
    assert_eq!(d, F::DELTA);

    // the generator is a non-residue
    assert!(bool::from(F::MULTIPLICATIVE_GENERATOR.sqrt().is_none()));

    for _ in 0..8 {
        let a = F::random(&mut rng);
        let b = F::random(&mut rng);

        assert_eq!(a * b, b * a);
        assert_eq!((a + b) - b, a);
        assert_eq!(a.square(), a * a);
        assert_eq!(a.invert().unwrap() * a, F::ONE);

        let sq = a.square();
        let root = sq.sqrt().unwrap();
        assert!(root == a || root == -a);

        assert_eq!(F::from_repr(a.to_repr()).unwrap(), a);
        assert_eq!(F::conditional_select(&a, &b, subtle::Choice::from(1u8)), b);
    }
}
