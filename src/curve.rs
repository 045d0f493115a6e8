//! Points on short Weierstrass curves `y^2 = x^3 + b` over a prime field, in affine
//! and Jacobian coordinates, generic over a [`CurveConfig`].

use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use ff::{Field, PrimeField};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::field::PrimeFieldBytes;

/// Parameters of a G1 group on a curve `y^2 = x^3 + B`.
pub trait CurveConfig: 'static + Copy + fmt::Debug + Send + Sync {
    /// Base field of the curve.
    type Base: PrimeFieldBytes;

    /// Uncompressed point encoding, `2 * Base::BYTES` bytes.
    type Uncompressed: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    const B: Self::Base;

    /// Prime order `r` of the subgroup, as little-endian 64-bit words.
    const ORDER: &'static [u64];

    /// `#E(Fp) / r`, as little-endian 64-bit words.
    const COFACTOR: &'static [u64];

    /// Sends a point of `E(Fp)` into the order-`r` subgroup.
    ///
    /// Defaults to multiplication by [`Self::COFACTOR`]; curves with a cheaper
    /// effective cofactor override this.
    fn clear_cofactor(p: &G1Jacobian<Self>) -> G1Jacobian<Self> {
        p.mul_vartime(Self::COFACTOR)
    }
}

/// A point in affine coordinates, or the point at infinity.
#[derive(Clone, Copy, Debug)]
pub struct G1Affine<C: CurveConfig> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) infinity: Choice,
}

impl<C: CurveConfig> Default for G1Affine<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: CurveConfig> ConstantTimeEq for G1Affine<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl<C: CurveConfig> ConditionallySelectable for G1Affine<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Affine {
            x: C::Base::conditional_select(&a.x, &b.x, choice),
            y: C::Base::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C: CurveConfig> Eq for G1Affine<C> {}
impl<C: CurveConfig> PartialEq for G1Affine<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a, C: CurveConfig> From<&'a G1Jacobian<C>> for G1Affine<C> {
    fn from(p: &'a G1Jacobian<C>) -> G1Affine<C> {
        let zinv = p.z.invert().unwrap_or(C::Base::ZERO);
        let zinv2 = zinv.square();
        let x = p.x * zinv2;
        let y = p.y * zinv2 * zinv;

        let tmp = G1Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        };

        G1Affine::conditional_select(&tmp, &G1Affine::identity(), zinv.is_zero())
    }
}

impl<C: CurveConfig> From<G1Jacobian<C>> for G1Affine<C> {
    fn from(p: G1Jacobian<C>) -> G1Affine<C> {
        G1Affine::from(&p)
    }
}

impl<'a, C: CurveConfig> Neg for &'a G1Affine<C> {
    type Output = G1Affine<C>;

    #[inline]
    fn neg(self) -> G1Affine<C> {
        G1Affine {
            x: self.x,
            y: C::Base::conditional_select(&-self.y, &C::Base::ONE, self.infinity),
            infinity: self.infinity,
        }
    }
}

impl<C: CurveConfig> Neg for G1Affine<C> {
    type Output = G1Affine<C>;

    #[inline]
    fn neg(self) -> G1Affine<C> {
        -&self
    }
}

impl<C: CurveConfig> G1Affine<C> {
    /// Returns the identity of the group: the point at infinity.
    pub fn identity() -> Self {
        G1Affine {
            x: C::Base::ZERO,
            y: C::Base::ONE,
            infinity: Choice::from(1u8),
        }
    }

    /// Builds a finite point from coordinates without validating them.
    pub fn from_xy_unchecked(x: C::Base, y: C::Base) -> Self {
        G1Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        }
    }

    pub fn x(&self) -> C::Base {
        self.x
    }

    pub fn y(&self) -> C::Base {
        self.y
    }

    /// Returns true if this element is the identity (the point at infinity).
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Returns true if this point is free of an $h$-torsion component, i.e. it lies
    /// in the subgroup of prime order $r$. The check is variable time in the public
    /// order only.
    pub fn is_torsion_free(&self) -> Choice {
        G1Jacobian::from(self).mul_vartime(C::ORDER).is_identity()
    }

    /// Returns true if this point is on the curve. This should always return
    /// true unless an "unchecked" API was used.
    pub fn is_on_curve(&self) -> Choice {
        // y^2 - x^3 ?= b
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&C::B) | self.infinity
    }

    /// Serializes this element into uncompressed form: `x || y`, each coordinate
    /// big-endian. The identity is all zeros with bit 6 of the first byte set.
    pub fn to_uncompressed(&self) -> C::Uncompressed {
        let n = C::Base::BYTES;
        let mut res = C::Uncompressed::default();
        let bytes = res.as_mut();

        let x = C::Base::conditional_select(&self.x, &C::Base::ZERO, self.infinity);
        let y = C::Base::conditional_select(&self.y, &C::Base::ZERO, self.infinity);
        bytes[..n].copy_from_slice(x.to_repr().as_ref());
        bytes[n..2 * n].copy_from_slice(y.to_repr().as_ref());

        // Is this point at infinity? If so, set the second-most significant bit.
        bytes[0] |= u8::conditional_select(&0u8, &(1u8 << 6), self.infinity);

        res
    }

    /// Attempts to deserialize an uncompressed element. Rejects points that are
    /// not on the curve or not in the prime-order subgroup.
    pub fn from_uncompressed(bytes: &C::Uncompressed) -> CtOption<Self> {
        Self::from_uncompressed_unchecked(bytes)
            .and_then(|p| CtOption::new(p, p.is_on_curve() & p.is_torsion_free()))
    }

    /// Attempts to deserialize an uncompressed element, not checking if the
    /// element is on the curve and not checking if it is in the correct subgroup.
    /// **This is dangerous to call unless you trust the bytes you are reading; otherwise,
    /// API invariants may be broken.** Please consider using `from_uncompressed()` instead.
    pub fn from_uncompressed_unchecked(bytes: &C::Uncompressed) -> CtOption<Self> {
        let n = C::Base::BYTES;
        let bytes = bytes.as_ref();

        let compression_flag_set = Choice::from((bytes[0] >> 7) & 1);
        let infinity_flag_set = Choice::from((bytes[0] >> 6) & 1);

        let x = {
            let mut repr = <C::Base as PrimeField>::Repr::default();
            repr.as_mut().copy_from_slice(&bytes[..n]);
            // Mask away the flag bits
            repr.as_mut()[0] &= 0b0011_1111;
            C::Base::from_repr(repr)
        };
        let y = {
            let mut repr = <C::Base as PrimeField>::Repr::default();
            repr.as_mut().copy_from_slice(&bytes[n..2 * n]);
            C::Base::from_repr(repr)
        };

        x.and_then(|x| {
            y.and_then(|y| {
                // Create a point representing this value
                let p = G1Affine::conditional_select(
                    &G1Affine {
                        x,
                        y,
                        infinity: infinity_flag_set,
                    },
                    &G1Affine::identity(),
                    infinity_flag_set,
                );

                CtOption::new(
                    p,
                    // If the infinity flag is set, the x and y coordinates should have been zero.
                    ((!infinity_flag_set) | (infinity_flag_set & x.is_zero() & y.is_zero()))
                        // The compression flag should not have been set, as this is an uncompressed element
                        & (!compression_flag_set),
                )
            })
        })
    }
}

/// A point in Jacobian coordinates `(X : Y : Z)`, representing `(X/Z^2, Y/Z^3)`.
/// `Z = 0` is the point at infinity.
#[derive(Clone, Copy, Debug)]
pub struct G1Jacobian<C: CurveConfig> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) z: C::Base,
}

impl<C: CurveConfig> Default for G1Jacobian<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<'a, C: CurveConfig> From<&'a G1Affine<C>> for G1Jacobian<C> {
    fn from(p: &'a G1Affine<C>) -> G1Jacobian<C> {
        G1Jacobian {
            x: p.x,
            y: p.y,
            z: C::Base::conditional_select(&C::Base::ONE, &C::Base::ZERO, p.infinity),
        }
    }
}

impl<C: CurveConfig> From<G1Affine<C>> for G1Jacobian<C> {
    fn from(p: G1Affine<C>) -> G1Jacobian<C> {
        G1Jacobian::from(&p)
    }
}

impl<C: CurveConfig> ConstantTimeEq for G1Jacobian<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // Is (X/Z^2, Y/Z^3) equal to (X'/Z'^2, Y'/Z'^3)?
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        let x1 = self.x * z2z2;
        let x2 = other.x * z1z1;

        let y1 = self.y * z2z2 * other.z;
        let y2 = other.y * z1z1 * self.z;

        let self_is_zero = self.z.is_zero();
        let other_is_zero = other.z.is_zero();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl<C: CurveConfig> ConditionallySelectable for G1Jacobian<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Jacobian {
            x: C::Base::conditional_select(&a.x, &b.x, choice),
            y: C::Base::conditional_select(&a.y, &b.y, choice),
            z: C::Base::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: CurveConfig> Eq for G1Jacobian<C> {}
impl<C: CurveConfig> PartialEq for G1Jacobian<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<C: CurveConfig> G1Jacobian<C> {
    /// Returns the identity of the group: the point at infinity.
    pub fn identity() -> Self {
        G1Jacobian {
            x: C::Base::ONE,
            y: C::Base::ONE,
            z: C::Base::ZERO,
        }
    }

    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// `Y^2 = X^3 + b Z^6`, or the identity.
    pub fn is_on_curve(&self) -> Choice {
        let z2 = self.z.square();
        let z6 = z2.square() * z2;
        (self.y.square() - self.x.square() * self.x).ct_eq(&(z6 * C::B)) | self.z.is_zero()
    }

    pub fn to_affine(&self) -> G1Affine<C> {
        G1Affine::from(self)
    }

    /// Computes the doubling of this point (dbl-2009-l, `a = 0`).
    pub fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let y3 = e * (d - x3) - c.double().double().double();
        let z3 = (self.y * self.z).double();

        // Z3 vanishes for the identity and for points with y = 0
        G1Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Adds this point to another point (add-2007-bl). Equal inputs, opposite
    /// inputs and the identity are handled without branching.
    pub fn add(&self, rhs: &Self) -> Self {
        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;
        let s1 = self.y * rhs.z * z2z2;
        let s2 = rhs.y * self.z * z1z1;

        let h = u2 - u1;
        let i = h.double().square();
        let j = h * i;
        let r = (s2 - s1).double();
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + rhs.z).square() - z1z1 - z2z2) * h;

        let sum = G1Jacobian {
            x: x3,
            y: y3,
            z: z3,
        };

        // h = 0 and r = 0 means the inputs are the same point, where the formula
        // degenerates; h = 0 alone means they are opposite and z3 is already zero.
        let same = h.is_zero() & r.is_zero();
        let res = G1Jacobian::conditional_select(&sum, &self.double(), same);
        let res = G1Jacobian::conditional_select(&res, rhs, self.is_identity());
        G1Jacobian::conditional_select(&res, self, rhs.is_identity())
    }

    /// Multiplies by a public scalar given as little-endian 64-bit words.
    ///
    /// Runs in time dependent on the scalar, which must not be secret.
    pub fn mul_vartime(&self, by: &[u64]) -> Self {
        let mut acc = G1Jacobian::identity();
        for word in by.iter().rev() {
            for i in (0..64u32).rev() {
                acc = acc.double();
                if (word >> i) & 1 == 1 {
                    acc = acc.add(self);
                }
            }
        }
        acc
    }

    /// Maps this point into the prime-order subgroup.
    pub fn clear_cofactor(&self) -> Self {
        C::clear_cofactor(self)
    }
}

impl<'a, C: CurveConfig> Neg for &'a G1Jacobian<C> {
    type Output = G1Jacobian<C>;

    #[inline]
    fn neg(self) -> G1Jacobian<C> {
        G1Jacobian {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl<C: CurveConfig> Neg for G1Jacobian<C> {
    type Output = G1Jacobian<C>;

    #[inline]
    fn neg(self) -> G1Jacobian<C> {
        -&self
    }
}

impl<'a, 'b, C: CurveConfig> Add<&'b G1Jacobian<C>> for &'a G1Jacobian<C> {
    type Output = G1Jacobian<C>;

    #[inline]
    fn add(self, rhs: &'b G1Jacobian<C>) -> G1Jacobian<C> {
        G1Jacobian::add(self, rhs)
    }
}

impl<'b, C: CurveConfig> Add<&'b G1Jacobian<C>> for G1Jacobian<C> {
    type Output = G1Jacobian<C>;

    #[inline]
    fn add(self, rhs: &'b G1Jacobian<C>) -> G1Jacobian<C> {
        G1Jacobian::add(&self, rhs)
    }
}

impl<C: CurveConfig> Add for G1Jacobian<C> {
    type Output = G1Jacobian<C>;

    #[inline]
    fn add(self, rhs: G1Jacobian<C>) -> G1Jacobian<C> {
        G1Jacobian::add(&self, &rhs)
    }
}

impl<'a, 'b, C: CurveConfig> Sub<&'b G1Jacobian<C>> for &'a G1Jacobian<C> {
    type Output = G1Jacobian<C>;

    #[inline]
    fn sub(self, rhs: &'b G1Jacobian<C>) -> G1Jacobian<C> {
        G1Jacobian::add(self, &-rhs)
    }
}

impl<C: CurveConfig> Sub for G1Jacobian<C> {
    type Output = G1Jacobian<C>;

    #[inline]
    fn sub(self, rhs: G1Jacobian<C>) -> G1Jacobian<C> {
        &self - &rhs
    }
}

impl<C: CurveConfig> AddAssign for G1Jacobian<C> {
    #[inline]
    fn add_assign(&mut self, rhs: G1Jacobian<C>) {
        *self = G1Jacobian::add(self, &rhs);
    }
}

impl<C: CurveConfig> SubAssign for G1Jacobian<C> {
    #[inline]
    fn sub_assign(&mut self, rhs: G1Jacobian<C>) {
        *self = &*self - &rhs;
    }
}
