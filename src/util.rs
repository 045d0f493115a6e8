use crypto_bigint::{Limb, UInt};
use subtle::{Choice, CtOption};

/// Modular arithmetic on `UInt` values kept in Montgomery form, `a·R mod p`
/// with `R = 2^(LIMBS * Limb::BIT_SIZE)`.
///
/// Every method is a `const fn` where possible so that field constants can be
/// written in canonical form and converted at compile time.
#[derive(Clone, Copy, Debug)]
pub struct Montgomery<const LIMBS: usize> {
    pub modulus: UInt<LIMBS>,
    /// `-p^{-1} mod 2^Limb::BIT_SIZE`
    pub inv: Limb,
    /// `R mod p`
    pub r: UInt<LIMBS>,
    /// `R^2 mod p`
    pub r2: UInt<LIMBS>,
    /// `R^3 mod p`, used when reducing double-width integers.
    pub r3: UInt<LIMBS>,
}

impl<const LIMBS: usize> Montgomery<LIMBS> {
    /// The modulus must be odd and leave at least one spare bit in the top limb.
    pub const fn new(modulus: UInt<LIMBS>) -> Self {
        let inv = reduction_inv(&modulus);
        let bits = LIMBS * Limb::BIT_SIZE;
        let r = shl_mod(UInt::ONE, bits, &modulus);
        let r2 = shl_mod(r, bits, &modulus);
        let r3 = shl_mod(r2, bits, &modulus);
        Self {
            modulus,
            inv,
            r,
            r2,
            r3,
        }
    }

    #[inline(always)]
    pub const fn one(&self) -> UInt<LIMBS> {
        self.r
    }

    /// Montgomery form to canonical integer: `aR · 1 · R^{-1}`.
    #[inline(always)]
    pub const fn to_canonical(&self, a: &UInt<LIMBS>) -> UInt<LIMBS> {
        self.mul(a, &UInt::ONE)
    }

    /// Canonical integer (`< p`) to Montgomery form: `a · R^2 · R^{-1}`.
    #[inline(always)]
    pub const fn from_canonical(&self, a: &UInt<LIMBS>) -> UInt<LIMBS> {
        self.mul(a, &self.r2)
    }

    /// Reduces `hi · 2^(LIMBS * Limb::BIT_SIZE) + lo` and returns it in Montgomery form.
    ///
    /// Neither half needs to be below the modulus.
    #[inline(always)]
    pub const fn from_canonical_wide(&self, lo: &UInt<LIMBS>, hi: &UInt<LIMBS>) -> UInt<LIMBS> {
        self.add(&self.mul(lo, &self.r2), &self.mul(hi, &self.r3))
    }

    pub fn try_from_canonical(&self, a: &UInt<LIMBS>) -> CtOption<UInt<LIMBS>> {
        // a - p borrows iff a < p
        let (_, borrow) = a.sbb(&self.modulus, Limb::ZERO);
        let in_range = Choice::from((borrow.0 & 1) as u8);
        CtOption::new(self.from_canonical(a), in_range)
    }

    #[inline(always)]
    pub const fn add(&self, lhs: &UInt<LIMBS>, rhs: &UInt<LIMBS>) -> UInt<LIMBS> {
        // both inputs are below p and p has a spare top bit, so this cannot carry out
        let (sum, _) = lhs.adc(rhs, Limb::ZERO);
        sub_if_above(&sum, &self.modulus)
    }

    #[inline(always)]
    pub const fn double(&self, a: &UInt<LIMBS>) -> UInt<LIMBS> {
        sub_if_above(&a.shl_vartime(1), &self.modulus)
    }

    #[inline(always)]
    pub const fn sub(&self, lhs: &UInt<LIMBS>, rhs: &UInt<LIMBS>) -> UInt<LIMBS> {
        lhs.sub_mod(rhs, &self.modulus)
    }

    #[inline(always)]
    pub const fn neg(&self, a: &UInt<LIMBS>) -> UInt<LIMBS> {
        a.neg_mod(&self.modulus)
    }

    /// Montgomery product `lhs · rhs · R^{-1} mod p`.
    ///
    /// Coarsely integrated operand scanning (CIOS), Koç et al. 1996. The
    /// running value is kept in `LIMBS + 1` limbs; the extra top limb never
    /// exceeds one bit because the modulus leaves a spare bit. At least one
    /// operand must be below the modulus.
    #[inline(always)]
    pub const fn mul(&self, lhs: &UInt<LIMBS>, rhs: &UInt<LIMBS>) -> UInt<LIMBS> {
        let a = lhs.limbs();
        let b = rhs.limbs();
        let m = self.modulus.limbs();
        let mut t = [Limb::ZERO; LIMBS];
        let mut top = Limb::ZERO;

        let mut i = 0;
        while i < LIMBS {
            // t += a * b[i]
            let mut carry = Limb::ZERO;
            let mut j = 0;
            while j < LIMBS {
                let (lo, hi) = t[j].mac(a[j], b[i], carry);
                t[j] = lo;
                carry = hi;
                j += 1;
            }
            let (top_lo, top_hi) = top.adc(carry, Limb::ZERO);

            // t = (t + k * p) / 2^Limb::BIT_SIZE
            let k = t[0].wrapping_mul(self.inv);
            let (_, mut carry) = t[0].mac(k, m[0], Limb::ZERO);
            let mut j = 1;
            while j < LIMBS {
                let (lo, hi) = t[j].mac(k, m[j], carry);
                t[j - 1] = lo;
                carry = hi;
                j += 1;
            }
            let (lo, hi) = top_lo.adc(carry, Limb::ZERO);
            t[LIMBS - 1] = lo;
            top = top_hi.wrapping_add(hi);
            i += 1;
        }

        // the result is below 2p, so top is zero here
        sub_if_above(&UInt::new(t), &self.modulus)
    }

    #[inline(always)]
    pub const fn square(&self, a: &UInt<LIMBS>) -> UInt<LIMBS> {
        self.mul(a, a)
    }

    /// `base^exp` for a public exponent, square-and-multiply from the top bit.
    ///
    /// Variable time in `exp` only.
    pub const fn pow_vartime<const E: usize>(
        &self,
        base: &UInt<LIMBS>,
        exp: &UInt<E>,
    ) -> UInt<LIMBS> {
        let words = exp.limbs();
        let mut res = self.r;
        let mut i = E;
        while i > 0 {
            i -= 1;
            let mut bit = Limb::BIT_SIZE;
            while bit > 0 {
                bit -= 1;
                res = self.square(&res);
                if (words[i].0 >> bit) & 1 == 1 {
                    res = self.mul(&res, base);
                }
            }
        }
        res
    }
}

/// `(a · 2^k) mod p` by repeated doubling; only evaluated at compile time.
const fn shl_mod<const LIMBS: usize>(
    mut a: UInt<LIMBS>,
    k: usize,
    modulus: &UInt<LIMBS>,
) -> UInt<LIMBS> {
    let mut i = 0;
    while i < k {
        a = sub_if_above(&a.shl_vartime(1), modulus);
        i += 1;
    }
    a
}

/// `-p^{-1} mod 2^Limb::BIT_SIZE` by Newton iteration on the low limb.
const fn reduction_inv<const LIMBS: usize>(modulus: &UInt<LIMBS>) -> Limb {
    let p0 = modulus.limbs()[0];
    // p0 * p0 = 1 mod 8 for odd p0, so p0 is its own inverse to 3 bits
    let mut inv = p0;
    let mut i = 0;
    while i < 6 {
        // inv = inv * (2 - p0 * inv), doubling the number of correct bits
        let t = Limb::ZERO.wrapping_sub(p0.wrapping_mul(inv));
        inv = inv.wrapping_mul(t.wrapping_add(Limb::ONE).wrapping_add(Limb::ONE));
        i += 1;
    }
    Limb::ZERO.wrapping_sub(inv)
}

/// Subtracts `p` from `a` when `a >= p`, without branching on `a`.
#[inline(always)]
const fn sub_if_above<const LIMBS: usize>(a: &UInt<LIMBS>, p: &UInt<LIMBS>) -> UInt<LIMBS> {
    let (diff, borrow) = a.sbb(p, Limb::ZERO);
    let keep = a.limbs();
    let mut out = diff.to_words();
    let mut i = 0;
    while i < LIMBS {
        // borrow is all ones when a < p
        out[i] = (keep[i].0 & borrow.0) | (out[i] & !borrow.0);
        i += 1;
    }
    UInt::from_words(out)
}

/// Implements the owned and mixed-reference forms of a binary operator in terms of
/// `impl<'a, 'b> Op<&'b T> for &'a T`.
macro_rules! impl_binop {
    ($t:ident, $op:ident, $fn:ident, $assign:ident, $assign_fn:ident) => {
        impl<'b> core::ops::$op<&'b $t> for $t {
            type Output = $t;

            #[inline]
            fn $fn(self, rhs: &'b $t) -> $t {
                core::ops::$op::$fn(&self, rhs)
            }
        }

        impl<'a> core::ops::$op<$t> for &'a $t {
            type Output = $t;

            #[inline]
            fn $fn(self, rhs: $t) -> $t {
                core::ops::$op::$fn(self, &rhs)
            }
        }

        impl core::ops::$op<$t> for $t {
            type Output = $t;

            #[inline]
            fn $fn(self, rhs: $t) -> $t {
                core::ops::$op::$fn(&self, &rhs)
            }
        }

        impl core::ops::$assign<$t> for $t {
            #[inline]
            fn $assign_fn(&mut self, rhs: $t) {
                *self = core::ops::$op::$fn(&*self, &rhs);
            }
        }

        impl<'b> core::ops::$assign<&'b $t> for $t {
            #[inline]
            fn $assign_fn(&mut self, rhs: &'b $t) {
                *self = core::ops::$op::$fn(&*self, rhs);
            }
        }
    };
}

macro_rules! impl_binops_additive {
    ($t:ident) => {
        impl_binop!($t, Add, add, AddAssign, add_assign);
        impl_binop!($t, Sub, sub, SubAssign, sub_assign);
    };
}

macro_rules! impl_binops_multiplicative {
    ($t:ident) => {
        impl_binop!($t, Mul, mul, MulAssign, mul_assign);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_bigint::{nlimbs, U384};

    // BLS12-378 base field
    const FIELD: Montgomery<{ nlimbs!(384) }> = Montgomery::new(U384::from_be_hex(
        "03eeb0416684d19053cb5d240ed107a284059eb647102326980dc360d0a49d7fce97f76a822c00009948a20000000001",
    ));

    #[test]
    fn test_r_constant() {
        // R = 2^384 mod p
        assert_eq!(
            FIELD.r,
            U384::from_be_hex(
                "00653f64f846ca5ab95d59d83ced0fbc7a92b3b7f4e713336481646b0634028c8b6a2df4f2d3ffd9148eddffffffffbf"
            )
        );
        assert_eq!(FIELD.to_canonical(&FIELD.one()), U384::ONE);
    }

    #[test]
    fn test_inv() {
        // p * inv = -1 mod 2^Limb::BIT_SIZE
        let p0 = FIELD.modulus.limbs()[0];
        assert_eq!(p0.wrapping_mul(FIELD.inv), Limb::ZERO.wrapping_sub(Limb::ONE));
    }

    #[test]
    fn test_roundtrip_canonical() {
        let a = U384::from_u64(0x1234_5678_9abc_def0);
        let m = FIELD.from_canonical(&a);
        assert_eq!(FIELD.to_canonical(&m), a);

        let too_big = FIELD.modulus;
        assert!(bool::from(FIELD.try_from_canonical(&too_big).is_none()));
        let below = FIELD.modulus.wrapping_sub(&U384::ONE);
        assert!(bool::from(FIELD.try_from_canonical(&below).is_some()));
    }

    #[test]
    fn test_mul_small() {
        let six = FIELD.from_canonical(&U384::from_u64(6));
        let seven = FIELD.from_canonical(&U384::from_u64(7));
        let p = FIELD.mul(&six, &seven);
        assert_eq!(FIELD.to_canonical(&p), U384::from_u64(42));

        // (p - 1)^2 = 1
        let minus_one = FIELD.neg(&FIELD.one());
        assert_eq!(FIELD.square(&minus_one), FIELD.one());
    }

    #[test]
    fn test_wide_reduction() {
        // 2^384 reduces to R mod p
        let v = FIELD.from_canonical_wide(&U384::ZERO, &U384::ONE);
        assert_eq!(FIELD.to_canonical(&v), FIELD.r);
    }

    #[test]
    fn test_fermat() {
        let a = FIELD.from_canonical(&U384::from_u64(0xdead_beef));
        let p_minus_1 = FIELD.modulus.wrapping_sub(&U384::ONE);
        assert_eq!(FIELD.pow_vartime(&a, &p_minus_1), FIELD.one());
    }
}
