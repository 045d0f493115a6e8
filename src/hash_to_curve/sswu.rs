//! The simplified Shallue-van de Woestijne-Ulas map onto `E': y^2 = x^3 + A'x + B'`
//! (RFC 9380 section 6.6.2), with the constant-time `sqrt_ratio` it relies on.

use ff::PrimeField;
use subtle::Choice;

use super::AffinePoint;
use crate::field::PrimeFieldBytes;

/// Constants of the SSWU map for one curve `E'`, together with the `sqrt_ratio`
/// constants derived from `p - 1 = 2^k * m`, `m` odd.
#[derive(Clone, Copy, Debug)]
pub struct SswuParameters<F: 'static> {
    /// Non-square `Z` of the map.
    pub z: F,
    /// `A'` of `E'`. Must be non-zero.
    pub a: F,
    /// `B'` of `E'`. Must be non-zero.
    pub b: F,
    /// `k`, the two-adicity of `p - 1`.
    pub two_adicity: u32,
    /// `(m - 1) / 2` as little-endian 64-bit words.
    pub c3: &'static [u64],
    /// `Z^m`
    pub c6: F,
    /// `Z^((m + 1) / 2)`
    pub c7: F,
}

fn square_times<F: PrimeField>(mut x: F, n: u32) -> F {
    for _ in 0..n {
        x = x.square();
    }
    x
}

/// Returns `(true, sqrt(u / v))` if `u / v` is square in the field, and
/// `(false, sqrt(Z * u / v))` otherwise, without inverting `v`.
///
/// This is the constant-time algorithm of RFC 9380 appendix F.2.1.1. The only
/// exponent that depends on anything is `c3`, which is public and fixed per
/// curve.
///
/// `v` must be non-zero; the result is meaningless otherwise. [`sswu_map`] only
/// ever passes a non-zero `v`.
pub fn sqrt_ratio<F: PrimeField>(u: &F, v: &F, params: &SswuParameters<F>) -> (Choice, F) {
    let k = params.two_adicity;

    let mut tv1 = params.c6;
    // tv2 = v^(2^k - 1)
    let mut tv2 = *v;
    for _ in 1..k {
        tv2 = tv2.square() * v;
    }
    let mut tv3 = tv2.square() * v;
    let mut tv5 = (*u * tv3).pow_vartime(params.c3) * tv2;
    tv2 = tv5 * v;
    tv3 = tv5 * u;
    let mut tv4 = tv3 * tv2;

    let is_qr = square_times(tv4, k - 1).ct_eq(&F::ONE);
    tv2 = tv3 * params.c7;
    tv5 = tv4 * tv1;
    tv3 = F::conditional_select(&tv2, &tv3, is_qr);
    tv4 = F::conditional_select(&tv5, &tv4, is_qr);

    for i in (2..=k).rev() {
        let e1 = square_times(tv4, i - 2).ct_eq(&F::ONE);
        tv2 = tv3 * tv1;
        tv1 = tv1.square();
        tv5 = tv4 * tv1;
        tv3 = F::conditional_select(&tv2, &tv3, e1);
        tv4 = F::conditional_select(&tv5, &tv4, e1);
    }

    (is_qr, tv3)
}

/// SSWU with the x-coordinate left as the fraction `x_num / x_den`.
///
/// `x_den` is `A' * -(Z^2 u^4 + Z u^2)`, or `A' * Z` when that vanishes, so it is
/// never zero.
fn sswu_fraction<F: PrimeFieldBytes>(u: &F, params: &SswuParameters<F>) -> (F, F, F) {
    let tv1 = params.z * u.square();
    let tv2 = tv1.square() + tv1;
    let tv3 = params.b * (tv2 + F::ONE);
    let x_den = params.a * F::conditional_select(&-tv2, &params.z, tv2.is_zero());

    // g(x) = (x_num^3 + A' x_num x_den^2 + B' x_den^3) / x_den^3
    let tv6 = x_den.square();
    let gx_num = (tv3.square() + params.a * tv6) * tv3 + params.b * tv6 * x_den;
    let gx_den = tv6 * x_den;

    let (is_qr, y1) = sqrt_ratio(&gx_num, &gx_den, params);

    let x_num = F::conditional_select(&(tv1 * tv3), &tv3, is_qr);
    let mut y = F::conditional_select(&(tv1 * u * y1), &y1, is_qr);
    y.conditional_negate(u.is_odd() ^ y.is_odd());

    (x_num, x_den, y)
}

/// Maps any field element to a point of `E'`. Total and constant time.
///
/// The sign of `y` follows the sign of `u`, so `sswu_map(-u)` is the negation of
/// `sswu_map(u)`.
pub fn sswu_map<F: PrimeFieldBytes>(u: &F, params: &SswuParameters<F>) -> AffinePoint<F> {
    let (x_num, x_den, y) = sswu_fraction(u, params);
    // x_den is non-zero, see sswu_fraction
    let x = x_num * x_den.invert().unwrap_or(F::ZERO);
    AffinePoint { x, y }
}
