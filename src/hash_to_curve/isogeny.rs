//! Rational maps carrying points of `E'` to the target curve `E` (RFC 9380 appendix E).

use ff::Field;
use subtle::CtOption;

use super::AffinePoint;
use crate::field::batch_invert;

/// Coefficients of an isogeny `E' -> E`, lowest degree first.
///
/// The denominators are monic and their leading coefficient is omitted, so
/// `x_den = [c0]` stands for `x + c0`.
#[derive(Clone, Copy, Debug)]
pub struct IsogenyCoefficients<F: 'static> {
    pub x_num: &'static [F],
    pub x_den: &'static [F],
    pub y_num: &'static [F],
    pub y_den: &'static [F],
}

fn horner<F: Field>(coeffs: &[F], x: &F) -> F {
    coeffs.iter().rev().fold(F::ZERO, |acc, c| acc * x + c)
}

fn horner_monic<F: Field>(coeffs: &[F], x: &F) -> F {
    coeffs.iter().rev().fold(F::ONE, |acc, c| acc * x + c)
}

/// Evaluates the isogeny at `p`.
///
/// Both denominators are inverted together. They vanish only at the kernel of
/// the isogeny, the point of `E'` with `y = 0` and `x` a root of `x_den`, whose
/// image is the identity of `E`. [`sswu_map`](super::sswu_map) reaches it for
/// one pair of inputs `u` and `-u` on each supported curve. The result is none
/// there, and the caller substitutes the identity.
pub fn isogeny_map<F: Field>(
    p: &AffinePoint<F>,
    iso: &IsogenyCoefficients<F>,
) -> CtOption<AffinePoint<F>> {
    let x_num = horner(iso.x_num, &p.x);
    let x_den = horner_monic(iso.x_den, &p.x);
    let y_num = horner(iso.y_num, &p.x) * p.y;
    let y_den = horner_monic(iso.y_den, &p.x);
    let at_kernel = x_den.is_zero() | y_den.is_zero();

    let mut inv = [F::ZERO; 2];
    batch_invert(&[x_den, y_den], &mut inv);

    CtOption::new(
        AffinePoint {
            x: x_num * inv[0],
            y: y_num * inv[1],
        },
        !at_kernel,
    )
}

#[cfg(all(test, feature = "bls12-378"))]
mod tests {
    use super::*;
    use crate::bls12_378::{Bls12_378, Fp};
    use crate::hash_to_curve::HashToCurveConfig;

    #[test]
    fn test_horner() {
        // 3 + 2x + x^2 at x = 5
        let c = [Fp::from(3), Fp::from(2), Fp::ONE];
        assert_eq!(horner(&c, &Fp::from(5)), Fp::from(38));
        // 3 + 2x + x^2, leading one implicit
        assert_eq!(horner_monic(&c[..2], &Fp::from(5)), Fp::from(38));
        assert_eq!(horner::<Fp>(&[], &Fp::from(5)), Fp::ZERO);
        assert_eq!(horner_monic::<Fp>(&[], &Fp::from(5)), Fp::ONE);
    }

    #[test]
    fn test_isogeny_lands_on_target() {
        let params = <Bls12_378 as HashToCurveConfig>::SSWU;
        let iso = <Bls12_378 as HashToCurveConfig>::ISOGENY;
        let b = Fp::ONE;
        for i in 0..16u64 {
            let p = crate::hash_to_curve::sswu_map(&Fp::from(i), &params);
            let q = isogeny_map(&p, &iso).unwrap();
            assert!(bool::from(q.is_on_curve(&Fp::ZERO, &b)));

            // negation commutes with the isogeny
            let neg = isogeny_map(&AffinePoint { x: p.x, y: -p.y }, &iso).unwrap();
            assert_eq!(neg.x, q.x);
            assert_eq!(neg.y, -q.y);
        }
    }
}
