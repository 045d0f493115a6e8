//! This module implements hash_to_field and the `encode_to_curve` /
//! `hash_to_curve` maps of RFC 9380 for G1, via the simplified SWU map onto a
//! curve isogenous to `E`.

use ff::Field;
use subtle::{Choice, ConditionallySelectable};

use crate::curve::{CurveConfig, G1Affine, G1Jacobian};
use crate::field::PrimeFieldBytes;

mod error;
pub use self::error::ExpandMsgError;

mod expand_msg;
pub use self::expand_msg::{
    ExpandMessage, ExpandMessageState, ExpandMsgXmd, ExpandMsgXmdState, ExpandMsgXof,
    ExpandMsgXofState,
};

mod isogeny;
pub use self::isogeny::{isogeny_map, IsogenyCoefficients};

mod sswu;
pub use self::sswu::{sqrt_ratio, sswu_map, SswuParameters};

/// Upper bound on the bytes hashed per field element.
const MAX_ELEMENT_BYTES: usize = 256;

/// A finite point `(x, y)` on some curve `y^2 = x^3 + ax + b`, as passed between
/// the SSWU map and the isogeny.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AffinePoint<F> {
    pub x: F,
    pub y: F,
}

impl<F: Field> AffinePoint<F> {
    /// Checks `y^2 = x^3 + ax + b`.
    pub fn is_on_curve(&self, a: &F, b: &F) -> Choice {
        ((self.x.square() + a) * self.x + b).ct_eq(&self.y.square())
    }
}

impl<F: Field> ConditionallySelectable for AffinePoint<F> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        AffinePoint {
            x: F::conditional_select(&a.x, &b.x, choice),
            y: F::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl<C: CurveConfig> From<AffinePoint<C::Base>> for G1Affine<C> {
    fn from(p: AffinePoint<C::Base>) -> Self {
        G1Affine::from_xy_unchecked(p.x, p.y)
    }
}

/// A curve that can be hashed to through SSWU on an isogenous curve `E'`.
pub trait HashToCurveConfig: CurveConfig {
    /// The SSWU map onto `E'`.
    const SSWU: SswuParameters<Self::Base>;

    /// The isogeny `E' -> E`.
    const ISOGENY: IsogenyCoefficients<Self::Base>;

    /// Target security level `k` in bits. Each field element is derived from
    /// `k / 8 + Base::BYTES` bytes of expanded message.
    const SECURITY_BITS: usize = 128;
}

/// Expanded bytes per field element, `k / 8 + Base::BYTES`. Evaluating it for a
/// config that does not fit the stack buffer fails to compile.
trait ElementLen {
    const ELEMENT_LEN: usize;
}

impl<C: HashToCurveConfig> ElementLen for C {
    const ELEMENT_LEN: usize = {
        let len = C::SECURITY_BITS / 8 + <C::Base as PrimeFieldBytes>::BYTES;
        assert!(
            len <= MAX_ELEMENT_BYTES,
            "hash_to_field element length exceeds MAX_ELEMENT_BYTES"
        );
        len
    };
}

/// Hashes `message` to `output.len()` field elements of `C::Base`
/// (RFC 9380 section 5.2), expanding with `X`.
///
/// An empty `output` succeeds without expanding anything.
pub fn hash_to_field<C, X>(
    message: &[u8],
    dst: &[u8],
    output: &mut [C::Base],
) -> Result<(), ExpandMsgError>
where
    C: HashToCurveConfig,
    X: ExpandMessage,
{
    if output.is_empty() {
        return Ok(());
    }

    let len_per_elm = <C as ElementLen>::ELEMENT_LEN;
    let mut expander = X::init_expand(message, dst, output.len() * len_per_elm)?;

    let mut buf = [0u8; MAX_ELEMENT_BYTES];
    let buf = &mut buf[..len_per_elm];
    for elm in output.iter_mut() {
        expander.read_into(buf);
        *elm = C::Base::from_be_bytes_wide(buf);
    }
    Ok(())
}

/// SSWU followed by the isogeny. The result is on `E` but not cleared.
fn map_to_target<C: HashToCurveConfig>(u: &C::Base) -> G1Jacobian<C> {
    let p = isogeny_map(&sswu_map(u, &C::SSWU), &C::ISOGENY)
        .map(G1Affine::<C>::from)
        .unwrap_or(G1Affine::identity());
    G1Jacobian::from(p)
}

/// Maps a field element to G1 (RFC 9380 `map_to_curve` then `clear_cofactor`).
pub fn map_to_curve<C: HashToCurveConfig>(u: &C::Base) -> G1Affine<C> {
    map_to_target::<C>(u).clear_cofactor().to_affine()
}

/// Non-uniform encoding of `message` into G1.
///
/// Cheaper than [`hash_to_curve`], but the output distribution is far from
/// uniform. Do not use it where a random oracle is assumed.
pub fn encode_to_curve<C, X>(message: &[u8], dst: &[u8]) -> Result<G1Affine<C>, ExpandMsgError>
where
    C: HashToCurveConfig,
    X: ExpandMessage,
{
    let mut u = [C::Base::ZERO; 1];
    hash_to_field::<C, X>(message, dst, &mut u)?;
    Ok(map_to_curve::<C>(&u[0]))
}

/// Hashes `message` into G1, indifferentiable from a random oracle.
pub fn hash_to_curve<C, X>(message: &[u8], dst: &[u8]) -> Result<G1Affine<C>, ExpandMsgError>
where
    C: HashToCurveConfig,
    X: ExpandMessage,
{
    let mut u = [C::Base::ZERO; 2];
    hash_to_field::<C, X>(message, dst, &mut u)?;
    let q0 = map_to_target::<C>(&u[0]);
    let q1 = map_to_target::<C>(&u[1]);
    Ok((q0 + q1).clear_cofactor().to_affine())
}

/// Checks that `u` and `-u` land on the kernel of the isogeny, and that the
/// kernel maps to the identity of `E` both alone and inside a random-oracle sum.
#[cfg(test)]
pub(crate) fn check_isogeny_kernel<C: HashToCurveConfig>(u: &C::Base) {
    for u in [*u, -*u] {
        let p = sswu_map(&u, &C::SSWU);
        assert!(bool::from(p.y.is_zero()));
        assert!(bool::from(isogeny_map(&p, &C::ISOGENY).is_none()));
        assert!(bool::from(map_to_target::<C>(&u).is_identity()));
        assert!(bool::from(map_to_curve::<C>(&u).is_identity()));

        let u1 = C::Base::ONE;
        let sum = (map_to_target::<C>(&u) + map_to_target::<C>(&u1))
            .clear_cofactor()
            .to_affine();
        assert!(bool::from(sum.is_on_curve()));
        assert_eq!(sum, map_to_curve::<C>(&u1));

        let sum = (map_to_target::<C>(&u1) + map_to_target::<C>(&u))
            .clear_cofactor()
            .to_affine();
        assert_eq!(sum, map_to_curve::<C>(&u1));
    }
}

/// Allow conversion from field elements into points of the group
pub trait MapToCurve: Sized {
    /// The field element type
    type Field;

    /// Map an element of the finite field to a point in the group
    fn map_to_curve(u: &Self::Field) -> Self;
}

/// Implementation of random oracle maps to the curve
pub trait HashToCurve<X: ExpandMessage>: Sized {
    /// Uniformly random encoding
    fn hash_to_curve(message: impl AsRef<[u8]>, dst: &[u8]) -> Result<Self, ExpandMsgError>;

    /// Non-uniformly random encoding
    fn encode_to_curve(message: impl AsRef<[u8]>, dst: &[u8]) -> Result<Self, ExpandMsgError>;
}

impl<C: HashToCurveConfig> MapToCurve for G1Affine<C> {
    type Field = C::Base;

    fn map_to_curve(u: &C::Base) -> Self {
        map_to_curve::<C>(u)
    }
}

impl<C: HashToCurveConfig, X: ExpandMessage> HashToCurve<X> for G1Affine<C> {
    fn hash_to_curve(message: impl AsRef<[u8]>, dst: &[u8]) -> Result<Self, ExpandMsgError> {
        hash_to_curve::<C, X>(message.as_ref(), dst)
    }

    fn encode_to_curve(message: impl AsRef<[u8]>, dst: &[u8]) -> Result<Self, ExpandMsgError> {
        encode_to_curve::<C, X>(message.as_ref(), dst)
    }
}
