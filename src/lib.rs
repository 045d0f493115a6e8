//! # `hash_to_g1`
//!
//! Constant-time hashing of byte strings to the G1 groups of the BLS12-378 and
//! BW6-756 curves, following [RFC 9380]. Both curves have `j`-invariant zero, so
//! the simplified SWU map runs on a 2-isogenous curve and the result is carried
//! back through the isogeny before the cofactor is cleared.
//!
//! * [`hash_to_curve`](mod@hash_to_curve) holds the generic machinery: message expansion,
//!   `hash_to_field`, `sqrt_ratio`, SSWU, the isogeny and the encoders.
//! * [`bls12_378`] and [`bw6_756`] supply the constants and the
//!   `map_to_g1` / `encode_to_g1` / `hash_to_g1` entry points using
//!   `expand_message_xmd` with SHA-256.
//!
//! [RFC 9380]: https://www.rfc-editor.org/rfc/rfc9380
//!
//! ## Features
//!
//! * `bls12-378`, `bw6-756` (default): the respective curve.
//! * `alloc` (default): `ExpandMessageState::into_vec`.
//! * `zeroize`: `DefaultIsZeroes` for field elements.
//! * `nightly`: `subtle/nightly`.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]
#![deny(unsafe_code)]
#![allow(clippy::many_single_char_names)]
// Field and point arithmetic uses the operators of the underlying representation
// inside operator impls, which this lint flags.
#![allow(clippy::suspicious_arithmetic_impl)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod util;

#[macro_use]
pub mod field;

pub mod curve;
pub mod hash_to_curve;

#[cfg(feature = "bls12-378")]
#[cfg_attr(docsrs, doc(cfg(feature = "bls12-378")))]
pub mod bls12_378;

#[cfg(feature = "bw6-756")]
#[cfg_attr(docsrs, doc(cfg(feature = "bw6-756")))]
pub mod bw6_756;

pub use crate::curve::{CurveConfig, G1Affine, G1Jacobian};
pub use crate::field::{batch_invert, PrimeFieldBytes};
pub use crate::hash_to_curve::{
    encode_to_curve, hash_to_curve, hash_to_field, map_to_curve, ExpandMsgError,
    HashToCurve, HashToCurveConfig, MapToCurve,
};
