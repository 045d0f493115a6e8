//! The G1 group of BW6-756, whose subgroup order is the BLS12-378 base-field
//! characteristic, with the suites `BW6756G1_XMD:SHA-256_SSWU_RO_` and
//! `BW6756G1_XMD:SHA-256_SSWU_NU_`.

mod fp;
mod g1;

pub use self::fp::{Fp, FpRepr};
pub use self::g1::{
    encode_to_g1, hash_to_g1, map_to_g1, Bw6_756, G1Affine, G1Jacobian, G1Uncompressed,
};
