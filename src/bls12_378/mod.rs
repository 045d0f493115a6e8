//! The G1 group of BLS12-378 and its hash-to-curve suites
//! `BLS12378G1_XMD:SHA-256_SSWU_RO_` and `BLS12378G1_XMD:SHA-256_SSWU_NU_`.

mod fp;
mod g1;

pub use self::fp::{Fp, FpRepr};
pub use self::g1::{
    encode_to_g1, hash_to_g1, map_to_g1, Bls12_378, G1Affine, G1Jacobian, G1Uncompressed, BLS_X,
};
