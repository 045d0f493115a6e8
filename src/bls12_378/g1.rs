//! G1 of BLS12-378: `E: y^2 = x^3 + 1` over [`Fp`], hashed to through the
//! 2-isogenous curve `E': y^2 = x^3 + A'x + 22`.

use sha2::Sha256;

use super::fp::Fp;
use crate::curve::{self, CurveConfig};
use crate::hash_to_curve::{
    self, ExpandMsgError, ExpandMsgXmd, HashToCurveConfig, IsogenyCoefficients, SswuParameters,
};

/// The parameter `x_0` the BLS12-378 family member is generated from.
pub const BLS_X: u64 = 0x9948a20000000001;

/// Marker type carrying the BLS12-378 G1 parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bls12_378;

/// A point of BLS12-378 G1 in affine coordinates.
pub type G1Affine = curve::G1Affine<Bls12_378>;

/// A point of BLS12-378 G1 in Jacobian coordinates.
pub type G1Jacobian = curve::G1Jacobian<Bls12_378>;

/// Uncompressed encoding of a G1 point: big-endian `x || y`, with bit 6 of the
/// first byte marking the point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1Uncompressed(pub [u8; 96]);

impl Default for G1Uncompressed {
    fn default() -> Self {
        G1Uncompressed([0; 96])
    }
}

impl AsRef<[u8]> for G1Uncompressed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for G1Uncompressed {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

/// `r = x_0^4 - x_0^2 + 1`
const ORDER: [u64; 4] = [
    0x3291440000000001, 0xeae77f3da0940001, 0x87787fb4e3dbb0ff,
    0x20e7b9c8ef7b2eb1,
];

/// `(x_0 - 1)^2 / 3`
const COFACTOR: [u64; 2] = [
    0x0000000000000000, 0x1e97f76a822c0000,
];

impl CurveConfig for Bls12_378 {
    type Base = Fp;
    type Uncompressed = G1Uncompressed;

    const B: Fp = Fp::from_u64(1);
    const ORDER: &'static [u64] = &ORDER;
    const COFACTOR: &'static [u64] = &COFACTOR;

    /// Multiplies by the effective cofactor `h_eff = 1 - x_0`, which sends
    /// `E(Fp)` into G1 faster than [`Self::COFACTOR`] would.
    fn clear_cofactor(p: &G1Jacobian) -> G1Jacobian {
        p - &p.mul_vartime(&[BLS_X])
    }
}

// p - 1 = 2^41 * m
const C3: [u64; 6] = [
    0xdaa08b0000265228, 0xd83429275ff3a5fd, 0xad91c408c9a60370,
    0x4903b441e8a10167, 0x1059a1346414f2d7, 0x000000000000fbac,
];

const ISO_X_NUM: [Fp; 3] = [
    Fp::from_be_hex(
        "02f304310ce39d2c\
        3011a6d50eb4ece7\
        30cab541269dbc53\
        c7594241b1c244ef\
        f01c0ce03cbe0000\
        0000000000000000",
    ),
    Fp::from_be_hex(
        "0000000000000000\
        09d9ea03fd9a908c\
        76d1012fb4743eb0\
        c720b5849c7b761f\
        f1e3f31fc3420000\
        4ca4510000000001",
    ),
    Fp::from_be_hex(
        "02f304310ce39d2c\
        3ed885db0b1cc5b9\
        e3043708b54c1a5c\
        f20a52889c7b761f\
        daf1f98fe1a10000\
        72f6798000000001",
    ),
];

const ISO_X_DEN: [Fp; 1] = [
    Fp::from_be_hex(
        "0000000000000000\
        2767a80ff66a4231\
        db4404bed1d0fac3\
        1c82d61271edd87f\
        c78fcc7f0d080001\
        3291440000000004",
    ),
];

const ISO_Y_NUM: [Fp; 4] = [
    Fp::from_be_hex(
        "02f304310ce39d2c\
        3ed885db0b1cc5b9\
        e3043708b54c1a5c\
        f20a52889c7b761f\
        daf1f98fe1a10000\
        72f6797fffffffff",
    ),
    Fp::from_be_hex(
        "007dd6082cd09a32\
        2f6a993378ddbf03\
        0e107849ad95ef7b\
        bdbc611d64e38ea7\
        c4e9cea46c7d0001\
        3291440000000002",
    ),
    Fp::from_be_hex(
        "01f75820b34268c8\
        38ac8d9803d05ca3\
        f43c5122b2366f9c\
        76b7f1f7530b7fef\
        d221e864e5f90000\
        bf9aca8000000002",
    ),
    Fp::from_be_hex(
        "0370da3939b4375e\
        4951f17f8cf6e6ae\
        3384eadf7e2e1ec1\
        c50c0af4b69009cf\
        d4c4f87d31e68000\
        861f8dc000000001",
    ),
];

const ISO_Y_DEN: [Fp; 3] = [
    Fp::from_be_hex(
        "03eeb0416684d190\
        53cb5d240ed107a2\
        84059eb647102326\
        980dc360d0a49d7f\
        ce97f76a822c0000\
        9948a1fffffffff9",
    ),
    Fp::from_be_hex(
        "0000000000000000\
        ec6df05fc67d8d2b\
        23981c78eae5e092\
        ab11046eab9312fe\
        ad5ecafa4e300007\
        2f6798000000000c",
    ),
    Fp::from_be_hex(
        "0000000000000000\
        7636f82fe33ec695\
        91cc0e3c7572f049\
        5588823755c9897f\
        56af657d27180003\
        97b3cc000000000c",
    ),
];

impl HashToCurveConfig for Bls12_378 {
    const SSWU: SswuParameters<Fp> = SswuParameters {
        z: Fp::from_u64(11),
        a: Fp::from_be_hex(
            "03eeb0416684d18f\
            2c41f0ac56b4172c\
            97877b1f2170ca6f\
            42387dd67a2cc5c1\
            75e179b1a06ffff7\
            9e0723fffffffff2",
        ),
        b: Fp::from_u64(22),
        two_adicity: 41,
        c3: &C3,
        c6: Fp::from_be_hex(
            "0265a29696f46177\
            7a6253478dfd26b3\
            ee1529973ce81298\
            75bcbae4c8b67dc9\
            742b92f745647d57\
            e85610b4a3fd7d1a",
        ),
        c7: Fp::from_be_hex(
            "001789fd48149b56\
            c1fea63da09982e8\
            845bda290a7ef9b5\
            a9b393f1d675e133\
            dfd16c3ee17953d2\
            a7639c552a70180e",
        ),
    };

    const ISOGENY: IsogenyCoefficients<Fp> = IsogenyCoefficients {
        x_num: &ISO_X_NUM,
        x_den: &ISO_X_DEN,
        y_num: &ISO_Y_NUM,
        y_den: &ISO_Y_DEN,
    };
}

/// Maps a field element to G1.
pub fn map_to_g1(u: &Fp) -> G1Affine {
    hash_to_curve::map_to_curve::<Bls12_378>(u)
}

/// `BLS12378G1_XMD:SHA-256_SSWU_NU_`: non-uniform encoding of `message` into G1.
pub fn encode_to_g1(message: &[u8], dst: &[u8]) -> Result<G1Affine, ExpandMsgError> {
    hash_to_curve::encode_to_curve::<Bls12_378, ExpandMsgXmd<Sha256>>(message, dst)
}

/// `BLS12378G1_XMD:SHA-256_SSWU_RO_`: hashes `message` into G1.
pub fn hash_to_g1(message: &[u8], dst: &[u8]) -> Result<G1Affine, ExpandMsgError> {
    hash_to_curve::hash_to_curve::<Bls12_378, ExpandMsgXmd<Sha256>>(message, dst)
}
