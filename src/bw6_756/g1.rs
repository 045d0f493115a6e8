//! G1 of BW6-756: `E: y^2 = x^3 + 1` over [`Fp`], hashed to through the
//! 2-isogenous curve `E': y^2 = x^3 + A'x + 22`.

use sha2::Sha256;

use super::fp::Fp;
use crate::curve::{self, CurveConfig};
use crate::hash_to_curve::{
    self, ExpandMsgError, ExpandMsgXmd, HashToCurveConfig, IsogenyCoefficients, SswuParameters,
};

/// Marker type carrying the BW6-756 G1 parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bw6_756;

/// A point of BW6-756 G1 in affine coordinates.
pub type G1Affine = curve::G1Affine<Bw6_756>;

/// A point of BW6-756 G1 in Jacobian coordinates.
pub type G1Jacobian = curve::G1Jacobian<Bw6_756>;

/// Uncompressed encoding of a G1 point: big-endian `x || y`, with bit 6 of the
/// first byte marking the point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1Uncompressed(pub [u8; 192]);

impl Default for G1Uncompressed {
    fn default() -> Self {
        G1Uncompressed([0; 192])
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

/// `r`, the base-field characteristic of BLS12-378
const ORDER: [u64; 6] = [
    0x9948a20000000001, 0xce97f76a822c0000, 0x980dc360d0a49d7f,
    0x84059eb647102326, 0x53cb5d240ed107a2, 0x03eeb0416684d190,
];

/// `#E(Fp) / r`
const COFACTOR: [u64; 6] = [
    0x0000000000000000, 0x4697f76a822c0000, 0xb572cc6797adb140,
    0xb74b561fcda2d475, 0x4017891c139be689, 0x03eeb0416684d190,
];

impl CurveConfig for Bw6_756 {
    type Base = Fp;
    type Uncompressed = G1Uncompressed;

    const B: Fp = Fp::from_u64(1);
    const ORDER: &'static [u64] = &ORDER;
    const COFACTOR: &'static [u64] = &COFACTOR;
}

// p - 1 = 2^82 * m
const C3: [u64; 11] = [
    0x49d80678fcc7f0d0, 0xbcfbda16d0bd0d0a, 0xc8d4a860554784b1,
    0xdcc8dc5259a2bdb6, 0x9f55414fd63967a0, 0x48db3d6059025d40,
    0x2c74d998d5ce7885, 0x59d13f7e464428aa, 0xad19eb92f19a5f58,
    0x77315c55824fc3c6, 0x00000001eed5b76b,
];

const ISO_X_NUM: [Fp; 3] = [
    Fp::from_be_hex(
        "000b99024c84cb28\
        29c6f231ad6488f8\
        ecbe73b35d177c03\
        c95a1b5d4aff107d\
        954726713be7dc02\
        432d0d2d3f919a6b\
        98b6ff46f95026f3\
        13a3f953d1776abd\
        cc48d809cb0a92e2\
        b7464ed6eab9312f\
        612a13505b1d0000\
        72f6798000000000",
    ),
    Fp::from_be_hex(
        "0000000000000000\
        0026bd1df0d7ae6c\
        65ccce9c94a71497\
        cd125c27c5fea6d5\
        02de92ee64cfe616\
        1e0e05eb4aa16bb7\
        f4c55960f84e03d6\
        b986c05315e0dc29\
        6ea61a6ce0bfe758\
        4381b90f97adb140\
        83c7e63f8683ffff\
        b35baf0000000001",
    ),
    Fp::from_be_hex(
        "000b99024c84cb28\
        2a010dde96a80e9b\
        8571a99e3c121ae7\
        7cf5a598f3fd0abd\
        199502d6d31fb523\
        7042160e2f83bbff\
        87df05586dc52cb5\
        29ee19d07248b4fb\
        f241ffad1c2a6de7\
        1c88e46e4e3dbb10\
        26d5ecafa4e30000\
        0000000000000001",
    ),
];

const ISO_X_DEN: [Fp; 1] = [
    Fp::from_be_hex(
        "0000000000000000\
        009af477c35eb9b1\
        97333a72529c525f\
        3449709f17fa9b54\
        0b7a4bb9933f9858\
        783817ad2a85aedf\
        d3156583e1380f5a\
        e61b014c578370a5\
        ba9869b382ff9d61\
        0e06e43e5eb6c502\
        0f1f98fe1a0ffffe\
        cd6ebc0000000004",
    ),
];

const ISO_Y_NUM: [Fp; 4] = [
    Fp::from_be_hex(
        "000b99024c84cb28\
        2a010dde96a80e9b\
        8571a99e3c121ae7\
        7cf5a598f3fd0abd\
        199502d6d31fb523\
        7042160e2f83bbff\
        87df05586dc52cb5\
        29ee19d07248b4fb\
        f241ffad1c2a6de7\
        1c88e46e4e3dbb10\
        26d5ecafa4e2ffff\
        ffffffffffffffff",
    ),
    Fp::from_be_hex(
        "0001eed5b76b7731\
        5ce6c7800aef7b30\
        6952f8658ccae70a\
        80831fd94f251e13\
        a45b7ccc7290e7ae\
        2e14ef34b51df347\
        1733e5650ac56b2e\
        140baada4fc20270\
        074f385fcf816086\
        d73d46b785d5a289\
        f4a69c36293f7ffe\
        e097d04000000002",
    ),
    Fp::from_be_hex(
        "0007bb56ddaddcc5\
        719024ebf85e3a0a\
        46fefc545c5c0628\
        b194a34c4ba6ac12\
        eab1339f794cfc8e\
        22966cea64f49ee8\
        f4675ef712f878e5\
        8793870797ac6d90\
        c77a7cc163e6cef3\
        cd9dd88b97adb140\
        df8fcc7f0d07ffff\
        8d09868000000002",
    ),
    Fp::from_be_hex(
        "000d87d803f04259\
        8656902e5a6ebbb5\
        71049b389b6a74b8\
        bc73ebdd1ca73731\
        f32dd8a54ba4fdfe\
        ada26f108cc45b54\
        c92edb91d566097e\
        064073732fff7dd0\
        9aa254f4a0dc2ae2\
        f69fb52b5b4804e8\
        2d4ee97795b38000\
        0000000000000001",
    ),
];

const ISO_Y_DEN: [Fp; 3] = [
    Fp::from_be_hex(
        "000f76adbb5bb98a\
        e2ac127e1e3568cf\
        5c978cd2fac2ce89\
        fbf23221455163a6\
        ccc6ae73c42a46d9\
        eb02c812ea04faaa\
        0a7eb1cb3d06e646\
        e292cd15edb646a5\
        4302aa3c258de7de\
        d0b685e868524ec0\
        33c7e63f8683ffff\
        fffffffffffffff9",
    ),
    Fp::from_be_hex(
        "0000000000000000\
        03a1bace94385a29\
        8b335eadefa9ee3b\
        39b8a3ba8fdfa3f8\
        44ddc659737d9212\
        d1508e0eff22193e\
        f280611747505c21\
        64a207ca0d14a3e2\
        5f927a3511fdb046\
        5429597638489e0c\
        5abd95f49c5ffff8\
        d09868000000000c",
    ),
    Fp::from_be_hex(
        "0000000000000000\
        01d0dd674a1c2d14\
        c599af56f7d4f71d\
        9cdc51dd47efd1fc\
        226ee32cb9bec909\
        68a847077f910c9f\
        7940308ba3a82e10\
        b25103e5068a51f1\
        2fc93d1a88fed823\
        2a14acbb1c244f06\
        2d5ecafa4e2ffffc\
        684c34000000000c",
    ),
];

impl HashToCurveConfig for Bw6_756 {
    const SSWU: SswuParameters<Fp> = SswuParameters {
        z: Fp::from_u64(11),
        a: Fp::from_be_hex(
            "000f76adbb5bb98a\
            de21e8fbe4eef81b\
            6e9756798f2e64bf\
            f3cb65781179d6b0\
            76b17683f3cd5042\
            655e16802b1a5b1b\
            5b5e386e23e2731d\
            24c843595d5c79ca\
            4b8b9179cf10cb86\
            e782d614a1f78930\
            c25aeacdc30c0008\
            fb417dfffffffff2",
        ),
        b: Fp::from_u64(22),
        two_adicity: 82,
        c3: &C3,
        c6: Fp::from_be_hex(
            "000a3b0ea73b4460\
            2182999771e3ced3\
            6230587e632df0b0\
            b7fbc140fe2854c1\
            b5094ce43fc09a1f\
            7e8b3c6819f2064a\
            7030e1abd79a211b\
            b173e5f14afb3ea8\
            d9f395aec4d74c7b\
            f8ffbc3d8c29db8a\
            03e17b07ceec6784\
            fdd386f689fe892e",
        ),
        c7: Fp::from_be_hex(
            "0005f08f2c0f509c\
            1a933846ddc1ac28\
            d35fc418b1275782\
            44de38456d682c22\
            701d58d30444fd5b\
            910efd2de42e17f7\
            b8f980e1587a6eb6\
            1848ea43c7beadb1\
            1f5067fde99f9f60\
            f1d782d3c8e62db9\
            2a7d7f0f02d43418\
            71f3c20e6ec659dd",
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
    hash_to_curve::map_to_curve::<Bw6_756>(u)
}

/// `BW6756G1_XMD:SHA-256_SSWU_NU_`: non-uniform encoding of `message` into G1.
pub fn encode_to_g1(message: &[u8], dst: &[u8]) -> Result<G1Affine, ExpandMsgError> {
    hash_to_curve::encode_to_curve::<Bw6_756, ExpandMsgXmd<Sha256>>(message, dst)
}

/// `BW6756G1_XMD:SHA-256_SSWU_RO_`: hashes `message` into G1.
pub fn hash_to_g1(message: &[u8], dst: &[u8]) -> Result<G1Affine, ExpandMsgError> {
    hash_to_curve::hash_to_curve::<Bw6_756, ExpandMsgXmd<Sha256>>(message, dst)
}
