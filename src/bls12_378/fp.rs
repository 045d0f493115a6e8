//! The base field of BLS12-378, $\mathbb{F}_p$ with
//! `p = 0x3eeb0416684d19053cb5d240ed107a284059eb647102326980dc360d0a49d7fce97f76a822c00009948a20000000001`.

use crypto_bigint::nlimbs;

prime_field! {
    /// An element of the BLS12-378 base field, stored in Montgomery form with
    /// `R = 2^384`.
    Fp,
    repr: FpRepr,
    limbs: nlimbs!(384),
    bytes: 48,
    bits: 378,
    modulus: "03eeb0416684d190\
        53cb5d240ed107a2\
        84059eb647102326\
        980dc360d0a49d7f\
        ce97f76a822c0000\
        9948a20000000001",
    modulus_str: "0x3eeb0416684d19053cb5d240ed107a284059eb647102326980dc360d0a49d7fce97f76a822c00009948a20000000001",
    // a quadratic non-residue, so ROOT_OF_UNITY has order exactly 2^S
    generator: 5,
    s: 41,
    two_inv: "01f75820b34268c8\
        29e5ae92076883d1\
        4202cf5b23881193\
        4c06e1b068524ebf\
        e74bfbb541160000\
        4ca4510000000001",
    // GENERATOR^t where p - 1 = 2^S * t, t odd
    root_of_unity: "014b686b2a9908b5\
        3d3c6207820490b4\
        5a7d8ea19dc54373\
        344f8e46470e0f8a\
        9e7bcd30b02fe8bd\
        6c2355446171a844",
    root_of_unity_inv: "02c97a82ae214381\
        1ef3103f078c0baf\
        a1e410b6744ea84f\
        2a1b524c4e49d9c2\
        dc40d917144283c0\
        3bf2ab4a53a58bfb",
    // GENERATOR^(2^S)
    delta: "00ec754553dc3dc4\
        191e53d2c66da36f\
        a6d281b4adfe149a\
        a599493754fba097\
        c0c9b8b0341a5b11\
        730c9b32a154aa70",
}
