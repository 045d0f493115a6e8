//! The base field of BW6-756, $\mathbb{F}_p$ with
//! `p = 0xf76adbb5bb98ae2ac127e1e3568cf5c978cd2fac2ce89fbf23221455163a6ccc6ae73c42a46d9eb02c812ea04faaa0a7eb1cb3d06e646e292cd15edb646a54302aa3c258de7ded0b685e868524ec033c7e63f868400000000000000000001`.

use crypto_bigint::nlimbs;

prime_field! {
    /// An element of the BW6-756 base field, stored in Montgomery form with
    /// `R = 2^768`.
    Fp,
    repr: FpRepr,
    limbs: nlimbs!(768),
    bytes: 96,
    bits: 756,
    modulus: "000f76adbb5bb98a\
        e2ac127e1e3568cf\
        5c978cd2fac2ce89\
        fbf23221455163a6\
        ccc6ae73c42a46d9\
        eb02c812ea04faaa\
        0a7eb1cb3d06e646\
        e292cd15edb646a5\
        4302aa3c258de7de\
        d0b685e868524ec0\
        33c7e63f86840000\
        0000000000000001",
    modulus_str: "0xf76adbb5bb98ae2ac127e1e3568cf5c978cd2fac2ce89fbf23221455163a6ccc6ae73c42a46d9eb02c812ea04faaa0a7eb1cb3d06e646e292cd15edb646a54302aa3c258de7ded0b685e868524ec033c7e63f868400000000000000000001",
    // a quadratic non-residue, so ROOT_OF_UNITY has order exactly 2^S
    generator: 31,
    s: 82,
    two_inv: "0007bb56ddaddcc5\
        7156093f0f1ab467\
        ae4bc6697d616744\
        fdf91910a2a8b1d3\
        66635739e215236c\
        f581640975027d55\
        053f58e59e837323\
        7149668af6db2352\
        a181551e12c6f3ef\
        685b42f434292760\
        19e3f31fc3420000\
        0000000000000001",
    // GENERATOR^t where p - 1 = 2^S * t, t odd
    root_of_unity: "0003bf74621bb3f4\
        fb31a23d02670748\
        0d7c48dddaf52744\
        797d2d8417e1f70f\
        e6b7fc22a6faeca0\
        264c34ed360cc576\
        3cc47cdc8ce346a2\
        edd4314049776cb8\
        07081f4b12e813d3\
        547424843684042f\
        25c590079ee91504\
        21c7a169c8bde1af",
    root_of_unity_inv: "000559d058fbfd6e\
        0edba72b64b43b69\
        821e0d78427d8068\
        b4db6a044755c7cf\
        38d9791fe121e2b8\
        4822a3f56bf3433e\
        b799623e5c0af051\
        ba50c0d0b3a38217\
        08a9fd177722616d\
        8fdb693b8a871a7a\
        1235e4677863f68e\
        5c0e0e4b4ef5e7b0",
    // GENERATOR^(2^S)
    delta: "0002647202afbef0\
        6b9374defb45a4f7\
        26e4b53d60c8a4a3\
        3283615a8fc2eca5\
        af8597eae2998b2f\
        35be67f733f9d7d5\
        73910dd10186e919\
        37de6cc0c446f8a8\
        9f791b5addc88161\
        cd6d5913ba15ad96\
        d95cba842491724d\
        0f4f525e5b0c7875",
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff::{Field, PrimeField};

    const MODULUS_BYTES: [u8; 96] = hex_literal::hex!(
        "000f76adbb5bb98ae2ac127e1e3568cf5c978cd2fac2ce89fbf23221455163a6ccc6ae73c42a46d9eb02c812ea04faaa0a7eb1cb3d06e646e292cd15edb646a54302aa3c258de7ded0b685e868524ec033c7e63f868400000000000000000001"
    );

    #[test]
    fn test_field_arithmetic() {
        crate::field::check_field_arithmetic::<Fp>();
    }

    #[test]
    fn test_canonical_bytes() {
        let mut p_minus_one = MODULUS_BYTES;
        p_minus_one[95] -= 1;
        assert_eq!((-Fp::ONE).to_bytes(), p_minus_one);
        assert_eq!(Fp::from_bytes(&p_minus_one).unwrap(), -Fp::ONE);
        assert!(bool::from(Fp::from_bytes(&MODULUS_BYTES).is_none()));
        assert!(bool::from(Fp::from_bytes(&[0xff; 96]).is_none()));
        assert_eq!(Fp::from_bytes(&[0; 96]).unwrap(), Fp::ZERO);
    }

    #[test]
    fn test_wide_reduction() {
        assert_eq!(Fp::from_be_bytes_wide(&MODULUS_BYTES), Fp::ZERO);
        assert_eq!(Fp::from_be_bytes_wide(&[]), Fp::ZERO);
        assert_eq!(Fp::from_be_bytes_wide(&[1, 0]), Fp::from(256));
        // 2^896 - 1, the largest value hash_to_field produces
        assert_eq!(
            Fp::from_be_bytes_wide(&[0xff; 112]),
            Fp::from_be_hex(
                "000b936fefb014a4\
                98a60660e6282531\
                53f1f804c0a979ee\
                67fc58f701016ef7\
                84d64bc94cd85574\
                9d3bf92ceaa53d9f\
                d6148edb7853afba\
                48eb3d10b627d3d7\
                b48cedad8e0d00d8\
                d4ddb85051fa1911\
                b7cd1e42245118ab\
                11208d4ace6c51e1",
            )
        );
    }

    #[test]
    #[should_panic]
    fn test_wide_reduction_too_long() {
        Fp::from_be_bytes_wide(&[0; 193]);
    }

    #[test]
    fn test_debug_is_hex() {
        let s = std::format!("{:?}", Fp::from(0xabcd));
        assert_eq!(s.len(), 2 + 192);
        assert!(s.starts_with("0x00"));
        assert!(s.ends_with("abcd"));
        assert_eq!(std::format!("{}", Fp::from(0xabcd)), s);
    }

    #[test]
    fn test_modulus_string() {
        let mut s = std::string::String::from("0x");
        for b in MODULUS_BYTES.iter() {
            s.push_str(&std::format!("{:02x}", b));
        }
        assert_eq!(
            s.trim_start_matches("0x").trim_start_matches('0'),
            Fp::MODULUS.trim_start_matches("0x")
        );
    }
}
