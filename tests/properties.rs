use ff::{Field, PrimeField};
use hash_to_g1::curve::{G1Affine, G1Jacobian};
use hash_to_g1::field::{batch_invert, PrimeFieldBytes};
use hash_to_g1::hash_to_curve::{
    encode_to_curve, hash_to_curve, hash_to_field, isogeny_map, map_to_curve, sqrt_ratio,
    sswu_map, ExpandMsgXmd, HashToCurveConfig,
};
use hash_to_g1::{bls12_378, bw6_756, bls12_378::Bls12_378, bw6_756::Bw6_756};
use proptest::{collection::vec, prelude::*};
use sha2::Sha256;

type Xmd = ExpandMsgXmd<Sha256>;

const DST: &[u8] = b"hash_to_g1-properties";

prop_compose! {
    fn fp_378()(bytes in vec(any::<u8>(), 0..=64)) -> bls12_378::Fp {
        bls12_378::Fp::from_be_bytes_wide(&bytes)
    }
}

prop_compose! {
    fn fp_756()(bytes in vec(any::<u8>(), 0..=112)) -> bw6_756::Fp {
        bw6_756::Fp::from_be_bytes_wide(&bytes)
    }
}

fn check_pipeline<C: HashToCurveConfig>(u: &C::Base) {
    let params = C::SSWU;
    let p = sswu_map(u, &params);
    assert!(bool::from(p.is_on_curve(&params.a, &params.b)));
    if !bool::from(u.is_zero()) {
        assert_eq!(bool::from(p.y.is_odd()), bool::from(u.is_odd()));
    }

    let q = isogeny_map(&p, &C::ISOGENY).unwrap();
    assert!(bool::from(q.is_on_curve(&C::Base::ZERO, &C::B)));

    let g = map_to_curve::<C>(u);
    assert!(bool::from(g.is_on_curve()));
    assert!(bool::from(g.is_torsion_free()));
    assert!(bool::from(
        G1Jacobian::from(&g).mul_vartime(C::ORDER).is_identity()
    ));
}

fn check_sqrt_ratio<C: HashToCurveConfig>(u: &C::Base, v: &C::Base) {
    if bool::from(v.is_zero()) {
        return;
    }
    let params = C::SSWU;
    let (is_qr, r) = sqrt_ratio(u, v, &params);
    if bool::from(is_qr) {
        assert_eq!(r.square() * v, *u);
    } else {
        assert_eq!(r.square() * v, params.z * u);
    }
}

fn check_batch_invert<F: PrimeFieldBytes>(values: &[F]) {
    let mut inverses = vec![F::ZERO; values.len()];
    batch_invert(values, &mut inverses);
    for (v, inv) in values.iter().zip(inverses.iter()) {
        if bool::from(v.is_zero()) {
            assert_eq!(*inv, F::ZERO);
        } else {
            assert_eq!(*v * inv, F::ONE);
        }
    }
}

fn check_cross_consistency<C: HashToCurveConfig>(msg: &[u8]) {
    let mut u = [C::Base::ZERO; 1];
    hash_to_field::<C, Xmd>(msg, DST, &mut u).unwrap();
    assert_eq!(
        encode_to_curve::<C, Xmd>(msg, DST).unwrap(),
        map_to_curve::<C>(&u[0])
    );

    let mut u = [C::Base::ZERO; 2];
    hash_to_field::<C, Xmd>(msg, DST, &mut u).unwrap();
    let sum = u
        .iter()
        .map(|u| {
            let q = isogeny_map(&sswu_map(u, &C::SSWU), &C::ISOGENY);
            G1Jacobian::from(q.map(G1Affine::<C>::from).unwrap_or(G1Affine::identity()))
        })
        .fold(G1Jacobian::identity(), |acc, p| acc + p);
    let h = hash_to_curve::<C, Xmd>(msg, DST).unwrap();
    assert_eq!(h, sum.clear_cofactor().to_affine());
    assert_eq!(h, hash_to_curve::<C, Xmd>(msg, DST).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn pipeline_bls12_378(u in fp_378()) {
        check_pipeline::<Bls12_378>(&u);
    }

    #[test]
    fn pipeline_bw6_756(u in fp_756()) {
        check_pipeline::<Bw6_756>(&u);
    }

    #[test]
    fn sqrt_ratio_bls12_378(u in fp_378(), v in fp_378()) {
        check_sqrt_ratio::<Bls12_378>(&u, &v);
    }

    #[test]
    fn sqrt_ratio_bw6_756(u in fp_756(), v in fp_756()) {
        check_sqrt_ratio::<Bw6_756>(&u, &v);
    }

    #[test]
    fn batch_invert_bls12_378(values in vec(fp_378(), 0..8)) {
        check_batch_invert(&values);
    }

    #[test]
    fn batch_invert_bw6_756(values in vec(fp_756(), 0..8)) {
        check_batch_invert(&values);
    }

    #[test]
    fn cross_consistency_bls12_378(msg in vec(any::<u8>(), 0..100)) {
        check_cross_consistency::<Bls12_378>(&msg);
    }

    #[test]
    fn cross_consistency_bw6_756(msg in vec(any::<u8>(), 0..100)) {
        check_cross_consistency::<Bw6_756>(&msg);
    }
}

#[test]
fn sswu_at_zero() {
    check_pipeline::<Bls12_378>(&bls12_378::Fp::ZERO);
    check_pipeline::<Bw6_756>(&bw6_756::Fp::ZERO);
}

#[test]
fn distinct_messages_give_distinct_points() {
    let mut seen = Vec::new();
    for i in 0u32..64 {
        let p = bls12_378::hash_to_g1(&i.to_be_bytes(), DST).unwrap();
        assert!(!seen.contains(&p));
        seen.push(p);
    }

    let empty = bw6_756::hash_to_g1(b"", DST).unwrap();
    assert_eq!(empty, bw6_756::hash_to_g1(b"", DST).unwrap());
    for i in 0u32..16 {
        assert_ne!(bw6_756::hash_to_g1(&i.to_le_bytes(), DST).unwrap(), empty);
    }
}
