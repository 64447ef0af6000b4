//! Equivalence tests between `crypto_monty::ConstMontyForm` and `num-bigint`.

mod common;

use common::to_biguint;
use crypto_monty::{
    U256, const_monty_params, const_prime_monty_params,
    modular::{ConstMontyParams, MontyForm},
};
use num_bigint::BigUint;
use proptest::prelude::*;

const_monty_params!(
    Modulus,
    U256,
    "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"
);

const_monty_params!(
    NoSpareBit,
    U256,
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
);

const_prime_monty_params!(
    Bn254Scalar,
    U256,
    "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"
);

type ConstMontyForm = crypto_monty::modular::ConstMontyForm<Modulus, { U256::LIMBS }>;
type Bn254Fr = crypto_monty::modular::ConstMontyForm<Bn254Scalar, { U256::LIMBS }>;
type Secp256k1Base = crypto_monty::modular::ConstMontyForm<NoSpareBit, { U256::LIMBS }>;

fn retrieve_biguint(monty_form: &ConstMontyForm) -> BigUint {
    to_biguint(&monty_form.retrieve())
}

fn reduce(n: &U256) -> ConstMontyForm {
    ConstMontyForm::new(n)
}

prop_compose! {
    fn uint()(bytes in any::<[u8; 32]>()) -> U256 {
        U256::from_le_slice(&bytes)
    }
}

proptest! {
    #[test]
    fn invert(x in uint()) {
        let x = reduce(&x);
        let actual = Option::<ConstMontyForm>::from(x.invert());

        let x_bi = retrieve_biguint(&x);
        let n_bi = to_biguint(Modulus::PARAMS.modulus());
        let expected = x_bi.modinv(&n_bi);

        match (expected, actual) {
            (Some(exp), Some(act)) => {
                let res = x * act;
                prop_assert_eq!(res.retrieve(), U256::ONE);
                prop_assert_eq!(exp, retrieve_biguint(&act));
            }
            (None, None) => (),
            (_, _) => panic!("disagreement on if modular inverse exists")
        }
    }

    #[test]
    fn pow(a in uint(), b in uint()) {
        let a = reduce(&a);
        let actual = a.pow(&b);

        let a_bi = retrieve_biguint(&a);
        let b_bi = to_biguint(&b);
        let n_bi = to_biguint(Modulus::PARAMS.modulus());
        let expected = a_bi.modpow(&b_bi, &n_bi);

        prop_assert_eq!(retrieve_biguint(&actual), expected);
    }

    #[test]
    fn arithmetic(a in uint(), b in uint()) {
        let a = reduce(&a);
        let b = reduce(&b);
        let n_bi = to_biguint(Modulus::PARAMS.modulus());
        let a_bi = retrieve_biguint(&a);
        let b_bi = retrieve_biguint(&b);

        prop_assert_eq!(retrieve_biguint(&(a + b)), (&a_bi + &b_bi) % &n_bi);
        prop_assert_eq!(retrieve_biguint(&(a - b)), (&a_bi + &n_bi - &b_bi) % &n_bi);
        prop_assert_eq!(retrieve_biguint(&(a * b)), (&a_bi * &b_bi) % &n_bi);
        prop_assert_eq!(retrieve_biguint(&a.square()), (&a_bi * &a_bi) % &n_bi);
    }

    #[test]
    fn matches_monty_form(a in uint(), b in uint()) {
        let x = Secp256k1Base::new(&a);
        let y = Secp256k1Base::new(&b);
        let params = NoSpareBit::PARAMS;
        let x_dyn = MontyForm::new(&a, params);
        let y_dyn = MontyForm::new(&b, params);

        prop_assert_eq!(MontyForm::from(&(x * y)), x_dyn * y_dyn);
        prop_assert_eq!(MontyForm::from(&(x + y)), x_dyn + y_dyn);
        prop_assert_eq!(MontyForm::from(&(x - y)), x_dyn - y_dyn);
        prop_assert_eq!(MontyForm::from(&x.div_by_2()), x_dyn.div_by_2());
    }

    #[test]
    fn sqrt(a in uint()) {
        let x = Bn254Fr::new(&a);
        let n_bi = to_biguint(Bn254Scalar::PARAMS.modulus());
        let x_bi = to_biguint(&x.retrieve());

        let legendre = x_bi.modpow(&((&n_bi - 1u32) >> 1), &n_bi);
        let expected = legendre == BigUint::from(1u32) || x_bi == BigUint::from(0u32);
        prop_assert_eq!(x.is_square().is_true_vartime(), expected);

        match Option::<Bn254Fr>::from(x.sqrt()) {
            Some(root) => {
                prop_assert!(expected);
                prop_assert_eq!(root.square(), x);
            }
            None => prop_assert!(!expected),
        }

        let root = Option::<Bn254Fr>::from(x.square().sqrt()).expect("square has a root");
        prop_assert!(root == x || root == -x);
    }

    #[test]
    fn sum_product(a in uint(), b in uint(), c in uint()) {
        let values = [reduce(&a), reduce(&b), reduce(&c)];
        let n_bi = to_biguint(Modulus::PARAMS.modulus());

        let sum = values.iter().map(retrieve_biguint).sum::<BigUint>() % &n_bi;
        let product = values.iter().map(retrieve_biguint).product::<BigUint>() % &n_bi;

        prop_assert_eq!(retrieve_biguint(&values.iter().sum()), sum);
        prop_assert_eq!(retrieve_biguint(&values.into_iter().product()), product);
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip() {
    let config = bincode::config::standard();
    let x = ConstMontyForm::new(&U256::from_u64(0xdead_beef));

    let bytes = bincode::serde::encode_to_vec(x, config).unwrap();
    let (y, _): (ConstMontyForm, usize) = bincode::serde::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(x, y);

    // Montgomery forms at or above the modulus are rejected.
    let unreduced = bincode::serde::encode_to_vec(*Modulus::PARAMS.modulus().as_ref(), config).unwrap();
    assert!(
        bincode::serde::decode_from_slice::<ConstMontyForm, _>(&unreduced, config).is_err()
    );
}
