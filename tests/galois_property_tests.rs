//! Property-based tests for field axioms
//!
//! Elements are drawn by canonical index so every case maps onto a valid
//! element of the field under test.

use gfrs::{Element, Field};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::OnceLock;

/// GF(3^4) with reduction polynomial x^4 + x + 2
fn f81() -> &'static Field {
    static FIELD: OnceLock<Field> = OnceLock::new();
    FIELD.get_or_init(|| Field::new(3, 4, Some(&[2, 1, 0, 0, 1]), true).unwrap())
}

/// The same field without log tables
fn f81_direct() -> &'static Field {
    static FIELD: OnceLock<Field> = OnceLock::new();
    FIELD.get_or_init(|| Field::new(3, 4, Some(&[2, 1, 0, 0, 1]), false).unwrap())
}

fn elem(index: u64) -> Element {
    f81().element_from_index(index).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: addition and multiplication commute
    #[test]
    fn prop_commutative(a in 0u64..81, b in 0u64..81) {
        let (a, b) = (elem(a), elem(b));
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
    }

    /// Property: addition and multiplication associate
    #[test]
    fn prop_associative(a in 0u64..81, b in 0u64..81, c in 0u64..81) {
        let (a, b, c) = (elem(a), elem(b), elem(c));
        prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
    }

    /// Property: a(b + c) = ab + ac
    #[test]
    fn prop_distributive(a in 0u64..81, b in 0u64..81, c in 0u64..81) {
        let (a, b, c) = (elem(a), elem(b), elem(c));
        prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
    }

    /// Property: division undoes multiplication
    #[test]
    fn prop_division_inverts_multiplication(a in 0u64..81, b in 1u64..81) {
        let (a, b) = (elem(a), elem(b));
        prop_assert_eq!((&a * &b) / &b, a);
    }

    /// Property: a - b + b = a and a + (-a) = 0
    #[test]
    fn prop_additive_inverse(a in 0u64..81, b in 0u64..81) {
        let (a, b) = (elem(a), elem(b));
        prop_assert_eq!(&(&a - &b) + &b, a.clone());
        prop_assert!((&a + &(-&a)) == 0i64);
    }

    /// Property: table lookups agree with direct polynomial arithmetic
    #[test]
    fn prop_tables_agree_with_direct(a in 0u64..81, b in 1u64..81) {
        let direct_a = f81_direct().element_from_index(a).unwrap();
        let direct_b = f81_direct().element_from_index(b).unwrap();
        let (a, b) = (elem(a), elem(b));

        prop_assert_eq!((&a * &b).index(), (&direct_a * &direct_b).index());
        prop_assert_eq!((&a / &b).index(), (&direct_a / &direct_b).index());
    }

    /// Property: Fermat, a^(q-1) = 1 for nonzero a
    #[test]
    fn prop_fermat(a in 1u64..81) {
        prop_assert!(elem(a).pow(80).is_one());
    }
}

#[test]
fn test_random_triples_large_prime() {
    let field = Field::prime(65_521).unwrap();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..100 {
        let a = field.from_int(rng.random_range(0..65_521));
        let b = field.from_int(rng.random_range(0..65_521));
        let c = field.from_int(rng.random_range(1..65_521));

        assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        assert_eq!((&a * &b) * &c, &a * (&b * &c));
        assert_eq!((&a * &c) / &c, a);
    }
}
