//! Integration tests for Reed-Solomon encoding and Berlekamp-Welch decoding

use gfrs::{Element, Field, GfError, ReedSolomon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_message(field: &Field, k: usize, rng: &mut StdRng) -> Vec<Element> {
    (0..k)
        .map(|_| {
            field
                .element_from_index(rng.random_range(0..field.order()))
                .unwrap()
        })
        .collect()
}

/// Replace `positions` with different values
fn corrupt(word: &mut [Element], positions: &[usize], rng: &mut StdRng) {
    let field = word[0].field().clone();
    for &i in positions {
        let shift = rng.random_range(1..field.order());
        let delta = field.element_from_index(shift).unwrap();
        word[i] = &word[i] + &delta;
    }
}

fn assert_round_trip(field: &Field) {
    let mut rng = StdRng::seed_from_u64(field.order());
    for n in 2..field.order() as usize {
        for k in 1..n {
            let rs = ReedSolomon::with_default_points(field, n, k).unwrap();
            let message = random_message(field, k, &mut rng);
            let codeword = rs.encode(&message).unwrap();
            assert_eq!(
                rs.decode(&codeword).unwrap(),
                message,
                "n = {}, k = {} over {}",
                n,
                k,
                field
            );
        }
    }
}

#[test]
fn test_round_trip_prime_field() {
    assert_round_trip(&Field::prime(11).unwrap());
}

#[test]
fn test_round_trip_binary_extension() {
    assert_round_trip(&Field::new(2, 3, Some(&[1, 1, 0, 1]), true).unwrap());
}

#[test]
fn test_round_trip_without_tables() {
    assert_round_trip(&Field::new(2, 3, Some(&[1, 1, 0, 1]), false).unwrap());
}

#[test]
fn test_every_error_pattern_within_bound() {
    let field = Field::prime(11).unwrap();
    let rs = ReedSolomon::with_default_points(&field, 7, 3).unwrap();
    assert_eq!(rs.max_correctable(), 2);

    let message: Vec<Element> = [3, 8, 1].iter().map(|&v| field.from_int(v)).collect();
    let codeword = rs.encode(&message).unwrap();

    // Weight 1
    for i in 0..7 {
        for d in 1..11 {
            let mut received = codeword.clone();
            received[i] = &received[i] + d as i64;
            assert_eq!(rs.decode(&received).unwrap(), message);
            assert_eq!(rs.error_positions(&received).unwrap(), vec![i]);
        }
    }

    // Weight 2
    for i in 0..7 {
        for j in (i + 1)..7 {
            for di in 1..11 {
                for dj in 1..11 {
                    let mut received = codeword.clone();
                    received[i] = &received[i] + di as i64;
                    received[j] = &received[j] + dj as i64;
                    assert_eq!(
                        rs.decode(&received).unwrap(),
                        message,
                        "errors at {} and {}",
                        i,
                        j
                    );
                }
            }
        }
    }
}

#[test]
fn test_random_errors_extension_field() {
    let field = Field::new(3, 3, Some(&[1, 2, 0, 1]), true).unwrap();
    let mut rng = StdRng::seed_from_u64(27);

    for _ in 0..50 {
        let n = rng.random_range(3..27);
        let k = rng.random_range(1..n);
        let rs = ReedSolomon::with_default_points(&field, n, k).unwrap();

        let message = random_message(&field, k, &mut rng);
        let mut received = rs.encode(&message).unwrap();

        let errors = rng.random_range(0..=rs.max_correctable());
        let mut positions: Vec<usize> = (0..n).collect();
        for i in 0..errors {
            let j = rng.random_range(i..n);
            positions.swap(i, j);
        }
        positions.truncate(errors);
        positions.sort_unstable();
        corrupt(&mut received, &positions, &mut rng);

        assert_eq!(rs.decode(&received).unwrap(), message);
        assert_eq!(rs.error_positions(&received).unwrap(), positions);
    }
}

#[test]
fn test_beyond_bound_never_returns_a_distant_codeword() {
    let field = Field::prime(13).unwrap();
    let rs = ReedSolomon::with_default_points(&field, 10, 4).unwrap();
    let e_max = rs.max_correctable();
    let mut rng = StdRng::seed_from_u64(13);

    let mut failures = 0;
    for _ in 0..200 {
        let message = random_message(&field, 4, &mut rng);
        let mut received = rs.encode(&message).unwrap();

        let errors = rng.random_range(e_max + 1..=8);
        let positions: Vec<usize> = (0..errors).collect();
        corrupt(&mut received, &positions, &mut rng);

        match rs.decode(&received) {
            Ok(decoded) => {
                let reencoded = rs.encode(&decoded).unwrap();
                let distance = reencoded
                    .iter()
                    .zip(&received)
                    .filter(|(a, b)| a != b)
                    .count();
                assert!(distance <= e_max, "distance {} > {}", distance, e_max);
            }
            Err(GfError::DecodingFailure(_)) => failures += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }
    assert!(failures > 0);
}

#[test]
fn test_explicit_points() {
    let field = Field::prime(11).unwrap();
    let points: Vec<Element> = [10, 5, 7, 2, 9, 1].iter().map(|&v| field.from_int(v)).collect();
    let rs = ReedSolomon::new(&field, 6, 2, points).unwrap();

    let message = vec![field.from_int(4), field.from_int(6)];
    let mut received = rs.encode(&message).unwrap();
    // 4 + 6·10 = 64 = 9 mod 11
    assert_eq!(received[0], 9i64);

    received[2] = field.zero();
    received[5] = field.from_int(1);
    assert_eq!(rs.decode(&received).unwrap(), message);
}

#[test]
fn test_message_from_other_field_rejected() {
    let field = Field::prime(11).unwrap();
    let other = Field::prime(11).unwrap();
    let rs = ReedSolomon::with_default_points(&field, 5, 2).unwrap();

    let message = vec![other.from_int(1), other.from_int(2)];
    assert_eq!(rs.encode(&message), Err(GfError::FieldMismatch));
    assert!(rs.field().same_field(&field));
}
