// =========================================================================
// FALSIFY-MX: Matrix algebra contract
//
// Each test names the invariant it attempts to falsify; assertion messages
// carry the FALSIFIED tag so a failing contract is greppable.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

fn eye(n: usize) -> Matrix {
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        data[i * n + i] = 1.0;
    }
    Matrix::from_vec(n, n, data).expect("valid")
}

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();
    assert_eq!(att, a, "FALSIFIED MX-001: (A^T)^T != A");
}

/// FALSIFY-MX-002: Transpose swaps shape: (m x n)^T = (n x m)
#[test]
fn falsify_mx_002_transpose_swaps_shape() {
    let a = Matrix::from_vec(3, 5, vec![0.0; 15]).expect("valid");
    assert_eq!(
        a.transpose().shape(),
        (5, 3),
        "FALSIFIED MX-002: transpose did not swap shape"
    );
}

/// FALSIFY-MX-003: Transpose relocates (x, y) to (y, x)
#[test]
fn falsify_mx_003_transpose_relocates_elements() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let t = a.transpose();
    for x in 0..2 {
        for y in 0..3 {
            assert_eq!(
                t.get(x, y).expect("in range"),
                a.get(y, x).expect("in range"),
                "FALSIFIED MX-003: T[{x},{y}] != A[{y},{x}]"
            );
        }
    }
}

/// FALSIFY-MX-004: Product shape is (lhs rows x rhs cols); inner mismatch rejected
#[test]
fn falsify_mx_004_matmul_shape_contract() {
    let a = Matrix::from_vec(3, 2, vec![0.0; 6]).expect("valid");
    let b = Matrix::from_vec(2, 4, vec![0.0; 8]).expect("valid");
    assert_eq!(
        a.matmul(&b).expect("compatible").shape(),
        (3, 4),
        "FALSIFIED MX-004: product shape wrong"
    );

    let c = Matrix::from_vec(3, 4, vec![0.0; 12]).expect("valid");
    assert!(
        a.matmul(&c).is_err(),
        "FALSIFIED MX-004: 3x2 . 3x4 must be rejected"
    );
}

/// FALSIFY-MX-005: Identity is neutral: A.I = A and I.A = A
#[test]
fn falsify_mx_005_identity_matmul() {
    let a = Matrix::from_vec(2, 3, vec![1.0, -2.0, 3.0, 4.5, 5.0, -6.0]).expect("valid");
    let right = a.matmul(&eye(3)).expect("compatible");
    assert_eq!(right, a, "FALSIFIED MX-005: A.I != A");

    let left = eye(2).matmul(&a).expect("compatible");
    assert_eq!(left, a, "FALSIFIED MX-005: I.A != A");
}

/// FALSIFY-MX-006: Associativity on integer matrices: (A.B).C = A.(B.C)
#[test]
fn falsify_mx_006_matmul_associativity() {
    // Integer-valued entries keep every intermediate product exact in f64.
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).expect("valid");
    let c = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");

    let left = a.matmul(&b).expect("compatible").matmul(&c).expect("compatible");
    let right = a.matmul(&b.matmul(&c).expect("compatible")).expect("compatible");
    assert_eq!(left, right, "FALSIFIED MX-006: (A.B).C != A.(B.C)");
}

/// FALSIFY-MX-007: Addition commutes; shape mismatch rejected
#[test]
fn falsify_mx_007_add_commutativity() {
    let a = Matrix::from_vec(2, 2, vec![1.5, -2.0, 3.25, 4.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![0.5, 7.0, -1.25, 2.0]).expect("valid");
    assert_eq!(
        a.add(&b).expect("same shape"),
        b.add(&a).expect("same shape"),
        "FALSIFIED MX-007: A + B != B + A"
    );

    let c = Matrix::from_vec(3, 3, vec![0.0; 9]).expect("valid");
    assert!(
        a.add(&c).is_err(),
        "FALSIFIED MX-007: 2x2 + 3x3 must be rejected"
    );
}

/// FALSIFY-MX-008: Subtraction inverts addition on integer matrices
#[test]
fn falsify_mx_008_sub_inverts_add() {
    let a = Matrix::from_vec(2, 3, vec![10.0, -4.0, 7.0, 0.0, 22.0, -9.0]).expect("valid");
    let b = Matrix::from_vec(2, 3, vec![3.0, 5.0, -1.0, 8.0, -2.0, 6.0]).expect("valid");
    let restored = a.sub(&b).expect("same shape").add(&b).expect("same shape");
    assert_eq!(restored, a, "FALSIFIED MX-008: (A - B) + B != A");
}

/// FALSIFY-MX-009: Every operation preserves len == rows * cols
#[test]
fn falsify_mx_009_shape_invariant_preserved() {
    let a = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let b = Matrix::from_vec(3, 2, vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0]).expect("valid");

    let outputs = [
        a.transpose(),
        a.add(&b).expect("same shape"),
        a.sub(&b).expect("same shape"),
        a.matmul(&b.transpose()).expect("compatible"),
        a.map(|v| v + 1.0),
    ];
    for m in &outputs {
        assert_eq!(
            m.len(),
            m.n_rows() * m.n_cols(),
            "FALSIFIED MX-009: len != rows * cols after an operation"
        );
    }
}

/// FALSIFY-MX-010: Search coordinates address the element found
#[test]
fn falsify_mx_010_search_coordinates_valid() {
    // Non-square on purpose: a wrong divisor in the flat-to-(x, y)
    // conversion only shows up when rows != cols.
    let m = Matrix::from_vec(2, 5, (0..10).map(f64::from).collect()).expect("valid");
    for value in [0.0, 4.0, 5.0, 9.0] {
        let (x, y) = m.index_of(value).expect("present");
        assert_eq!(
            m.get(x, y).expect("in range"),
            value,
            "FALSIFIED MX-010: index_of({value}) returned ({x},{y})"
        );
        let (lx, ly) = m.last_index_of(value).expect("present");
        assert_eq!(
            m.get(lx, ly).expect("in range"),
            value,
            "FALSIFIED MX-010: last_index_of({value}) returned ({lx},{ly})"
        );
    }
}

/// FALSIFY-MX-011: Construction rejects ragged rows atomically
#[test]
fn falsify_mx_011_ragged_rows_rejected() {
    let result = Matrix::build(|b| {
        b.row([1, 2, 3, 4])?;
        b.row([1, 2, 3])?;
        Ok(())
    });
    assert!(result.is_err(), "FALSIFIED MX-011: ragged build accepted");

    // A rejected row must leave no trace in the finished matrix.
    let m = Matrix::build(|b| {
        b.row([1, 2])?;
        let _ = b.row([9, 9, 9]);
        b.row([3, 4])?;
        Ok(())
    })
    .expect("valid");
    assert_eq!(
        m.to_vec(),
        vec![1.0, 2.0, 3.0, 4.0],
        "FALSIFIED MX-011: rejected row leaked into storage"
    );
}

/// FALSIFY-MX-012: Equal matrices hash equal
#[test]
fn falsify_mx_012_hash_consistent_with_eq() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let hash_of = |m: &Matrix| {
        let mut hasher = DefaultHasher::new();
        m.hash(&mut hasher);
        hasher.finish()
    };
    let a = Matrix::from_vec(2, 2, vec![1.0, 0.0, 3.0, 4.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![1.0, -0.0, 3.0, 4.0]).expect("valid");
    assert_eq!(a, b);
    assert_eq!(
        hash_of(&a),
        hash_of(&b),
        "FALSIFIED MX-012: equal matrices hash differently"
    );
}

/// FALSIFY-MX-013: Sum equals independent accumulation of the same values
#[test]
fn falsify_mx_013_sum_matches_source_values() {
    let values = vec![0.25, -1.5, 3.0, 7.75, 2.5, -0.5];
    let expected: f64 = values.iter().sum();
    let m = Matrix::from_vec(2, 3, values).expect("valid");
    assert_eq!(
        m.sum(),
        expected,
        "FALSIFIED MX-013: sum diverged from source accumulation"
    );
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn seeded_data(len: usize, seed: u32) -> Vec<f64> {
        (0..len)
            .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
            .collect()
    }

    fn seeded_integers(len: usize, seed: u32) -> Vec<f64> {
        (0..len)
            .map(|i| ((i as i64 + i64::from(seed)) % 37 - 18) as f64)
            .collect()
    }

    /// FALSIFY-MX-001-prop: Transpose involution for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_001_prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(rows, cols, seeded_data(rows * cols, seed)).expect("valid");
            let att = a.transpose().transpose();
            prop_assert_eq!(att, a, "FALSIFIED MX-001-prop: (A^T)^T != A");
        }
    }

    /// FALSIFY-MX-005-prop: Identity matmul for random square matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_005_prop_identity_matmul(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(n, n, seeded_data(n * n, seed)).expect("valid");
            let result = a.matmul(&eye(n)).expect("compatible");
            prop_assert_eq!(result, a, "FALSIFIED MX-005-prop: A.I != A");
        }
    }

    /// FALSIFY-MX-007-prop: Addition commutes for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_007_prop_add_commutes(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(rows, cols, seeded_data(rows * cols, seed)).expect("valid");
            let b = Matrix::from_vec(rows, cols, seeded_data(rows * cols, seed + 1)).expect("valid");
            prop_assert_eq!(
                a.add(&b).expect("same shape"),
                b.add(&a).expect("same shape"),
                "FALSIFIED MX-007-prop: A + B != B + A"
            );
        }
    }

    /// FALSIFY-MX-008-prop: Subtraction inverts addition on integer values
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_008_prop_sub_inverts_add(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            // Integer-valued entries make (A - B) + B exact.
            let a = Matrix::from_vec(rows, cols, seeded_integers(rows * cols, seed)).expect("valid");
            let b = Matrix::from_vec(rows, cols, seeded_integers(rows * cols, seed + 7)).expect("valid");
            let restored = a.sub(&b).expect("same shape").add(&b).expect("same shape");
            prop_assert_eq!(restored, a, "FALSIFIED MX-008-prop: (A - B) + B != A");
        }
    }

    /// FALSIFY-MX-009-prop: Built matrices satisfy len == rows * cols
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_009_prop_build_shape_invariant(
            rows in 0..=6usize,
            cols in 0..=6usize,
        ) {
            let m = Matrix::build(|b| {
                for y in 0..rows {
                    b.row((0..cols).map(|x| (x + y) as f64))?;
                }
                Ok(())
            })
            .expect("valid");

            prop_assert_eq!(
                m.len(),
                m.n_rows() * m.n_cols(),
                "FALSIFIED MX-009-prop: len != rows * cols"
            );
            let expected_shape = if rows == 0 { (0, 0) } else { (rows, cols) };
            prop_assert_eq!(m.shape(), expected_shape, "FALSIFIED MX-009-prop: wrong shape");
        }
    }

    /// FALSIFY-MX-010-prop: index_of returns the first occurrence
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_010_prop_index_of_first_occurrence(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            // A small value pool forces duplicates.
            let data: Vec<f64> = (0..rows * cols)
                .map(|i| f64::from((i as u32 + seed) % 4))
                .collect();
            let m = Matrix::from_vec(rows, cols, data.clone()).expect("valid");

            let target = f64::from(seed % 4);
            match m.index_of(target) {
                Some((x, y)) => {
                    prop_assert_eq!(
                        m.get(x, y).expect("in range"),
                        target,
                        "FALSIFIED MX-010-prop: coordinates miss the target"
                    );
                    let flat = y * cols + x;
                    prop_assert!(
                        data[..flat].iter().all(|&v| v != target),
                        "FALSIFIED MX-010-prop: an earlier occurrence exists"
                    );
                }
                None => prop_assert!(
                    data.iter().all(|&v| v != target),
                    "FALSIFIED MX-010-prop: present value reported absent"
                ),
            }
        }
    }

    /// FALSIFY-MX-013-prop: Sum equals accumulation of the source vector
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_013_prop_sum_matches_source(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data = seeded_data(rows * cols, seed);
            let expected: f64 = data.iter().sum();
            let m = Matrix::from_vec(rows, cols, data).expect("valid");
            prop_assert_eq!(m.sum(), expected, "FALSIFIED MX-013-prop: sum diverged");
        }
    }
}
