use std::num::NonZeroUsize;

use matmul::input::{read_values, square_operands};
use matmul::{Error, Matrix, ParallelMultiplier, multiply, multiply_ijk, multiply_ikj};

const EPS: f64 = 0.1;

fn pool(threads: usize) -> ParallelMultiplier {
    ParallelMultiplier::with_threads(NonZeroUsize::new(threads).unwrap())
}

fn filled(height: usize, width: usize, modulo: usize) -> Matrix {
    Matrix::from_values(
        (0..height * width).map(|i| (i % modulo) as f64),
        height,
        width,
    )
    .unwrap()
}

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, name: &str) {
    assert!(
        expected.approx_eq(actual, 1e-8),
        "{}: expected\n{}\nbut got\n{}",
        name,
        expected,
        actual
    );
}

// ============================================================
// Fixed self-check corpus
// ============================================================

fn corpus() -> Vec<(Matrix, Matrix, Matrix)> {
    vec![
        (
            Matrix::zeros(0, 0).unwrap(),
            Matrix::zeros(0, 0).unwrap(),
            Matrix::zeros(0, 0).unwrap(),
        ),
        (
            Matrix::from_values([2.0], 1, 1).unwrap(),
            Matrix::from_values([3.0], 1, 1).unwrap(),
            Matrix::from_values([6.0], 1, 1).unwrap(),
        ),
        (
            Matrix::from_values([1.0, 2.0, 3.0, 4.0], 2, 2).unwrap(),
            Matrix::from_values([5.0, 6.0, 7.0, 8.0], 2, 2).unwrap(),
            Matrix::from_values([19.0, 22.0, 43.0, 50.0], 2, 2).unwrap(),
        ),
        (
            Matrix::from_values([1.0, 2.0, 3.0, 4.0], 4, 1).unwrap(),
            Matrix::from_values([5.0, 6.0, 7.0, 8.0], 1, 4).unwrap(),
            Matrix::from_values(
                [
                    5.0, 6.0, 7.0, 8.0, 10.0, 12.0, 14.0, 16.0, 15.0, 18.0, 21.0, 24.0, 20.0,
                    24.0, 28.0, 32.0,
                ],
                4,
                4,
            )
            .unwrap(),
        ),
    ]
}

#[test]
fn test_fixed_corpus() {
    for (i, (lhs, rhs, expected)) in corpus().iter().enumerate() {
        let result = multiply(lhs, rhs).unwrap();
        assert!(
            expected.approx_eq(&result, EPS),
            "case #{}: expected\n{}\nbut got\n{}",
            i + 1,
            expected,
            result
        );
    }
}

#[test]
fn test_fixed_corpus_all_implementations_agree() {
    for (lhs, rhs, expected) in corpus() {
        assert_matrices_equal(&expected, &multiply_ijk(&lhs, &rhs).unwrap(), "ijk");
        assert_matrices_equal(&expected, &multiply_ikj(&lhs, &rhs).unwrap(), "ikj");
        assert_matrices_equal(&expected, &pool(3).multiply(&lhs, &rhs).unwrap(), "parallel");
    }
}

// ============================================================
// Oracle comparison
// ============================================================

#[test]
fn test_square_sizes() {
    for size in [3, 5, 7, 16, 64, 100] {
        let a = filled(size, size, 17);
        let b = filled(size, size, 13);

        let expected = multiply_ijk(&a, &b).unwrap();
        let actual = multiply(&a, &b).unwrap();
        assert_matrices_equal(&expected, &actual, &format!("square_{}", size));
    }
}

#[test]
fn test_non_square_matrices() {
    let test_cases = [
        (32, 48, 64),  // wide result
        (64, 48, 32),  // tall result
        (100, 75, 50), // odd sizes
        (48, 100, 48), // deep k
        (13, 19, 17),  // primes
        (1, 50, 1),    // dot product
    ];

    for (m, k, n) in test_cases {
        let a = filled(m, k, 10);
        let b = filled(k, n, 10);

        let expected = multiply_ijk(&a, &b).unwrap();
        let actual = pool(4).multiply(&a, &b).unwrap();

        assert_eq!((actual.height(), actual.width()), (m, n));
        assert_matrices_equal(&expected, &actual, &format!("non_square_{}x{}x{}", m, k, n));
    }
}

// ============================================================
// Determinism under contention
// ============================================================

#[test]
fn test_repeated_runs_are_bit_identical() {
    // Irrational-ish values so that any change in summation order would
    // show up in the low bits.
    let size = 96;
    let a = Matrix::from_values(
        (0..size * size).map(|i| (i as f64 * 0.618).sin() * 1e3),
        size,
        size,
    )
    .unwrap();
    let b = Matrix::from_values(
        (0..size * size).map(|i| (i as f64 * 1.414).cos() / 7.0),
        size,
        size,
    )
    .unwrap();

    let reference = multiply_ikj(&a, &b).unwrap();
    for threads in [2, 8, 32] {
        let multiplier = pool(threads);
        for _ in 0..10 {
            assert_eq!(multiplier.multiply(&a, &b).unwrap(), reference);
        }
    }
}

// ============================================================
// Errors
// ============================================================

#[test]
fn test_conformability_violations() {
    let shapes = [((2, 3), (2, 3)), ((1, 1), (2, 2)), ((4, 2), (3, 4)), ((0, 0), (1, 1))];

    for ((lh, lw), (rh, rw)) in shapes {
        let a = Matrix::zeros(lh, lw).unwrap();
        let b = Matrix::zeros(rh, rw).unwrap();

        match multiply(&a, &b) {
            Err(Error::DimensionMismatch { op, lhs, rhs }) => {
                assert_eq!(op, "multiply");
                assert_eq!(lhs, (lh, lw));
                assert_eq!(rhs, (rh, rw));
            }
            other => panic!("expected dimension mismatch, got {:?}", other),
        }
        assert!(matches!(
            multiply_ijk(&a, &b),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}

#[test]
fn test_error_messages_are_one_line() {
    let errors = [
        Matrix::zeros(0, 1).unwrap_err(),
        Matrix::from_values([1.0], 2, 2).unwrap_err(),
        multiply(&Matrix::zeros(1, 2).unwrap(), &Matrix::zeros(1, 2).unwrap()).unwrap_err(),
        square_operands(vec![1.0]).unwrap_err(),
    ];

    for e in errors {
        let message = e.to_string();
        assert!(!message.is_empty());
        assert!(!message.contains('\n'), "{:?}", message);
    }
}

// ============================================================
// Stream input end to end
// ============================================================

#[test]
fn test_stream_to_rendered_product() {
    let input = "1 2\n3 4\n5 6\n7 8\n";
    let (a, b) = square_operands(read_values(input.as_bytes()).unwrap()).unwrap();

    let product = multiply(&a, &b).unwrap();
    assert_eq!(product.to_string(), "19\t22\n43\t50\n");
}

#[test]
fn test_empty_stream_renders_empty() {
    let (a, b) = square_operands(read_values("".as_bytes()).unwrap()).unwrap();
    assert_eq!(multiply(&a, &b).unwrap().to_string(), "Empty\n");
}
