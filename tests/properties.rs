//! Property tests for the container's algebraic laws.

use matriz::prelude::*;
use proptest::collection::vec;
use proptest::prelude::*;

fn matrix_strategy() -> impl Strategy<Value = Matrix<f64>> {
    (1usize..6, 1usize..6).prop_flat_map(|(r, c)| {
        vec(-100.0..100.0_f64, r * c)
            .prop_map(move |data| Matrix::from_vec(r, c, data).expect("generated length matches"))
    })
}

fn matrix_pair_strategy() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>)> {
    (1usize..6, 1usize..6).prop_flat_map(|(r, c)| {
        (
            vec(-100.0..100.0_f64, r * c),
            vec(-100.0..100.0_f64, r * c),
        )
            .prop_map(move |(d1, d2)| {
                (
                    Matrix::from_vec(r, c, d1).expect("generated length matches"),
                    Matrix::from_vec(r, c, d2).expect("generated length matches"),
                )
            })
    })
}

proptest! {
    #[test]
    fn transpose_is_involutive(a in matrix_strategy()) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn add_then_sub_restores_left_operand((a, b) in matrix_pair_strategy()) {
        let back = a.add(&b).expect("same shape").sub(&b).expect("same shape");
        prop_assert_eq!(back.shape(), a.shape());
        for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn submatrix_drops_one_row_and_column(a in matrix_strategy()) {
        prop_assume!(a.rows() >= 2 && a.cols() >= 2);
        let s = a.submatrix(0, 0);
        prop_assert_eq!(s.shape(), (a.rows() - 1, a.cols() - 1));
        prop_assert_eq!(s.get(0, 0), a.get(1, 1));
    }

    #[test]
    fn save_load_roundtrip(a in matrix_strategy()) {
        let mut out = Vec::new();
        a.save(&mut out, 12).expect("vec writer cannot fail");
        let back = Matrix::<f64>::load(out.as_slice()).expect("what save wrote");
        prop_assert_eq!(back.shape(), a.shape());
        for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
            prop_assert!((x - y).abs() < 1e-6);
        }
    }
}
