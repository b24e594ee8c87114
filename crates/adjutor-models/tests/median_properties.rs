//! Property tests for median imputation

use adjutor_core::Matrix;
use adjutor_models::MedianImputer;
use proptest::prelude::*;

/// Small matrices where roughly a third of the cells are missing
fn matrix_with_gaps() -> impl Strategy<Value = Matrix> {
    (1usize..12, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(
            prop_oneof![
                2 => (-1e6f64..1e6).boxed(),
                1 => Just(f64::NAN).boxed(),
            ],
            rows * cols,
        )
        .prop_map(move |data| Matrix::new(rows, cols, data).unwrap())
    })
}

proptest! {
    #[test]
    fn transform_leaves_no_missing(x in matrix_with_gaps()) {
        let out = MedianImputer::new().fit_transform(&x).unwrap();
        prop_assert!(!out.has_missing());
        prop_assert_eq!(out.shape(), x.shape());
    }

    #[test]
    fn observed_values_unchanged(x in matrix_with_gaps()) {
        let out = MedianImputer::new().fit_transform(&x).unwrap();

        for (before, after) in x.as_slice().iter().zip(out.as_slice()) {
            if !before.is_nan() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn median_within_observed_range(x in matrix_with_gaps()) {
        let mut imputer = MedianImputer::new();
        imputer.fit(&x).unwrap();
        let stats = imputer.statistics().unwrap().to_vec();

        for (col, stat) in stats.into_iter().enumerate() {
            let observed: Vec<f64> = x.column(col).filter(|v| !v.is_nan()).collect();
            if observed.is_empty() {
                prop_assert_eq!(stat, 0.0);
            } else {
                let lo = observed.iter().cloned().fold(f64::INFINITY, f64::min);
                let hi = observed.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(stat >= lo && stat <= hi);
            }
        }
    }
}
