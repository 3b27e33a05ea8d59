use kgvec_eval::spearman::{average_ranks, spearman_rho};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rho_is_bounded(pairs in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 2..40)) {
        let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        if let Some(rho) = spearman_rho(&x, &y) {
            prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&rho));
        }
    }

    #[test]
    fn rho_is_symmetric(pairs in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 2..40)) {
        let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        match (spearman_rho(&x, &y), spearman_rho(&y, &x)) {
            (Some(a), Some(b)) => prop_assert!((a - b).abs() < 1e-9),
            (a, b) => prop_assert_eq!(a.is_none(), b.is_none()),
        }
    }

    #[test]
    fn ranks_sum_to_triangle_number(values in prop::collection::vec(0u8..10, 1..50)) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let n = values.len() as f64;
        let sum: f64 = average_ranks(&values).iter().sum();
        prop_assert!((sum - n * (n + 1.0) / 2.0).abs() < 1e-9);
    }
}
