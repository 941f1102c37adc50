// ─────────────────────────────────────────────────────────────────────
// Xbox Analysis — Property-Based Tests (proptest) for xbox-math
// © 2018–2026 kpapke and the Xbox analysis contributors.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for xbox-math using proptest.
//!
//! Covers: Thomas solver (residual, length, identity, dimension and pivot
//! errors, tiny pivots, repeatability, flop count), cubic spline node interpolation.

use proptest::collection::vec;
use proptest::prelude::*;
use xbox_math::spline::CubicSpline;
use xbox_math::tridiag::{
    max_residual, solve_with_config, thomas_solve, thomas_solve_owned, TridiagonalMatrix,
};
use xbox_types::config::SolverConfig;
use xbox_types::error::XboxError;

/// Strictly diagonally dominant system of size n with arbitrary off-diagonals.
fn dominant_system() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>)> {
    (1usize..60).prop_flat_map(|n| {
        (
            vec(-1.0f64..1.0, n - 1),
            vec(2.1f64..5.0, n),
            vec(-1.0f64..1.0, n - 1),
            vec(-100.0f64..100.0, n),
            vec(any::<bool>(), n),
        )
            .prop_map(|(a, b, c, d, neg)| {
                let b: Vec<f64> = b
                    .into_iter()
                    .zip(neg)
                    .map(|(v, flip)| if flip { -v } else { v })
                    .collect();
                (a, b, c, d)
            })
    })
}

// ── Thomas Solver Properties ─────────────────────────────────────────

proptest! {
    /// For any diagonally dominant tridiagonal system, x = thomas_solve(a,b,c,d)
    /// satisfies Ax = d within floating-point tolerance.
    #[test]
    fn thomas_solve_ax_eq_d((a, b, c, d) in dominant_system()) {
        let x = thomas_solve(&a, &b, &c, &d).unwrap();
        let m = TridiagonalMatrix::new(a, b, c).unwrap();
        let scale = d.iter().fold(1.0_f64, |acc, v| acc.max(v.abs()));
        let res = max_residual(&m, &x, &d).unwrap();
        prop_assert!(res / scale < 1e-9, "relative residual {}", res / scale);
    }

    /// Thomas solver returns the correct number of elements.
    #[test]
    fn thomas_solve_output_length(n in 1usize..50) {
        let a = vec![0.0; n - 1];
        let b = vec![1.0; n];
        let c = vec![0.0; n - 1];
        let d: Vec<f64> = (0..n).map(|i| i as f64).collect();

        let x = thomas_solve(&a, &b, &c, &d).unwrap();
        prop_assert_eq!(x.len(), n);
    }

    /// Identity system (b=1, a=c=0) → x = d.
    #[test]
    fn thomas_identity_system(n in 1usize..50) {
        let a = vec![0.0; n - 1];
        let b = vec![1.0; n];
        let c = vec![0.0; n - 1];
        let d: Vec<f64> = (0..n).map(|i| (i as f64) * 0.7 - 3.0).collect();

        let x = thomas_solve(&a, &b, &c, &d).unwrap();
        for i in 0..n {
            prop_assert!((x[i] - d[i]).abs() < 1e-14,
                "x[{}] = {}, expected {}", i, x[i], d[i]);
        }
    }

    /// Single equation: x = d / b.
    #[test]
    fn thomas_single_equation(b in 0.1f64..100.0, d in -100.0f64..100.0) {
        let x = thomas_solve(&[], &[b], &[], &[d]).unwrap();
        prop_assert_eq!(x, vec![d / b]);
    }

    /// Any main/rhs length disagreement is rejected before solving.
    #[test]
    fn thomas_rejects_main_rhs_mismatch(n in 1usize..40, extra in 1usize..5) {
        let a = vec![0.5; n - 1];
        let b = vec![2.0; n + extra];
        let c = vec![0.5; n - 1];
        let d = vec![1.0; n];
        let err = thomas_solve(&a, &b, &c, &d).unwrap_err();
        let is_mismatch = matches!(err, XboxError::DimensionMismatch { operand: "main", .. });
        prop_assert!(is_mismatch);
    }

    /// Off-diagonals of length != n-1 are rejected.
    #[test]
    fn thomas_rejects_band_mismatch(n in 2usize..40, wrong in 0usize..80) {
        prop_assume!(wrong != n - 1);
        let d = vec![1.0; n];
        let b = vec![3.0; n];
        let ok = vec![1.0; n - 1];
        let bad = vec![1.0; wrong];

        let sub_err = matches!(
            thomas_solve(&bad, &b, &ok, &d),
            Err(XboxError::DimensionMismatch { operand: "sub", .. })
        );
        let sup_err = matches!(
            thomas_solve(&ok, &b, &bad, &d),
            Err(XboxError::DimensionMismatch { operand: "sup", .. })
        );
        prop_assert!(sub_err);
        prop_assert!(sup_err);
    }

    /// A zero on the leading pivot is always reported.
    #[test]
    fn thomas_zero_leading_pivot((a, mut b, c, d) in dominant_system()) {
        b[0] = 0.0;
        let err = thomas_solve(&a, &b, &c, &d).unwrap_err();
        let is_zero_pivot = matches!(err, XboxError::DivisionByZero { row: 0, .. });
        prop_assert!(is_zero_pivot);
    }

    /// A pivot whose reciprocal overflows is reported, never turned into NaN.
    #[test]
    fn thomas_subnormal_leading_pivot(
        (a, mut b, c, d) in dominant_system(),
        tiny in 1e-320f64..1e-309,
    ) {
        b[0] = tiny;
        let err = thomas_solve(&a, &b, &c, &d).unwrap_err();
        let is_zero_pivot = matches!(err, XboxError::DivisionByZero { row: 0, .. });
        prop_assert!(is_zero_pivot);
    }

    /// Repeated and owned solves agree bitwise; inputs are not modified.
    #[test]
    fn thomas_repeatable((a, b, c, d) in dominant_system()) {
        let b_before = b.clone();
        let d_before = d.clone();
        let x1 = thomas_solve(&a, &b, &c, &d).unwrap();
        let x2 = thomas_solve(&a, &b, &c, &d).unwrap();
        let x3 = thomas_solve_owned(&a, b.clone(), &c, d.clone()).unwrap();

        prop_assert_eq!(&b, &b_before);
        prop_assert_eq!(&d, &d_before);
        for i in 0..x1.len() {
            prop_assert_eq!(x1[i].to_bits(), x2[i].to_bits());
            prop_assert_eq!(x1[i].to_bits(), x3[i].to_bits());
        }
    }

    /// Work grows linearly: exactly 8n - 7 flops.
    #[test]
    fn thomas_flops_linear((a, b, c, d) in dominant_system()) {
        let n = d.len();
        let sol = solve_with_config(&a, &b, &c, &d, &SolverConfig::default()).unwrap();
        prop_assert_eq!(sol.flops, 8 * n - 7);
    }

    /// Strictly dominant input reports strict dominance when asked.
    #[test]
    fn thomas_dominance_reported((a, b, c, d) in dominant_system()) {
        let config = SolverConfig { pivot_tolerance: 0.0, check_dominance: true };
        let sol = solve_with_config(&a, &b, &c, &d, &config).unwrap();
        let report = sol.dominance.unwrap();
        prop_assert!(report.strict);
        prop_assert!(report.min_margin > 0.0);
        prop_assert!(report.weakest_row < d.len());
    }
}

// ── Cubic Spline Properties ──────────────────────────────────────────

proptest! {
    /// The spline passes through every node.
    #[test]
    fn spline_interpolates_nodes(
        steps in vec(0.05f64..2.0, 2..30),
        y0 in vec(-10.0f64..10.0, 31),
    ) {
        let mut x = vec![0.0];
        for h in &steps {
            let last = *x.last().unwrap();
            x.push(last + h);
        }
        let y = &y0[..x.len()];
        let s = CubicSpline::new(&x, y).unwrap();
        for (xi, yi) in x.iter().zip(y) {
            prop_assert!((s.eval(*xi) - yi).abs() < 1e-9,
                "s({}) = {}, expected {}", xi, s.eval(*xi), yi);
        }
    }
}
