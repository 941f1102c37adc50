// ─────────────────────────────────────────────────────────────────────
// Xbox Analysis — Tridiag
// © 2018–2026 kpapke and the Xbox analysis contributors.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thomas algorithm for tridiagonal systems.
//!
//! Forward elimination followed by back substitution, O(n) time and O(n)
//! auxiliary space. No pivoting is performed: the algorithm is only valid
//! for diagonally dominant or otherwise well-conditioned systems. A pivot
//! that is zero at the point of use is reported as
//! [`XboxError::DivisionByZero`] rather than producing NaN/Inf.
//!
//! Storage convention for a system of size n:
//!
//! - `sub`: sub-diagonal \[n-1\], `sub[i]` multiplies `x[i]` in equation i+1
//! - `main`: main diagonal \[n\]
//! - `sup`: super-diagonal \[n-1\], `sup[i]` multiplies `x[i+1]` in equation i
//! - `rhs`: right-hand side \[n\]
//!
//! [`thomas_solve`] never touches caller storage. [`thomas_solve_owned`]
//! is the opt-in in-place mode: it consumes the main-diagonal and rhs
//! buffers and hands the solution back in the rhs allocation.

use ndarray::Array2;
use xbox_types::config::SolverConfig;
use xbox_types::constants::DEFAULT_PIVOT_TOLERANCE;
use xbox_types::error::{XboxError, XboxResult};

/// Floating-point operations per eliminated row (1 div, 2 mul, 2 sub).
const FLOPS_PER_ELIMINATION: usize = 5;
/// Floating-point operations per back-substituted row (1 mul, 1 sub, 1 div).
const FLOPS_PER_SUBSTITUTION: usize = 3;

/// Solve the tridiagonal system Ax = rhs.
///
/// Returns the solution vector x \[n\]. Inputs are borrowed immutably;
/// elimination runs on private copies of `main` and `rhs`.
///
/// # Errors
///
/// - [`XboxError::DimensionMismatch`] if the lengths violate the n / n-1
///   relation (checked before any arithmetic).
/// - [`XboxError::DivisionByZero`] if a pivot is zero when used, or is so
///   small relative to its row that elimination overflows.
pub fn thomas_solve(sub: &[f64], main: &[f64], sup: &[f64], rhs: &[f64]) -> XboxResult<Vec<f64>> {
    check_dimensions(sub, main, sup, rhs)?;
    let mut work = main.to_vec();
    let mut x = rhs.to_vec();
    eliminate(sub, &mut work, sup, &mut x, DEFAULT_PIVOT_TOLERANCE)?;
    Ok(x)
}

/// In-place variant of [`thomas_solve`].
///
/// Takes ownership of the main diagonal and right-hand side, overwrites
/// both during elimination and returns the solution in the `rhs` buffer.
/// Produces bitwise the same result as [`thomas_solve`].
pub fn thomas_solve_owned(
    sub: &[f64],
    mut main: Vec<f64>,
    sup: &[f64],
    mut rhs: Vec<f64>,
) -> XboxResult<Vec<f64>> {
    check_dimensions(sub, &main, sup, &rhs)?;
    eliminate(sub, &mut main, sup, &mut rhs, DEFAULT_PIVOT_TOLERANCE)?;
    Ok(rhs)
}

/// Result of a configured solve.
#[derive(Debug, Clone)]
pub struct TridiagSolution {
    /// Solution vector \[n\].
    pub x: Vec<f64>,
    /// Dominance of the input matrix, present when
    /// [`SolverConfig::check_dominance`] is set. A non-dominant matrix is a
    /// warning, not an error.
    pub dominance: Option<DominanceReport>,
    /// Floating-point operations spent in elimination and substitution
    /// (8n - 7).
    pub flops: usize,
}

/// Solve Ax = rhs with the pivot tolerance and dominance check taken from
/// `config`.
pub fn solve_with_config(
    sub: &[f64],
    main: &[f64],
    sup: &[f64],
    rhs: &[f64],
    config: &SolverConfig,
) -> XboxResult<TridiagSolution> {
    config.validate()?;
    check_dimensions(sub, main, sup, rhs)?;

    let dominance = config
        .check_dominance
        .then(|| dominance_unchecked(sub, main, sup));

    let mut work = main.to_vec();
    let mut x = rhs.to_vec();
    let flops = eliminate(sub, &mut work, sup, &mut x, config.pivot_tolerance)?;

    Ok(TridiagSolution {
        x,
        dominance,
        flops,
    })
}

/// Validate the n / n-1 length relation and return n.
pub fn check_dimensions(sub: &[f64], main: &[f64], sup: &[f64], rhs: &[f64]) -> XboxResult<usize> {
    let n = rhs.len();
    if n == 0 {
        return Err(XboxError::DimensionMismatch {
            operand: "rhs",
            expected: 1,
            actual: 0,
        });
    }
    if main.len() != n {
        return Err(XboxError::DimensionMismatch {
            operand: "main",
            expected: n,
            actual: main.len(),
        });
    }
    check_band(sub, main, sup)?;
    Ok(n)
}

/// Validate the off-diagonals against a non-empty main diagonal.
fn check_band(sub: &[f64], main: &[f64], sup: &[f64]) -> XboxResult<()> {
    let n = main.len();
    if n == 0 {
        return Err(XboxError::DimensionMismatch {
            operand: "main",
            expected: 1,
            actual: 0,
        });
    }
    if sub.len() != n - 1 {
        return Err(XboxError::DimensionMismatch {
            operand: "sub",
            expected: n - 1,
            actual: sub.len(),
        });
    }
    if sup.len() != n - 1 {
        return Err(XboxError::DimensionMismatch {
            operand: "sup",
            expected: n - 1,
            actual: sup.len(),
        });
    }
    Ok(())
}

/// A pivot is unusable when it is within `tol` of zero or so small that
/// its reciprocal overflows.
#[inline]
fn checked_pivot(row: usize, pivot: f64, tol: f64) -> XboxResult<f64> {
    if pivot.abs() <= tol || !pivot.recip().is_finite() {
        Err(XboxError::DivisionByZero { row, pivot })
    } else {
        Ok(pivot)
    }
}

/// Elimination kernel. Dimensions must already be validated.
///
/// Overwrites `main` with the eliminated pivots and `rhs` with the
/// solution. Returns the flop count.
fn eliminate(
    sub: &[f64],
    main: &mut [f64],
    sup: &[f64],
    rhs: &mut [f64],
    tol: f64,
) -> XboxResult<usize> {
    let n = rhs.len();
    let mut flops = 0;

    // Forward elimination
    for i in 1..n {
        let pivot = checked_pivot(i - 1, main[i - 1], tol)?;
        let w = sub[i - 1] / pivot;
        main[i] -= w * sup[i - 1];
        rhs[i] -= w * rhs[i - 1];
        // Badly scaled pivot: the factor or the eliminated row overflowed
        if !w.is_finite() || !main[i].is_finite() {
            return Err(XboxError::DivisionByZero { row: i - 1, pivot });
        }
        flops += FLOPS_PER_ELIMINATION;
    }

    // Back substitution, rhs[i] holds x[i] once visited
    let last = checked_pivot(n - 1, main[n - 1], tol)?;
    rhs[n - 1] /= last;
    flops += 1;
    for i in (1..n).rev() {
        rhs[i - 1] = (rhs[i - 1] - sup[i - 1] * rhs[i]) / main[i - 1];
        flops += FLOPS_PER_SUBSTITUTION;
    }

    Ok(flops)
}

// ───────────────────────────── dominance ─────────────────────────────

/// Row-wise diagonal dominance of a tridiagonal matrix.
///
/// The margin of row i is |main\[i\]| - |sub\[i-1\]| - |sup\[i\]| (missing
/// neighbours count as zero).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominanceReport {
    /// Every row has a positive margin.
    pub strict: bool,
    /// Every row has a non-negative margin.
    pub weak: bool,
    /// Row with the smallest margin (first one on ties).
    pub weakest_row: usize,
    /// Smallest margin over all rows.
    pub min_margin: f64,
}

/// Check diagonal dominance without solving anything.
pub fn check_diagonal_dominance(
    sub: &[f64],
    main: &[f64],
    sup: &[f64],
) -> XboxResult<DominanceReport> {
    check_band(sub, main, sup)?;
    Ok(dominance_unchecked(sub, main, sup))
}

fn dominance_unchecked(sub: &[f64], main: &[f64], sup: &[f64]) -> DominanceReport {
    let n = main.len();
    let mut weakest_row = 0;
    let mut min_margin = f64::INFINITY;

    for i in 0..n {
        let mut off = 0.0;
        if i > 0 {
            off += sub[i - 1].abs();
        }
        if i < n - 1 {
            off += sup[i].abs();
        }
        let margin = main[i].abs() - off;
        if margin < min_margin {
            min_margin = margin;
            weakest_row = i;
        }
    }

    DominanceReport {
        strict: min_margin > 0.0,
        weak: min_margin >= 0.0,
        weakest_row,
        min_margin,
    }
}

// ───────────────────────────── matrix ────────────────────────────────

/// Owned tridiagonal matrix with validated diagonal lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalMatrix {
    sub: Vec<f64>,
    main: Vec<f64>,
    sup: Vec<f64>,
}

impl TridiagonalMatrix {
    pub fn new(sub: Vec<f64>, main: Vec<f64>, sup: Vec<f64>) -> XboxResult<Self> {
        check_band(&sub, &main, &sup)?;
        Ok(TridiagonalMatrix { sub, main, sup })
    }

    /// Constant-diagonal (Toeplitz) matrix of size n.
    pub fn toeplitz(n: usize, sub: f64, main: f64, sup: f64) -> XboxResult<Self> {
        if n == 0 {
            return Err(XboxError::DimensionMismatch {
                operand: "main",
                expected: 1,
                actual: 0,
            });
        }
        Ok(TridiagonalMatrix {
            sub: vec![sub; n - 1],
            main: vec![main; n],
            sup: vec![sup; n - 1],
        })
    }

    pub fn dim(&self) -> usize {
        self.main.len()
    }

    pub fn sub(&self) -> &[f64] {
        &self.sub
    }

    pub fn main(&self) -> &[f64] {
        &self.main
    }

    pub fn sup(&self) -> &[f64] {
        &self.sup
    }

    pub fn solve(&self, rhs: &[f64]) -> XboxResult<Vec<f64>> {
        thomas_solve(&self.sub, &self.main, &self.sup, rhs)
    }

    pub fn dominance(&self) -> DominanceReport {
        dominance_unchecked(&self.sub, &self.main, &self.sup)
    }

    /// Matrix-vector product A·x.
    pub fn mul_vec(&self, x: &[f64]) -> XboxResult<Vec<f64>> {
        let n = self.dim();
        if x.len() != n {
            return Err(XboxError::DimensionMismatch {
                operand: "x",
                expected: n,
                actual: x.len(),
            });
        }
        let mut ax = vec![0.0; n];
        for i in 0..n {
            let mut v = self.main[i] * x[i];
            if i > 0 {
                v += self.sub[i - 1] * x[i - 1];
            }
            if i < n - 1 {
                v += self.sup[i] * x[i + 1];
            }
            ax[i] = v;
        }
        Ok(ax)
    }

    /// Dense \[n, n\] representation.
    pub fn to_dense(&self) -> Array2<f64> {
        let n = self.dim();
        let mut a = Array2::zeros((n, n));
        for i in 0..n {
            a[[i, i]] = self.main[i];
            if i > 0 {
                a[[i, i - 1]] = self.sub[i - 1];
            }
            if i < n - 1 {
                a[[i, i + 1]] = self.sup[i];
            }
        }
        a
    }
}

/// L-infinity residual ‖A·x - rhs‖∞.
pub fn max_residual(matrix: &TridiagonalMatrix, x: &[f64], rhs: &[f64]) -> XboxResult<f64> {
    let ax = matrix.mul_vec(x)?;
    if rhs.len() != ax.len() {
        return Err(XboxError::DimensionMismatch {
            operand: "rhs",
            expected: ax.len(),
            actual: rhs.len(),
        });
    }
    Ok(ax
        .iter()
        .zip(rhs)
        .fold(0.0_f64, |acc, (a, d)| acc.max((a - d).abs())))
}
