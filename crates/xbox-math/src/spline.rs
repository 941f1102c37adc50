// ─────────────────────────────────────────────────────────────────────
// Xbox Analysis — Cubic Spline
// © 2018–2026 kpapke and the Xbox analysis contributors.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cubic spline interpolation over waveform samples.
//!
//! On each interval \[x_i, x_{i+1}\]:
//!
//!   f(x) = a_i (x - x_i)³ + b_i (x - x_i)² + c_i (x - x_i) + y_i
//!
//! The quadratic coefficients b come from a tridiagonal system solved with
//! [`crate::tridiag::thomas_solve`]; a and c follow from b.

use ndarray::Array1;
use xbox_types::constants::MIN_SPLINE_NODES;
use xbox_types::error::{XboxError, XboxResult};

use crate::tridiag::thomas_solve;

/// End condition of the spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    /// Prescribed first derivative (clamped).
    FirstDerivative(f64),
    /// Prescribed second derivative; `SecondDerivative(0.0)` is the natural spline.
    SecondDerivative(f64),
}

impl Default for Boundary {
    fn default() -> Self {
        Boundary::SecondDerivative(0.0)
    }
}

#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    // left extrapolation: (b0 * h + c0) * h + y0
    b0: f64,
    c0: f64,
    left: Boundary,
    right: Boundary,
    linear_extrapolation: bool,
}

impl CubicSpline {
    /// Natural spline (zero curvature at both ends).
    pub fn new(x: &[f64], y: &[f64]) -> XboxResult<Self> {
        Self::with_boundary(x, y, Boundary::default(), Boundary::default(), false)
    }

    /// Spline with explicit end conditions.
    ///
    /// With `linear_extrapolation` the spline continues as a straight line
    /// outside \[x_0, x_{n-1}\]; otherwise it continues quadratically.
    pub fn with_boundary(
        x: &[f64],
        y: &[f64],
        left: Boundary,
        right: Boundary,
        linear_extrapolation: bool,
    ) -> XboxResult<Self> {
        validate_nodes(x, y)?;
        let n = x.len();

        let mut sub = vec![0.0; n - 1];
        let mut main = vec![0.0; n];
        let mut sup = vec![0.0; n - 1];
        let mut rhs = vec![0.0; n];

        for i in 1..n - 1 {
            let h_prev = x[i] - x[i - 1];
            let h = x[i + 1] - x[i];
            sub[i - 1] = h_prev / 3.0;
            main[i] = 2.0 * (h_prev + h) / 3.0;
            sup[i] = h / 3.0;
            rhs[i] = (y[i + 1] - y[i]) / h - (y[i] - y[i - 1]) / h_prev;
        }

        let h_first = x[1] - x[0];
        match left {
            Boundary::FirstDerivative(v) => {
                // c_0 = v rewritten in terms of b: (2 b_0 + b_1) h = 3 (slope - v)
                main[0] = 2.0 * h_first;
                sup[0] = h_first;
                rhs[0] = 3.0 * ((y[1] - y[0]) / h_first - v);
            }
            Boundary::SecondDerivative(v) => {
                // 2 b_0 = v
                main[0] = 2.0;
                sup[0] = 0.0;
                rhs[0] = v;
            }
        }

        let h_last = x[n - 1] - x[n - 2];
        match right {
            Boundary::FirstDerivative(v) => {
                main[n - 1] = 2.0 * h_last;
                sub[n - 2] = h_last;
                rhs[n - 1] = 3.0 * (v - (y[n - 1] - y[n - 2]) / h_last);
            }
            Boundary::SecondDerivative(v) => {
                main[n - 1] = 2.0;
                sub[n - 2] = 0.0;
                rhs[n - 1] = v;
            }
        }

        let mut b = thomas_solve(&sub, &main, &sup, &rhs)?;

        let mut a = vec![0.0; n];
        let mut c = vec![0.0; n];
        for i in 0..n - 1 {
            let h = x[i + 1] - x[i];
            a[i] = (b[i + 1] - b[i]) / (3.0 * h);
            c[i] = (y[i + 1] - y[i]) / h - (2.0 * b[i] + b[i + 1]) * h / 3.0;
        }

        let b0 = if linear_extrapolation { 0.0 } else { b[0] };
        let c0 = c[0];

        // Right end: f'_{n-2}(x_{n-1}), b_{n-1} fixed by the boundary condition
        a[n - 1] = 0.0;
        c[n - 1] = 3.0 * a[n - 2] * h_last * h_last + 2.0 * b[n - 2] * h_last + c[n - 2];
        if linear_extrapolation {
            b[n - 1] = 0.0;
        }

        Ok(CubicSpline {
            x: x.to_vec(),
            y: y.to_vec(),
            a,
            b,
            c,
            b0,
            c0,
            left,
            right,
            linear_extrapolation,
        })
    }

    pub fn node_count(&self) -> usize {
        self.x.len()
    }

    pub fn boundaries(&self) -> (Boundary, Boundary) {
        (self.left, self.right)
    }

    pub fn linear_extrapolation(&self) -> bool {
        self.linear_extrapolation
    }

    /// Index of the interval whose left node is the last node <= `x` (0 left of range).
    fn interval(&self, x: f64) -> usize {
        self.x.partition_point(|&xn| xn <= x).saturating_sub(1)
    }

    /// Evaluate the spline at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.x.len();
        let idx = self.interval(x);
        let h = x - self.x[idx];

        if x < self.x[0] {
            (self.b0 * h + self.c0) * h + self.y[0]
        } else if x > self.x[n - 1] {
            (self.b[n - 1] * h + self.c[n - 1]) * h + self.y[n - 1]
        } else {
            ((self.a[idx] * h + self.b[idx]) * h + self.c[idx]) * h + self.y[idx]
        }
    }

    /// Evaluate the `order`-th derivative at `x`.
    ///
    /// Orders above 3 (or 0) yield 0.0.
    pub fn derivative(&self, x: f64, order: u32) -> f64 {
        let n = self.x.len();
        let idx = self.interval(x);
        let h = x - self.x[idx];

        if x < self.x[0] {
            match order {
                1 => 2.0 * self.b0 * h + self.c0,
                2 => 2.0 * self.b0,
                _ => 0.0,
            }
        } else if x > self.x[n - 1] {
            match order {
                1 => 2.0 * self.b[n - 1] * h + self.c[n - 1],
                2 => 2.0 * self.b[n - 1],
                _ => 0.0,
            }
        } else {
            match order {
                1 => (3.0 * self.a[idx] * h + 2.0 * self.b[idx]) * h + self.c[idx],
                2 => 6.0 * self.a[idx] * h + 2.0 * self.b[idx],
                3 => 6.0 * self.a[idx],
                _ => 0.0,
            }
        }
    }

    /// Evaluate the spline at every abscissa in `xs`.
    pub fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// Sample the spline on `points` evenly spaced abscissae in \[lo, hi\].
    ///
    /// Limits outside the node range are extrapolated.
    pub fn resample_range(&self, lo: f64, hi: f64, points: usize) -> (Array1<f64>, Array1<f64>) {
        let xs = Array1::linspace(lo, hi, points);
        let ys = xs.mapv(|x| self.eval(x));
        (xs, ys)
    }

    /// Sample the spline on `points` evenly spaced abscissae spanning the nodes.
    pub fn resample(&self, points: usize) -> (Array1<f64>, Array1<f64>) {
        self.resample_range(self.x[0], self.x[self.x.len() - 1], points)
    }
}

fn validate_nodes(x: &[f64], y: &[f64]) -> XboxResult<()> {
    if x.len() != y.len() {
        return Err(XboxError::DimensionMismatch {
            operand: "y",
            expected: x.len(),
            actual: y.len(),
        });
    }
    if x.len() < MIN_SPLINE_NODES {
        return Err(XboxError::InvalidNodes(format!(
            "need at least {MIN_SPLINE_NODES} nodes, got {}",
            x.len()
        )));
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(XboxError::InvalidNodes("non-finite node".into()));
    }
    if let Some(i) = x.windows(2).position(|w| w[1] <= w[0]) {
        return Err(XboxError::InvalidNodes(format!(
            "x must be strictly increasing (x[{}] = {} >= x[{}] = {})",
            i,
            x[i],
            i + 1,
            x[i + 1]
        )));
    }
    Ok(())
}
