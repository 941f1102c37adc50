// ─────────────────────────────────────────────────────────────────────
// Xbox Analysis — Xbox Math
// © 2018–2026 kpapke and the Xbox analysis contributors.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Numerical primitives for the Xbox analysis workspace.

pub mod spline;
pub mod tridiag;
