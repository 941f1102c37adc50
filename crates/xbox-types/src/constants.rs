// ─────────────────────────────────────────────────────────────────────
// Xbox Analysis — Constants
// © 2018–2026 kpapke and the Xbox analysis contributors.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Pivot magnitude at or below which elimination reports a zero pivot.
/// Zero means only an exact 0.0 (or -0.0) pivot is rejected.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 0.0;

/// Minimum number of nodes for a cubic spline.
pub const MIN_SPLINE_NODES: usize = 3;

/// Event tree written by the Xbox converters.
pub const EVENT_TREE: &str = "EventData";

/// Sample width (bytes) of Xbox2 channel payloads (f64).
pub const XBOX2_SAMPLE_BYTES: usize = 8;

/// Sample width (bytes) of Xbox3 channel payloads (i16).
pub const XBOX3_SAMPLE_BYTES: usize = 2;
