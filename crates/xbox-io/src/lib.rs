// ─────────────────────────────────────────────────────────────────────
// Xbox Analysis — Xbox IO
// © 2018–2026 kpapke and the Xbox analysis contributors.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Event-channel access for Xbox event files.
//!
//! Reading the structured event files and drawing charts are delegated to
//! external backends behind [`channel::EventChannelReader`] and
//! [`channel::LineChartRenderer`]. This crate owns only the raw sample
//! decoding and the pipeline that joins the two.

pub mod channel;
pub mod decode;
pub mod waveform;
