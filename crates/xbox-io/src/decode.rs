// ─────────────────────────────────────────────────────────────────────
// Xbox Analysis — Decode
// © 2018–2026 kpapke and the Xbox analysis contributors.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Raw channel payload → samples.
//!
//! Payloads are byte views of native-endian arrays: f64 for Xbox2 files,
//! i16 for Xbox3 files.

use xbox_types::config::SampleType;
use xbox_types::error::{XboxError, XboxResult};

/// Reinterpret a raw payload as samples of `sample_type`, widened to f64.
///
/// Fails if the payload length is not a multiple of the sample width.
pub fn decode_samples(raw: &[u8], sample_type: SampleType) -> XboxResult<Vec<f64>> {
    let width = sample_type.width();
    if raw.len() % width != 0 {
        return Err(XboxError::Decode(format!(
            "payload of {} bytes is not a multiple of the {:?} sample width ({} bytes)",
            raw.len(),
            sample_type,
            width
        )));
    }

    let chunks = raw.chunks_exact(width);
    let samples = match sample_type {
        SampleType::F64 => chunks
            .map(bytemuck::pod_read_unaligned::<f64>)
            .collect(),
        SampleType::I16 => chunks
            .map(|c| f64::from(bytemuck::pod_read_unaligned::<i16>(c)))
            .collect(),
    };
    Ok(samples)
}
