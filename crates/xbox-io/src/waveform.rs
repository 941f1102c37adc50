// ─────────────────────────────────────────────────────────────────────
// Xbox Analysis — Waveform
// © 2018–2026 kpapke and the Xbox analysis contributors.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::path::Path;

use xbox_types::config::WaveformConfig;
use xbox_types::error::{XboxError, XboxResult};

use crate::channel::{EventChannelReader, LineChartRenderer};
use crate::decode::decode_samples;

/// Read the configured channel and decode the selected event's samples.
pub fn load_event_waveform<R>(reader: &R, config: &WaveformConfig) -> XboxResult<Vec<f64>>
where
    R: EventChannelReader + ?Sized,
{
    let records = reader.read_event_channel(
        Path::new(&config.file_path),
        &config.tree_name,
        &config.channel_name,
    )?;

    let record = records.get(config.event_index).ok_or_else(|| {
        XboxError::Decode(format!(
            "event {} requested from {}/{}, channel holds {} events",
            config.event_index,
            config.tree_name,
            config.channel_name,
            records.len()
        ))
    })?;

    decode_samples(&record.raw, config.sample_type)
}

/// Load one event's waveform and hand it to the renderer.
///
/// Returns the number of samples drawn.
pub fn plot_event<R, P>(reader: &R, renderer: &mut P, config: &WaveformConfig) -> XboxResult<usize>
where
    R: EventChannelReader + ?Sized,
    P: LineChartRenderer + ?Sized,
{
    config.validate()?;
    let samples = load_event_waveform(reader, config)?;
    renderer.render_line_chart(&samples, config.label(), Path::new(&config.output_path))?;
    Ok(samples.len())
}
