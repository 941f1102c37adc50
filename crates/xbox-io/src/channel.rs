// ─────────────────────────────────────────────────────────────────────
// Xbox Analysis — Channel
// © 2018–2026 kpapke and the Xbox analysis contributors.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::path::Path;

use xbox_types::error::XboxResult;

/// One event's raw payload for a single channel, as stored in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub raw: Vec<u8>,
}

impl RawRecord {
    pub fn new(raw: Vec<u8>) -> Self {
        RawRecord { raw }
    }
}

/// Backend that reads all events of one channel from a structured event file.
pub trait EventChannelReader {
    /// Return the channel's records in event order.
    fn read_event_channel(
        &self,
        path: &Path,
        tree: &str,
        channel: &str,
    ) -> XboxResult<Vec<RawRecord>>;
}

/// Backend that draws a single line series to a file.
pub trait LineChartRenderer {
    fn render_line_chart(&mut self, series: &[f64], label: &str, output: &Path)
        -> XboxResult<()>;
}
