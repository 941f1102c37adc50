// ─────────────────────────────────────────────────────────────────────
// Xbox Analysis — Config
// © 2018–2026 kpapke and the Xbox analysis contributors.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_PIVOT_TOLERANCE, EVENT_TREE, XBOX2_SAMPLE_BYTES, XBOX3_SAMPLE_BYTES,
};
use crate::error::{XboxError, XboxResult};

/// Top-level analysis configuration.
/// Both sections are optional in JSON; a missing `solver` falls back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XboxConfig {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waveform: Option<WaveformConfig>,
}

/// Settings for the tridiagonal solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Pivots with |p| <= tolerance are treated as zero (default: 0.0).
    #[serde(default = "default_pivot_tolerance")]
    pub pivot_tolerance: f64,
    /// Attach a diagonal-dominance report to each solve (default: false).
    #[serde(default)]
    pub check_dominance: bool,
}

fn default_pivot_tolerance() -> f64 {
    DEFAULT_PIVOT_TOLERANCE
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            pivot_tolerance: default_pivot_tolerance(),
            check_dominance: false,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> XboxResult<()> {
        if !self.pivot_tolerance.is_finite() || self.pivot_tolerance < 0.0 {
            return Err(XboxError::ConfigError(format!(
                "pivot_tolerance must be finite and >= 0, got {}",
                self.pivot_tolerance
            )));
        }
        Ok(())
    }
}

/// Storage type of a channel's raw payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleType {
    /// Xbox2: 64-bit floats.
    #[default]
    F64,
    /// Xbox3: 16-bit signed integers.
    I16,
}

impl SampleType {
    /// Width of one sample in bytes.
    pub fn width(self) -> usize {
        match self {
            SampleType::F64 => XBOX2_SAMPLE_BYTES,
            SampleType::I16 => XBOX3_SAMPLE_BYTES,
        }
    }
}

/// Which channel to pull from an event file and where to draw it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveformConfig {
    pub file_path: String,
    #[serde(default = "default_tree_name")]
    pub tree_name: String,
    pub channel_name: String,
    /// Event to plot (default: 0, the first event in the tree).
    #[serde(default)]
    pub event_index: usize,
    #[serde(default)]
    pub sample_type: SampleType,
    pub output_path: String,
    /// Legend label; defaults to the channel name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn default_tree_name() -> String {
    EVENT_TREE.to_string()
}

impl WaveformConfig {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.channel_name)
    }

    pub fn validate(&self) -> XboxResult<()> {
        if self.channel_name.is_empty() {
            return Err(XboxError::ConfigError("channel_name is empty".into()));
        }
        if self.output_path.is_empty() {
            return Err(XboxError::ConfigError("output_path is empty".into()));
        }
        Ok(())
    }
}

impl XboxConfig {
    /// Load from a JSON file and validate every section.
    pub fn from_file(path: &str) -> XboxResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> XboxResult<()> {
        self.solver.validate()?;
        if let Some(waveform) = &self.waveform {
            waveform.validate()?;
        }
        Ok(())
    }
}
