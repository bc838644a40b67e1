// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Photoreceptor response curves
//!
//! Each photoreceptor kind maps raw stimulus intensity on its own channel to
//! a full 3-channel response vector. The mapping is a configuration table,
//! not hardcoded arithmetic: a table can be deserialized from JSON to swap
//! the curves out for testing.
//!
//! ## Curve shape
//!
//! ```text
//! response = gain × min(x / saturation, 1)
//!
//! Where:
//! - x = stimulus intensity on the kind's own channel (missing → 0)
//! - saturation = intensity at which the receptor fully responds
//! - gain = per-channel response at full saturation (allows cross-talk
//!   between channels, e.g. a blue receptor weakly exciting green)
//! ```

use crate::error::{OcellusDataError, Result};
use crate::signal::{ColorChannel, SignalVector, SIGNAL_CHANNELS};
use serde::{Deserialize, Serialize};

/// Response curve for a single photoreceptor kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotoreceptorCurve {
    /// Stimulus intensity at which the response saturates
    pub saturation: f32,
    /// Per-channel response at full saturation
    pub gain: [f32; SIGNAL_CHANNELS],
}

impl PhotoreceptorCurve {
    /// Evaluate the curve for a raw intensity on the tuned channel
    pub fn respond(&self, intensity: f32) -> SignalVector {
        let level = (intensity / self.saturation).clamp(0.0, 1.0);
        SignalVector([
            self.gain[0] * level,
            self.gain[1] * level,
            self.gain[2] * level,
        ])
    }

    fn validate(&self) -> Result<()> {
        if !(self.saturation > 0.0) {
            return Err(OcellusDataError::BadParameters(format!(
                "curve saturation must be > 0, got {}",
                self.saturation
            )));
        }
        if self.gain.iter().any(|g| !g.is_finite()) {
            return Err(OcellusDataError::BadParameters(
                "curve gain must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// Response curve table: one curve per photoreceptor kind.
///
/// The `Default` table is the reference fixture used throughout the test
/// suite; production callers may load their own table with
/// [`ResponseCurveTable::from_json`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseCurveTable {
    pub blue: PhotoreceptorCurve,
    pub green: PhotoreceptorCurve,
    pub red: PhotoreceptorCurve,
}

impl ResponseCurveTable {
    /// Curve for a given photoreceptor kind
    pub fn curve(&self, kind: ColorChannel) -> &PhotoreceptorCurve {
        match kind {
            ColorChannel::Blue => &self.blue,
            ColorChannel::Green => &self.green,
            ColorChannel::Red => &self.red,
        }
    }

    /// Compute the response of a photoreceptor of `kind` to a raw stimulus.
    ///
    /// The receptor reads only its own channel of the stimulus; a missing
    /// channel is zero intensity.
    pub fn respond(&self, kind: ColorChannel, stimulus: &[f32]) -> SignalVector {
        let intensity = stimulus.get(kind.channel_index()).copied().unwrap_or(0.0);
        self.curve(kind).respond(intensity)
    }

    /// Deserialize and validate a table from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Check every curve in the table
    pub fn validate(&self) -> Result<()> {
        for kind in ColorChannel::ALL {
            self.curve(kind).validate()?;
        }
        Ok(())
    }
}

impl Default for ResponseCurveTable {
    fn default() -> Self {
        Self {
            blue: PhotoreceptorCurve {
                saturation: 600.0,
                gain: [1.0, 0.04, 0.0],
            },
            green: PhotoreceptorCurve {
                saturation: 600.0,
                gain: [0.0, 1.0, 0.05],
            },
            red: PhotoreceptorCurve {
                saturation: 600.0,
                gain: [0.0, 0.08, 1.0],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_full_saturation() {
        let table = ResponseCurveTable::default();

        // Blue receptor at full saturation reproduces its gain vector
        let response = table.respond(ColorChannel::Blue, &[600.0]);
        assert_eq!(response, SignalVector([1.0, 0.04, 0.0]));

        // Intensities above saturation clamp to the gain vector
        let clamped = table.respond(ColorChannel::Blue, &[1200.0]);
        assert_eq!(clamped, response);
    }

    #[test]
    fn test_missing_channel_is_zero_intensity() {
        let table = ResponseCurveTable::default();

        // A green receptor reads channel 1; a 1-element stimulus has none
        let response = table.respond(ColorChannel::Green, &[600.0]);
        assert_eq!(response, SignalVector::zeros());
    }

    #[test]
    fn test_partial_intensity_scales_linearly() {
        let table = ResponseCurveTable::default();

        let response = table.respond(ColorChannel::Red, &[0.0, 0.0, 300.0]);
        assert_eq!(response, SignalVector([0.0, 0.04, 0.5]));
    }

    #[test]
    fn test_table_swap_from_json() {
        let json = r#"{
            "blue":  { "saturation": 100.0, "gain": [0.5, 0.0, 0.0] },
            "green": { "saturation": 100.0, "gain": [0.0, 0.5, 0.0] },
            "red":   { "saturation": 100.0, "gain": [0.0, 0.0, 0.5] }
        }"#;
        let table = ResponseCurveTable::from_json(json).unwrap();
        let response = table.respond(ColorChannel::Blue, &[50.0]);
        assert_eq!(response, SignalVector([0.25, 0.0, 0.0]));
    }

    #[test]
    fn test_invalid_saturation_rejected() {
        let json = r#"{
            "blue":  { "saturation": 0.0, "gain": [1.0, 0.0, 0.0] },
            "green": { "saturation": 100.0, "gain": [0.0, 1.0, 0.0] },
            "red":   { "saturation": 100.0, "gain": [0.0, 0.0, 1.0] }
        }"#;
        assert!(ResponseCurveTable::from_json(json).is_err());
    }
}
