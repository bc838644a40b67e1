// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Signal vectors and channel kinds
//!
//! A signal travelling through the pathway is always a fixed 3-channel
//! `f32` vector, one element per color channel. Raw stimuli arriving from
//! outside may be shorter (missing channels read as zero intensity) or
//! longer (extra elements are ignored).

use core::fmt;
use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

/// Number of color channels carried by every signal vector
pub const SIGNAL_CHANNELS: usize = 3;

/// The color channel a photoreceptor is tuned to.
///
/// Compared by value; channel assignment cycles `Blue → Green → Red` across
/// photoreceptor indices at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChannel {
    Blue,
    Green,
    Red,
}

impl ColorChannel {
    /// All channel kinds, in channel-index order
    pub const ALL: [ColorChannel; SIGNAL_CHANNELS] =
        [ColorChannel::Blue, ColorChannel::Green, ColorChannel::Red];

    /// Round-robin assignment: neuron index → channel kind
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % SIGNAL_CHANNELS]
    }

    /// Position of this kind within a signal vector
    pub fn channel_index(self) -> usize {
        match self {
            ColorChannel::Blue => 0,
            ColorChannel::Green => 1,
            ColorChannel::Red => 2,
        }
    }
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorChannel::Blue => write!(f, "blue"),
            ColorChannel::Green => write!(f, "green"),
            ColorChannel::Red => write!(f, "red"),
        }
    }
}

/// Fixed 3-channel signal vector.
///
/// The unit of transmission everywhere in the pathway: photoreceptor
/// responses, interneuron splits, and cortical accumulators are all
/// `SignalVector`s.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalVector(pub [f32; SIGNAL_CHANNELS]);

impl SignalVector {
    /// All-zero signal
    pub fn zeros() -> Self {
        Self([0.0; SIGNAL_CHANNELS])
    }

    /// Build a signal from a raw stimulus slice.
    ///
    /// Missing channels are padded with zero intensity; elements beyond the
    /// channel count are ignored.
    pub fn from_stimulus(stimulus: &[f32]) -> Self {
        let mut channels = [0.0; SIGNAL_CHANNELS];
        for (slot, value) in channels.iter_mut().zip(stimulus.iter()) {
            *slot = *value;
        }
        Self(channels)
    }

    /// Element-wise addition into this signal
    pub fn accumulate(&mut self, other: &SignalVector) {
        for (slot, value) in self.0.iter_mut().zip(other.0.iter()) {
            *slot += *value;
        }
    }

    /// Element-wise division by a scalar
    pub fn scaled_down(&self, divisor: f32) -> Self {
        Self([self.0[0] / divisor, self.0[1] / divisor, self.0[2] / divisor])
    }

    /// View as a slice, for code paths that accept raw stimuli
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// The underlying channel array
    pub fn channels(&self) -> [f32; SIGNAL_CHANNELS] {
        self.0
    }

    /// True when every channel is within `tolerance` of `other`
    pub fn approx_eq(&self, other: &SignalVector, tolerance: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Index<usize> for SignalVector {
    type Output = f32;

    fn index(&self, channel: usize) -> &f32 {
        &self.0[channel]
    }
}

impl IndexMut<usize> for SignalVector {
    fn index_mut(&mut self, channel: usize) -> &mut f32 {
        &mut self.0[channel]
    }
}

impl From<[f32; SIGNAL_CHANNELS]> for SignalVector {
    fn from(channels: [f32; SIGNAL_CHANNELS]) -> Self {
        Self(channels)
    }
}

impl fmt::Display for SignalVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}, {:.4}]", self.0[0], self.0[1], self.0[2])
    }
}
