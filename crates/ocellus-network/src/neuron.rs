// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Neuron arena types
//!
//! The pathway has exactly three neuron kinds, modeled as a closed sum type
//! with kind-dispatched integration rather than open-ended trait objects:
//! the variant set is fixed, so pattern matching keeps the dispatch total
//! and the arena free of reference cycles.
//!
//! ## Integration semantics
//!
//! ```text
//! Photoreceptor: response = curve(channel, stimulus)      broadcast as-is
//! Interneuron:   response = input / outgoing_count        split equally
//! Cortical:      accumulated += input                     terminal
//! ```
//!
//! A neuron never holds incoming-link state; fan-in is implicit in how many
//! times `integrate` is invoked during a propagation run.

use crate::error::{NetworkError, Result};
use crate::synapse::SynapseId;
use core::fmt;
use ocellus_structures::{ColorChannel, ResponseCurveTable, SignalVector};

/// Neuron ID: the neuron's index in the network arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeuronId(pub u32);

impl NeuronId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neuron({})", self.0)
    }
}

/// The three neuron kinds of the pathway
#[derive(Debug, Clone, PartialEq)]
pub enum NeuronKind {
    /// Entry point: converts raw stimulus into a channel response vector
    Photoreceptor { channel: ColorChannel },
    /// Interior relay: splits incoming signal equally across outgoing links
    Interneuron,
    /// Terminal: sums every signal it receives over one propagation run
    Cortical { accumulated: SignalVector },
}

/// One neuron in the arena: identity, kind, and outgoing wiring.
///
/// Outgoing synapses are kept in insertion order; transmission order follows
/// it, though results do not depend on it (broadcast and equal split are
/// both order-independent).
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    id: NeuronId,
    kind: NeuronKind,
    outgoing: Vec<SynapseId>,
}

impl Neuron {
    /// Create a photoreceptor tuned to `channel`
    pub fn photoreceptor(id: NeuronId, channel: ColorChannel) -> Self {
        Self {
            id,
            kind: NeuronKind::Photoreceptor { channel },
            outgoing: Vec::new(),
        }
    }

    /// Create an interneuron
    pub fn interneuron(id: NeuronId) -> Self {
        Self {
            id,
            kind: NeuronKind::Interneuron,
            outgoing: Vec::new(),
        }
    }

    /// Create a cortical neuron with a zeroed accumulator
    pub fn cortical(id: NeuronId) -> Self {
        Self {
            id,
            kind: NeuronKind::Cortical {
                accumulated: SignalVector::zeros(),
            },
            outgoing: Vec::new(),
        }
    }

    pub fn id(&self) -> NeuronId {
        self.id
    }

    pub fn kind(&self) -> &NeuronKind {
        &self.kind
    }

    /// Short kind name for logs
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NeuronKind::Photoreceptor { .. } => "photoreceptor",
            NeuronKind::Interneuron => "interneuron",
            NeuronKind::Cortical { .. } => "cortical",
        }
    }

    /// Outgoing synapses in insertion order
    pub fn outgoing(&self) -> &[SynapseId] {
        &self.outgoing
    }

    /// The channel this photoreceptor is tuned to, if it is one
    pub fn channel(&self) -> Option<ColorChannel> {
        match self.kind {
            NeuronKind::Photoreceptor { channel } => Some(channel),
            _ => None,
        }
    }

    /// Read-only snapshot of the cortical accumulator, if this is a cortical neuron
    pub fn accumulated(&self) -> Option<&SignalVector> {
        match &self.kind {
            NeuronKind::Cortical { accumulated } => Some(accumulated),
            _ => None,
        }
    }

    pub(crate) fn attach(&mut self, synapse: SynapseId) {
        self.outgoing.push(synapse);
    }

    pub(crate) fn reset_accumulator(&mut self) {
        if let NeuronKind::Cortical { accumulated } = &mut self.kind {
            *accumulated = SignalVector::zeros();
        }
    }

    /// Integrate an incoming signal and return the neuron's response.
    ///
    /// The response is what this neuron forwards on every outgoing synapse
    /// (photoreceptors broadcast it whole, interneurons have already divided
    /// it); for cortical neurons it is the updated accumulator. May be
    /// invoked multiple times per run, once per incoming synapse.
    pub fn integrate(&mut self, input: &[f32], curves: &ResponseCurveTable) -> Result<SignalVector> {
        match &mut self.kind {
            NeuronKind::Photoreceptor { channel } => Ok(curves.respond(*channel, input)),
            NeuronKind::Interneuron => {
                let fan_out = self.outgoing.len();
                if fan_out == 0 {
                    return Err(NetworkError::ZeroFanOut(self.id));
                }
                Ok(SignalVector::from_stimulus(input).scaled_down(fan_out as f32))
            }
            NeuronKind::Cortical { accumulated } => {
                accumulated.accumulate(&SignalVector::from_stimulus(input));
                Ok(*accumulated)
            }
        }
    }
}
