// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Directed, weightless synapses
//!
//! A synapse is a plain index pair into the neuron arena: the network owns
//! every synapse, and endpoints are non-owning `NeuronId` references, so no
//! reference cycles can form. Transmission forwards a signal vector
//! unchanged from source to target; the network walk drives delivery by
//! invoking the target's `integrate` once per synapse carrying a signal.

use crate::neuron::NeuronId;
use core::fmt;

/// Synapse ID: the synapse's index in the network arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SynapseId(pub u32);

impl SynapseId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SynapseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Synapse({})", self.0)
    }
}

/// A directed link between two existing neurons.
///
/// Both endpoints are guaranteed present and distinct at construction time;
/// the network rejects anything else before a `Synapse` is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synapse {
    source: NeuronId,
    target: NeuronId,
}

impl Synapse {
    pub(crate) fn new(source: NeuronId, target: NeuronId) -> Self {
        Self { source, target }
    }

    /// Presynaptic neuron (sender)
    pub fn source(&self) -> NeuronId {
        self.source
    }

    /// Postsynaptic neuron (receiver)
    pub fn target(&self) -> NeuronId {
        self.target
    }
}

impl fmt::Display for Synapse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
