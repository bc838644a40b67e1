// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # The feed-forward pathway network
//!
//! Owns both arenas (neurons and synapses), builds the index-partitioned
//! population, wires links while the topology is open, and drives the
//! two-phase propagation:
//!
//! ```text
//! Phase 1 (Injection):   every photoreceptor integrates the stimulus in
//!                        index order; each cascade runs depth-first to
//!                        completion before the next receptor starts.
//! Phase 2 (Aggregation): every cortical accumulator is read, each channel
//!                        divided by the photoreceptor count of the matching
//!                        kind, and summed into the aggregate.
//! ```
//!
//! The index ranges are contiguous and fixed at construction:
//! `[0, P)` photoreceptors, `[P, P+I)` interneurons, the remainder cortical.

use crate::error::{NetworkError, Result};
use crate::neuron::{Neuron, NeuronId, NeuronKind};
use crate::synapse::{Synapse, SynapseId};
use ahash::AHashSet;
use ocellus_structures::{ColorChannel, ResponseCurveTable, SignalVector, SIGNAL_CHANNELS};
use tracing::{debug, trace};

/// Lifecycle state of the network topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    /// Links may be added
    Building,
    /// Topology is sealed; propagation may be invoked
    Ready,
}

/// The feed-forward visual pathway network.
///
/// Built once with fixed population counts, wired link by link, then driven
/// repeatedly with [`Network::propagate`]. Cortical accumulators persist
/// across runs until [`Network::reset_accumulators`] is called; back-to-back
/// runs without a reset compound, which is intended behavior left to the
/// caller.
#[derive(Debug, Clone)]
pub struct Network {
    photoreceptor_count: usize,
    interneuron_count: usize,
    cortical_count: usize,
    neurons: Vec<Neuron>,
    synapses: Vec<Synapse>,
    /// Ordered (source, target) pairs already wired, for duplicate rejection
    wired: AHashSet<(NeuronId, NeuronId)>,
    curves: ResponseCurveTable,
    state: NetworkState,
}

impl Network {
    /// Build a network with the default response curve table.
    ///
    /// Fails with [`NetworkError::InvalidTopology`] when `photoreceptors < 3`
    /// or `interneurons < photoreceptors`; no partial network is returned.
    pub fn new(interneurons: usize, photoreceptors: usize, corticals: usize) -> Result<Self> {
        Self::with_curves(
            interneurons,
            photoreceptors,
            corticals,
            ResponseCurveTable::default(),
        )
    }

    /// Build a network with an explicit response curve table.
    ///
    /// Photoreceptor channels cycle blue → green → red across indices, so
    /// the three kinds split evenly whenever `photoreceptors` is a multiple
    /// of 3.
    pub fn with_curves(
        interneurons: usize,
        photoreceptors: usize,
        corticals: usize,
        curves: ResponseCurveTable,
    ) -> Result<Self> {
        if photoreceptors < 3 || interneurons < photoreceptors {
            return Err(NetworkError::InvalidTopology {
                photoreceptors,
                interneurons,
            });
        }

        let total = photoreceptors + interneurons + corticals;
        let mut neurons = Vec::with_capacity(total);
        for index in 0..total {
            let id = NeuronId(index as u32);
            neurons.push(if index < photoreceptors {
                Neuron::photoreceptor(id, ColorChannel::from_index(index))
            } else if index < photoreceptors + interneurons {
                Neuron::interneuron(id)
            } else {
                Neuron::cortical(id)
            });
        }

        debug!(
            target: "ocellus-network",
            "built network: {} photoreceptor(s), {} interneuron(s), {} cortical neuron(s)",
            photoreceptors, interneurons, corticals
        );

        Ok(Self {
            photoreceptor_count: photoreceptors,
            interneuron_count: interneurons,
            cortical_count: corticals,
            neurons,
            synapses: Vec::new(),
            wired: AHashSet::new(),
            curves,
            state: NetworkState::Building,
        })
    }

    /// Wire a directed synapse from `source` to `target`.
    ///
    /// Rejected when the topology is sealed, an endpoint is out of range,
    /// source and target coincide, the source is a terminal cortical neuron,
    /// or the ordered pair is already wired. On rejection the network is
    /// left in its prior valid state.
    pub fn add_synapse(&mut self, source: NeuronId, target: NeuronId) -> Result<SynapseId> {
        if self.state == NetworkState::Ready {
            return Err(NetworkError::TopologySealed);
        }
        let neuron_count = self.neurons.len();
        for endpoint in [source, target] {
            if endpoint.index() >= neuron_count {
                return Err(NetworkError::LinkOutOfRange {
                    index: endpoint,
                    neuron_count,
                });
            }
        }
        if source == target {
            return Err(NetworkError::SelfLoop(source));
        }
        if matches!(self.neurons[source.index()].kind(), NeuronKind::Cortical { .. }) {
            return Err(NetworkError::CorticalSource(source));
        }
        if !self.wired.insert((source, target)) {
            return Err(NetworkError::DuplicateLink { src: source, target });
        }

        let id = SynapseId(self.synapses.len() as u32);
        self.synapses.push(Synapse::new(source, target));
        self.neurons[source.index()].attach(id);
        trace!(target: "ocellus-network", "wired {} -> {}", source, target);
        Ok(id)
    }

    /// Seal the topology: `Building` → `Ready`.
    ///
    /// Verifies the wiring is acyclic so propagation is a bounded
    /// computation. Idempotent; there is no transition back to `Building`.
    pub fn finalize(&mut self) -> Result<()> {
        if self.state == NetworkState::Ready {
            return Ok(());
        }
        self.check_acyclic()?;
        self.state = NetworkState::Ready;
        debug!(
            target: "ocellus-network",
            "topology sealed: {} synapse(s) across {} neuron(s)",
            self.synapses.len(),
            self.neurons.len()
        );
        Ok(())
    }

    /// Process one stimulus through the network and return the normalized
    /// 3-channel aggregate.
    ///
    /// Seals the topology on first use. Errors surface synchronously at the
    /// offending neuron or channel and no partial aggregate is returned.
    /// Cortical accumulators are NOT reset here; see
    /// [`Network::reset_accumulators`].
    pub fn propagate(&mut self, stimulus: &[f32]) -> Result<SignalVector> {
        if self.state == NetworkState::Building {
            self.finalize()?;
        }
        debug!(
            target: "ocellus-network",
            "propagating stimulus of {} channel(s)",
            stimulus.len()
        );

        // Phase 1: injection, depth-first along each receptor's fan-out
        for index in 0..self.photoreceptor_count {
            self.deliver(NeuronId(index as u32), stimulus)?;
        }

        // Phase 2: per-channel normalization, then the sum over all
        // cortical neurons. Addition commutes, so cortical order is
        // irrelevant; the per-kind counts only hold once phase 1 is done.
        let counts = self.count_by_channel();
        for channel in 0..SIGNAL_CHANNELS {
            if counts[channel] == 0 {
                return Err(NetworkError::ChannelStarved(ColorChannel::ALL[channel]));
            }
        }

        let cortical_start = self.photoreceptor_count + self.interneuron_count;
        let mut aggregate = SignalVector::zeros();
        for neuron in &self.neurons[cortical_start..] {
            if let Some(accumulated) = neuron.accumulated() {
                for channel in 0..SIGNAL_CHANNELS {
                    aggregate[channel] += accumulated[channel] / counts[channel] as f32;
                }
            }
        }

        debug!(target: "ocellus-network", "aggregate {}", aggregate);
        Ok(aggregate)
    }

    /// Recursive delivery: integrate at `id`, then forward the response on
    /// every outgoing synapse in insertion order.
    fn deliver(&mut self, id: NeuronId, input: &[f32]) -> Result<SignalVector> {
        let index = id.index();
        let output = self.neurons[index].integrate(input, &self.curves)?;
        trace!(
            target: "ocellus-network",
            "{} {} emitted {}",
            self.neurons[index].kind_name(),
            id,
            output
        );

        let outgoing = self.neurons[index].outgoing().to_vec();
        for synapse_id in outgoing {
            let target = self.synapses[synapse_id.index()].target();
            self.deliver(target, output.as_slice())?;
        }
        Ok(output)
    }

    /// Tally photoreceptors by channel kind.
    ///
    /// Sums to the photoreceptor count exactly; used for phase-2
    /// normalization and externally inspectable.
    pub fn count_by_channel(&self) -> [usize; SIGNAL_CHANNELS] {
        let mut counts = [0usize; SIGNAL_CHANNELS];
        for neuron in &self.neurons[..self.photoreceptor_count] {
            if let Some(channel) = neuron.channel() {
                counts[channel.channel_index()] += 1;
            }
        }
        counts
    }

    /// Zero every cortical accumulator, making the network ready for an
    /// independent propagation run.
    pub fn reset_accumulators(&mut self) {
        for neuron in &mut self.neurons {
            neuron.reset_accumulator();
        }
    }

    /// Depth-first cycle check over the wiring
    fn check_acyclic(&self) -> Result<()> {
        const UNVISITED: u8 = 0;
        const IN_PROGRESS: u8 = 1;
        const DONE: u8 = 2;

        let mut marks = vec![UNVISITED; self.neurons.len()];
        for start in 0..self.neurons.len() {
            if marks[start] != UNVISITED {
                continue;
            }
            marks[start] = IN_PROGRESS;
            let mut stack = vec![(start, 0usize)];
            while let Some((node, edge)) = stack.last_mut() {
                let outgoing = self.neurons[*node].outgoing();
                if *edge < outgoing.len() {
                    let synapse = &self.synapses[outgoing[*edge].index()];
                    *edge += 1;
                    let next = synapse.target();
                    match marks[next.index()] {
                        UNVISITED => {
                            marks[next.index()] = IN_PROGRESS;
                            stack.push((next.index(), 0));
                        }
                        IN_PROGRESS => return Err(NetworkError::CircularWiring(next)),
                        _ => {}
                    }
                } else {
                    marks[*node] = DONE;
                    stack.pop();
                }
            }
        }
        Ok(())
    }

    pub fn photoreceptor_count(&self) -> usize {
        self.photoreceptor_count
    }

    pub fn interneuron_count(&self) -> usize {
        self.interneuron_count
    }

    pub fn cortical_count(&self) -> usize {
        self.cortical_count
    }

    pub fn neuron_count(&self) -> usize {
        self.neurons.len()
    }

    pub fn synapse_count(&self) -> usize {
        self.synapses.len()
    }

    pub fn state(&self) -> NetworkState {
        self.state
    }

    /// Look up a neuron by ID
    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        self.neurons.get(id.index())
    }

    /// Look up a synapse by ID
    pub fn synapse(&self, id: SynapseId) -> Option<&Synapse> {
        self.synapses.get(id.index())
    }
}
