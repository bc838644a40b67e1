// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for network construction and propagation

use crate::neuron::NeuronId;
use ocellus_structures::ColorChannel;

/// Result type for network operations
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors that can occur while building or running the network.
///
/// Construction errors are fatal: no partial network is returned. Link
/// errors leave the network in its prior valid state. Propagation errors
/// surface synchronously at the offending neuron or channel; no partial
/// aggregate is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// Population counts violate the construction invariants
    #[error("invalid topology: {photoreceptors} photoreceptor(s), {interneurons} interneuron(s); need at least 3 photoreceptors and at least as many interneurons as photoreceptors")]
    InvalidTopology {
        photoreceptors: usize,
        interneurons: usize,
    },

    /// A link endpoint does not name an existing neuron
    #[error("link endpoint {index} out of range: network has {neuron_count} neuron(s)")]
    LinkOutOfRange { index: NeuronId, neuron_count: usize },

    /// A link's source and target are the same neuron
    #[error("self-loop rejected on {0}")]
    SelfLoop(NeuronId),

    /// The ordered (source, target) pair is already wired
    #[error("duplicate link rejected: {src} -> {target} already exists")]
    DuplicateLink { src: NeuronId, target: NeuronId },

    /// A cortical neuron is terminal and cannot be a link source
    #[error("cortical neuron {0} is terminal and cannot have outgoing links")]
    CorticalSource(NeuronId),

    /// The topology is sealed; links can no longer be added
    #[error("topology is sealed: links cannot be added after the first propagation")]
    TopologySealed,

    /// The wiring contains a cycle, so propagation would not terminate
    #[error("circular wiring detected through {0}")]
    CircularWiring(NeuronId),

    /// An interneuron has no outgoing links to divide its signal across
    #[error("interneuron {0} has no outgoing links to split its signal across")]
    ZeroFanOut(NeuronId),

    /// No photoreceptor is tuned to a channel, so normalization would divide by zero
    #[error("no photoreceptor tuned to the {0} channel; aggregate cannot be normalized")]
    ChannelStarved(ColorChannel),
}
