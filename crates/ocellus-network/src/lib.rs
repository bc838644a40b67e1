// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Ocellus network layer
//!
//! A minimal feed-forward signal-processing network: photoreceptors convert
//! raw stimuli into channel responses, interneurons split signals equally
//! across their fan-out, and cortical neurons accumulate whatever reaches
//! them. One [`Network::propagate`] call injects a stimulus, cascades it
//! depth-first through the wiring, and returns the normalized 3-channel
//! aggregate ready for classification.
//!
//! Topology is explicit: the assembly step decides the population counts and
//! every individual link. A common default is one-to-one
//! photoreceptor → interneuron → cortical wiring, but that is assembly
//! policy, not something this crate hardcodes.
//!
//! ```
//! use ocellus_network::{Network, NeuronId};
//!
//! let mut network = Network::new(3, 3, 3)?;
//! for i in 0..3 {
//!     network.add_synapse(NeuronId(i), NeuronId(3 + i))?;
//!     network.add_synapse(NeuronId(3 + i), NeuronId(6 + i))?;
//! }
//! let aggregate = network.propagate(&[600.0])?;
//! # Ok::<(), ocellus_network::NetworkError>(())
//! ```

mod error;
mod network;
mod neuron;
mod synapse;

pub use error::{NetworkError, Result};
pub use network::{Network, NetworkState};
pub use neuron::{Neuron, NeuronId, NeuronKind};
pub use synapse::{Synapse, SynapseId};
