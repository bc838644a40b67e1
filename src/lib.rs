// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Ocellus - Minimal Feed-Forward Visual Pathway
//!
//! Ocellus simulates the smallest interesting visual pathway: light-wave
//! stimuli enter at photoreceptors, cascade through interneurons, accumulate
//! at cortical neurons, and the normalized aggregate is classified into a
//! discrete color label.
//!
//! ## Quick Start
//!
//! ```
//! use ocellus::prelude::*;
//!
//! // 3 interneurons, 3 photoreceptors (one per channel), 3 cortical neurons
//! let mut network = Network::new(3, 3, 3)?;
//!
//! // Assembly policy: one-to-one receptor → interneuron → cortical wiring
//! for i in 0..3 {
//!     network.add_synapse(NeuronId(i), NeuronId(3 + i))?;
//!     network.add_synapse(NeuronId(3 + i), NeuronId(6 + i))?;
//! }
//!
//! let aggregate = network.propagate(&[600.0])?;
//! let label = ColorClassifier::default().classify(&aggregate).to_string();
//! assert_eq!(label, "violet");
//! # Ok::<(), ocellus::network::NetworkError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Foundation: ocellus-structures                         │
//! │  (SignalVector, ColorChannel, curves, classifier)       │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Network: ocellus-network                               │
//! │  (Neuron arena, Synapse arena, two-phase propagation)   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The color classifier is a pure function over the aggregate and is owned
//! by the foundation layer, not by propagation; wiring topology is owned by
//! the caller, not hardcoded here.

// Re-export foundation
pub use ocellus_structures as structures;

// Re-export network layer
pub use ocellus_network as network;

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::network::{Network, NetworkError, NetworkState, NeuronId, SynapseId};
    pub use crate::structures::{
        ColorChannel, ColorClassifier, ResponseCurveTable, SignalVector,
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_facade_imports() {
        // Just test that re-exports work
        use crate::prelude::*;
        let _neuron_id = NeuronId(0);
        let _signal = SignalVector::zeros();
    }
}
