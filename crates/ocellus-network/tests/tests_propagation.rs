// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Propagation-law tests over small hand-wired topologies

use ocellus_network::{Network, NeuronId};
use ocellus_structures::SignalVector;

/// One receptor per channel, wired straight through: receptor i →
/// interneuron 3+i → cortical 6+i.
fn straight_through() -> Network {
    let mut network = Network::new(3, 3, 3).unwrap();
    for i in 0..3 {
        network.add_synapse(NeuronId(i), NeuronId(3 + i)).unwrap();
        network.add_synapse(NeuronId(3 + i), NeuronId(6 + i)).unwrap();
    }
    network
}

#[test]
fn test_round_trip_through_single_chain() {
    // A fan-out of 1 divides by 1, so the receptor's response vector lands
    // in the cortical accumulator unchanged.
    let mut network = straight_through();
    network.propagate(&[600.0]).unwrap();

    let accumulated = network.neuron(NeuronId(6)).unwrap().accumulated().unwrap();
    assert_eq!(*accumulated, SignalVector([1.0, 0.04, 0.0]));

    // The other two chains saw zero intensity on their channels
    let quiet = network.neuron(NeuronId(7)).unwrap().accumulated().unwrap();
    assert_eq!(*quiet, SignalVector::zeros());
}

#[test]
fn test_fan_out_sum_reproduces_input() {
    // Interneuron 3 splits across two cortical targets; the downstream
    // deliveries must sum back to its input.
    let mut network = Network::new(3, 3, 2).unwrap();
    network.add_synapse(NeuronId(0), NeuronId(3)).unwrap();
    network.add_synapse(NeuronId(3), NeuronId(6)).unwrap();
    network.add_synapse(NeuronId(3), NeuronId(7)).unwrap();
    // Keep the remaining receptors wired so the run has no dead interneurons
    network.add_synapse(NeuronId(1), NeuronId(4)).unwrap();
    network.add_synapse(NeuronId(4), NeuronId(6)).unwrap();
    network.add_synapse(NeuronId(2), NeuronId(5)).unwrap();
    network.add_synapse(NeuronId(5), NeuronId(7)).unwrap();

    network.propagate(&[600.0]).unwrap();

    // Receptor 0 responded [1.0, 0.04, 0.0]; each of the two targets got half
    let half = SignalVector([0.5, 0.02, 0.0]);
    let first = network.neuron(NeuronId(6)).unwrap().accumulated().unwrap();
    let second = network.neuron(NeuronId(7)).unwrap().accumulated().unwrap();
    assert!(first.approx_eq(&half, 1e-6));
    assert!(second.approx_eq(&half, 1e-6));

    let mut sum = *first;
    sum.accumulate(second);
    assert!(sum.approx_eq(&SignalVector([1.0, 0.04, 0.0]), 1e-6));
}

#[test]
fn test_accumulation_compounds_without_reset() {
    // Two runs without a reset double the aggregate: intended behavior,
    // reset is the caller's responsibility.
    let mut network = straight_through();
    let first = network.propagate(&[600.0]).unwrap();
    let second = network.propagate(&[600.0]).unwrap();

    let doubled = SignalVector([first[0] * 2.0, first[1] * 2.0, first[2] * 2.0]);
    assert!(second.approx_eq(&doubled, 1e-6));

    // A reset restores the first-run aggregate
    network.reset_accumulators();
    let third = network.propagate(&[600.0]).unwrap();
    assert!(third.approx_eq(&first, 1e-6));
}

#[test]
fn test_channel_counts_sum_to_receptor_count() {
    for receptors in [3usize, 4, 5, 6, 7] {
        let network = Network::new(receptors, receptors, 1).unwrap();
        let counts = network.count_by_channel();
        assert_eq!(counts.iter().sum::<usize>(), receptors);
    }
}

#[test]
fn test_normalization_divides_by_kind_count() {
    // Six receptors (two per kind) all feeding one cortical neuron through
    // their own interneurons: each channel accumulates twice the single
    // receptor response, and normalization divides it back down.
    let mut network = Network::new(6, 6, 1).unwrap();
    for i in 0..6 {
        network.add_synapse(NeuronId(i), NeuronId(6 + i)).unwrap();
        network.add_synapse(NeuronId(6 + i), NeuronId(12)).unwrap();
    }

    let aggregate = network.propagate(&[600.0, 600.0, 600.0]).unwrap();

    // Every receptor of a kind responds identically, so the aggregate equals
    // the sum of one receptor response per kind.
    let expected = SignalVector([1.0, 0.04 + 1.0 + 0.08, 0.05 + 1.0]);
    assert!(aggregate.approx_eq(&expected, 1e-5));
}

#[test]
fn test_multi_hop_interneuron_chain() {
    // receptor 0 → interneuron 3 → interneuron 4 → cortical 6: each hop has
    // a fan-out of 1, so the response survives unchanged.
    let mut network = Network::new(3, 3, 1).unwrap();
    network.add_synapse(NeuronId(0), NeuronId(3)).unwrap();
    network.add_synapse(NeuronId(3), NeuronId(4)).unwrap();
    network.add_synapse(NeuronId(4), NeuronId(6)).unwrap();
    network.add_synapse(NeuronId(1), NeuronId(5)).unwrap();
    network.add_synapse(NeuronId(5), NeuronId(6)).unwrap();
    network.add_synapse(NeuronId(2), NeuronId(5)).unwrap();

    network.propagate(&[600.0]).unwrap();

    let accumulated = network.neuron(NeuronId(6)).unwrap().accumulated().unwrap();
    assert!(accumulated.approx_eq(&SignalVector([1.0, 0.04, 0.0]), 1e-6));
}
