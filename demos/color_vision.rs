// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Minimal color-vision run: the reference 3/3/3 assembly classifying a
//! single-channel stimulus.
//!
//! ```text
//! cargo run --example color_vision
//! ```

use ocellus::prelude::*;

fn main() -> Result<(), NetworkError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    // 3 interneurons, 3 photoreceptors, 3 cortical neurons
    let mut network = Network::new(3, 3, 3)?;

    // Assembly policy: one-to-one receptor → interneuron → cortical wiring
    for i in 0..3 {
        network.add_synapse(NeuronId(i), NeuronId(3 + i))?;
        network.add_synapse(NeuronId(3 + i), NeuronId(6 + i))?;
    }

    let stimulus = [600.0];
    let aggregate = network.propagate(&stimulus)?;

    let classifier = ColorClassifier::default();
    let label = classifier.classify(&aggregate);

    println!("stimulus  : {:?}", stimulus);
    println!("aggregate : {}", aggregate);
    println!("color     : {}", label);
    Ok(())
}
