// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Foundation data structures for the ocellus visual pathway.
//!
//! This crate holds everything below the network layer:
//! - **Signal**: fixed 3-channel signal vectors and channel kinds
//! - **Response**: per-kind photoreceptor response curve tables
//! - **Classifier**: the ordered color classification rule table
//!
//! The response curve and classifier are plain-data configuration tables:
//! both carry `Default` impls with the documented fixture values and can be
//! swapped out from JSON for testing.

mod classifier;
mod error;
mod response;
mod signal;

pub use classifier::{ChannelBound, ClassificationRule, ColorClassifier};
pub use error::OcellusDataError;
pub use response::{PhotoreceptorCurve, ResponseCurveTable};
pub use signal::{ColorChannel, SignalVector, SIGNAL_CHANNELS};
