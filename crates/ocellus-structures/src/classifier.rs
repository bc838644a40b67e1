// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Color classification of aggregate signals
//!
//! The classifier is a pure function over a normalized 3-channel aggregate:
//! an ordered rule list evaluated top-to-bottom, first match wins, with a
//! default label when nothing matches. The thresholds live in the rule
//! table, not in propagation logic, and the table can be swapped from JSON.

use crate::error::{OcellusDataError, Result};
use crate::signal::{SignalVector, SIGNAL_CHANNELS};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One inequality over a single aggregate channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelBound {
    /// Matches when the channel value is strictly above the threshold
    Above(f32),
    /// Matches when the channel value is strictly below the threshold
    Below(f32),
    /// Matches when the channel value is at or below the threshold
    AtMost(f32),
}

impl ChannelBound {
    /// Evaluate this bound against a channel value
    pub fn matches(&self, value: f32) -> bool {
        match *self {
            ChannelBound::Above(threshold) => value > threshold,
            ChannelBound::Below(threshold) => value < threshold,
            ChannelBound::AtMost(threshold) => value <= threshold,
        }
    }
}

/// A single classification rule: a label plus up to one bound per channel.
///
/// A rule matches when every present bound matches; an absent bound leaves
/// that channel unconstrained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub label: String,
    pub bounds: [Option<ChannelBound>; SIGNAL_CHANNELS],
}

impl ClassificationRule {
    /// True when the aggregate satisfies every bound of this rule
    pub fn matches(&self, aggregate: &SignalVector) -> bool {
        self.bounds
            .iter()
            .enumerate()
            .all(|(channel, bound)| match bound {
                Some(bound) => bound.matches(aggregate[channel]),
                None => true,
            })
    }
}

/// Ordered color classification table.
///
/// The `Default` table carries the reference thresholds; rules are evaluated
/// in order and the first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorClassifier {
    pub rules: Vec<ClassificationRule>,
    pub default_label: String,
}

impl ColorClassifier {
    /// Classify a normalized aggregate into a color label.
    ///
    /// Pure: no state is read or written outside the rule table.
    pub fn classify(&self, aggregate: &SignalVector) -> &str {
        for rule in &self.rules {
            if rule.matches(aggregate) {
                trace!(target: "ocellus-classifier", "aggregate {} matched '{}'", aggregate, rule.label);
                return &rule.label;
            }
        }
        trace!(target: "ocellus-classifier", "aggregate {} fell through to '{}'", aggregate, self.default_label);
        &self.default_label
    }

    /// Deserialize and validate a classifier from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let classifier: Self = serde_json::from_str(json)?;
        classifier.validate()?;
        Ok(classifier)
    }

    /// Reject empty labels and non-finite thresholds
    pub fn validate(&self) -> Result<()> {
        if self.default_label.is_empty() {
            return Err(OcellusDataError::BadParameters(
                "default label must not be empty".into(),
            ));
        }
        for rule in &self.rules {
            if rule.label.is_empty() {
                return Err(OcellusDataError::BadParameters(
                    "rule label must not be empty".into(),
                ));
            }
            for bound in rule.bounds.iter().flatten() {
                let threshold = match *bound {
                    ChannelBound::Above(t) | ChannelBound::Below(t) | ChannelBound::AtMost(t) => t,
                };
                if !threshold.is_finite() {
                    return Err(OcellusDataError::BadParameters(format!(
                        "rule '{}' has a non-finite threshold",
                        rule.label
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for ColorClassifier {
    fn default() -> Self {
        use ChannelBound::{AtMost, Above, Below};

        let rule = |label: &str, bounds: [Option<ChannelBound>; SIGNAL_CHANNELS]| {
            ClassificationRule {
                label: label.to_string(),
                bounds,
            }
        };

        Self {
            rules: vec![
                rule("violet", [Some(Above(0.6)), Some(Below(0.074)), None]),
                rule("blue", [Some(Above(0.21569)), Some(Below(0.677)), None]),
                rule(
                    "green",
                    [Some(AtMost(0.21569)), Some(Above(0.677)), Some(Above(0.333))],
                ),
                rule("yellow", [None, Some(Below(0.713)), Some(Above(0.913))]),
                rule("orange", [None, Some(Above(0.068)), Some(Above(0.227))]),
                rule("red", [None, None, Some(Above(0.002))]),
            ],
            default_label: "grey".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_scenarios() {
        let classifier = ColorClassifier::default();

        assert_eq!(classifier.classify(&SignalVector([0.7, 0.05, 0.1])), "violet");
        assert_eq!(classifier.classify(&SignalVector([0.1, 0.9, 0.5])), "green");
        assert_eq!(classifier.classify(&SignalVector([0.0, 0.0, 0.0])), "grey");
    }

    #[test]
    fn test_remaining_labels_reachable() {
        let classifier = ColorClassifier::default();

        assert_eq!(classifier.classify(&SignalVector([0.3, 0.5, 0.0])), "blue");
        assert_eq!(classifier.classify(&SignalVector([0.0, 0.3, 0.95])), "yellow");
        assert_eq!(classifier.classify(&SignalVector([0.0, 0.3, 0.5])), "orange");
        assert_eq!(classifier.classify(&SignalVector([0.0, 0.0, 0.1])), "red");
    }

    #[test]
    fn test_rule_order_first_match_wins() {
        let classifier = ColorClassifier::default();

        // Satisfies both the violet and blue rules; violet is listed first
        let aggregate = SignalVector([0.7, 0.05, 0.0]);
        assert_eq!(classifier.classify(&aggregate), "violet");
    }

    #[test]
    fn test_at_most_is_inclusive() {
        let classifier = ColorClassifier::default();

        // Exactly on the green rule's channel-0 boundary
        let aggregate = SignalVector([0.21569, 0.7, 0.4]);
        assert_eq!(classifier.classify(&aggregate), "green");
    }

    #[test]
    fn test_table_swap_from_json() {
        let json = r#"{
            "rules": [
                { "label": "bright", "bounds": [{ "above": 0.5 }, null, null] }
            ],
            "default_label": "dark"
        }"#;
        let classifier = ColorClassifier::from_json(json).unwrap();
        assert_eq!(classifier.classify(&SignalVector([0.9, 0.0, 0.0])), "bright");
        assert_eq!(classifier.classify(&SignalVector([0.1, 0.0, 0.0])), "dark");
    }

    #[test]
    fn test_empty_label_rejected() {
        let json = r#"{ "rules": [], "default_label": "" }"#;
        assert!(ColorClassifier::from_json(json).is_err());
    }
}
