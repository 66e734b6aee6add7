//! Starting feature vector construction
//!
//! The substitution policy for features with no usable history lives here,
//! outside the compounding loop, so the projection math stays pure.

use crate::dataset::ObservationSeries;
use log::warn;

/// What to use for a feature whose most recent value is missing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallbackPolicy {
    /// Substitute a fixed constant
    Constant(f64),
}

impl Default for FallbackPolicy {
    /// The dashboard's historical substitution value
    fn default() -> Self {
        FallbackPolicy::Constant(1000.0)
    }
}

impl FallbackPolicy {
    fn value(&self) -> f64 {
        match self {
            FallbackPolicy::Constant(v) => *v,
        }
    }
}

/// Build the starting feature vector from the most recent non-missing
/// observation per feature, substituting per `policy` where none exists.
pub fn initial_vector(
    series: &ObservationSeries,
    features: &[&str],
    policy: FallbackPolicy,
) -> Vec<f64> {
    features
        .iter()
        .map(|&feature| match series.latest_value(feature) {
            Some(v) => v,
            None => {
                warn!(
                    "no usable history for {}/{}, substituting {}",
                    series.country(),
                    feature,
                    policy.value()
                );
                policy.value()
            }
        })
        .collect()
}
