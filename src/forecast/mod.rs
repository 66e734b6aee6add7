//! Forecast engine for single-point and multi-year projections

mod engine;
mod initial;
mod point;

pub use engine::{project_single, ForecastConfig, ForecastEngine};
pub use initial::{initial_vector, FallbackPolicy};
pub use point::{ForecastPoint, ForecastResult};

// ============================================================================
// Default Forecast Horizon
// ============================================================================
// The dashboard projects 18 years past the last observed year; the slider
// for the one-shot prediction allows up to 30 years ahead.

/// Default multi-year forecast horizon (years past the last observation)
pub const DEFAULT_HORIZON_YEARS: u32 = 18;

/// Maximum supported one-shot horizon (years past the last observation)
pub const MAX_HORIZON_YEARS: u32 = 30;
