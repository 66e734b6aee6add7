//! Emissions Forecast - growth-rate driven forecasting for per-capita CO2 emissions
//!
//! This library provides:
//! - Historical dataset loading (per-country, per-year feature observations)
//! - Compound annual growth rate (CAGR) estimation per feature
//! - Single-point and multi-year feature projections under compounding
//! - A pluggable prediction model interface for turning projected feature
//!   vectors into CO2 per-capita estimates

pub mod dataset;
pub mod growth;
pub mod forecast;
pub mod model;

// Re-export commonly used types
pub use dataset::{Dataset, DatasetError, ObservationSeries, SELECTED_FEATURES};
pub use growth::{estimate_rates, GrowthRateTable};
pub use forecast::{
    initial_vector, project_single, FallbackPolicy, ForecastConfig, ForecastEngine,
    ForecastPoint, ForecastResult,
};
pub use model::{LinearModel, ModelError, Predictor};
