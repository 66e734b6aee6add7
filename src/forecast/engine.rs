//! Compounding projections and the year-by-year forecast loop

use crate::growth::GrowthRateTable;
use crate::model::{ModelError, Predictor};
use super::point::{ForecastPoint, ForecastResult};
use log::debug;

/// Project a feature vector `horizon` years in one step.
///
/// `projected[i] = values[i] * (1 + rate)^horizon`, with absent rates
/// defaulting to 0.0. Pure: the input is untouched. A horizon of 0 returns
/// the input values; negative horizons extrapolate backward with the same
/// formula.
pub fn project_single(
    values: &[f64],
    features: &[&str],
    rates: &GrowthRateTable,
    horizon: i32,
) -> Vec<f64> {
    values
        .iter()
        .zip(features)
        .map(|(&v, &f)| v * (1.0 + rates.rate_or_zero(f)).powi(horizon))
        .collect()
}

/// Configuration for a multi-year forecast run
#[derive(Debug, Clone, Copy)]
pub struct ForecastConfig {
    /// Last observed year; forecasting starts the year after
    pub start_year: i32,
    /// Number of years to forecast
    pub horizon_years: u32,
}

/// Runs the iterative year-by-year forecast for one country.
///
/// Each step compounds the running vector by one year and hands it to the
/// prediction model; the running vector after `k` steps equals
/// [`project_single`] with horizon `k` from the same starting vector.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    rates: GrowthRateTable,
    config: ForecastConfig,
}

impl ForecastEngine {
    pub fn new(rates: GrowthRateTable, config: ForecastConfig) -> Self {
        Self { rates, config }
    }

    /// Growth rates backing this engine, for display alongside the forecast
    pub fn rates(&self) -> &GrowthRateTable {
        &self.rates
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Produce one [`ForecastPoint`] per year from `start_year + 1` through
    /// `start_year + horizon_years`. Model failures propagate unchanged.
    pub fn forecast(
        &self,
        initial: &[f64],
        features: &[&str],
        model: &dyn Predictor,
    ) -> Result<ForecastResult, ModelError> {
        debug!(
            "forecasting {} years from {} ({} rates)",
            self.config.horizon_years,
            self.config.start_year,
            self.rates.len()
        );

        let mut running = initial.to_vec();
        let mut points = Vec::with_capacity(self.config.horizon_years as usize);

        for step in 1..=self.config.horizon_years {
            let year = self.config.start_year + step as i32;
            for (value, &feature) in running.iter_mut().zip(features) {
                *value *= 1.0 + self.rates.rate_or_zero(feature);
            }
            let predicted = model.predict(&running)?;
            points.push(ForecastPoint {
                year,
                co2_percap: predicted,
            });
        }

        Ok(ForecastResult { points })
    }
}
