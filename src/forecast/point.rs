//! Forecast output rows

use serde::{Deserialize, Serialize};

/// One forecasted year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub year: i32,
    /// Predicted CO2 emissions per capita (metric tons)
    pub co2_percap: f64,
}

/// A multi-year forecast, ordered by strictly increasing year.
///
/// Plain data for the presentation layer; charting and formatting live
/// outside this crate's core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastResult {
    pub points: Vec<ForecastPoint>,
}

impl ForecastResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last forecasted year, if any
    pub fn final_year(&self) -> Option<i32> {
        self.points.last().map(|p| p.year)
    }
}
