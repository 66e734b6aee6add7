//! Observation records and per-country series

use serde::{Deserialize, Serialize};

/// Fixed feature order expected by the prediction model.
///
/// Every feature vector handed to a [`crate::model::Predictor`] is aligned
/// to this list.
pub const SELECTED_FEATURES: [&str; 7] = [
    "cereal_yield",
    "gni_per_cap",
    "en_per_cap",
    "pop_urb_aggl_perc",
    "prot_area_perc",
    "pop_growth_perc",
    "urb_pop_growth_perc",
];

/// One record of the cleaned historical dataset.
///
/// Feature columns are `Option<f64>` because the source data has gaps;
/// a missing value is data, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRow {
    pub country: String,
    pub year: i32,

    /// Target variable, present for historical rows only
    pub co2_percap: Option<f64>,

    /// Cereal yield (kg per hectare)
    pub cereal_yield: Option<f64>,
    /// GNI per capita (Atlas $)
    pub gni_per_cap: Option<f64>,
    /// Energy use per capita (kg of oil equivalent)
    pub en_per_cap: Option<f64>,
    /// Population in urban agglomerations >1 million (%)
    pub pop_urb_aggl_perc: Option<f64>,
    /// Terrestrial protected areas (% of total land)
    pub prot_area_perc: Option<f64>,
    /// Population growth (annual %)
    pub pop_growth_perc: Option<f64>,
    /// Urban population growth (annual %)
    pub urb_pop_growth_perc: Option<f64>,
}

impl DataRow {
    /// Look up a feature value by column name
    pub fn feature(&self, name: &str) -> Option<f64> {
        match name {
            "cereal_yield" => self.cereal_yield,
            "gni_per_cap" => self.gni_per_cap,
            "en_per_cap" => self.en_per_cap,
            "pop_urb_aggl_perc" => self.pop_urb_aggl_perc,
            "prot_area_perc" => self.prot_area_perc,
            "pop_growth_perc" => self.pop_growth_perc,
            "urb_pop_growth_perc" => self.urb_pop_growth_perc,
            _ => None,
        }
    }
}

/// All observations for one country, ordered by year.
///
/// Constructed by [`crate::dataset::Dataset::series_for`]; guaranteed
/// non-empty and immutable for the session.
#[derive(Debug, Clone)]
pub struct ObservationSeries {
    country: String,
    rows: Vec<DataRow>,
}

impl ObservationSeries {
    /// Build a series from pre-filtered rows. Returns `None` when empty.
    pub(crate) fn new(country: String, mut rows: Vec<DataRow>) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        rows.sort_by_key(|r| r.year);
        Some(Self { country, rows })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Earliest observed year
    pub fn start_year(&self) -> i32 {
        self.rows.first().map(|r| r.year).unwrap_or_default()
    }

    /// Latest observed year
    pub fn end_year(&self) -> i32 {
        self.rows.last().map(|r| r.year).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    /// Feature value observed in a specific year, if any
    pub fn value(&self, year: i32, feature: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.year == year)
            .and_then(|r| r.feature(feature))
    }

    /// Most recent non-missing value for a feature
    pub fn latest_value(&self, feature: &str) -> Option<f64> {
        self.rows.iter().rev().find_map(|r| r.feature(feature))
    }
}
