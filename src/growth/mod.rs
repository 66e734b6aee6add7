//! Compound annual growth rate (CAGR) estimation
//!
//! One rate per feature, derived from the first and last observed year of a
//! country's series. Features whose endpoints are missing, non-positive, or
//! non-finite simply do not appear in the table; callers treat an absent
//! feature as rate 0.0 when compounding.

use crate::dataset::ObservationSeries;
use log::debug;
use std::collections::HashMap;

/// Per-feature growth rates derived from a historical series.
///
/// Every rate present in the table is finite and was computed from valid
/// observations at `start_year` and `end_year`. Rates are independent across
/// features.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthRateTable {
    start_year: i32,
    end_year: i32,
    rates: HashMap<String, f64>,
}

impl GrowthRateTable {
    /// First year the rates were derived from
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Last year the rates were derived from
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Rate for a feature, if one could be computed
    pub fn get(&self, feature: &str) -> Option<f64> {
        self.rates.get(feature).copied()
    }

    /// Rate for a feature, defaulting absent entries to no growth
    pub fn rate_or_zero(&self, feature: &str) -> f64 {
        self.rates.get(feature).copied().unwrap_or(0.0)
    }

    /// True when no rate could be computed (degenerate span or no valid
    /// endpoints). Callers must surface this before predicting.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Iterate over (feature, rate) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Estimate one CAGR per feature from the endpoints of a series.
///
/// `rate = (end_value / start_value)^(1 / span) - 1`, where `span` is the
/// number of years between the earliest and latest observation. A feature is
/// skipped (absent from the table, not an error) when either endpoint is
/// missing, non-positive, or non-finite; compound growth is undefined there.
/// A degenerate span (`end_year <= start_year`) yields an empty table.
pub fn estimate_rates(series: &ObservationSeries, features: &[&str]) -> GrowthRateTable {
    let start_year = series.start_year();
    let end_year = series.end_year();
    let span = end_year - start_year;

    let mut rates = HashMap::new();
    if span <= 0 {
        debug!(
            "degenerate span for {}: single observed year {}",
            series.country(),
            start_year
        );
        return GrowthRateTable {
            start_year,
            end_year,
            rates,
        };
    }

    for &feature in features {
        let start_val = series.value(start_year, feature);
        let end_val = series.value(end_year, feature);
        let (start_val, end_val) = match (start_val, end_val) {
            (Some(s), Some(e)) => (s, e),
            _ => continue,
        };

        if start_val <= 0.0 || end_val <= 0.0 || !start_val.is_finite() || !end_val.is_finite() {
            continue;
        }

        let rate = (end_val / start_val).powf(1.0 / span as f64) - 1.0;
        if rate.is_finite() {
            rates.insert(feature.to_string(), rate);
        }
    }

    GrowthRateTable {
        start_year,
        end_year,
        rates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use approx::assert_relative_eq;

    fn series_from_csv(csv: &str, country: &str) -> ObservationSeries {
        let dataset = Dataset::load_from_reader(csv.as_bytes()).expect("parse");
        dataset.series_for(country).expect("series")
    }

    const HEADER: &str = "country,year,co2_percap,cereal_yield,gni_per_cap,en_per_cap,pop_urb_aggl_perc,prot_area_perc,pop_growth_perc,urb_pop_growth_perc\n";

    #[test]
    fn test_cagr_doubling_over_decade() {
        // feature_x doubles over 10 years: rate = 2^(1/10) - 1 ≈ 0.07177
        let csv = format!(
            "{HEADER}TST,2000,,100.0,,,,,,\nTST,2010,,200.0,,,,,,\n"
        );
        let series = series_from_csv(&csv, "TST");
        let rates = estimate_rates(&series, &["cereal_yield"]);

        let rate = rates.get("cereal_yield").expect("rate present");
        assert_relative_eq!(rate, 2.0_f64.powf(0.1) - 1.0, epsilon = 1e-12);
        assert_relative_eq!(rate, 0.07177, epsilon = 1e-5);
    }

    #[test]
    fn test_rate_round_trips_endpoints() {
        let csv = format!(
            "{HEADER}TST,1995,,437.5,12000.0,,,,,\nTST,2013,,913.2,26500.0,,,,,\n"
        );
        let series = series_from_csv(&csv, "TST");
        let rates = estimate_rates(&series, &["cereal_yield", "gni_per_cap"]);
        let span = series.end_year() - series.start_year();

        // start * (1+rate)^span must recover the end value
        let r = rates.get("cereal_yield").expect("rate present");
        assert_relative_eq!(437.5 * (1.0 + r).powi(span), 913.2, epsilon = 1e-9);
        let r = rates.get("gni_per_cap").expect("rate present");
        assert_relative_eq!(12000.0 * (1.0 + r).powi(span), 26500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_growth() {
        let csv = format!("{HEADER}TST,2000,,200.0,,,,,,\nTST,2010,,100.0,,,,,,\n");
        let series = series_from_csv(&csv, "TST");
        let rates = estimate_rates(&series, &["cereal_yield"]);

        let rate = rates.get("cereal_yield").expect("rate present");
        assert!(rate < 0.0);
        assert_relative_eq!(rate, 0.5_f64.powf(0.1) - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_endpoint_skipped() {
        // cereal_yield missing in the end year, gni_per_cap missing in the
        // start year; neither gets a rate, valid en_per_cap does
        let csv = format!(
            "{HEADER}TST,2000,,100.0,,500.0,,,,\nTST,2010,,,4000.0,800.0,,,,\n"
        );
        let series = series_from_csv(&csv, "TST");
        let rates = estimate_rates(&series, &["cereal_yield", "gni_per_cap", "en_per_cap"]);

        assert_eq!(rates.get("cereal_yield"), None);
        assert_eq!(rates.get("gni_per_cap"), None);
        assert!(rates.get("en_per_cap").is_some());
        assert_eq!(rates.len(), 1);
    }

    #[test]
    fn test_nonpositive_endpoint_skipped() {
        // zero start, negative end: compound growth undefined for both
        let csv = format!(
            "{HEADER}TST,2000,,0.0,100.0,,,,,\nTST,2010,,150.0,-5.0,,,,,\n"
        );
        let series = series_from_csv(&csv, "TST");
        let rates = estimate_rates(&series, &["cereal_yield", "gni_per_cap"]);

        assert!(rates.is_empty());
        assert_eq!(rates.rate_or_zero("cereal_yield"), 0.0);
    }

    #[test]
    fn test_nonfinite_endpoint_skipped() {
        let csv = format!("{HEADER}TST,2000,,NaN,,,,,,\nTST,2010,,150.0,,,,,,\n");
        let series = series_from_csv(&csv, "TST");
        let rates = estimate_rates(&series, &["cereal_yield"]);
        assert!(rates.is_empty());
    }

    #[test]
    fn test_single_year_series_yields_empty_table() {
        let csv = format!("{HEADER}TST,2010,,100.0,2000.0,,,,,\n");
        let series = series_from_csv(&csv, "TST");
        let rates = estimate_rates(&series, &["cereal_yield", "gni_per_cap"]);

        assert!(rates.is_empty());
        assert_eq!(rates.start_year(), 2010);
        assert_eq!(rates.end_year(), 2010);
        // absent features default to no growth
        assert_eq!(rates.rate_or_zero("cereal_yield"), 0.0);
    }
}
