//! CSV loading for the historical dataset

use super::{DataRow, ObservationSeries};
use log::debug;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or querying the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("no observations for country '{0}'")]
    UnknownCountry(String),
}

/// The full historical table, loaded once and immutable for the session
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<DataRow>,
}

impl Dataset {
    /// Load the cleaned dataset from a CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path.as_ref())?;
        let dataset = Self::load_from_reader(file)?;
        debug!(
            "loaded {} rows from {}",
            dataset.rows.len(),
            path.as_ref().display()
        );
        Ok(dataset)
    }

    /// Load the dataset from any reader (used by tests)
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rows = Vec::new();
        for record in csv_reader.deserialize() {
            let row: DataRow = record?;
            rows.push(row);
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted, deduplicated list of country codes present in the data
    pub fn countries(&self) -> Vec<String> {
        let mut countries: Vec<String> = self.rows.iter().map(|r| r.country.clone()).collect();
        countries.sort();
        countries.dedup();
        countries
    }

    /// All observations for one country, ordered by year
    pub fn series_for(&self, country: &str) -> Result<ObservationSeries, DatasetError> {
        let rows: Vec<DataRow> = self
            .rows
            .iter()
            .filter(|r| r.country == country)
            .cloned()
            .collect();

        ObservationSeries::new(country.to_string(), rows)
            .ok_or_else(|| DatasetError::UnknownCountry(country.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
country,year,co2_percap,cereal_yield,gni_per_cap,en_per_cap,pop_urb_aggl_perc,prot_area_perc,pop_growth_perc,urb_pop_growth_perc
USA,2000,19.6,5854.0,34890.0,8057.0,42.3,12.1,1.1,1.5
USA,2010,17.4,6988.0,47340.0,7164.0,43.7,13.0,0.8,1.2
BRA,2005,1.9,3200.0,3890.0,1122.0,36.9,,1.2,2.0
";

    #[test]
    fn test_load_from_reader() {
        let dataset = Dataset::load_from_reader(SAMPLE_CSV.as_bytes()).expect("parse");
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.countries(), vec!["BRA", "USA"]);
    }

    #[test]
    fn test_series_for_country() {
        let dataset = Dataset::load_from_reader(SAMPLE_CSV.as_bytes()).expect("parse");
        let series = dataset.series_for("USA").expect("series");

        assert_eq!(series.len(), 2);
        assert_eq!(series.start_year(), 2000);
        assert_eq!(series.end_year(), 2010);
        assert_eq!(series.value(2000, "cereal_yield"), Some(5854.0));
    }

    #[test]
    fn test_missing_cell_is_none() {
        let dataset = Dataset::load_from_reader(SAMPLE_CSV.as_bytes()).expect("parse");
        let series = dataset.series_for("BRA").expect("series");
        assert_eq!(series.value(2005, "prot_area_perc"), None);
    }

    #[test]
    fn test_unknown_country() {
        let dataset = Dataset::load_from_reader(SAMPLE_CSV.as_bytes()).expect("parse");
        let err = dataset.series_for("ZZZ").unwrap_err();
        assert!(matches!(err, DatasetError::UnknownCountry(_)));
    }
}
