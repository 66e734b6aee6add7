//! Run the multi-year forecast for every country in the dataset
//!
//! Outputs one combined CSV of (country, year, co2_percap) rows.

use anyhow::{Context, Result};
use clap::Parser;
use emissions_forecast::forecast::DEFAULT_HORIZON_YEARS;
use emissions_forecast::{
    estimate_rates, initial_vector, Dataset, FallbackPolicy, ForecastConfig, ForecastEngine,
    ForecastResult, LinearModel, SELECTED_FEATURES,
};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Forecast per-capita CO2 emissions for every country")]
struct Args {
    /// Path to the cleaned historical dataset CSV
    #[arg(long, default_value = "data_cleaned.csv")]
    data: PathBuf,

    /// Path to the exported prediction model (JSON)
    #[arg(long, default_value = "model.json")]
    model: PathBuf,

    /// Number of years to forecast past each country's last observed year
    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
    years: u32,

    /// Output CSV path
    #[arg(long, default_value = "batch_forecast_output.csv")]
    output: PathBuf,
}

#[derive(Debug, Serialize)]
struct BatchRow {
    country: String,
    year: i32,
    co2_percap: f64,
}

fn forecast_country(
    dataset: &Dataset,
    model: &LinearModel,
    country: &str,
    years: u32,
) -> Result<ForecastResult> {
    let series = dataset.series_for(country)?;
    let rates = estimate_rates(&series, &SELECTED_FEATURES);
    if rates.is_empty() {
        log::warn!("{country}: no growth rates, projecting with zero growth");
    }

    let initial = initial_vector(&series, &SELECTED_FEATURES, FallbackPolicy::default());
    let engine = ForecastEngine::new(
        rates.clone(),
        ForecastConfig {
            start_year: rates.end_year(),
            horizon_years: years,
        },
    );
    Ok(engine.forecast(&initial, &SELECTED_FEATURES, model)?)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading dataset from {}...", args.data.display());
    let dataset = Dataset::load(&args.data)
        .with_context(|| format!("loading dataset {}", args.data.display()))?;
    let model = LinearModel::load(&args.model)
        .with_context(|| format!("loading model {}", args.model.display()))?;

    let countries = dataset.countries();
    println!(
        "Loaded {} rows, {} countries in {:?}",
        dataset.len(),
        countries.len(),
        start.elapsed()
    );

    println!("Running forecasts...");
    let forecast_start = Instant::now();

    // Run countries in parallel
    let results: Vec<(String, ForecastResult)> = countries
        .par_iter()
        .filter_map(|country| {
            match forecast_country(&dataset, &model, country, args.years) {
                Ok(result) => Some((country.clone(), result)),
                Err(e) => {
                    log::warn!("{country}: forecast failed: {e}");
                    None
                }
            }
        })
        .collect();

    println!(
        "Forecasts complete for {} countries in {:?}",
        results.len(),
        forecast_start.elapsed()
    );

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut row_count = 0usize;
    for (country, result) in &results {
        for point in &result.points {
            writer.serialize(BatchRow {
                country: country.clone(),
                year: point.year,
                co2_percap: point.co2_percap,
            })?;
            row_count += 1;
        }
    }
    writer.flush()?;

    println!("{} rows written to {}", row_count, args.output.display());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
