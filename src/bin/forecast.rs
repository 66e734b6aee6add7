//! Forecast per-capita CO2 emissions for a single country
//!
//! Prints the estimated growth rates and the multi-year forecast table;
//! optionally writes the forecast series to CSV and answers a one-shot
//! prediction for a specific target year.

use anyhow::{bail, Context, Result};
use clap::Parser;
use emissions_forecast::forecast::{DEFAULT_HORIZON_YEARS, MAX_HORIZON_YEARS};
use emissions_forecast::{
    estimate_rates, initial_vector, project_single, Dataset, FallbackPolicy, ForecastConfig,
    ForecastEngine, LinearModel, Predictor, SELECTED_FEATURES,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Forecast per-capita CO2 emissions for one country")]
struct Args {
    /// Path to the cleaned historical dataset CSV
    #[arg(long, default_value = "data_cleaned.csv")]
    data: PathBuf,

    /// Path to the exported prediction model (JSON)
    #[arg(long, default_value = "model.json")]
    model: PathBuf,

    /// Country code (e.g. USA, BRA, WLD)
    #[arg(long)]
    country: String,

    /// Number of years to forecast past the last observed year
    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
    years: u32,

    /// One-shot prediction for this target year instead of year-by-year output
    #[arg(long)]
    target_year: Option<i32>,

    /// Write the forecast series to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dataset = Dataset::load(&args.data)
        .with_context(|| format!("loading dataset {}", args.data.display()))?;
    let model = LinearModel::load(&args.model)
        .with_context(|| format!("loading model {}", args.model.display()))?;

    let series = dataset.series_for(&args.country)?;
    let rates = estimate_rates(&series, &SELECTED_FEATURES);

    println!(
        "Growth rates (CAGR) for {} from {} to {}:",
        args.country,
        rates.start_year(),
        rates.end_year()
    );
    for feature in SELECTED_FEATURES {
        if let Some(rate) = rates.get(feature) {
            println!("  {:<22} {:+.2}%", feature, rate * 100.0);
        }
    }
    if rates.is_empty() {
        log::warn!(
            "no growth rates could be computed for {}; projecting with zero growth",
            args.country
        );
    }

    let initial = initial_vector(&series, &SELECTED_FEATURES, FallbackPolicy::default());

    // One-shot prediction, mirroring the dashboard's "predict" action
    if let Some(target_year) = args.target_year {
        if rates.is_empty() {
            bail!("cannot compute prediction due to missing growth rates");
        }
        let horizon = target_year - rates.end_year();
        if horizon <= 0 || horizon as u32 > MAX_HORIZON_YEARS {
            bail!(
                "target year must be within {} years after {}",
                MAX_HORIZON_YEARS,
                rates.end_year()
            );
        }
        let projected = project_single(&initial, &SELECTED_FEATURES, &rates, horizon);
        let predicted = model.predict(&projected)?;
        println!(
            "\nPredicted CO2 per capita for {} in {}: {:.2} metric tons",
            args.country, target_year, predicted
        );
        return Ok(());
    }

    // Multi-year forecast
    let engine = ForecastEngine::new(
        rates.clone(),
        ForecastConfig {
            start_year: rates.end_year(),
            horizon_years: args.years,
        },
    );
    let result = engine.forecast(&initial, &SELECTED_FEATURES, &model)?;

    println!("\nForecasted CO2 per capita for {}:", args.country);
    println!("{:<6} {:>12}", "Year", "CO2/capita");
    for point in &result.points {
        println!("{:<6} {:>12.4}", point.year, point.co2_percap);
    }

    if let Some(output) = &args.output {
        let mut writer = csv::Writer::from_path(output)
            .with_context(|| format!("creating {}", output.display()))?;
        for point in &result.points {
            writer.serialize(point)?;
        }
        writer.flush()?;
        println!("\nForecast written to {}", output.display());
    }

    Ok(())
}
