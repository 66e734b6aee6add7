//! Historical dataset structures and CSV loading

mod data;
pub mod loader;

pub use data::{DataRow, ObservationSeries, SELECTED_FEATURES};
pub use loader::{Dataset, DatasetError};
