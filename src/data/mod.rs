//! Data module - CSV loading

mod loader;

pub use loader::{load_rows, load_series, LoaderError};
