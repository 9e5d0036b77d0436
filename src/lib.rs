//! ambient-chart-rs: typed line-chart configuration for ambient telemetry.
//!
//! This crate models the configuration contract of a Chart.js-style line
//! chart plotting humidity and temperature readings over time, including the
//! JSON wire shape the external renderer consumes.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{DatasetConfig, LineChartConfig, YAxisId};
pub use core::{AmbientReading, Rgba, Sample};
pub use error::{ChartError, ChartResult};
