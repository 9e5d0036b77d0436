pub mod axis;
pub mod chart_config;
pub mod dataset_config;
pub mod json_contract;

mod data_controller;

pub use axis::YAxisId;
pub use chart_config::LineChartConfig;
pub use dataset_config::{DatasetConfig, HUMIDITY_LABEL, TEMPERATURE_LABEL};
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};
