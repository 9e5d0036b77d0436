use serde::{Deserialize, Serialize};

use crate::core::CHARTJS_TIME_FORMAT;
use crate::error::{ChartError, ChartResult};

use super::LineChartConfig;

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope around the chart configuration.
///
/// Carries the time-axis format tokens next to the chart object, matching the
/// original artifact where the format lived beside the dataset literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub time_format: String,
    pub chart: LineChartConfig,
}

impl LineChartConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            time_format: CHARTJS_TIME_FORMAT.to_owned(),
            chart: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart contract v1: {e}"))
        })
    }

    /// Parses either the bare chart object or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(chart) = serde_json::from_str::<LineChartConfig>(input) {
            return Ok(chart);
        }
        let payload: ChartConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart json payload: {e}"))
        })?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.chart)
    }
}
