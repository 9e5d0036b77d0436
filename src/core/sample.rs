use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One plotted point: unix-seconds time and the measured value.
///
/// The wire form is the renderer's point object `{ "x": time, "y": value }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(rename = "x")]
    pub time: f64,
    #[serde(rename = "y")]
    pub value: f64,
}

impl Sample {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }

    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, value: f64) -> Self {
        Self {
            time: datetime_to_unix_seconds(time),
            value,
        }
    }

    pub fn from_decimal(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            time: datetime_to_unix_seconds(time),
            value: decimal_to_f64(value, "value")?,
        })
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.time.is_finite() && self.value.is_finite()
    }
}

/// Converts a datetime into fractional unix seconds.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    let seconds = time.timestamp() as f64;
    let subsec = f64::from(time.timestamp_subsec_millis()) / 1_000.0;
    seconds + subsec
}

pub(crate) fn decimal_to_f64(value: Decimal, field: &str) -> ChartResult<f64> {
    value.to_f64().filter(|v| v.is_finite()).ok_or_else(|| {
        ChartError::InvalidData(format!("{field} `{value}` is not representable as f64"))
    })
}
