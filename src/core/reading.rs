use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::sample::datetime_to_unix_seconds;
use crate::error::{ChartError, ChartResult};

/// One ambient sensor observation feeding both chart series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientReading {
    /// Unix seconds.
    pub time: f64,
    pub humidity_percent: f64,
    pub temperature_celsius: f64,
}

impl AmbientReading {
    #[must_use]
    pub fn new(time: f64, humidity_percent: f64, temperature_celsius: f64) -> Self {
        Self {
            time,
            humidity_percent,
            temperature_celsius,
        }
    }

    #[must_use]
    pub fn from_datetime(
        time: DateTime<Utc>,
        humidity_percent: f64,
        temperature_celsius: f64,
    ) -> Self {
        Self::new(
            datetime_to_unix_seconds(time),
            humidity_percent,
            temperature_celsius,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.time.is_finite() {
            return Err(ChartError::InvalidData(
                "reading time must be finite".to_owned(),
            ));
        }
        if !self.temperature_celsius.is_finite() {
            return Err(ChartError::InvalidData(
                "reading temperature must be finite".to_owned(),
            ));
        }
        if !self.humidity_percent.is_finite() || !(0.0..=100.0).contains(&self.humidity_percent) {
            return Err(ChartError::InvalidData(format!(
                "reading humidity must be finite and in [0, 100], got {}",
                self.humidity_percent
            )));
        }
        Ok(())
    }
}
