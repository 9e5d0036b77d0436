use serde::{Deserialize, Serialize};

use crate::core::{Rgba, Sample};
use crate::error::{ChartError, ChartResult};

use super::YAxisId;

/// Label of the built-in humidity dataset.
pub const HUMIDITY_LABEL: &str = "Humidity";
/// Label of the built-in temperature dataset.
pub const TEMPERATURE_LABEL: &str = "Temperature";

/// Configuration of one plotted series.
///
/// Field names in the serde representation follow the renderer contract
/// (`yAxisID`, `borderColor`, `lineTension`, ...), so the serialized form can
/// be handed to the chart component unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub label: String,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: YAxisId,
    #[serde(rename = "borderColor")]
    pub border_color: Rgba,
    #[serde(rename = "backgroundColor")]
    pub background_color: Rgba,
    pub fill: bool,
    #[serde(rename = "lineTension", default)]
    pub line_tension: f64,
    #[serde(rename = "borderWidth", default = "default_border_width")]
    pub border_width: f64,
    #[serde(rename = "pointRadius", default)]
    pub point_radius: f64,
    #[serde(default)]
    pub data: Vec<Sample>,
}

impl DatasetConfig {
    /// Creates a dataset with the default line style and no samples.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        y_axis_id: YAxisId,
        border_color: Rgba,
        background_color: Rgba,
    ) -> Self {
        Self {
            label: label.into(),
            y_axis_id,
            border_color,
            background_color,
            fill: false,
            line_tension: 0.0,
            border_width: default_border_width(),
            point_radius: 0.0,
            data: Vec::new(),
        }
    }

    /// Built-in humidity series preset.
    #[must_use]
    pub fn humidity() -> Self {
        Self::new(
            HUMIDITY_LABEL,
            YAxisId::Humidity,
            Rgba::rgba(151, 187, 205, 0.8),
            Rgba::rgba(151, 187, 205, 0.75),
        )
    }

    /// Built-in temperature series preset.
    #[must_use]
    pub fn temperature() -> Self {
        Self::new(
            TEMPERATURE_LABEL,
            YAxisId::Temperature,
            Rgba::rgba(255, 86, 86, 0.8),
            Rgba::rgba(255, 86, 86, 0.75),
        )
    }

    /// Enables area fill under the line.
    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Sets bezier line tension (0 draws straight segments).
    #[must_use]
    pub fn with_line_tension(mut self, line_tension: f64) -> Self {
        self.line_tension = line_tension;
        self
    }

    /// Sets line stroke width in pixels.
    #[must_use]
    pub fn with_border_width(mut self, border_width: f64) -> Self {
        self.border_width = border_width;
        self
    }

    /// Sets point marker radius in pixels (0 hides markers).
    #[must_use]
    pub fn with_point_radius(mut self, point_radius: f64) -> Self {
        self.point_radius = point_radius;
        self
    }

    /// Newest sample, if any.
    #[must_use]
    pub fn latest_sample(&self) -> Option<Sample> {
        self.data.last().copied()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.label.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset label must not be empty".to_owned(),
            ));
        }
        self.border_color.validate()?;
        self.background_color.validate()?;
        for (field, value) in [
            ("lineTension", self.line_tension),
            ("borderWidth", self.border_width),
            ("pointRadius", self.point_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "dataset `{}` field `{field}` must be finite and >= 0, got {value}",
                    self.label
                )));
            }
        }
        Ok(())
    }
}

fn default_border_width() -> f64 {
    2.0
}
