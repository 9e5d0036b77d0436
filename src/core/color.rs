use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// RGBA color with 0..=255 integer channels and a 0..=1 alpha.
///
/// This matches the unit used by the renderer contract, which carries colors
/// as CSS `rgba(r,g,b,a)` strings. The serde representation is that string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Rgba {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Renders the CSS `rgba(r,g,b,a)` form consumed by the renderer.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::InvalidColor(format!(
                "alpha must be finite and in [0, 1], got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

impl FromStr for Rgba {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let body = trimmed
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| {
                ChartError::InvalidColor(format!("expected `rgba(r,g,b,a)`, got `{trimmed}`"))
            })?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(ChartError::InvalidColor(format!(
                "expected 4 components in `{trimmed}`, got {}",
                parts.len()
            )));
        }

        let channel = |part: &str| -> ChartResult<u8> {
            part.parse::<u8>().map_err(|_| {
                ChartError::InvalidColor(format!("channel `{part}` must be an integer in [0, 255]"))
            })
        };
        let alpha = parts[3].parse::<f64>().map_err(|_| {
            ChartError::InvalidColor(format!("alpha `{}` must be a number", parts[3]))
        })?;

        let color = Self::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha);
        color.validate()?;
        Ok(color)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.css())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
