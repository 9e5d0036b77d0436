use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the y axis a dataset is bound to.
///
/// The wire form is the plain axis-id string the renderer matches against its
/// axis definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum YAxisId {
    /// Left humidity axis, `y-axis-h`.
    Humidity,
    /// Right temperature axis, `y-axis-t`.
    Temperature,
    /// Any other axis id.
    Custom(String),
}

impl YAxisId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Humidity => "y-axis-h",
            Self::Temperature => "y-axis-t",
            Self::Custom(id) => id,
        }
    }
}

impl fmt::Display for YAxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for YAxisId {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "y-axis-h" => Self::Humidity,
            "y-axis-t" => Self::Temperature,
            _ => Self::Custom(raw),
        }
    }
}

impl From<YAxisId> for String {
    fn from(id: YAxisId) -> Self {
        id.as_str().to_owned()
    }
}
