use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::DatasetConfig;

/// Configuration of one line chart: its datasets in insertion order.
///
/// Dataset labels are unique within a chart; lookups and data updates address
/// datasets by label. The serde representation is the renderer contract
/// `{ "datasets": [ ... ] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartConfigWire", into = "ChartConfigWire")]
pub struct LineChartConfig {
    datasets: IndexMap<String, DatasetConfig>,
}

impl LineChartConfig {
    /// Creates a chart with no datasets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            datasets: IndexMap::new(),
        }
    }

    /// Appends a dataset, rejecting duplicate labels.
    pub fn add_dataset(&mut self, dataset: DatasetConfig) -> ChartResult<()> {
        dataset.validate()?;
        if self.datasets.contains_key(&dataset.label) {
            return Err(ChartError::DuplicateDataset(dataset.label.clone()));
        }
        self.datasets.insert(dataset.label.clone(), dataset);
        Ok(())
    }

    /// Removes a dataset by label, preserving the order of the rest.
    pub fn remove_dataset(&mut self, label: &str) -> Option<DatasetConfig> {
        self.datasets.shift_remove(label)
    }

    #[must_use]
    pub fn dataset(&self, label: &str) -> Option<&DatasetConfig> {
        self.datasets.get(label)
    }

    pub(super) fn dataset_mut(&mut self, label: &str) -> ChartResult<&mut DatasetConfig> {
        self.datasets
            .get_mut(label)
            .ok_or_else(|| ChartError::UnknownDataset(label.to_owned()))
    }

    /// Datasets in insertion order.
    pub fn datasets(&self) -> impl Iterator<Item = &DatasetConfig> {
        self.datasets.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for dataset in self.datasets.values() {
            dataset.validate()?;
        }
        Ok(())
    }
}

/// The default chart is the original two-series layout: humidity then
/// temperature, both with empty data.
impl Default for LineChartConfig {
    fn default() -> Self {
        let mut config = Self::new();
        for dataset in [DatasetConfig::humidity(), DatasetConfig::temperature()] {
            config.datasets.insert(dataset.label.clone(), dataset);
        }
        config
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChartConfigWire {
    datasets: Vec<DatasetConfig>,
}

impl TryFrom<ChartConfigWire> for LineChartConfig {
    type Error = ChartError;

    fn try_from(wire: ChartConfigWire) -> ChartResult<Self> {
        let mut config = Self::new();
        for dataset in wire.datasets {
            config.add_dataset(dataset)?;
        }
        Ok(config)
    }
}

impl From<LineChartConfig> for ChartConfigWire {
    fn from(config: LineChartConfig) -> Self {
        Self {
            datasets: config.datasets.into_values().collect(),
        }
    }
}
