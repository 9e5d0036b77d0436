use std::cmp::Ordering;

use tracing::{debug, trace, warn};

use crate::core::{AmbientReading, Sample};
use crate::error::{ChartError, ChartResult};

use super::{HUMIDITY_LABEL, LineChartConfig, TEMPERATURE_LABEL};

impl LineChartConfig {
    /// Replaces a dataset's samples after canonicalization.
    pub fn set_samples(&mut self, label: &str, samples: Vec<Sample>) -> ChartResult<()> {
        let original_count = samples.len();
        let samples = canonicalize_samples(label, samples);
        debug!(
            label,
            original_count,
            canonical_count = samples.len(),
            "set dataset samples"
        );
        self.dataset_mut(label)?.data = samples;
        Ok(())
    }

    /// Appends a single sample.
    pub fn append_sample(&mut self, label: &str, sample: Sample) -> ChartResult<()> {
        let data = &mut self.dataset_mut(label)?.data;
        data.push(sample);
        trace!(label, count = data.len(), "append sample");
        Ok(())
    }

    /// Updates a dataset using realtime-update semantics:
    /// - appends when `sample.time` is newer than the latest sample
    /// - replaces the latest sample when `sample.time` is equal
    /// - rejects out-of-order updates (`sample.time` older than latest sample)
    pub fn update_sample(&mut self, label: &str, sample: Sample) -> ChartResult<()> {
        if !sample.time.is_finite() {
            return Err(ChartError::InvalidData(
                "sample time must be finite".to_owned(),
            ));
        }

        let data = &mut self.dataset_mut(label)?.data;
        match data
            .last()
            .map_or(Ordering::Greater, |last| sample.time.total_cmp(&last.time))
        {
            Ordering::Less => {
                return Err(ChartError::InvalidData(
                    "sample update time must be >= latest sample time".to_owned(),
                ));
            }
            Ordering::Equal => {
                // Equal implies a latest sample exists; empty data maps to Greater.
                if let Some(last) = data.last_mut() {
                    *last = sample;
                }
            }
            Ordering::Greater => data.push(sample),
        }

        trace!(label, count = data.len(), "update sample");
        Ok(())
    }

    /// Fans one ambient reading out into the humidity and temperature datasets.
    ///
    /// A failed append leaves the chart untouched: both datasets must resolve
    /// before the first sample is committed.
    pub fn append_reading(&mut self, reading: AmbientReading) -> ChartResult<()> {
        reading.validate()?;
        for label in [HUMIDITY_LABEL, TEMPERATURE_LABEL] {
            if self.dataset(label).is_none() {
                return Err(ChartError::UnknownDataset(label.to_owned()));
            }
        }
        self.append_sample(
            HUMIDITY_LABEL,
            Sample::new(reading.time, reading.humidity_percent),
        )?;
        self.append_sample(
            TEMPERATURE_LABEL,
            Sample::new(reading.time, reading.temperature_celsius),
        )?;
        debug!(time = reading.time, "append ambient reading");
        Ok(())
    }

    /// Drops all samples of a dataset, keeping its style.
    pub fn clear_samples(&mut self, label: &str) -> ChartResult<()> {
        let data = &mut self.dataset_mut(label)?.data;
        let dropped = data.len();
        data.clear();
        debug!(label, dropped, "clear dataset samples");
        Ok(())
    }
}

fn canonicalize_samples(label: &str, mut samples: Vec<Sample>) -> Vec<Sample> {
    let original_len = samples.len();
    samples.retain(|sample| sample.is_finite());
    samples.sort_by(|a, b| a.time.total_cmp(&b.time));

    let mut deduped: Vec<Sample> = Vec::with_capacity(samples.len());
    let mut duplicate_count = 0_usize;
    for sample in samples {
        if let Some(last) = deduped.last_mut() {
            if sample.time.total_cmp(&last.time) == Ordering::Equal {
                *last = sample;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(sample);
    }

    let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
    if filtered_count > 0 || duplicate_count > 0 {
        warn!(
            label,
            filtered_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized samples on set_samples"
        );
    }
    deduped
}
