use chrono::DateTime;

use crate::error::{ChartError, ChartResult};

/// Time-format token string carried in the wire contract for the renderer's
/// time axis (moment.js tokens).
pub const CHARTJS_TIME_FORMAT: &str = "DD/MM/YYYY HH:mm";

/// chrono equivalent of [`CHARTJS_TIME_FORMAT`].
pub const TIME_LABEL_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Formats a sample time (unix seconds, UTC) into an axis label.
pub fn format_time_label(time: f64) -> ChartResult<String> {
    if !time.is_finite() {
        return Err(ChartError::InvalidData(
            "label time must be finite".to_owned(),
        ));
    }
    let millis = (time * 1_000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(ChartError::InvalidData(format!(
            "label time {time} is out of datetime range"
        )));
    }
    let datetime = DateTime::from_timestamp_millis(millis as i64).ok_or_else(|| {
        ChartError::InvalidData(format!("label time {time} is out of datetime range"))
    })?;
    Ok(datetime.format(TIME_LABEL_FORMAT).to_string())
}
