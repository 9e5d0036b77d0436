use ambient_chart::Sample;
use ambient_chart::core::{CHARTJS_TIME_FORMAT, TIME_LABEL_FORMAT, format_time_label};
use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};

#[test]
fn wire_constant_matches_original_token_string() {
    assert_eq!(CHARTJS_TIME_FORMAT, "DD/MM/YYYY HH:mm");
    assert_eq!(TIME_LABEL_FORMAT, "%d/%m/%Y %H:%M");
}

#[test]
fn formats_epoch_start() {
    assert_eq!(format_time_label(0.0).expect("label"), "01/01/1970 00:00");
}

#[test]
fn formats_sample_time_from_datetime() {
    let when = Utc.with_ymd_and_hms(2021, 6, 15, 9, 30, 0).unwrap();
    let sample = Sample::from_datetime(when, 21.5);

    assert_relative_eq!(sample.time, when.timestamp() as f64);
    assert_eq!(
        format_time_label(sample.time).expect("label"),
        "15/06/2021 09:30"
    );
}

#[test]
fn fractional_seconds_round_to_the_same_minute() {
    let when = Utc.with_ymd_and_hms(2021, 6, 15, 9, 30, 12).unwrap();
    let time = when.timestamp() as f64 + 0.25;
    assert_eq!(format_time_label(time).expect("label"), "15/06/2021 09:30");
}

#[test]
fn rejects_non_finite_time() {
    assert!(format_time_label(f64::NAN).is_err());
    assert!(format_time_label(f64::INFINITY).is_err());
}

#[test]
fn rejects_out_of_range_time() {
    assert!(format_time_label(1.0e30).is_err());
}
