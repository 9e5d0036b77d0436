use ambient_chart::{DatasetConfig, Rgba, YAxisId};

#[test]
fn builder_setters_override_line_style() {
    let dataset = DatasetConfig::humidity()
        .with_fill(true)
        .with_line_tension(0.4)
        .with_border_width(1.0)
        .with_point_radius(3.0);

    assert!(dataset.fill);
    assert_eq!(dataset.line_tension, 0.4);
    assert_eq!(dataset.border_width, 1.0);
    assert_eq!(dataset.point_radius, 3.0);
    dataset.validate().expect("styled dataset is valid");
}

#[test]
fn custom_dataset_carries_custom_axis_id() {
    let dataset = DatasetConfig::new(
        "Pressure",
        YAxisId::Custom("y-axis-p".to_owned()),
        Rgba::rgb(120, 120, 120),
        Rgba::rgba(120, 120, 120, 0.5),
    );

    assert_eq!(dataset.y_axis_id.as_str(), "y-axis-p");
    dataset.validate().expect("custom dataset is valid");
}

#[test]
fn validate_rejects_empty_label() {
    let dataset = DatasetConfig::new(
        "",
        YAxisId::Humidity,
        Rgba::rgb(0, 0, 0),
        Rgba::rgb(0, 0, 0),
    );
    assert!(dataset.validate().is_err());
}

#[test]
fn validate_rejects_negative_line_style_values() {
    assert!(DatasetConfig::humidity().with_border_width(-1.0).validate().is_err());
    assert!(DatasetConfig::humidity().with_point_radius(f64::NAN).validate().is_err());
    assert!(DatasetConfig::humidity().with_line_tension(-0.1).validate().is_err());
}

#[test]
fn validate_rejects_out_of_range_color_alpha() {
    let dataset = DatasetConfig::new(
        "Broken",
        YAxisId::Humidity,
        Rgba::rgba(0, 0, 0, 2.0),
        Rgba::rgb(0, 0, 0),
    );
    assert!(dataset.validate().is_err());
}

#[test]
fn latest_sample_tracks_last_entry() {
    use ambient_chart::Sample;

    let mut dataset = DatasetConfig::temperature();
    assert!(dataset.latest_sample().is_none());

    dataset.data.push(Sample::new(1.0, 21.5));
    dataset.data.push(Sample::new(2.0, 22.0));
    assert_eq!(dataset.latest_sample(), Some(Sample::new(2.0, 22.0)));
}
