use ambient_chart::api::HUMIDITY_LABEL;
use ambient_chart::{LineChartConfig, Rgba, Sample};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_rgba_parse(c: &mut Criterion) {
    c.bench_function("rgba_css_parse", |b| {
        b.iter(|| {
            let _: Rgba = black_box("rgba(151,187,205,0.8)")
                .parse()
                .expect("valid css color");
        })
    });
}

fn bench_set_samples_10k(c: &mut Criterion) {
    let samples: Vec<Sample> = (0..10_000)
        .map(|i| {
            let t = f64::from(10_000 - i);
            Sample::new(t, 50.0 + (t * 0.01).sin() * 10.0)
        })
        .collect();

    c.bench_function("set_samples_10k_reverse_order", |b| {
        b.iter(|| {
            let mut chart = LineChartConfig::default();
            chart
                .set_samples(HUMIDITY_LABEL, black_box(samples.clone()))
                .expect("set samples");
        })
    });
}

fn bench_contract_serialize(c: &mut Criterion) {
    let mut chart = LineChartConfig::default();
    let samples: Vec<Sample> = (0..1_000)
        .map(|i| Sample::new(f64::from(i), 20.0 + f64::from(i % 10)))
        .collect();
    chart
        .set_samples(HUMIDITY_LABEL, samples)
        .expect("set samples");

    c.bench_function("contract_v1_serialize_1k_samples", |b| {
        b.iter(|| {
            let _ = black_box(&chart)
                .to_json_contract_v1_pretty()
                .expect("serialize contract");
        })
    });
}

criterion_group!(
    benches,
    bench_rgba_parse,
    bench_set_samples_10k,
    bench_contract_serialize
);
criterion_main!(benches);
