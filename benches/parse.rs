use criterion::{criterion_group, criterion_main, Criterion};
use geoarrow_wkt::parse_wkt;

fn create_data() -> String {
    // A 1000-vertex ring around the unit circle
    let coords: Vec<String> = (0..=1000)
        .map(|i| {
            let angle = (i % 1000) as f64 / 1000.0 * std::f64::consts::TAU;
            format!("{} {}", angle.cos(), angle.sin())
        })
        .collect();
    format!("POLYGON (({}))", coords.join(", "))
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let polygon = create_data();
    let collection = format!(
        "GEOMETRYCOLLECTION (POINT Z (1 2 3), {polygon}, MULTIPOINT ((1 1), (2 2)))"
    );

    c.bench_function("parse POLYGON", |b| {
        b.iter(|| {
            let _ = parse_wkt(&polygon).unwrap();
        })
    });

    c.bench_function("parse GEOMETRYCOLLECTION", |b| {
        b.iter(|| {
            let _ = parse_wkt(&collection).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
