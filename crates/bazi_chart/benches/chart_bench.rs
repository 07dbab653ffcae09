use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bazi_calendar::{BirthInput, Gender};
use bazi_chart::Chart;

fn bench_chart_build(c: &mut Criterion) {
    let input = BirthInput::new(
        NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
        14,
        Gender::Male,
    )
    .unwrap();

    c.bench_function("chart_from_birth", |b| {
        b.iter(|| Chart::from_birth(black_box(input)))
    });
}

criterion_group!(benches, bench_chart_build);
criterion_main!(benches);
