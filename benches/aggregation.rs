use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rainfall_analyser::RawColumnLayout;
use rainfall_analyser::processor::aggregator::collect_monthly;
use rainfall_analyser::processor::codec;

fn raw_export(years: i32) -> String {
    let mut text = String::from("Product code,Station,Year,Month,Day,Rainfall,Period,Quality\n");
    for year in 1900..1900 + years {
        for month in 1..=12u32 {
            for day in 1..=28u32 {
                text.push_str(&format!(
                    "IDCJAC0009,031205,{},{},{},{:.1},1,Y\n",
                    year,
                    month,
                    day,
                    ((day * 7 + month) % 60) as f64 / 3.0
                ));
            }
        }
    }
    text
}

fn bench_aggregation(c: &mut Criterion) {
    let text = raw_export(100);

    c.bench_function("aggregate 100 years of daily rows", |b| {
        b.iter(|| collect_monthly(black_box(text.as_bytes()), RawColumnLayout::default()).unwrap())
    });

    let records = collect_monthly(text.as_bytes(), RawColumnLayout::default()).unwrap();
    c.bench_function("encode 1200 monthly records", |b| {
        b.iter(|| codec::encode_to_string(black_box(&records)).unwrap())
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
