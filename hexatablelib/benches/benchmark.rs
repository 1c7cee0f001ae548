use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use criterion::{Criterion, criterion_group, criterion_main};
use hexatablelib::HexTable;
use rand::Rng;

fn bench_table_fill(c: &mut Criterion) {
    let payload: Vec<u8> = rand::rng()
        .sample_iter(rand::distr::StandardUniform)
        .take(1024 * 1024)
        .collect();

    c.bench_function("hextable_load_raw_1mb", |b| {
        b.iter(|| {
            let mut table = HexTable::new("bench");
            table.load_raw(std::hint::black_box(&payload));
            std::hint::black_box(&table);
        });
    });

    let encoded = STANDARD.encode(&payload);

    c.bench_function("hextable_load_base64_1mb", |b| {
        b.iter(|| {
            let mut table = HexTable::new("bench");
            let res = table.load_base64(std::hint::black_box(&encoded));
            std::hint::black_box(res.is_ok());
            std::hint::black_box(&table);
        });
    });
}

criterion_group!(
    name = hexatablelib_benches;
    config = Criterion::default().sample_size(20);
    targets = bench_table_fill
);
criterion_main!(hexatablelib_benches);
