use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use receipt_surveycode::{check_digit, decode, encode, verify, Assembler, Receipt};

fn bench_codec(c: &mut Criterion) {
    c.bench_function("encode_u64", |b| b.iter(|| encode(black_box(4_515_227))));
    c.bench_function("decode_5", |b| b.iter(|| decode(black_box("9LYH7"))));
}

fn bench_check_digit(c: &mut Criterion) {
    c.bench_function("check_digit_11", |b| {
        b.iter(|| check_digit(black_box("CN6WNQ9LYH7")))
    });
    c.bench_function("verify_12", |b| b.iter(|| verify(black_box("CN6W-NQ9L-YH76"))));
}

fn bench_assemble(c: &mut Criterion) {
    let purchased = NaiveDate::from_ymd_opt(2024, 9, 1)
        .unwrap()
        .and_hms_opt(13, 47, 52)
        .unwrap();
    let assembler = Assembler::new();

    c.bench_function("assemble", |b| {
        let mut order_id = 0u64;
        b.iter(|| {
            order_id = (order_id + 1) % 100;
            let receipt = Receipt::new(155, order_id, purchased);
            assembler.assemble(black_box(&receipt))
        })
    });
}

criterion_group!(benches, bench_codec, bench_check_digit, bench_assemble);
criterion_main!(benches);
