use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shroud::Secret;

const TOKEN: &str = "12341234-1234-1234-1234-123412341234";

fn marshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("marshal");
    let plain = TOKEN.to_string();
    let wrapped = Secret::new(TOKEN.to_string());

    group.bench_with_input(BenchmarkId::new("string", "plain"), &plain, |b, value| {
        b.iter(|| serde_json::to_string(value).unwrap())
    });
    group.bench_with_input(
        BenchmarkId::new("string", "secret"),
        &wrapped,
        |b, value| b.iter(|| serde_json::to_string(value).unwrap()),
    );
    group.finish();
}

fn unmarshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("unmarshal");
    let input = format!("\"{TOKEN}\"");

    group.bench_with_input(BenchmarkId::new("string", "plain"), &input, |b, input| {
        b.iter(|| serde_json::from_str::<String>(input).unwrap())
    });
    group.bench_with_input(BenchmarkId::new("string", "secret"), &input, |b, input| {
        b.iter(|| serde_json::from_str::<Secret<String>>(input).unwrap())
    });
    group.finish();
}

criterion_group!(benches, marshal, unmarshal);
criterion_main!(benches);
