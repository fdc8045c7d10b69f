//! Scanner throughput benchmarks.
//! Run with: `cargo bench --package evmc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use evmc_lex::tokenize;

fn token_count(source: &str) -> usize {
    tokenize(source).expect("benchmark source must lex cleanly").len()
}

fn bench_simple_declaration(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    let source = "let x = 42;";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("simple_let", |b| b.iter(|| token_count(black_box(source))));
    group.finish();
}

fn bench_control_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_control_flow");
    let source = r#"
        let x = 0;
        while (x < 10) {
            if (x <= 5) {
                x = x + 1;
            } else {
                x = x - 1;
            }
        }
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("while_if_else", |b| b.iter(|| token_count(black_box(source))));
    group.finish();
}

fn bench_strings_and_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings_arrays");
    group.bench_function("string_literal", |b| {
        b.iter(|| token_count(black_box(r#"let s = "a benchmark string literal";"#)))
    });
    group.bench_function("array_literal", |b| {
        b.iter(|| token_count(black_box("let arr = [1, 2, 3, 4, 5, 6, 7, 8];")))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_simple_declaration,
    bench_control_flow,
    bench_strings_and_arrays
);
criterion_main!(benches);
