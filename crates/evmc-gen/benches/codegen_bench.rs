//! Code generation throughput benchmarks.
//! Run with: `cargo bench --package evmc-gen`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use evmc_gen::{emit_assembly, emit_bytecode};

fn compile(source: &str) -> (evmc_par::ast::Program, evmc_sem::SymbolTable) {
    let tokens = evmc_lex::tokenize(source).expect("benchmark source must lex cleanly");
    let program = evmc_par::parse(tokens).expect("benchmark source must parse cleanly");
    let symbols = evmc_sem::analyze(&program).expect("benchmark source must analyze cleanly");
    (program, symbols)
}

fn bench_bytecode_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("codegen_bytecode");
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
    let (program, symbols) = compile(source);
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("while_if_else", |b| {
        b.iter(|| emit_bytecode(black_box(&program), black_box(&symbols)).unwrap())
    });
    group.finish();
}

fn bench_assembly_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("codegen_assembly");
    let source = "let arr = [1, 2, 3, 4, 5, 6, 7, 8];";
    let (program, symbols) = compile(source);
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("array_literal", |b| {
        b.iter(|| emit_assembly(black_box(&program), black_box(&symbols)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_bytecode_emission, bench_assembly_emission);
criterion_main!(benches);
