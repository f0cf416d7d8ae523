use arithmos_rs::ast::{Evaluator, Parser};
use arithmos_rs::{lexer, run, run_batch, Config};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::*;

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let expr = "2 + 3 * 4";
    let tokens = lexer::lex(expr, "<bench>").unwrap();
    let ast = Parser::new(&tokens, "<bench>").parse().unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("run_arithmetic", |b| {
        b.iter(|| run(black_box(expr), "<bench>"))
    });

    group.bench_function("lex_arithmetic", |b| {
        b.iter(|| lexer::lex(black_box(expr), "<bench>"))
    });

    group.bench_function("preparsed_arithmetic", |b| {
        b.iter(|| Evaluator::new().evaluate(black_box(&ast)))
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2 + 3 * 4))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let expr = "(10 + 20) * 3 / (4 - 1) + (5.5 - 2) * ((7))";
    let tokens = lexer::lex(expr, "<bench>").unwrap();
    let ast = Parser::new(&tokens, "<bench>").parse().unwrap();

    group.bench_function("run_complex_arithmetic", |b| {
        b.iter(|| run(black_box(expr), "<bench>"))
    });

    group.bench_function("parse_complex_arithmetic", |b| {
        b.iter(|| Parser::new(black_box(&tokens), "<bench>").parse())
    });

    group.bench_function("preparsed_complex_arithmetic", |b| {
        b.iter(|| Evaluator::new().evaluate(black_box(&ast)))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });
}

/// Benchmark many independent lines, sequential vs rayon
fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");

    let lines: Vec<String> = (0..1_000)
        .map(|i| format!("({i} + 1) * {i} / 7 - -{i}"))
        .collect();
    let inputs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let config = Config::default();

    group.bench_function("sequential_batch", |b| {
        b.iter(|| {
            inputs
                .iter()
                .map(|line| run(black_box(line), "<bench>"))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("parallel_batch", |b| {
        b.iter(|| run_batch(black_box(&inputs), &config))
    });
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_batch
);
criterion_main!(benches);
