// Criterion benchmarks for TRACE Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trace_match::core::{
    filters::filter_by_term,
    generator::parse_candidates,
    scoring::{compute_match_score, score_response_text},
    static_candidates,
};

fn skill_list(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}-{}", prefix, i)).collect()
}

fn bench_match_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_match_score");

    for size in [5, 50, 500].iter() {
        let candidate = skill_list("skill", *size);
        let required = skill_list("skill", *size / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| compute_match_score(black_box(&candidate), black_box(&required)));
        });
    }

    group.finish();
}

fn bench_response_text(c: &mut Criterion) {
    let text = "I have experience leading a team to solve hard problems in Python and React. ".repeat(20);

    c.bench_function("score_response_text", |b| {
        b.iter(|| score_response_text(black_box(&text)));
    });
}

fn bench_static_filter(c: &mut Criterion) {
    c.bench_function("static_filter_react", |b| {
        b.iter(|| filter_by_term(static_candidates(), black_box("react")));
    });
}

fn bench_parse_generated(c: &mut Criterion) {
    let record = r#"{"id":"x","name":"Jane Doe","role":"Go Developer","bio":"Builds APIs.","skills":["Go","gRPC","Docker"],"experience":"5 years","location":"Remote","score":90,"isVerified":true}"#;
    let raw = format!("```json\n[{}]\n```", vec![record; 10].join(","));

    c.bench_function("parse_generated_candidates", |b| {
        b.iter(|| parse_candidates(black_box(&raw)));
    });
}

criterion_group!(
    benches,
    bench_match_score,
    bench_response_text,
    bench_static_filter,
    bench_parse_generated
);
criterion_main!(benches);
