use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fsa::prelude::*;

fn ending_in_zero() -> Dfa {
    Dfa::new(
        ["q0", "q1"],
        ["0", "1"],
        "q0",
        [
            ("q0", "0", "q0"),
            ("q0", "1", "q1"),
            ("q1", "1", "q1"),
            ("q1", "0", "q0"),
        ],
        ["q0"],
    )
    .unwrap()
}

fn contains_11_or_101(closure: EpsilonClosure) -> Nfa {
    Nfa::builder()
        .with_states(["q1", "q2", "q3", "q4"])
        .with_alphabet(["0", "1"])
        .with_start("q1")
        .with_finals(["q4"])
        .with_transitions([
            NTransition::new("q1", "0", ["q1"]),
            NTransition::new("q1", "1", ["q1", "q2"]),
            NTransition::new("q2", "0", ["q3"]),
            NTransition::new("q2", Symbol::Epsilon, ["q3"]),
            NTransition::new("q3", "1", ["q4"]),
            NTransition::new("q4", "0", ["q4"]),
            NTransition::new("q4", "1", ["q4"]),
        ])
        .with_epsilon_closure(closure)
        .build()
        .unwrap()
}

fn accepts_benchmark(c: &mut Criterion) {
    let long = "1001".repeat(2_500) + "0";
    let dfa = ending_in_zero();
    c.bench_function("dfa accepts 10k", |b| {
        b.iter(|| dfa.accepts(black_box(long.as_str())))
    });

    let nfa = contains_11_or_101(EpsilonClosure::SinglePass);
    c.bench_function("nfa accepts 10k", |b| {
        b.iter(|| nfa.accepts(black_box(long.as_str())))
    });
    let nfa = contains_11_or_101(EpsilonClosure::Transitive);
    c.bench_function("nfa accepts 10k transitive", |b| {
        b.iter(|| nfa.accepts(black_box(long.as_str())))
    });

    let language: Language = (0..500).map(|i| format!("{i:b}0")).collect();
    c.bench_function("dfa accepts language", |b| {
        b.iter(|| dfa.accepts_language(black_box(&language)))
    });
    c.bench_function("dfa accepts language par", |b| {
        b.iter(|| dfa.accepts_language_par(black_box(&language)))
    });
}

criterion_group! {
  name = benches;
  config = Criterion::default().significance_level(0.1).sample_size(20);
  targets = accepts_benchmark
}
criterion_main!(benches);
