// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wildmatch::WildMatch;

// local imports
use globmatch::{match_any, matches};

criterion_group!(benches, bench_wildcards, bench_classes, bench_sets);
criterion_main!(benches);

const GROUP: &str = "matching";

fn bench_wildcards(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{GROUP}:wildcards"));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let variants = [
        ("short", "_*", "_TEST", true),
        ("short", "_*", "TEST", false),
        ("long", "_*", "_TEST_SOME_VERY_VERY_LONG_NAME", true),
        ("long", "SOME_VERY_VERY_LONG_PREFIX_*", "SOME_VERY_VERY_LONG_PREFIX_AND_SOMEWHAT", true),
        ("long", "SOME_VERY_VERY_LONG_PREFIX_*", "TEST_SOME_VERY_VERY_LONG_NAME", false),
        ("backtrack", "*a*a*a*a*b", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", false),
        ("suffix", "*.log", "/var/log/some/deeply/nested/directory/app.log", true),
    ];

    for (name, pattern, input, expected) in variants {
        let param = format!("{}:{}:{}", name, if expected { "pos" } else { "neg" }, input.len());
        c.throughput(Throughput::Bytes(input.len() as u64));

        assert_eq!(matches(pattern, input), expected);
        c.bench_function(BenchmarkId::new("globmatch", &param), |b| {
            b.iter(|| matches(black_box(pattern), black_box(input)))
        });

        let wild = WildMatch::new(pattern);
        assert_eq!(wild.matches(input), expected);
        c.bench_function(BenchmarkId::new("wildmatch", &param), |b| {
            b.iter(|| black_box(&wild).matches(black_box(input)))
        });
    }
}

fn bench_classes(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{GROUP}:classes"));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let variants = [
        ("range", "Letter[0-9]", "Letter5", true),
        ("set", "[CB]at", "cat", false),
        ("mixed", "[a-zA-Z_][a-zA-Z0-9_]*", "some_identifier_42", true),
        ("negated", "!*.[ch]", "main.zig", true),
    ];

    for (name, pattern, input, expected) in variants {
        assert_eq!(matches(pattern, input), expected);
        c.bench_function(BenchmarkId::new("globmatch", name), |b| {
            b.iter(|| matches(black_box(pattern), black_box(input)))
        });
    }
}

fn bench_sets(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{GROUP}:sets"));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let patterns = ["*.zig", "*.c", "*.h", "*.cpp", "*.hpp", "*.rs", "build.*", "!*"];

    for (name, input, expected) in [("first", "main.zig", true), ("none", "script.py", false)] {
        assert_eq!(match_any(patterns, input), expected);
        c.bench_function(BenchmarkId::new("match-any", name), |b| {
            b.iter(|| match_any(black_box(patterns), black_box(input)))
        });
    }
}
