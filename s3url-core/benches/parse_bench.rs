//! Benchmarks for connection string parsing.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use s3url_core::{ConnectionConfig, EnvExpander, MapEnvSource, parse};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("plain", |b| {
        b.iter(|| parse(black_box("s3://accessKey123:secretKey123@endpoint/bucket/prefix/")))
    });

    group.bench_function("bracketed_credentials", |b| {
        b.iter(|| parse(black_box("s3://[ac=@\\c:e/ss]:[k=?e&y@123]@endpoint/bucket/prefix/")))
    });

    group.bench_function("query_params", |b| {
        b.iter(|| {
            parse(black_box(
                "s3://key:secret@minio:9000/bucket/a/b/c?region=eu-west-1&addressing=path&anyPrefix=1",
            ))
        })
    });

    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let expander = EnvExpander::with_source(
        MapEnvSource::new()
            .set("S3_ACCESS_KEY", "AKIA")
            .set("S3_SECRET_KEY", "wJal/rXU+tn@F"),
    );

    c.bench_function("parse_expanded", |b| {
        b.iter(|| {
            ConnectionConfig::parse_expanded(
                black_box("s3://${S3_ACCESS_KEY}:[${S3_SECRET_KEY}]@${S3_HOST:-s3.local}/bucket/"),
                &expander,
            )
        })
    });
}

criterion_group!(benches, bench_parse, bench_expand);
criterion_main!(benches);
