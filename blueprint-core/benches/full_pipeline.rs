//! Full pipeline benchmarks
//!
//! Benchmarks the complete extraction pipeline: discover -> extract
//! blocks -> parse statements -> replay.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs;
use tempfile::TempDir;

use blueprint_core::extract_schema;

fn create_migrations(tables: usize) -> TempDir {
    let dir = TempDir::new().unwrap();

    for i in 0..tables {
        let create = format!(
            r#"<?php
Schema::create('table_{i}', function (Blueprint $table) {{
    $table->id();
    $table->string('name')->nullable();
    $table->string('slug')->unique();
    $table->integer('rank')->default(0);
    $table->foreign('owner_id')->references('id')->on('users')->onDelete('cascade');
}});
"#
        );
        fs::write(
            dir.path().join(format!("2024_01_{i:02}_000000_create_table_{i}.php")),
            create,
        )
        .unwrap();

        let alter = format!(
            r#"<?php
Schema::table('table_{i}', function (Blueprint $table) {{
    $table->dropColumn('rank');
    $table->string('name', 255);
    $table->timestamp('archived_at')->nullable();
}});
"#
        );
        fs::write(
            dir.path().join(format!("2024_02_{i:02}_000000_alter_table_{i}.php")),
            alter,
        )
        .unwrap();
    }

    dir
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for tables in [10usize, 50, 200] {
        let dir = create_migrations(tables);
        group.bench_with_input(BenchmarkId::new("extract", tables), &dir, |b, dir| {
            b.iter(|| extract_schema(dir.path()).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
