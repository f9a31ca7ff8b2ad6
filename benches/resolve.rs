//! Benchmarks for token resolution and validation.

use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tokenset::discovery::load_fixture;
use tokenset::{
    create_component_classes, get_token_value, tokens_in_category, validate_design_system,
    validate_token_path, Padding, Size, TokenCategory, Variant,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

// -- Resolution benchmarks --

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    group.bench_function("get_token_value_flat", |b| {
        b.iter(|| get_token_value(black_box("colors.primary-foreground")).unwrap())
    });

    group.bench_function("get_token_value_nested", |b| {
        b.iter(|| get_token_value(black_box("typography.fontSize.lg")).unwrap())
    });

    group.bench_function("validate_token_path_miss", |b| {
        b.iter(|| validate_token_path(black_box("typography.fontSize.huge")))
    });

    group.bench_function("tokens_in_category_typography", |b| {
        b.iter(|| tokens_in_category(black_box(TokenCategory::Typography)))
    });

    group.finish();
}

// -- Derivation and validation benchmarks --

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("create_component_classes", |b| {
        b.iter(|| {
            create_component_classes(
                black_box("card shadow"),
                Some(Variant::Success),
                Some(Size::Lg),
                Some(Padding::Md),
            )
            .unwrap()
        })
    });

    let home = load_fixture(&fixtures_dir().join("home.components.yaml")).unwrap();
    group.bench_function("validate_design_system_home", |b| {
        b.iter(|| validate_design_system(black_box(&home)))
    });

    group.finish();
}

criterion_group!(benches, bench_resolution, bench_validation);
criterion_main!(benches);
