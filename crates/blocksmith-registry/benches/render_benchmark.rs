//! Render and export benchmarks.

use blocksmith_blocks::Tokens;
use blocksmith_codegen::WrapperEmitter;
use blocksmith_core::{ComponentKind, TokenSet};
use blocksmith_registry::catalog;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn render_catalog(c: &mut Criterion) {
    let registry = catalog::builtin().unwrap();
    c.bench_function("render_catalog_defaults", |b| {
        b.iter(|| {
            for entry in registry.list_all() {
                black_box(entry.render(black_box(&entry.defaults)).unwrap());
            }
        })
    });
}

fn merge_and_render(c: &mut Criterion) {
    let tokens = Tokens::defaults(ComponentKind::Features);
    let patch = TokenSet::new().with("items", "Fast,Secure,Scalable,Typed,Tested,Portable");
    c.bench_function("merge_and_render_features", |b| {
        b.iter(|| black_box(&tokens).merge(black_box(&patch)).unwrap().render())
    });
}

fn emit_bundle(c: &mut Criterion) {
    let emitter = WrapperEmitter::hero().unwrap();
    let markup = Tokens::defaults(ComponentKind::Hero).render();
    c.bench_function("emit_hero_bundle", |b| {
        b.iter(|| emitter.emit(black_box(&markup)).unwrap())
    });
}

criterion_group!(benches, render_catalog, merge_and_render, emit_bundle);
criterion_main!(benches);
