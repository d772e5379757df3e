use catamm_layout::config::{Config, parse_config};
use catamm_layout::layout::compute_layout;
use catamm_layout::render::render_svg;
use catamm_layout::scene::Scene;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn configs() -> Vec<(&'static str, Config)> {
    vec![
        ("dark_150dpi", Config::default()),
        (
            "light_300dpi",
            parse_config(r#"{ "theme": "light", "render": { "dpi": 300 } }"#)
                .expect("bench config"),
        ),
        (
            "no_pips",
            parse_config(r#"{ "board": { "showPips": false } }"#).expect("bench config"),
        ),
    ]
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let scene = Scene::sample();
    for (name, config) in configs() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, data| {
            b.iter(|| {
                let layout = compute_layout(black_box(&scene), data);
                black_box(layout.hexes.len());
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let scene = Scene::sample();
    for (name, config) in configs() {
        let layout = compute_layout(&scene, &config);
        group.bench_with_input(BenchmarkId::from_parameter(name), &layout, |b, data| {
            b.iter(|| {
                let svg = render_svg(black_box(data));
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    for (name, config) in configs() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, data| {
            b.iter(|| {
                let layout = compute_layout(&Scene::sample(), black_box(data));
                let svg = render_svg(&layout);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_layout, bench_render, bench_end_to_end
);
criterion_main!(benches);
