//! Gesture-end benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use decal_core::{Component, ComponentId, ComponentKind, Container, ImageContent, Size};
use decal_geometry::CoordinateTransform;
use decal_transform::TransformEngine;
use glam::DVec2;

fn component() -> Component {
    Component::new(
        ComponentId(0),
        ComponentKind::Image(ImageContent::new("logo.svg")),
        DVec2::new(400.0, 400.0),
        Size::new(100.0, 60.0),
    )
    .with_rotation(0.6)
}

fn drag_end(c: &mut Criterion) {
    let engine = TransformEngine::default();
    let container = Container::new(800.0, 800.0);
    let context = CoordinateTransform::uniform(0.5);
    let component = component();

    c.bench_function("drag_end", |b| {
        b.iter(|| {
            engine.drag_end(
                Some(black_box(&context)),
                black_box(DVec2::new(900.0, -35.0)),
                &component,
                &container,
            )
        })
    });
}

fn resize_end(c: &mut Criterion) {
    let engine = TransformEngine::default();
    let container = Container::new(800.0, 800.0);
    let component = component();

    c.bench_function("resize_end", |b| {
        b.iter(|| engine.resize_end(black_box(DVec2::new(2000.0, 300.0)), &component, &container))
    });
}

fn rotate_end(c: &mut Criterion) {
    let engine = TransformEngine::default();
    let container = Container::new(300.0, 120.0);
    let component = component();

    c.bench_function("rotate_end", |b| {
        b.iter(|| engine.rotate_end(black_box(1.2), &component, &container))
    });
}

criterion_group!(benches, drag_end, resize_end, rotate_end);
criterion_main!(benches);
