// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use canopy_overlay::{
    Config, NodeFilter, OverlayController, OverlaySurface, PointerInput, Target, ViewStatus,
    Viewport, position,
};
use canopy_style::{Declarations, StyleRegistry};
use kurbo::{Point, Size, Vec2};

/// A surface that swallows every mutation, so controller benches measure
/// the state machine rather than a host.
struct NullSurface;

impl OverlaySurface for NullSurface {
    fn view_status(&self) -> ViewStatus {
        ViewStatus::Ready
    }
    fn ensure_element(&mut self, _: &str) {}
    fn set_content(&mut self, _: &str, _: &str) {}
    fn set_class(&mut self, _: &str, _: &str) {}
    fn add_class(&mut self, _: &str, _: &str) {}
    fn remove_class(&mut self, _: &str, _: &str) {}
    fn show(&mut self, _: &str) {}
    fn hide(&mut self, _: &str) {}
    fn place(&mut self, _: &str, _: Point) {}
    fn measure(&self, _: &str) -> Size {
        Size::new(120.0, 40.0)
    }
    fn viewport(&self) -> Viewport {
        Viewport {
            size: Size::new(1920.0, 1080.0),
            scroll: Vec2::ZERO,
        }
    }
    fn detach(&mut self, _: &str) {}
}

fn bench_filter_admit(c: &mut Criterion) {
    let filter: NodeFilter<u32> = NodeFilter::new()
        .include_types(["Rect", "Ellipse", "Text", "Path"])
        .exclude_types(["Group"]);
    let tags = ["Rect", "Ellipse", "Group", "Line", "Text"];

    let mut g = c.benchmark_group("filter");
    g.throughput(Throughput::Elements(tags.len() as u64));
    g.bench_function("admit_mixed_tags", |b| {
        b.iter(|| {
            for (i, tag) in tags.iter().enumerate() {
                let input = PointerInput::scene_move(
                    Point::new(i as f64, i as f64),
                    Some(Target::new(i as u32, tag)),
                );
                black_box(filter.admit(&input));
            }
        });
    });
    g.finish();
}

fn bench_position_solve(c: &mut Criterion) {
    let viewport = Viewport {
        size: Size::new(1920.0, 1080.0),
        scroll: Vec2::ZERO,
    };
    let overlay = Size::new(160.0, 48.0);
    let offset = Vec2::new(6.0, 6.0);

    let mut g = c.benchmark_group("position");
    g.throughput(Throughput::Elements(64 * 64));
    g.bench_function("solve_grid", |b| {
        b.iter(|| {
            for y in 0..64 {
                for x in 0..64 {
                    let pointer = Point::new(x as f64 * 30.0, y as f64 * 17.0);
                    black_box(position::solve(pointer, overlay, viewport, offset));
                }
            }
        });
    });
    g.finish();
}

fn bench_registry_lookup(c: &mut Criterion) {
    let mut registry = StyleRegistry::new();
    let sheet = registry.ensure_sheet("canopy-overlay", Vec::new);
    for i in 0..256 {
        registry.create_rule(
            sheet,
            &format!(".rule-{i}"),
            Declarations::new().with("color", "red"),
            "canopy-overlay--0",
        );
    }

    let mut g = c.benchmark_group("registry");
    g.bench_function("find_front_back_miss", |b| {
        b.iter(|| {
            // Newest rule sits at the front, oldest at the back.
            black_box(registry.find_rule(sheet, ".rule-255", "canopy-overlay--0"));
            black_box(registry.find_rule(sheet, ".rule-0", "canopy-overlay--0"));
            black_box(registry.find_rule(sheet, ".missing", "canopy-overlay--0"));
        });
    });
    g.finish();
}

fn bench_hover_dispatch(c: &mut Criterion) {
    let mut registry = StyleRegistry::new();
    let mut surface = NullSurface;
    let mut overlay = OverlayController::new(
        |node: &u32| format!("node #{node}"),
        Config::<u32>::default(),
        &mut registry,
    );
    overlay.on_view_ready(&mut surface).unwrap();

    let mut g = c.benchmark_group("controller");
    g.throughput(Throughput::Elements(128));
    g.bench_function("hover_move_alternating_nodes", |b| {
        b.iter(|| {
            for i in 0..128_u32 {
                let input = PointerInput::scene_move(
                    Point::new((i % 64) as f64 * 10.0, 40.0),
                    Some(Target::new(i % 2, "Rect")),
                );
                overlay.handle_input(&mut surface, &input).unwrap();
            }
        });
    });
    g.finish();
}

criterion_group!(
    benches,
    bench_filter_admit,
    bench_position_solve,
    bench_registry_lookup,
    bench_hover_dispatch
);
criterion_main!(benches);
