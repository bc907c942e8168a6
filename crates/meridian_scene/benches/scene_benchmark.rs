//! # Scene Storage Benchmark
//!
//! Throughput of the identity/storage hot paths: entity churn, component
//! create/overwrite/remove, and mask-filtered linear scans.
//!
//! Run with: `cargo bench --package meridian_scene`

// Benchmarks don't need docs and may have intentionally unused code
#![allow(missing_docs)]
#![allow(dead_code)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meridian_scene::{ComponentStore, EventLoop, Scene, SceneTag};

struct BenchTag;

impl SceneTag for BenchTag {
    const MAX_COMPONENT_TYPES: usize = 8;
    type Mask = u8;
}

#[derive(Default, Clone, Copy)]
struct Position {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Default, Clone, Copy)]
struct Velocity {
    x: f32,
    y: f32,
    z: f32,
}

fn scene_with_stores() -> Scene<BenchTag> {
    let mut scene = Scene::new(Arc::new(EventLoop::new()));
    scene.register_store(ComponentStore::<BenchTag, Position>::new().unwrap());
    scene.register_store(ComponentStore::<BenchTag, Velocity>::new().unwrap());
    scene
}

/// Benchmark: entity create/remove churn.
fn bench_entity_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("entity_churn");

    for count in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut scene = scene_with_stores();
                let ids: Vec<_> = (0..count).map(|_| scene.create_entity()).collect();
                for id in ids {
                    scene.remove_entity(black_box(id));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark: component create + overwrite on a fixed population.
fn bench_component_create(c: &mut Criterion) {
    c.bench_function("component_create_10k", |b| {
        b.iter(|| {
            let mut scene = scene_with_stores();
            for i in 0..10_000 {
                let e = scene.create_entity();
                scene
                    .create_component(
                        e,
                        Position {
                            x: i as f32,
                            y: 0.0,
                            z: 0.0,
                        },
                    )
                    .unwrap();
                scene
                    .create_component(
                        e,
                        Velocity {
                            x: 1.0,
                            y: 0.0,
                            z: 0.0,
                        },
                    )
                    .unwrap();
            }
            scene.entity_ids().len()
        });
    });
}

/// Benchmark: mask-filtered linear scan over the sparse slots.
fn bench_mask_scan(c: &mut Criterion) {
    let mut scene = scene_with_stores();
    for i in 0..100_000 {
        let e = scene.create_entity();
        scene
            .create_component(
                e,
                Position {
                    x: i as f32,
                    y: 0.0,
                    z: 0.0,
                },
            )
            .unwrap();
        if i % 2 == 0 {
            scene
                .create_component(
                    e,
                    Velocity {
                        x: 1.0,
                        y: 1.0,
                        z: 1.0,
                    },
                )
                .unwrap();
        }
    }

    let moving = scene.mask_of::<(Position, Velocity)>().unwrap();

    c.bench_function("mask_scan_100k", |b| {
        b.iter(|| {
            let mut sum = 0.0_f32;
            let positions = scene.store::<Position>().unwrap().slots();
            for (index, record) in scene.entities().iter().enumerate() {
                if record.valid && (record.mask & moving) == moving {
                    sum += positions[index].x;
                }
            }
            black_box(sum)
        });
    });
}

criterion_group!(
    benches,
    bench_entity_churn,
    bench_component_create,
    bench_mask_scan
);
criterion_main!(benches);
