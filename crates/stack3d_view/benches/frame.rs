use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use stack3d_view::{AnimationRequest, Scene, Turn};
use std::f32::consts::FRAC_PI_2;

fn frame_benchmark(c: &mut Criterion) {
    let mut scene = Scene::default();
    let ids: Vec<_> = (0..64)
        .map(|i| {
            let id = scene.create_object();
            let object = scene.object_mut(id).unwrap();
            object.set_visible(true);
            object.set_position(Vec3::new((i % 8) as f32, (i / 8) as f32, 0.0));
            id
        })
        .collect();

    let mut time = 0.0f32;
    c.bench_function("frame_64_objects", |b| {
        b.iter(|| {
            time += 1.0 / 60.0;
            black_box(scene.frame(black_box(time), 16.0 / 9.0));
        })
    });

    c.bench_function("frame_with_requests", |b| {
        b.iter(|| {
            time += 1.0 / 60.0;
            scene.submit(AnimationRequest::Turn(Turn::Clockwise));
            for id in &ids {
                scene.submit(AnimationRequest::Rotate {
                    object: *id,
                    angle: FRAC_PI_2,
                    axis: Vec3::Y,
                });
            }
            black_box(scene.frame(black_box(time), 16.0 / 9.0));
        })
    });
}

criterion_group!(benches, frame_benchmark);
criterion_main!(benches);
