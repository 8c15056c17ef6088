//! Per-frame camera path: pointer rotation, held-key movement and view
//! composition.
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tabletop::camera::{
    projection_matrix, CameraState, ProjectionMode, ProjectionParams,
};
use tabletop::input::{InputEvent, KeyAction};
use tabletop::options::Options;
use tabletop::renderer::{RecordingSink, TraceSink};
use tabletop::util::frame_timing::ManualTime;
use tabletop::ViewComposer;

fn rotate_benchmark(c: &mut Criterion) {
    let mut camera = CameraState::default();
    let _ = c.bench_function("camera_rotate", |b| {
        b.iter(|| camera.rotate(black_box(0.3), black_box(-0.2)));
    });
}

fn projection_benchmark(c: &mut Criterion) {
    let params = ProjectionParams::default();
    let mut group = c.benchmark_group("projection");
    for mode in [ProjectionMode::Perspective, ProjectionMode::Orthographic] {
        let _ = group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| {
                projection_matrix(
                    black_box(mode),
                    black_box(1.25),
                    black_box(80.0),
                    &params,
                )
            });
        });
    }
    group.finish();
}

fn frame_benchmark(c: &mut Criterion) {
    let time = ManualTime::new();
    let mut composer: ViewComposer<TraceSink, ManualTime> =
        ViewComposer::with_time_source(&Options::default(), time.clone())
            .with_sink(TraceSink::default());
    for action in [KeyAction::MoveForward, KeyAction::MoveRight] {
        composer.handle_input(InputEvent::Key {
            action,
            pressed: true,
        });
    }

    let _ = c.bench_function("prepare_view_two_keys_held", |b| {
        b.iter(|| {
            time.advance(1.0 / 144.0);
            composer.handle_input(InputEvent::CursorMoved {
                x: black_box(500.0),
                y: black_box(400.0),
            });
            black_box(composer.prepare_view())
        });
    });
}

fn scene_submit_benchmark(c: &mut Criterion) {
    let time = ManualTime::new();
    let mut composer: ViewComposer<RecordingSink, ManualTime> =
        ViewComposer::with_time_source(&Options::default(), time)
            .with_sink(RecordingSink::default());

    let _ = c.bench_function("still_life_frame", |b| {
        b.iter(|| {
            if let Some(sink) = composer.sink_mut() {
                sink.clear();
            }
            black_box(composer.frame())
        });
    });
}

criterion_group!(
    benches,
    rotate_benchmark,
    projection_benchmark,
    frame_benchmark,
    scene_submit_benchmark
);
criterion_main!(benches);
