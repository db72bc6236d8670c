//! Performance benchmarks for the drag gesture
//!
//! Measures delta computation, a full press/move/release cycle through the
//! mock host, and widget rendering.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dragnum::adapters::mock::MockPointerCapture;
use dragnum::gesture::{
    compute_delta, Axis, GestureController, GestureState, MovementSample, PointerButton,
};
use dragnum::traits::ControlId;
use dragnum::widgets::DragControlWidget;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Generate a jittery pointer path
fn generate_samples(count: usize) -> Vec<MovementSample> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            MovementSample::new((t * 0.37).sin() * 4.0, (t * 0.91).cos() * 3.0)
        })
        .collect()
}

fn bench_compute_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_delta");
    let samples = generate_samples(1_000);
    group.throughput(Throughput::Elements(samples.len() as u64));

    for axis in [Axis::Horizontal, Axis::Vertical] {
        group.bench_with_input(BenchmarkId::from_parameter(axis), &samples, |b, samples| {
            b.iter(|| {
                let total: f64 = samples
                    .iter()
                    .map(|s| compute_delta(black_box(*s), axis))
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

fn bench_gesture_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_cycle");

    for moves in [1, 10, 100, 1_000].iter() {
        let samples = generate_samples(*moves);
        group.throughput(Throughput::Elements(*moves as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_moves", moves)),
            &samples,
            |b, samples| {
                b.iter(|| {
                    let mut host = MockPointerCapture::new();
                    let mut controller =
                        GestureController::new(ControlId::new(1), Axis::Vertical);
                    controller.press(&mut host, PointerButton::Primary);
                    let mut total = 0.0;
                    for sample in samples {
                        total += controller.movement(&host, Some(*sample)).unwrap_or(0.0);
                    }
                    controller.release(&mut host);
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

fn bench_widget_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("widget_render");
    let area = Rect::new(0, 0, 8, 2);

    for axis in [Axis::Horizontal, Axis::Vertical] {
        group.bench_function(BenchmarkId::from_parameter(axis), |b| {
            let mut buf = Buffer::empty(area);
            b.iter(|| {
                DragControlWidget::new(axis, GestureState::Dragging).render(area, &mut buf);
                black_box(&buf);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_delta,
    bench_gesture_cycle,
    bench_widget_render,
);

criterion_main!(benches);
