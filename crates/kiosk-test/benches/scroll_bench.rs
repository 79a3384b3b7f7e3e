//! Benchmarks for scroll snapping and the timer queue

use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kiosk_core::{MonoTime, Scheduler, TimerKind, TimerQueue};
use kiosk_scroll::{ease_in_out_quad, interpolate, plan_snap, Animation};
use kiosk_test::{GestureChaos, GestureChaosConfig, ScriptedTransport, Simulation};

fn bench_easing(c: &mut Criterion) {
    c.bench_function("ease_in_out_quad", |b| {
        let mut p = 0.0f64;
        b.iter(|| {
            p = (p + 0.013) % 1.0;
            black_box(ease_in_out_quad(black_box(p)))
        })
    });

    c.bench_function("interpolate", |b| {
        b.iter(|| black_box(interpolate(black_box(760.0), black_box(800.0), black_box(0.37))))
    });
}

fn bench_plan_snap(c: &mut Criterion) {
    c.bench_function("plan_snap", |b| {
        let mut offset = 0.0f64;
        b.iter(|| {
            offset = (offset + 37.5) % 3200.0;
            black_box(plan_snap(black_box(offset), 800.0, 5.0))
        })
    });
}

fn bench_animation_frames(c: &mut Criterion) {
    let animation = Animation::new(
        1150.0,
        800.0,
        MonoTime::ZERO,
        Duration::from_millis(400),
    );

    c.bench_function("animation_25_frames", |b| {
        b.iter(|| {
            for i in 1..=25u64 {
                black_box(animation.frame_at(MonoTime::from_millis(i * 16)));
            }
        })
    });
}

fn bench_timer_queue(c: &mut Criterion) {
    c.bench_function("timer_queue_debounce_replace", |b| {
        let mut queue = TimerQueue::new();
        let mut pending = queue.schedule_after(Duration::from_millis(200), TimerKind::SnapDebounce);
        b.iter(|| {
            queue.cancel(pending);
            pending = queue.schedule_after(Duration::from_millis(200), TimerKind::SnapDebounce);
            black_box(pending)
        })
    });

    c.bench_function("timer_queue_frame_cycle", |b| {
        let mut queue = TimerQueue::new();
        let mut now = 0u64;
        b.iter(|| {
            queue.request_frame();
            now += 16;
            queue.advance_to(MonoTime::from_millis(now));
            black_box(queue.pop_due())
        })
    });
}

fn bench_gesture_chaos(c: &mut Criterion) {
    let config = GestureChaosConfig {
        bursts: 5,
        ..Default::default()
    };

    c.bench_function("gesture_chaos_5_bursts", |b| {
        b.iter(|| {
            let transport = Arc::new(ScriptedTransport::new());
            let mut sim = Simulation::with_transport(transport).unwrap();
            sim.start();
            black_box(GestureChaos::new(config.clone(), 11).run(&mut sim))
        })
    });
}

criterion_group!(
    benches,
    bench_easing,
    bench_plan_snap,
    bench_animation_frames,
    bench_timer_queue,
    bench_gesture_chaos,
);
criterion_main!(benches);
