use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use vtween_core::{EaseKind, PlayStyle, Scheduler, Vec3};

fn populated(n: usize) -> Scheduler {
    let mut s = Scheduler::default();
    for i in 0..n {
        let ease = EaseKind::ALL[i % EaseKind::ALL.len()];
        s.tween_vec3(Vec3::ZERO, Vec3::new(i as f32, 1.0, -1.0), |v| {
            black_box(v);
        })
        .duration(2.0)
        .ease(ease)
        .play_style(PlayStyle::PingPong)
        .infinite(true);
    }
    s
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler_update");
    for n in [100usize, 1_000] {
        group.bench_function(format!("vec3_ping_pong_{n}"), |b| {
            b.iter_batched(
                || populated(n),
                |mut s| {
                    for _ in 0..60 {
                        s.update(1.0 / 60.0);
                    }
                    s
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_ease(c: &mut Criterion) {
    c.bench_function("ease_all_kinds", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for k in EaseKind::ALL {
                acc += vtween_core::ease(k, black_box(0.37));
            }
            acc
        })
    });
}

criterion_group!(benches, bench_update, bench_ease);
criterion_main!(benches);
