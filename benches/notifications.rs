// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use toastdeck::ui::notifications::{ActionConfig, NotificationConfig, Notifier};

fn sample_config(index: usize) -> NotificationConfig {
    NotificationConfig::status_titled("success", "Image saved")
        .with_text(format!("photo-{index}.png"))
        .with_action(ActionConfig::new("Open", "/open"))
        .with_stack(if index % 2 == 0 { "left" } else { "right" })
}

fn notifications_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("notifications");

    group.bench_function("send_100", |b| {
        b.iter_batched(
            Notifier::new,
            |mut notifier| {
                for index in 0..100 {
                    black_box(notifier.send(sample_config(index)));
                }
                notifier
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("send_and_drain_100", |b| {
        b.iter_batched(
            || {
                let mut notifier = Notifier::new();
                for index in 0..100 {
                    notifier.send(sample_config(index));
                }
                notifier
            },
            |mut notifier| {
                black_box(notifier.run_until_idle());
                notifier
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("render_html", |b| {
        let mut notifier = Notifier::new();
        for index in 0..20 {
            notifier.send(sample_config(index));
        }
        b.iter(|| black_box(notifier.document().to_string()));
    });

    group.finish();
}

criterion_group!(benches, notifications_benchmark);
criterion_main!(benches);
