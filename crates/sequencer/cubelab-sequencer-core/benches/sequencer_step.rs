use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cubelab_sequencer_core::{generate, plan_visible_nodes, NodeLayout, StepSequencer};

fn bench_autoplay_tick(c: &mut Criterion) {
    c.bench_function("autoplay_tick_16ms", |b| {
        let mut seq = StepSequencer::default();
        seq.toggle_play();
        b.iter(|| {
            if !seq.is_playing() {
                seq.reset();
                seq.toggle_play();
            }
            black_box(seq.tick(Duration::from_millis(16)));
        });
    });
}

fn bench_full_plan(c: &mut Criterion) {
    let coords = generate();
    let layout = NodeLayout::default();
    c.bench_function("plan_visible_nodes_last_step", |b| {
        b.iter(|| black_box(plan_visible_nodes(&coords, 26, &layout)));
    });
}

criterion_group!(benches, bench_autoplay_tick, bench_full_plan);
criterion_main!(benches);
