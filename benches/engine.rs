//! Benchmarks for intent recognition and application.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use intently::editor::{EditorBuffer, apply_intent};
use intently::intent::{EngineConfig, IntentEngine, ManualClock};

fn bench_feed_non_phrase(c: &mut Criterion) {
    let keys: Vec<u32> = "the quick brown fox jumps over the lazy dog"
        .bytes()
        .map(u32::from)
        .collect();
    c.bench_function("feed_non_phrase", |b| {
        b.iter(|| {
            let mut engine =
                IntentEngine::with_clock(EngineConfig::default(), ManualClock::new(0)).unwrap();
            for (i, &key) in keys.iter().enumerate() {
                black_box(engine.feed_at(key, i as u64 * 40));
            }
        });
    });
}

fn bench_feed_repeated_phrase(c: &mut Criterion) {
    c.bench_function("feed_repeated_phrase", |b| {
        b.iter(|| {
            let mut engine =
                IntentEngine::with_clock(EngineConfig::default(), ManualClock::new(0)).unwrap();
            for round in 0..50u64 {
                let t = round * 460;
                black_box(engine.feed_at(u32::from(b'd'), t));
                black_box(engine.feed_at(u32::from(b'd'), t + 40));
            }
        });
    });
}

fn bench_apply_delete_word(c: &mut Criterion) {
    let text = "alpha beta gamma delta ".repeat(200);
    let mut engine =
        IntentEngine::with_clock(EngineConfig::default(), ManualClock::new(0)).unwrap();
    engine.feed_at(u32::from(b'd'), 0);
    let intent = engine.feed_at(u32::from(b'd'), 50).unwrap();
    c.bench_function("apply_delete_word", |b| {
        b.iter(|| {
            let mut buffer = EditorBuffer::from_text(black_box(&text));
            apply_intent(&mut buffer, &intent)
        });
    });
}

criterion_group!(
    benches,
    bench_feed_non_phrase,
    bench_feed_repeated_phrase,
    bench_apply_delete_word
);
criterion_main!(benches);
