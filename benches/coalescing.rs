//! Performance benchmarks for the dual-tree core.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dual_tree::{Forest, HistoryStack, MoveCoalescer, MoveEvent, TreeNode, TreePair};
use std::time::{Duration, Instant};

/// Build a forest of `roots` subtrees, each `depth` levels deep with `width`
/// children per node.
fn build_forest(roots: usize, depth: usize, width: usize) -> Forest<u64> {
    fn subtree(depth: usize, width: usize, seed: u64) -> TreeNode<u64> {
        let mut node = TreeNode::new(format!("node-{seed}"), seed).with_expanded(true);
        if depth > 0 {
            node = node.with_children(
                (0..width)
                    .map(|i| subtree(depth - 1, width, seed * 10 + i as u64))
                    .collect(),
            );
        }
        node
    }
    (0..roots).map(|i| subtree(depth, width, i as u64)).collect()
}

/// Benchmark snapshot capture (deep copy) at varying tree sizes.
fn bench_capture(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_capture");

    for depth in [2, 4, 6] {
        let left = build_forest(4, depth, 3);
        let right = build_forest(4, depth, 3);
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, _| {
            b.iter(|| black_box(TreePair::capture(&left, &right).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark a full notify/notify/poll burst cycle.
fn bench_burst_cycle(c: &mut Criterion) {
    let forest = build_forest(4, 3, 3);
    let node = forest[0].clone();

    c.bench_function("burst_notify_poll", |b| {
        // Zero window so every poll flushes.
        let mut coalescer: MoveCoalescer<u64, u64> = MoveCoalescer::with_window(Duration::ZERO);
        let now = Instant::now();
        b.iter(|| {
            coalescer.notify_left(MoveEvent::new(node.clone(), forest.clone()), now);
            coalescer.notify_right(MoveEvent::new(node.clone(), forest.clone()), now);
            black_box(coalescer.poll(now))
        });
    });
}

/// Benchmark history push/undo/redo round trips.
fn bench_history(c: &mut Criterion) {
    let left = build_forest(4, 4, 3);
    let right = build_forest(4, 4, 3);
    let snapshot = TreePair::capture(&left, &right).unwrap();

    c.bench_function("history_push_undo_redo", |b| {
        let mut history: HistoryStack<u64, u64> = HistoryStack::new();
        b.iter(|| {
            history.push(snapshot.clone());
            let restored = history.undo(snapshot.clone()).unwrap();
            black_box(history.redo(restored));
            // Drain so the stacks do not grow across iterations.
            history.undo(snapshot.clone());
        });
    });
}

criterion_group!(benches, bench_capture, bench_burst_cycle, bench_history);
criterion_main!(benches);
