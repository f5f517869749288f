use super::with_kind;
use crate::config::Kind;
use anyhow::bail;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;
use std::sync::Barrier;
use std::thread::scope;
use std::time::{Duration, Instant};
use tickid::Id;

#[derive(Debug, Serialize)]
struct Report {
    kind: String,
    threads: usize,
    count: usize,
    unique: usize,
    elapsed_ms: f64,
    ids_per_sec: f64,
}

/// Generates `count` identifiers across `threads` threads sharing the
/// process-wide generator, then checks that every one is unique.
pub fn bench(
    out: &mut impl Write,
    kind: Kind,
    threads: usize,
    count: usize,
    json: bool,
) -> anyhow::Result<()> {
    let (elapsed, unique) = with_kind!(kind, ID => run(threads, count, ID::generate));

    #[allow(clippy::cast_precision_loss)]
    let report = Report {
        kind: format!("{kind:?}").to_lowercase(),
        threads,
        count,
        unique,
        elapsed_ms: elapsed.as_secs_f64() * 1_000.0,
        ids_per_sec: count as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
    };
    tracing::info!(?kind, threads, count, ?elapsed, "bench finished");

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{}: {} ids on {} threads in {:.2} ms ({:.0} ids/s), {} unique",
            report.kind, count, threads, report.elapsed_ms, report.ids_per_sec, unique
        )?;
    }

    if unique != count {
        bail!("{} duplicate identifiers generated", count - unique);
    }
    Ok(())
}

fn run<ID: Id>(threads: usize, count: usize, next: fn() -> ID) -> (Duration, usize) {
    let base = count / threads;
    let extra = count % threads;
    let barrier = Barrier::new(threads + 1);

    let (start, batches) = scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let n = base + usize::from(i < extra);
                let barrier = &barrier;
                s.spawn(move || {
                    let mut ids = Vec::with_capacity(n);
                    barrier.wait();
                    for _ in 0..n {
                        ids.push(next());
                    }
                    ids
                })
            })
            .collect();
        barrier.wait();
        let start = Instant::now();
        let batches: Vec<Vec<ID>> = handles
            .into_iter()
            .map(|h| h.join().unwrap_or_default())
            .collect();
        (start, batches)
    });
    let elapsed = start.elapsed();

    let mut seen = HashSet::with_capacity(count);
    for id in batches.into_iter().flatten() {
        seen.insert(id);
    }
    (elapsed, seen.len())
}
