// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Times the [`RingQueue`] operations against a [`VecDeque`] that is kept at the same
//! capacity by hand, eg:
//!
//! ```text
//! cargo run --release --bin tq_ops_perf -- --capacity 1000 --count 100000 --op prepend
//! ```
//!
//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use std::{collections::VecDeque, fmt::Display, hint::black_box, time::Duration};

use clap::{Parser, ValueEnum};
use strum::IntoEnumIterator;
use tracked_queue::{CommonResult, RevisionTracker, RingQueue, Tracker, TracingConfig,
                    Untracked, WriterConfig, ok, setup_default_miette_global_report_handler,
                    timed, tracing_config_options::DEFAULT_LOG_FILE_NAME,
                    try_initialize_logging_global};

/// `mimalloc` is a replacement for the default global allocator, so the numbers below
/// don't depend on the quirks of the system allocator.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

#[derive(Debug, Parser)]
#[command(bin_name = "tq_ops_perf")]
#[command(about = "Time RingQueue operations against a bounded VecDeque")]
#[command(version)]
#[command(next_line_help = true)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[arg(long, short = 'c', default_value_t = 1_000, help = "Capacity of both queues")]
    pub capacity: usize,

    #[arg(
        long,
        short = 'n',
        default_value_t = 1_000,
        help = "Number of operations to time, for each kind of operation"
    )]
    pub count: usize,

    #[arg(long, short = 'o', value_enum, default_value_t = Op::All)]
    pub op: Op,

    #[arg(
        long,
        short = 't',
        help = "Report reads and writes to a RevisionTracker, instead of not tracking them"
    )]
    pub tracked: bool,

    #[arg(
        long,
        short = 'l',
        help = "Log app output to a file named `tracked_queue.log` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(long, requires = "enable_logging", help = "Use this log file path instead")]
    pub log_file: Option<String>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    ValueEnum,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Op {
    All,
    PushBack,
    PushFront,
    PopBack,
    PopFront,
    Append,
    Prepend,
}

impl Op {
    /// [`Op::All`] expands to every other variant.
    fn expand(self) -> Vec<Op> {
        match self {
            Op::All => Op::iter().filter(|it| *it != Op::All).collect(),
            it => vec![it],
        }
    }
}

#[derive(Debug)]
struct Measurement {
    op: Op,
    count: usize,
    ring_queue: Duration,
    vec_deque: Duration,
}

impl Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ratio = self.ring_queue.as_secs_f64() / self.vec_deque.as_secs_f64().max(1e-9);
        write!(
            f,
            "{op:<12} x{count:<10} RingQueue: {rq:>12?}  VecDeque: {vd:>12?}  ratio: {ratio:.2}",
            op = self.op.to_string(),
            count = self.count,
            rq = self.ring_queue,
            vd = self.vec_deque,
        )
    }
}

fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    let cli_arg = CLIArg::parse();

    if cli_arg.enable_logging {
        let log_file = cli_arg
            .log_file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());
        try_initialize_logging_global(TracingConfig {
            writer_config: WriterConfig::File(log_file),
            level_filter: tracing_core::LevelFilter::DEBUG,
        })?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    for op in cli_arg.op.expand() {
        let measurement = if cli_arg.tracked {
            measure(op, &cli_arg, RevisionTracker::new)?
        } else {
            measure(op, &cli_arg, || Untracked)?
        };
        tracing::debug!(message = "Measured", measurement = ?measurement);
        println!("{measurement}");
    }

    if cli_arg.enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    ok!()
}

/// Time `count` runs of `op` on both queues. Anything that the operation needs to find
/// in the queue (eg: elements to pop) is put there before the clock starts.
fn measure<K: Tracker>(
    op: Op,
    cli_arg: &CLIArg,
    make_tracker: impl Fn() -> K,
) -> CommonResult<Measurement> {
    let (capacity, count) = (cli_arg.capacity, cli_arg.count);

    let mut ring_queue = RingQueue::with_tracker(capacity, make_tracker())?;
    let mut vec_deque = BoundedVecDeque::new(capacity);

    let (ring_queue_time, vec_deque_time) = match op {
        Op::PushBack => {
            let (_, rq) = timed!({
                for it in 0..count {
                    black_box(ring_queue.push_back(it));
                }
            });
            let (_, vd) = timed!({
                for it in 0..count {
                    black_box(vec_deque.push_back(it));
                }
            });
            (rq, vd)
        }
        Op::PushFront => {
            let (_, rq) = timed!({
                for it in 0..count {
                    black_box(ring_queue.push_front(it));
                }
            });
            let (_, vd) = timed!({
                for it in 0..count {
                    black_box(vec_deque.push_front(it));
                }
            });
            (rq, vd)
        }
        Op::PopBack => {
            ring_queue.extend(0..count);
            vec_deque.extend(0..count);
            let (_, rq) = timed!({
                for _ in 0..count {
                    black_box(ring_queue.pop_back());
                }
            });
            let (_, vd) = timed!({
                for _ in 0..count {
                    black_box(vec_deque.inner.pop_back());
                }
            });
            (rq, vd)
        }
        Op::PopFront => {
            ring_queue.extend(0..count);
            vec_deque.extend(0..count);
            let (_, rq) = timed!({
                for _ in 0..count {
                    black_box(ring_queue.pop_front());
                }
            });
            let (_, vd) = timed!({
                for _ in 0..count {
                    black_box(vec_deque.inner.pop_front());
                }
            });
            (rq, vd)
        }
        Op::Append => {
            let (_, rq) = timed!({ black_box(ring_queue.append(0..count)) });
            let (_, vd) = timed!({ black_box(vec_deque.append(0..count)) });
            (rq, vd)
        }
        Op::Prepend => {
            let (_, rq) = timed!({ black_box(ring_queue.prepend(0..count)) });
            let (_, vd) = timed!({ black_box(vec_deque.prepend(0..count)) });
            (rq, vd)
        }
        Op::All => return Err(miette::miette!("`all` must be expanded before measuring")),
    };

    // Both queues must end up holding the same thing, or the comparison is meaningless.
    if !ring_queue.iter().eq(vec_deque.inner.iter()) {
        return Err(miette::miette!(
            "RingQueue and VecDeque disagree after {op}: {ring_queue:?} vs {:?}",
            vec_deque.inner
        ));
    }

    tracing::debug!(
        message = "Tracker after measuring",
        op = %op,
        tracker = ?ring_queue.tracker()
    );

    Ok(Measurement {
        op,
        count,
        ring_queue: ring_queue_time,
        vec_deque: vec_deque_time,
    })
}

/// The [`VecDeque`] baseline, with the same eviction rules as [`RingQueue`].
#[derive(Debug)]
struct BoundedVecDeque {
    inner: VecDeque<usize>,
    capacity: usize,
}

impl BoundedVecDeque {
    fn new(capacity: usize) -> Self {
        Self {
            inner: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push_back(&mut self, value: usize) -> Option<usize> {
        let popped = if self.inner.len() == self.capacity {
            self.inner.pop_front()
        } else {
            None
        };
        self.inner.push_back(value);
        popped
    }

    fn push_front(&mut self, value: usize) -> Option<usize> {
        let popped = if self.inner.len() == self.capacity {
            self.inner.pop_back()
        } else {
            None
        };
        self.inner.push_front(value);
        popped
    }

    fn extend(&mut self, values: impl IntoIterator<Item = usize>) {
        for it in values {
            let _unused = self.push_back(it);
        }
    }

    fn append(&mut self, values: impl IntoIterator<Item = usize>) -> Vec<usize> {
        values
            .into_iter()
            .filter_map(|it| self.push_back(it))
            .collect()
    }

    fn prepend(
        &mut self,
        values: impl IntoIterator<Item = usize, IntoIter: DoubleEndedIterator>,
    ) -> Vec<usize> {
        let mut popped: Vec<usize> = values
            .into_iter()
            .rev()
            .filter_map(|it| self.push_front(it))
            .collect();
        popped.reverse();
        popped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_expands_to_every_op() {
        let ops = Op::All.expand();
        assert_eq!(ops.len(), 6);
        assert!(!ops.contains(&Op::All));
        assert_eq!(Op::Prepend.expand(), vec![Op::Prepend]);
        assert_eq!(Op::PushBack.to_string(), "push_back");
    }

    #[test]
    fn test_every_op_agrees_with_vec_deque() {
        let cli_arg = CLIArg::parse_from(["tq_ops_perf", "--capacity", "7", "--count", "20"]);
        for op in Op::All.expand() {
            assert!(measure(op, &cli_arg, || Untracked).is_ok());
            assert!(measure(op, &cli_arg, RevisionTracker::new).is_ok());
        }
    }

    #[test]
    fn test_capacity_too_big_to_allocate_is_reported() {
        let too_big = usize::MAX.to_string();
        let cli_arg = CLIArg::parse_from(["tq_ops_perf", "--capacity", too_big.as_str()]);
        let report = measure(Op::PushBack, &cli_arg, || Untracked).unwrap_err();
        assert!(report.to_string().contains(&format!("but was {too_big}")));
    }

    #[test]
    fn test_zero_capacity_is_reported() {
        let cli_arg = CLIArg::parse_from(["tq_ops_perf", "-c", "0"]);
        let report = measure(Op::PushBack, &cli_arg, || Untracked).unwrap_err();
        assert!(report.to_string().contains("capacity in 1..="));
    }
}
