/*!
 * Run Harness
 *
 * Spawns the two task threads of a strategy over fresh shared state, joins
 * them and reports the final counter with the elapsed wall time.
 */

use crate::core::config::HarnessConfig;
use crate::core::errors::{HarnessError, HarnessResult};
use crate::core::limits::{TASK_A_NAME, TASK_B_NAME, TASK_STACK_SIZE};
use crate::dispatch::Mode;
use crate::monitoring::RunSpan;
use crate::state::SharedState;
use crate::strategies::TaskBody;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Outcome of a run that terminated
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub mode: Mode,
    /// Counter value after both tasks joined
    pub counter: u64,
    /// Increments that overlapped another increment
    pub overlaps: u64,
    /// Wall time from spawn to join
    pub elapsed: Duration,
}

impl RunReport {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Runs one strategy per call on OS threads
#[derive(Debug, Clone, Default)]
pub struct RunHarness {
    config: HarnessConfig,
}

impl RunHarness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Run `mode` and block until both tasks finish
    ///
    /// For the deadlocking modes this never returns.
    pub fn run(&self, mode: Mode) -> HarnessResult<RunReport> {
        self.spawn(mode)?.join()
    }

    /// Spawn both tasks of `mode` and hand back a handle to the running pair
    pub fn spawn(&self, mode: Mode) -> HarnessResult<RunHandle> {
        let pair = mode.task_pair();
        let state = SharedState::with_config(self.config).shared();
        let span = RunSpan::new(mode.name());

        info!(mode = %mode, "spawning tasks");
        let start = Instant::now();

        let first = spawn_task(TASK_A_NAME, pair.first, &state, &span)?;
        let second = spawn_task(TASK_B_NAME, pair.second, &state, &span)?;

        Ok(RunHandle {
            mode,
            state,
            span,
            start,
            tasks: [(TASK_A_NAME, first), (TASK_B_NAME, second)],
        })
    }
}

fn spawn_task(
    name: &'static str,
    body: TaskBody,
    state: &Arc<SharedState>,
    run_span: &RunSpan,
) -> HarnessResult<JoinHandle<HarnessResult<()>>> {
    let state = Arc::clone(state);
    let span = run_span.span().clone();

    thread::Builder::new()
        .name(name.to_string())
        .stack_size(TASK_STACK_SIZE)
        .spawn(move || {
            let _entered = span.enter();
            body(&state)
        })
        .map_err(|source| HarnessError::Spawn { name, source })
}

/// Two running tasks and the state they share
pub struct RunHandle {
    mode: Mode,
    state: Arc<SharedState>,
    span: RunSpan,
    start: Instant,
    tasks: [(&'static str, JoinHandle<HarnessResult<()>>); 2],
}

impl RunHandle {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Shared state of the running pair
    pub fn state(&self) -> &Arc<SharedState> {
        &self.state
    }

    /// Join both tasks; blocks forever if they deadlocked
    pub fn join(self) -> HarnessResult<RunReport> {
        let RunHandle {
            mode,
            state,
            span,
            start,
            tasks,
        } = self;

        for (name, handle) in tasks {
            handle
                .join()
                .map_err(|_| HarnessError::TaskPanicked { name })??;
        }

        let report = RunReport {
            mode,
            counter: state.counter.get(),
            overlaps: state.counter.overlaps(),
            elapsed: start.elapsed(),
        };
        span.finish(report.counter, report.elapsed);
        Ok(report)
    }

    /// Join with a watchdog
    ///
    /// Returns `None` if the tasks are still running after `timeout`. The
    /// tasks and the joiner thread are then left behind; there is no way to
    /// stop a deadlocked pair.
    pub fn wait_timeout(self, timeout: Duration) -> Option<HarnessResult<RunReport>> {
        let mode = self.mode;
        let (tx, rx) = flume::bounded(1);

        let joiner = thread::Builder::new()
            .name(format!("join-{}", mode.name()))
            .spawn(move || {
                let _ = tx.send(self.join());
            });

        if let Err(source) = joiner {
            return Some(Err(HarnessError::Spawn {
                name: "joiner",
                source,
            }));
        }

        match rx.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(_) => {
                warn!(mode = %mode, timeout_ms = timeout.as_millis() as u64, "run did not finish");
                None
            }
        }
    }
}
