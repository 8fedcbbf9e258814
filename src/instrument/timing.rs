//! Caller-supplied start/end timing hooks.
//!
//! The harness brackets its phases (generation, sort, first render) with
//! `start(label)` / `end(label)` on whatever hook the caller passes in.

use std::collections::HashMap;
use std::time::Duration;
use web_time::Instant;

/// Receives phase boundaries from the harness.
pub trait TimingHook {
    fn start(&mut self, label: &str);

    /// Close `label`. Returns the elapsed time when the hook tracks it.
    fn end(&mut self, label: &str) -> Option<Duration>;
}

/// Discards all timing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTiming;

impl TimingHook for NoopTiming {
    fn start(&mut self, _label: &str) {}

    fn end(&mut self, _label: &str) -> Option<Duration> {
        None
    }
}

/// Measures labels with a monotonic clock and logs the elapsed time.
#[derive(Debug, Default)]
pub struct InstantTiming {
    started: HashMap<String, Instant>,
}

impl InstantTiming {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimingHook for InstantTiming {
    fn start(&mut self, label: &str) {
        self.started.insert(label.to_string(), Instant::now());
    }

    fn end(&mut self, label: &str) -> Option<Duration> {
        let Some(started) = self.started.remove(label) else {
            tracing::debug!(label, "timing end without start");
            return None;
        };
        let elapsed = started.elapsed();
        tracing::info!(
            label,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "phase timing"
        );
        Some(elapsed)
    }
}

/// Forwards boundaries to a pair of callbacks.
pub struct CallbackTiming<S, E> {
    on_start: S,
    on_end: E,
}

impl<S, E> CallbackTiming<S, E>
where
    S: FnMut(&str),
    E: FnMut(&str),
{
    pub fn new(on_start: S, on_end: E) -> Self {
        Self { on_start, on_end }
    }
}

impl<S, E> TimingHook for CallbackTiming<S, E>
where
    S: FnMut(&str),
    E: FnMut(&str),
{
    fn start(&mut self, label: &str) {
        (self.on_start)(label);
    }

    fn end(&mut self, label: &str) -> Option<Duration> {
        (self.on_end)(label);
        None
    }
}
