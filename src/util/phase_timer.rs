//! Wall-clock timing of pick query phases.

use web_time::{Duration, Instant};

/// Per-phase wall-clock timing for a single query, reported through `log`.
#[derive(Debug)]
pub struct PhaseTimer {
    /// Prefix for log lines.
    label: &'static str,
    /// Whether anything is measured or logged at all.
    enabled: bool,
    /// Query start.
    started: Instant,
    /// End of the previous phase.
    last: Instant,
    /// Completed phases in order.
    phases: Vec<(&'static str, Duration)>,
}

impl PhaseTimer {
    /// Start timing. A disabled timer records nothing.
    pub fn start(label: &'static str, enabled: bool) -> Self {
        let now = Instant::now();
        Self {
            label,
            enabled,
            started: now,
            last: now,
            phases: Vec::new(),
        }
    }

    /// Close the current phase under `phase`.
    pub fn lap(&mut self, phase: &'static str) {
        if !self.enabled {
            return;
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        log::debug!(
            "{}: {phase} took {:.3} ms",
            self.label,
            elapsed.as_secs_f64() * 1000.0
        );
        self.phases.push((phase, elapsed));
    }

    /// Log the total and return the recorded phases.
    pub fn finish(self) -> Vec<(&'static str, Duration)> {
        if self.enabled {
            log::debug!(
                "{}: total {:.3} ms",
                self.label,
                self.started.elapsed().as_secs_f64() * 1000.0
            );
        }
        self.phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_phases_in_order() {
        let mut timer = PhaseTimer::start("test", true);
        timer.lap("first");
        timer.lap("second");
        let phases = timer.finish();
        let names: Vec<_> = phases.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn disabled_timer_records_nothing() {
        let mut timer = PhaseTimer::start("test", false);
        timer.lap("ignored");
        assert!(timer.finish().is_empty());
    }
}
