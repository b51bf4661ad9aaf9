//! Fixed-step frame clock
//!
//! The host calls `advance` from a one-shot timer with the current time. The
//! clock turns wall time into a number of fixed steps and tells the host how
//! long to wait before calling again.

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS, MIN_DELAY_MS, STEP_MS};

/// Work for one timer callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Wall time since the previous callback (clamped)
    pub elapsed_ms: f32,
    /// Fixed steps of `STEP_MS` to run now
    pub steps: u32,
}

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    accumulator_ms: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for time up to `now_ms` and return the steps that are due
    pub fn advance(&mut self, now_ms: f64) -> Frame {
        let elapsed_ms = match self.last_ms {
            Some(last) => ((now_ms - last).max(0.0) as f32).min(MAX_FRAME_MS),
            None => STEP_MS,
        };
        self.last_ms = Some(now_ms);
        self.accumulator_ms += elapsed_ms;

        let mut steps = 0;
        while self.accumulator_ms >= STEP_MS && steps < MAX_SUBSTEPS {
            self.accumulator_ms -= STEP_MS;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS && self.accumulator_ms >= STEP_MS {
            log::debug!("Dropping {:.0}ms of backlog", self.accumulator_ms);
            self.accumulator_ms %= STEP_MS;
        }

        Frame { elapsed_ms, steps }
    }
}

/// Delay before the next timer callback: aim for one step per callback but
/// never re-arm faster than `MIN_DELAY_MS`.
pub fn next_delay_ms(elapsed_ms: f32) -> f32 {
    (STEP_MS - elapsed_ms).max(MIN_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_delay_clamp() {
        assert_eq!(next_delay_ms(0.0), 30.0);
        assert_eq!(next_delay_ms(12.0), 18.0);
        assert_eq!(next_delay_ms(20.0), 10.0);
        assert_eq!(next_delay_ms(45.0), 10.0);
    }

    #[test]
    fn test_first_call_runs_one_step() {
        let mut clock = FrameClock::new();
        let frame = clock.advance(1000.0);
        assert_eq!(frame.steps, 1);
        assert_eq!(frame.elapsed_ms, STEP_MS);
    }

    #[test]
    fn test_accumulates_partial_steps() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        assert_eq!(clock.advance(20.0).steps, 0);
        assert_eq!(clock.advance(40.0).steps, 1);
        assert_eq!(clock.advance(100.0).steps, 2);
    }

    #[test]
    fn test_long_pause_is_clamped() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        let frame = clock.advance(60_000.0);
        assert_eq!(frame.elapsed_ms, MAX_FRAME_MS);
        assert_eq!(frame.steps, MAX_SUBSTEPS);
        // Backlog beyond the cap is dropped
        assert_eq!(clock.advance(60_000.0).steps, 0);
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut clock = FrameClock::new();
        clock.advance(500.0);
        let frame = clock.advance(400.0);
        assert_eq!(frame.elapsed_ms, 0.0);
        assert_eq!(frame.steps, 0);
    }
}
