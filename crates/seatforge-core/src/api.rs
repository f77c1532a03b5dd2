use crate::attendees::{Attendee, Roster};
use crate::config::{Config, FitnessWeights, Mode};
use crate::core_types::OptimizationOutcome;
use crate::error::{SeatResult, SeatingError};
use crate::fitness::{Evaluator, Fitness};
use crate::optimizer::{Optimizer, ProgressCallback, ProgressUpdate};
use crate::plan::{seating_plan, PlanEntry};
use crate::venue::Venue;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Stateful facade over the optimization engine: configure once, feed a
/// venue and attendees, then run. One planner serializes its own calls;
/// `stop()` may be invoked from another thread mid-run.
pub struct SeatingPlanner {
    config: Config,
    venue: Option<Venue>,
    roster: Option<Roster>,
    cancel: Arc<std::sync::atomic::AtomicBool>,
    last: Option<OptimizationOutcome>,
}

impl Default for SeatingPlanner {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Progress sink for callers that do not track progress.
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _update: &ProgressUpdate) -> bool {
        true
    }
}

/// Cloneable handle onto a planner's cancel flag. Hand it to another
/// thread (or a progress callback) to stop an in-flight `optimize`.
#[derive(Clone)]
pub struct StopHandle(Arc<std::sync::atomic::AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

impl SeatingPlanner {
    pub fn new(config: Config) -> Self {
        SeatingPlanner {
            config,
            venue: None,
            roster: None,
            cancel: Arc::new(std::sync::atomic::AtomicBool::new(false)),
            last: None,
        }
    }

    pub fn configure(&mut self, config: Config) {
        self.config = config;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_venue(&mut self, rows: usize, cols: usize, vip_rows: usize) -> SeatResult<()> {
        self.venue = Some(Venue::new(rows, cols, vip_rows)?);
        Ok(())
    }

    pub fn set_attendees(&mut self, attendees: Vec<Attendee>) {
        self.roster = Some(Roster::new(attendees));
    }

    /// Replaces the four weights, renormalized to sum to 1.
    pub fn update_weights(
        &mut self,
        friend: f32,
        vip: f32,
        group: f32,
        distance: f32,
    ) -> SeatResult<()> {
        self.config.weights = FitnessWeights {
            friend,
            vip,
            group,
            distance,
        }
        .normalized()?;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
    }

    /// Requests cooperative cancellation of a running `optimize` call.
    /// The run stops at the next generation boundary and still returns
    /// its best-so-far assignment.
    pub fn stop(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Detached handle for stopping a run the caller no longer has a
    /// planner reference for (e.g. from a worker thread).
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(self.cancel.clone())
    }

    /// Runs the full pipeline: greedy/random seeding, the GA generation
    /// loop, then annealing polish. Fails fast (before touching any
    /// state) when the venue is unset, the roster is empty, or the
    /// attendees outnumber the seats.
    pub fn optimize(
        &mut self,
        seed: Option<u64>,
        progress: &dyn ProgressCallback,
    ) -> SeatResult<OptimizationOutcome> {
        let venue = self
            .venue
            .as_ref()
            .ok_or_else(|| SeatingError::Config("venue is not configured".to_string()))?;
        let roster = self
            .roster
            .as_ref()
            .ok_or_else(|| SeatingError::Config("attendees are not set".to_string()))?;

        let mut optimizer = Optimizer::new(venue, roster, self.config.clone())?;

        self.cancel.store(false, Ordering::Relaxed);
        optimizer.attach_cancel_flag(self.cancel.clone());

        let outcome = optimizer.run(seed, progress)?;
        self.last = Some(outcome.clone());
        Ok(outcome)
    }

    /// Re-scores an arbitrary assignment against the current venue,
    /// attendees, and weights.
    pub fn score(&self, assignment: &[usize]) -> SeatResult<Fitness> {
        let venue = self
            .venue
            .as_ref()
            .ok_or_else(|| SeatingError::Config("venue is not configured".to_string()))?;
        let roster = self
            .roster
            .as_ref()
            .ok_or_else(|| SeatingError::Config("attendees are not set".to_string()))?;
        if assignment.len() != roster.len() {
            return Err(SeatingError::Config(format!(
                "assignment covers {} attendees, roster has {}",
                assignment.len(),
                roster.len()
            )));
        }
        if !crate::optimizer::is_valid_assignment(assignment, venue.seat_count()) {
            return Err(SeatingError::Config(
                "assignment repeats or exceeds seat positions".to_string(),
            ));
        }
        let evaluator = Evaluator::new(venue, roster, &self.config.weights)?;
        Ok(evaluator.evaluate(assignment))
    }

    /// Decodes a solution (or the last optimized one) into display rows.
    pub fn seating_plan(&self, solution: Option<&[usize]>) -> SeatResult<Vec<PlanEntry>> {
        let venue = self
            .venue
            .as_ref()
            .ok_or_else(|| SeatingError::Config("venue is not configured".to_string()))?;
        let roster = self
            .roster
            .as_ref()
            .ok_or_else(|| SeatingError::Config("attendees are not set".to_string()))?;

        let solution = match solution {
            Some(s) => s,
            None => self
                .last
                .as_ref()
                .map(|o| o.solution.as_slice())
                .ok_or_else(|| {
                    SeatingError::Config("no solution available; run optimize first".to_string())
                })?,
        };

        seating_plan(venue, roster, solution)
    }
}
