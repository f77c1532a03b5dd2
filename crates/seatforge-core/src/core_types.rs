use crate::fitness::Fitness;
use serde::{Deserialize, Serialize};

/// Index into the venue's row-major seat table.
pub type SeatPos = usize;

/// One candidate solution: `assignment[i]` is the seat position occupied by
/// attendee `i`. Valid assignments hold pairwise-distinct positions.
pub type Assignment = Vec<SeatPos>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationOutcome {
    pub solution: Assignment,
    pub fitness: Fitness,
    /// Best total per generation. Non-decreasing by construction.
    pub history: Vec<f32>,
}
