pub mod anneal;
pub mod crossover;
pub mod initialization;
pub mod mutation;
pub mod runner;

pub use self::anneal::Annealer;
pub use self::runner::{Optimizer, ProgressCallback, ProgressUpdate};

use crate::core_types::SeatPos;
use crate::fitness::Fitness;

/// One member of the GA population.
#[derive(Debug, Clone)]
pub struct Individual {
    pub genes: Vec<SeatPos>,
    pub fitness: Fitness,
}

/// True when `genes` holds pairwise-distinct seat positions inside the venue.
pub fn is_valid_assignment(genes: &[SeatPos], seat_count: usize) -> bool {
    let mut seen = vec![false; seat_count];
    for &pos in genes {
        if pos >= seat_count || seen[pos] {
            return false;
        }
        seen[pos] = true;
    }
    true
}
