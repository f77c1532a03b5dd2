use crate::core_types::{Assignment, SeatPos};
use crate::optimizer::Individual;
use fastrand::Rng;

/// Tournament selection: draw `k` individuals uniformly with replacement,
/// return the one with the highest total (first seen wins ties).
pub fn tournament_select<'p>(population: &'p [Individual], k: usize, rng: &mut Rng) -> &'p Individual {
    let mut best = &population[rng.usize(0..population.len())];
    for _ in 1..k {
        let challenger = &population[rng.usize(0..population.len())];
        if challenger.fitness.total > best.fitness.total {
            best = challenger;
        }
    }
    best
}

/// Order-preserving two-point crossover. With probability `rate`, a random
/// segment of each parent is kept in place and the gaps are filled by
/// walking the other parent from just past the segment, skipping seats the
/// child already holds. Otherwise both parents are copied through.
///
/// Children are always valid assignments, even when the parents occupy
/// different seat subsets: the walk can only run dry on genes the kept
/// segment already provided.
pub fn offspring(
    p1: &[SeatPos],
    p2: &[SeatPos],
    rate: f32,
    rng: &mut Rng,
) -> (Assignment, Assignment) {
    if rng.f32() >= rate {
        return (p1.to_vec(), p2.to_vec());
    }

    let n = p1.len();
    let start = rng.usize(0..n);
    let end = rng.usize(start..n);

    (
        ox_child(p1, p2, start, end),
        ox_child(p2, p1, start, end),
    )
}

fn ox_child(keeper: &[SeatPos], donor: &[SeatPos], start: usize, end: usize) -> Assignment {
    let n = keeper.len();
    let span = keeper
        .iter()
        .chain(donor)
        .max()
        .map_or(0, |&m| m + 1);
    let mut held = vec![false; span];
    let mut child = vec![usize::MAX; n];

    for i in start..=end {
        child[i] = keeper[i];
        held[keeper[i]] = true;
    }

    let mut write = (end + 1) % n;
    let mut read = (end + 1) % n;
    for _ in 0..n {
        let gene = donor[read];
        read = (read + 1) % n;
        if !held[gene] && child[write] == usize::MAX {
            child[write] = gene;
            held[gene] = true;
            write = (write + 1) % n;
        }
    }

    child
}
