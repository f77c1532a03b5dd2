use crate::config::AnnealParams;
use crate::core_types::{Assignment, SeatPos};
use crate::fitness::{Evaluator, Fitness};
use crate::optimizer::mutation;
use fastrand::Rng;

/// Simulated-annealing refinement over a single assignment: geometric
/// cooling with Metropolis acceptance, alternating random swaps with
/// swaps targeted at the weakest sub-score.
pub struct Annealer<'a> {
    evaluator: &'a Evaluator<'a>,
    params: AnnealParams,
}

impl<'a> Annealer<'a> {
    pub fn new(evaluator: &'a Evaluator<'a>, params: AnnealParams) -> Self {
        Annealer { evaluator, params }
    }

    /// Runs up to `iterations` neighbor moves starting from `start`,
    /// returning the best assignment seen (never worse than the input).
    pub fn refine(
        &self,
        start: &[SeatPos],
        start_fitness: Fitness,
        iterations: usize,
        rng: &mut Rng,
    ) -> (Assignment, Fitness) {
        let mut current: Assignment = start.to_vec();
        let mut current_fit = start_fitness;
        let mut best = current.clone();
        let mut best_fit = current_fit;
        let mut temperature = self.params.initial_temp;

        if current.len() < 2 {
            return (best, best_fit);
        }

        for _ in 0..iterations {
            if temperature <= self.params.min_temp {
                break;
            }

            let mut neighbor = current.clone();
            let targeted = rng.f32() < 0.5;
            let swap = if targeted {
                self.find_weak_area(&neighbor, &current_fit)
            } else {
                None
            };
            match swap {
                Some((a, b)) => neighbor.swap(a, b),
                None => mutation::swap_mutation(&mut neighbor, rng),
            }

            let neighbor_fit = self.evaluator.evaluate(&neighbor);
            let delta = neighbor_fit.total - current_fit.total;

            if delta > 0.0 || rng.f32() < (delta / temperature).exp() {
                current = neighbor;
                current_fit = neighbor_fit;
                if current_fit.total > best_fit.total {
                    best = current.clone();
                    best_fit = current_fit;
                }
            }

            temperature *= self.params.cooling_rate;
        }

        (best, best_fit)
    }

    /// Picks the swap most likely to lift the weakest sub-score: misplaced
    /// VIPs first, then a group member stranded away from its group.
    fn find_weak_area(&self, genes: &[SeatPos], fitness: &Fitness) -> Option<(usize, usize)> {
        let venue = self.evaluator.venue();
        let roster = self.evaluator.roster();

        if fitness.vip_placement < 0.8 {
            if let Some(pair) = mutation::vip_swap_pair(genes, venue, roster) {
                return Some(pair);
            }
        }

        if fitness.group_cohesion < 0.7 {
            for members in roster.groups.values() {
                if members.len() < 2 {
                    continue;
                }
                let Some(lonely) = members.iter().copied().find(|&i| {
                    members
                        .iter()
                        .all(|&j| j == i || venue.manhattan(genes[i], genes[j]) > 2)
                }) else {
                    continue;
                };

                for &anchor in members {
                    if anchor == lonely {
                        continue;
                    }
                    for k in 0..genes.len() {
                        if members.contains(&k) {
                            continue;
                        }
                        if venue.manhattan(genes[k], genes[anchor]) == 1 {
                            return Some((lonely, k));
                        }
                    }
                }
            }
        }

        None
    }
}
