use crate::attendees::Roster;
use crate::config::Config;
use crate::consts::{GREEDY_SEED_FRACTION, GREEDY_SEED_SHAKES, SMART_MUTATION_RATE, YIELD_INTERVAL};
use crate::core_types::{Assignment, OptimizationOutcome};
use crate::error::{SeatResult, SeatingError};
use crate::fitness::Evaluator;
use crate::optimizer::{anneal::Annealer, crossover, initialization, mutation, Individual};
use crate::venue::Venue;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
pub struct ProgressUpdate {
    pub generation: usize,
    pub total_generations: usize,
    pub best_fitness: f32,
    /// Completed fraction of the generation loop, in [0, 1].
    pub progress: f32,
}

/// Per-generation progress channel. Returning `false` requests a
/// cooperative stop, same as tripping the cancel flag.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, update: &ProgressUpdate) -> bool;
}

impl<F> ProgressCallback for F
where
    F: Fn(&ProgressUpdate) -> bool + Send + Sync,
{
    fn on_progress(&self, update: &ProgressUpdate) -> bool {
        self(update)
    }
}

/// Hybrid GA + annealing driver. Owns the population and RNG for one
/// optimization call; venue and roster stay immutable throughout.
pub struct Optimizer<'a> {
    venue: &'a Venue,
    roster: &'a Roster,
    config: Config,
    cancel: Arc<AtomicBool>,
}

impl<'a> Optimizer<'a> {
    pub fn new(venue: &'a Venue, roster: &'a Roster, config: Config) -> SeatResult<Self> {
        if roster.is_empty() {
            return Err(SeatingError::Config("attendee list is empty".to_string()));
        }
        if roster.len() > venue.seat_count() {
            return Err(SeatingError::Config(format!(
                "{} attendees exceed {} seats",
                roster.len(),
                venue.seat_count()
            )));
        }
        config.weights.normalized()?;

        Ok(Optimizer {
            venue,
            roster,
            config,
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Shared flag for cooperative cancellation; set it (or return `false`
    /// from the callback) to stop at the next generation boundary.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    /// Replaces the run's cancel flag with one the caller already owns.
    pub fn attach_cancel_flag(&mut self, flag: Arc<AtomicBool>) {
        self.cancel = flag;
    }

    pub fn run(
        &self,
        seed: Option<u64>,
        callback: &dyn ProgressCallback,
    ) -> SeatResult<OptimizationOutcome> {
        let mut rng = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };

        let evaluator = Evaluator::new(self.venue, self.roster, &self.config.weights)?;
        let search = self.config.search;
        let (total_generations, sa_iterations) =
            self.config.mode.schedule(search.generations);
        let pop_size = search.population_size.max(2);
        let elites = search.elitism_count.min(pop_size);

        info!(
            "Optimizing {} attendees over {} seats ({} generations, population {})",
            self.roster.len(),
            self.venue.seat_count(),
            total_generations,
            pop_size
        );

        let mut population = self.initial_population(pop_size, &evaluator, &mut rng);
        sort_desc(&mut population);

        let mut best = population[0].clone();
        let mut history = Vec::with_capacity(total_generations);
        let mut cancelled = false;

        for generation in 0..total_generations {
            if self.cancel.load(Ordering::Relaxed) {
                cancelled = true;
                break;
            }

            let mut next: Vec<Assignment> = population[..elites]
                .iter()
                .map(|ind| ind.genes.clone())
                .collect();

            while next.len() < pop_size {
                let p1 = crossover::tournament_select(&population, search.tournament_size, &mut rng);
                let p2 = crossover::tournament_select(&population, search.tournament_size, &mut rng);
                let (mut c1, mut c2) =
                    crossover::offspring(&p1.genes, &p2.genes, search.crossover_rate, &mut rng);

                mutation::mutate(
                    &mut c1,
                    self.venue.seat_count(),
                    search.mutation_rate,
                    generation,
                    &mut rng,
                );
                mutation::mutate(
                    &mut c2,
                    self.venue.seat_count(),
                    search.mutation_rate,
                    generation,
                    &mut rng,
                );

                if rng.f32() < SMART_MUTATION_RATE {
                    let guide = evaluator.evaluate(&c1);
                    mutation::smart_mutation(&mut c1, self.venue, self.roster, &guide);
                }

                next.push(c1);
                if next.len() < pop_size {
                    next.push(c2);
                }
            }

            population = next
                .into_par_iter()
                .map(|genes| {
                    let fitness = evaluator.evaluate(&genes);
                    Individual { genes, fitness }
                })
                .collect();
            sort_desc(&mut population);

            if population[0].fitness.total > best.fitness.total {
                best = population[0].clone();
            }
            history.push(best.fitness.total);

            let update = ProgressUpdate {
                generation,
                total_generations,
                best_fitness: best.fitness.total,
                progress: (generation + 1) as f32 / total_generations as f32,
            };
            if !callback.on_progress(&update) {
                cancelled = true;
                break;
            }

            if (generation + 1) % YIELD_INTERVAL == 0 {
                std::thread::yield_now();
                if self.cancel.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
        }

        if cancelled {
            info!(
                "Optimization cancelled, returning best so far ({:.4})",
                best.fitness.total
            );
        } else if sa_iterations > 0 {
            let annealer = Annealer::new(&evaluator, self.config.anneal);
            let (refined, refined_fit) =
                annealer.refine(&best.genes, best.fitness, sa_iterations, &mut rng);
            if refined_fit.total > best.fitness.total {
                debug!(
                    "Annealing lifted the GA best {:.4} -> {:.4}",
                    best.fitness.total, refined_fit.total
                );
                best = Individual {
                    genes: refined,
                    fitness: refined_fit,
                };
            }
        }

        info!("Optimization finished with total {:.4}", best.fitness.total);

        Ok(OptimizationOutcome {
            solution: best.genes,
            fitness: best.fitness,
            history,
        })
    }

    /// Seeds a fifth of the population from the greedy heuristic (each
    /// shaken by a few swaps), the rest uniformly at random.
    fn initial_population(
        &self,
        pop_size: usize,
        evaluator: &Evaluator,
        rng: &mut fastrand::Rng,
    ) -> Vec<Individual> {
        let greedy_count = (GREEDY_SEED_FRACTION * pop_size as f32).floor() as usize;
        let greedy_base = initialization::greedy_assignment(self.venue, self.roster);

        let mut genomes: Vec<Assignment> = Vec::with_capacity(pop_size);
        for _ in 0..greedy_count {
            let mut genes = greedy_base.clone();
            for _ in 0..GREEDY_SEED_SHAKES {
                mutation::swap_mutation(&mut genes, rng);
            }
            genomes.push(genes);
        }
        while genomes.len() < pop_size {
            genomes.push(initialization::random_assignment(
                rng,
                self.venue,
                self.roster.len(),
            ));
        }

        genomes
            .into_par_iter()
            .map(|genes| {
                let fitness = evaluator.evaluate(&genes);
                Individual { genes, fitness }
            })
            .collect()
    }
}

fn sort_desc(population: &mut [Individual]) {
    population.sort_by(|a, b| b.fitness.total.partial_cmp(&a.fitness.total).unwrap());
}
