/// Default number of individuals in a GA population.
pub const DEFAULT_POPULATION_SIZE: usize = 100;

/// Default generation count in `balanced` mode.
pub const DEFAULT_GENERATIONS: usize = 200;

/// Base per-individual mutation probability. The effective rate is scaled
/// up in early generations, capped at 1.0.
pub const DEFAULT_MUTATION_RATE: f32 = 0.15;

/// Probability that a parent pair is recombined instead of copied through.
pub const DEFAULT_CROSSOVER_RATE: f32 = 0.85;

/// Number of top individuals carried unchanged into the next generation.
pub const DEFAULT_ELITISM_COUNT: usize = 5;

/// Number of candidates drawn (with replacement) per tournament.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 5;

/// Starting temperature for the annealing polish.
pub const DEFAULT_INITIAL_TEMP: f32 = 1000.0;

/// Geometric cooling factor applied once per annealing iteration.
pub const DEFAULT_COOLING_RATE: f32 = 0.995;

/// Temperature floor; annealing stops once reached.
pub const DEFAULT_MIN_TEMP: f32 = 1.0;

/// Priority assumed for attendees that do not carry one (scale 1..=10).
pub const DEFAULT_PRIORITY: u8 = 5;

/// Probability of applying a targeted (fitness-guided) swap to a child.
pub const SMART_MUTATION_RATE: f32 = 0.3;

/// Probability of extending a swap mutation with a block swap.
pub const BLOCK_SWAP_RATE: f32 = 0.3;

/// Fraction of the initial population seeded from the greedy heuristic.
pub const GREEDY_SEED_FRACTION: f32 = 0.2;

/// Swap perturbations applied to each greedy-seeded individual.
pub const GREEDY_SEED_SHAKES: usize = 5;

/// Generations between cooperative yield points in the driver loop.
pub const YIELD_INTERVAL: usize = 5;
