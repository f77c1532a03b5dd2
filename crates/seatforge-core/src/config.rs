use crate::consts::*;
use crate::error::{SeatResult, SeatingError};
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: GaParams,
    #[command(flatten)]
    pub anneal: AnnealParams,
    #[command(flatten)]
    pub weights: FitnessWeights,

    #[arg(long, value_enum, default_value_t = Mode::Balanced)]
    #[serde(default)]
    pub mode: Mode,
}

#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GaParams {
    #[arg(long, default_value_t = DEFAULT_POPULATION_SIZE, help = "Individuals per generation")]
    pub population_size: usize,

    #[arg(long, default_value_t = DEFAULT_GENERATIONS, help = "Generations in balanced mode")]
    pub generations: usize,

    #[arg(long, default_value_t = DEFAULT_MUTATION_RATE, help = "Base mutation probability")]
    pub mutation_rate: f32,

    #[arg(long, default_value_t = DEFAULT_CROSSOVER_RATE, help = "Recombination probability")]
    pub crossover_rate: f32,

    #[arg(long, default_value_t = DEFAULT_ELITISM_COUNT, help = "Individuals carried over unchanged")]
    pub elitism_count: usize,

    #[arg(long, default_value_t = DEFAULT_TOURNAMENT_SIZE, help = "Tournament draw size")]
    pub tournament_size: usize,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            generations: DEFAULT_GENERATIONS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            crossover_rate: DEFAULT_CROSSOVER_RATE,
            elitism_count: DEFAULT_ELITISM_COUNT,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
        }
    }
}

#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealParams {
    #[arg(long, default_value_t = DEFAULT_INITIAL_TEMP, help = "Annealing start temperature")]
    pub initial_temp: f32,

    #[arg(long, default_value_t = DEFAULT_COOLING_RATE, help = "Geometric cooling factor")]
    pub cooling_rate: f32,

    #[arg(long, default_value_t = DEFAULT_MIN_TEMP, help = "Annealing stop temperature")]
    pub min_temp: f32,
}

impl Default for AnnealParams {
    fn default() -> Self {
        Self {
            initial_temp: DEFAULT_INITIAL_TEMP,
            cooling_rate: DEFAULT_COOLING_RATE,
            min_temp: DEFAULT_MIN_TEMP,
        }
    }
}

/// Relative importance of the four soft constraints. Only ratios matter;
/// the evaluator renormalizes to a unit sum.
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessWeights {
    #[arg(long = "weight-friend", default_value_t = 0.25)]
    pub friend: f32,

    #[arg(long = "weight-vip", default_value_t = 0.25)]
    pub vip: f32,

    #[arg(long = "weight-group", default_value_t = 0.25)]
    pub group: f32,

    #[arg(long = "weight-distance", default_value_t = 0.25)]
    pub distance: f32,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            friend: 0.25,
            vip: 0.25,
            group: 0.25,
            distance: 0.25,
        }
    }
}

impl FitnessWeights {
    pub fn sum(&self) -> f32 {
        self.friend + self.vip + self.group + self.distance
    }

    /// Scales the four weights to sum to 1. Errors when all are zero
    /// (or any is negative), since the weighted total would be undefined.
    pub fn normalized(&self) -> SeatResult<FitnessWeights> {
        if self.friend < 0.0 || self.vip < 0.0 || self.group < 0.0 || self.distance < 0.0 {
            return Err(SeatingError::Weights(
                "weights must be non-negative".to_string(),
            ));
        }
        let sum = self.sum();
        if sum <= 0.0 {
            return Err(SeatingError::Weights(
                "at least one weight must be positive".to_string(),
            ));
        }
        Ok(FitnessWeights {
            friend: self.friend / sum,
            vip: self.vip / sum,
            group: self.group / sum,
            distance: self.distance / sum,
        })
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Fast,
    #[default]
    Balanced,
    Thorough,
}

impl Mode {
    /// Resolves to `(total_generations, annealing_iterations)`.
    /// `balanced` runs the configured generation count; the presets
    /// override it.
    pub fn schedule(self, configured_generations: usize) -> (usize, usize) {
        match self {
            Mode::Fast => (50, 20),
            Mode::Balanced => (configured_generations, 100),
            Mode::Thorough => (500, 200),
        }
    }
}
