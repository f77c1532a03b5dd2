use crate::event::EventFile;
use crate::reports;
use clap::Args;
use seatforge_core::api::SeatingPlanner;
use seatforge_core::config::Config;
use seatforge_core::error::SeatResult;
use seatforge_core::optimizer::{ProgressCallback, ProgressUpdate};
use serde_json::json;
use std::fs;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub config: Config,

    /// RNG seed for reproducible runs
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Wall-clock cap in seconds; returns the best found so far
    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    /// Write {solution, fitness, history, plan} as JSON
    #[arg(short = 'o', long)]
    pub output: Option<String>,
}

struct CliProgress {
    started: Instant,
    deadline: Option<Duration>,
}

impl ProgressCallback for CliProgress {
    fn on_progress(&self, update: &ProgressUpdate) -> bool {
        if update.generation % 10 == 0 || update.generation + 1 == update.total_generations {
            info!(
                "Gen {:4}/{} | Best: {:.4} | {:3.0}%",
                update.generation,
                update.total_generations,
                update.best_fitness,
                update.progress * 100.0
            );
        }
        match self.deadline {
            Some(limit) => self.started.elapsed() < limit,
            None => true,
        }
    }
}

pub fn run(args: OptimizeArgs, event: &EventFile) -> SeatResult<()> {
    let mut planner = SeatingPlanner::new(args.config.clone());
    planner.set_venue(event.venue.rows, event.venue.cols, event.venue.vip_rows)?;
    planner.set_attendees(event.attendees.clone());

    let progress = CliProgress {
        started: Instant::now(),
        deadline: args.time.map(Duration::from_secs),
    };

    let outcome = planner.optimize(args.seed, &progress)?;
    let plan = planner.seating_plan(None)?;

    reports::print_fitness_summary(&outcome.fitness);
    reports::print_seating_chart(event.venue.rows, event.venue.cols, &plan);

    if let Some(path) = &args.output {
        let payload = json!({
            "solution": outcome.solution,
            "fitness": outcome.fitness,
            "history": outcome.history,
            "plan": plan,
        });
        fs::write(path, serde_json::to_string_pretty(&payload)?)?;
        info!("Result written to {}", path);
    }

    Ok(())
}
