use crate::event::EventFile;
use crate::reports;
use clap::Args;
use seatforge_core::api::SeatingPlanner;
use seatforge_core::config::Config;
use seatforge_core::error::SeatResult;
use serde::Deserialize;
use std::fs;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Assignment to score: either a bare position array or the JSON
    /// written by `optimize --output`
    #[arg(short, long)]
    pub plan: String,
}

#[derive(Deserialize)]
struct SavedResult {
    solution: Vec<usize>,
}

pub fn run(args: ValidateArgs, event: &EventFile) -> SeatResult<()> {
    let content = fs::read_to_string(&args.plan)?;
    let solution: Vec<usize> = match serde_json::from_str::<Vec<usize>>(&content) {
        Ok(positions) => positions,
        Err(_) => serde_json::from_str::<SavedResult>(&content)?.solution,
    };

    let mut planner = SeatingPlanner::new(args.config.clone());
    planner.set_venue(event.venue.rows, event.venue.cols, event.venue.vip_rows)?;
    planner.set_attendees(event.attendees.clone());

    let fitness = planner.score(&solution)?;
    reports::print_fitness_summary(&fitness);

    let plan = planner.seating_plan(Some(&solution))?;
    reports::print_seating_chart(event.venue.rows, event.venue.cols, &plan);

    Ok(())
}
